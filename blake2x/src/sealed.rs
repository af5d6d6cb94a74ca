pub trait Sealed {}

impl Sealed for u32 {}
impl Sealed for u64 {}
