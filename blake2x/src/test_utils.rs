use core::fmt;
use core::ops;
use proptest::arbitrary::{any, Arbitrary};
use proptest::array;
use proptest::strategy::{BoxedStrategy, Strategy};

/// A byte list with a compile-time capacity and a runtime length.
#[derive(Clone, Copy)]
pub struct BoundList<const C: usize> {
    inner: [u8; C],
    len: usize
}

impl<const C: usize> fmt::Debug for BoundList<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut dbg = f.debug_struct("BoundList");
        dbg.field("len", &self.len());

        if C <= 32 {
            dbg.field("inner", &self.as_slice());
        }

        dbg.finish()
    }
}

impl<const C: usize> Default for BoundList<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> BoundList<C> {
    pub const fn new_with_unchecked(inner: [u8; C], len: usize) -> Self {
        Self { inner, len }
    }

    #[inline]
    pub const fn new() -> Self {
        Self::new_with_unchecked([0u8; C], 0)
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner[..self.len]
    }
}

impl<const C: usize> PartialEq for BoundList<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const C: usize> ops::Deref for BoundList<C> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<const C: usize> Arbitrary for BoundList<C> {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (0..=C, array::uniform::<_, C>(any::<u8>()))
            .prop_map(|(len, buf)| BoundList::new_with_unchecked(buf, len))
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

/// A list of up to `C` arbitrary elements, used for splitting input across many updates.
#[derive(Clone, Copy)]
pub struct AnyList<const C: usize, T: Copy + Default> {
    inner: [T; C],
    len: usize
}

impl<const C: usize, T: fmt::Debug + Copy + Default> fmt::Debug for AnyList<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AnyList")
            .field("len", &self.len)
            .field("inner", &self.as_slice())
            .finish()
    }
}

impl<const C: usize, T: Copy + Default> AnyList<C, T> {
    pub fn new_with_slice(slice: &[T]) -> Self {
        debug_assert!(slice.len() <= C);

        let mut inner = [T::default(); C];
        inner[..slice.len()].copy_from_slice(slice);

        Self { inner, len: slice.len() }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner[..self.len]
    }
}

impl<const C: usize, const B: usize> AnyList<C, BoundList<B>> {
    pub fn join(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity((C * B) / 2);

        for e in self.as_slice() {
            out.extend_from_slice(e.as_slice());
        }

        out
    }
}

impl<const C: usize, T> Arbitrary for AnyList<C, T>
    where
        T: Arbitrary + Copy + Default + 'static,
        <T as Arbitrary>::Strategy: 'static
{
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (0..=C, array::uniform::<_, C>(any::<T>()))
            .prop_map(|(len, buf)| Self::new_with_slice(&buf[..len]))
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
