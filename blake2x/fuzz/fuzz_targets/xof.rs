#![no_main]

use libfuzzer_sys::fuzz_target;
use blake2x::Blake2xsParams;

fuzz_target!(|data: &[u8]| {
    let Some((&len, data)) = data.split_first() else { return };
    let len = u32::from(len) * 7 + 1;

    let mut params = Blake2xsParams::new();
    params.output_len(len).unwrap();

    let mut xof = params.to_blake2x();
    xof.update(data).unwrap();
    let reader = xof.finalize_xof().unwrap();

    let mut whole = vec![0u8; len as usize];
    reader.clone().squeeze(&mut whole).unwrap();

    for (k, chunk) in whole.chunks(32).enumerate() {
        assert_eq!(reader.node(k as u32).unwrap(), *chunk);
    }
});
