#![no_main]

use libfuzzer_sys::fuzz_target;
use blake2x::Blake2bParams;

fuzz_target!(|data: &[u8]| {
    let Some((&split, data)) = data.split_first() else { return };
    let split = usize::from(split).min(data.len());

    let params = Blake2bParams::new();
    let mut state = params.to_state();
    state.update(&data[..split]).unwrap();
    state.update(&data[split..]).unwrap();

    assert_eq!(state.finalize().unwrap(), params.hash(data));
});
