#![no_main]

use libfuzzer_sys::fuzz_target;

use bnfib_core::{compute, Mode};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First 2 bytes as n, capped at 5000 since the linear modes are O(n) additions
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 5_000;

    let reference = compute(Mode::FastDoublingV1, n).expect("fast-doubling-v1 failed");
    for mode in Mode::ALL {
        let value = compute(mode, n).expect("compute failed");
        assert_eq!(value, reference, "{mode} differs at n={n}");
    }
});
