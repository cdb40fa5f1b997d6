#![no_main]

use libfuzzer_sys::fuzz_target;

use multiples_core::{calculate_concurrent, calculate_one_loop};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Two bytes of bound, then up to 8 multiples of one byte each.
    let total = u64::from(u16::from_le_bytes([data[0], data[1]]));
    let multiples: Vec<u32> = data[2..].iter().take(8).map(|&b| u32::from(b)).collect();

    let scanned = calculate_one_loop(total, &multiples);
    if multiples.contains(&0) {
        assert!(scanned.is_err(), "zero multiple accepted by scanner");
        assert!(calculate_concurrent(total, &multiples).is_err());
        return;
    }

    // The scanner excludes the bound and the workers include it.
    let concurrent = calculate_concurrent(total.saturating_sub(1), &multiples);
    assert_eq!(scanned, concurrent, "total={total} multiples={multiples:?}");
});
