#![no_main]

use libfuzzer_sys::fuzz_target;

use multiples_core::progress::CancellationToken;
use multiples_core::worker::{sum_multiple_with, SumStrategy};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // First 4 bytes pick the multiple, next 4 the bound. The bound stays
    // small enough for the iterative walk to finish quickly.
    let multiple = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let total = u64::from(u32::from_le_bytes([data[4], data[5], data[6], data[7]]) % 1_000_000);

    let cancel = CancellationToken::new();
    let iterative = sum_multiple_with(multiple, total, SumStrategy::Iterative, &cancel);
    let closed = sum_multiple_with(multiple, total, SumStrategy::ClosedForm, &cancel);

    assert_eq!(
        iterative, closed,
        "strategies disagree for multiple={multiple} total={total}"
    );
});
