#![no_main]

use libfuzzer_sys::fuzz_target;
use satstats::interp::Interpolator;

fuzz_target!(|data: &[u8]| {
    // Pairs of (raw, scaled) bytes followed by a query.
    if data.len() < 5 {
        return;
    }
    let pairs: Vec<(i64, f64)> = data[1..]
        .chunks_exact(2)
        .map(|c| (c[0] as i64, c[1] as f64 * 4.0))
        .collect();
    if let Ok(scale) = Interpolator::from_pairs(&pairs) {
        let q = data[0] as f64;
        let _ = scale.lookup(q);
        let _ = scale.reverse(q * 4.0);
    }
});
