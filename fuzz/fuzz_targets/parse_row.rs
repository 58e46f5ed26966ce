#![no_main]

use libfuzzer_sys::fuzz_target;
use satstats::reader::{
    parse_range, parse_rank_row, parse_scale_row, parse_score_row, split_record,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let fields = split_record(line);
        for col in 0..6 {
            let _ = parse_scale_row(&fields, col);
        }
        let _ = parse_rank_row(&fields);
        let _ = parse_score_row(&fields);
        for field in &fields {
            let _ = parse_range(field);
        }
    }
});
