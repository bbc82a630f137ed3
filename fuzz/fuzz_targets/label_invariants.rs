#![no_main]
use huffman_label::{label, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, Vec<i64>)| {
    let (base, freqs) = data;
    let base = base as usize;

    let labels = match label(base, &freqs) {
        Ok(labels) => labels,
        Err(e) => {
            assert!(base < 2);
            assert_eq!(e, Error::InvalidBase(base));
            return;
        }
    };

    assert_eq!(labels.len(), freqs.len());
    for (i, left) in labels.iter().enumerate() {
        assert!(!left.is_empty());
        assert!(left.iter().all(|&s| s < base));
        for (j, right) in labels.iter().enumerate() {
            if i != j {
                assert!(!left.starts_with(right));
            }
        }
    }
});
