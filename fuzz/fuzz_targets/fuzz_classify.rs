#![no_main]

use libfuzzer_sys::fuzz_target;
use resift::{Classification, Classifier};

fuzz_target!(|data: &[u8]| {
    let classifier = Classifier::builtin();
    match classifier.classify(data) {
        Classification::Matched(sig) => {
            assert!(data.starts_with(sig.magic()));
            assert!(
                !classifier
                    .table()
                    .iter()
                    .any(|other| other.len() > sig.len() && other.matches(data))
            );
        }
        Classification::Unidentified => {
            assert!(!classifier.table().iter().any(|sig| sig.matches(data)));
        }
    }
});
