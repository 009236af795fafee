#![no_main]
use libfuzzer_sys::{fuzz_target, Corpus};
use marked_days::fuzzing::{run_fuzz_store, Data};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_store(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
