#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Building from arbitrary record batches must never panic or hang.
        if let Ok(records) = serde_json::from_str::<Vec<grouptree::GroupRecord>>(text) {
            let _ = grouptree::GroupTree::build(&records, &[]);
        }
    }
});
