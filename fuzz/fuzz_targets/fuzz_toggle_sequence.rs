#![no_main]

use grouptree::{GroupRecord, GroupTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let records = [
        GroupRecord::root(1),
        GroupRecord::child(2, 1),
        GroupRecord::child(3, 1),
        GroupRecord::child(4, 2),
        GroupRecord::child(5, 2),
        GroupRecord::child(6, 3),
    ];
    let mut tree = match GroupTree::build(&records, &[]) {
        Ok(tree) => tree,
        Err(_) => return,
    };

    for &byte in data {
        // Toggling any id, known or not, must never panic; the active set
        // must stay closed under ancestors.
        let _ = tree.toggle_active(u32::from(byte) % 8);
        for node in tree.nodes() {
            if node.is_active() {
                if let Some(parent) = node.parent() {
                    assert!(tree.get(parent).map(|p| p.is_active()).unwrap_or(false));
                }
            }
        }
    }
});
