//! Property tests for the active-set model.

use proptest::prelude::*;
use proptest::sample::Index;
use proptest::test_runner::TestCaseError;

use grouptree::{GroupId, GroupRecord, GroupTree};

/// Random tree plus a random toggle sequence over its ids.
fn arb_tree_and_toggles() -> impl Strategy<Value = (Vec<GroupRecord>, Vec<Index>)> {
    let records = proptest::collection::vec(any::<Index>(), 0..30).prop_map(|parents| {
        let mut records = vec![GroupRecord::root(1)];
        for (k, pick) in parents.iter().enumerate() {
            let id = (k + 2) as GroupId;
            let parent = (pick.index(k + 1) + 1) as GroupId;
            records.push(GroupRecord::child(id, parent));
        }
        records
    });
    (records, proptest::collection::vec(any::<Index>(), 0..40))
}

/// The selection invariants: `active` is exactly "selected, or has a
/// selected descendant", which makes the active set closed under ancestors.
fn assert_selection_invariants(tree: &GroupTree) -> Result<(), TestCaseError> {
    for node in tree.nodes() {
        let derived = node.is_selected()
            || node
                .descendants()
                .iter()
                .any(|below| tree.get(*below).map(|n| n.is_selected()).unwrap_or(false));
        prop_assert_eq!(
            node.is_active(),
            derived,
            "node {} active flag must mirror its selection subtree",
            node.id()
        );
        if node.is_active() {
            if let Some(parent) = node.parent() {
                prop_assert!(
                    tree.get(parent).map(|p| p.is_active()).unwrap_or(false),
                    "active node {} has inactive parent {}",
                    node.id(),
                    parent
                );
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary toggle sequences never panic, keep `active`
    /// derived from the explicit selection, and report coverage exactly for
    /// the branches a selection governs.
    #[test]
    fn property_toggles_preserve_selection_invariants(
        (records, toggles) in arb_tree_and_toggles(),
    ) {
        let mut tree = GroupTree::build(&records, &[]).unwrap();
        let ids: Vec<GroupId> = (1..=records.len() as GroupId).collect();

        for pick in toggles {
            let id = ids[pick.index(ids.len())];
            tree.toggle_active(id).unwrap();

            assert_selection_invariants(&tree)?;

            let active = tree.active_ids();
            let mut sorted = active.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(&active, &sorted, "active_ids must be sorted and unique");

            if !active.is_empty() {
                prop_assert!(tree.root().is_active());
            }

            // Coverage means an explicitly selected self-or-ancestor, never
            // an ancestor that is only active.
            for node in tree.nodes() {
                let governed = node.is_selected()
                    || node
                        .ancestors()
                        .iter()
                        .any(|a| tree.get(*a).map(|n| n.is_selected()).unwrap_or(false));
                prop_assert_eq!(tree.is_covered(node.id()).unwrap(), governed);
            }
        }
    }

    /// PROPERTY: Toggling an inactive node on and immediately off restores
    /// the previous selection exactly.
    #[test]
    fn property_toggle_round_trips(
        (records, toggles) in arb_tree_and_toggles(),
        candidate in any::<Index>(),
    ) {
        let mut tree = GroupTree::build(&records, &[]).unwrap();
        let ids: Vec<GroupId> = (1..=records.len() as GroupId).collect();

        // Reach an arbitrary valid selection state first.
        for pick in toggles {
            tree.toggle_active(ids[pick.index(ids.len())]).unwrap();
        }

        let inactive: Vec<GroupId> = tree
            .nodes()
            .filter(|n| !n.is_active())
            .map(|n| n.id())
            .collect();
        prop_assume!(!inactive.is_empty());

        let id = inactive[candidate.index(inactive.len())];
        let before_active = tree.active_ids();
        let before_selected = tree.selected_ids();

        tree.toggle_active(id).unwrap();
        tree.toggle_active(id).unwrap();

        prop_assert_eq!(tree.active_ids(), before_active);
        prop_assert_eq!(tree.selected_ids(), before_selected);
    }

    /// PROPERTY: Seeding a selection at build time matches toggling the same
    /// ids on from an empty selection.
    #[test]
    fn property_initial_selection_matches_toggles(
        (records, seeds) in arb_tree_and_toggles(),
    ) {
        let ids: Vec<GroupId> = (1..=records.len() as GroupId).collect();
        let seed_ids: Vec<GroupId> = seeds.iter().map(|pick| ids[pick.index(ids.len())]).collect();

        let seeded = GroupTree::build(&records, &seed_ids).unwrap();

        let mut toggled = GroupTree::build(&records, &[]).unwrap();
        for &id in &seed_ids {
            if !toggled.get(id).map(|n| n.is_active()).unwrap_or(false) {
                toggled.toggle_active(id).unwrap();
            }
        }

        prop_assert_eq!(seeded.active_ids(), toggled.active_ids());
    }
}
