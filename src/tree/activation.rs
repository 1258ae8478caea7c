//! Active-set maintenance for the group tree.
//!
//! Two flags per node. `selected` records what the user explicitly chose;
//! `active` is derived from it: a node is active when it is selected itself
//! or lies on the root path of a selected node, so the active set is always
//! closed under ancestors. Activating a group selects it and lights up its
//! whole root path; deactivating one clears every selection in its subtree
//! and prunes ancestors left neither selected nor with an active child.
//! Keeping the two apart is what lets an explicitly selected ancestor
//! survive when a selection below it is withdrawn.

use crate::error::{TreeError, TreeResult};
use crate::record::GroupId;

use super::GroupTree;

impl GroupTree {
    /// Flip the selection state of one group.
    ///
    /// Activating an inactive group selects it and activates every
    /// ancestor. Deactivating an active group drops every selection in its
    /// subtree, then walks upward deactivating each ancestor that is
    /// neither selected itself nor left with an active child, stopping at
    /// the first ancestor that keeps one.
    pub fn toggle_active(&mut self, id: GroupId) -> TreeResult<()> {
        if self.node(id)?.is_active() {
            self.deactivate(id);
        } else {
            self.activate(id);
        }
        Ok(())
    }

    /// Current selection, as ascending ids
    pub fn active_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = self
            .nodes()
            .filter(|node| node.is_active())
            .map(|node| node.id())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// The explicit selection, as ascending ids
    pub fn selected_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = self
            .nodes()
            .filter(|node| node.is_selected())
            .map(|node| node.id())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Whether a group is governed by the selection: explicitly selected
    /// itself or under an explicitly selected ancestor.
    ///
    /// An ancestor that is merely active (lit up by a selection elsewhere in
    /// its subtree) does not cover this group.
    pub fn is_covered(&self, id: GroupId) -> TreeResult<bool> {
        let node = self.node(id)?;
        Ok(node.is_selected()
            || node
                .ancestors()
                .iter()
                .any(|ancestor| self.by_id[ancestor].selected))
    }

    /// Apply the initial selection in one pass, as if each id had been
    /// toggled on from the all-inactive state.
    ///
    /// Every id is validated up front so a bad batch leaves no flags set.
    pub(crate) fn activate_initial(&mut self, ids: &[GroupId]) -> TreeResult<()> {
        for &id in ids {
            if !self.contains(id) {
                return Err(TreeError::UnknownNode { id });
            }
        }
        for &id in ids {
            self.activate(id);
        }
        Ok(())
    }

    fn activate(&mut self, id: GroupId) {
        let ancestors = self.by_id[&id].ancestors.clone();
        for ancestor in ancestors {
            if let Some(node) = self.by_id.get_mut(&ancestor) {
                node.active = true;
            }
        }
        if let Some(node) = self.by_id.get_mut(&id) {
            node.selected = true;
            node.active = true;
        }
    }

    fn deactivate(&mut self, id: GroupId) {
        let (parent, descendants) = {
            let node = &self.by_id[&id];
            (node.parent, node.descendants.clone())
        };
        if let Some(node) = self.by_id.get_mut(&id) {
            node.selected = false;
            node.active = false;
        }
        for descendant in descendants {
            if let Some(node) = self.by_id.get_mut(&descendant) {
                node.selected = false;
                node.active = false;
            }
        }
        // Prune upward: an ancestor stays active while it is selected
        // itself or still has an active child.
        let mut cursor = parent;
        while let Some(parent_id) = cursor {
            let keeps_active = {
                let node = &self.by_id[&parent_id];
                node.selected
                    || node
                        .children
                        .iter()
                        .any(|child| self.by_id[child].active)
            };
            if keeps_active {
                break;
            }
            let next = self.by_id[&parent_id].parent;
            if let Some(node) = self.by_id.get_mut(&parent_id) {
                node.active = false;
            }
            cursor = next;
        }
    }
}
