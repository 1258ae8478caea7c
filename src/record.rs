//! Flat group records as delivered by the backend API.
//!
//! The timetable backend exposes the group hierarchy as a flat JSON list of
//! `{id, parentId}` objects. Exactly one record has `parentId: null` and
//! becomes the root of the tree.

use serde::{Deserialize, Serialize};

/// Unique key of a group node
pub type GroupId = u32;

/// One flat record of the group hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    /// Unique group id
    pub id: GroupId,
    /// Parent group id, `None` only for the root
    pub parent_id: Option<GroupId>,
}

impl GroupRecord {
    /// Record for the root group (no parent)
    pub fn root(id: GroupId) -> Self {
        Self {
            id,
            parent_id: None,
        }
    }

    /// Record for a child group
    pub fn child(id: GroupId, parent: GroupId) -> Self {
        Self {
            id,
            parent_id: Some(parent),
        }
    }
}
