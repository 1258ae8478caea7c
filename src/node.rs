//! A single node of the group hierarchy.
//!
//! Nodes live in the tree's arena and reference each other by id only.
//! `parent` and `ancestors` are lookups into the arena, never ownership, so
//! the object graph stays acyclic on the Rust side.

use std::collections::BTreeSet;

use crate::record::GroupId;

/// One group in the hierarchy, with its derived data
#[derive(Debug, Clone)]
pub struct GroupNode {
    pub(crate) id: GroupId,
    pub(crate) parent: Option<GroupId>,
    pub(crate) children: Vec<GroupId>,
    pub(crate) ancestors: Vec<GroupId>,
    pub(crate) descendants: BTreeSet<GroupId>,
    pub(crate) depth_min: usize,
    pub(crate) depth_max: usize,
    pub(crate) n_leaves: usize,
    pub(crate) selected: bool,
    pub(crate) active: bool,
    /// Position of the record in the input batch; default child order
    pub(crate) rank: usize,
}

impl GroupNode {
    pub(crate) fn new(id: GroupId, parent: Option<GroupId>, rank: usize) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            ancestors: Vec::new(),
            descendants: BTreeSet::new(),
            depth_min: 0,
            depth_max: 0,
            n_leaves: 0,
            selected: false,
            active: false,
            rank,
        }
    }

    /// Unique id of this group
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Parent id, `None` for the root
    pub fn parent(&self) -> Option<GroupId> {
        self.parent
    }

    /// Direct children, in the current sort order
    pub fn children(&self) -> &[GroupId] {
        &self.children
    }

    /// Ancestor chain from the root down to the parent, exclusive of self
    pub fn ancestors(&self) -> &[GroupId] {
        &self.ancestors
    }

    /// Every group transitively below this one
    pub fn descendants(&self) -> &BTreeSet<GroupId> {
        &self.descendants
    }

    /// Distance from the root (root = 0)
    pub fn depth_min(&self) -> usize {
        self.depth_min
    }

    /// `depth_min` plus the height of the subtree rooted here: the length of
    /// the longest root-to-leaf path running through this node's position
    pub fn depth_max(&self) -> usize {
        self.depth_max
    }

    /// Number of leaves below this group, or 1 if it is a leaf itself
    pub fn n_leaves(&self) -> usize {
        self.n_leaves
    }

    /// Whether the user explicitly selected this group
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether this group is displayed: selected itself, or an ancestor of
    /// a selected group
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether this group has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
