//! The group hierarchy container.
//!
//! `GroupTree` owns every node in an id-keyed arena and is built in one shot
//! from a flat record batch. The shape is fixed after construction; only the
//! per-node `active` flags mutate, through [`GroupTree::toggle_active`].
//!
//! # Module Structure
//!
//! - `activation` - active-set maintenance (toggle, initial selection)
//! - `tests` - unit tests for construction and derived data

mod activation;

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::error::{TreeError, TreeResult};
use crate::node::GroupNode;
use crate::record::{GroupId, GroupRecord};

/// The group hierarchy: a forest validated to be a single tree
#[derive(Debug, Clone)]
pub struct GroupTree {
    by_id: HashMap<GroupId, GroupNode>,
    root: GroupId,
}

impl GroupTree {
    /// Build a tree from a flat record batch and an initial selection.
    ///
    /// Validates the batch (unique ids, known parents, exactly one root, no
    /// parent cycles), links parent/child in record order, derives
    /// ancestors, descendants, depths and leaf counts, then applies
    /// `initial_active` as if each id had been toggled on from the
    /// all-inactive state.
    ///
    /// Any violation aborts the build; no partial tree is returned.
    pub fn build(records: &[GroupRecord], initial_active: &[GroupId]) -> TreeResult<Self> {
        let mut by_id: HashMap<GroupId, GroupNode> = HashMap::with_capacity(records.len());
        let mut root = None;

        for (rank, record) in records.iter().enumerate() {
            if by_id.contains_key(&record.id) {
                return Err(TreeError::DuplicateId { id: record.id });
            }
            if record.parent_id.is_none() {
                if let Some(first) = root {
                    return Err(TreeError::MultipleRoots {
                        first,
                        second: record.id,
                    });
                }
                root = Some(record.id);
            }
            by_id.insert(record.id, GroupNode::new(record.id, record.parent_id, rank));
        }

        let root = root.ok_or(TreeError::NoRoot)?;

        // Link children in record order.
        for record in records {
            if let Some(parent) = record.parent_id {
                match by_id.get_mut(&parent) {
                    Some(node) => node.children.push(record.id),
                    None => {
                        return Err(TreeError::UnknownParent {
                            id: record.id,
                            parent,
                        })
                    }
                }
            }
        }

        let mut tree = Self { by_id, root };
        tree.link_ancestors()?;
        tree.link_descendants();
        tree.compute_depth_min();
        tree.compute_depth_max();
        tree.count_leaves();
        tree.activate_initial(initial_active)?;
        Ok(tree)
    }

    /// Number of groups in the tree
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the tree holds no groups (never true for a built tree)
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Id of the root group
    pub fn root_id(&self) -> GroupId {
        self.root
    }

    /// The root node
    pub fn root(&self) -> &GroupNode {
        &self.by_id[&self.root]
    }

    /// Look up a node by id
    pub fn get(&self, id: GroupId) -> Option<&GroupNode> {
        self.by_id.get(&id)
    }

    /// Look up a node by id, failing with [`TreeError::UnknownNode`]
    pub fn node(&self, id: GroupId) -> TreeResult<&GroupNode> {
        self.by_id.get(&id).ok_or(TreeError::UnknownNode { id })
    }

    /// Whether a group id is present
    pub fn contains(&self, id: GroupId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Iterate over all nodes, in unspecified order
    pub fn nodes(&self) -> impl Iterator<Item = &GroupNode> {
        self.by_id.values()
    }

    /// Recompute `depth_min` for every node: BFS distance from the root.
    ///
    /// Idempotent; recomputes from scratch on every call.
    pub fn compute_depth_min(&mut self) {
        let mut queue = VecDeque::new();
        queue.push_back((self.root, 0usize));
        while let Some((id, depth)) = queue.pop_front() {
            let children = match self.by_id.get_mut(&id) {
                Some(node) => {
                    node.depth_min = depth;
                    node.children.clone()
                }
                None => continue,
            };
            for child in children {
                queue.push_back((child, depth + 1));
            }
        }
    }

    /// Recompute `depth_max` for every node.
    ///
    /// `depth_max(n) = depth_min(n) + height(subtree(n))`. Recomputes
    /// `depth_min` first so a lone call is self-contained.
    pub fn compute_depth_max(&mut self) {
        self.compute_depth_min();
        Self::subtree_height(&mut self.by_id, self.root);
    }

    /// Recompute `n_leaves` for every node, bottom-up.
    ///
    /// A leaf counts itself as 1; an internal node sums its children.
    pub fn count_leaves(&mut self) {
        Self::sum_leaves(&mut self.by_id, self.root);
    }

    /// Reorder every node's children by a typed key, recursively.
    ///
    /// Stable; changes order only, never membership. Sorting again with the
    /// same key is a no-op.
    pub fn sort_children_by_key<K: Ord>(&mut self, key: impl Fn(&GroupNode) -> K) {
        let ids: Vec<GroupId> = self.by_id.keys().copied().collect();
        for id in ids {
            let mut children = self.by_id[&id].children.clone();
            children.sort_by_key(|child| key(&self.by_id[child]));
            if let Some(node) = self.by_id.get_mut(&id) {
                node.children = children;
            }
        }
    }

    /// Restore the default child order: the order records were supplied in
    pub fn sort_children(&mut self) {
        self.sort_children_by_key(|node| node.rank);
    }

    /// Fill `ancestors` for every node, walking down from the root.
    ///
    /// Doubles as the cycle check: a node whose parent chain never reaches
    /// the root is never visited by this walk.
    fn link_ancestors(&mut self) -> TreeResult<()> {
        let mut visited = 0usize;
        let mut queue = VecDeque::new();
        queue.push_back(self.root);
        while let Some(id) = queue.pop_front() {
            visited += 1;
            let (chain, children) = {
                let node = &self.by_id[&id];
                let mut chain = node.ancestors.clone();
                chain.push(id);
                (chain, node.children.clone())
            };
            for child in &children {
                if let Some(node) = self.by_id.get_mut(child) {
                    node.ancestors = chain.clone();
                }
            }
            queue.extend(children);
        }
        if visited < self.by_id.len() {
            // Smallest unreachable id, for a deterministic report.
            let id = self
                .by_id
                .values()
                .filter(|node| node.id != self.root && node.ancestors.is_empty())
                .map(|node| node.id)
                .min()
                .unwrap_or(self.root);
            return Err(TreeError::CycleDetected { id });
        }
        Ok(())
    }

    /// Fill `descendants` for every node, propagating bottom-up.
    fn link_descendants(&mut self) {
        Self::collect_descendants(&mut self.by_id, self.root);
    }

    fn collect_descendants(
        by_id: &mut HashMap<GroupId, GroupNode>,
        id: GroupId,
    ) -> BTreeSet<GroupId> {
        let children = by_id[&id].children.clone();
        let mut set = BTreeSet::new();
        for child in children {
            let sub = Self::collect_descendants(by_id, child);
            set.insert(child);
            set.extend(sub);
        }
        if let Some(node) = by_id.get_mut(&id) {
            node.descendants = set.clone();
        }
        set
    }

    fn subtree_height(by_id: &mut HashMap<GroupId, GroupNode>, id: GroupId) -> usize {
        let children = by_id[&id].children.clone();
        let mut height = 0;
        for child in children {
            height = height.max(Self::subtree_height(by_id, child) + 1);
        }
        if let Some(node) = by_id.get_mut(&id) {
            node.depth_max = node.depth_min + height;
        }
        height
    }

    fn sum_leaves(by_id: &mut HashMap<GroupId, GroupNode>, id: GroupId) -> usize {
        let children = by_id[&id].children.clone();
        let mut n = 0;
        for child in children {
            n += Self::sum_leaves(by_id, child);
        }
        if n == 0 {
            n = 1;
        }
        if let Some(node) = by_id.get_mut(&id) {
            node.n_leaves = n;
        }
        n
    }
}
