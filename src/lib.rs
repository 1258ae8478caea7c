//! Grouptree - hierarchical group selection for timetabling UIs
//!
//! A university timetable displays courses for a hierarchy of student groups
//! (promotion, track, subgroup). Grouptree builds that hierarchy from the
//! flat `{id, parentId}` records a backend API delivers, derives per-node
//! data (ancestors, descendants, depth bounds, leaf counts), and maintains
//! the set of groups the user has selected for display, with toggle
//! semantics that keep the selection consistent across the whole hierarchy.

pub mod error;
pub mod node;
pub mod record;
pub mod render;
pub mod tree;

// Re-exports for convenience
pub use error::{TreeError, TreeResult};
pub use node::GroupNode;
pub use record::{GroupId, GroupRecord};
pub use render::render_tree;
pub use tree::GroupTree;
