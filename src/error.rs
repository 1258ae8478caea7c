//! Error types for grouptree
//!
//! Uses `thiserror` for library errors. Construction errors abort the build
//! entirely; `UnknownNode` is fatal to the failing call only.

use thiserror::Error;

use crate::record::GroupId;

/// Result type alias for grouptree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Main error type for grouptree operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// Two input records share an id
    #[error("duplicate group id {id}")]
    DuplicateId { id: GroupId },

    /// A record names a parent id absent from the batch
    #[error("group {id} references unknown parent {parent}")]
    UnknownParent { id: GroupId, parent: GroupId },

    /// More than one record has no parent
    #[error("multiple root groups: {first} and {second} both have no parent")]
    MultipleRoots { first: GroupId, second: GroupId },

    /// No record has a null parent (includes empty input)
    #[error("no root group found - every record names a parent")]
    NoRoot,

    /// A parent chain never reaches the root
    #[error("group {id} is unreachable from the root (parent chain forms a cycle)")]
    CycleDetected { id: GroupId },

    /// Lookup or toggle with an id absent from the tree
    #[error("unknown group id {id}")]
    UnknownNode { id: GroupId },
}
