use crate::memory::BufferError;

use super::{NodeId, NodeKind};

/// Errors raised while building or reading a config tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A builder call targeted a node of the wrong kind.
    #[error("node {node:?} is a {found:?}, expected a {expected:?}")]
    WrongKind {
        node: NodeId,
        expected: NodeKind,
        found: NodeKind,
    },

    /// A recognised key holds a value that cannot be interpreted.
    #[error("line {line}: invalid value {value:?} for `{key}`")]
    InvalidValue { key: String, line: u32, value: String },

    /// A builder call used a node id this arena never handed out.
    #[error("node {node:?} does not belong to this arena")]
    UnknownNode { node: NodeId },

    /// Growing node storage failed.
    #[error(transparent)]
    Allocation(#[from] BufferError),
}
