//! Read-only access to an already-parsed configuration tree.
//!
//! Parsing lives outside the engine. A parser fills a [`ConfigArena`]; the
//! engine only reads it back through [`NodeRef`]. The arena owns every node,
//! so there is no per-node teardown.

mod arena;
mod error;
mod node;

pub use arena::{ConfigArena, NodeId, NodeKind};
pub use error::ConfigError;
pub use node::{config_node_map_get, NodeRef};
