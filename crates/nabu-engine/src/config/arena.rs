use crate::memory::GrowableBuffer;

use super::{ConfigError, NodeRef};

/// Index of a node inside its owning [`ConfigArena`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NodeKind {
    Scalar,
    Map,
    Sequence,
}

#[derive(Debug, Clone)]
pub(crate) enum NodeValue {
    Scalar(String),
    /// Keys may repeat; lookups take the first match.
    Map(GrowableBuffer<(String, NodeId)>),
    Sequence(GrowableBuffer<NodeId>),
}

#[derive(Debug, Clone)]
pub(crate) struct ConfigNode {
    pub(crate) line: u32,
    pub(crate) value: NodeValue,
}

impl ConfigNode {
    pub(crate) fn kind(&self) -> NodeKind {
        match self.value {
            NodeValue::Scalar(_) => NodeKind::Scalar,
            NodeValue::Map(_) => NodeKind::Map,
            NodeValue::Sequence(_) => NodeKind::Sequence,
        }
    }
}

/// Region that owns every node of one parsed config tree.
///
/// Nodes are never freed individually. Dropping the arena releases the whole
/// tree at once, so [`NodeRef`]s cannot outlive it.
#[derive(Debug, Default)]
pub struct ConfigArena {
    nodes: GrowableBuffer<ConfigNode>,
    root: Option<NodeId>,
}

impl ConfigArena {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, line: u32, value: NodeValue) -> Result<NodeId, ConfigError> {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ConfigNode { line, value })?;
        Ok(id)
    }

    pub fn alloc_scalar(&mut self, line: u32, value: impl Into<String>) -> Result<NodeId, ConfigError> {
        self.alloc(line, NodeValue::Scalar(value.into()))
    }

    pub fn alloc_map(&mut self, line: u32) -> Result<NodeId, ConfigError> {
        self.alloc(line, NodeValue::Map(GrowableBuffer::new()))
    }

    pub fn alloc_sequence(&mut self, line: u32) -> Result<NodeId, ConfigError> {
        self.alloc(line, NodeValue::Sequence(GrowableBuffer::new()))
    }

    fn check(&self, id: NodeId) -> Result<(), ConfigError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(ConfigError::UnknownNode { node: id })
        }
    }

    /// Appends `key: value` to a map node.
    ///
    /// Both ids must come from this arena, otherwise `UnknownNode`.
    pub fn push_pair(&mut self, map: NodeId, key: impl Into<String>, value: NodeId) -> Result<(), ConfigError> {
        self.check(map)?;
        self.check(value)?;
        let node = &mut self.nodes[map.0];
        let found = node.kind();
        match &mut node.value {
            NodeValue::Map(pairs) => Ok(pairs.push((key.into(), value))?),
            _ => Err(ConfigError::WrongKind {
                node: map,
                expected: NodeKind::Map,
                found,
            }),
        }
    }

    /// Appends `item` to a sequence node.
    ///
    /// Both ids must come from this arena, otherwise `UnknownNode`.
    pub fn push_item(&mut self, sequence: NodeId, item: NodeId) -> Result<(), ConfigError> {
        self.check(sequence)?;
        self.check(item)?;
        let node = &mut self.nodes[sequence.0];
        let found = node.kind();
        match &mut node.value {
            NodeValue::Sequence(items) => Ok(items.push(item)?),
            _ => Err(ConfigError::WrongKind {
                node: sequence,
                expected: NodeKind::Sequence,
                found,
            }),
        }
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.map(|id| self.node(id))
    }

    /// Borrows a node.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        assert!(id.0 < self.nodes.len(), "node {id:?} does not belong to this arena");
        NodeRef { arena: self, id }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn raw(&self, id: NodeId) -> &ConfigNode {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_from_another_arena_are_rejected() {
        let mut big = ConfigArena::new();
        for line in 0..4 {
            big.alloc_scalar(line, "x").unwrap();
        }
        let foreign = big.alloc_map(5).unwrap();

        let mut small = ConfigArena::new();
        let map = small.alloc_map(1).unwrap();
        let seq = small.alloc_sequence(2).unwrap();

        assert_eq!(
            small.push_pair(foreign, "k", map),
            Err(ConfigError::UnknownNode { node: foreign })
        );
        assert_eq!(
            small.push_pair(map, "k", foreign),
            Err(ConfigError::UnknownNode { node: foreign })
        );
        assert_eq!(
            small.push_item(seq, foreign),
            Err(ConfigError::UnknownNode { node: foreign })
        );
        assert_eq!(small.len(), 2);
    }

    #[test]
    fn children_grow_past_initial_capacity() {
        let mut arena = ConfigArena::new();
        let seq = arena.alloc_sequence(1).unwrap();
        let mut ids = Vec::new();
        for line in 0..20 {
            let id = arena.alloc_scalar(line + 2, line.to_string()).unwrap();
            arena.push_item(seq, id).unwrap();
            ids.push(id);
        }
        assert_eq!(arena.len(), 21);
        let got: Vec<_> = arena.node(seq).items().map(|n| n.id()).collect();
        assert_eq!(got, ids);
    }
}
