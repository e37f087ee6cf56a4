use core::str::FromStr;

use super::arena::NodeValue;
use super::{ConfigArena, ConfigError, NodeId, NodeKind};

/// Read-only handle to a node in a [`ConfigArena`].
#[derive(Debug, Copy, Clone)]
pub struct NodeRef<'a> {
    pub(crate) arena: &'a ConfigArena,
    pub(crate) id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Source line, for diagnostics.
    #[inline]
    pub fn line(self) -> u32 {
        self.arena.raw(self.id).line
    }

    #[inline]
    pub fn kind(self) -> NodeKind {
        self.arena.raw(self.id).kind()
    }

    pub fn as_scalar(self) -> Option<&'a str> {
        match &self.arena.raw(self.id).value {
            NodeValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Value of the first pair whose key equals `key`.
    ///
    /// `None` when the key is missing or this node is not a map.
    pub fn map_get(self, key: &str) -> Option<NodeRef<'a>> {
        match &self.arena.raw(self.id).value {
            NodeValue::Map(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|&(_, id)| self.arena.node(id)),
            _ => None,
        }
    }

    /// Map entries in source order. Empty for non-map nodes.
    pub fn pairs(self) -> impl Iterator<Item = (&'a str, NodeRef<'a>)> {
        let arena = self.arena;
        let pairs: &'a [(String, NodeId)] = match &arena.raw(self.id).value {
            NodeValue::Map(pairs) => pairs.as_slice(),
            _ => &[],
        };
        pairs.iter().map(move |(k, id)| (k.as_str(), arena.node(*id)))
    }

    /// Sequence items in source order. Empty for non-sequence nodes.
    pub fn items(self) -> impl Iterator<Item = NodeRef<'a>> {
        let arena = self.arena;
        let items: &'a [NodeId] = match &arena.raw(self.id).value {
            NodeValue::Sequence(items) => items.as_slice(),
            _ => &[],
        };
        items.iter().map(move |id| arena.node(*id))
    }

    /// Parses `self[key]` as a scalar.
    ///
    /// `Ok(None)` when the key is absent; `InvalidValue` when present but not a
    /// scalar or not parseable as `T`.
    pub fn parse_key<T: FromStr>(self, key: &str) -> Result<Option<T>, ConfigError> {
        let Some(node) = self.map_get(key) else {
            return Ok(None);
        };
        let invalid = |value: &str| ConfigError::InvalidValue {
            key: key.to_owned(),
            line: node.line(),
            value: value.to_owned(),
        };
        let raw = node.as_scalar().ok_or_else(|| invalid("<non-scalar>"))?;
        raw.trim().parse().map(Some).map_err(|_| invalid(raw))
    }
}

/// Free-function form of [`NodeRef::map_get`] accepting an absent node.
#[inline]
pub fn config_node_map_get<'a>(node: Option<NodeRef<'a>>, key: &str) -> Option<NodeRef<'a>> {
    node?.map_get(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    /// a: "1"
    /// b: "2"
    /// list: [x, y]
    /// ```
    fn sample() -> (ConfigArena, NodeId, NodeId) {
        let mut arena = ConfigArena::new();
        let root = arena.alloc_map(1).unwrap();
        let a = arena.alloc_scalar(1, "1").unwrap();
        let b = arena.alloc_scalar(2, "2").unwrap();
        let list = arena.alloc_sequence(3).unwrap();
        let x = arena.alloc_scalar(4, "x").unwrap();
        let y = arena.alloc_scalar(5, "y").unwrap();
        arena.push_pair(root, "a", a).unwrap();
        arena.push_pair(root, "b", b).unwrap();
        arena.push_pair(root, "list", list).unwrap();
        arena.push_item(list, x).unwrap();
        arena.push_item(list, y).unwrap();
        arena.set_root(root);
        (arena, root, list)
    }

    #[test]
    fn map_get_finds_value() {
        let (arena, root, _) = sample();
        let b = arena.node(root).map_get("b").unwrap();
        assert_eq!(b.as_scalar(), Some("2"));
        assert_eq!(b.line(), 2);
    }

    #[test]
    fn map_get_missing_key_is_absent() {
        let (arena, root, _) = sample();
        assert!(arena.node(root).map_get("c").is_none());
    }

    #[test]
    fn map_get_on_sequence_or_scalar_is_absent() {
        let (arena, root, list) = sample();
        assert!(arena.node(list).map_get("a").is_none());
        let a = arena.node(root).map_get("a").unwrap();
        assert!(a.map_get("a").is_none());
    }

    #[test]
    fn map_get_first_duplicate_wins() {
        let mut arena = ConfigArena::new();
        let root = arena.alloc_map(1).unwrap();
        let first = arena.alloc_scalar(1, "first").unwrap();
        let second = arena.alloc_scalar(2, "second").unwrap();
        arena.push_pair(root, "k", first).unwrap();
        arena.push_pair(root, "k", second).unwrap();
        assert_eq!(arena.node(root).map_get("k").unwrap().as_scalar(), Some("first"));
    }

    #[test]
    fn free_function_accepts_absent_node() {
        let (arena, root, _) = sample();
        assert!(config_node_map_get(None, "a").is_none());
        assert_eq!(config_node_map_get(Some(arena.node(root)), "a").unwrap().as_scalar(), Some("1"));
    }

    #[test]
    fn items_and_pairs_preserve_order() {
        let (arena, root, list) = sample();
        let items: Vec<_> = arena.node(list).items().filter_map(NodeRef::as_scalar).collect();
        assert_eq!(items, ["x", "y"]);
        let keys: Vec<_> = arena.node(root).pairs().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b", "list"]);
        assert_eq!(arena.node(root).items().count(), 0);
    }

    #[test]
    fn builder_rejects_wrong_kind() {
        let (mut arena, _, list) = sample();
        let v = arena.alloc_scalar(9, "v").unwrap();
        let err = arena.push_pair(list, "k", v).unwrap_err();
        assert!(matches!(err, ConfigError::WrongKind { found: NodeKind::Sequence, .. }));
        assert!(arena.push_item(v, v).is_err());
    }

    #[test]
    fn parse_key_reports_line_of_bad_value() {
        let (arena, root, _) = sample();
        let node = arena.node(root);
        assert_eq!(node.parse_key::<u32>("b").unwrap(), Some(2));
        assert_eq!(node.parse_key::<u32>("missing").unwrap(), None);

        let err = node.parse_key::<u32>("list").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { line: 3, .. }));
    }

    #[test]
    fn root_accessor() {
        let (arena, root, _) = sample();
        assert_eq!(arena.root().unwrap().id(), root);
        assert!(ConfigArena::new().root().is_none());
    }
}
