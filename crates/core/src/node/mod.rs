//! The document tree.
//!
//! A [`Node`] is one of four variants. Scalars, mappings and sequences are
//! the concrete document; [`Unresolved`] is a placeholder the builder leaves
//! behind for every alias so that anchors defined later in the document can
//! still be substituted by [`crate::resolve`].

mod mapping;
mod scalar;
mod sequence;
mod unresolved;

pub use mapping::Mapping;
pub use scalar::{Scalar, ScalarStyle};
pub use sequence::Sequence;
pub use unresolved::{Unresolved, UnresolvedStyle};

use std::fmt;

use crate::error::Error;
use crate::mark::Mark;
use crate::tag::{Tag, TagName};

/// Block or flow layout of a mapping or sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionStyle {
    #[default]
    Any,
    Block,
    Flow,
}

/// A document node.
#[derive(Debug, Clone)]
pub enum Node {
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Sequence),
    Unresolved(Unresolved),
}

impl Node {
    /// A scalar with an implicit tag.
    pub fn scalar(text: impl Into<String>) -> Self {
        Node::Scalar(Scalar::new(text))
    }

    pub fn tagged(text: impl Into<String>, tag: impl Into<Tag>) -> Self {
        Node::Scalar(Scalar::with_tag(text, tag.into()))
    }

    pub fn mapping(pairs: Vec<(Node, Node)>) -> Self {
        Node::Mapping(Mapping::new(pairs))
    }

    pub fn sequence(items: Vec<Node>) -> Self {
        Node::Sequence(Sequence::new(items))
    }

    /// A placeholder for `*name` carrying a pre-built unknown-anchor error
    /// at `mark`.
    pub fn alias(name: impl Into<String>, mark: Option<Mark>) -> Self {
        let name = name.into();
        let error = Error::unknown_anchor(name.clone(), mark);
        let mut unresolved = Unresolved::new(name, error);
        unresolved.mark = mark;
        Node::Unresolved(unresolved)
    }

    /// The node's tag, resolved through its classifier on every call.
    pub fn tag(&self) -> Tag {
        match self {
            Node::Scalar(s) => s.resolved_tag(),
            Node::Mapping(m) => m.resolved_tag(),
            Node::Sequence(s) => s.resolved_tag(),
            Node::Unresolved(u) => u.resolved_tag(),
        }
    }

    /// The tag as stored on the node, possibly implicit.
    pub(crate) fn declared_tag(&self) -> &Tag {
        match self {
            Node::Scalar(s) => s.tag(),
            Node::Mapping(m) => m.tag(),
            Node::Sequence(s) => s.tag(),
            Node::Unresolved(u) => u.tag(),
        }
    }

    pub fn mark(&self) -> Option<Mark> {
        match self {
            Node::Scalar(s) => s.mark,
            Node::Mapping(m) => m.mark,
            Node::Sequence(s) => s.mark,
            Node::Unresolved(u) => u.mark,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Node::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_unresolved(&self) -> Option<&Unresolved> {
        match self {
            Node::Unresolved(u) => Some(u),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Node::Unresolved(_))
    }

    /// The scalar text, whatever the tag.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().map(Scalar::text)
    }

    /// The items of a sequence; empty for every other variant.
    pub fn array(&self) -> Vec<Node> {
        self.as_sequence()
            .map(|s| s.items().to_vec())
            .unwrap_or_default()
    }

    // ── Subscripting ─────────────────────────────────────────────────

    /// Sequence position named by `key`, if it is an in-range integer.
    fn index_of(sequence: &Sequence, key: &Node) -> Option<usize> {
        let index = usize::try_from(key.integer()?).ok()?;
        (index < sequence.len()).then_some(index)
    }

    /// Look up `key`: by equality in a mapping, by integer index in a
    /// sequence. Scalars and placeholders have no children.
    pub fn get(&self, key: &Node) -> Option<&Node> {
        match self {
            Node::Scalar(_) | Node::Unresolved(_) => None,
            Node::Mapping(m) => m.get(key),
            Node::Sequence(s) => s.get(Self::index_of(s, key)?),
        }
    }

    pub fn get_mut(&mut self, key: &Node) -> Option<&mut Node> {
        match self {
            Node::Scalar(_) | Node::Unresolved(_) => None,
            Node::Mapping(m) => m.get_mut(key),
            Node::Sequence(s) => {
                let index = Self::index_of(s, key)?;
                s.get_mut(index)
            }
        }
    }

    /// Insert or replace the child at `key`. Has no effect on scalars,
    /// placeholders, or sequence keys that are not an in-range index.
    pub fn set(&mut self, key: Node, value: Node) {
        match self {
            Node::Scalar(_) | Node::Unresolved(_) => {}
            Node::Mapping(m) => {
                m.insert(key, value);
            }
            Node::Sequence(s) => {
                if let Some(index) = Self::index_of(s, &key) {
                    if let Some(slot) = s.get_mut(index) {
                        *slot = value;
                    }
                }
            }
        }
    }

    /// `key` as an implicit scalar sharing this node's classifier.
    fn key_node(&self, key: &str) -> Node {
        Node::Scalar(Scalar::with_tag(
            key,
            self.declared_tag().copy_with(TagName::IMPLICIT),
        ))
    }

    pub fn get_key(&self, key: &str) -> Option<&Node> {
        self.get(&self.key_node(key))
    }

    pub fn get_key_mut(&mut self, key: &str) -> Option<&mut Node> {
        let key = self.key_node(key);
        self.get_mut(&key)
    }

    pub fn set_key(&mut self, key: &str, value: Node) {
        let key = self.key_node(key);
        self.set(key, value);
    }

    pub fn get_index(&self, index: usize) -> Option<&Node> {
        self.as_sequence()?.get(index)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Scalar(s) => write!(f, "[Scalar]: value = {}", s.text()),
            Node::Mapping(m) => write!(f, "[Mapping]: count = {}", m.len()),
            Node::Sequence(s) => write!(f, "[Sequence]: count = {}", s.len()),
            Node::Unresolved(u) => write!(f, "[Unresolved]: alias = {}", u.alias()),
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Node::Scalar(s)
    }
}

impl From<Mapping> for Node {
    fn from(m: Mapping) -> Self {
        Node::Mapping(m)
    }
}

impl From<Sequence> for Node {
    fn from(s: Sequence) -> Self {
        Node::Sequence(s)
    }
}

impl From<Unresolved> for Node {
    fn from(u: Unresolved) -> Self {
        Node::Unresolved(u)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::scalar(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::scalar(text)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::tagged(value.to_string(), TagName::INT)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        let text = if value.is_nan() {
            ".nan".to_owned()
        } else if value == f64::INFINITY {
            ".inf".to_owned()
        } else if value == f64::NEG_INFINITY {
            "-.inf".to_owned()
        } else {
            format!("{:?}", value)
        };
        Node::tagged(text, TagName::FLOAT)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::sequence(items)
    }
}

impl From<Vec<(Node, Node)>> for Node {
    fn from(pairs: Vec<(Node, Node)>) -> Self {
        Node::mapping(pairs)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::sequence(iter.into_iter().collect())
    }
}

impl FromIterator<(Node, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (Node, Node)>>(iter: I) -> Self {
        Node::mapping(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Node {
        Node::mapping(vec![
            (Node::from("name"), Node::from("Ada")),
            (Node::from("langs"), Node::from(vec![Node::from("en"), Node::from("fr")])),
        ])
    }

    #[test]
    fn tag_is_classified_per_variant() {
        assert_eq!(Node::from("12").tag().name(), &TagName::INT);
        assert_eq!(Node::from("twelve").tag().name(), &TagName::STR);
        assert_eq!(people().tag().name(), &TagName::MAP);
        assert_eq!(Node::sequence(vec![]).tag().name(), &TagName::SEQ);
        assert_eq!(Node::tagged("12", TagName::STR).tag().name(), &TagName::STR);
    }

    #[test]
    fn mapping_lookup_by_string_key() {
        let doc = people();
        assert_eq!(doc.get_key("name"), Some(&Node::from("Ada")));
        assert_eq!(doc.get_key("age"), None);
    }

    #[test]
    fn sequence_lookup_by_index_key() {
        let doc = people();
        let langs = doc.get_key("langs").unwrap();
        assert_eq!(langs.get(&Node::from(1i64)), Some(&Node::from("fr")));
        assert_eq!(langs.get_key("0"), Some(&Node::from("en")));
        assert_eq!(langs.get(&Node::from(2i64)), None);
        assert_eq!(langs.get(&Node::from(-1i64)), None);
        assert_eq!(langs.get_key("first"), None);
        assert_eq!(langs.get_index(1), Some(&Node::from("fr")));
    }

    #[test]
    fn set_on_mapping_inserts_or_replaces() {
        let mut doc = people();
        doc.set_key("name", Node::from("Grace"));
        doc.set_key("age", Node::from(36i64));
        assert_eq!(doc.get_key("name"), Some(&Node::from("Grace")));
        assert_eq!(doc.get_key("age").and_then(Node::integer), Some(36));
        assert_eq!(doc.as_mapping().map(Mapping::len), Some(3));
    }

    #[test]
    fn set_on_sequence_requires_in_range_index() {
        let mut seq = Node::from(vec![Node::from("a"), Node::from("b")]);
        seq.set(Node::from(1i64), Node::from("z"));
        seq.set(Node::from(5i64), Node::from("ignored"));
        seq.set_key("nope", Node::from("ignored"));
        assert_eq!(seq.array(), vec![Node::from("a"), Node::from("z")]);
    }

    #[test]
    fn subscripting_leaves_is_a_no_op() {
        let mut scalar = Node::from("x");
        scalar.set_key("k", Node::from("v"));
        assert_eq!(scalar, Node::from("x"));
        assert_eq!(scalar.get_key("k"), None);

        let mut alias = Node::alias("a", None);
        alias.set_key("k", Node::from("v"));
        assert_eq!(alias.get_key("k"), None);
        assert!(alias.is_unresolved());
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut doc = people();
        if let Some(Node::Scalar(name)) = doc.get_key_mut("name") {
            name.set_text("Lovelace");
        }
        assert_eq!(doc.get_key("name").and_then(Node::as_str), Some("Lovelace"));
    }

    #[test]
    fn array_is_empty_for_non_sequences() {
        assert!(people().array().is_empty());
        assert!(Node::from("x").array().is_empty());
        assert_eq!(people().get_key("langs").unwrap().array().len(), 2);
    }

    #[test]
    fn display_describes_variant() {
        assert_eq!(Node::from("x").to_string(), "[Scalar]: value = x");
        assert_eq!(people().to_string(), "[Mapping]: count = 2");
        assert_eq!(Node::alias("a", None).to_string(), "[Unresolved]: alias = a");
    }

    #[test]
    fn float_literals_round_trip_through_classifier() {
        assert_eq!(Node::from(1.5).float(), Some(1.5));
        assert_eq!(Node::from(2.0).as_str(), Some("2.0"));
        assert_eq!(Node::from(f64::NEG_INFINITY).as_str(), Some("-.inf"));
    }

    #[test]
    fn collect_into_nodes() {
        let seq: Node = ["a", "b"].into_iter().map(Node::from).collect();
        assert_eq!(seq.array().len(), 2);
        let map: Node = [(Node::from("k"), Node::from("v"))].into_iter().collect();
        assert!(map.is_mapping());
    }
}
