//! The anchor table: alias name → node, filled in document order by the
//! builder and borrowed read-only by the resolver.

use std::collections::{BTreeMap, HashMap};

use crate::node::Node;

/// Read-only lookup the resolver needs from an anchor table.
pub trait Anchors {
    fn lookup(&self, name: &str) -> Option<&Node>;
}

impl Anchors for HashMap<String, Node> {
    fn lookup(&self, name: &str) -> Option<&Node> {
        self.get(name)
    }
}

impl Anchors for BTreeMap<String, Node> {
    fn lookup(&self, name: &str) -> Option<&Node> {
        self.get(name)
    }
}

/// Anchor bindings with last-definition-wins semantics.
#[derive(Debug, Clone, Default)]
pub struct AnchorTable {
    bindings: HashMap<String, Node>,
}

impl AnchorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `node`. A later binding for the same name replaces
    /// the earlier one, which is returned so a builder can reject duplicate
    /// anchors if it wants to.
    pub fn bind(&mut self, name: impl Into<String>, node: Node) -> Option<Node> {
        let name = name.into();
        let previous = self.bindings.insert(name.clone(), node);
        if previous.is_some() {
            tracing::debug!(anchor = %name, "anchor redefined; later definition wins");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

impl Anchors for AnchorTable {
    fn lookup(&self, name: &str) -> Option<&Node> {
        self.get(name)
    }
}

impl<S: Into<String>> FromIterator<(S, Node)> for AnchorTable {
    fn from_iter<I: IntoIterator<Item = (S, Node)>>(iter: I) -> Self {
        let mut table = AnchorTable::new();
        for (name, node) in iter {
            table.bind(name, node);
        }
        table
    }
}

impl From<HashMap<String, Node>> for AnchorTable {
    fn from(bindings: HashMap<String, Node>) -> Self {
        AnchorTable { bindings }
    }
}
