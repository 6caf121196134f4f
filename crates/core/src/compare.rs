//! Structural equality, hashing and ordering.
//!
//! Two nodes are equal when they are the same variant, their resolved tags
//! have the same name and their values are equal. Style and mark are
//! ignored. Ordering only exists between nodes of the same concrete
//! variant; anything else compares as `None`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::node::{Mapping, Node, Scalar, Sequence, Unresolved};

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.text() == other.text() && self.resolved_tag() == other.resolved_tag()
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resolved_tag().hash(state);
        self.text().hash(state);
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let by_text = self.text().cmp(other.text());
        Some(by_text.then_with(|| {
            self.resolved_tag()
                .name()
                .cmp(other.resolved_tag().name())
        }))
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.pairs() == other.pairs() && self.resolved_tag() == other.resolved_tag()
    }
}

impl Eq for Mapping {}

impl Hash for Mapping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resolved_tag().hash(state);
        self.pairs().hash(state);
    }
}

impl PartialOrd for Mapping {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let by_pairs = lexicographic(self.pairs(), other.pairs(), |(lk, lv), (rk, rv)| {
            match lk.partial_cmp(rk)? {
                Ordering::Equal => lv.partial_cmp(rv),
                unequal => Some(unequal),
            }
        })?;
        Some(by_pairs.then_with(|| {
            self.resolved_tag()
                .name()
                .cmp(other.resolved_tag().name())
        }))
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.items() == other.items() && self.resolved_tag() == other.resolved_tag()
    }
}

impl Eq for Sequence {}

impl Hash for Sequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resolved_tag().hash(state);
        self.items().hash(state);
    }
}

impl PartialOrd for Sequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let by_items = lexicographic(self.items(), other.items(), Node::partial_cmp)?;
        Some(by_items.then_with(|| {
            self.resolved_tag()
                .name()
                .cmp(other.resolved_tag().name())
        }))
    }
}

impl PartialEq for Unresolved {
    fn eq(&self, other: &Self) -> bool {
        self.alias() == other.alias() && self.resolved_tag() == other.resolved_tag()
    }
}

impl Eq for Unresolved {}

impl Hash for Unresolved {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resolved_tag().hash(state);
        self.alias().hash(state);
    }
}

/// Element-wise comparison; the first unequal pair decides, then the
/// shorter slice sorts first. An unordered pair makes the whole result
/// unordered.
fn lexicographic<T>(
    lhs: &[T],
    rhs: &[T],
    cmp: impl Fn(&T, &T) -> Option<Ordering>,
) -> Option<Ordering> {
    for (l, r) in lhs.iter().zip(rhs) {
        match cmp(l, r)? {
            Ordering::Equal => continue,
            unequal => return Some(unequal),
        }
    }
    Some(lhs.len().cmp(&rhs.len()))
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Scalar(l), Node::Scalar(r)) => l == r,
            (Node::Mapping(l), Node::Mapping(r)) => l == r,
            (Node::Sequence(l), Node::Sequence(r)) => l == r,
            (Node::Unresolved(l), Node::Unresolved(r)) => l == r,
            _ => false,
        }
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Node::Scalar(s) => s.hash(state),
            Node::Mapping(m) => m.hash(state),
            Node::Sequence(s) => s.hash(state),
            Node::Unresolved(u) => u.hash(state),
        }
    }
}

/// Placeholders and mixed variants are unordered: `<` and `>` are both
/// false for them.
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Node::Scalar(l), Node::Scalar(r)) => l.partial_cmp(r),
            (Node::Mapping(l), Node::Mapping(r)) => l.partial_cmp(r),
            (Node::Sequence(l), Node::Sequence(r)) => l.partial_cmp(r),
            _ => None,
        }
    }
}
