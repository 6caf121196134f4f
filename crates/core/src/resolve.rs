//! Alias resolution: replace every [`Unresolved`] placeholder in a tree
//! with the node its anchor is bound to.
//!
//! [`resolve_once`] is a single depth-first, left-to-right substitution
//! pass. [`resolve`] repeats it until no placeholder is left, since an
//! anchor may be bound to a tree that itself contains aliases. Before the
//! first pass the anchor graph reachable from the placeholders is walked
//! in the order full expansion would visit it. The first missing anchor or
//! cycle on that walk is the error reported, and a self-referential
//! document fails instead of growing forever.

use std::collections::HashSet;

use crate::anchors::Anchors;
use crate::error::Error;
use crate::node::{Node, Unresolved};
use crate::options::ResolveOptions;

/// Number of placeholders in `node`, keys included.
pub fn unresolved_count(node: &Node) -> usize {
    match node {
        Node::Scalar(_) => 0,
        Node::Unresolved(_) => 1,
        Node::Mapping(m) => m
            .iter()
            .map(|(k, v)| unresolved_count(k) + unresolved_count(v))
            .sum(),
        Node::Sequence(s) => s.iter().map(unresolved_count).sum(),
    }
}

/// One substitution pass. Subtrees without placeholders are returned as
/// they are; collections keep their tag, style and mark. Fails on the
/// first placeholder whose anchor is missing, with the error stored on
/// that placeholder.
pub fn resolve_once<A: Anchors + ?Sized>(node: Node, anchors: &A) -> Result<Node, Error> {
    if unresolved_count(&node) == 0 {
        return Ok(node);
    }
    match node {
        Node::Scalar(_) => Ok(node),
        Node::Mapping(mut m) => {
            let pairs = m.replace_pairs(Vec::new());
            let mut resolved = Vec::with_capacity(pairs.len());
            for (key, value) in pairs {
                let key = resolve_once(key, anchors)?;
                let value = resolve_once(value, anchors)?;
                resolved.push((key, value));
            }
            m.replace_pairs(resolved);
            Ok(Node::Mapping(m))
        }
        Node::Sequence(mut s) => {
            let items = s.replace_items(Vec::new());
            let resolved = items
                .into_iter()
                .map(|item| resolve_once(item, anchors))
                .collect::<Result<Vec<_>, _>>()?;
            s.replace_items(resolved);
            Ok(Node::Sequence(s))
        }
        Node::Unresolved(u) => match anchors.lookup(u.alias()) {
            Some(Node::Unresolved(bound)) => Err(Error::AnchorBoundToAlias {
                anchor: u.alias().to_owned(),
                alias: bound.alias().to_owned(),
            }),
            Some(bound) => {
                tracing::trace!(anchor = u.alias(), "substituted alias");
                Ok(bound.clone())
            }
            None => Err(u.into_error()),
        },
    }
}

/// Resolve every placeholder in `node` with default options.
pub fn resolve<A: Anchors + ?Sized>(node: Node, anchors: &A) -> Result<Node, Error> {
    resolve_with(node, anchors, &ResolveOptions::default())
}

/// Resolve every placeholder in `node`, repeating substitution passes until
/// none is left.
pub fn resolve_with<A: Anchors + ?Sized>(
    node: Node,
    anchors: &A,
    options: &ResolveOptions,
) -> Result<Node, Error> {
    let mut node = node;
    let mut remaining = unresolved_count(&node);
    let mut passes = 0;

    while remaining > 0 {
        if passes >= options.max_passes {
            return Err(Error::Unconverged { passes, remaining });
        }
        if passes == 0 {
            check_aliases(&node, anchors)?;
        }
        node = resolve_once(node, anchors)?;
        passes += 1;

        let after = unresolved_count(&node);
        tracing::debug!(pass = passes, before = remaining, after, "alias resolution pass");
        remaining = after;
    }

    Ok(node)
}

impl Node {
    pub fn unresolved_count(&self) -> usize {
        unresolved_count(self)
    }

    /// This tree with every alias substituted; see [`resolve`].
    pub fn resolved<A: Anchors + ?Sized>(self, anchors: &A) -> Result<Node, Error> {
        resolve(self, anchors)
    }
}

// ──────────────────────────────────────────────
// Cycle detection
// ──────────────────────────────────────────────

fn collect_aliases<'a>(node: &'a Node, out: &mut Vec<&'a Unresolved>) {
    match node {
        Node::Scalar(_) => {}
        Node::Unresolved(u) => out.push(u),
        Node::Mapping(m) => {
            for (k, v) in m {
                collect_aliases(k, out);
                collect_aliases(v, out);
            }
        }
        Node::Sequence(s) => {
            for item in s {
                collect_aliases(item, out);
            }
        }
    }
}

fn aliases_in(node: &Node) -> Vec<&Unresolved> {
    let mut out = Vec::new();
    collect_aliases(node, &mut out);
    out
}

/// Walk the anchor graph from every placeholder in `node`, depth-first and
/// in document order, and fail on the first problem met: a missing anchor
/// (with that placeholder's stored error), an anchor bound to a placeholder,
/// or an anchor that reaches itself.
fn check_aliases<'a, A: Anchors + ?Sized>(node: &'a Node, anchors: &'a A) -> Result<(), Error> {
    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut in_stack: Vec<&'a str> = Vec::new();

    for alias in aliases_in(node) {
        follow_alias(alias, anchors, &mut visited, &mut in_stack)?;
    }
    Ok(())
}

fn follow_alias<'a, A: Anchors + ?Sized>(
    alias: &'a Unresolved,
    anchors: &'a A,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut Vec<&'a str>,
) -> Result<(), Error> {
    let name = alias.alias();
    if visited.contains(name) {
        return Ok(());
    }
    if let Some(pos) = in_stack.iter().position(|n| *n == name) {
        let mut cycle: Vec<String> = in_stack[pos..].iter().map(|n| n.to_string()).collect();
        cycle.push(name.to_owned());
        tracing::warn!(cycle = %cycle.join(" -> "), "alias cycle detected");
        return Err(Error::AliasCycle {
            cycle,
            mark: alias.mark,
        });
    }
    let bound = match anchors.lookup(name) {
        None => return Err(alias.error().clone()),
        Some(Node::Unresolved(inner)) => {
            return Err(Error::AnchorBoundToAlias {
                anchor: name.to_owned(),
                alias: inner.alias().to_owned(),
            })
        }
        Some(bound) => bound,
    };

    in_stack.push(name);
    for inner in aliases_in(bound) {
        follow_alias(inner, anchors, visited, in_stack)?;
    }
    in_stack.pop();
    visited.insert(name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::AnchorTable;
    use crate::mark::Mark;

    #[test]
    fn count_is_zero_for_leaves_and_empty_collections() {
        assert_eq!(unresolved_count(&Node::from("x")), 0);
        assert_eq!(unresolved_count(&Node::sequence(vec![])), 0);
        assert_eq!(unresolved_count(&Node::mapping(vec![])), 0);
        assert_eq!(unresolved_count(&Node::alias("a", None)), 1);
    }

    #[test]
    fn count_includes_mapping_keys() {
        let doc = Node::mapping(vec![(Node::alias("k", None), Node::alias("v", None))]);
        assert_eq!(doc.unresolved_count(), 2);
    }

    #[test]
    fn single_pass_leaves_nested_aliases() {
        let anchors: AnchorTable = [
            ("outer", Node::sequence(vec![Node::alias("inner", None)])),
            ("inner", Node::from("x")),
        ]
        .into_iter()
        .collect();
        let once = resolve_once(Node::alias("outer", None), &anchors).unwrap();
        assert_eq!(once.unresolved_count(), 1);
        let full = resolve(Node::alias("outer", None), &anchors).unwrap();
        assert_eq!(full, Node::sequence(vec![Node::from("x")]));
    }

    #[test]
    fn cycle_detection_reports_path() {
        let anchors: AnchorTable = [
            ("a", Node::sequence(vec![Node::alias("b", Some(Mark::new(1, 5)))])),
            ("b", Node::sequence(vec![Node::alias("a", Some(Mark::new(2, 5)))])),
        ]
        .into_iter()
        .collect();
        let err = resolve(Node::alias("a", None), &anchors).unwrap_err();
        assert_eq!(
            err,
            Error::AliasCycle {
                cycle: vec!["a".into(), "b".into(), "a".into()],
                mark: Some(Mark::new(2, 5)),
            }
        );
    }

    #[test]
    fn pass_bound_is_enforced() {
        let anchors: AnchorTable = [
            ("a", Node::sequence(vec![Node::alias("b", None)])),
            ("b", Node::from("x")),
        ]
        .into_iter()
        .collect();
        let opts = ResolveOptions { max_passes: 1 };
        let err = resolve_with(Node::alias("a", None), &anchors, &opts).unwrap_err();
        assert_eq!(
            err,
            Error::Unconverged {
                passes: 1,
                remaining: 1
            }
        );
    }
}
