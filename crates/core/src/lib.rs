//! yamlet-core: document node tree and deferred alias resolution.
//!
//! A builder walks the source and produces a [`Node`] tree together with an
//! anchor table. Every alias becomes an [`Unresolved`] placeholder,
//! whether or not its anchor has been seen yet. A separate call to
//! [`resolve()`] then substitutes anchors until the tree is concrete:
//!
//! ```
//! use yamlet_core::{resolve, AnchorTable, Node};
//!
//! let anchors: AnchorTable = [("a", Node::from("x"))].into_iter().collect();
//! let doc = Node::sequence(vec![Node::alias("a", None), Node::from("y")]);
//!
//! let resolved = resolve(doc, &anchors).unwrap();
//! assert_eq!(resolved, Node::sequence(vec![Node::from("x"), Node::from("y")]));
//! ```
//!
//! # Public API
//!
//! - [`Node`] and its variants [`Scalar`], [`Mapping`], [`Sequence`],
//!   [`Unresolved`]
//! - [`Tag`], [`TagName`], [`Classifier`] -- tags and the pluggable
//!   classifier; [`CoreSchema`] is the default
//! - [`resolve()`], [`resolve_with()`], [`resolve_once()`],
//!   [`unresolved_count()`] -- alias resolution
//! - [`AnchorTable`], [`Anchors`] -- anchor bindings
//! - [`Error`] -- resolution errors

pub mod anchors;
mod compare;
pub mod construct;
pub mod error;
pub mod mark;
pub mod node;
pub mod options;
pub mod resolve;
pub mod schema;
pub mod tag;

// ── Convenience re-exports: key types ────────────────────────────────

pub use anchors::{AnchorTable, Anchors};
pub use construct::{Binary, Null, ScalarConstructible};
pub use error::Error;
pub use mark::Mark;
pub use node::{
    CollectionStyle, Mapping, Node, Scalar, ScalarStyle, Sequence, Unresolved, UnresolvedStyle,
};
pub use options::{read_resolve_options, ResolveOptions};
pub use schema::CoreSchema;
pub use tag::{Classifier, Tag, TagName};

// ── Convenience re-exports: entry points ─────────────────────────────

pub use resolve::{resolve, resolve_once, resolve_with, unresolved_count};
