use crate::error::Error;
use crate::mark::Mark;
use crate::tag::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnresolvedStyle {
    #[default]
    Any,
}

/// A placeholder for an alias whose anchor has not been substituted yet.
///
/// The error to report if the anchor never turns up is built when the alias
/// is first seen, so it carries the alias's own source position.
#[derive(Debug, Clone)]
pub struct Unresolved {
    alias: String,
    error: Error,
    tag: Tag,
    pub style: UnresolvedStyle,
    pub mark: Option<Mark>,
}

impl Unresolved {
    pub fn new(alias: impl Into<String>, error: Error) -> Self {
        Unresolved {
            alias: alias.into(),
            error,
            tag: Tag::implicit(),
            style: UnresolvedStyle::Any,
            mark: None,
        }
    }

    pub fn with_tag(alias: impl Into<String>, error: Error, tag: Tag) -> Self {
        Unresolved {
            tag,
            ..Unresolved::new(alias, error)
        }
    }

    pub fn marked(mut self, mark: Mark) -> Self {
        self.mark = Some(mark);
        self
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Point the placeholder at another anchor. Any explicit tag described
    /// the old alias, so the tag goes back to implicit in the same step.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
        self.tag = self.tag.copy_with(crate::tag::TagName::IMPLICIT);
    }

    /// The error `resolve` reports if the anchor is missing.
    pub fn error(&self) -> &Error {
        &self.error
    }

    pub fn into_error(self) -> Error {
        self.error
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: Tag) {
        self.tag = tag;
    }

    pub fn resolved_tag(&self) -> Tag {
        self.tag.resolve_scalar(&self.alias)
    }
}
