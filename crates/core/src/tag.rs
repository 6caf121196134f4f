//! Node tags and the pluggable classifier that resolves them.
//!
//! Every node carries a [`Tag`]: a [`TagName`] that is either implicit
//! (classify on demand) or an explicit type identifier, together with the
//! [`Classifier`] used to resolve implicit names and to construct typed
//! values from scalar text.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::schema;

/// A tag identifier such as `tag:yaml.org,2002:int`. The empty name means
/// "implicit".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(Cow<'static, str>);

impl TagName {
    pub const IMPLICIT: TagName = TagName(Cow::Borrowed(""));

    pub const STR: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:str"));
    pub const MAP: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:map"));
    pub const SEQ: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:seq"));

    pub const BINARY: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:binary"));
    pub const BOOL: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:bool"));
    pub const FLOAT: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:float"));
    pub const INT: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:int"));
    pub const MERGE: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:merge"));
    pub const NULL: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:null"));
    pub const TIMESTAMP: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:timestamp"));
    pub const VALUE: TagName = TagName(Cow::Borrowed("tag:yaml.org,2002:value"));

    pub fn new(name: impl Into<String>) -> Self {
        TagName(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_implicit(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves implicit scalar tags and constructs typed values from scalar
/// text.
///
/// Only [`classify`](Classifier::classify) is required. The constructor
/// hooks default to the YAML 1.1 core rules in [`crate::schema`]; a
/// returned `None` means "not convertible", never an error.
pub trait Classifier: Send + Sync {
    /// The tag of a plain scalar whose tag was left implicit.
    fn classify(&self, text: &str) -> TagName;

    fn null(&self, text: &str, _tag: &TagName) -> bool {
        schema::is_null(text)
    }

    fn boolean(&self, text: &str, _tag: &TagName) -> Option<bool> {
        schema::parse_bool(text)
    }

    fn integer(&self, text: &str, _tag: &TagName) -> Option<i64> {
        schema::parse_int(text)
    }

    fn float(&self, text: &str, _tag: &TagName) -> Option<f64> {
        schema::parse_float(text)
    }

    fn timestamp(&self, text: &str, _tag: &TagName) -> Option<OffsetDateTime> {
        schema::parse_timestamp(text)
    }

    fn binary(&self, text: &str, _tag: &TagName) -> Option<Vec<u8>> {
        schema::parse_binary(text)
    }

    fn identifier(&self, text: &str, _tag: &TagName) -> Option<Uuid> {
        Uuid::parse_str(text.trim()).ok()
    }
}

/// A tag name paired with the classifier that interprets it.
///
/// Two tags are equal when their names are equal; the classifier is not
/// compared.
#[derive(Clone)]
pub struct Tag {
    name: TagName,
    classifier: Arc<dyn Classifier>,
}

impl Tag {
    /// An implicit tag using the default core schema.
    pub fn implicit() -> Self {
        Tag::new(TagName::IMPLICIT)
    }

    /// An explicit tag using the default core schema.
    pub fn new(name: TagName) -> Self {
        Tag {
            name,
            classifier: schema::core(),
        }
    }

    pub fn with_classifier(name: TagName, classifier: Arc<dyn Classifier>) -> Self {
        Tag { name, classifier }
    }

    /// A tag with a different name sharing this tag's classifier.
    pub fn copy_with(&self, name: TagName) -> Self {
        Tag {
            name,
            classifier: Arc::clone(&self.classifier),
        }
    }

    pub fn name(&self) -> &TagName {
        &self.name
    }

    pub fn is_implicit(&self) -> bool {
        self.name.is_implicit()
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// The explicit name, or the classifier's verdict on `text` when the
    /// name is implicit.
    pub(crate) fn resolve_scalar(&self, text: &str) -> Tag {
        if self.is_implicit() {
            self.copy_with(self.classifier.classify(text))
        } else {
            self.clone()
        }
    }

    /// The explicit name, or `fallback` when the name is implicit.
    pub(crate) fn resolve_or(&self, fallback: TagName) -> Tag {
        if self.is_implicit() {
            self.copy_with(fallback)
        } else {
            self.clone()
        }
    }
}

impl Default for Tag {
    fn default() -> Self {
        Tag::implicit()
    }
}

impl From<TagName> for Tag {
    fn from(name: TagName) -> Self {
        Tag::new(name)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_implicit() {
            f.write_str("Tag(implicit)")
        } else {
            write!(f, "Tag({})", self.name)
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_implicit() {
            f.write_str("!")
        } else {
            write!(f, "{}", self.name)
        }
    }
}
