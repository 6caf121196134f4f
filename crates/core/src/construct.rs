//! Typed views of a node.
//!
//! Every accessor follows the same rule: a scalar hands its text and
//! resolved tag (the one [`Node::tag`] reports) to its classifier and gets a value back if the text is convertible; every
//! other variant yields `None`.

use base64::Engine;
use serde_json::{Map, Number, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::Error;
use crate::node::{Node, Scalar};
use crate::tag::TagName;

/// The YAML null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Null;

/// Raw bytes decoded from a `!!binary` scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Binary(pub Vec<u8>);

/// A type that can be built from a scalar through its classifier.
pub trait ScalarConstructible: Sized {
    fn construct(scalar: &Scalar) -> Option<Self>;
}

impl ScalarConstructible for bool {
    fn construct(scalar: &Scalar) -> Option<Self> {
        let tag = scalar.resolved_tag();
        tag.classifier().boolean(scalar.text(), tag.name())
    }
}

impl ScalarConstructible for i64 {
    fn construct(scalar: &Scalar) -> Option<Self> {
        let tag = scalar.resolved_tag();
        tag.classifier().integer(scalar.text(), tag.name())
    }
}

impl ScalarConstructible for f64 {
    fn construct(scalar: &Scalar) -> Option<Self> {
        let tag = scalar.resolved_tag();
        tag.classifier().float(scalar.text(), tag.name())
    }
}

impl ScalarConstructible for Null {
    fn construct(scalar: &Scalar) -> Option<Self> {
        let tag = scalar.resolved_tag();
        tag.classifier().null(scalar.text(), tag.name()).then_some(Null)
    }
}

impl ScalarConstructible for OffsetDateTime {
    fn construct(scalar: &Scalar) -> Option<Self> {
        let tag = scalar.resolved_tag();
        tag.classifier().timestamp(scalar.text(), tag.name())
    }
}

impl ScalarConstructible for Binary {
    fn construct(scalar: &Scalar) -> Option<Self> {
        let tag = scalar.resolved_tag();
        tag.classifier().binary(scalar.text(), tag.name()).map(Binary)
    }
}

impl ScalarConstructible for Uuid {
    fn construct(scalar: &Scalar) -> Option<Self> {
        let tag = scalar.resolved_tag();
        tag.classifier().identifier(scalar.text(), tag.name())
    }
}

impl ScalarConstructible for String {
    fn construct(scalar: &Scalar) -> Option<Self> {
        Some(scalar.text().to_owned())
    }
}

impl Node {
    pub fn construct<T: ScalarConstructible>(&self) -> Option<T> {
        self.as_scalar().and_then(T::construct)
    }

    pub fn boolean(&self) -> Option<bool> {
        self.construct()
    }

    pub fn integer(&self) -> Option<i64> {
        self.construct()
    }

    pub fn float(&self) -> Option<f64> {
        self.construct()
    }

    pub fn null(&self) -> Option<Null> {
        self.construct()
    }

    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        self.construct()
    }

    pub fn binary(&self) -> Option<Vec<u8>> {
        self.construct::<Binary>().map(|b| b.0)
    }

    pub fn identifier(&self) -> Option<Uuid> {
        self.construct()
    }

    /// Sequence items convertible to `T`; the rest are dropped.
    pub fn array_of<T: ScalarConstructible>(&self) -> Vec<T> {
        match self.as_sequence() {
            Some(seq) => seq.iter().filter_map(Node::construct).collect(),
            None => Vec::new(),
        }
    }

    /// Convert a resolved tree to JSON, choosing each scalar's JSON type
    /// from its resolved tag. Mapping keys become their scalar text; collection
    /// keys become their own compact JSON text. Meeting a placeholder fails
    /// with its stored error.
    pub fn to_value(&self) -> Result<Value, Error> {
        match self {
            Node::Scalar(s) => Ok(scalar_value(s)),
            Node::Mapping(m) => {
                let mut object = Map::new();
                for (key, value) in m {
                    let key = match key {
                        Node::Scalar(s) => s.text().to_owned(),
                        Node::Unresolved(u) => return Err(u.error().clone()),
                        other => other.to_value()?.to_string(),
                    };
                    object.insert(key, value.to_value()?);
                }
                Ok(Value::Object(object))
            }
            Node::Sequence(s) => s
                .iter()
                .map(Node::to_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Node::Unresolved(u) => Err(u.error().clone()),
        }
    }
}

fn scalar_value(scalar: &Scalar) -> Value {
    let text = || Value::String(scalar.text().to_owned());
    let tag = scalar.resolved_tag();
    let name = tag.name();
    let classifier = tag.classifier();

    if *name == TagName::NULL {
        classifier
            .null(scalar.text(), name)
            .then_some(Value::Null)
            .unwrap_or_else(text)
    } else if *name == TagName::BOOL {
        classifier
            .boolean(scalar.text(), name)
            .map(Value::Bool)
            .unwrap_or_else(text)
    } else if *name == TagName::INT {
        classifier
            .integer(scalar.text(), name)
            .map(|i| Value::Number(i.into()))
            .unwrap_or_else(text)
    } else if *name == TagName::FLOAT {
        classifier
            .float(scalar.text(), name)
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(text)
    } else if *name == TagName::TIMESTAMP {
        classifier
            .timestamp(scalar.text(), name)
            .and_then(|t| t.format(&Rfc3339).ok())
            .map(Value::String)
            .unwrap_or_else(text)
    } else if *name == TagName::BINARY {
        // Normalize line-wrapped base64 to a single canonical line.
        classifier
            .binary(scalar.text(), name)
            .map(|bytes| Value::String(base64::engine::general_purpose::STANDARD.encode(bytes)))
            .unwrap_or_else(text)
    } else {
        text()
    }
}
