use crate::mark::Mark;
use crate::tag::Tag;

/// How a scalar was (or should be) written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalarStyle {
    /// Let the emitter choose.
    #[default]
    Any,
    Plain,
    SingleQuoted,
    DoubleQuoted,
    /// `|` block scalar.
    Literal,
    /// `>` block scalar.
    Folded,
}

/// A leaf value: raw text plus its tag.
#[derive(Debug, Clone)]
pub struct Scalar {
    text: String,
    tag: Tag,
    pub style: ScalarStyle,
    pub mark: Option<Mark>,
}

impl Scalar {
    pub fn new(text: impl Into<String>) -> Self {
        Scalar::with_tag(text, Tag::implicit())
    }

    pub fn with_tag(text: impl Into<String>, tag: Tag) -> Self {
        Scalar {
            text: text.into(),
            tag,
            style: ScalarStyle::Any,
            mark: None,
        }
    }

    pub fn styled(mut self, style: ScalarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn marked(mut self, mark: Mark) -> Self {
        self.mark = Some(mark);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// The tag as written, possibly implicit.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: Tag) {
        self.tag = tag;
    }

    /// The explicit tag, or the classifier's verdict on the text.
    pub fn resolved_tag(&self) -> Tag {
        self.tag.resolve_scalar(&self.text)
    }
}
