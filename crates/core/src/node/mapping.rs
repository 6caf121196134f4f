use super::{CollectionStyle, Node};
use crate::mark::Mark;
use crate::tag::{Tag, TagName};

/// Ordered key/value pairs.
///
/// Pairs handed to [`Mapping::new`] are stored as given; [`Mapping::insert`]
/// keeps keys unique by replacing the value of an equal key in place.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    pairs: Vec<(Node, Node)>,
    tag: Tag,
    pub style: CollectionStyle,
    pub mark: Option<Mark>,
}

impl Mapping {
    pub fn new(pairs: Vec<(Node, Node)>) -> Self {
        Mapping::with_tag(pairs, Tag::implicit())
    }

    pub fn with_tag(pairs: Vec<(Node, Node)>, tag: Tag) -> Self {
        Mapping {
            pairs,
            tag,
            style: CollectionStyle::Any,
            mark: None,
        }
    }

    pub fn styled(mut self, style: CollectionStyle) -> Self {
        self.style = style;
        self
    }

    pub fn marked(mut self, mark: Mark) -> Self {
        self.mark = Some(mark);
        self
    }

    /// Swap in new pairs, keeping tag, style and mark.
    pub(crate) fn replace_pairs(&mut self, pairs: Vec<(Node, Node)>) -> Vec<(Node, Node)> {
        std::mem::replace(&mut self.pairs, pairs)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &Node) -> Option<&Node> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &Node) -> Option<&mut Node> {
        self.pairs
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Replace the value of an equal key, or append a new pair. Returns the
    /// replaced value.
    pub fn insert(&mut self, key: Node, value: Node) -> Option<Node> {
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Node, Node)> {
        self.pairs.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Node> {
        self.pairs.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.pairs.iter().map(|(_, v)| v)
    }

    pub fn pairs(&self) -> &[(Node, Node)] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<(Node, Node)> {
        self.pairs
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: Tag) {
        self.tag = tag;
    }

    pub fn resolved_tag(&self) -> Tag {
        self.tag.resolve_or(TagName::MAP)
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a (Node, Node);
    type IntoIter = std::slice::Iter<'a, (Node, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl IntoIterator for Mapping {
    type Item = (Node, Node);
    type IntoIter = std::vec::IntoIter<(Node, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
