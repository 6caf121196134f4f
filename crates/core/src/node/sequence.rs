use super::{CollectionStyle, Node};
use crate::mark::Mark;
use crate::tag::{Tag, TagName};

/// An ordered list of nodes.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    items: Vec<Node>,
    tag: Tag,
    pub style: CollectionStyle,
    pub mark: Option<Mark>,
}

impl Sequence {
    pub fn new(items: Vec<Node>) -> Self {
        Sequence::with_tag(items, Tag::implicit())
    }

    pub fn with_tag(items: Vec<Node>, tag: Tag) -> Self {
        Sequence {
            items,
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

    /// Swap in new items, keeping tag, style and mark.
    pub(crate) fn replace_items(&mut self, items: Vec<Node>) -> Vec<Node> {
        std::mem::replace(&mut self.items, items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.items.get_mut(index)
    }

    pub fn push(&mut self, node: Node) {
        self.items.push(node);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Node> {
        self.items
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: Tag) {
        self.tag = tag;
    }

    pub fn resolved_tag(&self) -> Tag {
        self.tag.resolve_or(TagName::SEQ)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
