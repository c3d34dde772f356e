//! Document model for accessibility checks.
//!
//! A parsed page is an ordered tree of [`Node`]s owned by a [`Document`].
//! Element nodes carry a lowercase tag name and an ordered attribute map;
//! text nodes carry their raw text. The tree is built once and then only read.

use indexmap::IndexMap;

use crate::selector::Selector;

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Document node (nodeType = 9)
    Document = 9,
}

/// A node in the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_type: NodeType,

    /// Lowercase tag name for elements, `#text` or `#document` otherwise
    node_name: String,

    /// Raw text for text nodes
    node_value: Option<String>,

    /// Attributes in source order, names lowercased
    attributes: IndexMap<String, String>,

    children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_lowercase(),
            node_value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attribute(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty document node
    pub fn document() -> Self {
        Self {
            node_type: NodeType::Document,
            node_name: "#document".to_string(),
            node_value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Tag name (lowercase). Non-element nodes return their node name.
    pub fn tag_name(&self) -> &str {
        &self.node_name
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        match self.attributes.get(name) {
            Some(value) => Some(value.as_str()),
            None => self.attributes.get(&name.to_lowercase()).map(String::as_str),
        }
    }

    /// Check if an attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// Attribute names in source order
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Attribute name/value pairs in source order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_lowercase(), value.to_string());
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// All descendant text, trimmed
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text.trim().to_string()
    }

    fn collect_text(&self, out: &mut String) {
        match self.node_type {
            NodeType::Text => {
                if let Some(value) = &self.node_value {
                    out.push_str(value);
                }
            }
            _ => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Descendant elements in document order, excluding this node
    pub fn descendants(&self) -> Elements<'_> {
        Elements {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Pre-order iterator over the elements of a subtree
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.iter().rev());
            if node.is_element() {
                return Some(node);
            }
        }
        None
    }
}

/// A parsed page.
///
/// Owns its tree exclusively; nothing hands out mutable access after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Wrap an existing tree. The root itself takes part in queries when it
    /// is an element.
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Every element in document order, including the root element
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            stack: vec![&self.root],
        }
    }

    /// Elements matching `selector`, in document order.
    ///
    /// Each call starts a fresh traversal.
    pub fn query_all<'a, 's>(
        &'a self,
        selector: &'s Selector,
    ) -> impl Iterator<Item = &'a Node> + 's
    where
        'a: 's,
    {
        self.elements().filter(move |node| selector.matches(node))
    }

    /// First element matching `selector`
    pub fn query_selector_first<'a>(&'a self, selector: &Selector) -> Option<&'a Node> {
        self.elements().find(|node| selector.matches(node))
    }

    /// Parse `selector` and collect its matches
    pub fn select(&self, selector: &str) -> crate::Result<Vec<&Node>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .elements()
            .filter(|node| selector.matches(node))
            .collect())
    }

    /// All text in the document, trimmed
    pub fn text_content(&self) -> String {
        self.root.text_content()
    }
}
