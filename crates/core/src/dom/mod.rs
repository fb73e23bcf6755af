use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use serde::Serialize;
use std::collections::HashMap;

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeType {
    Element,
    Text,
    Document,
}

/// A node in the arena. Parent and children are kept as ids so the tree can
/// be walked in both directions.
#[derive(Debug, Clone)]
pub struct DomNode {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub node_type: NodeType,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl DomNode {
    fn new(node_type: NodeType, tag: &str, text: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: HashMap::new(),
            text: text.to_string(),
            node_type,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }
}

/// Arena-backed document tree. Node 0 is the document node; nodes created
/// with [`create_element`](Document::create_element) stay detached until
/// appended somewhere under it.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<DomNode>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![DomNode::new(NodeType::Document, "", "")],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> Option<&DomNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(DomNode::new(NodeType::Element, tag, ""))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(DomNode::new(NodeType::Text, "", text))
    }

    fn push(&mut self, node: DomNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Append `child` to `parent`, detaching it from any previous parent.
    /// Appending a node under itself or one of its descendants is ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() || child == self.root() {
            return;
        }
        if self.ancestors_inclusive(parent).any(|a| a == child) {
            return;
        }
        self.remove_child(child);
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Detach `child` from its parent. The subtree stays in the arena.
    pub fn remove_child(&mut self, child: NodeId) {
        let Some(parent) = self.parent(child) else {
            return;
        };
        self.nodes[parent.0].children.retain(|c| *c != child);
        self.nodes[child.0].parent = None;
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// The parent, only if it is an element.
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|p| self.is_element(*p))
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    fn ancestors_inclusive(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |n| self.parent(*n))
    }

    /// The `<html>` element, i.e. the first element child of the document.
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(self.root())
            .iter()
            .copied()
            .find(|c| self.is_element(*c))
    }

    pub fn is_document_element(&self, id: NodeId) -> bool {
        self.document_element() == Some(id)
    }

    /// Whether the node is connected to the document node.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.ancestors_inclusive(id).any(|n| n == self.root())
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.node(id).map(DomNode::is_element).unwrap_or(false)
    }

    pub fn tag(&self, id: NodeId) -> &str {
        self.node(id).map(|n| n.tag.as_str()).unwrap_or("")
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).and_then(|n| n.get_attr(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.attributes
                .insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.attributes.remove(&name.to_ascii_lowercase());
        }
    }

    /// Whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self, id: NodeId) -> Vec<&str> {
        self.attribute(id, "class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Every element in the arena, attached or not, in creation order.
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(move |id| self.is_element(*id))
    }

    /// Elements under `id` in document order, excluding `id` itself.
    pub fn descendant_elements(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(id) {
            if self.is_element(*child) {
                out.push(*child);
            }
            self.collect_descendants(*child, out);
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut result = String::new();
        self.collect_text(id, &mut result);
        result
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        if node.node_type == NodeType::Text {
            out.push_str(&node.text);
        }
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }
}

/// Parse an HTML string into a [`Document`].
pub fn parse_html(html: &str) -> Document {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .unwrap_or_default();

    let mut document = Document::new();
    let root = document.root();
    for child in dom.document.children.borrow().iter() {
        convert_node(child, &mut document, root);
    }
    document
}

fn convert_node(handle: &Handle, document: &mut Document, parent: NodeId) {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let id = document.create_element(&name.local);
            for attr in attrs.borrow().iter() {
                document.set_attribute(id, &attr.name.local, &attr.value);
            }
            document.append_child(parent, id);
            for child in handle.children.borrow().iter() {
                convert_node(child, document, id);
            }
        }
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            // Whitespace-only text never affects style resolution.
            if text.trim().is_empty() {
                return;
            }
            let id = document.create_text(&text);
            document.append_child(parent, id);
        }
        _ => {} // Comments, PIs, doctypes → ignored
    }
}
