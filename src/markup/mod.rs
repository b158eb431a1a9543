//! Lenient HTML document tree and query primitives.
//!
//! The rules documentation page is HTML, not well-formed XML, so the tree
//! builder tolerates what real pages contain: void elements without a
//! closing slash, mismatched or stray end tags, and entities quick-xml does
//! not know. The catalog extractor depends only on the small query surface
//! exposed here (tag/attribute lookup, parent and sibling navigation,
//! flattened text), not on quick-xml itself.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Handle to a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed markup document.
///
/// Nodes are stored in an arena in document order; traversal helpers hand
/// out [`NodeId`] handles rather than references so callers can mix queries
/// freely.
pub struct Document {
    nodes: Vec<Node>,
}

/// Elements that never have content and often appear without `/>` in HTML.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

impl Document {
    /// Parse raw markup into a document tree.
    ///
    /// Parsing never fails outright: on a malformed region the builder logs
    /// a warning and keeps whatever tree it has built so far. An
    /// unrecognizable page simply yields a tree with no tables, which the
    /// extractor reports as an empty catalog.
    pub fn parse(markup: &str) -> Self {
        let mut reader = Reader::from_str(markup);
        reader.check_end_names(false);

        let root = Node {
            kind: NodeKind::Element {
                tag: String::from("#root"),
                attrs: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
        };
        let mut doc = Document { nodes: vec![root] };

        // Stack of currently open elements; index 0 is the synthetic root.
        let mut open: Vec<NodeId> = vec![NodeId(0)];

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).to_lowercase();
                    let attrs = collect_attrs(&e);
                    let parent = open.last().copied().unwrap_or(NodeId(0));
                    let id = doc.push_element(tag.clone(), attrs, parent);
                    if !VOID_TAGS.contains(&tag.as_str()) {
                        open.push(id);
                    }
                }
                Ok(Event::Empty(e)) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).to_lowercase();
                    let attrs = collect_attrs(&e);
                    doc.push_element(tag, attrs, open.last().copied().unwrap_or(NodeId(0)));
                }
                Ok(Event::End(e)) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).to_lowercase();
                    // Pop to the matching open element; ignore stray ends.
                    if let Some(pos) = open
                        .iter()
                        .rposition(|id| doc.tag(*id) == Some(tag.as_str()))
                    {
                        if pos > 0 {
                            open.truncate(pos);
                        }
                    }
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map(|c| c.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(e.as_ref()).into_owned());
                    if !text.trim().is_empty() {
                        doc.push_text(text, open.last().copied().unwrap_or(NodeId(0)));
                    }
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    if !text.trim().is_empty() {
                        doc.push_text(text, open.last().copied().unwrap_or(NodeId(0)));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Stopped parsing markup early: {}", e);
                    break;
                }
            }
        }

        doc
    }

    fn push_element(&mut self, tag: String, attrs: Vec<(String, String)>, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::Element { tag, attrs },
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push_text(&mut self, text: String, parent: NodeId) {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::Text(text),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
    }

    /// Element tag name, or `None` for text nodes.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    /// Attribute value on an element, if present.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Parent element of a node (the synthetic root has none).
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes[id.0].parent?;
        // The synthetic root is not a real element; callers never need it.
        if parent.0 == 0 {
            None
        } else {
            Some(parent)
        }
    }

    /// All elements with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<NodeId> {
        // Arena order is document order for a streaming parse.
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| self.tag(*id) == Some(tag))
            .collect()
    }

    /// Nearest preceding sibling of `id` with the given tag.
    pub fn previous_sibling(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let parent = self.nodes[id.0].parent?;
        let siblings = &self.nodes[parent.0].children;
        let pos = siblings.iter().position(|s| *s == id)?;
        siblings[..pos]
            .iter()
            .rev()
            .copied()
            .find(|s| self.tag(*s) == Some(tag))
    }

    /// Direct element children with the given tag, in order.
    pub fn children_with_tag(&self, id: NodeId, tag: &str) -> Vec<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .filter(|c| self.tag(*c) == Some(tag))
            .collect()
    }

    /// All element descendants with the given tag, in document order.
    pub fn descendants_with_tag(&self, id: NodeId, tag: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            if self.tag(node) == Some(tag) {
                found.push(node);
            }
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        found
    }

    /// First element descendant carrying the given attribute.
    ///
    /// This is how inline markers are located: the recommended/fixable
    /// badges are the only things inside their cell that carry a `title`.
    pub fn descendant_with_attr(&self, id: NodeId, attr: &str) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            if self.attr(node, attr).is_some() {
                return Some(node);
            }
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        None
    }

    /// Visible text of a node: all descendant text flattened, links and
    /// code spans reduced to their contents.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Element { .. } => {
                for child in &self.nodes[id.0].children {
                    self.collect_text(*child, out);
                }
            }
        }
    }
}

fn collect_attrs(e: &quick_xml::events::BytesStart<'_>) -> Vec<(String, String)> {
    e.attributes()
        .flatten()
        .map(|a| {
            let key = String::from_utf8_lossy(a.key.as_ref()).to_lowercase();
            let value = a
                .unescape_value()
                .map(|c| c.into_owned())
                .unwrap_or_else(|_| String::from_utf8_lossy(&a.value).into_owned());
            (key, value)
        })
        .collect()
}
