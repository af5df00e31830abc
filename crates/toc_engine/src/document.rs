//! DOM capability used by the extractors.
//!
//! Extractors only need class, id and tag lookups plus attribute and text
//! reads, so they are written against [`PageDocument`] rather than a concrete
//! HTML library. [`ScraperParser`] is the production implementation.

use ego_tree::NodeId;
use scraper::node::Element;
use scraper::{ElementRef, Html};

/// Parses HTML text into a queryable document.
pub trait HtmlParser: Send + Sync {
    type Document: PageDocument;

    fn parse(&self, html: &str) -> Self::Document;
}

/// Read-only DOM queries. Node handles are only meaningful for the document
/// that produced them.
pub trait PageDocument {
    type Node: Copy;

    /// Elements whose class list contains every whitespace-separated token of
    /// `class_names`, in document order. Blank input matches nothing.
    fn elements_by_class(&self, class_names: &str) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Descendants of `node` (not `node` itself) with the given tag, in
    /// document order.
    fn descendants_by_tag(&self, node: Self::Node, tag: &str) -> Vec<Self::Node>;

    /// Lowercase tag name.
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    fn attr(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// Concatenated text of all descendant text nodes, untrimmed.
    fn text_content(&self, node: Self::Node) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperParser;

impl HtmlParser for ScraperParser {
    type Document = ScraperDocument;

    fn parse(&self, html: &str) -> ScraperDocument {
        ScraperDocument {
            html: Html::parse_document(html),
        }
    }
}

pub struct ScraperDocument {
    html: Html,
}

impl ScraperDocument {
    fn element(&self, node: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(node).and_then(ElementRef::wrap)
    }

    fn element_nodes(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| node.value().as_element().map(|element| (node.id(), element)))
    }
}

impl PageDocument for ScraperDocument {
    type Node = NodeId;

    fn elements_by_class(&self, class_names: &str) -> Vec<NodeId> {
        let wanted: Vec<&str> = class_names.split_ascii_whitespace().collect();
        if wanted.is_empty() {
            return Vec::new();
        }
        self.element_nodes()
            .filter(|(_, element)| {
                wanted
                    .iter()
                    .all(|name| element.classes().any(|class| class == *name))
            })
            .map(|(id, _)| id)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.element_nodes()
            .find(|(_, element)| element.id() == Some(id))
            .map(|(node, _)| node)
    }

    fn descendants_by_tag(&self, node: NodeId, tag: &str) -> Vec<NodeId> {
        let Some(root) = self.html.tree.get(node) else {
            return Vec::new();
        };
        root.descendants()
            .skip(1)
            .filter(|child| {
                child
                    .value()
                    .as_element()
                    .is_some_and(|element| element.name().eq_ignore_ascii_case(tag))
            })
            .map(|child| child.id())
            .collect()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.html
            .tree
            .get(node)
            .and_then(|node| node.value().as_element())
            .map(|element| element.name())
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.html
            .tree
            .get(node)
            .and_then(|node| node.value().as_element())
            .and_then(|element| element.attr(name))
    }

    fn text_content(&self, node: NodeId) -> String {
        self.element(node)
            .map(|element| element.text().collect())
            .unwrap_or_default()
    }
}
