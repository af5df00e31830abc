use url::Url;

use crate::document::PageDocument;

/// Anchor carried by a matched element, with the raw href still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorLink {
    pub href: String,
    pub text: String,
}

/// The element itself when it is an `<a>`, otherwise its first descendant `<a>`.
pub fn anchor_for<D: PageDocument>(doc: &D, node: D::Node) -> Option<D::Node> {
    if doc
        .tag_name(node)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("a"))
    {
        return Some(node);
    }
    doc.descendants_by_tag(node, "a").into_iter().next()
}

/// Anchor of `node` with a non-blank href, and its trimmed text.
pub fn anchor_link<D: PageDocument>(doc: &D, node: D::Node) -> Option<AnchorLink> {
    let anchor = anchor_for(doc, node)?;
    let href = doc.attr(anchor, "href").map(str::trim)?;
    if href.is_empty() {
        return None;
    }
    Some(AnchorLink {
        href: href.to_string(),
        text: doc.text_content(anchor).trim().to_string(),
    })
}

/// Resolve an href against the page it came from. Absolute hrefs pass through.
pub fn resolve_href(href: &str, base: &Url) -> Result<Url, url::ParseError> {
    base.join(href.trim())
}
