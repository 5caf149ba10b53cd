//! HTML node tree.
//!
//! Section renderers build [`Node`] trees instead of concatenating
//! strings, so structure is explicit and a renderer's output is stable
//! for a given input. Writing happens once per pass, with text and
//! attribute values escaped at the boundary; only [`Node::Raw`] content
//! (markdown collaborator output, snapshot-carried markup) bypasses
//! escaping.

use std::borrow::Cow;

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Text content, escaped on write.
    Text(String),
    /// Pre-rendered markup, written verbatim.
    Raw(String),
}

impl Node {
    /// Serializes this node to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Raw(markup) => out.push_str(markup),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Creates a text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Creates a raw markup node. The caller vouches for the content.
pub fn raw(markup: impl Into<String>) -> Node {
    Node::Raw(markup.into())
}

/// Serializes a sequence of sibling nodes.
pub fn fragment_to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write(&mut out);
    }
    out
}

/// An HTML element under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    /// `(name, value)`; a `None` value renders as a bare boolean attribute.
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

/// Elements that never take children and self-close on write.
const VOID_TAGS: [&str; 7] = ["img", "link", "source", "hr", "br", "input", "meta"];

impl Element {
    /// Starts an element with the given tag.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the `class` attribute.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Appends an attribute. Attributes render in insertion order.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// Appends a bare boolean attribute (`muted`, `autoplay`, …).
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    /// Appends a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a child when present; absent children leave no trace.
    pub fn opt_child(mut self, node: Option<Node>) -> Self {
        if let Some(node) = node {
            self.children.push(node);
        }
        self
    }

    /// Appends a sequence of children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Appends an escaped text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
        }

        if VOID_TAGS.contains(&self.tag) {
            out.push_str(" />");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

fn escape_attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_elements_serialize_in_order() {
        let node: Node = Element::new("section")
            .class("hero")
            .child(
                Element::new("div")
                    .class("container")
                    .child(Element::new("h1").class("hero-title").text("Welcome")),
            )
            .into();

        assert_eq!(
            node.to_html(),
            r#"<section class="hero"><div class="container"><h1 class="hero-title">Welcome</h1></div></section>"#
        );
    }

    #[test]
    fn text_is_escaped_but_raw_is_not() {
        let node: Node = Element::new("p")
            .text("a < b & c")
            .child(raw("<em>kept</em>"))
            .into();

        assert_eq!(node.to_html(), "<p>a &lt; b &amp; c<em>kept</em></p>");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let node: Node = Element::new("a")
            .attr("href", "#")
            .attr("title", r#"say "hi""#)
            .text("link")
            .into();

        assert_eq!(
            node.to_html(),
            r##"<a href="#" title="say &quot;hi&quot;">link</a>"##
        );
    }

    #[test]
    fn void_elements_self_close() {
        let node: Node = Element::new("img")
            .class("logo")
            .attr("src", "/logo.svg")
            .attr("alt", "Acme Logo")
            .into();

        assert_eq!(
            node.to_html(),
            r#"<img class="logo" src="/logo.svg" alt="Acme Logo" />"#
        );
    }

    #[test]
    fn boolean_attributes_render_bare() {
        let node: Node = Element::new("video").flag("muted").flag("playsinline").into();
        assert_eq!(node.to_html(), "<video muted playsinline></video>");
    }

    #[test]
    fn fragments_concatenate_siblings() {
        let nodes = vec![
            Element::new("span").text("a").into(),
            text("&"),
            Element::new("span").text("b").into(),
        ];
        assert_eq!(
            fragment_to_html(&nodes),
            "<span>a</span>&amp;<span>b</span>"
        );
    }
}
