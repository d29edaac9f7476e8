//! # Element Tree
//!
//! What every view renders to: a small tree of elements that can be queried
//! like a DOM in tests and printed as HTML.
//!
//! ```text
//! Element("aside")  classes=[cart, hidden]  data-testid="cart"
//! ├── Element("button")  data-testid="close-button"  text="close"
//! └── Element("p")  text="Cart is empty"
//! ```

use std::fmt;

/// A rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    test_id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Sets the `data-testid` attribute.
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Adds a CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds a CSS class when `condition` holds.
    pub fn class_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition { self.class(class) } else { self }
    }

    /// Sets an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Sets the element's own text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// CSS classes, in the order they were added.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Checks for a CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Looks up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct children.
    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }

    /// All text in this subtree, depth first, separated by single spaces.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        if let Some(text) = self.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            parts.push(text);
        }
        for child in &self.children {
            child.collect_text(parts);
        }
    }

    /// First element in this subtree (self included) with the given test id.
    pub fn find(&self, test_id: &str) -> Option<&Element> {
        self.walk().find(|e| e.test_id.as_deref() == Some(test_id))
    }

    /// Every element in this subtree with the given test id.
    pub fn find_all(&self, test_id: &str) -> Vec<&Element> {
        self.walk()
            .filter(|e| e.test_id.as_deref() == Some(test_id))
            .collect()
    }

    /// Every element in this subtree with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.walk().filter(|e| e.tag == tag).collect()
    }

    /// Depth-first, pre-order iterator over this subtree.
    pub fn walk(&self) -> impl Iterator<Item = &Element> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }
}

// =============================================================================
// HTML Output
// =============================================================================

fn escape(text: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            _ => write!(f, "{ch}")?,
        }
    }
    Ok(())
}

/// Writes the subtree as HTML.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;

        if !self.classes.is_empty() {
            f.write_str(" class=\"")?;
            escape(&self.classes.join(" "), f)?;
            f.write_str("\"")?;
        }
        if let Some(id) = &self.test_id {
            f.write_str(" data-testid=\"")?;
            escape(id, f)?;
            f.write_str("\"")?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"")?;
            escape(value, f)?;
            f.write_str("\"")?;
        }
        f.write_str(">")?;

        if let Some(text) = &self.text {
            escape(text, f)?;
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }

        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("aside")
            .class("cart")
            .class_if(true, "hidden")
            .class_if(false, "open")
            .test_id("cart")
            .child(Element::new("button").test_id("close-button").text("close"))
            .child(
                Element::new("ul").children(
                    ["a", "b"]
                        .into_iter()
                        .map(|t| Element::new("li").test_id("cart-item").text(t)),
                ),
            )
    }

    #[test]
    fn test_text_content_is_depth_first() {
        assert_eq!(sample().text_content(), "close a b");
    }

    #[test]
    fn test_queries() {
        let root = sample();

        assert!(root.has_class("hidden"));
        assert!(!root.has_class("open"));
        assert_eq!(root.find("close-button").map(Element::tag), Some("button"));
        assert_eq!(root.find_all("cart-item").len(), 2);
        assert_eq!(root.find_all_by_tag("li").len(), 2);
        assert!(root.find("missing").is_none());
        assert_eq!(root.find("cart"), Some(&root));
    }

    #[test]
    fn test_html_output_escapes() {
        let el = Element::new("p")
            .attr("title", "a \"b\"")
            .text("<Tom & Jerry>");

        assert_eq!(
            el.to_string(),
            "<p title=\"a &quot;b&quot;\">&lt;Tom &amp; Jerry&gt;</p>"
        );
    }

    #[test]
    fn test_html_nesting() {
        let html = sample().to_string();
        assert!(html.starts_with("<aside class=\"cart hidden\" data-testid=\"cart\">"));
        assert!(html.contains("<li data-testid=\"cart-item\">a</li>"));
        assert!(html.ends_with("</ul></aside>"));
    }
}
