//! Search form shown above the product list.

use super::node::Element;

/// A search input inside a form.
///
/// Typing only changes the input; the term takes effect on [`submit`](Self::submit).
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    value: String,
}

impl SearchView {
    /// Creates an empty search form.
    pub fn new() -> Self {
        SearchView::default()
    }

    /// Current input value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the input value, as typing would.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Submits the form and returns the term to search for.
    pub fn submit(&self) -> String {
        self.value.clone()
    }

    /// Renders the form with its search input.
    pub fn render(&self) -> Element {
        Element::new("form")
            .test_id("search-form")
            .class("search")
            .child(
                Element::new("input")
                    .test_id("search-input")
                    .attr("type", "search")
                    .attr("name", "search")
                    .attr("placeholder", "Search")
                    .attr("value", self.value.clone()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_search_input_inside_form() {
        let view = SearchView::new();
        let form = view.render();

        assert_eq!(form.tag(), "form");
        let input = form.find("search-input").unwrap();
        assert_eq!(input.tag(), "input");
        assert_eq!(input.get_attr("type"), Some("search"));
    }

    #[test]
    fn test_submit_yields_typed_value() {
        let mut view = SearchView::new();
        view.set_value("Relogio");

        assert_eq!(view.submit(), "Relogio");
        assert_eq!(
            view.render().find("search-input").and_then(|i| i.get_attr("value")),
            Some("Relogio")
        );
    }

    #[test]
    fn test_submit_empty_value() {
        let mut view = SearchView::new();
        view.set_value("x");
        view.set_value("");
        assert_eq!(view.submit(), "");
    }
}
