use crate::error::CoreError;
use scraper::{ElementRef, Html, Selector};

/// Attributes consulted when an element carries no usable text, in priority
/// order. `data-pre-plain-text` is the chat page's own copy metadata.
const TEXT_ATTRS: [&str; 3] = ["title", "aria-label", "data-pre-plain-text"];

/// Read-only view over a parsed page. The pipeline never mutates it.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// All elements matching a CSS selector. A selector that fails to parse
    /// is an error; whether that aborts anything is the caller's decision.
    pub fn select(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, CoreError> {
        let parsed = Selector::parse(selector)
            .map_err(|_| CoreError::InvalidSelector(selector.to_string()))?;
        Ok(self.html.select(&parsed).collect())
    }

    /// The whole visible text of the document body as one string.
    pub fn body_text(&self) -> String {
        let selector = Selector::parse("body").expect("body selector is valid");
        match self.html.select(&selector).next() {
            Some(body) => collect_text(&body),
            None => String::new(),
        }
    }
}

/// Best-available text for an element: its text content, then each of
/// [`TEXT_ATTRS`], first non-blank wins.
pub fn best_text(element: &ElementRef<'_>) -> Option<String> {
    let text = collect_text(element);
    if !text.trim().is_empty() {
        return Some(text);
    }
    for attr in TEXT_ATTRS {
        if let Some(value) = element.value().attr(attr) {
            if !value.trim().is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

// Text nodes are concatenated with no separator, so a number split across
// inline elements stays one matchable digit run.
fn collect_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}
