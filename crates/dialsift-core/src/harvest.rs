use crate::document::{best_text, PageDocument};
use crate::error::CoreError;

/// Structural selectors the chat-list strategy tries by default. The page's
/// markup is unversioned and third-party, so these are best guesses that are
/// each allowed to match nothing.
pub const DEFAULT_CHAT_SELECTORS: [&str; 6] = [
    r#"[data-testid*="cell-frame"]"#,
    r#"[data-testid*="chat"]"#,
    ".zoWT4",
    r#"[role="listitem"]"#,
    "._2nY6O",
    ".copyable-text",
];

/// One independent way of pulling raw text fragments out of the page.
pub trait HarvestStrategy {
    fn name(&self) -> &'static str;
    fn harvest(&self, page: &PageDocument) -> Result<Vec<String>, CoreError>;
}

/// Walks a list of likely conversation-cell selectors and takes each matched
/// element's best-available text. Every selector in the list is applied; they
/// are not alternatives.
pub struct ChatListStrategy {
    selectors: Vec<String>,
}

impl ChatListStrategy {
    pub fn new(selectors: Vec<String>) -> Self {
        Self { selectors }
    }
}

impl HarvestStrategy for ChatListStrategy {
    fn name(&self) -> &'static str {
        "chat-list"
    }

    fn harvest(&self, page: &PageDocument) -> Result<Vec<String>, CoreError> {
        let mut fragments = Vec::new();
        for selector in &self.selectors {
            for element in page.select(selector)? {
                if let Some(text) = best_text(&element) {
                    fragments.push(text);
                }
            }
        }
        Ok(fragments)
    }
}

/// The entire body text as a single fragment.
pub struct FullTextStrategy;

impl HarvestStrategy for FullTextStrategy {
    fn name(&self) -> &'static str {
        "full-text"
    }

    fn harvest(&self, page: &PageDocument) -> Result<Vec<String>, CoreError> {
        Ok(vec![page.body_text()])
    }
}

/// `title` attributes that contain a `+`. Contact rows put the full
/// international number there even when the visible text is a display name.
pub struct TitleAttrStrategy;

impl HarvestStrategy for TitleAttrStrategy {
    fn name(&self) -> &'static str {
        "title-attr"
    }

    fn harvest(&self, page: &PageDocument) -> Result<Vec<String>, CoreError> {
        let mut fragments = Vec::new();
        for element in page.select(r#"[title*="+"]"#)? {
            if let Some(title) = element.value().attr("title") {
                fragments.push(title.to_string());
            }
        }
        Ok(fragments)
    }
}

/// `aria-label` and `data-pre-plain-text` attributes that contain a `+`.
pub struct AriaLabelStrategy;

impl HarvestStrategy for AriaLabelStrategy {
    fn name(&self) -> &'static str {
        "aria-label"
    }

    fn harvest(&self, page: &PageDocument) -> Result<Vec<String>, CoreError> {
        let mut fragments = Vec::new();
        for element in page.select(r#"[aria-label*="+"], [data-pre-plain-text*="+"]"#)? {
            let value = element
                .value()
                .attr("aria-label")
                .or_else(|| element.value().attr("data-pre-plain-text"));
            if let Some(value) = value {
                fragments.push(value.to_string());
            }
        }
        Ok(fragments)
    }
}

/// The full strategy list in its fixed run order.
pub fn default_strategies(chat_selectors: &[String]) -> Vec<Box<dyn HarvestStrategy>> {
    vec![
        Box::new(ChatListStrategy::new(chat_selectors.to_vec())),
        Box::new(FullTextStrategy),
        Box::new(TitleAttrStrategy),
        Box::new(AriaLabelStrategy),
    ]
}
