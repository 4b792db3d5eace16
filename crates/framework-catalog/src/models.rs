//! Framework Models
//!
//! Wire records received from the data endpoint and their display form.

use serde::Deserialize;

/// Placeholder shown for a missing category or legislator
pub const PLACEHOLDER: &str = "N/A";

/// Heading shown for a record without a title
pub const UNTITLED: &str = "Untitled";

pub const CATEGORY_LABEL: &str = "Category:";
pub const LEGISLATOR_LABEL: &str = "Legislator:";

/// Framework record (matches the endpoint's JSON objects)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Framework {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub legislator: Option<String>,
}

/// Empty strings count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Framework {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            abbreviation: None,
            category: None,
            legislator: None,
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_legislator(mut self, legislator: impl Into<String>) -> Self {
        self.legislator = Some(legislator.into());
        self
    }

    pub fn title_label(&self) -> &str {
        present(&self.title).unwrap_or(UNTITLED)
    }

    /// Title followed by the abbreviation in parentheses, when there is one
    pub fn heading(&self) -> String {
        match present(&self.abbreviation) {
            Some(abbr) => format!("{} ({})", self.title_label(), abbr),
            None => self.title_label().to_string(),
        }
    }

    pub fn category_label(&self) -> &str {
        present(&self.category).unwrap_or(PLACEHOLDER)
    }

    pub fn legislator_label(&self) -> &str {
        present(&self.legislator).unwrap_or(PLACEHOLDER)
    }
}

/// One labelled line under a card heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLine<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

impl CardLine<'_> {
    /// Visible text of the line: label, one space, value
    pub fn text(&self) -> String {
        format!("{} {}", self.label, self.value)
    }
}

/// One rendered card, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkCard {
    pub heading: String,
    pub category: String,
    pub legislator: String,
}

impl From<&Framework> for FrameworkCard {
    fn from(framework: &Framework) -> Self {
        Self {
            heading: framework.heading(),
            category: framework.category_label().to_string(),
            legislator: framework.legislator_label().to_string(),
        }
    }
}

impl FrameworkCard {
    /// Lines shown under the heading, in display order
    pub fn lines(&self) -> [CardLine<'_>; 2] {
        [
            CardLine { label: CATEGORY_LABEL, value: &self.category },
            CardLine { label: LEGISLATOR_LABEL, value: &self.legislator },
        ]
    }
}
