//! Categories.

use super::*;

/// A category label attached to a feed entry.
/// Labels are matched exactly and case-sensitively, no normalization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Generate a new category.
    pub fn new(from: impl Into<String>) -> Self {
        Self(from.into())
    }

    /// Check a label against this category.
    pub fn matches(&self, label: &str) -> bool {
        self.0 == label
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> String {
        value.0
    }
}

impl From<&Category> for String {
    fn from(value: &Category) -> String {
        value.0.clone()
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category(value)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category(String::from(value))
    }
}

impl AsRef<String> for Category {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
