//! Entry views.

use super::*;

/// A borrowed view of one entry in a feed document.
/// The underlying item survives filtering as-is; this view only exposes
/// the fields the filters inspect.
#[derive(Clone, Copy, Debug)]
pub enum EntryRef<'a> {
    /// An rss `<item>`.
    Rss(&'a rss::Item),
    /// An atom `<entry>`.
    Atom(&'a atom_syndication::Entry),
}

impl<'a> EntryRef<'a> {
    /// Get the entry title.
    pub fn title(&self) -> &'a str {
        match self {
            EntryRef::Rss(item) => item.title().unwrap_or(""),
            EntryRef::Atom(entry) => entry.title().value.as_str(),
        }
    }

    /// Get the entry's category labels, in document order.
    pub fn categories(&self) -> Vec<&'a str> {
        match self {
            EntryRef::Rss(item) => {
                item.categories().iter().map(|c| c.name()).collect()
            }
            EntryRef::Atom(entry) => {
                entry.categories().iter().map(|c| c.term()).collect()
            }
        }
    }

    /// Check if the entry carries a label matching the category.
    pub fn has_category(&self, category: &Category) -> bool {
        self.categories().iter().any(|label| category.matches(label))
    }
}
