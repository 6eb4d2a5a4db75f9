//! Filters.

use super::*;

/// A filter is a function that takes an entry and returns true if it
/// passes, or false if it fails.
pub type Filter = Arc<dyn Fn(&EntryRef) -> bool + Send + Sync>;

/// Filter passing entries tagged with the category.
/// An entry with no category labels never passes.
pub fn include_category(category: Category) -> Filter {
    Arc::new(move |entry| entry.has_category(&category))
}

/// Check if an entry passes every filter.
pub(crate) fn passes_filters(filters: &[Filter], entry: &EntryRef) -> bool {
    filters.iter().all(|filter| filter(entry))
}
