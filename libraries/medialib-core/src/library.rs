//! Library utilities
//!
//! Duration sort and title search over flat collections of media, plus the
//! `MediaLibrary` aggregate that wraps them.

use crate::types::MediaRef;
use std::cmp::Ordering;
use std::rc::Rc;

/// Sort by ascending duration
///
/// Stable: items with equal durations keep their relative order.
pub fn sort_by_duration(items: &mut [MediaRef]) {
    tracing::debug!(items = items.len(), "Sorting by duration");

    // durations are finite, so partial_cmp never returns None
    items.sort_by(|a, b| {
        a.duration()
            .partial_cmp(&b.duration())
            .unwrap_or(Ordering::Equal)
    });
}

/// First item whose title equals `query`, ignoring case
///
/// Returns `None` when nothing matches. An empty query only matches an empty title.
pub fn find_by_title<'a>(items: &'a [MediaRef], query: &str) -> Option<&'a MediaRef> {
    let needle = query.to_lowercase();
    let found = items
        .iter()
        .find(|item| item.title().to_lowercase() == needle);

    tracing::debug!(query, found = found.is_some(), "Title search");
    found
}

/// Flat collection of media references
#[derive(Debug, Default)]
pub struct MediaLibrary {
    items: Vec<MediaRef>,
}

impl MediaLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item
    pub fn add_content(&mut self, content: MediaRef) {
        self.items.push(content);
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the library has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in current order
    pub fn iter(&self) -> std::slice::Iter<'_, MediaRef> {
        self.items.iter()
    }

    /// Sort in place by ascending duration (stable)
    pub fn sort_by_duration(&mut self) {
        sort_by_duration(&mut self.items);
    }

    /// First item with a case-insensitively matching title
    pub fn find_by_title(&self, query: &str) -> Option<MediaRef> {
        find_by_title(&self.items, query).map(Rc::clone)
    }

    /// Every item's description, in current order
    pub fn describe(&self) -> String {
        self.items
            .iter()
            .map(|item| item.describe())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<MediaRef> for MediaLibrary {
    fn from_iter<I: IntoIterator<Item = MediaRef>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MediaLibrary {
    type Item = &'a MediaRef;
    type IntoIter = std::slice::Iter<'a, MediaRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
