//! Playlist domain type
//!
//! A playlist is a name plus a handle to an ordered sequence of media
//! references. Duplication comes in two explicit forms:
//!
//! ```text
//! shallow_copy:  P ──┐
//!                    ├──> [a, b]        one sequence, two playlists
//!                R ──┘
//!
//! deep_copy:     P ────> [a, b] ─┐
//!                                ├──> a, b   two sequences, shared items
//!                Q ────> [a, b] ─┘
//! ```
//!
//! Items are never cloned by either form.

use super::media::MediaRef;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Named, ordered collection of media references
///
/// Insertion order is kept and duplicates are allowed. `Playlist` does not
/// implement `Clone`; use [`Playlist::shallow_copy`] or [`Playlist::deep_copy`].
#[derive(Debug, Default)]
pub struct Playlist {
    name: String,
    contents: Rc<RefCell<Vec<MediaRef>>>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: Rc::default(),
        }
    }

    /// Replace the display name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an item
    ///
    /// The sequence may be shared with shallow copies, which will see the new entry.
    pub fn add_content(&mut self, content: MediaRef) {
        tracing::trace!(playlist = %self.name, title = content.title(), "Adding content");
        self.contents.borrow_mut().push(content);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.contents.borrow().len()
    }

    /// Whether the playlist has no entries
    pub fn is_empty(&self) -> bool {
        self.contents.borrow().is_empty()
    }

    /// Snapshot of the entries in insertion order
    pub fn contents(&self) -> Vec<MediaRef> {
        self.contents.borrow().clone()
    }

    /// Sum of entry durations in seconds
    pub fn total_duration(&self) -> f32 {
        self.contents.borrow().iter().map(|item| item.duration()).sum()
    }

    /// Name line followed by every entry's description, in insertion order
    pub fn describe(&self) -> String {
        let contents = self.contents.borrow();
        let mut lines = Vec::with_capacity(contents.len() + 1);

        lines.push(format!("Playlist: {}", self.name));
        lines.extend(contents.iter().map(|item| item.describe()));

        lines.join("\n")
    }

    /// Copy the name and alias the sequence
    ///
    /// Entries added through either playlist are visible through both.
    pub fn shallow_copy(&self) -> Self {
        tracing::debug!(playlist = %self.name, entries = self.len(), "Shallow copy");

        Self {
            name: self.name.clone(),
            contents: Rc::clone(&self.contents),
        }
    }

    /// Copy the name into a new playlist with its own sequence
    ///
    /// The new sequence holds the same item handles; the items themselves are shared.
    pub fn deep_copy(&self) -> Self {
        tracing::debug!(playlist = %self.name, entries = self.len(), "Deep copy");

        Self {
            name: self.name.clone(),
            contents: Rc::new(RefCell::new(self.contents.borrow().clone())),
        }
    }

    /// Whether both playlists alias the same underlying sequence
    pub fn shares_contents_with(&self, other: &Playlist) -> bool {
        Rc::ptr_eq(&self.contents, &other.contents)
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
