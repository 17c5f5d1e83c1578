//! Medialib Core
//!
//! Platform-agnostic media types, playlists and library utilities for Medialib.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `MediaContent` (audio and video), `MusicTrack`, `Playlist`, `User`
//! - **Core Traits**: `Playable`
//! - **Library Utilities**: stable duration sort, case-insensitive title search
//! - **Error Handling**: Unified `MediaError` and `Result` types
//!
//! Nothing in this crate performs I/O. Operations that "print" return the
//! rendered text and leave writing it to the caller.
//!
//! # Example
//!
//! ```rust
//! use medialib_core::types::{MediaContent, Playlist, User};
//! use std::rc::Rc;
//!
//! let song = MediaContent::audio("Classical Music", 300.0, "MP3").unwrap();
//! let film = MediaContent::video("Nature Documentary", 1200.0, "1080p").unwrap();
//!
//! let mut user = User::new("Alice");
//! user.add_media(Rc::clone(&song));
//!
//! let mut playlist = Playlist::new("My Playlist");
//! playlist.add_content(song);
//! playlist.add_content(film);
//!
//! let deep = playlist.deep_copy();
//! assert!(!deep.shares_contents_with(&playlist));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod library;
pub mod sample;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MediaError, Result};
pub use library::{find_by_title, sort_by_duration, MediaLibrary};
pub use traits::Playable;

pub use types::{
    describe_base, AudioContent, MediaContent, MediaRef, MusicTrack, Playlist, User,
    VideoContent,
};
