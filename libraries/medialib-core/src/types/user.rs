//! User domain type

use super::media::MediaRef;
use super::playlist::Playlist;
use std::fmt;

/// User with exactly one playlist
#[derive(Debug)]
pub struct User {
    /// Display name
    username: String,

    /// Owned playlist, named "<username>'s Playlist"
    playlist: Playlist,
}

impl User {
    /// Create a user together with its playlist
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        let playlist = Playlist::new(format!("{}'s Playlist", username));

        Self { username, playlist }
    }

    /// Display name
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The owned playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Append an item to the user's playlist
    pub fn add_media(&mut self, content: MediaRef) {
        self.playlist.add_content(content);
    }

    /// Username line followed by the playlist description
    pub fn describe(&self) -> String {
        format!("User: {}\n{}", self.username, self.playlist.describe())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
