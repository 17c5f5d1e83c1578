//! Domain types

mod media;
mod music_track;
mod playlist;
mod user;

pub use media::{describe_base, AudioContent, MediaContent, MediaRef, VideoContent};
pub use music_track::MusicTrack;
pub use playlist::Playlist;
pub use user::User;
