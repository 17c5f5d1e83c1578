//! Core traits for Medialib

/// Playback controls
///
/// Implementers describe each action instead of driving an output device.
/// Calls are independent: no paused/stopped state is kept between them.
///
/// This family is separate from `MediaContent`. A `MediaContent` has its own
/// `play` but is not `Playable`.
pub trait Playable {
    /// Start playback
    fn play(&self) -> String;

    /// Pause playback
    fn pause(&self) -> String;

    /// Stop playback
    fn stop(&self) -> String;
}
