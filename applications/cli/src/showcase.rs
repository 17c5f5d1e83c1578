//! Showcase program
//!
//! Output sections, in order:
//! 1. describe + play for each media item, blank line after each
//! 2. play/pause/stop of a `Playable` track
//! 3. the demo user and its playlist
//! 4. a standalone playlist and its shallow and deep copies

use crate::config::ShowcaseSettings;
use crate::error::Result;
use medialib_core::{sample, Playable, Playlist, User};
use std::io::Write;
use std::rc::Rc;

/// Run the showcase, writing everything to `out`
///
/// Invalid settings are rejected before anything is written.
pub fn run<W: Write>(out: &mut W, settings: &ShowcaseSettings) -> Result<()> {
    settings.validate()?;
    let [audio, video] = sample::showcase_media()?;

    for media in [&audio, &video] {
        writeln!(out, "{}", media.describe())?;
        writeln!(out, "{}", media.play())?;
        writeln!(out)?;
    }

    let track = sample::showcase_track();
    let playable: &dyn Playable = &track;
    writeln!(out, "{}", playable.play())?;
    writeln!(out, "{}", playable.pause())?;
    writeln!(out, "{}", playable.stop())?;

    let mut user = User::new(settings.username.as_str());
    user.add_media(Rc::clone(&audio));
    user.add_media(Rc::clone(&video));
    writeln!(out, "{}", user.describe())?;

    let mut original = Playlist::default();
    original.set_name(settings.playlist_name.as_str());
    original.add_content(audio);
    original.add_content(video);

    let shallow = original.shallow_copy();
    let deep = original.deep_copy();
    tracing::info!(
        shallow_shares = shallow.shares_contents_with(&original),
        deep_shares = deep.shares_contents_with(&original),
        "Copied playlist {:?}",
        original.name()
    );

    for (heading, playlist) in [
        ("Original Playlist", &original),
        ("Shallow Cloned Playlist", &shallow),
        ("Deep Cloned Playlist", &deep),
    ] {
        writeln!(out)?;
        writeln!(out, "{heading}:")?;
        writeln!(out, "{}", playlist.describe())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::CliError;

    fn render(settings: &ShowcaseSettings) -> String {
        let mut out = Vec::new();
        run(&mut out, settings).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn first_item_block() {
        let text = render(&AppConfig::default().showcase);

        assert!(text.starts_with(
            "Audio Title: Classical Music, Duration: 300.0 sec, Format: MP3\n\
             Playing audio: Classical Music in format MP3\n\
             \n"
        ));
    }

    #[test]
    fn settings_name_user_and_playlist() {
        let settings = ShowcaseSettings {
            username: "Bob".to_string(),
            playlist_name: "Road Trip".to_string(),
        };
        let text = render(&settings);

        assert!(text.contains("User: Bob\nPlaylist: Bob's Playlist\n"));
        assert!(text.contains("Original Playlist:\nPlaylist: Road Trip\n"));
    }

    #[test]
    fn copies_render_identically() {
        let text = render(&AppConfig::default().showcase);

        let block = |heading: &str| -> String {
            let start = text.find(heading).unwrap() + heading.len();
            text[start..]
                .lines()
                .skip(1)
                .take(4)
                .collect::<Vec<_>>()
                .join("\n")
        };

        let original = block("Original Playlist:");
        assert_eq!(original, block("Shallow Cloned Playlist:"));
        assert_eq!(original, block("Deep Cloned Playlist:"));
    }

    #[test]
    fn blank_username_writes_nothing() {
        let settings = ShowcaseSettings {
            username: " ".to_string(),
            playlist_name: "Road Trip".to_string(),
        };
        let mut out = Vec::new();

        assert!(matches!(run(&mut out, &settings), Err(CliError::Config(_))));
        assert!(out.is_empty());
    }
}
