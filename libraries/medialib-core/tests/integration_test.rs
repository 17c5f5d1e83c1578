//! End-to-end behaviour of the public API
//!
//! Each test builds its own media and checks one observable property.

use medialib_core::{
    describe_base, find_by_title, sort_by_duration, MediaContent, MediaLibrary, MediaRef,
    MusicTrack, Playable, Playlist, User,
};
use std::rc::Rc;

fn audio(title: &str, duration: f32) -> MediaRef {
    MediaContent::audio(title, duration, "MP3").unwrap()
}

fn video(title: &str, duration: f32) -> MediaRef {
    MediaContent::video(title, duration, "1080p").unwrap()
}

#[test]
fn every_description_has_title_and_duration() {
    let cases = [
        (MediaContent::audio("Blip", 0.04, "MP3").unwrap(), "0.04"),
        (MediaContent::video("Clip", 1.25, "720p").unwrap(), "1.25"),
        (MediaContent::audio("Song", 12.0, "MP3").unwrap(), "12.0"),
        (MediaContent::video("Film", 5400.5, "4K").unwrap(), "5400.5"),
    ];

    for (item, duration) in cases {
        let text = item.describe();
        assert!(text.contains(item.title()));
        assert!(
            text.contains(&format!("Duration: {duration} sec")),
            "{text:?} should show duration {duration}"
        );
    }
}

#[test]
fn video_resolution_line_comes_after_base_lines() {
    let item = video("Film", 34.0);
    let text = item.describe();

    let base = text.find(&describe_base("Film", 34.0)).unwrap();
    let resolution = text.find("Resolution: 1080p").unwrap();
    assert!(base < resolution);
}

#[test]
fn audio_description_never_uses_base_line() {
    let item = audio("Song", 12.0);
    let base = describe_base("Song", 12.0);

    assert!(!item.describe().lines().any(|line| line == base));
    assert_eq!(item.describe().lines().count(), 1);
}

#[test]
fn playlist_describe_lists_a_before_b() {
    let a = audio("A", 1.0);
    let b = video("B", 2.0);
    let mut playlist = Playlist::new("Ordered");
    playlist.add_content(Rc::clone(&a));
    playlist.add_content(Rc::clone(&b));

    let text = playlist.describe();
    let pos_a = text.find(&a.describe()).unwrap();
    let pos_b = text.find(&b.describe()).unwrap();

    assert!(text.starts_with("Playlist: Ordered"));
    assert!(pos_a < pos_b);
}

#[test]
fn deep_copy_append_leaves_source_count() {
    let mut p = Playlist::new("P");
    p.add_content(audio("One", 1.0));
    p.add_content(audio("Two", 2.0));

    let mut q = p.deep_copy();
    q.add_content(audio("Three", 3.0));

    assert_eq!(p.len(), 2);
    assert_eq!(q.len(), 3);
}

#[test]
fn shallow_copy_append_is_seen_by_source() {
    let mut p = Playlist::new("P");
    p.add_content(audio("One", 1.0));
    p.add_content(audio("Two", 2.0));

    let mut r = p.shallow_copy();
    r.add_content(audio("Three", 3.0));

    assert_eq!(p.len(), 3);
    assert_eq!(p.describe(), r.describe());
}

#[test]
fn sort_stability_example() {
    let mut items = vec![audio("A", 5.0), audio("B", 5.0), audio("C", 1.0)];
    sort_by_duration(&mut items);

    let order: Vec<&str> = items.iter().map(|item| item.title()).collect();
    assert_eq!(order, vec!["C", "A", "B"]);
}

#[test]
fn search_returns_index_zero_on_duplicate_titles() {
    let library = vec![audio("Jazz", 1.0), audio("JAZZ", 2.0)];
    let found = find_by_title(&library, "jazz").unwrap();

    assert!(Rc::ptr_eq(found, &library[0]));
}

#[test]
fn search_absence_is_none() {
    let library: MediaLibrary = vec![audio("Jazz", 1.0)].into_iter().collect();
    assert!(library.find_by_title("Nonexistent").is_none());
}

#[test]
fn user_and_standalone_playlist_share_items() {
    let song = audio("Classical Music", 300.0);
    let film = video("Nature Documentary", 1200.0);

    let mut user = User::new("Alice");
    user.add_media(Rc::clone(&song));
    user.add_media(Rc::clone(&film));

    let mut playlist = Playlist::new("My Playlist");
    playlist.add_content(Rc::clone(&song));
    playlist.add_content(Rc::clone(&film));

    assert!(Rc::ptr_eq(&user.playlist().contents()[0], &playlist.contents()[0]));
    assert!(!user.playlist().shares_contents_with(&playlist));
}

#[test]
fn playable_and_media_are_separate_families() {
    fn controls(item: &dyn Playable) -> [String; 3] {
        [item.play(), item.pause(), item.stop()]
    }

    let track = MusicTrack::new("Shape of You", "Ed Sheeran");
    let [play, pause, stop] = controls(&track);

    assert_eq!(play, "Playing music: Shape of You by Ed Sheeran");
    assert_eq!(pause, "Pausing music: Shape of You");
    assert_eq!(stop, "Stopping music: Shape of You");
}
