pub mod handler;

use crate::http::models::{Image, PlaybackDisplay, Track};
use crate::util::{colors, format::format_duration};
use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

// Art served by the gateway for items that ship no images of their own.
pub const DEFAULT_ALBUM_ART: &str = "/static/images/default-album.png";

/// First usable artwork URL, or the designated default for the item kind.
pub fn artwork<'a>(images: &'a [Image], fallback: &'a str) -> &'a str {
    images
        .iter()
        .map(|image| image.url.as_str())
        .find(|url| !url.is_empty())
        .unwrap_or(fallback)
}

/// Fallback text for fields the gateway left blank.
pub fn display_name<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.is_empty() { fallback } else { name }
}

pub fn playback_glyph(display: PlaybackDisplay) -> &'static str {
    match display {
        PlaybackDisplay::Playing => "⏸",
        PlaybackDisplay::Paused | PlaybackDisplay::NoTrack => "▶",
    }
}

/// Designated empty-state rendering for a collection that loaded empty.
pub fn render_empty(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .centered()
        .style(Style::default().fg(colors::NEUTRAL));
    f.render_widget(paragraph, area);
}

/// One-line track card: name, artists, album, duration.
pub fn track_line(track: &Track) -> String {
    let name = display_name(&track.name, "Unknown Track");
    let album = display_name(&track.album.name, "Unknown Album");
    format!(
        "{} — {} · {} · {}",
        name,
        track.artist_line(),
        album,
        format_duration(track.duration_ms)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::models::{AlbumRef, ArtistRef};

    #[test]
    fn artwork_falls_back_to_default_path() {
        assert_eq!(artwork(&[], DEFAULT_ALBUM_ART), DEFAULT_ALBUM_ART);

        let blank = vec![Image { url: String::new() }];
        assert_eq!(artwork(&blank, DEFAULT_ALBUM_ART), DEFAULT_ALBUM_ART);

        let images = vec![Image {
            url: "https://cdn.example/cover.png".into(),
        }];
        assert_eq!(
            artwork(&images, DEFAULT_ALBUM_ART),
            "https://cdn.example/cover.png"
        );
    }

    #[test]
    fn glyph_matches_playback_display() {
        assert_eq!(playback_glyph(PlaybackDisplay::Playing), "⏸");
        assert_eq!(playback_glyph(PlaybackDisplay::Paused), "▶");
        assert_eq!(playback_glyph(PlaybackDisplay::NoTrack), "▶");
    }

    #[test]
    fn track_line_degrades_missing_fields_without_panicking() {
        let track = Track::default();
        assert_eq!(
            track_line(&track),
            "Unknown Track — Unknown Artist · Unknown Album · 0:00"
        );
    }

    #[test]
    fn track_line_renders_full_card() {
        let track = Track {
            name: "Signal".into(),
            duration_ms: 65_000,
            artists: vec![
                ArtistRef {
                    name: "One".into(),
                    ..Default::default()
                },
                ArtistRef {
                    name: "Two".into(),
                    ..Default::default()
                },
            ],
            album: AlbumRef {
                name: "Noise".into(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(track_line(&track), "Signal — One, Two · Noise · 1:05");
    }
}
