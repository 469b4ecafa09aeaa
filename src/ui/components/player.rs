use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use crate::http::models::{PlaybackDisplay, PlaybackState, RepeatMode};
use crate::ui::util::{DEFAULT_ALBUM_ART, artwork, playback_glyph, track_line};
use crate::util::colors;
use crate::util::format::truncate;

pub const NO_TRACK_PLACEHOLDER: &str = "No active track — start playback on a device";

/// Bottom player bar: now-playing summary, transport controls, volume.
pub struct PlayerBar<'a> {
    playback: &'a PlaybackState,
    volume: u8,
    shuffle: bool,
    repeat: RepeatMode,
}

impl<'a> PlayerBar<'a> {
    pub fn new(
        playback: &'a PlaybackState,
        volume: u8,
        shuffle: bool,
        repeat: RepeatMode,
    ) -> Self {
        Self {
            playback,
            volume,
            shuffle,
            repeat,
        }
    }
}

pub fn now_playing_line(playback: &PlaybackState) -> String {
    match &playback.track {
        Some(track) => track_line(track),
        None => NO_TRACK_PLACEHOLDER.to_string(),
    }
}

/// The play control only does something while a track is active; render it
/// disabled otherwise.
pub fn controls_enabled(display: PlaybackDisplay) -> bool {
    display != PlaybackDisplay::NoTrack
}

fn repeat_icon(mode: RepeatMode) -> &'static str {
    match mode {
        RepeatMode::Off => "repeat:off",
        RepeatMode::Context => "repeat:all",
        RepeatMode::Track => "repeat:one",
    }
}

impl Widget for PlayerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(24),
                Constraint::Length(24),
                Constraint::Length(18),
            ])
            .split(area);

        let display = self.playback.display();
        let enabled = controls_enabled(display);
        let text_style = if enabled {
            Style::default().fg(colors::TEXT)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let summary = truncate(&now_playing_line(self.playback), chunks[0].width as usize);
        let mut lines = vec![Line::styled(summary, text_style)];
        if let Some(track) = &self.playback.track {
            let art = artwork(&track.album.images, DEFAULT_ALBUM_ART);
            lines.push(Line::styled(
                art.to_string(),
                Style::default().fg(colors::NEUTRAL),
            ));
        }
        Paragraph::new(lines).render(chunks[0], buf);

        let glyph_style = if enabled {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let shuffle_span = if self.shuffle {
            Span::from("shuffle").fg(colors::PRIMARY)
        } else {
            Span::from("shuffle").fg(colors::NEUTRAL)
        };
        let repeat_span = match self.repeat {
            RepeatMode::Off => Span::from(repeat_icon(self.repeat)).fg(colors::NEUTRAL),
            _ => Span::from(repeat_icon(self.repeat)).fg(colors::PRIMARY),
        };
        let skip_color = if enabled { colors::TEXT } else { colors::NEUTRAL };
        let controls = Line::from(vec![
            shuffle_span,
            Span::from("  ⏮ ").fg(skip_color),
            Span::styled(playback_glyph(display), glyph_style),
            Span::from(" ⏭  ").fg(skip_color),
            repeat_span,
        ]);
        Paragraph::new(controls).centered().render(chunks[1], buf);

        Gauge::default()
            .ratio(f64::from(self.volume.min(100)) / 100.0)
            .label(format!("{}%", self.volume))
            .gauge_style(Style::default().fg(colors::PRIMARY).bg(colors::BACKGROUND))
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::models::Track;

    fn with_track(is_playing: bool) -> PlaybackState {
        PlaybackState {
            track: Some(Track {
                name: "Song".into(),
                ..Default::default()
            }),
            is_playing,
        }
    }

    #[test]
    fn playing_state_shows_pause_glyph() {
        assert_eq!(playback_glyph(with_track(true).display()), "⏸");
    }

    #[test]
    fn paused_state_shows_play_glyph() {
        assert_eq!(playback_glyph(with_track(false).display()), "▶");
    }

    #[test]
    fn no_track_disables_controls_and_shows_placeholder() {
        let playback = PlaybackState::default();
        assert!(!controls_enabled(playback.display()));
        assert_eq!(now_playing_line(&playback), NO_TRACK_PLACEHOLDER);
    }

    #[test]
    fn active_track_enables_controls() {
        assert!(controls_enabled(with_track(false).display()));
    }
}
