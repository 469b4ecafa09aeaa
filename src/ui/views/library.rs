use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    context::AppContext,
    state::DashboardState,
    traits::{Action, View},
};
use crate::util::colors;

/// Aggregate library stats. The gateway has no listening-time figure, so
/// that row renders a fixed placeholder.
pub fn stats_lines(liked_total: u64, playlist_total: u64) -> Vec<String> {
    vec![
        format!("Liked tracks   {}", liked_total),
        format!("Playlists      {}", playlist_total),
        "Listening time ∞ min".to_string(),
    ]
}

#[derive(Default)]
pub struct Library;

#[async_trait]
impl View for Library {
    fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        state: &DashboardState,
        _ctx: &AppContext,
    ) {
        let lines: Vec<Line> = stats_lines(state.favorites_total, state.playlist_total)
            .into_iter()
            .map(Line::from)
            .collect();

        let stats = Paragraph::new(lines)
            .style(Style::default().fg(colors::TEXT))
            .block(Block::default().borders(Borders::ALL).title("Your library"));
        f.render_widget(stats, area);
    }

    async fn handle_input(
        &mut self,
        _key: KeyEvent,
        _state: &DashboardState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_render_counts_and_placeholder_time() {
        let lines = stats_lines(42, 7);

        assert_eq!(lines[0], "Liked tracks   42");
        assert_eq!(lines[1], "Playlists      7");
        assert!(lines[2].contains("∞"));
    }
}
