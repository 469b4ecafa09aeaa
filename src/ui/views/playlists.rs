use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState},
};

use crate::{
    event::events::Event,
    http::models::Playlist,
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        state::DashboardState,
        traits::{Action, View},
        util::{display_name, render_empty},
    },
    util::colors,
};

pub const NO_PLAYLISTS: &str = "You have no playlists yet";

pub fn playlist_line(playlist: &Playlist) -> String {
    let name = display_name(&playlist.name, "Untitled playlist");
    let owner = display_name(&playlist.owner.display_name, "unknown");
    format!("{} · {} tracks · by {}", name, playlist.tracks.total, owner)
}

pub struct Playlists {
    list_state: ListState,
}

impl Default for Playlists {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }
}

#[async_trait]
impl View for Playlists {
    fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        state: &DashboardState,
        _ctx: &AppContext,
    ) {
        match &state.playlists {
            None => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Loading playlists…");
                f.render_widget(spinner, area);
            }
            Some(playlists) if playlists.is_empty() => {
                render_empty(f, area, NO_PLAYLISTS);
            }
            Some(playlists) => {
                let items: Vec<ListItem> = playlists
                    .iter()
                    .map(|p| ListItem::new(playlist_line(p)))
                    .collect();
                let list = List::new(items)
                    .highlight_style(
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");
                if self.list_state.selected().is_none() {
                    self.list_state.select(Some(0));
                }
                f.render_stateful_widget(list, area, &mut self.list_state);
            }
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &DashboardState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let len = state.playlists.as_ref().map_or(0, Vec::len);
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| if i >= len - 1 { i } else { i + 1 });
                    self.list_state.select(Some(i));
                }
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| i.saturating_sub(1));
                    self.list_state.select(Some(i));
                }
                Some(Action::None)
            }
            KeyCode::Enter => {
                if let (Some(playlists), Some(i)) =
                    (&state.playlists, self.list_state.selected())
                {
                    if let Some(playlist) = playlists.get(i) {
                        if !playlist.uri.is_empty() {
                            let _ = ctx
                                .event_tx
                                .send(Event::PlayPlaylist(playlist.uri.clone()));
                        }
                    }
                }
                Some(Action::None)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::http::models::{Owner, TrackCount};
    use crate::http::ApiService;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    #[test]
    fn playlist_line_shows_name_count_and_owner() {
        let playlist = Playlist {
            name: "Focus".into(),
            tracks: TrackCount { total: 31 },
            owner: Owner {
                display_name: "Ada".into(),
            },
            ..Default::default()
        };

        assert_eq!(playlist_line(&playlist), "Focus · 31 tracks · by Ada");
    }

    #[test]
    fn playlist_line_degrades_missing_fields() {
        assert_eq!(
            playlist_line(&Playlist::default()),
            "Untitled playlist · 0 tracks · by unknown"
        );
    }

    #[test]
    fn empty_playlist_response_renders_empty_state_message() {
        let (event_tx, _event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(&Config::default()).unwrap());
        let ctx = AppContext::new(api, event_tx);

        let mut state = DashboardState::new();
        state.playlists = Some(Vec::new());

        let mut view = Playlists::default();
        let mut terminal = Terminal::new(TestBackend::new(48, 6)).unwrap();
        terminal
            .draw(|f| view.render(f, f.area(), &state, &ctx))
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains(NO_PLAYLISTS));
    }
}
