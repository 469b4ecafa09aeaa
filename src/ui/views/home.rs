use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{
    event::events::Event,
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        state::DashboardState,
        traits::{Action, View},
        util::{render_empty, track_line},
    },
    util::colors,
};

pub const NO_RECENT: &str = "No recent tracks";
pub const NO_RECOMMENDATIONS: &str = "Recommendations appear once you listen to music";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Recent,
    Recommended,
}

/// Home: listening history on top, suggested tracks below.
pub struct Home {
    recent_state: ListState,
    recommended_state: ListState,
    focus: Pane,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            recent_state: ListState::default(),
            recommended_state: ListState::default(),
            focus: Pane::Recent,
        }
    }
}

impl Home {
    fn list(tracks: Vec<String>, title: &'static str, focused: bool) -> List<'static> {
        let items: Vec<ListItem> = tracks.into_iter().map(ListItem::new).collect();
        let border_style = if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border_style),
            )
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ")
    }

    fn selected_uri(&self, state: &DashboardState) -> Option<String> {
        match self.focus {
            Pane::Recent => {
                let items = state.recent.as_deref()?;
                let item = items.get(self.recent_state.selected()?)?;
                Some(item.track.uri.clone())
            }
            Pane::Recommended => {
                let items = state.recommendations.as_deref()?;
                let track = items.get(self.recommended_state.selected()?)?;
                Some(track.uri.clone())
            }
        }
    }

    fn move_cursor(&mut self, state: &DashboardState, delta: i64) {
        let (list_state, len) = match self.focus {
            Pane::Recent => (
                &mut self.recent_state,
                state.recent.as_ref().map_or(0, Vec::len),
            ),
            Pane::Recommended => (
                &mut self.recommended_state,
                state.recommendations.as_ref().map_or(0, Vec::len),
            ),
        };
        if len == 0 {
            return;
        }
        let current = list_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1) as usize;
        list_state.select(Some(next));
    }
}

#[async_trait]
impl View for Home {
    fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        state: &DashboardState,
        _ctx: &AppContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        match &state.recent {
            None => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Loading history…");
                f.render_widget(spinner, chunks[0]);
            }
            Some(items) if items.is_empty() => render_empty(f, chunks[0], NO_RECENT),
            Some(items) => {
                let lines = items.iter().map(|i| track_line(&i.track)).collect();
                let list = Self::list(lines, "Recent", self.focus == Pane::Recent);
                f.render_stateful_widget(list, chunks[0], &mut self.recent_state);
            }
        }

        match &state.recommendations {
            None => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Loading recommendations…");
                f.render_widget(spinner, chunks[1]);
            }
            Some(tracks) if tracks.is_empty() => {
                render_empty(f, chunks[1], NO_RECOMMENDATIONS);
            }
            Some(tracks) => {
                let lines = tracks.iter().map(track_line).collect();
                let list =
                    Self::list(lines, "Recommended", self.focus == Pane::Recommended);
                f.render_stateful_widget(list, chunks[1], &mut self.recommended_state);
            }
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &DashboardState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Pane::Recent => Pane::Recommended,
                    Pane::Recommended => Pane::Recent,
                };
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(state, 1);
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(state, -1);
                Some(Action::None)
            }
            KeyCode::Enter => {
                if let Some(uri) = self.selected_uri(state) {
                    if !uri.is_empty() {
                        let _ = ctx.event_tx.send(Event::Play(Some(uri)));
                    }
                }
                Some(Action::None)
            }
            _ => None,
        }
    }
}
