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
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        state::DashboardState,
        traits::{Action, View},
        util::{render_empty, track_line},
    },
    util::colors,
};

pub const NO_FAVORITES: &str = "You have no liked tracks yet";

pub struct Favorites {
    list_state: ListState,
}

impl Default for Favorites {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }
}

#[async_trait]
impl View for Favorites {
    fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        state: &DashboardState,
        _ctx: &AppContext,
    ) {
        match &state.favorites {
            None => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Loading liked tracks…");
                f.render_widget(spinner, area);
            }
            Some(items) if items.is_empty() => render_empty(f, area, NO_FAVORITES),
            Some(items) => {
                let rows: Vec<ListItem> = items
                    .iter()
                    .map(|item| ListItem::new(track_line(&item.track)))
                    .collect();
                let list = List::new(rows)
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
        let len = state.favorites.as_ref().map_or(0, Vec::len);
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
                if let (Some(items), Some(i)) =
                    (&state.favorites, self.list_state.selected())
                {
                    if let Some(item) = items.get(i) {
                        if !item.track.uri.is_empty() {
                            let _ = ctx
                                .event_tx
                                .send(Event::Play(Some(item.track.uri.clone())));
                        }
                    }
                }
                Some(Action::None)
            }
            _ => None,
        }
    }
}
