use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    event::events::Event,
    http::models::{SearchResults, Track},
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        state::DashboardState,
        traits::{Action, View},
        util::{display_name, render_empty, track_line},
    },
    util::colors,
};

pub const NOTHING_FOUND: &str = "Nothing found";
pub const SEARCH_PROMPT: &str = "Type to search tracks, artists and albums";

/// Flat result listing: a section header per non-empty category, then its
/// cards. An entirely empty response collapses to the nothing-found state,
/// which [`Search::render`] draws instead of an empty container.
pub fn results_lines(results: &SearchResults) -> Vec<String> {
    let mut lines = Vec::new();

    if !results.tracks.items.is_empty() {
        lines.push("Tracks".to_string());
        lines.extend(results.tracks.items.iter().map(track_line));
    }
    if !results.artists.items.is_empty() {
        lines.push("Artists".to_string());
        for artist in &results.artists.items {
            let genres = if artist.genres.is_empty() {
                "Popular music".to_string()
            } else {
                artist.genres[..artist.genres.len().min(2)].join(", ")
            };
            lines.push(format!(
                "{} · {}",
                display_name(&artist.name, "Unknown Artist"),
                genres
            ));
        }
    }
    if !results.albums.items.is_empty() {
        lines.push("Albums".to_string());
        for album in &results.albums.items {
            let artists = if album.artists.is_empty() {
                "Unknown Artist".to_string()
            } else {
                album
                    .artists
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let year = album.release_date.get(..4).unwrap_or("");
            let mut line = format!(
                "{} — {}",
                display_name(&album.name, "Unknown Album"),
                artists
            );
            if !year.is_empty() {
                line.push_str(&format!(" · {}", year));
            }
            lines.push(line);
        }
    }

    lines
}

/// Track behind a listing row, if the row is a track card.
pub fn track_at<'a>(results: &'a SearchResults, line: usize) -> Option<&'a Track> {
    if results.tracks.items.is_empty() {
        return None;
    }
    // Row 0 is the "Tracks" header.
    if line == 0 || line > results.tracks.items.len() {
        return None;
    }
    results.tracks.items.get(line - 1)
}

pub struct Search {
    input: String,
    is_editing: bool,
    list_state: ListState,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            input: String::new(),
            is_editing: true,
            list_state: ListState::default(),
        }
    }
}

impl Search {
    /// Forward the full input text; the controller owns debounce and
    /// sequencing.
    fn emit_input(&self, ctx: &AppContext) {
        let _ = ctx.event_tx.send(Event::SearchInput(self.input.clone()));
    }
}

#[async_trait]
impl View for Search {
    fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        state: &DashboardState,
        _ctx: &AppContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let input_style = if self.is_editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let input = Paragraph::new(self.input.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search")
                .border_style(input_style),
        );
        f.render_widget(input, chunks[0]);

        let results_area = chunks[1];
        match &state.search.results {
            None if state.search.in_flight => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Searching…");
                f.render_widget(spinner, results_area);
            }
            None => render_empty(f, results_area, SEARCH_PROMPT),
            Some(results) if results.is_empty() => {
                render_empty(f, results_area, NOTHING_FOUND);
            }
            Some(results) => {
                let items: Vec<ListItem> = results_lines(results)
                    .into_iter()
                    .map(ListItem::new)
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
                f.render_stateful_widget(list, results_area, &mut self.list_state);
            }
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &DashboardState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.is_editing {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    None
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                    self.emit_input(ctx);
                    Some(Action::None)
                }
                KeyCode::Backspace => {
                    self.input.pop();
                    self.emit_input(ctx);
                    Some(Action::None)
                }
                KeyCode::Esc | KeyCode::Enter => {
                    self.is_editing = false;
                    Some(Action::None)
                }
                _ => Some(Action::None),
            }
        } else {
            match key.code {
                KeyCode::Char('/') => {
                    self.is_editing = true;
                    Some(Action::None)
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let i = self.list_state.selected().unwrap_or(0);
                    self.list_state.select(Some(i + 1));
                    Some(Action::None)
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    let i = self.list_state.selected().unwrap_or(0);
                    if i > 0 {
                        self.list_state.select(Some(i - 1));
                    }
                    Some(Action::None)
                }
                KeyCode::Enter => {
                    if let (Some(results), Some(i)) =
                        (&state.search.results, self.list_state.selected())
                    {
                        if let Some(track) = track_at(results, i) {
                            if !track.uri.is_empty() {
                                let _ = ctx
                                    .event_tx
                                    .send(Event::Play(Some(track.uri.clone())));
                            }
                        }
                    }
                    Some(Action::None)
                }
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::models::Page;

    fn one_track_results() -> SearchResults {
        SearchResults {
            tracks: Page {
                items: vec![Track {
                    name: "Signal".into(),
                    uri: "track:1".into(),
                    ..Default::default()
                }],
                total: 1,
            },
            ..Default::default()
        }
    }

    #[test]
    fn single_track_renders_one_card_and_no_other_sections() {
        let lines = results_lines(&one_track_results());

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Tracks");
        assert!(lines[1].starts_with("Signal"));
        assert!(!lines.iter().any(|l| l == "Artists" || l == "Albums"));
        assert!(!lines.iter().any(|l| l.contains(NOTHING_FOUND)));
    }

    #[test]
    fn empty_results_produce_no_section_lines() {
        // The view renders the nothing-found state instead of a container.
        assert!(results_lines(&SearchResults::default()).is_empty());
        assert!(SearchResults::default().is_empty());
    }

    #[test]
    fn track_rows_map_back_to_their_tracks() {
        let results = one_track_results();

        assert!(track_at(&results, 0).is_none()); // header row
        assert_eq!(track_at(&results, 1).map(|t| t.uri.as_str()), Some("track:1"));
        assert!(track_at(&results, 2).is_none());
    }

    #[test]
    fn artist_genres_are_capped_and_fall_back() {
        let results = SearchResults {
            artists: Page {
                items: vec![crate::http::models::Artist {
                    name: "Goat".into(),
                    genres: vec!["rock".into(), "psych".into(), "folk".into()],
                    ..Default::default()
                }],
                total: 1,
            },
            ..Default::default()
        };

        let lines = results_lines(&results);
        assert_eq!(lines[0], "Artists");
        assert_eq!(lines[1], "Goat · rock, psych");
    }
}
