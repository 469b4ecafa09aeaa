use ratatui::crossterm::event::{KeyCode, KeyEvent, MediaKeyCode};
use tracing::{debug, error, warn};

use crate::{
    config::COMMAND_REPOLL_DELAY,
    event::events::Event,
    ui::{
        app::App,
        state::Section,
        traits::Action,
        tui::{TerminalEvent, Tui},
    },
    util::debounce::{DEBOUNCE_WINDOW, Debounce, SearchDebouncer},
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_terminal_event(app, evt).await;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
        }

        Ok(())
    }

    async fn handle_terminal_event(app: &mut App, evt: TerminalEvent) {
        match evt {
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::FocusGained => app.has_focus = true,
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Tick | TerminalEvent::Resize(_, _) => {}
        }
    }

    async fn handle_key_event(app: &mut App, key: KeyEvent) {
        let section = app.state.section;
        let action = app
            .views
            .active_mut(section)
            .handle_input(key, &app.state, &app.ctx)
            .await;

        match action {
            Some(Action::None) => {}
            Some(action) => Self::dispatch_action(app, action),
            None => {
                if let Some(action) = Self::global_action(key) {
                    Self::dispatch_action(app, action);
                }
            }
        }
    }

    fn global_action(key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char(' ') => Action::TogglePlayPause,
            KeyCode::Char('n') => Action::NextTrack,
            KeyCode::Char('p') => Action::PreviousTrack,
            KeyCode::Char('+') | KeyCode::Char('=') => Action::VolumeUp,
            KeyCode::Char('-') => Action::VolumeDown,
            KeyCode::Char('s') => Action::ToggleShuffle,
            KeyCode::Char('r') => Action::CycleRepeat,
            KeyCode::Char('/') => Action::Navigate(Section::Search),
            KeyCode::Media(MediaKeyCode::PlayPause | MediaKeyCode::Play) => {
                Action::TogglePlayPause
            }
            KeyCode::Media(MediaKeyCode::Pause) => Action::Pause,
            KeyCode::Media(MediaKeyCode::TrackNext) => Action::NextTrack,
            KeyCode::Media(MediaKeyCode::TrackPrevious) => Action::PreviousTrack,
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                match Section::from_index(index) {
                    Some(section) => Action::Navigate(section),
                    None => return None,
                }
            }
            _ => return None,
        };
        Some(action)
    }

    fn dispatch_action(app: &mut App, action: Action) {
        let tx = app.ctx.event_tx.clone();
        let event = match action {
            Action::Quit => {
                app.should_quit = true;
                return;
            }
            Action::TogglePlayPause => Event::Play(None),
            Action::Pause => Event::Pause,
            Action::NextTrack => Event::Next,
            Action::PreviousTrack => Event::Previous,
            Action::VolumeUp => {
                Event::SetVolume(app.state.volume.saturating_add(5).min(100))
            }
            Action::VolumeDown => Event::SetVolume(app.state.volume.saturating_sub(5)),
            Action::ToggleShuffle => Event::ToggleShuffle,
            Action::CycleRepeat => Event::CycleRepeat,
            Action::Navigate(section) => Event::Navigate(section),
            Action::None => return,
        };
        let _ = tx.send(event);
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            // Data arrival: each response replaces its slice of state
            // wholesale.
            Event::ProfileFetched(profile) => app.state.profile = Some(profile),
            Event::PlaybackFetched(snapshot) => app.state.apply_playback(snapshot),
            Event::PlayerStateFetched(player) => {
                app.state.shuffle = player.shuffle_state;
                app.state.repeat = player.repeat_state;
                if let Some(volume) = player.device.volume_percent {
                    app.state.volume = volume.min(100);
                }
            }
            Event::PlaylistsFetched(items, total) => {
                app.state.playlist_total = total.max(items.len() as u64);
                app.state.playlists = Some(items);
            }
            Event::RecentFetched(items) => app.state.recent = Some(items),
            Event::RecommendationsFetched(tracks) => {
                app.state.recommendations = Some(tracks);
            }
            Event::FavoritesFetched(items, total) => {
                app.state.favorites_total = total.max(items.len() as u64);
                app.state.favorites = Some(items);
            }
            Event::SearchCompleted { seq, results } => {
                if app.debouncer.is_current(seq) {
                    app.state.search.results = Some(results);
                    app.state.search.in_flight = false;
                } else {
                    debug!("discarding stale search response (seq {seq})");
                }
            }
            Event::PlaybackCommandAccepted => Self::schedule_repoll(app),
            Event::FetchError(message) => error!("fetch failed: {message}"),

            // Commands
            Event::Navigate(section) => {
                app.state.section = section;
                Self::load_section(app, section);
            }
            Event::SearchInput(text) => Self::on_search_input(app, text),
            Event::Play(uri) => Self::on_play(app, uri),
            Event::PlayPlaylist(uri) => Self::on_play(app, Some(uri)),
            Event::Pause => {
                app.state.playback.is_playing = false;
                let api = app.ctx.api.clone();
                tokio::spawn(async move {
                    if let Err(e) = api.pause().await {
                        warn!("pause failed: {e}");
                    }
                });
            }
            Event::Next => Self::skip(app, true),
            Event::Previous => Self::skip(app, false),
            Event::SetVolume(percent) => {
                app.state.volume = percent;
                let api = app.ctx.api.clone();
                tokio::spawn(async move {
                    if let Err(e) = api.set_volume(percent).await {
                        warn!("set volume failed: {e}");
                    }
                });
            }
            Event::ToggleShuffle => {
                app.state.shuffle = !app.state.shuffle;
                let enabled = app.state.shuffle;
                let api = app.ctx.api.clone();
                tokio::spawn(async move {
                    if let Err(e) = api.set_shuffle(enabled).await {
                        warn!("toggle shuffle failed: {e}");
                    }
                });
            }
            Event::CycleRepeat => {
                app.state.repeat = app.state.repeat.next();
                let mode = app.state.repeat;
                let api = app.ctx.api.clone();
                tokio::spawn(async move {
                    if let Err(e) = api.set_repeat(mode).await {
                        warn!("set repeat failed: {e}");
                    }
                });
            }
        }
    }

    /// Debounced search input. The timer lives under one task key, so a new
    /// keystroke replaces (aborts) the previous timer; the sequence ticket
    /// makes sure a slow response for an old query can never overwrite the
    /// results of a newer one.
    fn on_search_input(app: &mut App, text: String) {
        match app.debouncer.accept(&text) {
            Debounce::Clear => {
                app.task_manager.abort("search_debounce");
                app.state.search.query.clear();
                app.state.search.results = None;
                app.state.search.in_flight = false;
            }
            Debounce::Schedule { seq, query } => {
                app.state.search.query = query.clone();

                // Below the minimum length nothing may fire: cancel any
                // pending timer and keep the current results on screen. The
                // ticket bump in `accept` already invalidated in-flight
                // responses for the longer text this was deleted from.
                if !SearchDebouncer::should_fire(&query) {
                    app.task_manager.abort("search_debounce");
                    app.state.search.in_flight = false;
                    return;
                }

                app.state.search.in_flight = true;
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                app.task_manager.spawn(
                    "search_debounce",
                    tokio::spawn(async move {
                        tokio::time::sleep(DEBOUNCE_WINDOW).await;
                        match api.search(&query).await {
                            Ok(results) => {
                                let _ = tx.send(Event::SearchCompleted { seq, results });
                            }
                            Err(e) => {
                                let _ = tx.send(Event::FetchError(format!(
                                    "search '{query}': {e}"
                                )));
                            }
                        }
                    }),
                );
            }
        }
    }

    /// `uri` plays that context and confirms with a delayed re-poll; no uri
    /// toggles play/pause for the active track, optimistically flipping the
    /// local state and leaving reconciliation to the periodic poll.
    fn on_play(app: &mut App, uri: Option<String>) {
        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();

        match uri {
            Some(uri) => {
                tokio::spawn(async move {
                    match api.play(Some(&uri)).await {
                        Ok(()) => {
                            let _ = tx.send(Event::PlaybackCommandAccepted);
                        }
                        Err(e) => warn!("play {uri} failed: {e}"),
                    }
                });
            }
            None => {
                let was_playing = app.state.toggle_playing();
                tokio::spawn(async move {
                    let result = if was_playing {
                        api.pause().await
                    } else {
                        api.play(None).await
                    };
                    if let Err(e) = result {
                        warn!("play/pause toggle failed: {e}");
                    }
                });
            }
        }
    }

    fn skip(app: &mut App, forward: bool) {
        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();
        tokio::spawn(async move {
            let result = if forward {
                api.next().await
            } else {
                api.previous().await
            };
            match result {
                Ok(()) => {
                    let _ = tx.send(Event::PlaybackCommandAccepted);
                }
                Err(e) => warn!("skip failed: {e}"),
            }
        });
    }

    /// Confirming re-poll after an accepted playback command. Keyed, so a
    /// newer command cancels the re-poll of an older one instead of racing
    /// it.
    pub fn schedule_repoll(app: &mut App) {
        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();
        app.task_manager.spawn(
            "playback_repoll",
            tokio::spawn(async move {
                tokio::time::sleep(COMMAND_REPOLL_DELAY).await;
                match api.fetch_currently_playing().await {
                    Ok(snapshot) => {
                        let _ = tx.send(Event::PlaybackFetched(snapshot));
                    }
                    Err(e) => warn!("confirming re-poll failed: {e}"),
                }
            }),
        );
    }

    /// Section-specific refresh on navigation. Every loader is an isolated
    /// task; a failing one logs and leaves the other sections alone.
    pub fn load_section(app: &mut App, section: Section) {
        match section {
            Section::Home => {
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                app.task_manager.spawn(
                    "load_recent",
                    tokio::spawn(async move {
                        match api.fetch_recently_played().await {
                            Ok(page) => {
                                let _ = tx.send(Event::RecentFetched(page.items));
                            }
                            Err(e) => {
                                let _ = tx.send(Event::FetchError(format!(
                                    "recently played: {e}"
                                )));
                            }
                        }
                    }),
                );

                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                app.task_manager.spawn(
                    "load_recommendations",
                    tokio::spawn(async move {
                        match api.fetch_recommendations().await {
                            Ok(recs) => {
                                let _ = tx
                                    .send(Event::RecommendationsFetched(recs.tracks));
                            }
                            Err(e) => {
                                let _ = tx.send(Event::FetchError(format!(
                                    "recommendations: {e}"
                                )));
                            }
                        }
                    }),
                );
            }
            // Content is live as you type; nothing to refresh.
            Section::Search => {}
            // Stats are the favorites and playlist totals; both loaders
            // below keep them current.
            Section::Library | Section::Favorites => {
                Self::load_favorites(app);
                if section == Section::Library {
                    Self::load_playlists(app);
                }
            }
            Section::Playlists => Self::load_playlists(app),
        }
    }

    pub fn load_playlists(app: &mut App) {
        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();
        app.task_manager.spawn(
            "load_playlists",
            tokio::spawn(async move {
                match api.fetch_playlists().await {
                    Ok(page) => {
                        let _ = tx.send(Event::PlaylistsFetched(page.items, page.total));
                    }
                    Err(e) => {
                        let _ = tx.send(Event::FetchError(format!("playlists: {e}")));
                    }
                }
            }),
        );
    }

    pub fn load_favorites(app: &mut App) {
        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();
        app.task_manager.spawn(
            "load_favorites",
            tokio::spawn(async move {
                match api.fetch_liked_tracks().await {
                    Ok(page) => {
                        let _ = tx.send(Event::FavoritesFetched(page.items, page.total));
                    }
                    Err(e) => {
                        let _ = tx.send(Event::FetchError(format!("liked tracks: {e}")));
                    }
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::http::models::SearchResults;

    fn app() -> App {
        App::new(Config::default()).unwrap()
    }

    #[tokio::test]
    async fn accepted_command_schedules_single_repoll() {
        let mut app = app();

        EventHandler::handle_action(&mut app, Event::PlaybackCommandAccepted);
        EventHandler::handle_action(&mut app, Event::PlaybackCommandAccepted);

        assert!(app.task_manager.contains("playback_repoll"));
        // The confirming fetch is delayed; nothing arrives synchronously.
        assert!(app.event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn stale_search_response_is_discarded() {
        let mut app = app();

        // Two keystrokes: the first query's response is now stale.
        let old = match app.debouncer.accept("ab") {
            Debounce::Schedule { seq, .. } => seq,
            Debounce::Clear => unreachable!(),
        };
        let _ = app.debouncer.accept("abc");
        app.task_manager.abort("search_debounce");

        EventHandler::handle_action(
            &mut app,
            Event::SearchCompleted {
                seq: old,
                results: SearchResults::default(),
            },
        );
        assert!(app.state.search.results.is_none());
    }

    #[tokio::test]
    async fn sub_minimum_query_fires_nothing_and_stops_the_spinner() {
        let mut app = app();
        app.state.search.in_flight = true;
        app.state.search.results = Some(SearchResults::default());

        EventHandler::handle_action(&mut app, Event::SearchInput("a".into()));

        // No timer means no request can ever fire, so the spinner must not
        // be left waiting for a completion that never comes.
        assert!(!app.task_manager.contains("search_debounce"));
        assert!(!app.state.search.in_flight);
        // Displayed results stay as they were.
        assert!(app.state.search.results.is_some());
        assert!(app.event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn emptied_input_clears_results_immediately() {
        let mut app = app();
        app.state.search.in_flight = true;
        app.state.search.results = Some(SearchResults::default());

        EventHandler::handle_action(&mut app, Event::SearchInput("  ".into()));

        assert!(app.state.search.results.is_none());
        assert!(!app.state.search.in_flight);
        assert!(!app.task_manager.contains("search_debounce"));
    }
}
