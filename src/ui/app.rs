use std::sync::Arc;

use flume::{Receiver, Sender};
use tracing::{info, warn};

use crate::{
    config::{Config, POLL_INTERVAL},
    event::events::Event,
    http::ApiService,
    ui::{
        context::AppContext,
        layout::AppLayout,
        state::{DashboardState, Section},
        tui,
        util::handler::EventHandler,
        views::Views,
    },
    util::{debounce::SearchDebouncer, task::TaskManager},
};

/// The dashboard controller: owns all state, wires input to commands, keeps
/// the remote playback state polled, and renders everything each frame.
pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub ctx: AppContext,
    pub state: DashboardState,
    pub views: Views,
    pub task_manager: TaskManager,
    pub debouncer: SearchDebouncer,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(&config)?);
        let ctx = AppContext::new(api, event_tx.clone());

        Ok(Self {
            event_rx,
            event_tx,
            ctx,
            state: DashboardState::new(),
            views: Views::default(),
            task_manager: TaskManager::new(),
            debouncer: SearchDebouncer::new(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        self.initialize().await;
        while !self.should_quit {
            if self.has_focus {
                tui.draw(|f| AppLayout::new(self).render(f))?;
            }
            EventHandler::handle_events(self, &tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    /// Startup loads. Profile, playlists, player snapshot and the home
    /// section load concurrently; the first currently-playing read happens
    /// inline so the recurring poll never races it.
    async fn initialize(&mut self) {
        self.spawn_profile_fetch();
        self.spawn_player_state_fetch();
        EventHandler::load_playlists(self);
        EventHandler::load_section(self, Section::Home);

        match self.ctx.api.fetch_currently_playing().await {
            Ok(snapshot) => self.state.apply_playback(snapshot),
            Err(e) => warn!("initial playback load failed: {e}"),
        }

        self.start_polling();
        info!("dashboard initialized");
    }

    fn spawn_profile_fetch(&mut self) {
        let api = self.ctx.api.clone();
        let tx = self.ctx.event_tx.clone();
        self.task_manager.spawn(
            "load_profile",
            tokio::spawn(async move {
                match api.fetch_profile().await {
                    Ok(profile) => {
                        let _ = tx.send(Event::ProfileFetched(profile));
                    }
                    Err(e) => {
                        let _ = tx.send(Event::FetchError(format!("profile: {e}")));
                    }
                }
            }),
        );
    }

    fn spawn_player_state_fetch(&mut self) {
        let api = self.ctx.api.clone();
        let tx = self.ctx.event_tx.clone();
        self.task_manager.spawn(
            "load_player_state",
            tokio::spawn(async move {
                match api.fetch_player_state().await {
                    Ok(player) => {
                        let _ = tx.send(Event::PlayerStateFetched(player));
                    }
                    Err(e) => warn!("player state load failed: {e}"),
                }
            }),
        );
    }

    /// Recurring playback poll. Each tick spawns its own unawaited fetch,
    /// so a slow or failed round-trip never delays the next tick; a failed
    /// fetch leaves the last known snapshot in place.
    fn start_polling(&mut self) {
        let api = self.ctx.api.clone();
        let tx = self.ctx.event_tx.clone();
        self.task_manager.spawn(
            "playback_poll",
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(POLL_INTERVAL);
                ticker.tick().await; // interval fires immediately once
                loop {
                    ticker.tick().await;
                    let api = api.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        match api.fetch_currently_playing().await {
                            Ok(snapshot) => {
                                let _ = tx.send(Event::PlaybackFetched(snapshot));
                            }
                            Err(e) => warn!("playback poll failed: {e}"),
                        }
                    });
                }
            }),
        );
    }
}
