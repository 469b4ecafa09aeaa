use crate::http::models::{
    PlaybackDisplay, PlaybackState, PlayedItem, Playlist, Profile, RepeatMode,
    SavedItem, SearchResults, Track,
};

/// The dashboard's content sections. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    Search,
    Library,
    Playlists,
    Favorites,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Search,
        Section::Library,
        Section::Playlists,
        Section::Favorites,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Search => "Search",
            Section::Library => "Library",
            Section::Playlists => "Playlists",
            Section::Favorites => "Favorites",
        }
    }

    /// Sidebar index to section; out-of-range selections stay put.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    /// `None` until the first completed search, then replaced atomically.
    pub results: Option<SearchResults>,
    pub in_flight: bool,
}

/// Every transient view-model the dashboard renders from. Each field is
/// replaced wholesale by the response that feeds it; `None` means the fetch
/// has not completed yet (as opposed to a completed-but-empty collection).
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub section: Section,
    pub profile: Option<Profile>,
    pub playback: PlaybackState,
    pub volume: u8,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub playlists: Option<Vec<Playlist>>,
    pub playlist_total: u64,
    pub recent: Option<Vec<PlayedItem>>,
    pub recommendations: Option<Vec<Track>>,
    pub favorites: Option<Vec<SavedItem>>,
    pub favorites_total: u64,
    pub search: SearchState,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            volume: 50,
            ..Self::default()
        }
    }

    pub fn display(&self) -> PlaybackDisplay {
        self.playback.display()
    }

    /// Replace the playback snapshot wholesale with an authoritative read.
    pub fn apply_playback(&mut self, snapshot: PlaybackState) {
        self.playback = snapshot;
    }

    /// Optimistic play/pause flip for the toggle command. Returns whether
    /// the dashboard considered itself playing before the flip, which
    /// decides the command that goes over the wire. The next poll
    /// reconciles against the gateway.
    pub fn toggle_playing(&mut self) -> bool {
        let was_playing = self.playback.is_playing;
        self.playback.is_playing = !was_playing;
        was_playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::models::Track;

    fn playing_state() -> PlaybackState {
        PlaybackState {
            track: Some(Track::default()),
            is_playing: true,
        }
    }

    #[test]
    fn toggle_flips_optimistically_and_reports_prior_state() {
        let mut state = DashboardState::new();
        state.apply_playback(playing_state());

        assert!(state.toggle_playing());
        assert_eq!(state.display(), PlaybackDisplay::Paused);
        assert!(!state.toggle_playing());
        assert_eq!(state.display(), PlaybackDisplay::Playing);
    }

    #[test]
    fn snapshot_replaces_prior_playback_wholesale() {
        let mut state = DashboardState::new();
        state.apply_playback(playing_state());
        state.apply_playback(PlaybackState::default());

        assert_eq!(state.display(), PlaybackDisplay::NoTrack);
    }

    #[test]
    fn section_index_roundtrip_and_out_of_range() {
        assert_eq!(Section::from_index(1), Some(Section::Search));
        assert_eq!(Section::from_index(99), None);
        assert_eq!(Section::Favorites.index(), 4);
    }
}
