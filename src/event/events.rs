use crate::http::models::{
    PlaybackState, PlayedItem, PlayerState, Playlist, Profile, SavedItem,
    SearchResults, Track,
};
use crate::ui::state::Section;

#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    // Data arrival
    ProfileFetched(Profile),
    PlaybackFetched(PlaybackState),
    PlayerStateFetched(PlayerState),
    PlaylistsFetched(Vec<Playlist>, u64),
    RecentFetched(Vec<PlayedItem>),
    RecommendationsFetched(Vec<Track>),
    FavoritesFetched(Vec<SavedItem>, u64),
    SearchCompleted { seq: u64, results: SearchResults },
    /// A play/skip command got a 2xx; confirm it with a delayed re-poll.
    PlaybackCommandAccepted,
    FetchError(String),

    // Commands
    Navigate(Section),
    SearchInput(String),
    Play(Option<String>),
    PlayPlaylist(String),
    Pause,
    Next,
    Previous,
    SetVolume(u8),
    ToggleShuffle,
    CycleRepeat,
}
