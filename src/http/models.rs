//! View-models decoded from gateway responses.
//!
//! Decoding is deliberately lenient: the gateway proxies a third-party
//! streaming API and individual fields drop out of payloads routinely, so
//! everything that can be absent defaults instead of failing the decode.
//! Fallback text/artwork is applied at render time.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub album: AlbumRef,
}

impl Track {
    /// Comma-joined artist names, or a fallback when the list is empty.
    pub fn artist_line(&self) -> String {
        if self.artists.is_empty() {
            return "Unknown Artist".to_string();
        }
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub release_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub release_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Playlist {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub tracks: TrackCount,
    #[serde(default)]
    pub owner: Owner,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackCount {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub display_name: String,
}

/// `GET /api/playlists` and `GET /api/liked-tracks` both page their items.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Wrapper item in the recently-played feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayedItem {
    #[serde(default)]
    pub track: Track,
    #[serde(default)]
    pub played_at: String,
}

/// Wrapper item in the liked-tracks listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SavedItem {
    #[serde(default)]
    pub track: Track,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Snapshot of `GET /api/currently-playing`. The gateway answers 204 with no
/// body when nothing is playing; the client maps that onto the default value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaybackState {
    #[serde(rename = "item", default)]
    pub track: Option<Track>,
    #[serde(default)]
    pub is_playing: bool,
}

impl PlaybackState {
    pub fn display(&self) -> PlaybackDisplay {
        match (&self.track, self.is_playing) {
            (None, _) => PlaybackDisplay::NoTrack,
            (Some(_), true) => PlaybackDisplay::Playing,
            (Some(_), false) => PlaybackDisplay::Paused,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackDisplay {
    NoTrack,
    Playing,
    Paused,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub tracks: Page<Track>,
    #[serde(default)]
    pub artists: Page<Artist>,
    #[serde(default)]
    pub albums: Page<Album>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.tracks.items.is_empty()
            && self.artists.items.is_empty()
            && self.albums.items.is_empty()
    }
}

/// Full player snapshot from `GET /api/player-state`. Only the fields the
/// dashboard reconciles against are decoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerState {
    #[serde(default)]
    pub shuffle_state: bool,
    #[serde(default)]
    pub repeat_state: RepeatMode,
    #[serde(default)]
    pub device: Device,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub volume_percent: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    Off,
    Context,
    Track,
}

impl RepeatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::Context => "context",
            RepeatMode::Track => "track",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::Context,
            RepeatMode::Context => RepeatMode::Track,
            RepeatMode::Track => RepeatMode::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn track_decodes_with_missing_nested_fields() {
        let track: Track = serde_json::from_value(json!({
            "name": "Intro"
        }))
        .unwrap();

        assert_eq!(track.name, "Intro");
        assert_eq!(track.duration_ms, 0);
        assert!(track.artists.is_empty());
        assert!(track.album.images.is_empty());
        assert_eq!(track.artist_line(), "Unknown Artist");
    }

    #[test]
    fn playback_state_without_item_is_no_track() {
        let state: PlaybackState =
            serde_json::from_value(json!({ "is_playing": true })).unwrap();

        assert!(state.track.is_none());
        assert_eq!(state.display(), PlaybackDisplay::NoTrack);
    }

    #[test]
    fn playback_display_follows_is_playing() {
        let playing: PlaybackState = serde_json::from_value(json!({
            "item": { "name": "Song" },
            "is_playing": true
        }))
        .unwrap();
        let paused: PlaybackState = serde_json::from_value(json!({
            "item": { "name": "Song" },
            "is_playing": false
        }))
        .unwrap();

        assert_eq!(playing.display(), PlaybackDisplay::Playing);
        assert_eq!(paused.display(), PlaybackDisplay::Paused);
    }

    #[test]
    fn search_results_decode_partial_sections() {
        let results: SearchResults = serde_json::from_value(json!({
            "tracks": { "items": [{ "name": "One" }] }
        }))
        .unwrap();

        assert_eq!(results.tracks.items.len(), 1);
        assert!(results.artists.items.is_empty());
        assert!(!results.is_empty());
    }

    #[test]
    fn repeat_mode_cycles_through_all_modes() {
        assert_eq!(RepeatMode::Off.next(), RepeatMode::Context);
        assert_eq!(RepeatMode::Context.next(), RepeatMode::Track);
        assert_eq!(RepeatMode::Track.next(), RepeatMode::Off);
        assert_eq!(RepeatMode::Context.as_str(), "context");
    }

    #[test]
    fn player_state_tolerates_empty_payload() {
        let state: PlayerState = serde_json::from_value(json!({})).unwrap();

        assert!(!state.shuffle_state);
        assert_eq!(state.repeat_state, RepeatMode::Off);
        assert!(state.device.volume_percent.is_none());
    }
}
