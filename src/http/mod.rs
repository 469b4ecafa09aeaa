pub mod error;
pub mod models;

pub use error::{ApiError, Result};

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::Config;
use crate::http::models::{
    Page, PlaybackState, PlayedItem, PlayerState, Playlist, Profile,
    Recommendations, RepeatMode, SavedItem, SearchResults,
};

/// Typed client for the control-panel API gateway. All dashboard traffic
/// goes through this one service; it owns the single `reqwest::Client`.
pub struct ApiService {
    client: reqwest::Client,
    base_url: String,
}

impl ApiService {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder().gzip(true).build()?;

        Ok(Self {
            client,
            base_url: config.gateway_url.clone(),
        })
    }

    pub async fn fetch_profile(&self) -> Result<Profile> {
        self.get("/api/profile").await
    }

    /// Snapshot of the active track. The gateway answers 204 with an empty
    /// body when nothing is playing.
    pub async fn fetch_currently_playing(&self) -> Result<PlaybackState> {
        self.get_or_default("/api/currently-playing").await
    }

    pub async fn fetch_playlists(&self) -> Result<Page<Playlist>> {
        self.get("/api/playlists").await
    }

    pub async fn fetch_recently_played(&self) -> Result<Page<PlayedItem>> {
        self.get("/api/recently-played").await
    }

    pub async fn fetch_recommendations(&self) -> Result<Recommendations> {
        self.get("/api/recommendations").await
    }

    pub async fn fetch_liked_tracks(&self) -> Result<Page<SavedItem>> {
        self.get("/api/liked-tracks").await
    }

    pub async fn fetch_player_state(&self) -> Result<PlayerState> {
        self.get_or_default("/api/player-state").await
    }

    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let response = self
            .client
            .get(self.url("/api/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        let response = self.check(response).await?;

        Self::decode(response).await
    }

    /// Start playback of `uri`, or resume the active context when `None`.
    pub async fn play(&self, uri: Option<&str>) -> Result<()> {
        let body = uri.map(|uri| json!({ "uri": uri }));
        self.command(Method::PUT, "/api/play", body).await
    }

    pub async fn pause(&self) -> Result<()> {
        self.command(Method::PUT, "/api/pause", None).await
    }

    pub async fn next(&self) -> Result<()> {
        self.command(Method::POST, "/api/next", None).await
    }

    pub async fn previous(&self) -> Result<()> {
        self.command(Method::POST, "/api/previous", None).await
    }

    pub async fn set_volume(&self, percent: u8) -> Result<()> {
        let body = json!({ "volume": percent.min(100) });
        self.command(Method::PUT, "/api/volume", Some(body)).await
    }

    pub async fn set_shuffle(&self, state: bool) -> Result<()> {
        let body = json!({ "state": state });
        self.command(Method::PUT, "/api/shuffle", Some(body)).await
    }

    pub async fn set_repeat(&self, mode: RepeatMode) -> Result<()> {
        let body = json!({ "state": mode.as_str() });
        self.command(Method::PUT, "/api/repeat", Some(body)).await
    }

    /// One-shot credential refresh. Issued straight against the gateway so a
    /// 401 on the refresh itself cannot trigger another refresh.
    pub async fn refresh_token(&self) -> Result<bool> {
        let response = self
            .client
            .get(self.url("/api/refresh-token"))
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = self.check(response).await?;

        Self::decode(response).await
    }

    /// Like [`Self::get`], but a 204 or empty body yields the default value
    /// instead of a decode error.
    async fn get_or_default<T: DeserializeOwned + Default>(
        &self,
        path: &str,
    ) -> Result<T> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = self.check(response).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(T::default());
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<()> {
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        self.check(response).await?;
        debug!("command accepted: {path}");
        Ok(())
    }

    /// Map non-2xx statuses onto [`ApiError::Status`], carrying the `error`
    /// field of the payload when the gateway provides one. A 401 also fires
    /// a single refresh-token attempt; the failed request is not retried,
    /// the next poll runs against the refreshed session.
    async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            match self.refresh_token().await {
                Ok(true) => debug!("session refreshed after 401"),
                Ok(false) => warn!("token refresh rejected by gateway"),
                Err(e) => warn!("token refresh failed: {e}"),
            }
        }

        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_default();

        Err(ApiError::Status { status, message })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}
