use std::time::Duration;

pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:8888";

/// Fixed cadence of the currently-playing poll.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Delay between a successful playback command and its confirming re-poll.
/// The gateway applies play/skip commands asynchronously, so an immediate
/// read would still see the previous track.
pub const COMMAND_REPOLL_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct Config {
    pub gateway_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let gateway_url = std::env::var("TRACKDECK_GATEWAY_URL")
            .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());

        Self {
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = Config::default();
        assert_eq!(config.gateway_url, DEFAULT_GATEWAY_URL);
    }
}
