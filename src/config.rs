// Static application configuration: a mock-mode toggle and the base path
// every backend call is addressed under. Set once at startup, never
// reloaded.

/// Base path the reverse proxy routes to the backend under. Relative on
/// purpose: a deployed client sits behind the same proxy as the backend.
pub const DEFAULT_API_BASE: &str = "/api";

/// Configuration consumed by every data-access call.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// When set, all data-access functions return canned results without
    /// performing any network I/O. Useful for offline demos.
    pub use_mock_mode: bool,
    /// Prefix prepended to every request target.
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            use_mock_mode: false,
            api_base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    /// Build the binary's configuration from the environment:
    /// `WHATSDOC_API_URL` overrides the base path (a terminal client usually
    /// needs an absolute URL rather than the proxy-relative default) and
    /// `WHATSDOC_MOCK=1`/`true` switches on mock mode.
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("WHATSDOC_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let use_mock_mode = std::env::var("WHATSDOC_MOCK")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        AppConfig {
            use_mock_mode,
            api_base_url,
        }
    }
}

/// Short encouragements the menu prints after a completed delivery.
pub const MOTIVATIONAL_QUOTES: &[&str] = &[
    "Great work! You're making customers happy.",
    "Keep up the momentum!",
    "Another video delivered, another memory shared.",
    "Efficiency is doing better what is already being done.",
    "Your speed is impressive today!",
    "Technology is best when it brings people together.",
    "You are crushing the queue!",
];
