/// Application configuration shared by the client and CLI crates.
///
/// Built from environment variables by [`crate::config::load_app_config`];
/// the engine itself never reads it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the marketplace backend.
    pub api_base_url: String,
    /// Per-request timeout for backend calls, in seconds.
    pub request_timeout_secs: u64,
    /// User-Agent header sent with every backend request.
    pub user_agent: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}
