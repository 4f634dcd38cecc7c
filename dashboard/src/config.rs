use std::env;
use std::time::Duration;

/// Delay before the simulated data appears
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1_000;

/// How long the binary waits for data before rendering anyway
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Stats API base URL; `None` renders simulated data
    pub api_url: Option<String>,
    pub load_delay: Duration,
    pub wait_timeout: Duration,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_values(
            env::var("DASHBOARD_API_URL").ok().as_deref(),
            env::var("DASHBOARD_LOAD_DELAY_MS").ok().as_deref(),
            env::var("DASHBOARD_WAIT_TIMEOUT_MS").ok().as_deref(),
        )
    }

    fn from_values(api_url: Option<&str>, delay: Option<&str>, timeout: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        // A real fetch supplies its own latency
        let default_delay = if api_url.is_some() {
            0
        } else {
            DEFAULT_SIMULATED_DELAY_MS
        };

        Self {
            api_url,
            load_delay: parse_millis("DASHBOARD_LOAD_DELAY_MS", delay, default_delay),
            wait_timeout: parse_millis("DASHBOARD_WAIT_TIMEOUT_MS", timeout, DEFAULT_WAIT_TIMEOUT_MS),
        }
    }
}

fn parse_millis(name: &str, value: Option<&str>, default: u64) -> Duration {
    let millis = match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = raw, "Invalid {}, using {}ms", name, default);
            default
        }),
    };
    Duration::from_millis(millis)
}
