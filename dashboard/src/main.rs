//! Hacktoberfest Dashboard
//!
//! Terminal rendition of the event dashboard. Mounts the dashboard, waits
//! for its data (simulated, or fetched from the stats API when
//! `DASHBOARD_API_URL` is set) and prints it as markdown.

mod client;
mod config;
mod dashboard;
mod models;
mod render;
mod scheduler;
mod source;

#[cfg(test)]
mod test_support;

use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use client::StatsClient;
use config::DashboardConfig;
use dashboard::Dashboard;
use source::{ApiSource, DashboardSource, SimulatedSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the rendered dashboard
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = DashboardConfig::from_env();

    match &config.api_url {
        Some(url) => {
            tracing::info!(api_url = %url, "Loading dashboard from API");
            let client = StatsClient::new(url)?;

            match client.health().await {
                Ok(health) => tracing::info!(version = %health.version, "{}", health.message),
                Err(e) => tracing::warn!("Health check failed: {:#}", e),
            }

            let dashboard = Dashboard::new(ApiSource::new(client), config.load_delay);
            show(dashboard, config.wait_timeout).await;
        }
        None => {
            tracing::info!("DASHBOARD_API_URL not set, using simulated data");
            let dashboard = Dashboard::new(SimulatedSource, config.load_delay);
            show(dashboard, config.wait_timeout).await;
        }
    }

    Ok(())
}

/// Mount, wait for data, print, unmount
async fn show<S: DashboardSource + 'static>(mut dashboard: Dashboard<S>, wait: Duration) {
    dashboard.mount();

    if !dashboard.wait_until_loaded(wait).await {
        tracing::warn!(timeout_ms = wait.as_millis() as u64, "Timed out waiting for dashboard data");
    }

    print!("{}", render::render_dashboard(&dashboard.state()));
    dashboard.unmount();
}
