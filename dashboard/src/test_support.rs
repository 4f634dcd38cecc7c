//! Shared test helpers: an in-process fixture API and scripted data sources

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::models::{Contributor, StatsSnapshot};
use crate::source::{DashboardSource, LoadedData};

/// Serve `app` on an ephemeral local port, returning its base URL
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

const FIXTURE_PATHS: [&str; 4] = ["/health", "/api/stats", "/api/contributors", "/api/projects"];

fn fixture_payload(path: &str) -> Value {
    match path {
        "/health" => json!({
            "status": "OK",
            "message": "Hacktoberfest 2025 API is running! 🎃",
            "timestamp": "2025-10-01T12:00:00.000Z",
            "version": "1.0.0"
        }),
        "/api/stats" => json!({
            "totalPRs": 120,
            "contributors": 40,
            "repositories": 3,
            "badges": 30
        }),
        "/api/contributors" => json!([
            {"id": 3, "name": "Carol Davis", "prs": 7, "avatar": "👩‍🎨", "joined": "2025-10-01"},
            {"id": 1, "name": "Alice Johnson", "prs": 5, "avatar": "👩‍💻", "joined": "2025-10-01"}
        ]),
        "/api/projects" => json!([
            {
                "id": 1,
                "name": "Frontend Dashboard",
                "language": "TypeScript",
                "difficulty": "Beginner",
                "issues": 12,
                "description": "React-based dashboard for Hacktoberfest statistics"
            }
        ]),
        _ => Value::Null,
    }
}

/// Router answering every stats endpoint with fixed payloads
pub fn fixture_api() -> Router {
    fixture_api_failing(None)
}

/// Like [`fixture_api`], but `failing` answers 500
pub fn fixture_api_failing(failing: Option<&str>) -> Router {
    let mut router = Router::new();

    for path in FIXTURE_PATHS {
        if failing == Some(path) {
            router = router.route(path, get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        } else {
            let payload = fixture_payload(path);
            router = router.route(
                path,
                get(move || {
                    let payload = payload.clone();
                    async move { Json(payload) }
                }),
            );
        }
    }

    router
}

pub fn contributor(id: u32, name: &str, prs: u32) -> Contributor {
    Contributor {
        id,
        name: name.to_string(),
        prs,
        avatar: "🧑‍💻".to_string(),
        joined: None,
    }
}

/// Source returning `data` after `latency`, counting every load
#[derive(Clone, Default)]
pub struct ScriptedSource {
    pub data: LoadedData,
    pub latency: Duration,
    pub loads: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn with_stats(stats: StatsSnapshot) -> Self {
        Self {
            data: LoadedData {
                stats: Some(stats),
                ..LoadedData::default()
            },
            ..Self::default()
        }
    }

    /// Every fetch fails
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardSource for ScriptedSource {
    async fn load(&self) -> LoadedData {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.data.clone()
    }
}
