//! Dashboard component
//!
//! Holds the view state and drives the `Idle -> Loading -> Loaded`
//! lifecycle. State lives in a watch channel so renderers can follow it.
//!
//! The `Loaded` transition is applied inside the channel's write lock and
//! only if the load task has not been cancelled. `unmount` cancels under the
//! same lock, so once it returns no further update can land.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::models::{Contributor, Project, StatsSnapshot};
use crate::scheduler::ScheduledTask;
use crate::source::{DashboardSource, LoadedData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub phase: Phase,
    pub stats: StatsSnapshot,
    pub contributors: Vec<Contributor>,
    pub projects: Vec<Project>,
}

impl DashboardState {
    /// Zeroed counters and the seeded leaderboard
    pub fn initial() -> Self {
        Self {
            phase: Phase::Idle,
            stats: StatsSnapshot::default(),
            contributors: seed_contributors(),
            projects: Vec::new(),
        }
    }

    fn apply(&mut self, data: LoadedData) {
        if let Some(stats) = data.stats {
            self.stats = stats;
        }
        if let Some(contributors) = data.contributors {
            self.contributors = contributors;
        }
        if let Some(projects) = data.projects {
            self.projects = projects;
        }
        self.phase = Phase::Loaded;
    }
}

/// Leaderboard shown before any data arrives
pub fn seed_contributors() -> Vec<Contributor> {
    vec![
        seed(1, "Alice Johnson", 5, "👩‍💻"),
        seed(2, "Bob Smith", 3, "👨‍💻"),
        seed(3, "Carol Davis", 7, "👩‍🎨"),
    ]
}

fn seed(id: u32, name: &str, prs: u32, avatar: &str) -> Contributor {
    Contributor {
        id,
        name: name.to_string(),
        prs,
        avatar: avatar.to_string(),
        joined: None,
    }
}

/// Contributor with its 1-based leaderboard position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a> {
    pub rank: usize,
    pub contributor: &'a Contributor,
}

/// Order contributors for display: most PRs first, ties in list order
pub fn leaderboard(contributors: &[Contributor]) -> Vec<Ranked<'_>> {
    let mut sorted: Vec<&Contributor> = contributors.iter().collect();
    sorted.sort_by(|a, b| b.prs.cmp(&a.prs));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, contributor)| Ranked {
            rank: i + 1,
            contributor,
        })
        .collect()
}

pub struct Dashboard<S> {
    source: Arc<S>,
    load_delay: Duration,
    state: Arc<watch::Sender<DashboardState>>,
    pending: Option<ScheduledTask>,
}

impl<S: DashboardSource + 'static> Dashboard<S> {
    pub fn new(source: S, load_delay: Duration) -> Self {
        let (state, _) = watch::channel(DashboardState::initial());

        Self {
            source: Arc::new(source),
            load_delay,
            state: Arc::new(state),
            pending: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.pending.is_some()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Follow state changes
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// Enter `Loading` with fresh state and schedule the load.
    /// No-op while already mounted.
    pub fn mount(&mut self) {
        if self.is_mounted() {
            return;
        }

        self.state.send_modify(|s| {
            *s = DashboardState {
                phase: Phase::Loading,
                ..DashboardState::initial()
            };
        });

        let source = self.source.clone();
        let state = self.state.clone();
        let task = ScheduledTask::schedule(self.load_delay, move |token| async move {
            let data = source.load().await;

            let applied = state.send_if_modified(|s| {
                if token.is_cancelled() {
                    return false;
                }
                s.apply(data);
                true
            });

            if applied {
                tracing::debug!("Dashboard data loaded");
            }
        });

        self.pending = Some(task);
        tracing::debug!(delay_ms = self.load_delay.as_millis() as u64, "Dashboard mounted");
    }

    /// Cancel the pending load. No-op when not mounted.
    pub fn unmount(&mut self) {
        let Some(task) = self.pending.take() else {
            return;
        };

        // Cancel under the state lock so an in-flight apply either finished
        // already or will observe the cancellation.
        self.state.send_if_modified(|_| {
            task.cancel();
            false
        });

        tracing::debug!("Dashboard unmounted");
    }

    /// Wait up to `timeout` for the `Loaded` phase
    pub async fn wait_until_loaded(&self, timeout: Duration) -> bool {
        let mut updates = self.subscribe();
        let loaded = async move {
            updates
                .wait_for(|s| s.phase == Phase::Loaded)
                .await
                .is_ok()
        };

        matches!(tokio::time::timeout(timeout, loaded).await, Ok(true))
    }
}

impl<S> Drop for Dashboard<S> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            self.state.send_if_modified(|_| {
                task.cancel();
                false
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SimulatedSource, SIMULATED_STATS};
    use crate::test_support::{contributor, ScriptedSource};

    const DELAY: Duration = Duration::from_millis(1_000);

    #[test]
    fn leaderboard_sorts_descending() {
        let contributors = seed_contributors();
        let board = leaderboard(&contributors);

        let names: Vec<&str> = board.iter().map(|r| r.contributor.name.as_str()).collect();
        assert_eq!(names, vec!["Carol Davis", "Alice Johnson", "Bob Smith"]);

        let ranks: Vec<usize> = board.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn leaderboard_is_stable_for_ties() {
        let contributors = vec![
            contributor(1, "a", 2),
            contributor(2, "b", 4),
            contributor(3, "c", 2),
            contributor(4, "d", 2),
        ];
        let ids: Vec<u32> = leaderboard(&contributors)
            .iter()
            .map(|r| r.contributor.id)
            .collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn leaderboard_does_not_reorder_source() {
        let contributors = seed_contributors();
        let _ = leaderboard(&contributors);
        assert_eq!(contributors[0].name, "Alice Johnson");
    }

    #[tokio::test]
    async fn starts_idle_with_zeroed_stats() {
        let dashboard = Dashboard::new(SimulatedSource, DELAY);
        let state = dashboard.state();

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.stats, StatsSnapshot::default());
        assert_eq!(state.contributors.len(), 3);
        assert!(!dashboard.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn mount_loads_after_delay() {
        let mut dashboard = Dashboard::new(SimulatedSource, DELAY);
        dashboard.mount();

        let state = dashboard.state();
        assert_eq!(state.phase, Phase::Loading);
        assert_eq!(state.stats, StatsSnapshot::default());

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(dashboard.state().phase, Phase::Loading);

        assert!(dashboard.wait_until_loaded(Duration::from_secs(5)).await);
        let state = dashboard.state();
        assert_eq!(state.phase, Phase::Loaded);
        assert_eq!(state.stats, SIMULATED_STATS);
        assert_eq!(state.contributors, seed_contributors());
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_before_delay_prevents_update() {
        let source = ScriptedSource::with_stats(SIMULATED_STATS);
        let mut dashboard = Dashboard::new(source.clone(), DELAY);
        let mut updates = dashboard.subscribe();

        dashboard.mount();
        dashboard.unmount();
        updates.borrow_and_update();

        tokio::time::sleep(Duration::from_secs(10)).await;

        assert!(!updates.has_changed().unwrap());
        let state = dashboard.state();
        assert_eq!(state.phase, Phase::Loading);
        assert_eq!(state.stats, StatsSnapshot::default());
        assert_eq!(source.load_count(), 0);
        assert!(!dashboard.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_during_fetch_discards_result() {
        let source = ScriptedSource {
            latency: Duration::from_millis(500),
            ..ScriptedSource::with_stats(SIMULATED_STATS)
        };
        let mut dashboard = Dashboard::new(source.clone(), DELAY);
        let mut updates = dashboard.subscribe();

        dashboard.mount();
        tokio::time::sleep(Duration::from_millis(1_200)).await;
        assert_eq!(source.load_count(), 1);

        dashboard.unmount();
        updates.borrow_and_update();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!updates.has_changed().unwrap());
        assert_eq!(dashboard.state().phase, Phase::Loading);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_fetch_keeps_zeroed_stats() {
        let mut dashboard = Dashboard::new(ScriptedSource::failing(), DELAY);
        dashboard.mount();

        assert!(dashboard.wait_until_loaded(Duration::from_secs(5)).await);
        let state = dashboard.state();
        assert_eq!(state.stats, StatsSnapshot::default());
        assert_eq!(state.contributors, seed_contributors());
        assert!(state.projects.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn fetched_contributors_replace_seed() {
        let source = ScriptedSource {
            data: LoadedData {
                contributors: Some(vec![contributor(9, "Zed", 11)]),
                ..LoadedData::default()
            },
            ..ScriptedSource::default()
        };
        let mut dashboard = Dashboard::new(source, Duration::ZERO);
        dashboard.mount();

        assert!(dashboard.wait_until_loaded(Duration::from_secs(1)).await);
        let state = dashboard.state();
        assert_eq!(state.contributors.len(), 1);
        assert_eq!(state.contributors[0].name, "Zed");
        assert_eq!(state.stats, StatsSnapshot::default());
    }

    #[tokio::test(start_paused = true)]
    async fn second_mount_is_noop() {
        let source = ScriptedSource::with_stats(SIMULATED_STATS);
        let mut dashboard = Dashboard::new(source.clone(), DELAY);

        dashboard.mount();
        dashboard.mount();
        assert!(dashboard.wait_until_loaded(Duration::from_secs(5)).await);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(source.load_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn remount_reloads_from_scratch() {
        let source = ScriptedSource::with_stats(SIMULATED_STATS);
        let mut dashboard = Dashboard::new(source.clone(), DELAY);

        dashboard.mount();
        assert!(dashboard.wait_until_loaded(Duration::from_secs(5)).await);
        dashboard.unmount();

        dashboard.mount();
        assert_eq!(dashboard.state().phase, Phase::Loading);
        assert_eq!(dashboard.state().stats, StatsSnapshot::default());

        assert!(dashboard.wait_until_loaded(Duration::from_secs(5)).await);
        assert_eq!(source.load_count(), 2);
    }

    #[tokio::test]
    async fn unmount_without_mount_is_noop() {
        let mut dashboard = Dashboard::new(SimulatedSource, DELAY);
        dashboard.unmount();
        assert_eq!(dashboard.state().phase, Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_mounted_dashboard_cancels_load() {
        let source = ScriptedSource::with_stats(SIMULATED_STATS);
        let mut dashboard = Dashboard::new(source.clone(), DELAY);
        dashboard.mount();
        drop(dashboard);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(source.load_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_times_out_when_never_mounted() {
        let dashboard = Dashboard::new(SimulatedSource, DELAY);
        assert!(!dashboard.wait_until_loaded(Duration::from_secs(2)).await);
    }
}
