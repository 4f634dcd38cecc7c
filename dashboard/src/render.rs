//! Dashboard renderer
//!
//! Renders the dashboard state to terminal-friendly markdown.

use crate::dashboard::{leaderboard, DashboardState, Phase, Ranked};
use crate::models::{Project, StatsSnapshot};

/// Onboarding steps shown at the bottom of the dashboard
const STEPS: [(&str, &str); 4] = [
    ("Register", "Sign up for Hacktoberfest 2025"),
    ("Find Issues", "Look for issues labeled 'hacktoberfest'"),
    ("Create PRs", "Submit quality pull requests"),
    ("Win Swag", "Complete 4 PRs and get rewards!"),
];

/// Render the whole dashboard
pub fn render_dashboard(state: &DashboardState) -> String {
    let mut buf = String::new();

    // Header
    buf.push_str("# 🎃 Hacktoberfest 2025\n\n");
    buf.push_str(
        "Join the global celebration of open source! \
         Contribute to projects, learn new skills, and win awesome swag.\n\n",
    );

    if state.phase != Phase::Loaded {
        buf.push_str("_Loading stats..._\n\n");
    }

    buf.push_str(&render_stats(&state.stats));
    buf.push('\n');

    // Leaderboard
    buf.push_str("## 🏆 Top Contributors\n\n");
    let board = leaderboard(&state.contributors);
    if board.is_empty() {
        buf.push_str("_No contributors yet._\n");
    }
    for entry in &board {
        buf.push_str(&render_contributor(entry));
        buf.push('\n');
    }
    buf.push('\n');

    if !state.projects.is_empty() {
        buf.push_str("## 📦 Projects\n\n");
        for project in &state.projects {
            buf.push_str(&render_project(project));
            buf.push('\n');
        }
        buf.push('\n');
    }

    // Getting started
    buf.push_str("## 🚀 Get Started\n\n");
    for (i, (title, description)) in STEPS.iter().enumerate() {
        buf.push_str(&format!("{}. **{}** - {}\n", i + 1, title, description));
    }

    buf
}

fn render_stats(stats: &StatsSnapshot) -> String {
    let cards = [
        ("Pull Requests", stats.total_prs),
        ("Contributors", stats.contributors),
        ("Repositories", stats.repositories),
        ("Badges Earned", stats.badges),
    ];

    let mut buf = String::from("## Stats\n\n");
    for (title, value) in cards {
        buf.push_str(&format!("- **{}** {}\n", value, title));
    }
    buf
}

/// Medal for the podium, `None` below it
pub fn medal(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

fn render_contributor(entry: &Ranked<'_>) -> String {
    let c = entry.contributor;
    let position = match medal(entry.rank) {
        Some(m) => format!("{} #{}", m, entry.rank),
        None => format!("#{}", entry.rank),
    };
    let noun = if c.prs == 1 {
        "Pull Request"
    } else {
        "Pull Requests"
    };

    format!("{} {} {} - {} {}", position, c.avatar, c.name, c.prs, noun)
}

fn render_project(project: &Project) -> String {
    format!(
        "- **{}** ({}, {}) | {} open issues\n  {}",
        project.name, project.language, project.difficulty, project.issues, project.description
    )
}
