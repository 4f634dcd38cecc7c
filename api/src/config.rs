use std::env;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3001;

/// Deployment mode. Only affects how much error detail responses expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    /// Parse an `APP_ENV` value. Unknown or missing values mean production.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("development") => Environment::Development,
            Some("test") => Environment::Test,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
            Environment::Test => write!(f, "test"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Exposes handler failure details in 500 responses when development
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_port(env::var("PORT").ok().as_deref()),
            environment: Environment::from_env_value(env::var("APP_ENV").ok().as_deref()),
        }
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    match value {
        None => DEFAULT_PORT,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = raw, "Invalid PORT, falling back to {}", DEFAULT_PORT);
            DEFAULT_PORT
        }),
    }
}
