use chrono_tz::Tz;

/// Server configuration — all front-desk node settings
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_PATH | front_desk.db | SQLite database file |
/// | TIMEZONE | UTC | Business timezone for day windows |
/// | LOG_LEVEL | info | Tracing level |
/// | LOG_DIR | (none) | Daily-rolling log file directory |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/front_desk.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Business timezone — daily report windows are computed in this zone
    pub timezone: Tz,
    /// Tracing level
    pub log_level: String,
    /// Optional log file directory
    pub log_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Falls back to defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let timezone = std::env::var("TIMEZONE")
            .ok()
            .and_then(|tz| match tz.parse::<Tz>() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    tracing::warn!("Unknown TIMEZONE '{}', falling back to UTC", tz);
                    None
                }
            })
            .unwrap_or(chrono_tz::UTC);

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "front_desk.db".into()),
            timezone,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the database path and port — used by tests
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development deployment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
