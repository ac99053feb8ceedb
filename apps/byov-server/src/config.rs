//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use byov_core::services::FeedConfig;
use byov_infra::JwtConfig;

#[cfg(feature = "postgres")]
use byov_infra::database::DatabaseConfig;

#[cfg(feature = "scheduler")]
use crate::background::SchedulerConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub feed: FeedConfig,
    #[cfg(feature = "scheduler")]
    pub scheduler: SchedulerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "postgres")]
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", 20),
            min_connections: parse_var("DB_MIN_CONNECTIONS", 2),
        });

        let defaults = FeedConfig::default();
        let feed = FeedConfig {
            reconcile_on_read: flag_var("FEED_RECONCILE_ON_READ", defaults.reconcile_on_read),
            reconcile_concurrency: parse_var(
                "FEED_RECONCILE_CONCURRENCY",
                defaults.reconcile_concurrency,
            )
            .max(1),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            #[cfg(feature = "postgres")]
            database,
            jwt: JwtConfig::from_env(),
            feed,
            #[cfg(feature = "scheduler")]
            scheduler: SchedulerConfig::from_env(),
        }
    }
}

pub(crate) fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// `false` and `0` switch a flag off; anything else switches it on.
pub(crate) fn flag_var(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| v != "false" && v != "0")
        .unwrap_or(default)
}
