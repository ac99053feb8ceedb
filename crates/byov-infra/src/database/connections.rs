use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use super::postgres_repo::{
    PostgresLikeRepository, PostgresPostRepository, PostgresPreferenceRepository,
    PostgresUserRepository,
};

/// Configuration for the document database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Connection pool shared by the `users`, `posts`, `likes` and `preferences`
/// repositories.
pub struct DatabaseConnections {
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Open the pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!(pool = config.max_connections, "Database connected");

        Ok(Self { main })
    }

    pub fn users(&self) -> PostgresUserRepository {
        PostgresUserRepository::new(self.main.clone())
    }

    pub fn posts(&self) -> PostgresPostRepository {
        PostgresPostRepository::new(self.main.clone())
    }

    pub fn likes(&self) -> PostgresLikeRepository {
        PostgresLikeRepository::new(self.main.clone())
    }

    pub fn preferences(&self) -> PostgresPreferenceRepository {
        PostgresPreferenceRepository::new(self.main.clone())
    }

    /// Round-trip to the database.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }
}
