//! Application state - shared across all handlers.

use std::sync::Arc;

use byov_core::ports::{
    AuthProvider, LikeRepository, PasswordService, PostRepository, PreferenceRepository,
    TokenService, UserRepository,
};
use byov_core::services::{FeedAssembler, FeedConfig, LikeService, PostService, ThemePreferences};
use byov_infra::{
    Argon2PasswordService, InMemoryCache, InMemoryLikeRepository, InMemoryPostRepository,
    InMemoryPreferenceRepository, InMemoryUserRepository, JwtAuthProvider, JwtConfig,
    JwtTokenService,
};

#[cfg(feature = "postgres")]
use byov_infra::DatabaseConnections;

use crate::config::AppConfig;

/// The document collections.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub preferences: Arc<dyn PreferenceRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            likes: Arc::new(InMemoryLikeRepository::new()),
            preferences: Arc::new(InMemoryPreferenceRepository::new()),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub likes: Arc<dyn LikeRepository>,
    /// Holds revoked tokens.
    pub cache: Arc<InMemoryCache>,
    pub auth: Arc<dyn AuthProvider>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub feed: Arc<FeedAssembler>,
    pub post_service: Arc<PostService>,
    pub like_service: Arc<LikeService>,
    pub themes: Arc<ThemePreferences>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state, falling back to in-memory stores when
    /// no database is configured or reachable.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        if let Err(e) = run_migrations(&conn).await {
                            tracing::error!(error = %e, "Database migrations failed");
                        }
                        let repos = Repositories {
                            users: Arc::new(conn.users()),
                            posts: Arc::new(conn.posts()),
                            likes: Arc::new(conn.likes()),
                            preferences: Arc::new(conn.preferences()),
                        };
                        let mut state = Self::with_repositories(repos, config);
                        state.db = Some(conn);
                        tracing::info!("Application state initialized");
                        return state;
                    }
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            "Failed to connect to database. Using in-memory fallback."
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory repositories");

        let state = Self::with_repositories(Repositories::in_memory(), config);
        tracing::info!("Application state initialized");
        state
    }

    pub fn with_repositories(repos: Repositories, config: &AppConfig) -> Self {
        Self::assemble(repos, config.jwt.clone(), config.feed.clone())
    }

    /// Fully in-memory state.
    pub fn in_memory(jwt: JwtConfig, feed: FeedConfig) -> Self {
        Self::assemble(Repositories::in_memory(), jwt, feed)
    }

    pub(crate) fn assemble(repos: Repositories, jwt: JwtConfig, feed: FeedConfig) -> Self {
        let Repositories {
            users,
            posts,
            likes,
            preferences,
        } = repos;

        let cache = Arc::new(InMemoryCache::new());
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(jwt));
        let auth = Arc::new(JwtAuthProvider::new(tokens.clone(), cache.clone()));

        Self {
            feed: Arc::new(FeedAssembler::new(posts.clone(), likes.clone(), feed)),
            post_service: Arc::new(PostService::new(posts.clone(), users.clone())),
            like_service: Arc::new(LikeService::new(posts.clone(), likes.clone())),
            themes: Arc::new(ThemePreferences::new(preferences)),
            users,
            posts,
            likes,
            cache,
            auth,
            tokens,
            passwords: Arc::new(Argon2PasswordService::new()),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }
}

#[cfg(feature = "postgres")]
async fn run_migrations(conn: &DatabaseConnections) -> Result<(), migration::DbErr> {
    use migration::{Migrator, MigratorTrait};

    Migrator::up(&conn.main, None).await?;
    tracing::info!("Database schema up to date");
    Ok(())
}
