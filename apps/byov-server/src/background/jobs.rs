use std::sync::Arc;

use tokio_cron_scheduler::JobSchedulerError;

use byov_core::services::FeedAssembler;
use byov_infra::InMemoryCache;

use super::Scheduler;
use crate::state::AppState;

const CACHE_PURGE_CRON: &str = "0 */5 * * * *";

/// Register reconciliation (periodic and once after startup) and cache upkeep.
pub async fn register_jobs(scheduler: &Scheduler, state: &AppState) -> Result<(), JobSchedulerError> {
    let feed = state.feed.clone();
    scheduler
        .add_cron(
            "reconcile-likes",
            &scheduler.config().reconcile_cron,
            move || reconcile_likes(feed.clone()),
        )
        .await?;

    let feed = state.feed.clone();
    scheduler
        .add_one_shot(
            "reconcile-likes-startup",
            scheduler.config().startup_delay,
            move || reconcile_likes(feed),
        )
        .await?;

    let cache = state.cache.clone();
    scheduler
        .add_cron("purge-cache", CACHE_PURGE_CRON, move || {
            purge_cache(cache.clone())
        })
        .await?;

    Ok(())
}

async fn reconcile_likes(feed: Arc<FeedAssembler>) {
    if let Err(e) = feed.reconcile().await {
        tracing::error!(error = %e, "Scheduled like reconciliation failed");
    }
}

async fn purge_cache(cache: Arc<InMemoryCache>) {
    let purged = cache.purge_expired().await;
    if purged > 0 {
        tracing::debug!(purged, "Expired cache entries purged");
    }
}
