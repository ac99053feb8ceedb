//! Thin wrapper over `tokio-cron-scheduler` that names and logs its jobs.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use uuid::Uuid;

use crate::config::{flag_var, parse_var};

#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub enabled: bool,
    /// Six-field cron expression (seconds first) for like-count reconciliation.
    pub reconcile_cron: String,
    /// Delay before the one reconciliation pass that follows startup.
    pub startup_delay: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reconcile_cron: "0 */10 * * * *".to_string(),
            startup_delay: Duration::from_secs(5),
        }
    }
}

impl SchedulerConfig {
    /// Read `SCHEDULER_ENABLED`, `RECONCILE_CRON` and `RECONCILE_STARTUP_DELAY_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: flag_var("SCHEDULER_ENABLED", defaults.enabled),
            reconcile_cron: std::env::var("RECONCILE_CRON").unwrap_or(defaults.reconcile_cron),
            startup_delay: Duration::from_secs(parse_var(
                "RECONCILE_STARTUP_DELAY_SECS",
                defaults.startup_delay.as_secs(),
            )),
        }
    }
}

pub struct Scheduler {
    inner: JobScheduler,
    config: SchedulerConfig,
}

impl Scheduler {
    pub async fn new(config: SchedulerConfig) -> Result<Self, JobSchedulerError> {
        Ok(Self {
            inner: JobScheduler::new().await?,
            config,
        })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Run `task` on every tick of `schedule`.
    pub async fn add_cron<F, Fut>(
        &self,
        name: &'static str,
        schedule: &str,
        task: F,
    ) -> Result<Uuid, JobSchedulerError>
    where
        F: Fn() -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let job = Job::new_async(schedule, move |_id, _lock| {
            let run = task.clone();
            Box::pin(async move { run().await })
        })?;

        let id = self.inner.add(job).await?;
        tracing::info!(job = name, schedule, job_id = %id, "Cron job registered");
        Ok(id)
    }

    /// Run `task` once after `delay`.
    pub async fn add_one_shot<F, Fut>(
        &self,
        name: &'static str,
        delay: Duration,
        task: F,
    ) -> Result<Uuid, JobSchedulerError>
    where
        F: FnOnce() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        // The job callback is `FnMut`; the slot hands the task out once.
        let slot = Arc::new(Mutex::new(Some(task)));

        let job = Job::new_one_shot_async(delay, move |_id, _lock| {
            let slot = slot.clone();
            Box::pin(async move {
                let task = slot.lock().await.take();
                if let Some(run) = task {
                    run().await;
                }
            })
        })?;

        let id = self.inner.add(job).await?;
        tracing::info!(job = name, delay_secs = delay.as_secs(), job_id = %id, "One-shot job scheduled");
        Ok(id)
    }

    pub async fn start(&self) -> Result<(), JobSchedulerError> {
        self.inner.start().await?;
        tracing::info!("Scheduler started");
        Ok(())
    }

    pub async fn shutdown(&mut self) -> Result<(), JobSchedulerError> {
        self.inner.shutdown().await?;
        tracing::info!("Scheduler stopped");
        Ok(())
    }
}
