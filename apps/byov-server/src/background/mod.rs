//! Background work driven by the cron scheduler.

mod jobs;
mod scheduler;

pub use jobs::register_jobs;
pub use scheduler::{Scheduler, SchedulerConfig};
