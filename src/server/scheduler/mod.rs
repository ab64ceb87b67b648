//! Cron jobs for automated tasks.

pub mod deadlines;
