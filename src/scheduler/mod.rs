//! Greedy library scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyScheduler` repeatedly values every unscheduled library against the
//! remaining days and the books already claimed, commits the best one under
//! the configured [`SelectionKey`], and stops when nothing fits or adds
//! value. It is not optimal, but provides fast baseline solutions.
//!
//! # KPI
//!
//! `ScheduleKpi` computes reporting metrics: total and reachable score,
//! signup days used, and scanning capacity utilization.

mod config;
mod greedy;
mod kpi;

pub use config::{SchedulerConfig, SelectionKey};
pub use greedy::GreedyScheduler;
pub use kpi::ScheduleKpi;
