//! Print-queue scheduler facade and KPI evaluation.
//!
//! # Queries
//!
//! `PrintScheduler` exposes the snapshot queries: satisfaction percentage,
//! missing jobs, unused resources, priority ordering and next job, plus a
//! single-printer feasibility check.
//!
//! # KPI
//!
//! `AllocationKpi` computes fill rate, completion rate and per-printer
//! utilization for one allocation pass. `AllocationReport` bundles them
//! with the query projections.

mod config;
mod kpi;
mod print;
mod report;

pub use config::SchedulerConfig;
pub use kpi::AllocationKpi;
pub use print::{total_capacity, total_pages, PrintScheduler};
pub use report::AllocationReport;
