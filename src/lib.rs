//! Print-queue capacity allocation for the U-Engine ecosystem.
//!
//! Answers instantaneous "what-if" questions about a static snapshot of
//! print jobs and printers: how much of the demand the pool can satisfy,
//! which jobs cannot be completed, which printers are never needed, and in
//! what order jobs are served.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Resource`
//! - **`ordering`**: Stable priority and capacity orderings
//! - **`allocation`**: The greedy, cursor-based capacity allocator
//! - **`scheduler`**: `PrintScheduler` query facade, configuration, KPIs
//! - **`validation`**: Input integrity checks (negative pages or capacity)
//! - **`logging`**: Optional `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use u_printq::models::{Job, Resource};
//! use u_printq::scheduler::PrintScheduler;
//!
//! let jobs = vec![Job::new(1, 2, 4), Job::new(2, 1, 3)];
//! let printers = vec![Resource::new(1, 5)];
//!
//! let scheduler = PrintScheduler::new();
//! assert_eq!(scheduler.satisfaction_percentage(&jobs, &printers).unwrap(), 71);
//! assert_eq!(scheduler.missing_jobs(&jobs, &printers).unwrap(), vec![1]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Martello & Toth (1990), "Knapsack Problems", Ch. 2 (greedy fill)

pub mod allocation;
pub mod error;
pub mod logging;
pub mod models;
pub mod ordering;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
