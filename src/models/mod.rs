//! Print-queue domain models.
//!
//! Jobs and resources are plain value snapshots. They are owned by the
//! caller and only ever read by the allocator, never mutated.
//!
//! # Domain Mappings
//!
//! | u-printq | Print shop | Batch compute | Logistics |
//! |----------|------------|---------------|-----------|
//! | Job | Document | Batch job | Shipment |
//! | Resource | Printer | Node quota | Truck |
//! | pages | Page count | CPU-seconds | Pallets |
//! | capacity | Page budget | Quota | Payload |

mod job;
mod resource;

pub use job::{Job, JobId};
pub use resource::{Resource, ResourceId};
