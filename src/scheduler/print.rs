//! Print-queue query facade.
//!
//! Every query takes a fresh job/resource snapshot, validates it, and
//! (where needed) runs one private allocation pass. No state survives
//! between calls.

use tracing::warn;

use super::{AllocationKpi, AllocationReport, SchedulerConfig};
use crate::allocation::{Allocation, Allocator};
use crate::error::Result;
use crate::models::{Job, JobId, Resource};
use crate::ordering::{self, priority_order, resource_order};
use crate::validation::validate_input;

/// Print-queue scheduler.
///
/// Answers what-if queries about a static snapshot: how much demand the
/// printers can satisfy, which jobs cannot be finished, which printers are
/// never needed, and the service order.
///
/// # Example
///
/// ```
/// use u_printq::models::{Job, Resource};
/// use u_printq::scheduler::PrintScheduler;
///
/// let jobs = vec![Job::new(1, 1, 10), Job::new(2, 2, 5)];
/// let printers = vec![Resource::new(1, 8), Resource::new(2, 50)];
///
/// let scheduler = PrintScheduler::new();
/// assert_eq!(scheduler.satisfaction_percentage(&jobs, &printers).unwrap(), 100);
/// assert!(scheduler.missing_jobs(&jobs, &printers).unwrap().is_empty());
/// assert!(scheduler.unused_resources(&jobs, &printers).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrintScheduler {
    config: SchedulerConfig,
}

impl PrintScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Percentage (0–100) of requested pages the pool could cover in total.
    ///
    /// `floor(capacity * 100 / pages)`, capped at 100. Returns 0 when no
    /// pages are requested. Ignores ordering and fragmentation. Negative
    /// amounts count as zero, as in the allocator.
    pub fn satisfaction_percentage(&self, jobs: &[Job], resources: &[Resource]) -> Result<u8> {
        self.check(jobs, resources)?;

        let total_pages = total_pages(jobs);
        if total_pages == 0 {
            return Ok(0);
        }
        let pct = (total_capacity(resources) * 100 / total_pages).min(100);
        // 0..=100 by construction
        Ok(pct as u8)
    }

    /// IDs of jobs that cannot be completed, in service order.
    pub fn missing_jobs(&self, jobs: &[Job], resources: &[Resource]) -> Result<Vec<JobId>> {
        Ok(self.allocate(jobs, resources)?.missing_job_ids())
    }

    /// Resources nothing is drawn from, in input order.
    pub fn unused_resources(&self, jobs: &[Job], resources: &[Resource]) -> Result<Vec<Resource>> {
        Ok(self.allocate(jobs, resources)?.unused_resources())
    }

    /// Runs one validated allocation pass.
    pub fn allocate(&self, jobs: &[Job], resources: &[Resource]) -> Result<Allocation> {
        self.check(jobs, resources)?;

        let queue = priority_order(jobs, self.config.tie_breaker);
        let pool = resource_order(resources, self.config.resource_order);
        Ok(Allocator::new(jobs, resources).run(&queue, &pool))
    }

    /// Runs one pass and bundles every projection with its KPIs.
    pub fn report(&self, jobs: &[Job], resources: &[Resource]) -> Result<AllocationReport> {
        let satisfaction_percentage = self.satisfaction_percentage(jobs, resources)?;
        let allocation = self.allocate(jobs, resources)?;

        Ok(AllocationReport {
            satisfaction_percentage,
            queue: allocation.jobs.iter().map(|o| o.job_id).collect(),
            missing_jobs: allocation.missing_job_ids(),
            unused_resources: allocation.unused_resources(),
            kpi: AllocationKpi::calculate(&allocation),
            allocation,
        })
    }

    /// Sorts jobs in place by priority, using the configured tie-breaker.
    pub fn sort_by_priority(&self, jobs: &mut [Job]) {
        ordering::sort_by_priority(jobs, self.config.tie_breaker);
    }

    /// Jobs in service order, leaving the input untouched.
    pub fn sorted_by_priority(&self, jobs: &[Job]) -> Vec<Job> {
        priority_order(jobs, self.config.tie_breaker)
            .into_iter()
            .map(|i| jobs[i])
            .collect()
    }

    /// The job served first, or `None` for an empty queue.
    pub fn next_to_be_printed(&self, jobs: &[Job]) -> Option<Job> {
        ordering::next_job(jobs, self.config.tie_breaker)
    }

    /// Whether a single printer could print the whole job on its own.
    pub fn can_print(&self, job: &Job, resource: &Resource) -> bool {
        resource.can_print(job)
    }

    fn check(&self, jobs: &[Job], resources: &[Resource]) -> Result<()> {
        if !self.config.validate {
            return Ok(());
        }
        validate_input(jobs, resources).map_err(|errors| {
            warn!(count = errors.len(), "rejected print-queue snapshot");
            errors.into()
        })
    }
}

/// Sum of requested pages. Negative counts count as zero.
///
/// Accumulated in `i128`, so any number of `i64` page counts fits.
pub fn total_pages(jobs: &[Job]) -> i128 {
    jobs.iter().map(|j| i128::from(j.pages.max(0))).sum()
}

/// Sum of printer capacities. Negative capacities count as zero.
pub fn total_capacity(resources: &[Resource]) -> i128 {
    resources.iter().map(|r| i128::from(r.capacity.max(0))).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::ordering::{ResourceOrder, TieBreaker};
    use crate::validation::ValidationErrorKind;

    fn docs() -> Vec<Job> {
        vec![
            Job::new(1, 3, 4),
            Job::new(2, 1, 3),
            Job::new(3, 2, 7),
            Job::new(4, 4, 2),
        ]
    }

    fn printers() -> Vec<Resource> {
        vec![
            Resource::new(1, 3),
            Resource::new(2, 1),
            Resource::new(3, 2),
            Resource::new(4, 1),
        ]
    }

    #[test]
    fn test_totals() {
        assert_eq!(total_pages(&docs()), 16);
        assert_eq!(total_capacity(&printers()), 7);
        assert_eq!(total_capacity(&[]), 0);
    }

    #[test]
    fn test_satisfaction_percentage_floors() {
        let pm = PrintScheduler::new();
        assert_eq!(pm.satisfaction_percentage(&docs(), &printers()).unwrap(), 43);
    }

    #[test]
    fn test_satisfaction_zero_pages() {
        let pm = PrintScheduler::new();
        assert_eq!(pm.satisfaction_percentage(&[], &printers()).unwrap(), 0);
        let empty_jobs = vec![Job::new(1, 1, 0)];
        assert_eq!(pm.satisfaction_percentage(&empty_jobs, &printers()).unwrap(), 0);
    }

    #[test]
    fn test_satisfaction_no_overflow() {
        let pm = PrintScheduler::new();
        let jobs = vec![Job::new(1, 1, 3)];
        let resources = vec![Resource::new(1, i64::MAX / 2)];
        assert_eq!(pm.satisfaction_percentage(&jobs, &resources).unwrap(), 100);
    }

    #[test]
    fn test_satisfaction_large_capacity_sum() {
        let pm = PrintScheduler::new();
        let jobs = vec![Job::new(1, 1, 10)];
        let resources = vec![Resource::new(1, i64::MAX), Resource::new(2, i64::MAX)];

        assert_eq!(total_capacity(&resources), 2 * i128::from(i64::MAX));
        assert_eq!(pm.satisfaction_percentage(&jobs, &resources).unwrap(), 100);
    }

    #[test]
    fn test_satisfaction_large_page_sum() {
        let pm = PrintScheduler::new();
        let jobs = vec![Job::new(1, 1, i64::MAX), Job::new(2, 2, i64::MAX)];
        let resources = vec![Resource::new(1, i64::MAX)];

        assert_eq!(total_pages(&jobs), 2 * i128::from(i64::MAX));
        assert_eq!(pm.satisfaction_percentage(&jobs, &resources).unwrap(), 50);
    }

    #[test]
    fn test_report_large_amounts() {
        let pm = PrintScheduler::new();
        let jobs = vec![Job::new(1, 1, i64::MAX), Job::new(2, 2, i64::MAX)];
        let resources = vec![Resource::new(1, i64::MAX), Resource::new(2, i64::MAX)];

        let report = pm.report(&jobs, &resources).unwrap();
        assert_eq!(report.satisfaction_percentage, 100);
        assert!(report.missing_jobs.is_empty());
        assert_eq!(report.kpi.pages_requested, 2 * i128::from(i64::MAX));
        assert_eq!(report.kpi.pages_printed, 2 * i128::from(i64::MAX));
        assert!((report.kpi.fill_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let pm = PrintScheduler::new();
        let jobs = vec![Job::new(1, 1, -1)];

        let err = pm.missing_jobs(&jobs, &printers()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NegativePages
        );
        assert!(pm.satisfaction_percentage(&jobs, &printers()).is_err());
        assert!(pm
            .unused_resources(&docs(), &[Resource::new(1, -1)])
            .is_err());
    }

    #[test]
    fn test_validation_disabled_clamps() {
        let pm = PrintScheduler::with_config(SchedulerConfig::default().with_validation(false));
        let jobs = vec![Job::new(1, 1, -5), Job::new(2, 2, 5)];
        let resources = vec![Resource::new(1, 5), Resource::new(2, -3)];

        assert!(pm.missing_jobs(&jobs, &resources).unwrap().is_empty());
        // The percentage agrees with the allocator: every job prints
        assert_eq!(total_pages(&jobs), 5);
        assert_eq!(total_capacity(&resources), 5);
        assert_eq!(pm.satisfaction_percentage(&jobs, &resources).unwrap(), 100);
    }

    #[test]
    fn test_tie_breaker_by_id() {
        let pm = PrintScheduler::with_config(
            SchedulerConfig::default().with_tie_breaker(TieBreaker::ById),
        );
        let jobs = vec![Job::new(9, 1, 1), Job::new(3, 1, 1)];

        assert_eq!(pm.next_to_be_printed(&jobs).map(|j| j.id), Some(3));
        let ids: Vec<u32> = pm.sorted_by_priority(&jobs).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![3, 9]);

        let mut in_place = jobs.clone();
        pm.sort_by_priority(&mut in_place);
        assert_eq!(in_place[0].id, 3);
    }

    #[test]
    fn test_resource_order_changes_unused() {
        let jobs = vec![Job::new(1, 1, 2)];
        let resources = vec![Resource::new(1, 10), Resource::new(2, 2)];

        let ascending = PrintScheduler::new();
        assert_eq!(
            ascending.unused_resources(&jobs, &resources).unwrap(),
            vec![Resource::new(1, 10)]
        );

        let input_order = PrintScheduler::with_config(
            SchedulerConfig::default().with_resource_order(ResourceOrder::InputOrder),
        );
        assert_eq!(
            input_order.unused_resources(&jobs, &resources).unwrap(),
            vec![Resource::new(2, 2)]
        );
    }

    #[test]
    fn test_report() {
        let pm = PrintScheduler::new();
        let report = pm.report(&docs(), &printers()).unwrap();

        assert_eq!(report.satisfaction_percentage, 43);
        assert_eq!(report.queue, vec![2, 3, 1, 4]);
        assert_eq!(report.missing_jobs, vec![3, 1, 4]);
        assert!(report.unused_resources.is_empty());
        assert_eq!(report.kpi.pages_printed, 7);
        assert_eq!(report.kpi.completed_jobs, 1);
    }

    #[test]
    fn test_can_print() {
        let pm = PrintScheduler::new();
        assert!(pm.can_print(&Job::new(1, 1, 99), &Resource::new(1, 100)));
        assert!(!pm.can_print(&Job::new(1, 1, 101), &Resource::new(1, 100)));
    }

    #[test]
    fn test_scheduler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrintScheduler>();
    }
}
