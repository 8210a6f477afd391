// ccprune-core/src/domain/report.rs

use std::fmt;

use super::error::DeletionError;

/// Tally of a deletion pass. Partial failure is a normal outcome.
#[derive(Debug, Default)]
pub struct DeletionReport {
    total: usize,
    deleted: usize,
    failures: Vec<DeletionError>,
}

impl DeletionReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            deleted: 0,
            failures: Vec::new(),
        }
    }

    pub fn record_deleted(&mut self) {
        self.deleted += 1;
    }

    pub fn record_failure(&mut self, failure: DeletionError) {
        self.failures.push(failure);
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted
    }

    pub fn failures(&self) -> &[DeletionError] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for DeletionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully deleted {}/{} files",
            self.deleted_count(),
            self.total
        )
    }
}
