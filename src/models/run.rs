use std::time::Duration;

use crate::models::page::PageOutcome;

/// Outcome of one page within a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub label: String,
    pub success: bool,
    pub load_time: Duration,
}

/// Aggregated results of a complete run, in page order
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub records: Vec<PageRecord>,
    pub total_load_time: Duration,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: &str, outcome: &PageOutcome) {
        self.total_load_time += outcome.load_time;
        self.records.push(PageRecord {
            label: label.to_string(),
            success: outcome.success,
            load_time: outcome.load_time,
        });
    }

    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.success).count()
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Total load time divided by the number of pages tested, failed pages
    /// included.
    pub fn average_load_time(&self) -> Duration {
        match u32::try_from(self.total()) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(total) => self.total_load_time / total,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}
