//! Run-level report: the per-file summaries of one import.

use std::fmt;

use crate::sitemap::FileSummary;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub summaries: Vec<FileSummary>,
    pub total_submitted: usize,
}

impl ImportReport {
    pub fn push(&mut self, summary: FileSummary) {
        self.total_submitted += summary.submitted_count;
        self.summaries.push(summary);
    }

    pub fn failed_files(&self) -> usize {
        self.summaries.iter().filter(|s| s.error.is_some()).count()
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------- Summary ----------")?;
        for summary in &self.summaries {
            writeln!(f, "{}", summary)?;
        }
        write!(f, "done: {} entries submitted", self.total_submitted)?;
        if self.failed_files() > 0 {
            write!(f, ", {} file(s) failed", self.failed_files())?;
        }
        Ok(())
    }
}
