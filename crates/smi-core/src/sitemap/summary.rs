//! Per-file import summary.

use std::fmt;

/// An item whose decoded response exceeded the size limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    /// Zero-based position of the item in its file.
    pub index: usize,
    pub url: String,
    /// Decoded response length in bytes.
    pub size: usize,
}

/// Outcome of processing one export file; only used for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub file_name: String,
    pub item_count: usize,
    pub skipped_items: Vec<SkippedItem>,
    pub response_len_limit: usize,
    /// Entries handed to the sink.
    pub submitted_count: usize,
    /// Set when the file failed and the run was allowed to continue.
    pub error: Option<String>,
}

impl FileSummary {
    pub fn new(file_name: impl Into<String>, response_len_limit: usize) -> Self {
        Self {
            file_name: file_name.into(),
            item_count: 0,
            skipped_items: Vec::new(),
            response_len_limit,
            submitted_count: 0,
            error: None,
        }
    }

    pub fn skipped_item_count(&self) -> usize {
        self.skipped_items.len()
    }

    pub fn is_skipped(&self, index: usize) -> bool {
        self.skipped_items.iter().any(|s| s.index == index)
    }
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- File: {}", self.file_name)?;
        writeln!(f, "+ {} items successfully parsed", self.item_count)?;
        if !self.skipped_items.is_empty() {
            writeln!(
                f,
                "+ {} items over response size limit of {} bytes",
                self.skipped_item_count(),
                self.response_len_limit
            )?;
            for item in &self.skipped_items {
                writeln!(
                    f,
                    "+++ oversized item: {}, response size: {}",
                    item.url, item.size
                )?;
            }
        }
        writeln!(f, "+ {} items submitted", self.submitted_count)?;
        if let Some(err) = &self.error {
            writeln!(f, "! import failed: {}", err)?;
        }
        Ok(())
    }
}
