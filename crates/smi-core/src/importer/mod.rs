//! Import driver: scan a folder of exports, extract each file and hand the
//! items to a [`SiteMapSink`].
//!
//! Files are processed one at a time in directory-listing order (not sorted),
//! items in document order. Nothing is retried and nothing is rolled back: if
//! an item's URL is rejected, earlier items of that file are already in the
//! sink.

mod report;

pub use report::ImportReport;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ImportConfig, OversizePolicy};
use crate::endpoint::Endpoint;
use crate::error::ImportError;
use crate::sink::{SiteMapEntry, SiteMapSink};
use crate::sitemap::{FileSummary, ItemRecord, PayloadDecoder, SitemapReader};

/// A file that failed, with what was done before the failure.
struct FileFailure {
    summary: FileSummary,
    error: ImportError,
}

pub struct Importer<D, S> {
    config: ImportConfig,
    reader: SitemapReader<D>,
    sink: S,
}

impl<D: PayloadDecoder, S: SiteMapSink> Importer<D, S> {
    pub fn new(config: ImportConfig, decoder: D, sink: S) -> Self {
        let reader = SitemapReader::new(decoder, config.response_len_limit);
        Self {
            config,
            reader,
            sink,
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Import every matching file in `dir`.
    ///
    /// Fails with `FolderNotFound`/`NoSitemapFiles` before anything is
    /// submitted. A per-file error aborts the run unless `continue_on_error`
    /// is set, in which case it is recorded in that file's summary.
    pub fn run(&mut self, dir: &Path) -> Result<ImportReport, ImportError> {
        let files = self.sitemap_files(dir)?;
        tracing::info!("importing {} sitemap file(s) from {}", files.len(), dir.display());

        let mut report = ImportReport::default();
        for path in files {
            match self.import_file(&path) {
                Ok(summary) => report.push(summary),
                Err(FileFailure { mut summary, error }) => {
                    tracing::error!("import of {} failed: {}", path.display(), error);
                    if !self.config.continue_on_error {
                        return Err(error);
                    }
                    summary.error = Some(error.to_string());
                    report.push(summary);
                }
            }
        }

        tracing::info!(
            "import finished: {} file(s), {} entries submitted",
            report.summaries.len(),
            report.total_submitted
        );
        Ok(report)
    }

    /// Matching files in directory-listing order.
    pub fn sitemap_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
        if !dir.is_dir() {
            return Err(ImportError::FolderNotFound(dir.to_path_buf()));
        }
        let io_err = |source| ImportError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            let matches = path
                .extension()
                .is_some_and(|ext| ext == self.config.file_extension.as_str());
            if matches && path.is_file() {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(ImportError::NoSitemapFiles(dir.to_path_buf()));
        }
        Ok(files)
    }

    fn import_file(&mut self, path: &Path) -> Result<FileSummary, FileFailure> {
        let parsed = match self.reader.read_file(path) {
            Ok(parsed) => parsed,
            Err(error) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                return Err(FileFailure {
                    summary: FileSummary::new(name, self.config.response_len_limit),
                    error,
                });
            }
        };

        let mut summary = parsed.summary;
        for (index, item) in parsed.items.into_iter().enumerate() {
            if self.config.print_items {
                eprintln!("{}", describe_item(index, &item));
            }
            if self.config.oversize_policy == OversizePolicy::Exclude && summary.is_skipped(index) {
                tracing::debug!("excluding oversized item {} ({})", index, item.url);
                continue;
            }
            match submission(item) {
                Ok(entry) => {
                    self.sink.add_to_site_map(entry);
                    summary.submitted_count += 1;
                }
                Err(error) => return Err(FileFailure { summary, error }),
            }
        }
        Ok(summary)
    }
}

/// Build the sink entry for one record.
pub fn submission(item: ItemRecord) -> Result<SiteMapEntry, ImportError> {
    let endpoint = Endpoint::parse(&item.url)?;
    Ok(SiteMapEntry {
        endpoint,
        request: item.request,
        response: item.response,
        comment: item.comment,
        color: item.color,
    })
}

/// One-line description used for item listings.
pub fn describe_item(index: usize, item: &ItemRecord) -> String {
    let mut line = format!(
        "[{}] {} request={}B response={}B",
        index,
        item.url,
        item.request.len(),
        item.response.len()
    );
    if !item.color.is_empty() {
        line.push_str(&format!(" color={}", item.color));
    }
    if !item.comment.is_empty() {
        line.push_str(&format!(" comment={:?}", item.comment));
    }
    line
}
