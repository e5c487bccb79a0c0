//! Error type for the import path (directory scan, extraction, submission).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by a [`PayloadDecoder`](crate::sitemap::PayloadDecoder).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised while importing sitemap exports.
///
/// `FolderNotFound` and `NoSitemapFiles` stop the whole run before anything is
/// submitted. Every other variant aborts the file being processed; entries
/// already handed to the sink stay there.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot find folder {}", .0.display())]
    FolderNotFound(PathBuf),

    #[error("no sitemap xml file found in {}", .0.display())]
    NoSitemapFiles(PathBuf),

    #[error("unsupported URL scheme in {url:?} (expected http or https)")]
    InvalidUrlScheme { url: String },

    #[error("{file}: item {index} has no <{field}> element")]
    MissingField {
        file: String,
        index: usize,
        field: &'static str,
    },

    #[error("{file}: item {index}: cannot decode <{field}> payload")]
    Decode {
        file: String,
        index: usize,
        field: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("parse sitemap XML: {}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ImportError {
    /// True for errors that abort the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ImportError::FolderNotFound(_) | ImportError::NoSitemapFiles(_)
        )
    }
}
