//! Sitemap export reader: parse the XML "save items" export and decode each
//! item's request/response payloads.
//!
//! Extraction is all-or-nothing per file: a missing `url`, `request` or
//! `response` element fails the file before any of its items are returned.

mod decode;
mod extract;
mod parse;
mod summary;

pub use decode::{Base64Decoder, PayloadDecoder, PayloadEncoding};
pub use extract::{ItemRecord, ParsedSitemap, SitemapReader};
pub use summary::{FileSummary, SkippedItem};

/// Default oversize threshold for decoded responses, in bytes.
pub const DEFAULT_RESPONSE_LEN_LIMIT: usize = 2_000_000;
