//! Site map sink interface.
//!
//! The importer only depends on this trait and does not know which host tool
//! (or file) ends up receiving the entries.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::endpoint::Endpoint;

/// A request/response pair ready to be placed in a site map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMapEntry {
    pub endpoint: Endpoint,
    pub request: Vec<u8>,
    pub response: Vec<u8>,
    pub comment: String,
    /// Highlight colour, passed through verbatim.
    pub color: String,
}

/// Receiver of imported entries. Submission is fire-and-forget.
pub trait SiteMapSink {
    fn add_to_site_map(&mut self, entry: SiteMapEntry);
}

impl<S: SiteMapSink + ?Sized> SiteMapSink for &mut S {
    fn add_to_site_map(&mut self, entry: SiteMapEntry) {
        (**self).add_to_site_map(entry)
    }
}

/// Keeps every submitted entry in memory, in submission order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub entries: Vec<SiteMapEntry>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SiteMapSink for CollectingSink {
    fn add_to_site_map(&mut self, entry: SiteMapEntry) {
        self.entries.push(entry);
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(flatten)]
    endpoint: &'a Endpoint,
    request: String,
    response: String,
    comment: &'a str,
    highlight: &'a str,
}

/// Writes one JSON object per entry, payloads re-encoded as base64.
///
/// Write failures are logged and counted, never returned.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
    failed: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            failed: 0,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_entry(&mut self, entry: &SiteMapEntry) -> anyhow::Result<()> {
        let json = JsonEntry {
            endpoint: &entry.endpoint,
            request: STANDARD.encode(&entry.request),
            response: STANDARD.encode(&entry.response),
            comment: &entry.comment,
            highlight: &entry.color,
        };
        serde_json::to_writer(&mut self.writer, &json)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> SiteMapSink for JsonLinesSink<W> {
    fn add_to_site_map(&mut self, entry: SiteMapEntry) {
        match self.write_entry(&entry) {
            Ok(()) => self.written += 1,
            Err(err) => {
                self.failed += 1;
                tracing::warn!("failed to write site map entry for {}: {:#}", entry.endpoint, err);
            }
        }
    }
}
