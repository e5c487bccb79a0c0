//! Turn a parsed export into decoded item records plus a file summary.

use std::path::Path;

use crate::error::ImportError;

use super::decode::{PayloadDecoder, PayloadEncoding};
use super::parse::{parse_items, RawItem, RawPayload};
use super::summary::{FileSummary, SkippedItem};

/// One exported request/response pair with decoded payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub url: String,
    pub request: Vec<u8>,
    pub response: Vec<u8>,
    pub comment: String,
    pub color: String,
}

/// Items of one file in document order, with its summary.
#[derive(Debug, Clone)]
pub struct ParsedSitemap {
    pub items: Vec<ItemRecord>,
    pub summary: FileSummary,
}

/// Reads export files through a payload decoder.
///
/// Responses longer than `response_len_limit` (after decoding) are listed in
/// the summary's skip list but still returned; the caller decides whether to
/// submit them.
pub struct SitemapReader<D> {
    decoder: D,
    response_len_limit: usize,
}

impl<D: PayloadDecoder> SitemapReader<D> {
    pub fn new(decoder: D, response_len_limit: usize) -> Self {
        Self {
            decoder,
            response_len_limit,
        }
    }

    pub fn read_file(&self, path: &Path) -> Result<ParsedSitemap, ImportError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!("begin parsing {}", file_name);

        let bytes = std::fs::read(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // Only UTF-8 documents are read; other declared encodings are a parse failure.
        let xml = String::from_utf8(bytes).map_err(|err| ImportError::Xml {
            path: path.to_path_buf(),
            source: quick_xml::DeError::Custom(format!(
                "document is not valid UTF-8: {}",
                err.utf8_error()
            )),
        })?;
        let raw = parse_items(&xml).map_err(|source| ImportError::Xml {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = self.extract(&file_name, raw.items)?;

        tracing::info!(
            "finish parsing {}: {} items, {} oversized",
            file_name,
            parsed.summary.item_count,
            parsed.summary.skipped_item_count()
        );
        Ok(parsed)
    }

    /// Same as [`read_file`](Self::read_file) for an in-memory document.
    pub fn read_str(&self, file_name: &str, xml: &str) -> Result<ParsedSitemap, ImportError> {
        let raw = parse_items(xml).map_err(|source| ImportError::Xml {
            path: file_name.into(),
            source,
        })?;
        self.extract(file_name, raw.items)
    }

    fn extract(&self, file_name: &str, raw_items: Vec<RawItem>) -> Result<ParsedSitemap, ImportError> {
        let mut summary = FileSummary::new(file_name, self.response_len_limit);
        let mut items = Vec::with_capacity(raw_items.len());

        for (index, raw) in raw_items.into_iter().enumerate() {
            let missing = |field| ImportError::MissingField {
                file: file_name.to_string(),
                index,
                field,
            };
            let url = raw.url.ok_or_else(|| missing("url"))?;
            let request = raw.request.ok_or_else(|| missing("request"))?;
            let response = raw.response.ok_or_else(|| missing("response"))?;

            let request = self.decode_payload(file_name, index, "request", &request)?;
            let response = self.decode_payload(file_name, index, "response", &response)?;

            if response.len() > self.response_len_limit {
                tracing::warn!(
                    "{}: item {} response is {} bytes (limit {})",
                    file_name,
                    index,
                    response.len(),
                    self.response_len_limit
                );
                summary.skipped_items.push(SkippedItem {
                    index,
                    url: url.clone(),
                    size: response.len(),
                });
            }

            items.push(ItemRecord {
                url,
                request,
                response,
                comment: raw.comment.unwrap_or_default(),
                color: raw.color.unwrap_or_default(),
            });
        }

        summary.item_count = items.len();
        Ok(ParsedSitemap { items, summary })
    }

    fn decode_payload(
        &self,
        file_name: &str,
        index: usize,
        field: &'static str,
        payload: &RawPayload,
    ) -> Result<Vec<u8>, ImportError> {
        let encoding = PayloadEncoding::from_attribute(payload.base64.as_deref());
        self.decoder
            .decode(&payload.text, encoding)
            .map_err(|source| ImportError::Decode {
                file: file_name.to_string(),
                index,
                field,
                source,
            })
    }
}
