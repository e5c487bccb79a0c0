//! Minimal structures for the proxy "save items" XML export.
//!
//! Only the children the importer consumes are modelled; `time`, `host`,
//! `port`, `method`, `status` and friends are ignored.

use serde::Deserialize;

/// Root `<items>` element.
#[derive(Debug, Deserialize)]
pub(crate) struct RawItems {
    #[serde(rename = "item", default)]
    pub items: Vec<RawItem>,
}

/// One `<item>`. Required children are optional here so a missing element
/// can be reported by name instead of as a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub(crate) struct RawItem {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub request: Option<RawPayload>,
    #[serde(default)]
    pub response: Option<RawPayload>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// `<request base64="true">…</request>` and the matching `<response>`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPayload {
    #[serde(rename = "@base64", default)]
    pub base64: Option<String>,
    #[serde(rename = "$text", default)]
    pub text: String,
}

/// Needs quick-xml's `overlapped-lists` so `<item>`s split by other
/// elements still land in one list.
pub(crate) fn parse_items(xml: &str) -> Result<RawItems, quick_xml::DeError> {
    quick_xml::de::from_str(xml)
}
