//! Builds export folders on disk for integration tests.
//!
//! Items are written the way the proxy's "save items" export writes them:
//! CDATA-wrapped URL and base64 payloads with a `base64="true"` attribute.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct FixtureItem {
    pub url: String,
    pub request: Vec<u8>,
    pub response: Vec<u8>,
    pub comment: Option<String>,
    pub color: Option<String>,
}

impl FixtureItem {
    pub fn new(url: &str, request: &[u8], response: &[u8]) -> Self {
        Self {
            url: url.to_string(),
            request: request.to_vec(),
            response: response.to_vec(),
            comment: None,
            color: None,
        }
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

/// Render an export document containing `items`.
pub fn export_xml(items: &[FixtureItem]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\"?>\n<!DOCTYPE items [\n<!ELEMENT items (item*)>\n]>\n<items burpVersion=\"2023.10\" exportTime=\"Mon Jan 01 00:00:00 UTC 2024\">\n",
    );
    for item in items {
        xml.push_str("  <item>\n");
        xml.push_str("    <time>Mon Jan 01 00:00:00 UTC 2024</time>\n");
        let _ = writeln!(xml, "    <url><![CDATA[{}]]></url>", item.url);
        xml.push_str("    <method><![CDATA[GET]]></method>\n");
        let _ = writeln!(
            xml,
            "    <request base64=\"true\"><![CDATA[{}]]></request>",
            STANDARD.encode(&item.request)
        );
        xml.push_str("    <status>200</status>\n");
        let _ = writeln!(xml, "    <responselength>{}</responselength>", item.response.len());
        let _ = writeln!(
            xml,
            "    <response base64=\"true\"><![CDATA[{}]]></response>",
            STANDARD.encode(&item.response)
        );
        if let Some(color) = &item.color {
            let _ = writeln!(xml, "    <color>{}</color>", color);
        }
        if let Some(comment) = &item.comment {
            let _ = writeln!(xml, "    <comment>{}</comment>", comment);
        }
        xml.push_str("  </item>\n");
    }
    xml.push_str("</items>\n");
    xml
}

/// A temp dir with a `source_sitemap` folder inside.
pub struct SitemapDir {
    _root: TempDir,
    path: PathBuf,
}

impl SitemapDir {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("source_sitemap");
        std::fs::create_dir(&path).unwrap();
        Self { _root: root, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_export(&self, name: &str, items: &[FixtureItem]) -> PathBuf {
        self.write_raw(name, &export_xml(items))
    }

    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let file = self.path.join(name);
        std::fs::write(&file, contents).unwrap();
        file
    }
}
