//! `smi inspect <path>` – list the items of one export without importing them.

use anyhow::Result;
use smi_core::importer::describe_item;
use smi_core::sitemap::{Base64Decoder, SitemapReader};
use smi_core::Endpoint;
use std::path::Path;

pub fn run_inspect(path: &Path, response_len_limit: usize) -> Result<()> {
    let parsed = SitemapReader::new(Base64Decoder, response_len_limit).read_file(path)?;

    for (index, item) in parsed.items.iter().enumerate() {
        let endpoint = match Endpoint::parse(&item.url) {
            Ok(ep) => ep.to_string(),
            Err(e) => format!("invalid ({e})"),
        };
        let flag = if parsed.summary.is_skipped(index) { " [oversized]" } else { "" };
        println!("{} -> {}{}", describe_item(index, item), endpoint, flag);
    }
    println!();
    print!("{}", parsed.summary);
    Ok(())
}
