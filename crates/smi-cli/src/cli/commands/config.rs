//! `smi config` – show where the config lives and what it resolves to.

use anyhow::Result;
use smi_core::config::{self, ImportConfig};

pub fn run_config(cfg: &ImportConfig) -> Result<()> {
    println!("config file: {}", config::config_path()?.display());
    println!("sitemap_dir = {}", cfg.sitemap_dir.display());
    println!("file_extension = {}", cfg.file_extension);
    println!("response_len_limit = {}", cfg.response_len_limit);
    println!("oversize_policy = {:?}", cfg.oversize_policy);
    println!("continue_on_error = {}", cfg.continue_on_error);
    println!("print_items = {}", cfg.print_items);
    Ok(())
}
