//! `smi import [DIR]` – import a folder of exports as JSON-lines site map entries.

use anyhow::{Context, Result};
use smi_core::config::{ImportConfig, OversizePolicy};
use smi_core::sitemap::Base64Decoder;
use smi_core::{Importer, JsonLinesSink};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Flags of the `import` subcommand.
#[derive(Debug, Default)]
pub struct ImportArgs {
    pub dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub response_len_limit: Option<usize>,
    pub exclude_oversized: bool,
    pub continue_on_error: bool,
    pub print_items: bool,
}

/// Command-line flags win over the config file; boolean flags can only switch a setting on.
pub(crate) fn apply_overrides(mut cfg: ImportConfig, args: &ImportArgs) -> ImportConfig {
    if let Some(limit) = args.response_len_limit {
        cfg.response_len_limit = limit;
    }
    if args.exclude_oversized {
        cfg.oversize_policy = OversizePolicy::Exclude;
    }
    cfg.continue_on_error |= args.continue_on_error;
    cfg.print_items |= args.print_items;
    cfg
}

pub fn run_import(cfg: ImportConfig, args: ImportArgs) -> Result<()> {
    let cfg = apply_overrides(cfg, &args);
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => cfg.sitemap_dir_in(&std::env::current_dir()?),
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let mut importer = Importer::new(cfg, Base64Decoder, JsonLinesSink::new(writer));
    let report = importer.run(&dir)?;
    let sink = importer.into_sink();

    // Entries own stdout when no --output was given.
    if args.output.is_some() {
        println!("{}", report);
    } else {
        eprintln!("{}", report);
    }

    if sink.failed() > 0 {
        anyhow::bail!(
            "{} of {} entries could not be written",
            sink.failed(),
            sink.failed() + sink.written()
        );
    }
    Ok(())
}
