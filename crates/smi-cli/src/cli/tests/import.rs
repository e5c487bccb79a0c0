//! Tests for the import subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_import_defaults() {
    match parse(&["smi", "import"]) {
        CliCommand::Import {
            dir,
            output,
            response_len_limit,
            exclude_oversized,
            continue_on_error,
            print_items,
        } => {
            assert!(dir.is_none());
            assert!(output.is_none());
            assert!(response_len_limit.is_none());
            assert!(!exclude_oversized);
            assert!(!continue_on_error);
            assert!(!print_items);
        }
        _ => panic!("expected Import"),
    }
}

#[test]
fn cli_parse_import_with_flags() {
    match parse(&[
        "smi",
        "import",
        "/tmp/exports",
        "-o",
        "out.jsonl",
        "--response-len-limit",
        "1000",
        "--exclude-oversized",
        "--continue-on-error",
        "--print-items",
    ]) {
        CliCommand::Import {
            dir,
            output,
            response_len_limit,
            exclude_oversized,
            continue_on_error,
            print_items,
        } => {
            assert_eq!(dir.as_deref(), Some(Path::new("/tmp/exports")));
            assert_eq!(output.as_deref(), Some(Path::new("out.jsonl")));
            assert_eq!(response_len_limit, Some(1000));
            assert!(exclude_oversized);
            assert!(continue_on_error);
            assert!(print_items);
        }
        _ => panic!("expected Import with flags"),
    }
}

#[test]
fn cli_parse_import_rejects_non_numeric_limit() {
    assert!(Cli::try_parse_from(["smi", "import", "--response-len-limit", "big"]).is_err());
}
