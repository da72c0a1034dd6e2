//! Tests for the checksum, parse and completions subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_checksum() {
    match parse(&["nprov", "checksum", "https://example.com/admin.apk"]) {
        CliCommand::Checksum { url } => {
            assert_eq!(url, "https://example.com/admin.apk");
        }
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_parse_defaults() {
    match parse(&["nprov", "parse", "incoming.ndef"]) {
        CliCommand::Parse(args) => {
            assert_eq!(args.file, Path::new("incoming.ndef"));
            assert!(!args.decode);
            assert!(!args.hex);
            assert!(!args.json);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_decode_json() {
    match parse(&["nprov", "parse", "incoming.ndef", "--decode", "--json"]) {
        CliCommand::Parse(args) => {
            assert!(args.decode);
            assert!(args.json);
        }
        _ => panic!("expected Parse with --decode --json"),
    }
}

#[test]
fn cli_parse_hex_conflicts_with_decode() {
    assert!(Cli::try_parse_from(["nprov", "parse", "x.ndef", "--decode", "--hex"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["nprov", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell.to_string(), "bash");
        }
        _ => panic!("expected Completions"),
    }
}
