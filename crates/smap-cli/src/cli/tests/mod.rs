//! CLI parse tests.

use super::{parse_headers, Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_inspect() {
    match parse(&["smap", "inspect", "https://example.com/"]) {
        CliCommand::Inspect { url, headers } => {
            assert_eq!(url, "https://example.com/");
            assert!(headers.is_empty());
        }
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_inspect_headers() {
    match parse(&[
        "smap",
        "inspect",
        "https://example.com/",
        "-H",
        "Cookie: session=abc",
        "--header",
        "Authorization: Bearer x",
    ]) {
        CliCommand::Inspect { headers, .. } => {
            assert_eq!(headers.len(), 2);
        }
        _ => panic!("expected Inspect with headers"),
    }
}

#[test]
fn cli_parse_reconstruct() {
    match parse(&["smap", "reconstruct", "https://example.com/app"]) {
        CliCommand::Reconstruct {
            url,
            output_dir,
            headers,
        } => {
            assert_eq!(url, "https://example.com/app");
            assert!(output_dir.is_none());
            assert!(headers.is_empty());
        }
        _ => panic!("expected Reconstruct"),
    }
}

#[test]
fn cli_parse_reconstruct_output_dir() {
    match parse(&[
        "smap",
        "reconstruct",
        "https://example.com/",
        "--output-dir",
        "/tmp/tree",
    ]) {
        CliCommand::Reconstruct { output_dir, .. } => {
            assert_eq!(
                output_dir.as_deref(),
                Some(std::path::Path::new("/tmp/tree"))
            );
        }
        _ => panic!("expected Reconstruct with --output-dir"),
    }
}

#[test]
fn cli_rejects_missing_url() {
    assert!(Cli::try_parse_from(["smap", "inspect"]).is_err());
    assert!(Cli::try_parse_from(["smap"]).is_err());
}

#[test]
fn parse_headers_splits_on_first_colon() {
    let raw = vec!["Cookie: a=b".to_string(), "X-Token:v:with:colons".to_string()];
    let headers = parse_headers(&raw).unwrap();
    assert_eq!(headers.get("Cookie").map(String::as_str), Some("a=b"));
    assert_eq!(
        headers.get("X-Token").map(String::as_str),
        Some("v:with:colons")
    );
}

#[test]
fn parse_headers_rejects_missing_separator() {
    let raw = vec!["NotAHeader".to_string()];
    assert!(parse_headers(&raw).is_err());
}
