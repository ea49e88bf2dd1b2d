//! Argument parsing for each subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_plan_size() {
    match parse(&["s3xfer", "plan", "--size", "1000", "--part-size", "100"]) {
        CliCommand::Plan {
            size,
            start,
            end,
            part_size,
        } => {
            assert_eq!(size, Some(1000));
            assert!(start.is_none());
            assert!(end.is_none());
            assert_eq!(part_size, Some(100));
        }
        _ => panic!("expected Plan"),
    }
}

#[test]
fn cli_parse_plan_range() {
    match parse(&["s3xfer", "plan", "--start", "50", "--end", "249"]) {
        CliCommand::Plan {
            size,
            start,
            end,
            part_size,
        } => {
            assert!(size.is_none());
            assert_eq!(start.zip(end), Some((50, 249)));
            assert!(part_size.is_none());
        }
        _ => panic!("expected Plan"),
    }
}

#[test]
fn cli_plan_rejects_size_with_range() {
    assert!(Cli::try_parse_from(["s3xfer", "plan", "--size", "10", "--start", "0", "--end", "9"]).is_err());
    assert!(Cli::try_parse_from(["s3xfer", "plan", "--start", "0"]).is_err());
}

#[test]
fn cli_parse_part() {
    match parse(&[
        "s3xfer", "part", "--start", "0", "--end", "199", "--number", "2",
    ]) {
        CliCommand::Part {
            start,
            end,
            number,
            part_size,
        } => {
            assert_eq!((start, end, number), (0, 199, 2));
            assert!(part_size.is_none());
        }
        _ => panic!("expected Part"),
    }
}

#[test]
fn cli_parse_content_range() {
    match parse(&["s3xfer", "content-range", "bytes 0-499/1000"]) {
        CliCommand::ContentRange { value } => assert_eq!(value, "bytes 0-499/1000"),
        _ => panic!("expected ContentRange"),
    }
}

#[test]
fn cli_parse_content_length() {
    match parse(&["s3xfer", "content-length", "12345"]) {
        CliCommand::ContentLength { value } => assert_eq!(value, "12345"),
        _ => panic!("expected ContentLength"),
    }
}

#[test]
fn cli_parse_inspect() {
    match parse(&["s3xfer", "inspect", "/tmp/headers.txt", "--list"]) {
        CliCommand::Inspect {
            path,
            part_size,
            list,
        } => {
            assert_eq!(path, "/tmp/headers.txt");
            assert!(part_size.is_none());
            assert!(list);
        }
        _ => panic!("expected Inspect"),
    }
}
