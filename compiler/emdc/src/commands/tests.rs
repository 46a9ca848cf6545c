#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn line_column_counts_from_one() {
    let text = "farms\n  myself\n";
    assert_eq!(line_column(text, 0), (1, 1));
    assert_eq!(line_column(text, 4), (1, 5));
    assert_eq!(line_column(text, 6), (2, 1));
    assert_eq!(line_column(text, 8), (2, 3));
    assert_eq!(line_column(text, 999), (3, 1));
}

#[test]
fn line_column_counts_chars_not_bytes() {
    assert_eq!(line_column("; é\nfarms é", 11), (2, 7));
}

#[test]
fn gen_options_default_to_parallel() {
    let options = parse_gen_options(&args(&["trees.gp"])).unwrap();
    assert!(options.batch.parallel);
    assert_eq!(options.batch.threads, None);
    assert!(!options.verbose);
}

#[test]
fn gen_options_flags() {
    let options =
        parse_gen_options(&args(&["--sequential", "trees.gp", "--threads=3", "-v"])).unwrap();
    assert!(!options.batch.parallel);
    assert_eq!(options.batch.threads, Some(3));
    assert!(options.verbose);
}

#[test]
fn gen_options_reject_bad_flags() {
    for bad in ["--threads=0", "--threads=many", "--threads", "--fast"] {
        match parse_gen_options(&args(&[bad])) {
            Err(CliError::InvalidOption(arg)) => assert_eq!(arg, bad),
            other => panic!("{bad}: expected InvalidOption, got {other:?}"),
        }
    }
}

#[test]
fn read_missing_file() {
    let err = read_file("/definitely/not/here.gp").unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err
        .to_string()
        .starts_with("cannot read `/definitely/not/here.gp`: "));
}
