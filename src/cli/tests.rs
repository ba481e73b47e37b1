use super::*;

use clap::{CommandFactory, error::ErrorKind};

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_positional_arguments() {
    let opt = Opt::try_parse_from(["class-finder", "classes.txt", "FBar "]).unwrap();
    assert_eq!(opt.names_file, PathBuf::from("classes.txt"));
    assert_eq!(opt.pattern, "FBar ");
    assert_eq!(opt.limit, None);
    assert!(!opt.no_sort);
    assert!(!opt.unique);
}

#[test]
fn test_options() {
    let opt = Opt::try_parse_from(["class-finder", "-n", "5", "--no-sort", "-u", "-", "fbb"]).unwrap();
    assert_eq!(opt.names_file, PathBuf::from("-"));
    assert_eq!(opt.pattern, "fbb");
    assert_eq!(opt.limit, Some(5));
    assert!(opt.no_sort);
    assert!(opt.unique);
}

#[test]
fn test_empty_pattern_is_accepted_by_parser() {
    let opt = Opt::try_parse_from(["class-finder", "classes.txt", ""]).unwrap();
    assert_eq!(opt.pattern, "");
}

#[test]
fn test_missing_arguments() {
    let err = Opt::try_parse_from(["class-finder", "classes.txt"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

    let err = Opt::try_parse_from(["class-finder", "a", "b", "c"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}
