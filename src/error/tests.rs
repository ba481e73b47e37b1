use super::*;
use assert_matches::assert_matches;

#[test]
fn test_invalid_pattern_message() {
    let err = InvalidPatternError { pattern: "".into() };
    assert_eq!(err.to_string(), r#"Pattern format: '<pattern>' """#);

    let err = Error::from(InvalidPatternError { pattern: " ".into() });
    assert_eq!(err.to_string(), r#"Pattern format: '<pattern>' " ""#);
}

#[test]
fn test_io_error_is_transparent() {
    let err = Error::from(io::Error::other("disk on fire"));
    assert_eq!(err.to_string(), "disk on fire");
    assert_matches!(err, Error::Io(_));
}

#[test]
fn test_file_not_found_message() {
    let err = Error::FileNotFound {
        filename: "classes.txt".into(),
    };
    assert_eq!(err.to_string(), r#"file "classes.txt" not found"#);
}

#[test]
fn test_broken_pipe() {
    assert!(Error::from(io::Error::from(io::ErrorKind::BrokenPipe)).is_broken_pipe());
    assert!(!Error::from(io::Error::from(io::ErrorKind::NotFound)).is_broken_pipe());
    assert!(!Error::FileNotFound { filename: "x".into() }.is_broken_pipe());
}
