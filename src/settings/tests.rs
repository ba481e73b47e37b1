use super::*;

use assert_matches::assert_matches;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert!(settings.sort);
    assert_eq!(settings.limit, None);
    assert!(!settings.unique);
}

#[test]
fn test_embedded_defaults_match_default() {
    assert_eq!(Settings::load(None).unwrap(), Settings::default());
}

#[test]
fn test_load_overlay() {
    let settings = Settings::load(Some(Path::new("src/testing/assets/configs/limit.yaml"))).unwrap();
    assert_eq!(
        settings,
        Settings {
            sort: true,
            limit: Some(2),
            unique: true,
        }
    );
}

#[test]
fn test_load_missing_overlay() {
    let result = Settings::load(Some(Path::new("src/testing/assets/configs/missing.yaml")));
    assert_matches!(result, Err(Error::FileNotFound { filename }) if filename.ends_with("missing.yaml"));
}

#[test]
fn test_load_invalid_overlay() {
    let result = Settings::load(Some(Path::new("src/testing/assets/configs/invalid.yaml")));
    assert_matches!(result, Err(Error::Config(_)));
}

#[test]
fn test_load_directory_overlay() {
    let result = Settings::load(Some(Path::new("src/testing/assets/configs")));
    assert_matches!(result, Err(Error::Config(_)));
}
