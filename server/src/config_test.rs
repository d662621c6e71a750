use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_explicit_value() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn parse_port_rejects_invalid_values() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn invalid_port_error_names_the_value() {
    assert_eq!(ConfigError::InvalidPort("abc".into()).to_string(), r#"invalid PORT: "abc""#);
}

#[test]
fn resolve_public_dir_defaults_next_to_server_crate() {
    let dir = resolve_public_dir(None);
    assert!(dir.ends_with("public"), "{}", dir.display());
    assert_eq!(resolve_public_dir(Some("")), dir);
}

#[test]
fn resolve_public_dir_uses_explicit_value() {
    assert_eq!(resolve_public_dir(Some("/srv/portfolio")), PathBuf::from("/srv/portfolio"));
}

#[test]
fn dotenv_problem_ignores_loaded_and_missing_files() {
    assert!(dotenv_problem(&Ok(PathBuf::from(".env"))).is_none());
    let missing = Err(dotenvy::Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "no .env")));
    assert!(dotenv_problem(&missing).is_none());
}

#[test]
fn dotenv_problem_reports_malformed_file() {
    let malformed = Err(dotenvy::Error::LineParse("PORT 3000".into(), 5));
    assert!(dotenv_problem(&malformed).is_some());

    let unreadable = Err(dotenvy::Error::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")));
    assert!(dotenv_problem(&unreadable).is_some());
}
