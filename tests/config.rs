use assert_matches::assert_matches;
use camino::Utf8PathBuf;

use orcid_bib::config::{ConfigLoader, ConfigOverrides, DEFAULT_OUTPUT};
use orcid_bib::error::BibError;

fn write_config(temp: &tempfile::TempDir, content: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(temp.path().join("orcid-bib.json")).unwrap();
    std::fs::write(path.as_std_path(), content).unwrap();
    path
}

#[test]
fn load_partial_config_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_config(&temp, r#"{ "orcid_id": "0000-0002-1825-0097" }"#);

    let resolved = ConfigLoader::resolve(Some(path.as_path()), ConfigOverrides::default()).unwrap();
    assert_eq!(resolved.orcid_id.as_str(), "0000-0002-1825-0097");
    assert_eq!(resolved.output, Utf8PathBuf::from(DEFAULT_OUTPUT));
}

#[test]
fn cli_override_beats_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_config(
        &temp,
        r#"{ "orcid_id": "0000-0002-1825-0097", "output": "site/papers.bib" }"#,
    );
    let overrides = ConfigOverrides {
        orcid_id: Some("https://orcid.org/0000-0002-3284-2152".to_string()),
        output: None,
    };

    let resolved = ConfigLoader::resolve(Some(path.as_path()), overrides).unwrap();
    assert_eq!(resolved.orcid_id.as_str(), "0000-0002-3284-2152");
    assert_eq!(resolved.output, Utf8PathBuf::from("site/papers.bib"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("absent.json")).unwrap();

    let err = ConfigLoader::resolve(Some(path.as_path()), ConfigOverrides::default()).unwrap_err();
    assert_matches!(err, BibError::MissingConfig(_));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_config(&temp, "{ not json");

    let err = ConfigLoader::resolve(Some(path.as_path()), ConfigOverrides::default()).unwrap_err();
    assert_matches!(err, BibError::ConfigParse(_));
}

#[test]
fn invalid_orcid_in_file_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_config(&temp, r#"{ "orcid_id": "1234" }"#);

    let err = ConfigLoader::resolve(Some(path.as_path()), ConfigOverrides::default()).unwrap_err();
    assert_matches!(err, BibError::InvalidOrcidId(_));
}
