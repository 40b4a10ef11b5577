// Tests for the endpoint table and its configuration file

use mindmap_core::endpoints::{DEFAULT_BASE_URL, EndpointTable};
use mindmap_core::error::ConfigError;
use mindmap_core::model::InputCategory;
use std::fs;
use tempfile::TempDir;
use url::Url;

fn custom_table() -> EndpointTable {
    EndpointTable::new(
        Url::parse("https://flows.example.com/web").unwrap(),
        Url::parse("https://flows.example.com/video").unwrap(),
        Url::parse("https://flows.example.com/prompt").unwrap(),
    )
}

// ============================================================================
// Resolution Tests
// ============================================================================

#[test]
fn test_resolve_each_category() {
    let table = custom_table();

    assert_eq!(
        table.resolve(InputCategory::WebLink).as_str(),
        "https://flows.example.com/web"
    );
    assert_eq!(
        table.resolve(InputCategory::VideoLink).as_str(),
        "https://flows.example.com/video"
    );
    assert_eq!(
        table.resolve(InputCategory::Prompt).as_str(),
        "https://flows.example.com/prompt"
    );
}

#[test]
fn test_resolve_is_stable() {
    let table = EndpointTable::default();
    for category in InputCategory::ALL {
        assert_eq!(table.resolve(category), table.resolve(category));
    }
}

#[test]
fn test_default_addresses_are_distinct() {
    let table = EndpointTable::default();
    let urls: Vec<&Url> = table.entries().map(|(_, u)| u).collect();

    assert_eq!(urls.len(), 3);
    assert_ne!(urls[0], urls[1]);
    assert_ne!(urls[1], urls[2]);
    assert_ne!(urls[0], urls[2]);
}

#[test]
fn test_default_table_uses_default_base() {
    let table = EndpointTable::default();
    assert_eq!(
        table.resolve(InputCategory::VideoLink).as_str(),
        format!("{}video-link", DEFAULT_BASE_URL)
    );
}

#[test]
fn test_from_base_appends_category_slug() {
    let base = Url::parse("https://flows.example.com/api/run/").unwrap();
    let table = EndpointTable::from_base(&base).unwrap();

    assert_eq!(
        table.resolve(InputCategory::WebLink).as_str(),
        "https://flows.example.com/api/run/web-link"
    );
    assert_eq!(
        table.resolve(InputCategory::Prompt).as_str(),
        "https://flows.example.com/api/run/prompt"
    );
}

#[test]
fn test_entries_follow_category_order() {
    let table = custom_table();
    let categories: Vec<InputCategory> = table.entries().map(|(c, _)| c).collect();
    assert_eq!(categories, InputCategory::ALL.to_vec());
}

// ============================================================================
// Configuration File Tests
// ============================================================================

#[test]
fn test_save_then_load() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("endpoints.json");

    let table = custom_table();
    table.save(&path)?;

    assert!(path.exists());
    assert_eq!(EndpointTable::load(&path)?, table);
    Ok(())
}

#[test]
fn test_load_hand_written_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("endpoints.json");
    fs::write(
        &path,
        r#"{
            "web_link": "http://localhost:9000/web",
            "video_link": "http://localhost:9000/video",
            "prompt": "http://localhost:9000/prompt"
        }"#,
    )?;

    let table = EndpointTable::load(&path)?;
    assert_eq!(
        table.resolve(InputCategory::VideoLink).as_str(),
        "http://localhost:9000/video"
    );
    Ok(())
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let table = EndpointTable::load_or_default(&path).unwrap();
    assert_eq!(table, EndpointTable::default());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = EndpointTable::load(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}

#[test]
fn test_load_missing_key_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("endpoints.json");
    fs::write(&path, r#"{"web_link": "http://localhost/web"}"#).unwrap();

    let result = EndpointTable::load(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_load_invalid_url_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("endpoints.json");
    fs::write(
        &path,
        r#"{"web_link": "not a url", "video_link": "http://a/b", "prompt": "http://a/c"}"#,
    )
    .unwrap();

    assert!(matches!(
        EndpointTable::load(&path),
        Err(ConfigError::ParseError(_))
    ));
}
