//! Unit tests for the Source Catalog.

use std::fs;

use repo_ready::services::catalog::{SourceCatalog, SourceCatalogTrait};
use repo_ready::types::config::LabelSourceKind;
use repo_ready::types::errors::ConfigError;
use rstest::rstest;

const SAMPLE: &str = r#"{
    "templates": [
        {
            "id": "T1",
            "name": "Basic GitHub Templates",
            "description": "Issue and PR templates",
            "lang": "en",
            "repo_info": {"owner": "acme", "repo": "templates", "branch": "main"},
            "files": [
                {"remote_path": ".github/ISSUE_TEMPLATE.md", "local_path": ".github/ISSUE_TEMPLATE.md"},
                {"remote_path": ".github/PULL_REQUEST_TEMPLATE.md", "local_path": ".github/PULL_REQUEST_TEMPLATE.md"}
            ]
        }
    ],
    "hooks": [
        {
            "id": "H1",
            "name": "Node Hooks",
            "description": "pre-commit and pre-push",
            "lang": "js",
            "repo_info": {"owner": "acme", "repo": "hooks", "branch": "main"},
            "files": [
                {"remote_path": ".githooks/pre-commit", "local_path": ".githooks/pre-commit"}
            ]
        }
    ],
    "labels": [
        {
            "id": "L1",
            "name": "Remote Labels",
            "description": "Copied from acme/labels",
            "source_type": "json_url",
            "repo_info": {"owner": "acme", "repo": "labels", "branch": "main"}
        },
        {
            "id": "L2",
            "name": "Local Labels",
            "description": "Bundled defaults",
            "source_type": "json_file",
            "source_path": "labels/default.json"
        }
    ]
}"#;

fn setup(content: &str) -> (tempfile::TempDir, SourceCatalog) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template-sources.json");
    fs::write(&path, content).unwrap();
    (dir, SourceCatalog::new(Some(path)))
}

#[test]
fn test_load_parses_all_three_categories() {
    let (_dir, mut catalog) = setup(SAMPLE);
    let sources = catalog.load().unwrap();

    assert_eq!(sources.templates.len(), 1);
    assert_eq!(sources.hooks.len(), 1);
    assert_eq!(sources.labels.len(), 2);

    let template = &sources.templates[0];
    assert_eq!(template.id, "T1");
    assert_eq!(template.repo_info.branch, "main");
    assert_eq!(template.files.len(), 2);

    assert_eq!(sources.labels[0].source_type, LabelSourceKind::RemoteRepoLabels);
    assert_eq!(sources.labels[1].source_type, LabelSourceKind::LocalFile);
}

#[test]
fn test_catalog_is_immutable_after_load() {
    let (_dir, mut catalog) = setup(SAMPLE);
    catalog.load().unwrap();

    let first = catalog.sources().clone();
    // A second load from the unchanged file yields the same data.
    catalog.load().unwrap();
    assert_eq!(*catalog.sources(), first);
}

#[test]
fn test_missing_catalog_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = SourceCatalog::new(Some(dir.path().join("template-sources.json")));
    assert!(matches!(catalog.load(), Err(ConfigError::IoError(_))));
}

#[rstest]
#[case::not_json("{ this is not json")]
#[case::array_instead_of_object(r#"[{"id": "T1"}]"#)]
#[case::wrong_category_type(r#"{"templates": 42}"#)]
#[case::entry_missing_fields(r#"{"templates": [{"id": "T1"}]}"#)]
fn test_malformed_catalog_is_parse_error(#[case] content: &str) {
    let (_dir, mut catalog) = setup(content);
    assert!(matches!(catalog.load(), Err(ConfigError::ParseError(_))));
}

#[test]
fn test_empty_object_loads_as_empty_catalog() {
    let (_dir, mut catalog) = setup("{}");
    let sources = catalog.load().unwrap();
    assert!(sources.is_empty());
}

#[test]
fn test_base_dir_resolves_bundled_files() {
    let (dir, catalog) = setup("{}");
    assert_eq!(catalog.base_dir(), dir.path());
}
