//! Unit tests for the GitHub client against a mock API server.

use repo_ready::services::github_client::{CreateOutcome, DeleteOutcome, GitHubClient};
use repo_ready::types::config::RepoInfo;
use repo_ready::types::errors::{FetchError, LabelError};
use repo_ready::types::github::RemoteContent;
use repo_ready::types::label::Label;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repo_info() -> RepoInfo {
    RepoInfo {
        owner: "acme".to_string(),
        repo: "templates".to_string(),
        branch: "main".to_string(),
    }
}

#[tokio::test]
async fn test_list_labels_parses_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/demo/labels"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            serde_json::json!([
                {"id": 1, "name": "bug", "color": "d73a4a", "description": "Something isn't working"},
                {"id": 2, "name": "wontfix", "color": "ffffff", "description": null}
            ])
            .to_string(),
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let labels = client.list_labels("acme", "demo").await.unwrap();

    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].name, "bug");
    assert_eq!(labels[1].description, None);
}

#[tokio::test]
async fn test_list_labels_missing_repo_is_distinct_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/ghost/labels"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let result = client.list_labels("acme", "ghost").await;
    assert!(matches!(result, Err(LabelError::RepoNotFound(repo)) if repo == "acme/ghost"));
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/demo/labels"))
        .and(header("Authorization", "Bearer gho_test"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    client.list_labels("acme", "demo").await.unwrap();
}

#[tokio::test]
async fn test_delete_label_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/repos/acme/demo/labels/bug"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let outcome = client.delete_label("acme", "demo", "bug").await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
}

#[tokio::test]
async fn test_delete_missing_label_is_already_absent() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/repos/acme/demo/labels/wontfix"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let outcome = client.delete_label("acme", "demo", "wontfix").await.unwrap();
    assert_eq!(outcome, DeleteOutcome::AlreadyAbsent);
}

#[tokio::test]
async fn test_delete_label_server_error_fails() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/repos/acme/demo/labels/bug"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let result = client.delete_label("acme", "demo", "bug").await;
    assert!(matches!(result, Err(LabelError::ApiError(_))));
}

#[tokio::test]
async fn test_create_label_posts_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/labels"))
        .and(body_partial_json(serde_json::json!({
            "name": "enhancement",
            "color": "a2eeef"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let label = Label {
        name: "enhancement".to_string(),
        color: "a2eeef".to_string(),
        description: Some("New feature or request".to_string()),
    };
    let outcome = client.create_label("acme", "demo", &label).await.unwrap();
    assert_eq!(outcome, CreateOutcome::Created);
}

#[tokio::test]
async fn test_create_existing_label_is_already_satisfied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/labels"))
        .respond_with(ResponseTemplate::new(422).set_body_raw(
            serde_json::json!({
                "message": "Validation Failed",
                "errors": [{"resource": "Label", "code": "already_exists", "field": "name"}]
            })
            .to_string(),
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let label = Label {
        name: "bug".to_string(),
        color: "d73a4a".to_string(),
        description: None,
    };
    let outcome = client.create_label("acme", "demo", &label).await.unwrap();
    assert_eq!(outcome, CreateOutcome::AlreadyExists);
}

#[tokio::test]
async fn test_create_label_other_validation_error_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/demo/labels"))
        .respond_with(ResponseTemplate::new(422).set_body_raw(
            serde_json::json!({
                "message": "Validation Failed",
                "errors": [{"resource": "Label", "code": "invalid", "field": "color"}]
            })
            .to_string(),
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let label = Label {
        name: "bad".to_string(),
        color: "not-a-color".to_string(),
        description: None,
    };
    let result = client.create_label("acme", "demo", &label).await;
    assert!(matches!(result, Err(LabelError::ApiError(_))));
}

#[tokio::test]
async fn test_get_content_file_carries_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/templates/contents/.github/ISSUE_TEMPLATE.md"))
        .and(query_param("ref", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            serde_json::json!({
                "name": "ISSUE_TEMPLATE.md",
                "path": ".github/ISSUE_TEMPLATE.md",
                "type": "file",
                "content": "SGVsbG8=\n",
                "encoding": "base64"
            })
            .to_string(),
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let content = client
        .get_content(&repo_info(), ".github/ISSUE_TEMPLATE.md")
        .await
        .unwrap();

    match content {
        RemoteContent::File(entry) => {
            assert_eq!(entry.entry_type, "file");
            assert_eq!(entry.content.as_deref(), Some("SGVsbG8=\n"));
        }
        RemoteContent::Directory(_) => panic!("expected a file"),
    }
}

#[tokio::test]
async fn test_get_content_directory_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/templates/contents/.github"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            serde_json::json!([
                {"name": "ISSUE_TEMPLATE.md", "path": ".github/ISSUE_TEMPLATE.md", "type": "file"},
                {"name": "workflows", "path": ".github/workflows", "type": "dir"}
            ])
            .to_string(),
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let content = client.get_content(&repo_info(), ".github").await.unwrap();

    match content {
        RemoteContent::Directory(entries) => assert_eq!(entries.len(), 2),
        RemoteContent::File(_) => panic!("expected a directory listing"),
    }
}

#[tokio::test]
async fn test_get_content_missing_path_names_path_and_branch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/templates/contents/missing.md"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base("gho_test", server.uri());
    let result = client.get_content(&repo_info(), "missing.md").await;

    match result {
        Err(FetchError::NotFound { path, branch }) => {
            assert_eq!(path, "missing.md");
            assert_eq!(branch, "main");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}
