// glmirror: GitLab group mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the GitLab API layer using wiremock.
//!
//! Covers:
//! - Token header and endpoint paths
//! - Status handling (only 200 succeeds)
//! - Subgroup bodies as array or bare object
//! - Project listing query parameters

mod common;

use common::{group, project, settings};
use glmirror::error::{DecodeError, MirrorError, NetworkError};
use glmirror::gitlab::{GitLabClient, fetch_group, fetch_subgroups, list_projects};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> GitLabClient {
    GitLabClient::new(&settings(server, "42", std::path::Path::new("/unused")))
}

// =============================================================================
// Client
// =============================================================================

#[tokio::test]
async fn test_get_sends_private_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/"))
        .and(header("PRIVATE-TOKEN", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let body = client.get(&client.group_url("42")).await.unwrap();
    assert_eq!(body, b"{}");
}

#[tokio::test]
async fn test_get_rejects_non_200() {
    for status in [201, 401, 404, 500] {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .mount(&server)
            .await;

        let client = client(&server);
        let url = client.subgroups_url("42");
        match client.get(&url).await.unwrap_err() {
            MirrorError::Network(inner) => match *inner {
                NetworkError::Api {
                    status: got,
                    url: failed,
                    body,
                } => {
                    assert_eq!(got, status);
                    assert_eq!(failed, url);
                    assert_eq!(body, "nope");
                }
                other @ NetworkError::Transport { .. } => {
                    panic!("expected Api error, got {other:?}")
                }
            },
            other => panic!("expected network error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_get_unreachable_host_is_transport_error() {
    // Bind and drop a listener so nothing answers on the port
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let client = GitLabClient::new(&glmirror::config::settings::MirrorSettings::new(
        &uri, "t", "1", "/unused",
    ));

    let err = client.get(&client.group_url("1")).await.unwrap_err();
    assert!(
        matches!(&err, MirrorError::Network(inner) if matches!(**inner, NetworkError::Transport { .. })),
        "expected Transport, got {err:?}"
    );
}

// =============================================================================
// Groups
// =============================================================================

#[tokio::test]
async fn test_fetch_subgroups_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/subgroups/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([group(1, "team/a"), group(2, "team/b")])),
        )
        .mount(&server)
        .await;

    let subgroups = fetch_subgroups(&client(&server), "42").await.unwrap();
    let paths: Vec<&str> = subgroups.iter().map(|g| g.full_path.as_str()).collect();
    assert_eq!(paths, ["team/a", "team/b"]);
    assert_eq!(subgroups[1].id, 2);
    assert_eq!(subgroups[1].path, "b");
}

#[tokio::test]
async fn test_fetch_subgroups_bare_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/subgroups/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(group(2, "team/only")))
        .mount(&server)
        .await;

    let subgroups = fetch_subgroups(&client(&server), "42").await.unwrap();
    assert_eq!(subgroups.len(), 1);
    assert_eq!(subgroups[0].id, 2);
}

#[tokio::test]
async fn test_fetch_group_by_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/team%2Fbackend/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(group(77, "team/backend")))
        .expect(1)
        .mount(&server)
        .await;

    let root = fetch_group(&client(&server), "team/backend").await.unwrap();
    assert_eq!(root.id, 77);
    assert_eq!(root.full_path, "team/backend");
}

#[tokio::test]
async fn test_fetch_group_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = fetch_group(&client(&server), "42").await.unwrap_err();
    assert!(
        matches!(&err, MirrorError::Decode(inner) if matches!(**inner, DecodeError::Empty { .. })),
        "expected Empty, got {err:?}"
    );
}

#[tokio::test]
async fn test_fetch_subgroups_undecodable_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/subgroups/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = fetch_subgroups(&client(&server), "42").await.unwrap_err();
    insta::assert_snapshot!(
        err.to_string().replace(&server.uri(), "http://mock"),
        @"decode error: failed to decode subgroups from http://mock/api/v4/groups/42/subgroups/: expected value at line 1 column 1"
    );
}

// =============================================================================
// Projects
// =============================================================================

#[tokio::test]
async fn test_list_projects_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/projects"))
        .and(query_param("archived", "false"))
        .and(query_param("per_page", "1000"))
        .and(query_param("with_shared", "false"))
        .and(header("PRIVATE-TOKEN", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            project(10, "team", "service-a"),
            project(11, "team", "service-b"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = list_projects(&client(&server), "42").await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].path, "service-a");
    assert_eq!(
        projects[0].repo_url,
        "https://gitlab.example.com/team/service-a.git"
    );
}

#[tokio::test]
async fn test_list_projects_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert!(list_projects(&client(&server), "42").await.unwrap().is_empty());
}
