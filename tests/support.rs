//! Common test support utilities and fixtures
//!
//! Wraps a wiremock server standing in for the GitHub API, plus JSON fixtures
//! for repository listings.

#![allow(dead_code)]

use repohost::{GitHubClient, GitHubConfig, GitHubRepository};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";

/// Client pointed at an arbitrary API root
pub fn client_at(base_url: impl Into<String>) -> GitHubClient {
    let config = GitHubConfig::new(TOKEN).with_base_url(base_url);
    GitHubClient::new(config).expect("Failed to build client")
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> GitHubClient {
    client_at(server.uri())
}

/// A single repository record the way GitHub returns it
pub fn repo_json(org: &str, name: &str, archived: bool, disabled: bool) -> Value {
    json!({
        "id": 1000,
        "name": name,
        "full_name": format!("{}/{}", org, name),
        "ssh_url": format!("git@github.com:{}/{}.git", org, name),
        "clone_url": format!("https://github.com/{}/{}.git", org, name),
        "default_branch": "main",
        "archived": archived,
        "disabled": disabled,
        "private": false,
        "fork": false
    })
}

/// `count` records named `repo-{start}`, `repo-{start+1}`, ...
///
/// Every record whose index is listed in `archived` is flagged archived.
pub fn repo_page(org: &str, start: usize, count: usize, archived: &[usize]) -> Vec<Value> {
    (start..start + count)
        .map(|i| repo_json(org, &format!("repo-{}", i), archived.contains(&i), false))
        .collect()
}

/// Serve `records` as page `page` of the organization listing, expecting exactly one hit
pub async fn mount_repos_page(server: &MockServer, org: &str, page: u32, records: Vec<Value>) {
    let body = Value::Array(records);
    Mock::given(method("GET"))
        .and(path(format!("/orgs/{}/repos", org)))
        .and(query_param("page", page.to_string()))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .named(format!("repos page {}", page))
        .mount(server)
        .await;
}

/// `page` query values of every request the server saw, in arrival order
pub async fn requested_pages(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("Request recording is disabled")
        .iter()
        .filter_map(|request| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value.into_owned())
        })
        .collect()
}

/// Obtain a repository the only way callers can: by listing its organization
///
/// The listing runs against its own mock server so it does not show up in the
/// request log of the server under test.
pub async fn fetch_repository(org: &str, name: &str) -> GitHubRepository {
    let listing = MockServer::start().await;
    let records = vec![repo_json(org, name, false, false)];
    mount_repos_page(&listing, org, 1, records).await;
    mount_repos_page(&listing, org, 2, vec![]).await;

    let mut repos = client_for(&listing)
        .get_repositories(org)
        .await
        .expect("Failed to list repositories");
    repos.remove(0)
}
