//! Provider-agnostic access through the code host traits

mod support;

use repohost::{CodeHost, DynCodeHost, Error, NewPullRequest, Repository};
use serde_json::json;
use std::any::Any;
use support::{client_for, mount_repos_page, repo_json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A repository produced by some other hosting provider
#[derive(Debug)]
struct ForeignRepository;

impl Repository for ForeignRepository {
    fn url(&self) -> &str {
        "git@gitlab.com:acme/widgets.git"
    }

    fn default_branch(&self) -> &str {
        "main"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[tokio::test]
async fn test_foreign_repository_is_rejected_without_requests() {
    let server = MockServer::start().await;
    let host: Box<dyn DynCodeHost> = Box::new(client_for(&server));

    let pr = NewPullRequest::new("x", "y", "feat", "main");
    let err = host
        .create_pull_request(&ForeignRepository, &pr)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Usage(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_listed_repository_round_trips_through_trait_objects() {
    let server = MockServer::start().await;
    let widgets = repo_json("acme", "widgets", false, false);
    mount_repos_page(&server, "acme", 1, vec![widgets]).await;
    mount_repos_page(&server, "acme", 2, vec![]).await;
    let created = json!({"id": 1, "number": 42});
    Mock::given(method("POST"))
        .and(path("/repos/acme/widgets/pulls"))
        .respond_with(ResponseTemplate::new(201).set_body_json(created))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/widgets/pulls/42/requested_reviewers"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let host: Box<dyn DynCodeHost> = Box::new(client_for(&server));
    let repos = host.get_repositories("acme").await.unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].url(), "git@github.com:acme/widgets.git");

    let pr = NewPullRequest::new("x", "y", "feat", repos[0].default_branch())
        .with_reviewers(["octocat"]);
    host.create_pull_request(&*repos[0], &pr).await.unwrap();

    server.verify().await;
}

async fn default_branches<H: CodeHost>(host: &H, org: &str) -> Vec<String> {
    CodeHost::get_repositories(host, org)
        .await
        .unwrap()
        .iter()
        .map(|repo| repo.default_branch().to_string())
        .collect()
}

#[tokio::test]
async fn test_typed_code_host() {
    let server = MockServer::start().await;
    mount_repos_page(
        &server,
        "acme",
        1,
        vec![
            repo_json("acme", "widgets", false, false),
            repo_json("acme", "gadgets", true, false),
        ],
    )
    .await;
    mount_repos_page(&server, "acme", 2, vec![]).await;

    let branches = default_branches(&client_for(&server), "acme").await;

    assert_eq!(branches, vec!["main".to_string()]);
}
