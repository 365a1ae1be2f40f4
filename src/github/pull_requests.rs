//! GitHub Pull Request API operations
//!
//! Opening a pull request takes two calls: the pull request is created first,
//! then reviewers are requested on it using the number GitHub assigned. A
//! failure in the second call leaves the pull request in place.

use super::client::GitHubClient;
use super::response::{decode, expect_status};
use super::types::{
    CreatePullRequestPayload, CreatedPullRequest, GitHubRepository, RequestReviewersPayload,
};
use crate::constants::context;
use crate::domain::NewPullRequest;
use crate::error::Result;
use reqwest::StatusCode;
use tracing::{debug, info};

impl GitHubClient {
    /// Open a pull request and request reviews on it
    ///
    /// The reviewer request is sent even when `new_pr.reviewers` is empty.
    ///
    /// # Errors
    /// If creation fails no reviewers are requested. If the reviewer request
    /// fails the error is returned but the pull request already exists.
    ///
    /// # Example
    /// ```rust,no_run
    /// use repohost::{GitHubClient, GitHubConfig, NewPullRequest};
    ///
    /// # async fn example() -> repohost::Result<()> {
    /// let client = GitHubClient::new(GitHubConfig::new("github_token"))?;
    /// let repos = client.get_repositories("acme").await?;
    /// let pr = NewPullRequest::new(
    ///     "Fix bug in authentication",
    ///     "This PR fixes a critical bug in the auth system",
    ///     "feature-branch",
    ///     "main",
    /// )
    /// .with_reviewers(["octocat"]);
    ///
    /// client.create_pull_request(&repos[0], &pr).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_pull_request(
        &self,
        repo: &GitHubRepository,
        new_pr: &NewPullRequest,
    ) -> Result<()> {
        let created = self.open_pull_request(repo, new_pr).await?;
        self.request_reviewers(repo, new_pr, &created).await
    }

    async fn open_pull_request(
        &self,
        repo: &GitHubRepository,
        new_pr: &NewPullRequest,
    ) -> Result<CreatedPullRequest> {
        debug!(
            repo = repo.full_name(),
            head = new_pr.head.as_str(),
            base = new_pr.base.as_str(),
            "creating pull request"
        );

        let payload = CreatePullRequestPayload {
            title: &new_pr.title,
            body: &new_pr.body,
            head: &new_pr.head,
            base: &new_pr.base,
        };

        let response = self
            .post(&format!("repos/{}/pulls", repo.full_name()))
            .json(&payload)
            .send()
            .await?;

        let response =
            expect_status(response, StatusCode::CREATED, context::CREATE_PULL_REQUEST).await?;
        let created: CreatedPullRequest = decode(response).await?;

        info!(
            repo = repo.full_name(),
            id = created.id,
            number = created.number,
            "created pull request"
        );
        Ok(created)
    }

    async fn request_reviewers(
        &self,
        repo: &GitHubRepository,
        new_pr: &NewPullRequest,
        created: &CreatedPullRequest,
    ) -> Result<()> {
        debug!(
            repo = repo.full_name(),
            number = created.number,
            reviewers = new_pr.reviewers.len(),
            "requesting reviewers"
        );

        let payload = RequestReviewersPayload {
            reviewers: &new_pr.reviewers,
        };

        let response = self
            .post(&format!(
                "repos/{}/pulls/{}/requested_reviewers",
                repo.full_name(),
                created.number
            ))
            .json(&payload)
            .send()
            .await?;

        expect_status(response, StatusCode::CREATED, context::ADD_REVIEWERS).await?;
        Ok(())
    }
}
