//! GitHub API client implementation
//!
//! This module provides the `GitHubClient` struct, the entry point for every
//! GitHub operation. The client owns the HTTP transport, the token and the API
//! root; the endpoint modules extend it with `impl` blocks:
//! - `repositories.rs` - Organization repository listing
//! - `pull_requests.rs` - Pull request creation and reviewer requests
//!
//! All requests go through [`GitHubClient::request`] so they carry the same
//! authentication, user agent and accept headers.

use super::auth::GitHubAuth;
use super::types::GitHubRepository;
use crate::config::GitHubConfig;
use crate::constants::github::{ACCEPT_HEADER, DEFAULT_USER_AGENT};
use crate::domain::{CodeHost, NewPullRequest};
use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

/// GitHub API client
///
/// Holds only read-only state, so one client can be shared between callers.
/// Operations run their requests strictly one after another.
///
/// ## Example
///
/// ```rust,no_run
/// use repohost::{GitHubClient, GitHubConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = GitHubConfig::from_env()?;
/// let client = GitHubClient::new(config)?;
/// let repos = client.get_repositories("rust-lang").await?;
/// println!("{} active repositories", repos.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) auth: GitHubAuth,
    pub(crate) base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client
    ///
    /// # Errors
    /// Returns [`crate::Error::Http`] if the HTTP transport cannot be initialised
    pub fn new(mut config: GitHubConfig) -> Result<Self> {
        config.normalize();

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            auth: GitHubAuth::new(config.token),
            base_url: config.base_url,
        })
    }

    /// API root every request path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header(AUTHORIZATION, self.auth.get_auth_header())
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .header(ACCEPT, ACCEPT_HEADER)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }
}

#[async_trait]
impl CodeHost for GitHubClient {
    type Repository = GitHubRepository;

    async fn get_repositories(&self, org: &str) -> Result<Vec<GitHubRepository>> {
        GitHubClient::get_repositories(self, org).await
    }

    async fn create_pull_request(
        &self,
        repo: &GitHubRepository,
        new_pr: &NewPullRequest,
    ) -> Result<()> {
        GitHubClient::create_pull_request(self, repo, new_pr).await
    }
}
