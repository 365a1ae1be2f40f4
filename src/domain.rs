//! Provider-agnostic code host abstractions
//!
//! The multi-repository tool talks to every hosting provider through these
//! traits. A provider implements [`CodeHost`] with its own repository type;
//! callers that pick the provider at runtime use [`DynCodeHost`], which every
//! `CodeHost` gets for free.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::any::Any;
use std::fmt::Debug;

/// A repository as seen by the rest of the tool
pub trait Repository: Debug + Send + Sync {
    /// URL used to clone the repository
    fn url(&self) -> &str;

    /// Name of the branch pull requests target by default
    fn default_branch(&self) -> &str;

    /// Lets a code host recognise repositories it produced itself
    fn as_any(&self) -> &dyn Any;
}

/// Everything needed to open a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    pub title: String,
    pub body: String,
    /// Branch the changes live on
    pub head: String,
    /// Branch the changes should be merged into
    pub base: String,
    /// Logins of the users asked to review
    pub reviewers: Vec<String>,
}

impl NewPullRequest {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            head: head.into(),
            base: base.into(),
            reviewers: Vec::new(),
        }
    }

    pub fn with_reviewers<I, S>(mut self, reviewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reviewers = reviewers.into_iter().map(Into::into).collect();
        self
    }
}

/// A hosting provider with its own repository type
#[async_trait]
pub trait CodeHost: Send + Sync {
    type Repository: Repository + 'static;

    /// List the active repositories of an organization
    async fn get_repositories(&self, org: &str) -> Result<Vec<Self::Repository>>;

    /// Open a pull request and request reviews on it
    async fn create_pull_request(
        &self,
        repo: &Self::Repository,
        new_pr: &NewPullRequest,
    ) -> Result<()>;
}

/// Object-safe form of [`CodeHost`]
#[async_trait]
pub trait DynCodeHost: Send + Sync {
    async fn get_repositories(&self, org: &str) -> Result<Vec<Box<dyn Repository>>>;

    /// Fails with [`Error::Usage`] when `repo` was not produced by this host
    async fn create_pull_request(
        &self,
        repo: &dyn Repository,
        new_pr: &NewPullRequest,
    ) -> Result<()>;
}

#[async_trait]
impl<H> DynCodeHost for H
where
    H: CodeHost,
{
    async fn get_repositories(&self, org: &str) -> Result<Vec<Box<dyn Repository>>> {
        let repos = CodeHost::get_repositories(self, org).await?;
        Ok(repos
            .into_iter()
            .map(|repo| Box::new(repo) as Box<dyn Repository>)
            .collect())
    }

    async fn create_pull_request(
        &self,
        repo: &dyn Repository,
        new_pr: &NewPullRequest,
    ) -> Result<()> {
        let repo = repo
            .as_any()
            .downcast_ref::<H::Repository>()
            .ok_or_else(|| {
                Error::Usage("the repository needs to originate from this code host".to_string())
            })?;
        CodeHost::create_pull_request(self, repo, new_pr).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pull_request_defaults_to_no_reviewers() {
        let pr = NewPullRequest::new("x", "y", "feat", "main");
        assert_eq!(pr.title, "x");
        assert_eq!(pr.body, "y");
        assert_eq!(pr.head, "feat");
        assert_eq!(pr.base, "main");
        assert!(pr.reviewers.is_empty());
    }

    #[test]
    fn test_with_reviewers() {
        let pr = NewPullRequest::new("x", "y", "feat", "main").with_reviewers(["alice", "bob"]);
        assert_eq!(pr.reviewers, vec!["alice".to_string(), "bob".to_string()]);
    }
}
