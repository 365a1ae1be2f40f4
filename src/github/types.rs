//! GitHub API types
//!
//! Wire types stay private to the crate; the only type callers see is
//! [`GitHubRepository`], and it can only be produced by the repository listing.

use crate::domain::Repository;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Repository record as returned by `GET orgs/{org}/repos`
#[derive(Deserialize, Debug)]
pub(crate) struct RepositoryRecord {
    pub ssh_url: String,
    pub full_name: String,
    pub default_branch: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl RepositoryRecord {
    /// The repository, unless it is archived or disabled
    pub fn into_active(self) -> Option<GitHubRepository> {
        if self.archived || self.disabled {
            return None;
        }
        Some(GitHubRepository {
            ssh_url: self.ssh_url,
            full_name: self.full_name,
            default_branch: self.default_branch,
        })
    }
}

/// An active repository of a GitHub organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepository {
    ssh_url: String,
    full_name: String,
    default_branch: String,
}

impl GitHubRepository {
    /// The `owner/name` slug used in API paths
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl Repository for GitHubRepository {
    fn url(&self) -> &str {
        &self.ssh_url
    }

    fn default_branch(&self) -> &str {
        &self.default_branch
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct CreatePullRequestPayload<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub head: &'a str,
    pub base: &'a str,
}

/// The part of a created pull request needed to address it afterwards
#[derive(Deserialize, Debug)]
pub(crate) struct CreatedPullRequest {
    pub id: u64,
    pub number: u64,
}

#[derive(Serialize, Debug)]
pub(crate) struct RequestReviewersPayload<'a> {
    pub reviewers: &'a [String],
}
