//! Repohost - GitHub code-host adapter for multi-repository automation
//!
//! Lists the active repositories of an organization and opens pull requests
//! with requested reviewers, behind the provider-agnostic traits in [`domain`].

pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod github;

// Re-export commonly used types
pub use config::GitHubConfig;
pub use domain::{CodeHost, DynCodeHost, NewPullRequest, Repository};
pub use error::{Error, Result};
pub use github::{GitHubClient, GitHubRepository};
