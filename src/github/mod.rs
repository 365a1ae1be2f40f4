//! GitHub code host
//!
//! Implements [`crate::domain::CodeHost`] on top of GitHub's REST API. Works with
//! github.com and GitHub Enterprise alike; only the configured base URL differs.
//!
//! ## Architecture
//!
//! - [`client`]: Core client, shared request plumbing and the `CodeHost` impl
//! - [`auth`]: Token handling and the `Authorization` header
//! - [`repositories`]: Paginated organization repository listing
//! - [`pull_requests`]: Pull request creation and reviewer requests
//! - [`response`]: Status checks, body decoding and error mapping
//! - [`types`]: Wire types and the public repository type
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use repohost::{GitHubClient, GitHubConfig, NewPullRequest};
//!
//! # async fn example() -> repohost::Result<()> {
//! let client = GitHubClient::new(GitHubConfig::new("your_token"))?;
//!
//! for repo in client.get_repositories("acme").await? {
//!     let pr = NewPullRequest::new("Bump deps", "Automated", "bump-deps", "main")
//!         .with_reviewers(["octocat"]);
//!     client.create_pull_request(&repo, &pr).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod pull_requests;
pub mod repositories;
pub mod response;
pub mod types;

// Re-export commonly used items for convenience
pub use auth::GitHubAuth;
pub use client::GitHubClient;
pub use types::GitHubRepository;
