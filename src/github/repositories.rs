//! GitHub Repository API operations
//!
//! Organization listings are paginated. Pages are fetched one at a time in
//! increasing order until the server returns an empty page; there is no
//! reliance on `Link` headers or total counts.

use super::client::GitHubClient;
use super::response::{decode, expect_status};
use super::types::{GitHubRepository, RepositoryRecord};
use crate::constants::{context, github::PER_PAGE};
use crate::error::Result;
use reqwest::StatusCode;
use tracing::{debug, info};

impl GitHubClient {
    /// List the active repositories of an organization
    ///
    /// Archived and disabled repositories are left out.
    ///
    /// # Errors
    /// Any failed page aborts the listing; repositories from earlier pages are
    /// discarded rather than returned.
    ///
    /// # Example
    /// ```rust,no_run
    /// use repohost::{GitHubClient, GitHubConfig, Repository};
    ///
    /// # async fn example() -> repohost::Result<()> {
    /// let client = GitHubClient::new(GitHubConfig::new("github_token"))?;
    /// for repo in client.get_repositories("acme").await? {
    ///     println!("{} ({})", repo.url(), repo.default_branch());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_repositories(&self, org: &str) -> Result<Vec<GitHubRepository>> {
        let mut repositories = Vec::new();

        for page in 1.. {
            let records = self.get_repositories_page(org, page).await?;
            if records.is_empty() {
                break;
            }
            repositories.extend(
                records
                    .into_iter()
                    .filter_map(RepositoryRecord::into_active),
            );
        }

        info!(
            org,
            count = repositories.len(),
            "listed organization repositories"
        );
        Ok(repositories)
    }

    async fn get_repositories_page(&self, org: &str, page: u32) -> Result<Vec<RepositoryRecord>> {
        debug!(org, page, "fetching repositories page");

        let response = self
            .get(&format!("orgs/{}/repos", org))
            .query(&[("page", page), ("per_page", PER_PAGE)])
            .send()
            .await?;

        let response = expect_status(response, StatusCode::OK, context::FETCH_REPOSITORIES).await?;
        decode(response).await
    }
}
