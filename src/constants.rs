//! Central constants for the repohost crate

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL, including the trailing slash path segments are joined onto
    pub const API_BASE: &str = "https://api.github.com/";

    /// Page size requested when listing organization repositories
    pub const PER_PAGE: u32 = 100;

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("repohost/", env!("CARGO_PKG_VERSION"));

    /// Accept header sent with every request
    pub const ACCEPT_HEADER: &str = "application/vnd.github+json";

    /// Environment variable holding the access token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

    /// Environment variable overriding the API base URL
    pub const BASE_URL_ENV_VAR: &str = "GITHUB_BASE_URL";
}

/// Failure contexts attached to unexpected-status errors
pub mod context {
    pub const FETCH_REPOSITORIES: &str = "could not fetch repositories";
    pub const CREATE_PULL_REQUEST: &str = "could not create pull request";
    pub const ADD_REVIEWERS: &str = "could not add reviewers to pull request";
}
