//! Configuration management module

pub mod loader;
pub mod validation;

pub use loader::GitHubConfig;
pub use validation::ValidationError;
