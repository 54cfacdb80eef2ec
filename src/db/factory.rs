//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository
//! instances based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{RecordRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository, optionally snapshot-backed
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("local")
    ///
    /// # Returns
    /// * `Ok(RepositoryType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }
        Self::Local
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use docente_rust::db::RepositoryFactory;
///
/// let repo = RepositoryFactory::create_local();
/// let persistent = RepositoryFactory::create_local_with_snapshot("store.json")?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a purely in-memory local repository.
    pub fn create_local() -> Arc<dyn RecordRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a local repository backed by a JSON snapshot file.
    pub fn create_local_with_snapshot(
        path: impl AsRef<Path>,
    ) -> RepositoryResult<Arc<dyn RecordRepository>> {
        Ok(Arc::new(LocalRepository::with_snapshot(path)?))
    }

    /// Create a repository from a configuration file.
    pub fn from_config(config: &RepositoryConfig) -> RepositoryResult<Arc<dyn RecordRepository>> {
        let repo_type = config
            .repository_type()
            .map_err(RepositoryError::configuration)?;

        match repo_type {
            RepositoryType::Local => match config.snapshot_path() {
                Some(path) => Self::create_local_with_snapshot(path),
                None => Ok(Self::create_local()),
            },
        }
    }

    /// Create a repository from environment configuration.
    ///
    /// `DOCENTE_SNAPSHOT` selects the snapshot file for the local backend.
    pub fn from_env() -> RepositoryResult<Arc<dyn RecordRepository>> {
        match RepositoryType::from_env() {
            RepositoryType::Local => match std::env::var("DOCENTE_SNAPSHOT") {
                Ok(path) if !path.is_empty() => Self::create_local_with_snapshot(path),
                _ => Ok(Self::create_local()),
            },
        }
    }
}
