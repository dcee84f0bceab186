//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    cache::DEFAULT_TTL,
    catalog::ContentCatalog,
    db::Database,
    error::{PlanError, Result},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    cache_ttl: Duration,
    catalog: Option<ContentCatalog>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            cache_ttl: DEFAULT_TTL,
            catalog: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/lectio/lectio.db` or `~/.local/share/lectio/lectio.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets how long views stay cached. `Duration::ZERO` disables caching.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Replaces the bundled standard catalog.
    pub fn with_catalog(mut self, catalog: ContentCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` if the database directory cannot be
    /// created, `PlanError::XdgDirectory` if no default path can be found,
    /// or `PlanError::StoreIo` if database initialization fails.
    pub async fn build(self) -> Result<Planner> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PlanError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), PlanError>(())
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => ContentCatalog::standard()?,
        };
        debug!(
            "Opened planner at {} ({} books, {} measured chapters, cache ttl {:?})",
            db_path.display(),
            catalog.books().len(),
            catalog.measured_chapters(),
            self.cache_ttl
        );

        Ok(Planner::new(db_path, Arc::new(catalog), self.cache_ttl))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("lectio")
            .place_data_file("lectio.db")
            .map_err(|e| PlanError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
