//! Directory configuration

use std::path::{Path, PathBuf};

use rolodex_core::{schema, Error, Result};

/// Configuration for opening a [`Directory`](crate::Directory)
///
/// The authority is injected here rather than read from a global, so two
/// directories with different authorities can coexist in one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Path of the table file
    pub data_path: PathBuf,
    /// Authority answering for this directory's addresses
    pub authority: String,
}

impl DirectoryConfig {
    /// Configuration with the default authority
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            authority: schema::AUTHORITY.to_string(),
        }
    }

    /// Override the authority
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    /// Path of the table file
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the authority is empty or
    /// contains a path separator (it must stay a single address segment).
    pub fn validate(&self) -> Result<()> {
        if self.authority.is_empty() {
            return Err(Error::InvalidArgument("authority must not be empty"));
        }
        if self.authority.contains('/') {
            return Err(Error::InvalidArgument("authority must not contain '/'"));
        }
        Ok(())
    }
}
