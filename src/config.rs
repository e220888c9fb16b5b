//! Configuration for emprec
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{EmprecError, Result};
use crate::record::{check_headers, HEADERS};

/// Default location of the record file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/employees.csv";

/// Main configuration for an emprec instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the flat record file
    pub data_file: PathBuf,

    /// Header row written when the file is created, and the column order
    /// used for every appended row
    pub headers: Vec<String>,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Merge the built-in employees into the store on startup
    pub seed_defaults: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            seed_defaults: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configs the store cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(EmprecError::Config("data file path is empty".to_string()));
        }
        check_headers(&self.headers)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the record file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the header row / column order
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable startup seeding
    pub fn seed_defaults(mut self, enabled: bool) -> Self {
        self.config.seed_defaults = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
