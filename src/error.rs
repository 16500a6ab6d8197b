//! Error types for the provisioning tool
//!
//! Two classes matter to the caller: MySQL client errors (connection, auth,
//! SQL execution) and everything else. The binary maps the former to the
//! `❌` diagnostic prefix and the rest to `💥`; both exit with status 1.

use thiserror::Error;

/// Provisioning errors
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Database(#[from] mysql_async::Error),
    #[error("Table '{0}' not found after creation")]
    Verification(String),
}

impl ProvisionError {
    /// Whether this error originated in the MySQL client
    pub fn is_database(&self) -> bool {
        matches!(self, ProvisionError::Database(_))
    }
}

/// Result type for provisioning operations
pub type ProvisionResult<T> = Result<T, ProvisionError>;
