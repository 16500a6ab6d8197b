//! Connection configuration
//!
//! All parameters have defaults matching the production deployment and can
//! be overridden per-parameter. The password is never accepted as a flag:
//!
//! - `PUMPLOG_MYSQL_PASSWORD` - Set the password directly
//! - `PUMPLOG_MYSQL_PASSWORD_FILE` - Read the password from a file (Docker secrets)

use std::env;
use std::fs;

use mysql_async::{Opts, OptsBuilder, SslOpts};

use crate::error::{ProvisionError, ProvisionResult};

/// Environment variable holding the password directly
pub const PASSWORD_ENV: &str = "PUMPLOG_MYSQL_PASSWORD";

/// Environment variable naming a file that holds the password
pub const PASSWORD_FILE_ENV: &str = "PUMPLOG_MYSQL_PASSWORD_FILE";

/// Production database host
pub const DEFAULT_HOST: &str = "tshla-mysql-prod.mysql.database.azure.com";

/// Standard MySQL port
pub const DEFAULT_PORT: u16 = 3306;

/// Administrative user
pub const DEFAULT_USER: &str = "tshlaadmin";

/// Application database
pub const DEFAULT_DATABASE: &str = "tshla_medical";

/// How the client negotiates TLS with the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS with certificate verification against system trust roots
    Required,
    /// TLS, but accept invalid or self-signed certificates
    SkipVerify,
    /// Plaintext connection (local scratch servers only)
    Disabled,
}

/// Connection parameters for the provisioning run
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub database: String,
    pub tls_mode: TlsMode,
    password: Option<String>,
    password_file: Option<String>,
}

impl ProvisionConfig {
    /// Create a config with the given endpoint parameters, reading the
    /// password sources from the environment
    pub fn new(host: String, port: u16, user: String, database: String, tls_mode: TlsMode) -> Self {
        ProvisionConfig {
            host,
            port,
            user,
            database,
            tls_mode,
            password: env::var(PASSWORD_ENV).ok(),
            password_file: env::var(PASSWORD_FILE_ENV).ok(),
        }
    }

    /// Determine the password from configuration
    pub fn determine_password(&self) -> ProvisionResult<String> {
        // Priority: direct password > file
        if let Some(ref pwd) = self.password {
            return Ok(pwd.clone());
        }

        if let Some(ref file_path) = self.password_file {
            let content = fs::read_to_string(file_path)?;
            return Ok(content.trim().to_string());
        }

        Err(ProvisionError::Config(format!(
            "No database password configured. Set {} or {}",
            PASSWORD_ENV, PASSWORD_FILE_ENV
        )))
    }

    /// Build `mysql_async` connection options
    pub fn to_opts(&self) -> ProvisionResult<Opts> {
        let password = self.determine_password()?;

        let ssl_opts = match self.tls_mode {
            TlsMode::Required => Some(SslOpts::default()),
            TlsMode::SkipVerify => {
                Some(SslOpts::default().with_danger_accept_invalid_certs(true))
            }
            TlsMode::Disabled => None,
        };

        let opts: Opts = OptsBuilder::default()
            .ip_or_hostname(self.host.clone())
            .tcp_port(self.port)
            .user(Some(self.user.clone()))
            .pass(Some(password))
            .db_name(Some(self.database.clone()))
            .ssl_opts(ssl_opts)
            .into();

        Ok(opts)
    }
}
