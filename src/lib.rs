//! pumplog - Provisioning tool for the PumpDrive access log schema
//!
//! Creates the `access_logs` table in the production MySQL database and
//! verifies the result against the server's catalog. The DDL is rendered
//! from a typed schema model so the statement stays reviewable and
//! golden-testable rather than living as an opaque string.

pub mod config;
pub mod error;
pub mod provision;
pub mod schema;
pub mod verify;

pub use error::{ProvisionError, ProvisionResult};
