//! Provisioning operations
//!
//! The run-once sequence: connect, execute the DDL, commit. Verification
//! lives in [`crate::verify`]; orchestration and user-facing output live in
//! the `pumplog_init` binary.

use mysql_async::prelude::Queryable;
use mysql_async::Conn;
use tracing::{debug, info};

use crate::config::ProvisionConfig;
use crate::error::ProvisionResult;
use crate::schema::access_logs::access_logs_table_def;
use crate::schema::ddl::render_create_table;

/// Open a connection to the configured server
pub async fn connect(config: &ProvisionConfig) -> ProvisionResult<Conn> {
    let opts = config.to_opts()?;
    debug!(host = %config.host, port = config.port, database = %config.database, "connecting");
    let conn = Conn::new(opts).await?;
    info!("connected to {}:{}", config.host, config.port);
    Ok(conn)
}

/// Render the `access_logs` DDL statement
pub fn access_logs_ddl() -> String {
    render_create_table(&access_logs_table_def())
}

/// Execute the DDL and commit explicitly
///
/// The statement is conditional, so re-running against an existing table is
/// a no-op. DDL is implicitly committed by MySQL, but the explicit COMMIT
/// costs nothing and keeps the contract independent of autocommit settings.
pub async fn create_table(conn: &mut Conn, ddl: &str) -> ProvisionResult<()> {
    conn.query_drop(ddl).await?;
    conn.query_drop("COMMIT").await?;
    info!("DDL executed and committed");
    Ok(())
}
