//! Post-creation verification
//!
//! Re-queries the server catalog after the DDL runs: `SHOW TABLES LIKE`
//! confirms the table exists (a silent no-op is a hard failure), and
//! `DESCRIBE` enumerates the columns for the structure listing.

use mysql_async::prelude::Queryable;
use mysql_async::{Conn, Row};
use tracing::debug;

use crate::error::{ProvisionError, ProvisionResult};

/// One row of `DESCRIBE` output, reduced to what the listing needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescription {
    /// Column name (`Field`)
    pub name: String,
    /// Column type as the server reports it, e.g. `varchar(50)` (`Type`)
    pub column_type: String,
    /// Whether the column rejects NULL (`Null` == `'NO'`)
    pub required: bool,
}

impl ColumnDescription {
    /// Human-readable nullability annotation
    pub fn nullability(&self) -> &'static str {
        if self.required {
            "NOT NULL"
        } else {
            "NULL"
        }
    }
}

/// List tables matching the given name via `SHOW TABLES LIKE`
pub async fn matching_tables(conn: &mut Conn, table: &str) -> ProvisionResult<Vec<String>> {
    let query = format!("SHOW TABLES LIKE '{}'", table.replace('\'', "''"));
    let tables: Vec<String> = conn.query(query).await?;
    debug!(table, matches = tables.len(), "existence check");
    Ok(tables)
}

/// Describe the table's columns via `DESCRIBE`
///
/// Fails with [`ProvisionError::Verification`] if the server returns no
/// rows, which would mean the table vanished between the checks.
pub async fn describe_table(
    conn: &mut Conn,
    table: &str,
) -> ProvisionResult<Vec<ColumnDescription>> {
    let rows: Vec<Row> = conn.query(format!("DESCRIBE {}", table)).await?;
    if rows.is_empty() {
        return Err(ProvisionError::Verification(table.to_string()));
    }

    // DESCRIBE columns: Field, Type, Null, Key, Default, Extra
    let mut columns = Vec::with_capacity(rows.len());
    for row in rows {
        let name: String = row
            .get(0)
            .ok_or_else(|| ProvisionError::Verification(table.to_string()))?;
        let column_type: String = row
            .get(1)
            .ok_or_else(|| ProvisionError::Verification(table.to_string()))?;
        let null_flag: String = row
            .get(2)
            .ok_or_else(|| ProvisionError::Verification(table.to_string()))?;
        columns.push(ColumnDescription {
            name,
            column_type,
            required: null_flag == "NO",
        });
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullability_annotation() {
        let required = ColumnDescription {
            name: "user_id".to_string(),
            column_type: "int".to_string(),
            required: true,
        };
        assert_eq!(required.nullability(), "NOT NULL");

        let optional = ColumnDescription {
            name: "ip_address".to_string(),
            column_type: "varchar(45)".to_string(),
            required: false,
        };
        assert_eq!(optional.nullability(), "NULL");
    }
}
