//! The `access_logs` table definition
//!
//! Tracks user access events and payment history for PumpDrive. Rows are
//! inserted and queried by the application; this tool only provisions the
//! schema. `user_id` references `pump_users(id)` with cascade delete, so
//! deleting a user drops their access history with them.

use super::{
    ColumnDef, DataType, ForeignKeyDef, IndexDef, ReferentialAction, TableDef, TableOptions,
};

/// Name of the provisioned table
pub const ACCESS_LOGS: &str = "access_logs";

/// Table this schema depends on; must already exist
pub const PUMP_USERS: &str = "pump_users";

/// Create the TableDef for `access_logs`
pub fn access_logs_table_def() -> TableDef {
    TableDef::new(ACCESS_LOGS)
        .column(
            ColumnDef::new("id", DataType::Int)
                .nullable(false)
                .auto_increment(),
        )
        .column(ColumnDef::new("user_id", DataType::Int).nullable(false))
        .column(
            ColumnDef::new("access_type", DataType::Varchar(50))
                .nullable(false)
                .comment("initial_purchase, renewal, research_access, etc."),
        )
        .column(
            ColumnDef::new("payment_amount_cents", DataType::Int)
                .default("0")
                .comment("Payment amount in cents (999 = $9.99)"),
        )
        .column(
            ColumnDef::new("ip_address", DataType::Varchar(45))
                .default("NULL")
                .comment("IPv4 or IPv6 address"),
        )
        .column(
            ColumnDef::new("user_agent", DataType::Text)
                .default("NULL")
                .comment("Browser user agent string"),
        )
        .column(ColumnDef::new("created_at", DataType::Timestamp).default("CURRENT_TIMESTAMP"))
        .primary_key(vec!["id".to_string()])
        .index(IndexDef::new("idx_user_id", vec!["user_id".to_string()]))
        .index(IndexDef::new(
            "idx_access_type",
            vec!["access_type".to_string()],
        ))
        .index(IndexDef::new(
            "idx_created_at",
            vec!["created_at".to_string()],
        ))
        .foreign_key(
            ForeignKeyDef::new(
                vec!["user_id".to_string()],
                PUMP_USERS,
                vec!["id".to_string()],
            )
            .on_delete(ReferentialAction::Cascade),
        )
        .options(TableOptions {
            engine: Some("InnoDB".to_string()),
            charset: Some("utf8mb4".to_string()),
            collate: Some("utf8mb4_unicode_ci".to_string()),
            comment: Some("Tracks user access events and payment history for PumpDrive".to_string()),
        })
}
