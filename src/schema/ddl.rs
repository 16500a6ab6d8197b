//! MySQL DDL rendering
//!
//! Renders a [`TableDef`] into a `CREATE TABLE IF NOT EXISTS` statement.
//! A single-column primary key is rendered inline on its column
//! (`id INT AUTO_INCREMENT PRIMARY KEY`) to match the deployed statement;
//! multi-column keys get a separate `PRIMARY KEY (...)` line.

use super::{ColumnDef, TableDef};

/// Render a `CREATE TABLE IF NOT EXISTS` statement for the table
pub fn render_create_table(table: &TableDef) -> String {
    let inline_pk = if table.primary_key.len() == 1 {
        Some(table.primary_key[0].as_str())
    } else {
        None
    };

    let mut lines: Vec<String> = Vec::new();

    for col in &table.columns {
        lines.push(render_column(col, inline_pk == Some(col.name.as_str())));
    }

    if inline_pk.is_none() && !table.primary_key.is_empty() {
        lines.push(format!("PRIMARY KEY ({})", table.primary_key.join(", ")));
    }

    for index in &table.indexes {
        lines.push(format!(
            "INDEX {} ({})",
            index.name,
            index.columns.join(", ")
        ));
    }

    for fk in &table.foreign_keys {
        let mut line = format!(
            "FOREIGN KEY ({}) REFERENCES {}({})",
            fk.columns.join(", "),
            fk.ref_table,
            fk.ref_columns.join(", ")
        );
        if let Some(action) = fk.on_delete {
            line.push_str(" ON DELETE ");
            line.push_str(action.sql_name());
        }
        lines.push(line);
    }

    let body = lines
        .iter()
        .map(|l| format!("  {}", l))
        .collect::<Vec<_>>()
        .join(",\n");

    let mut stmt = format!("CREATE TABLE IF NOT EXISTS {} (\n{}\n)", table.name, body);

    let opts = &table.options;
    if let Some(ref engine) = opts.engine {
        stmt.push_str(&format!(" ENGINE={}", engine));
    }
    if let Some(ref charset) = opts.charset {
        stmt.push_str(&format!(" DEFAULT CHARSET={}", charset));
    }
    if let Some(ref collate) = opts.collate {
        stmt.push_str(&format!(" COLLATE={}", collate));
    }
    if let Some(ref comment) = opts.comment {
        stmt.push_str(&format!(" COMMENT='{}'", escape_single_quotes(comment)));
    }

    stmt
}

fn render_column(col: &ColumnDef, inline_pk: bool) -> String {
    let mut s = format!("{} {}", col.name, col.data_type.sql_name());

    if col.auto_increment {
        s.push_str(" AUTO_INCREMENT");
    }
    if inline_pk {
        // PRIMARY KEY implies NOT NULL
        s.push_str(" PRIMARY KEY");
    } else if !col.nullable {
        s.push_str(" NOT NULL");
    }
    if let Some(ref default) = col.default {
        s.push_str(" DEFAULT ");
        s.push_str(default);
    }
    if let Some(ref comment) = col.comment {
        s.push_str(&format!(" COMMENT '{}'", escape_single_quotes(comment)));
    }

    s
}

/// Escape single quotes for embedding in a quoted SQL string
fn escape_single_quotes(s: &str) -> String {
    s.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::super::{DataType, ForeignKeyDef, IndexDef, ReferentialAction, TableOptions};
    use super::*;

    #[test]
    fn test_render_inline_primary_key() {
        let table = TableDef::new("t")
            .column(
                ColumnDef::new("id", DataType::Int)
                    .nullable(false)
                    .auto_increment(),
            )
            .primary_key(vec!["id".to_string()]);
        let ddl = render_create_table(&table);
        assert_eq!(
            ddl,
            "CREATE TABLE IF NOT EXISTS t (\n  id INT AUTO_INCREMENT PRIMARY KEY\n)"
        );
    }

    #[test]
    fn test_render_composite_primary_key() {
        let table = TableDef::new("t")
            .column(ColumnDef::new("a", DataType::Int).nullable(false))
            .column(ColumnDef::new("b", DataType::Int).nullable(false))
            .primary_key(vec!["a".to_string(), "b".to_string()]);
        let ddl = render_create_table(&table);
        assert!(ddl.contains("  a INT NOT NULL,\n"));
        assert!(ddl.contains("  PRIMARY KEY (a, b)\n"));
    }

    #[test]
    fn test_render_default_and_comment() {
        let col = ColumnDef::new("amount", DataType::Int)
            .default("0")
            .comment("in cents");
        assert_eq!(
            render_column(&col, false),
            "amount INT DEFAULT 0 COMMENT 'in cents'"
        );
    }

    #[test]
    fn test_comment_quote_escaping() {
        let col = ColumnDef::new("note", DataType::Text).comment("user's note");
        assert_eq!(
            render_column(&col, false),
            "note TEXT COMMENT 'user''s note'"
        );
    }

    #[test]
    fn test_render_foreign_key_and_options() {
        let table = TableDef::new("child")
            .column(ColumnDef::new("parent_id", DataType::Int).nullable(false))
            .index(IndexDef::new("idx_parent_id", vec!["parent_id".to_string()]))
            .foreign_key(
                ForeignKeyDef::new(
                    vec!["parent_id".to_string()],
                    "parent",
                    vec!["id".to_string()],
                )
                .on_delete(ReferentialAction::Cascade),
            )
            .options(TableOptions {
                engine: Some("InnoDB".to_string()),
                charset: Some("utf8mb4".to_string()),
                collate: None,
                comment: None,
            });
        let ddl = render_create_table(&table);
        assert!(ddl.contains("  INDEX idx_parent_id (parent_id),\n"));
        assert!(ddl
            .contains("  FOREIGN KEY (parent_id) REFERENCES parent(id) ON DELETE CASCADE\n"));
        assert!(ddl.ends_with(") ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"));
    }
}
