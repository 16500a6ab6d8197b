//! Schema model for the provisioned table
//!
//! A small typed model of a MySQL table definition: columns, secondary
//! indexes, a foreign key, and table options. The DDL executed against the
//! server is rendered from this model (see [`ddl`]), which keeps the
//! statement under test instead of frozen in a string literal.

pub mod access_logs;
pub mod ddl;

/// SQL data types used by the provisioned schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    BigInt,
    /// Variable-length string with max length
    Varchar(u32),
    /// Unlimited text
    Text,
    /// Timestamp (date and time)
    Timestamp,
}

impl DataType {
    /// MySQL name of this type as written in DDL
    pub fn sql_name(&self) -> String {
        match self {
            DataType::Int => "INT".to_string(),
            DataType::BigInt => "BIGINT".to_string(),
            DataType::Varchar(n) => format!("VARCHAR({})", n),
            DataType::Text => "TEXT".to_string(),
            DataType::Timestamp => "TIMESTAMP".to_string(),
        }
    }
}

/// Column definition
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Column name
    pub name: String,
    /// Data type
    pub data_type: DataType,
    /// Whether NULL values are allowed
    pub nullable: bool,
    /// Default value expression (as raw SQL)
    pub default: Option<String>,
    /// Auto-increment column
    pub auto_increment: bool,
    /// Column comment
    pub comment: Option<String>,
}

impl ColumnDef {
    /// Create a new column definition
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            default: None,
            auto_increment: false,
            comment: None,
        }
    }

    /// Set nullable
    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set default value expression
    #[must_use]
    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set auto-increment
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Set column comment
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Secondary index definition
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDef {
    /// Index name
    pub name: String,
    /// Columns in the index
    pub columns: Vec<String>,
}

impl IndexDef {
    /// Create a new index definition
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

/// Referential action for a foreign key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Cascade,
    Restrict,
    SetNull,
}

impl ReferentialAction {
    /// MySQL keyword for this action
    pub fn sql_name(&self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::SetNull => "SET NULL",
        }
    }
}

/// Foreign key constraint
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyDef {
    /// Referencing columns
    pub columns: Vec<String>,
    /// Referenced table
    pub ref_table: String,
    /// Referenced columns
    pub ref_columns: Vec<String>,
    /// ON DELETE action
    pub on_delete: Option<ReferentialAction>,
}

impl ForeignKeyDef {
    /// Create a new foreign key referencing `ref_table(ref_columns)`
    pub fn new(
        columns: Vec<String>,
        ref_table: impl Into<String>,
        ref_columns: Vec<String>,
    ) -> Self {
        Self {
            columns,
            ref_table: ref_table.into(),
            ref_columns,
            on_delete: None,
        }
    }

    /// Set the ON DELETE action
    #[must_use]
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }
}

/// MySQL table options
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableOptions {
    /// Storage engine
    pub engine: Option<String>,
    /// Default character set
    pub charset: Option<String>,
    /// Collation
    pub collate: Option<String>,
    /// Table comment
    pub comment: Option<String>,
}

/// Table definition
#[derive(Debug, Clone)]
pub struct TableDef {
    /// Table name
    pub name: String,
    /// Column definitions
    pub columns: Vec<ColumnDef>,
    /// Primary key columns
    pub primary_key: Vec<String>,
    /// Secondary indexes
    pub indexes: Vec<IndexDef>,
    /// Foreign keys
    pub foreign_keys: Vec<ForeignKeyDef>,
    /// Table options
    pub options: TableOptions,
}

impl TableDef {
    /// Create a new table definition
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
            options: TableOptions::default(),
        }
    }

    /// Add a column
    #[must_use]
    pub fn column(mut self, col: ColumnDef) -> Self {
        self.columns.push(col);
        self
    }

    /// Set the primary key columns
    #[must_use]
    pub fn primary_key(mut self, columns: Vec<String>) -> Self {
        self.primary_key = columns;
        self
    }

    /// Add a secondary index
    #[must_use]
    pub fn index(mut self, index: IndexDef) -> Self {
        self.indexes.push(index);
        self
    }

    /// Add a foreign key
    #[must_use]
    pub fn foreign_key(mut self, fk: ForeignKeyDef) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Set table options
    #[must_use]
    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Get column by name
    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}
