//! Raw schema facts.
//!
//! The JSON shape delivered by the introspection and DDL-parsing
//! collaborators. Everything downstream is derived from these values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaFacts {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TableFacts>,
}

impl SchemaFacts {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableFacts {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub collation: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnFacts>,
    #[serde(default)]
    pub indexes: Vec<IndexFacts>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyFacts>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnFacts {
    pub name: String,
    /// Raw dialect type, e.g. `bigint unsigned`, `varchar(64)`
    #[serde(rename = "type")]
    pub raw_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub default: Option<DefaultValue>,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub comment: String,
}

/// Column default: a quoted literal or a raw SQL expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    Literal(String),
    Expr(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexFacts {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub algorithm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyFacts {
    pub symbol: String,
    pub columns: Vec<String>,
    pub ref_table: String,
    pub ref_columns: Vec<String>,
    #[serde(default)]
    pub on_update: ReferenceOption,
    #[serde(default)]
    pub on_delete: ReferenceOption,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceOption {
    #[serde(rename = "NO ACTION")]
    NoAction,
    #[default]
    #[serde(rename = "RESTRICT")]
    Restrict,
    #[serde(rename = "CASCADE")]
    Cascade,
    #[serde(rename = "SET NULL")]
    SetNull,
    #[serde(rename = "SET DEFAULT")]
    SetDefault,
}

impl ReferenceOption {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ReferenceOption::NoAction => "NO ACTION",
            ReferenceOption::Restrict => "RESTRICT",
            ReferenceOption::Cascade => "CASCADE",
            ReferenceOption::SetNull => "SET NULL",
            ReferenceOption::SetDefault => "SET DEFAULT",
        }
    }
}

impl std::fmt::Display for ReferenceOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}
