//! Definitions over raw facts.
//!
//! `TableDef`, `ColumnDef`, `IndexDef` and `ForeignKeyDef` own their facts and
//! re-derive MySQL DDL fragments and gorm tags from them.

use super::facts::{ColumnFacts, DefaultValue, ForeignKeyFacts, IndexFacts, TableFacts};
use crate::utils::{escape_string_for_quote, trim_comment};

const DEFAULT_ENGINE: &str = "InnoDB";
const DEFAULT_CHARSET: &str = "utf8mb4";
const DEFAULT_ALGORITHM: &str = "BTREE";
const PRIMARY_NAME: &str = "PRIMARY";

fn quote_columns(columns: &[String]) -> String {
    columns
        .iter()
        .map(|c| format!("`{}`", c))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    column: ColumnFacts,
}

impl ColumnDef {
    pub fn new(column: ColumnFacts) -> Self {
        Self { column }
    }

    pub fn column(&self) -> &ColumnFacts {
        &self.column
    }

    pub fn name(&self) -> &str {
        &self.column.name
    }

    /// Column definition without the name, e.g. `bigint NOT NULL AUTO_INCREMENT`.
    pub fn definition(&self) -> String {
        let col = &self.column;
        let mut def = col.raw_type.clone();
        if !col.nullable {
            def.push_str(" NOT NULL");
        }
        if col.auto_increment {
            def.push_str(" AUTO_INCREMENT");
        } else if let Some(default) = &col.default {
            match default {
                DefaultValue::Literal(v) => {
                    let v = v.trim_matches('"');
                    def.push_str(&format!(" DEFAULT '{}'", escape_string_for_quote(v, '\'')));
                }
                DefaultValue::Expr(e) => def.push_str(&format!(" DEFAULT {}", e)),
            }
        } else if col.nullable {
            def.push_str(" DEFAULT NULL");
        }
        def
    }

    /// Full column line as it appears inside `CREATE TABLE`.
    pub fn sql(&self) -> String {
        let mut line = format!("`{}` {}", self.column.name, self.definition());
        if !self.column.comment.is_empty() {
            line.push_str(&format!(
                " COMMENT '{}'",
                escape_string_for_quote(&self.column.comment, '\'')
            ));
        }
        line
    }

    /// gorm struct tag for this column, e.g.
    /// `gorm:"column:id;not null;autoIncrement:true;primaryKey"`.
    pub fn gorm_tag(&self, table: &TableDef, disable_comment: bool) -> String {
        let col = &self.column;
        let primary = table.primary_key();
        let pk_position = primary
            .as_ref()
            .and_then(|pk| pk.position(&col.name));
        let is_pk = pk_position.is_some();

        let mut tag = format!("gorm:\"column:{}", col.name);
        if !(is_pk && col.auto_increment) {
            tag.push_str(&format!(";type:{}", col.raw_type));
        }
        if !col.nullable {
            tag.push_str(";not null");
        }

        if let (Some(pk), Some(seq)) = (&primary, pk_position) {
            if col.auto_increment {
                tag.push_str(";autoIncrement:true");
            }
            tag.push_str(";primaryKey");
            if pk.columns().len() > 1 {
                tag.push_str(&format!(",priority:{}", seq));
            }
        } else {
            match &col.default {
                Some(DefaultValue::Literal(v)) => {
                    let v = v.trim_matches('"');
                    let v = if v.is_empty() { "''" } else { v };
                    tag.push_str(&format!(";default:{}", v));
                }
                Some(DefaultValue::Expr(e)) => tag.push_str(&format!(";default:{}", e)),
                None if col.nullable => tag.push_str(";default:null"),
                None => {}
            }
        }

        for index in table.indexes().iter().filter(|i| !i.is_primary()) {
            let Some(seq) = index.position(&col.name) else {
                continue;
            };
            let kind = if index.is_unique() { "uniqueIndex" } else { "index" };
            tag.push_str(&format!(";{}:{}", kind, index.name()));
            if index.columns().len() > 1 {
                tag.push_str(&format!(",priority:{}", seq));
            }
        }

        if !disable_comment && !col.comment.is_empty() {
            tag.push_str(&format!(";comment:{}", trim_comment(&col.comment)));
        }
        tag.push('"');
        tag
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexDef {
    index: IndexFacts,
}

impl IndexDef {
    pub fn new(index: IndexFacts) -> Self {
        Self { index }
    }

    pub fn name(&self) -> &str {
        &self.index.name
    }

    pub fn columns(&self) -> &[String] {
        &self.index.columns
    }

    pub fn is_primary(&self) -> bool {
        self.index.primary || self.index.name.eq_ignore_ascii_case(PRIMARY_NAME)
    }

    pub fn is_unique(&self) -> bool {
        self.index.unique || self.is_primary()
    }

    /// 1-based position of a column within the index.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.index
            .columns
            .iter()
            .position(|c| c == column)
            .map(|i| i + 1)
    }

    pub fn definition(&self) -> String {
        let algorithm = self.index.algorithm.as_deref().unwrap_or(DEFAULT_ALGORITHM);
        let columns = quote_columns(&self.index.columns);
        if self.is_primary() {
            format!("PRIMARY KEY ({}) USING {}", columns, algorithm)
        } else if self.is_unique() {
            format!("UNIQUE KEY `{}` ({}) USING {}", self.index.name, columns, algorithm)
        } else {
            format!("KEY `{}` ({}) USING {}", self.index.name, columns, algorithm)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyDef {
    foreign_key: ForeignKeyFacts,
}

impl ForeignKeyDef {
    pub fn new(foreign_key: ForeignKeyFacts) -> Self {
        Self { foreign_key }
    }

    pub fn facts(&self) -> &ForeignKeyFacts {
        &self.foreign_key
    }

    pub fn definition(&self) -> String {
        let fk = &self.foreign_key;
        format!(
            "CONSTRAINT `{}` FOREIGN KEY ({}) REFERENCES `{}` ({}) ON DELETE {} ON UPDATE {}",
            fk.symbol,
            quote_columns(&fk.columns),
            fk.ref_table,
            quote_columns(&fk.ref_columns),
            fk.on_delete,
            fk.on_update,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDef {
    table: TableFacts,
    indexes: Vec<IndexDef>,
}

impl TableDef {
    pub fn new(table: TableFacts) -> Self {
        let indexes = table.indexes.iter().cloned().map(IndexDef::new).collect();
        Self { table, indexes }
    }

    pub fn name(&self) -> &str {
        &self.table.name
    }

    pub fn comment(&self) -> &str {
        &self.table.comment
    }

    pub fn facts(&self) -> &TableFacts {
        &self.table
    }

    pub fn indexes(&self) -> &[IndexDef] {
        &self.indexes
    }

    pub fn primary_key(&self) -> Option<&IndexDef> {
        self.indexes.iter().find(|i| i.is_primary())
    }

    pub fn columns(&self) -> Vec<ColumnDef> {
        self.table.columns.iter().cloned().map(ColumnDef::new).collect()
    }

    pub fn foreign_keys(&self) -> Vec<ForeignKeyDef> {
        self.table
            .foreign_keys
            .iter()
            .cloned()
            .map(ForeignKeyDef::new)
            .collect()
    }

    /// Table options trailing the closing parenthesis.
    pub fn table_options(&self) -> String {
        let t = &self.table;
        let mut opts = format!(
            " ENGINE={} DEFAULT CHARSET={}",
            t.engine.as_deref().unwrap_or(DEFAULT_ENGINE),
            t.charset.as_deref().unwrap_or(DEFAULT_CHARSET),
        );
        if let Some(collation) = &t.collation {
            opts.push_str(&format!(" COLLATE={}", collation));
        }
        if !t.comment.is_empty() {
            opts.push_str(&format!(" COMMENT='{}'", escape_string_for_quote(&t.comment, '\'')));
        }
        opts
    }

    /// Complete `CREATE TABLE` statement for every fact of the table.
    pub fn definition(&self) -> String {
        let columns = self.columns();
        let indexes: Vec<&IndexDef> = self.indexes.iter().collect();
        let foreign_keys = self.foreign_keys();
        create_table_sql(self, &columns, &indexes, &foreign_keys)
    }
}

/// Assemble a `CREATE TABLE` statement: columns, primary key, secondary
/// indexes and foreign keys, one per line.
pub fn create_table_sql(
    table: &TableDef,
    columns: &[ColumnDef],
    indexes: &[&IndexDef],
    foreign_keys: &[ForeignKeyDef],
) -> String {
    let mut lines: Vec<String> = columns.iter().map(ColumnDef::sql).collect();
    lines.extend(
        indexes
            .iter()
            .filter(|i| i.is_primary())
            .map(|i| i.definition()),
    );
    lines.extend(
        indexes
            .iter()
            .filter(|i| !i.is_primary())
            .map(|i| i.definition()),
    );
    lines.extend(foreign_keys.iter().map(ForeignKeyDef::definition));

    let body = lines
        .iter()
        .map(|l| format!("  {}", l))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "CREATE TABLE `{}` (\n{}\n){};",
        table.name(),
        body,
        table.table_options()
    )
}
