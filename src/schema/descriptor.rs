//! Entity descriptors: the intermediate representation every emitter consumes.

use super::def::{ColumnDef, ForeignKeyDef, IndexDef, TableDef};
use super::facts::ReferenceOption;
use super::go_type::GoType;
use super::kind::{CanonicalKind, RapierKind};
use crate::utils::camel_case;

/// One column as seen by the generators.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Column name
    pub name: String,
    pub comment: String,
    pub nullable: bool,
    pub column: Option<ColumnDef>,
    pub go_type: GoType,
    /// Struct field name
    pub go_name: String,
    /// Rendered as `*T`
    pub go_pointer: bool,
    /// Complete struct tags, e.g. `json:"id,omitempty"`
    pub tags: Vec<String>,
    pub rapier_kind: RapierKind,
}

impl FieldDescriptor {
    pub fn kind(&self) -> CanonicalKind {
        self.go_type.kind
    }

    /// Go type as written in a struct, including the pointer.
    pub fn go_type_ident(&self) -> String {
        if self.go_pointer && !self.go_type.non_pointer {
            format!("*{}", self.go_type.ident)
        } else {
            self.go_type.ident.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexDescriptor {
    pub name: String,
    pub fields: Vec<String>,
    pub index: Option<IndexDef>,
}

impl IndexDescriptor {
    pub fn from_def(index: &IndexDef) -> Self {
        Self {
            name: index.name().to_string(),
            fields: index.columns().to_vec(),
            index: Some(index.clone()),
        }
    }

    pub fn is_primary(&self) -> bool {
        self.index.as_ref().is_some_and(IndexDef::is_primary)
    }

    pub fn definition(&self) -> String {
        self.index.as_ref().map(IndexDef::definition).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyDescriptor {
    pub symbol: String,
    pub table: String,
    pub columns: Vec<String>,
    pub ref_table: String,
    pub ref_columns: Vec<String>,
    pub on_update: ReferenceOption,
    pub on_delete: ReferenceOption,
    pub foreign_key: Option<ForeignKeyDef>,
}

impl ForeignKeyDescriptor {
    pub fn from_def(table: &str, fk: &ForeignKeyDef) -> Self {
        let facts = fk.facts();
        Self {
            symbol: facts.symbol.clone(),
            table: table.to_string(),
            columns: facts.columns.clone(),
            ref_table: facts.ref_table.clone(),
            ref_columns: facts.ref_columns.clone(),
            on_update: facts.on_update,
            on_delete: facts.on_delete,
            foreign_key: Some(fk.clone()),
        }
    }

    pub fn definition(&self) -> String {
        self.foreign_key
            .as_ref()
            .map(ForeignKeyDef::definition)
            .unwrap_or_default()
    }
}

/// One table.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDescriptor {
    pub name: String,
    pub comment: String,
    pub table: TableDef,
    pub fields: Vec<FieldDescriptor>,
    pub indexes: Vec<IndexDescriptor>,
    pub foreign_keys: Vec<ForeignKeyDescriptor>,
}

impl EntityDescriptor {
    pub fn struct_name(&self) -> String {
        camel_case(&self.name)
    }

    pub fn primary_key(&self) -> Option<&IndexDescriptor> {
        self.indexes.iter().find(|i| i.is_primary())
    }

    pub fn field(&self, column: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == column)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub name: String,
    pub entities: Vec<EntityDescriptor>,
}

impl Schema {
    /// Order entities by table name; otherwise they keep input order.
    pub fn sort_by_name(&mut self) {
        self.entities.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
