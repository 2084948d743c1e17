//! Entity builder: raw facts in, transformed and name-resolved descriptors out.

use thiserror::Error;

use super::def::TableDef;
use super::descriptor::{
    EntityDescriptor, FieldDescriptor, ForeignKeyDescriptor, IndexDescriptor, Schema,
};
use super::facts::{SchemaFacts, TableFacts};
use super::go_type::GoType;
use super::option::Options;
use super::resolve::resolve_names;
use super::transform::transform_field;
use crate::dialect::TypeMapper;
use crate::utils::camel_case;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("table `{table}` column `{column}`: unsupported column type `{raw}`")]
    UnsupportedType {
        table: String,
        column: String,
        raw: String,
    },
}

pub struct EntityBuilder<'a> {
    mapper: &'a dyn TypeMapper,
    options: &'a Options,
}

impl<'a> EntityBuilder<'a> {
    pub fn new(mapper: &'a dyn TypeMapper, options: &'a Options) -> Self {
        Self { mapper, options }
    }

    /// Build one entity. Any unmappable column fails the whole entity.
    pub fn build(&self, facts: &TableFacts) -> Result<EntityDescriptor, BuildError> {
        let table = TableDef::new(facts.clone());

        let mut fields = Vec::with_capacity(facts.columns.len());
        for column in table.columns() {
            let col = column.column();
            let kind = self
                .mapper
                .map_column_type(&col.raw_type)
                .map_err(|e| BuildError::UnsupportedType {
                    table: facts.name.clone(),
                    column: col.name.clone(),
                    raw: e.raw,
                })?;

            let go_type = match self.options.type_override(&facts.name, &col.name) {
                Some(custom) => custom.to_go_type(kind),
                None => GoType::for_kind(kind),
            };

            let mut field = FieldDescriptor {
                name: col.name.clone(),
                comment: col.comment.clone(),
                nullable: col.nullable,
                go_type,
                go_name: camel_case(&col.name),
                go_pointer: col.nullable,
                tags: vec![column.gorm_tag(&table, self.options.disable_comment_tag)],
                rapier_kind: kind.into_rapier_kind(),
                column: Some(column.clone()),
            };
            transform_field(&mut field, self.options);
            fields.push(field);
        }

        let indexes = table.indexes().iter().map(IndexDescriptor::from_def).collect();
        let foreign_keys = if self.options.enable_foreign_key {
            table
                .foreign_keys()
                .iter()
                .map(|fk| ForeignKeyDescriptor::from_def(&facts.name, fk))
                .collect()
        } else {
            Vec::new()
        };

        let mut entity = EntityDescriptor {
            name: facts.name.clone(),
            comment: facts.comment.clone(),
            table,
            fields,
            indexes,
            foreign_keys,
        };
        resolve_names(&mut entity, &self.options.escape_name);

        tracing::debug!(
            table = %entity.name,
            fields = entity.fields.len(),
            indexes = entity.indexes.len(),
            "built entity"
        );
        Ok(entity)
    }

    /// Build every table in order; the first failure aborts.
    pub fn build_schema(&self, facts: &SchemaFacts) -> Result<Schema, BuildError> {
        let entities = facts
            .tables
            .iter()
            .map(|t| self.build(t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Schema {
            name: facts.name.clone(),
            entities,
        })
    }
}
