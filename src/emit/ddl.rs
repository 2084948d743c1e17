//! MySQL DDL emitter.

use super::{EmitError, Emitter, Header};
use crate::schema::EntityDescriptor;
use crate::schema::def::{ColumnDef, ForeignKeyDef, IndexDef, create_table_sql};

/// Re-serializes entities as `CREATE TABLE` statements.
#[derive(Debug, Clone, Default)]
pub struct DdlEmitter {
    pub header: Header,
}

impl DdlEmitter {
    pub fn new(header: Header) -> Self {
        Self { header }
    }

    pub fn create_table(entity: &EntityDescriptor) -> Result<String, EmitError> {
        let columns: Vec<ColumnDef> = entity
            .fields
            .iter()
            .filter_map(|f| f.column.clone())
            .collect();
        if columns.is_empty() {
            return Err(EmitError::invalid(&entity.name, "table has no columns"));
        }
        let indexes: Vec<&IndexDef> = entity
            .indexes
            .iter()
            .filter_map(|i| i.index.as_ref())
            .collect();
        let foreign_keys: Vec<ForeignKeyDef> = entity
            .foreign_keys
            .iter()
            .filter_map(|fk| fk.foreign_key.clone())
            .collect();

        Ok(create_table_sql(&entity.table, &columns, &indexes, &foreign_keys))
    }
}

impl Emitter for DdlEmitter {
    fn emit(&self, entities: &[EntityDescriptor]) -> Result<String, EmitError> {
        let statements = entities
            .iter()
            .map(Self::create_table)
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = self.header.render("--");
        out.push_str(&statements.join("\n\n"));
        out.push('\n');
        Ok(out)
    }

    fn suffix(&self) -> &'static str {
        ".sql"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::MySqlMapper;
    use crate::schema::facts::{
        ColumnFacts, ForeignKeyFacts, IndexFacts, ReferenceOption, TableFacts,
    };
    use crate::schema::{EntityBuilder, Options};
    use rstest::{fixture, rstest};

    fn column(name: &str, raw_type: &str) -> ColumnFacts {
        ColumnFacts {
            name: name.into(),
            raw_type: raw_type.into(),
            ..Default::default()
        }
    }

    #[fixture]
    fn post() -> TableFacts {
        TableFacts {
            name: "post".into(),
            collation: Some("utf8mb4_general_ci".into()),
            columns: vec![
                ColumnFacts {
                    auto_increment: true,
                    ..column("id", "bigint unsigned")
                },
                column("user_id", "bigint unsigned"),
                ColumnFacts {
                    comment: "it's the title".into(),
                    ..column("title", "varchar(128)")
                },
            ],
            indexes: vec![
                IndexFacts {
                    name: "PRIMARY".into(),
                    columns: vec!["id".into()],
                    primary: true,
                    unique: true,
                    ..Default::default()
                },
                IndexFacts {
                    name: "uk_user_title".into(),
                    columns: vec!["user_id".into(), "title".into()],
                    unique: true,
                    ..Default::default()
                },
            ],
            foreign_keys: vec![ForeignKeyFacts {
                symbol: "fk_post_user".into(),
                columns: vec!["user_id".into()],
                ref_table: "user".into(),
                ref_columns: vec!["id".into()],
                on_update: ReferenceOption::NoAction,
                on_delete: ReferenceOption::Cascade,
            }],
            ..Default::default()
        }
    }

    #[rstest]
    fn test_create_table(post: TableFacts) {
        let options = Options {
            enable_foreign_key: true,
            ..Options::default()
        };
        let entity = EntityBuilder::new(&MySqlMapper, &options).build(&post).unwrap();
        let out = DdlEmitter::new(Header::disabled()).emit(&[entity]).unwrap();

        let expected = "\
CREATE TABLE `post` (
  `id` bigint unsigned NOT NULL AUTO_INCREMENT,
  `user_id` bigint unsigned NOT NULL,
  `title` varchar(128) NOT NULL COMMENT 'it\\'s the title',
  PRIMARY KEY (`id`) USING BTREE,
  UNIQUE KEY `uk_user_title` (`user_id`,`title`) USING BTREE,
  CONSTRAINT `fk_post_user` FOREIGN KEY (`user_id`) REFERENCES `user` (`id`) ON DELETE CASCADE ON UPDATE NO ACTION
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_general_ci;
";
        assert_eq!(out, expected);
    }

    #[rstest]
    fn test_foreign_keys_follow_options(post: TableFacts) {
        let entity = EntityBuilder::new(&MySqlMapper, &Options::default())
            .build(&post)
            .unwrap();
        let sql = DdlEmitter::create_table(&entity).unwrap();
        assert!(!sql.contains("FOREIGN KEY"));
        assert!(sql.contains("UNIQUE KEY `uk_user_title`"));
    }

    #[rstest]
    fn test_matches_table_definition(post: TableFacts) {
        let options = Options {
            enable_foreign_key: true,
            ..Options::default()
        };
        let entity = EntityBuilder::new(&MySqlMapper, &options).build(&post).unwrap();
        assert_eq!(DdlEmitter::create_table(&entity).unwrap(), entity.table.definition());
    }

    #[rstest]
    fn test_empty_table_is_rejected() {
        let table = TableFacts {
            name: "empty".into(),
            ..Default::default()
        };
        let entity = EntityBuilder::new(&MySqlMapper, &Options::default())
            .build(&table)
            .unwrap();
        let err = DdlEmitter::default().emit(&[entity]).unwrap_err();
        assert_eq!(err.entity(), "empty");
    }

    #[rstest]
    fn test_header(post: TableFacts) {
        let entity = EntityBuilder::new(&MySqlMapper, &Options::default())
            .build(&post)
            .unwrap();
        let out = DdlEmitter::default().emit(&[entity]).unwrap();
        assert!(out.starts_with("-- Code generated by ormat. DO NOT EDIT.\n-- version: "));
    }
}
