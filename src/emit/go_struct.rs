//! Go struct (gorm model) emitter.

use std::collections::BTreeSet;

use super::{EmitError, Emitter, Header};
use crate::schema::{EntityDescriptor, FieldDescriptor};
use crate::utils::{escape_string_for_quote, is_go_identifier, single_line};

#[derive(Debug, Clone)]
pub struct GoStructEmitter {
    pub package_name: String,
    pub header: Header,
}

impl Default for GoStructEmitter {
    fn default() -> Self {
        Self {
            package_name: "model".to_string(),
            header: Header::default(),
        }
    }
}

impl GoStructEmitter {
    pub fn new(package_name: &str, header: Header) -> Self {
        Self {
            package_name: package_name.to_string(),
            header,
        }
    }

    fn render_field(field: &FieldDescriptor) -> String {
        let mut line = format!("\t{} {}", field.go_name, field.go_type_ident());
        if !field.tags.is_empty() {
            line.push_str(&format!(" `{}`", field.tags.join(" ")));
        }
        let comment = single_line(&field.comment);
        if !comment.is_empty() {
            line.push_str(&format!(" // {}", comment));
        }
        line
    }

    fn render_entity(entity: &EntityDescriptor) -> Result<String, EmitError> {
        let struct_name = entity.struct_name();
        if !is_go_identifier(&struct_name) {
            return Err(EmitError::invalid(
                &entity.name,
                format!("`{}` is not a valid Go struct name", struct_name),
            ));
        }
        if let Some(bad) = entity.fields.iter().find(|f| !is_go_identifier(&f.go_name)) {
            return Err(EmitError::invalid(
                &entity.name,
                format!("field `{}` has invalid Go name `{}`", bad.name, bad.go_name),
            ));
        }

        let mut out = String::new();
        let doc = single_line(&entity.comment);
        if doc.is_empty() {
            out.push_str(&format!("// {}\n", struct_name));
        } else {
            out.push_str(&format!("// {} {}\n", struct_name, doc));
        }
        out.push_str(&format!("type {} struct {{\n", struct_name));
        for field in &entity.fields {
            out.push_str(&Self::render_field(field));
            out.push('\n');
        }
        out.push_str("}\n\n");

        out.push_str("// TableName implement schema.Tabler interface\n");
        out.push_str(&format!("func (*{}) TableName() string {{\n", struct_name));
        out.push_str(&format!(
            "\treturn \"{}\"\n",
            escape_string_for_quote(&entity.name, '"')
        ));
        out.push_str("}\n");
        Ok(out)
    }
}

impl Emitter for GoStructEmitter {
    fn emit(&self, entities: &[EntityDescriptor]) -> Result<String, EmitError> {
        let bodies = entities
            .iter()
            .map(Self::render_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let imports: BTreeSet<&str> = entities
            .iter()
            .flat_map(|e| e.fields.iter())
            .map(|f| f.go_type.pkg_path.as_str())
            .filter(|p| !p.is_empty())
            .collect();

        let mut out = self.header.render("//");
        out.push_str(&format!("package {}\n\n", self.package_name));
        if !imports.is_empty() {
            out.push_str("import (\n");
            for path in &imports {
                out.push_str(&format!("\t\"{}\"\n", path));
            }
            out.push_str(")\n\n");
        }
        out.push_str(&bodies.join("\n"));
        Ok(out)
    }

    fn suffix(&self) -> &'static str {
        ".go"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::MySqlMapper;
    use crate::schema::facts::{ColumnFacts, DefaultValue, IndexFacts, TableFacts};
    use crate::schema::{EntityBuilder, Options};
    use rstest::{fixture, rstest};
    use std::collections::BTreeMap;

    fn column(name: &str, raw_type: &str) -> ColumnFacts {
        ColumnFacts {
            name: name.into(),
            raw_type: raw_type.into(),
            ..Default::default()
        }
    }

    #[fixture]
    fn user() -> TableFacts {
        TableFacts {
            name: "user".into(),
            columns: vec![
                ColumnFacts {
                    auto_increment: true,
                    ..column("id", "bigint")
                },
                column("name", "varchar(64)"),
                ColumnFacts {
                    default: Some(DefaultValue::Literal("0".into())),
                    ..column("deleted_at", "bigint")
                },
                ColumnFacts {
                    nullable: true,
                    comment: "last login".into(),
                    ..column("login_at", "datetime")
                },
            ],
            indexes: vec![IndexFacts {
                name: "PRIMARY".into(),
                columns: vec!["id".into()],
                primary: true,
                unique: true,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn build(table: &TableFacts, options: &Options) -> EntityDescriptor {
        EntityBuilder::new(&MySqlMapper, options).build(table).unwrap()
    }

    #[rstest]
    fn test_user_struct(user: TableFacts) {
        let options = Options {
            tags: BTreeMap::from([("json".to_string(), "snakeCase".to_string())]),
            ..Options::default()
        };
        let entity = build(&user, &options);
        let out = GoStructEmitter::new("model", Header::disabled())
            .emit(&[entity])
            .unwrap();

        let expected = "\
package model

import (
\t\"gorm.io/plugin/soft_delete\"
\t\"time\"
)

// User
type User struct {
\tId int64 `gorm:\"column:id;not null;autoIncrement:true;primaryKey\" json:\"id,omitempty\"`
\tName string `gorm:\"column:name;type:varchar(64);not null\" json:\"name,omitempty\"`
\tDeletedAt soft_delete.DeletedAt `gorm:\"column:deleted_at;type:bigint;not null;default:0\" json:\"deleted_at,omitempty\"`
\tLoginAt *time.Time `gorm:\"column:login_at;type:datetime;default:null;comment:last login\" json:\"login_at,omitempty\"` // last login
}

// TableName implement schema.Tabler interface
func (*User) TableName() string {
\treturn \"user\"
}
";
        assert_eq!(out, expected);
    }

    #[rstest]
    fn test_header_and_sql_import(user: TableFacts) {
        let options = Options {
            disable_null_to_point: true,
            ..Options::default()
        };
        let entity = build(&user, &options);
        let out = GoStructEmitter::default().emit(&[entity]).unwrap();

        assert!(out.starts_with("// Code generated by ormat. DO NOT EDIT.\n"));
        assert!(out.contains("\t\"database/sql\"\n"));
        assert!(out.contains("\tLoginAt sql.NullTime `"));
    }

    #[rstest]
    fn test_json_tag_override_in_struct(mut user: TableFacts) {
        user.columns[1].comment = "id [@jsontag: identifier,omitempty]".into();
        let entity = build(&user, &Options::default());
        let out = GoStructEmitter::default().emit(&[entity]).unwrap();
        assert!(out.contains(r#"json:"identifier,omitempty""#));
    }

    #[rstest]
    fn test_invalid_struct_name_names_entity(mut user: TableFacts) {
        user.name = "2fa_codes".into();
        let entity = build(&user, &Options::default());
        let err = GoStructEmitter::default().emit(&[entity]).unwrap_err();
        assert_eq!(err.entity(), "2fa_codes");
    }

    #[rstest]
    fn test_merged_entities_share_one_import_block(user: TableFacts) {
        let mut other = user.clone();
        other.name = "admin".into();
        let options = Options::default();
        let entities = vec![build(&user, &options), build(&other, &options)];
        let out = GoStructEmitter::default().emit(&entities).unwrap();

        assert_eq!(out.matches("import (").count(), 1);
        assert!(out.contains("type User struct {"));
        assert!(out.contains("type Admin struct {"));
        assert!(out.contains("func (*Admin) TableName() string {"));
    }
}
