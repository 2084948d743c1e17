//! Struct field name collision resolution.

use std::collections::HashSet;

use super::descriptor::EntityDescriptor;

/// Names no generated struct field may take.
pub const MUST_ESCAPE_NAMES: &[&str] = &["TableName"];

/// Make every field's Go name unique within the entity and keep it clear of
/// the escape set by prefixing `X` until it is free.
///
/// A field only yields a name it was not born with: a field whose original
/// name is taken later by another field's escape keeps it.
pub fn resolve_names<S: AsRef<str>>(entity: &mut EntityDescriptor, escape_names: &[S]) {
    let mut taken: HashSet<String> = MUST_ESCAPE_NAMES
        .iter()
        .map(|s| s.to_string())
        .chain(escape_names.iter().map(|s| s.as_ref().to_string()))
        .collect();
    let original: HashSet<String> = entity.fields.iter().map(|f| f.go_name.clone()).collect();

    for field in &mut entity.fields {
        let mut name = field.go_name.clone();
        while taken.contains(&name) || (name != field.go_name && original.contains(&name)) {
            name = format!("X{}", name);
        }
        if name != field.go_name {
            tracing::debug!(entity = %entity.name, from = %field.go_name, to = %name, "renamed field");
            field.go_name = name.clone();
        }
        taken.insert(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::def::TableDef;
    use crate::schema::descriptor::FieldDescriptor;
    use crate::schema::go_type::GoType;
    use crate::schema::kind::CanonicalKind;
    use rstest::rstest;

    fn entity(go_names: &[&str]) -> EntityDescriptor {
        EntityDescriptor {
            name: "t".into(),
            comment: String::new(),
            table: TableDef::new(Default::default()),
            fields: go_names
                .iter()
                .map(|n| FieldDescriptor {
                    name: n.to_lowercase(),
                    comment: String::new(),
                    nullable: false,
                    column: None,
                    go_type: GoType::for_kind(CanonicalKind::String),
                    go_name: n.to_string(),
                    go_pointer: false,
                    tags: Vec::new(),
                    rapier_kind: CanonicalKind::String.into_rapier_kind(),
                })
                .collect(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    fn names(e: &EntityDescriptor) -> Vec<&str> {
        e.fields.iter().map(|f| f.go_name.as_str()).collect()
    }

    #[rstest]
    fn test_table_name_is_escaped() {
        let mut e = entity(&["Id", "TableName", "Name"]);
        resolve_names::<&str>(&mut e, &[]);
        assert_eq!(names(&e), vec!["Id", "XTableName", "Name"]);
    }

    #[rstest]
    fn test_escape_does_not_steal_existing_name() {
        let mut e = entity(&["TableName", "XTableName"]);
        resolve_names::<&str>(&mut e, &[]);
        assert_eq!(names(&e), vec!["XXTableName", "XTableName"]);
    }

    #[rstest]
    fn test_user_escape_names() {
        let mut e = entity(&["Model", "Id"]);
        resolve_names(&mut e, &["Model".to_string()]);
        assert_eq!(names(&e), vec!["XModel", "Id"]);
    }

    #[rstest]
    fn test_duplicates_become_distinct() {
        let mut e = entity(&["UserId", "UserId", "UserId", "TableName"]);
        resolve_names::<&str>(&mut e, &[]);
        let resolved = names(&e);
        let unique: HashSet<_> = resolved.iter().collect();
        assert_eq!(unique.len(), resolved.len());
        assert!(!resolved.contains(&"TableName"));
        assert_eq!(resolved[0], "UserId");
    }

    #[rstest]
    fn test_deterministic() {
        let mut a = entity(&["TableName", "A", "A"]);
        let mut b = a.clone();
        resolve_names::<&str>(&mut a, &[]);
        resolve_names::<&str>(&mut b, &[]);
        assert_eq!(names(&a), names(&b));
    }
}
