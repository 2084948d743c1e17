//! Go type descriptors.
//!
//! A [`GoType`] is what the struct emitter writes for a field: identifier,
//! import path and whether the type is already able to express "absent"
//! (slices, maps and pointers are never wrapped in another pointer).

use serde::{Deserialize, Serialize};

use super::kind::CanonicalKind;

pub const SOFT_DELETE_PKG: &str = "gorm.io/plugin/soft_delete";
pub const SQL_PKG: &str = "database/sql";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoType {
    /// Canonical kind the field was mapped from; narrowing keeps it
    pub kind: CanonicalKind,
    /// Type as written in Go source, e.g. `int64`, `time.Time`
    pub ident: String,
    /// Import path, empty for builtins
    pub pkg_path: String,
    /// Package qualifier used in `ident`, empty for builtins
    pub pkg_qualifier: String,
    pub non_pointer: bool,
}

impl GoType {
    pub fn new(kind: CanonicalKind, ident: &str, pkg_path: &str) -> Self {
        let bare = ident.trim_start_matches(['*', '[', ']']);
        let pkg_qualifier = match bare.rsplit_once('.') {
            Some((qualifier, _)) if !pkg_path.is_empty() => qualifier.to_string(),
            _ => String::new(),
        };
        let non_pointer =
            ident.starts_with("[]") || ident.starts_with('*') || ident.starts_with("map[");

        Self {
            kind,
            ident: ident.to_string(),
            pkg_path: pkg_path.to_string(),
            pkg_qualifier,
            non_pointer,
        }
    }

    /// Default Go type for a canonical kind.
    pub fn for_kind(kind: CanonicalKind) -> Self {
        match kind {
            CanonicalKind::Time => Self::new(kind, "time.Time", "time"),
            CanonicalKind::Json => {
                let mut raw = Self::new(kind, "json.RawMessage", "encoding/json");
                raw.non_pointer = true;
                raw
            }
            CanonicalKind::Other => Self::new(kind, "any", ""),
            _ => Self::new(kind, kind.name(), ""),
        }
    }

    /// Marker type gorm uses for integer soft-delete columns.
    pub fn soft_delete(kind: CanonicalKind) -> Self {
        let mut marker = Self::new(kind, "soft_delete.DeletedAt", SOFT_DELETE_PKG);
        marker.non_pointer = true;
        marker
    }

    /// `database/sql` nullable wrapper for a kind, if one exists.
    pub fn sql_null(kind: CanonicalKind) -> Option<Self> {
        let ident = match kind {
            CanonicalKind::Bool => "sql.NullBool",
            CanonicalKind::Uint8 => "sql.NullByte",
            CanonicalKind::Int16 => "sql.NullInt16",
            CanonicalKind::Int32 => "sql.NullInt32",
            CanonicalKind::Int64 => "sql.NullInt64",
            CanonicalKind::Float64 => "sql.NullFloat64",
            CanonicalKind::String => "sql.NullString",
            CanonicalKind::Time => "sql.NullTime",
            _ => return None,
        };
        let mut wrapper = Self::new(kind, ident, SQL_PKG);
        wrapper.non_pointer = true;
        Some(wrapper)
    }

    pub fn is_soft_delete(&self) -> bool {
        self.pkg_path == SOFT_DELETE_PKG
    }
}

/// User supplied replacement type for a single `table.column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoTypeOverride {
    pub ident: String,
    #[serde(default)]
    pub pkg_path: String,
}

impl GoTypeOverride {
    pub fn to_go_type(&self, kind: CanonicalKind) -> GoType {
        GoType::new(kind, &self.ident, &self.pkg_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_every_kind_has_a_type() {
        for kind in CanonicalKind::ALL {
            let ty = GoType::for_kind(kind);
            assert!(!ty.ident.is_empty());
            assert_eq!(ty.kind, kind);
        }
    }

    #[rstest]
    #[case(CanonicalKind::Int64, "int64", "", false)]
    #[case(CanonicalKind::Time, "time.Time", "time", false)]
    #[case(CanonicalKind::Bytes, "[]byte", "", true)]
    #[case(CanonicalKind::Json, "json.RawMessage", "encoding/json", true)]
    #[case(CanonicalKind::Uuid, "[16]byte", "", false)]
    #[case(CanonicalKind::Decimal, "string", "", false)]
    fn test_for_kind(
        #[case] kind: CanonicalKind,
        #[case] ident: &str,
        #[case] pkg: &str,
        #[case] non_pointer: bool,
    ) {
        let ty = GoType::for_kind(kind);
        assert_eq!(ty.ident, ident);
        assert_eq!(ty.pkg_path, pkg);
        assert_eq!(ty.non_pointer, non_pointer);
    }

    #[rstest]
    fn test_qualifier_from_ident() {
        let ty = GoType::new(CanonicalKind::String, "*decimal.Decimal", "github.com/shopspring/decimal");
        assert_eq!(ty.pkg_qualifier, "decimal");
        assert!(ty.non_pointer);
    }

    #[rstest]
    fn test_sql_null_table() {
        let wrapper = GoType::sql_null(CanonicalKind::Int64).unwrap();
        assert_eq!(wrapper.ident, "sql.NullInt64");
        assert_eq!(wrapper.pkg_path, SQL_PKG);
        assert_eq!(wrapper.kind, CanonicalKind::Int64);
        assert!(GoType::sql_null(CanonicalKind::Int8).is_none());
        assert!(GoType::sql_null(CanonicalKind::Bytes).is_none());
    }

    #[rstest]
    fn test_soft_delete_marker() {
        let marker = GoType::soft_delete(CanonicalKind::Uint64);
        assert!(marker.is_soft_delete());
        assert_eq!(marker.kind, CanonicalKind::Uint64);
        assert_eq!(marker.pkg_qualifier, "soft_delete");
    }
}
