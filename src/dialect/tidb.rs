use std::sync::LazyLock;

use super::{PatternTable, TIDB, TypeMapper, UnsupportedTypeError, mysql};
use crate::schema::kind::CanonicalKind;

/// Spellings the TiDB parser reports that MySQL introspection never does.
/// Appended after the MySQL rules so those keep their priority.
const EXTRA_RULES: &[(&str, CanonicalKind)] = &[
    (r"^(bool|boolean)\b", CanonicalKind::Bool),
    (r"^(decimal|numeric)\b([(]\d+(,\d+)?[)])?", CanonicalKind::Decimal),
    (r"^(real)\b([(]\d+,\d+[)])?", CanonicalKind::Float64),
    (r"^(year)\b([(]\d+[)])?", CanonicalKind::Int16),
    (r"^(set)\b[(](.)+[)]", CanonicalKind::String),
    (r"^(char|varchar)\b", CanonicalKind::String),
    (r"^(binary|varbinary|bit)\b", CanonicalKind::Bytes),
];

static TABLE: LazyLock<PatternTable> = LazyLock::new(|| {
    let rules: Vec<_> = mysql::RULES.iter().chain(EXTRA_RULES).copied().collect();
    PatternTable::new(&rules).expect("tidb type patterns compile")
});

/// TiDB type mapper: the MySQL table plus TiDB-only spellings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiDbMapper;

impl TypeMapper for TiDbMapper {
    fn dialect(&self) -> &'static str {
        TIDB
    }

    fn map_column_type(&self, raw: &str) -> Result<CanonicalKind, UnsupportedTypeError> {
        TABLE.resolve(raw)
    }
}
