use std::sync::LazyLock;

use super::{MYSQL, PatternTable, TypeMapper, UnsupportedTypeError};
use crate::schema::kind::CanonicalKind;

/// MySQL column type rules, most specific first.
pub(super) const RULES: &[(&str, CanonicalKind)] = &[
    (r"^(tinyint)\b[(]1[)] unsigned", CanonicalKind::Bool),
    (r"^(tinyint)\b[(]1[)]", CanonicalKind::Bool),
    (r"^(tinyint)\b([(]\d+[)])? unsigned", CanonicalKind::Uint8),
    (r"^(tinyint)\b([(]\d+[)])?", CanonicalKind::Int8),
    (r"^(smallint)\b([(]\d+[)])? unsigned", CanonicalKind::Uint16),
    (r"^(smallint)\b([(]\d+[)])?", CanonicalKind::Int16),
    (r"^(mediumint)\b([(]\d+[)])? unsigned", CanonicalKind::Uint32),
    (r"^(mediumint)\b([(]\d+[)])?", CanonicalKind::Int32),
    (r"^(int)\b([(]\d+[)])? unsigned", CanonicalKind::Uint32),
    (r"^(int)\b([(]\d+[)])?", CanonicalKind::Int32),
    (r"^(integer)\b([(]\d+[)])? unsigned", CanonicalKind::Uint32),
    (r"^(integer)\b([(]\d+[)])?", CanonicalKind::Int32),
    (r"^(bigint)\b([(]\d+[)])? unsigned", CanonicalKind::Uint64),
    (r"^(bigint)\b([(]\d+[)])?", CanonicalKind::Int64),
    (r"^(float)\b([(]\d+,\d+[)])? unsigned", CanonicalKind::Float32),
    (r"^(float)\b([(]\d+,\d+[)])?", CanonicalKind::Float32),
    (r"^(double)\b([(]\d+,\d+[)])? unsigned", CanonicalKind::Float64),
    (r"^(double)\b([(]\d+,\d+[)])?", CanonicalKind::Float64),
    (r"^(char)\b[(]\d+[)]", CanonicalKind::String),
    (r"^(varchar)\b[(]\d+[)]", CanonicalKind::String),
    (r"^(datetime)\b([(]\d+[)])?", CanonicalKind::Time),
    (r"^(date)\b([(]\d+[)])?", CanonicalKind::Time),
    (r"^(timestamp)\b([(]\d+[)])?", CanonicalKind::Time),
    (r"^(time)\b([(]\d+[)])?", CanonicalKind::Time),
    (r"^(tinytext)\b", CanonicalKind::String),
    (r"^(mediumtext)\b", CanonicalKind::String),
    (r"^(longtext)\b", CanonicalKind::String),
    (r"^(text)\b", CanonicalKind::String),
    (r"^(tinyblob)\b", CanonicalKind::Bytes),
    (r"^(mediumblob)\b", CanonicalKind::Bytes),
    (r"^(longblob)\b", CanonicalKind::Bytes),
    (r"^(blob)\b", CanonicalKind::Bytes),
    (r"^(binary)\b[(]\d+[)]", CanonicalKind::Bytes),
    (r"^(varbinary)\b[(]\d+[)]", CanonicalKind::Bytes),
    (r"^(bit)\b[(]\d+[)]", CanonicalKind::Bytes),
    (r"^(json)\b", CanonicalKind::Json),
    (r"^(enum)\b[(](.)+[)]", CanonicalKind::Enum),
    (r"^(decimal)\b[(]\d+,\d+[)]", CanonicalKind::Decimal),
    (r"^(geometry)\b", CanonicalKind::String),
];

static TABLE: LazyLock<PatternTable> =
    LazyLock::new(|| PatternTable::new(RULES).expect("mysql type patterns compile"));

/// MySQL type mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlMapper;

impl TypeMapper for MySqlMapper {
    fn dialect(&self) -> &'static str {
        MYSQL
    }

    fn map_column_type(&self, raw: &str) -> Result<CanonicalKind, UnsupportedTypeError> {
        TABLE.resolve(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("tinyint(1)", CanonicalKind::Bool)]
    #[case("tinyint(1) unsigned", CanonicalKind::Bool)]
    #[case("tinyint(4)", CanonicalKind::Int8)]
    #[case("tinyint unsigned", CanonicalKind::Uint8)]
    #[case("tinyint(3) unsigned", CanonicalKind::Uint8)]
    #[case("smallint(6)", CanonicalKind::Int16)]
    #[case("mediumint unsigned", CanonicalKind::Uint32)]
    #[case("int(11)", CanonicalKind::Int32)]
    #[case("int unsigned", CanonicalKind::Uint32)]
    #[case("integer", CanonicalKind::Int32)]
    #[case("bigint", CanonicalKind::Int64)]
    #[case("bigint(20) unsigned", CanonicalKind::Uint64)]
    #[case("float", CanonicalKind::Float32)]
    #[case("double(10,2)", CanonicalKind::Float64)]
    #[case("decimal(10,2)", CanonicalKind::Decimal)]
    #[case("varchar(255)", CanonicalKind::String)]
    #[case("char(36)", CanonicalKind::String)]
    #[case("longtext", CanonicalKind::String)]
    #[case("datetime", CanonicalKind::Time)]
    #[case("datetime(3)", CanonicalKind::Time)]
    #[case("date", CanonicalKind::Time)]
    #[case("timestamp", CanonicalKind::Time)]
    #[case("time", CanonicalKind::Time)]
    #[case("blob", CanonicalKind::Bytes)]
    #[case("varbinary(16)", CanonicalKind::Bytes)]
    #[case("bit(1)", CanonicalKind::Bytes)]
    #[case("json", CanonicalKind::Json)]
    #[case("enum('a','b')", CanonicalKind::Enum)]
    #[case("geometry", CanonicalKind::String)]
    #[case("BIGINT UNSIGNED", CanonicalKind::Uint64)]
    fn test_map_column_type(#[case] raw: &str, #[case] expected: CanonicalKind) {
        assert_eq!(MySqlMapper.map_column_type(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("interval")]
    #[case("uuid")]
    #[case("set('a')")]
    #[case("year")]
    #[case("bool")]
    #[case("decimal")]
    #[case("")]
    fn test_unsupported(#[case] raw: &str) {
        let err = MySqlMapper.map_column_type(raw).unwrap_err();
        assert_eq!(err.raw, raw);
    }

    #[rstest]
    fn test_every_rule_resolves_to_a_valid_kind() {
        assert!(RULES.iter().all(|(_, kind)| kind.is_valid()));
        assert_eq!(TABLE.len(), RULES.len());
    }
}
