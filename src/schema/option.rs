//! Build options.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::go_type::GoTypeOverride;

pub const DEFAULT_JSON_STYLE: &str = "smallCamelCase";

/// Switches that drive the field transformation pipeline.
///
/// `Options::default()` is the "all defaults" value; an options block left
/// empty in a config file deserializes to the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Widen 8/16/32-bit integers to `int`/`uint`
    pub enable_int: bool,
    /// Widen only 32-bit integers
    pub enable_integer_int: bool,
    /// Render bool columns as `int`
    pub enable_bool_int: bool,
    /// Use `database/sql` wrappers instead of pointers for nullable columns
    pub disable_null_to_point: bool,
    /// Attach foreign keys to entities
    pub enable_foreign_key: bool,
    /// Leave `,omitempty` off synthesized tags
    pub ignore_omitempty: bool,
    /// Leave `comment:` out of the gorm tag
    pub disable_comment_tag: bool,
    /// Tag name → naming style
    pub tags: BTreeMap<String, String>,
    /// Extra names a struct field must never take
    pub escape_name: Vec<String>,
    /// `table.column` → replacement Go type
    pub type_overrides: BTreeMap<String, GoTypeOverride>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            enable_int: false,
            enable_integer_int: false,
            enable_bool_int: false,
            disable_null_to_point: false,
            enable_foreign_key: false,
            ignore_omitempty: false,
            disable_comment_tag: false,
            tags: BTreeMap::from([("json".to_string(), DEFAULT_JSON_STYLE.to_string())]),
            escape_name: Vec::new(),
            type_overrides: BTreeMap::new(),
        }
    }
}

impl Options {
    pub fn type_override(&self, table: &str, column: &str) -> Option<&GoTypeOverride> {
        self.type_overrides.get(&format!("{}.{}", table, column))
    }
}
