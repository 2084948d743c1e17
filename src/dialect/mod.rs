//! Dialect type mappers.
//!
//! A mapper resolves a raw column type string to a [`CanonicalKind`] using an
//! ordered pattern table. The first matching pattern wins, so specific spellings
//! (`tinyint(1)`) must precede the general ones (`tinyint`).
//!
//! Mappers are looked up through an explicit [`DialectRegistry`] built at
//! startup; nothing registers itself implicitly.

mod mysql;
mod tidb;

pub use mysql::MySqlMapper;
pub use tidb::TiDbMapper;

use std::collections::BTreeMap;
use std::sync::Arc;

use regex::RegexSet;
use thiserror::Error;

use crate::schema::kind::CanonicalKind;

pub const MYSQL: &str = "mysql";
pub const TIDB: &str = "tidb";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported column type `{raw}`")]
pub struct UnsupportedTypeError {
    pub raw: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("dialect `{0}` is already registered")]
    Duplicate(String),

    #[error("unknown dialect `{name}` (available: {available})")]
    Unknown { name: String, available: String },
}

/// Maps raw column type strings of one dialect to canonical kinds.
pub trait TypeMapper: Send + Sync {
    fn dialect(&self) -> &'static str;

    fn map_column_type(&self, raw: &str) -> Result<CanonicalKind, UnsupportedTypeError>;
}

/// Ordered `(pattern, kind)` rules matched in a single pass.
pub struct PatternTable {
    set: RegexSet,
    kinds: Vec<CanonicalKind>,
}

impl PatternTable {
    /// Compile a rule list. Patterns are static, so a bad one is a programming error.
    pub fn new(rules: &[(&str, CanonicalKind)]) -> Result<Self, regex::Error> {
        let set = RegexSet::new(rules.iter().map(|(pattern, _)| *pattern))?;
        let kinds = rules.iter().map(|(_, kind)| *kind).collect();
        Ok(Self { set, kinds })
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Resolve a raw type. Matching is case-insensitive on the trimmed input.
    pub fn resolve(&self, raw: &str) -> Result<CanonicalKind, UnsupportedTypeError> {
        let normalized = raw.trim().to_ascii_lowercase();
        self.set
            .matches(&normalized)
            .iter()
            .next()
            .map(|i| self.kinds[i])
            .ok_or_else(|| UnsupportedTypeError {
                raw: raw.to_string(),
            })
    }
}

/// Name → mapper lookup.
#[derive(Default, Clone)]
pub struct DialectRegistry {
    mappers: BTreeMap<String, Arc<dyn TypeMapper>>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in `mysql` and `tidb` mappers.
    pub fn with_builtins() -> Self {
        let mut mappers: BTreeMap<String, Arc<dyn TypeMapper>> = BTreeMap::new();
        mappers.insert(MYSQL.to_string(), Arc::new(MySqlMapper));
        mappers.insert(TIDB.to_string(), Arc::new(TiDbMapper));
        Self { mappers }
    }

    pub fn register(
        &mut self,
        name: &str,
        mapper: Arc<dyn TypeMapper>,
    ) -> Result<(), RegistryError> {
        if self.mappers.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        self.mappers.insert(name.to_string(), mapper);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn TypeMapper>, RegistryError> {
        self.mappers
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::Unknown {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.mappers.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("dialects", &self.names())
            .finish()
    }
}
