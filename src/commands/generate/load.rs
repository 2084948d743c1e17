//! Loading schema facts files and building the schema.

use std::fs;
use std::path::{Path, PathBuf};

use regex::RegexSet;
use serde::Serialize;
use thiserror::Error;

use crate::dialect::DialectRegistry;
use crate::schema::{EntityBuilder, Options, Schema, SchemaFacts};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {message}")]
    FileReadFailed { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    JsonParseFailed { path: String, message: String },

    #[error("No usable input: all {count} file(s) failed to load")]
    NoUsableInput { count: usize },

    #[error("Invalid exclude pattern: {message}")]
    InvalidPattern { message: String },
}

/// An input file that was skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedInput {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct LoadedSchema {
    pub schema: Schema,
    pub skipped: Vec<SkippedInput>,
}

pub fn read_facts(path: &Path) -> Result<SchemaFacts, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::FileReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    SchemaFacts::from_json_str(&content).map_err(|e| LoadError::JsonParseFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Read every input, merging their tables. A file that fails is logged and
/// skipped; the batch only fails when no file could be read.
pub fn load_facts(inputs: &[PathBuf]) -> Result<(SchemaFacts, Vec<SkippedInput>), LoadError> {
    let mut merged = SchemaFacts::default();
    let mut skipped = Vec::new();

    for path in inputs {
        match read_facts(path) {
            Ok(facts) => {
                if merged.name.is_empty() {
                    merged.name = facts.name;
                }
                merged.tables.extend(facts.tables);
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "parse failed, file skipped");
                skipped.push(SkippedInput {
                    path: path.display().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    if !inputs.is_empty() && skipped.len() == inputs.len() {
        return Err(LoadError::NoUsableInput {
            count: inputs.len(),
        });
    }
    Ok((merged, skipped))
}

/// Keep only `tables` (when given) and drop tables whose name fully matches
/// any `exclude` pattern.
pub fn filter_tables(
    facts: &mut SchemaFacts,
    tables: &[String],
    exclude: &[String],
) -> Result<(), LoadError> {
    let excluded = RegexSet::new(exclude.iter().map(|p| format!("^(?:{})$", p)))
        .map_err(|e| LoadError::InvalidPattern {
            message: e.to_string(),
        })?;

    facts.tables.retain(|t| {
        (tables.is_empty() || tables.contains(&t.name)) && !excluded.is_match(&t.name)
    });
    Ok(())
}

/// Load, filter and build. With `sort`, entities are ordered by table name.
pub fn load_schema(
    inputs: &[PathBuf],
    dialect: &str,
    tables: &[String],
    exclude: &[String],
    sort: bool,
    registry: &DialectRegistry,
    options: &Options,
) -> Result<LoadedSchema, Box<dyn std::error::Error>> {
    let mapper = registry.get(dialect)?;
    let (mut facts, skipped) = load_facts(inputs)?;
    filter_tables(&mut facts, tables, exclude)?;

    let mut schema = EntityBuilder::new(mapper.as_ref(), options).build_schema(&facts)?;
    if sort {
        schema.sort_by_name();
    }
    tracing::info!(dialect, entities = schema.entities.len(), "schema built");
    Ok(LoadedSchema { schema, skipped })
}
