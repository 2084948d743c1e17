//! Result types for the generator commands.

use serde::Serialize;

use super::load::SkippedInput;

/// A written artifact and the entities it holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedFile {
    pub path: String,
    pub entities: Vec<String>,
}

/// An entity whose emission failed under `--keep-going`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedEntity {
    pub entity: String,
    pub error: String,
}

/// Summary of one generator run.
#[derive(Debug, Default, Serialize)]
pub struct GenerateResult {
    pub command: String,
    pub files: Vec<GeneratedFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_inputs: Vec<SkippedInput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_entities: Vec<FailedEntity>,
}

impl GenerateResult {
    pub fn entity_count(&self) -> usize {
        self.files.iter().map(|f| f.entities.len()).sum()
    }
}
