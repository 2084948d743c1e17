//! Rendering entities through a backend and writing the artifacts.

use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::slice;

use super::load::LoadedSchema;
use super::result::{FailedEntity, GenerateResult, GeneratedFile};
use crate::emit::{Backend, Emitter};

/// `dir/name` plus `suffix`; a suffix without a leading dot gets one.
pub fn join_filename(dir: &Path, name: &str, suffix: &str) -> PathBuf {
    let suffix = suffix.trim();
    let file = if suffix.is_empty() || suffix.starts_with('.') {
        format!("{}{}", name, suffix)
    } else {
        format!("{}.{}", name, suffix)
    };
    dir.join(file)
}

/// Write `data`, creating parent directories as needed.
pub fn write_file(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, data)
}

/// How entities are grouped into files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// One file per entity, named after the table
    PerEntity,
    /// Every entity in a single file with this base name
    Merged(String),
}

/// Emit the loaded schema through `backend` into `out_dir`.
///
/// Per-entity emission stops at the first failure unless `keep_going` is set,
/// in which case failures are logged and reported in the result.
pub fn generate(
    command: &str,
    backend: &Backend,
    loaded: LoadedSchema,
    out_dir: &Path,
    layout: &Layout,
    keep_going: bool,
) -> Result<GenerateResult, Box<dyn Error>> {
    let mut result = GenerateResult {
        command: command.to_string(),
        skipped_inputs: loaded.skipped,
        ..Default::default()
    };
    let entities = &loaded.schema.entities;

    match layout {
        Layout::Merged(name) => {
            let data = backend.emit(entities)?;
            let path = join_filename(out_dir, name, backend.suffix());
            write_file(&path, &data)?;
            tracing::info!(path = %path.display(), "generated");
            result.files.push(GeneratedFile {
                path: path.display().to_string(),
                entities: entities.iter().map(|e| e.name.clone()).collect(),
            });
        }
        Layout::PerEntity => {
            for entity in entities {
                let data = match backend.emit(slice::from_ref(entity)) {
                    Ok(data) => data,
                    Err(e) if keep_going => {
                        tracing::warn!(entity = %entity.name, error = %e, "emit failed, entity skipped");
                        result.failed_entities.push(FailedEntity {
                            entity: entity.name.clone(),
                            error: e.to_string(),
                        });
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };
                let path = join_filename(out_dir, &entity.name, backend.suffix());
                write_file(&path, &data).map_err(|e| format!("{}: {}", entity.name, e))?;
                tracing::info!(path = %path.display(), "generated");
                result.files.push(GeneratedFile {
                    path: path.display().to_string(),
                    entities: vec![entity.name.clone()],
                });
            }
        }
    }
    Ok(result)
}
