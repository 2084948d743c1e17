//! Output formatting for generator results.

use super::result::GenerateResult;
use crate::output::Outputable;

impl Outputable for GenerateResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Generate ({}):", self.command));
        if self.files.is_empty() {
            lines.push("  No files generated.".to_string());
        } else {
            lines.push(format!(
                "  Files: {}  Entities: {}",
                self.files.len(),
                self.entity_count()
            ));
            lines.push(String::new());
            for file in &self.files {
                lines.push(format!("  {} ({})", file.path, file.entities.join(", ")));
            }
        }

        if !self.skipped_inputs.is_empty() {
            lines.push(String::new());
            lines.push(format!("Skipped inputs ({}):", self.skipped_inputs.len()));
            for skipped in &self.skipped_inputs {
                lines.push(format!("  {}: {}", skipped.path, skipped.error));
            }
        }

        if !self.failed_entities.is_empty() {
            lines.push(String::new());
            lines.push(format!("Failed entities ({}):", self.failed_entities.len()));
            for failed in &self.failed_entities {
                lines.push(format!("  {}: {}", failed.entity, failed.error));
            }
        }

        lines.join("\n")
    }
}
