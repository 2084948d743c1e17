//! Shared test utilities for execute and integration tests.
//!
//! This module provides common helpers used across command execute tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::commands::{Execute, RunContext};
use crate::config::ConfigFile;
use crate::dialect::DialectRegistry;

/// Two tables: `user` (soft delete, a `TableName` column, nullable time) and
/// `post` (composite unique index, foreign key to `user`).
pub const SCHEMA_FACTS: &str = r#"{
    "name": "app",
    "tables": [
        {
            "name": "user",
            "comment": "user account",
            "columns": [
                {"name": "id", "type": "bigint unsigned", "auto_increment": true},
                {"name": "name", "type": "varchar(64)", "comment": "display name"},
                {"name": "is_admin", "type": "tinyint(1)", "default": {"literal": "0"}},
                {"name": "table_name", "type": "varchar(32)"},
                {"name": "login_at", "type": "datetime", "nullable": true},
                {"name": "deleted_at", "type": "bigint", "default": {"literal": "0"}}
            ],
            "indexes": [
                {"name": "PRIMARY", "columns": ["id"], "unique": true, "primary": true}
            ]
        },
        {
            "name": "post",
            "columns": [
                {"name": "id", "type": "bigint unsigned", "auto_increment": true},
                {"name": "user_id", "type": "bigint unsigned"},
                {"name": "title", "type": "varchar(128)"},
                {"name": "created_at", "type": "datetime", "default": {"expr": "CURRENT_TIMESTAMP"}}
            ],
            "indexes": [
                {"name": "PRIMARY", "columns": ["id"], "unique": true, "primary": true},
                {"name": "uk_user_title", "columns": ["user_id", "title"], "unique": true}
            ],
            "foreign_keys": [
                {"symbol": "fk_post_user", "columns": ["user_id"], "ref_table": "user",
                 "ref_columns": ["id"], "on_update": "RESTRICT", "on_delete": "CASCADE"}
            ]
        }
    ]
}"#;

/// Write `content` as `schema.json` in a fresh temp dir.
///
/// The directory doubles as the output root for the command under test.
pub fn facts_dir(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("schema.json");
    fs::write(&path, content).expect("Failed to write facts file");
    (dir, path)
}

/// Context with the built-in dialects and no config file.
pub fn run_context() -> RunContext {
    RunContext {
        registry: DialectRegistry::with_builtins(),
        config: ConfigFile::default(),
    }
}

/// Execute a command with the default context.
pub fn execute_cmd<C: Execute>(cmd: C) -> Result<C::Output, Box<dyn std::error::Error>> {
    cmd.execute(&run_context())
}
