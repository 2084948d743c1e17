//! ormat library - schema normalization and multi-target code generation
//!
//! Maps relational schema facts through a dialect into canonical types,
//! builds per-table entity descriptors under a set of options, and renders
//! them as Go structs, protobuf messages, DDL or rapier field descriptors.

pub mod annotation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dialect;
pub mod emit;
pub mod output;
pub mod schema;
pub mod utils;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
