//! Backend emitters.
//!
//! Each emitter renders a slice of entities into one text artifact. Emitters
//! hold only their rendering configuration; the same descriptors can be fed to
//! every backend. [`Backend`] dispatches over the four of them.

pub mod ddl;
pub mod go_struct;
pub mod proto;
pub mod rapier;

pub use ddl::DdlEmitter;
pub use go_struct::GoStructEmitter;
pub use proto::ProtoEmitter;
pub use rapier::RapierEmitter;

use enum_dispatch::enum_dispatch;
use thiserror::Error;

use crate::schema::EntityDescriptor;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    #[error("{entity}: {message}")]
    Invalid { entity: String, message: String },
}

impl EmitError {
    pub fn invalid(entity: &str, message: impl Into<String>) -> Self {
        EmitError::Invalid {
            entity: entity.to_string(),
            message: message.into(),
        }
    }

    pub fn entity(&self) -> &str {
        match self {
            EmitError::Invalid { entity, .. } => entity,
        }
    }
}

/// Renders entities into a text artifact.
#[enum_dispatch]
pub trait Emitter {
    fn emit(&self, entities: &[EntityDescriptor]) -> Result<String, EmitError>;

    /// File suffix of the artifact, including the dot.
    fn suffix(&self) -> &'static str;
}

#[enum_dispatch(Emitter)]
#[derive(Debug, Clone)]
pub enum Backend {
    GoStruct(GoStructEmitter),
    Proto(ProtoEmitter),
    Ddl(DdlEmitter),
    Rapier(RapierEmitter),
}

/// "Generated by" banner shared by every backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub by_name: String,
    pub version: String,
    pub disabled: bool,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            by_name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            disabled: false,
        }
    }
}

impl Header {
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Banner lines with the given comment leader, followed by a blank line.
    pub fn render(&self, leader: &str) -> String {
        if self.disabled {
            return String::new();
        }
        format!(
            "{leader} Code generated by {}. DO NOT EDIT.\n{leader} version: {}\n\n",
            self.by_name, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_header() {
        let header = Header {
            by_name: "ormat".into(),
            version: "v1".into(),
            disabled: false,
        };
        assert_eq!(
            header.render("//"),
            "// Code generated by ormat. DO NOT EDIT.\n// version: v1\n\n"
        );
        assert_eq!(header.render("--").lines().next(), Some("-- Code generated by ormat. DO NOT EDIT."));
        assert_eq!(Header::disabled().render("//"), "");
    }

    #[rstest]
    fn test_backend_dispatch() {
        let backends = [
            Backend::from(GoStructEmitter::default()),
            Backend::from(ProtoEmitter::default()),
            Backend::from(DdlEmitter::default()),
            Backend::from(RapierEmitter::default()),
        ];
        let suffixes: Vec<_> = backends.iter().map(|b| b.suffix()).collect();
        assert_eq!(suffixes, vec![".go", ".proto", ".sql", ".rapier.gen.go"]);
    }

    #[rstest]
    fn test_error_carries_entity() {
        let err = EmitError::invalid("user", "bad name");
        assert_eq!(err.entity(), "user");
        assert_eq!(err.to_string(), "user: bad name");
    }
}
