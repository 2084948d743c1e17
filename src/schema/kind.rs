//! Canonical field kinds.
//!
//! Provides the closed, dialect-independent type system every column is mapped
//! into. Each kind knows how it renders for the backends via `go_type()`,
//! `into_proto_kind()` and `into_rapier_kind()`.

use serde::{Deserialize, Serialize};

use super::go_type::GoType;

/// A portable field kind.
///
/// The declaration order is load-bearing: the numeric predicates compare
/// ordinals, so `Int8..=Float64` must stay contiguous.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalKind {
    #[default]
    Invalid,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Int,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint,
    Float32,
    Float64,
    /// Fixed point, rendered as a string where a target has no decimal type
    Decimal,
    String,
    /// Enumerated string, rendered as a string
    Enum,
    Bytes,
    Time,
    Json,
    Uuid,
    Other,
}

impl CanonicalKind {
    pub const ALL: [CanonicalKind; 22] = [
        CanonicalKind::Invalid,
        CanonicalKind::Bool,
        CanonicalKind::Int8,
        CanonicalKind::Int16,
        CanonicalKind::Int32,
        CanonicalKind::Int64,
        CanonicalKind::Int,
        CanonicalKind::Uint8,
        CanonicalKind::Uint16,
        CanonicalKind::Uint32,
        CanonicalKind::Uint64,
        CanonicalKind::Uint,
        CanonicalKind::Float32,
        CanonicalKind::Float64,
        CanonicalKind::Decimal,
        CanonicalKind::String,
        CanonicalKind::Enum,
        CanonicalKind::Bytes,
        CanonicalKind::Time,
        CanonicalKind::Json,
        CanonicalKind::Uuid,
        CanonicalKind::Other,
    ];

    /// Go-flavored display name.
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalKind::Invalid => "invalid",
            CanonicalKind::Bool => "bool",
            CanonicalKind::Int8 => "int8",
            CanonicalKind::Int16 => "int16",
            CanonicalKind::Int32 => "int32",
            CanonicalKind::Int64 => "int64",
            CanonicalKind::Int => "int",
            CanonicalKind::Uint8 => "uint8",
            CanonicalKind::Uint16 => "uint16",
            CanonicalKind::Uint32 => "uint32",
            CanonicalKind::Uint64 => "uint64",
            CanonicalKind::Uint => "uint",
            CanonicalKind::Float32 => "float32",
            CanonicalKind::Float64 => "float64",
            CanonicalKind::Decimal | CanonicalKind::String | CanonicalKind::Enum => "string",
            CanonicalKind::Bytes => "[]byte",
            CanonicalKind::Time => "time.Time",
            CanonicalKind::Json => "json.RawMessage",
            CanonicalKind::Uuid => "[16]byte",
            CanonicalKind::Other => "other",
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != CanonicalKind::Invalid
    }

    pub fn is_bool(&self) -> bool {
        *self == CanonicalKind::Bool
    }

    pub fn is_time(&self) -> bool {
        *self == CanonicalKind::Time
    }

    pub fn is_numeric(&self) -> bool {
        *self >= CanonicalKind::Int8 && *self <= CanonicalKind::Float64
    }

    pub fn is_float(&self) -> bool {
        matches!(self, CanonicalKind::Float32 | CanonicalKind::Float64)
    }

    pub fn is_integer(&self) -> bool {
        self.is_numeric() && !self.is_float()
    }

    /// Default Go type for this kind.
    pub fn go_type(&self) -> GoType {
        GoType::for_kind(*self)
    }

    /// Protobuf rendering: the scalar kind and the type name written in a message.
    pub fn into_proto_kind(self) -> (ProtoKind, &'static str) {
        let kind = match self {
            CanonicalKind::Bool => ProtoKind::Bool,
            CanonicalKind::Int8 | CanonicalKind::Int16 | CanonicalKind::Int32 => ProtoKind::Int32,
            CanonicalKind::Int64 | CanonicalKind::Int => ProtoKind::Int64,
            CanonicalKind::Uint8 | CanonicalKind::Uint16 | CanonicalKind::Uint32 => {
                ProtoKind::Uint32
            }
            CanonicalKind::Uint64 | CanonicalKind::Uint => ProtoKind::Uint64,
            CanonicalKind::Float32 => ProtoKind::Float,
            CanonicalKind::Float64 => ProtoKind::Double,
            CanonicalKind::Bytes | CanonicalKind::Uuid => ProtoKind::Bytes,
            CanonicalKind::Time => {
                return (ProtoKind::Message, "google.protobuf.Timestamp");
            }
            CanonicalKind::Invalid
            | CanonicalKind::Decimal
            | CanonicalKind::String
            | CanonicalKind::Enum
            | CanonicalKind::Json
            | CanonicalKind::Other => ProtoKind::String,
        };
        (kind, kind.as_str())
    }

    /// Query-builder field kind.
    pub fn into_rapier_kind(self) -> RapierKind {
        match self {
            CanonicalKind::Bool => RapierKind::Bool,
            CanonicalKind::Int8 => RapierKind::Int8,
            CanonicalKind::Int16 => RapierKind::Int16,
            CanonicalKind::Int32 => RapierKind::Int32,
            CanonicalKind::Int64 => RapierKind::Int64,
            CanonicalKind::Int => RapierKind::Int,
            CanonicalKind::Uint8 => RapierKind::Uint8,
            CanonicalKind::Uint16 => RapierKind::Uint16,
            CanonicalKind::Uint32 => RapierKind::Uint32,
            CanonicalKind::Uint64 => RapierKind::Uint64,
            CanonicalKind::Uint => RapierKind::Uint,
            CanonicalKind::Float32 => RapierKind::Float32,
            CanonicalKind::Float64 => RapierKind::Float64,
            CanonicalKind::Decimal => RapierKind::Decimal,
            CanonicalKind::String | CanonicalKind::Enum => RapierKind::String,
            CanonicalKind::Bytes => RapierKind::Bytes,
            CanonicalKind::Time => RapierKind::Time,
            CanonicalKind::Invalid
            | CanonicalKind::Json
            | CanonicalKind::Uuid
            | CanonicalKind::Other => RapierKind::Field,
        }
    }
}

impl std::fmt::Display for CanonicalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Protobuf scalar kinds used by the message emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtoKind {
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float,
    Double,
    String,
    Bytes,
    /// A message type; the type name comes alongside
    Message,
}

impl ProtoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtoKind::Bool => "bool",
            ProtoKind::Int32 => "int32",
            ProtoKind::Int64 => "int64",
            ProtoKind::Uint32 => "uint32",
            ProtoKind::Uint64 => "uint64",
            ProtoKind::Float => "float",
            ProtoKind::Double => "double",
            ProtoKind::String => "string",
            ProtoKind::Bytes => "bytes",
            ProtoKind::Message => "message",
        }
    }
}

/// Typed field accessors of the query-builder layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RapierKind {
    Field,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Int,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint,
    Float32,
    Float64,
    String,
    Decimal,
    Bytes,
    Time,
}

impl RapierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RapierKind::Field => "Field",
            RapierKind::Bool => "Bool",
            RapierKind::Int8 => "Int8",
            RapierKind::Int16 => "Int16",
            RapierKind::Int32 => "Int32",
            RapierKind::Int64 => "Int64",
            RapierKind::Int => "Int",
            RapierKind::Uint8 => "Uint8",
            RapierKind::Uint16 => "Uint16",
            RapierKind::Uint32 => "Uint32",
            RapierKind::Uint64 => "Uint64",
            RapierKind::Uint => "Uint",
            RapierKind::Float32 => "Float32",
            RapierKind::Float64 => "Float64",
            RapierKind::String => "String",
            RapierKind::Decimal => "Decimal",
            RapierKind::Bytes => "Bytes",
            RapierKind::Time => "Time",
        }
    }
}
