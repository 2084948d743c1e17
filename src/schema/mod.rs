//! Schema model.
//!
//! Raw facts are mapped through a dialect into canonical kinds, assembled into
//! entity descriptors, transformed by the option pipeline and name-resolved.
//! The resulting [`Schema`] is what the emitters render.

pub mod builder;
pub mod def;
pub mod descriptor;
pub mod facts;
pub mod go_type;
pub mod kind;
pub mod option;
pub mod resolve;
pub mod transform;

pub use builder::{BuildError, EntityBuilder};
pub use descriptor::{EntityDescriptor, FieldDescriptor, Schema};
pub use facts::SchemaFacts;
pub use kind::CanonicalKind;
pub use option::Options;
