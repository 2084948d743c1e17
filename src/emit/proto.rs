//! Protobuf message emitter.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{EmitError, Emitter, Header};
use crate::annotation;
use crate::schema::kind::{CanonicalKind, ProtoKind};
use crate::schema::{EntityDescriptor, FieldDescriptor};
use crate::utils::{NamingStyle, camel_case, is_proto_identifier, single_line};

const TIMESTAMP_IMPORT: &str = "google/protobuf/timestamp.proto";
const OPENAPIV2_IMPORT: &str = "protoc-gen-openapiv2/options/annotations.proto";
const OPENAPIV2_INTEGER: &str =
    "(grpc.gateway.protoc_gen_openapiv2.options.openapiv2_field) = { type: [ INTEGER ] }";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cardinality {
    Optional,
    Required,
}

impl Cardinality {
    /// proto3 has no `required` label; required fields are written bare.
    pub fn label(&self) -> &'static str {
        match self {
            Cardinality::Optional => "optional ",
            Cardinality::Required => "",
        }
    }
}

/// One rendered message field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageField {
    pub cardinality: Cardinality,
    pub kind: ProtoKind,
    pub type_name: String,
    pub name: String,
    pub column_name: String,
    pub comment: String,
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProtoEmitter {
    pub package_name: String,
    /// File options, e.g. `go_package`
    pub options: BTreeMap<String, String>,
    /// Field naming style; `None` keeps column names
    pub style: Option<NamingStyle>,
    pub disable_bool: bool,
    pub disable_timestamp: bool,
    pub header: Header,
}

impl ProtoEmitter {
    pub fn message_field(&self, field: &FieldDescriptor) -> MessageField {
        let (mut kind, type_name) = field.kind().into_proto_kind();
        let mut type_name = type_name.to_string();
        let mut annotations = Vec::new();

        match field.kind() {
            CanonicalKind::Bool if self.disable_bool => {
                kind = ProtoKind::Int32;
                type_name = kind.as_str().to_string();
            }
            CanonicalKind::Time if self.disable_timestamp => {
                kind = ProtoKind::Int64;
                type_name = kind.as_str().to_string();
                annotations.push(OPENAPIV2_INTEGER.to_string());
            }
            CanonicalKind::Int64 | CanonicalKind::Uint64 => {
                annotations.push(OPENAPIV2_INTEGER.to_string());
            }
            _ => {}
        }
        if let Some(custom) = annotation::pb_type(&field.comment) {
            kind = ProtoKind::Message;
            type_name = custom;
            annotations.clear();
        }

        let name = match self.style {
            Some(style) => style.apply(&field.name),
            None => field.name.clone(),
        };

        MessageField {
            cardinality: if field.nullable {
                Cardinality::Optional
            } else {
                Cardinality::Required
            },
            kind,
            type_name,
            name,
            column_name: field.name.clone(),
            comment: single_line(&annotation::strip(&field.comment)),
            annotations,
        }
    }

    fn render_message(&self, entity: &EntityDescriptor) -> Result<String, EmitError> {
        let message_name = camel_case(&entity.name);
        if !is_proto_identifier(&message_name) {
            return Err(EmitError::invalid(
                &entity.name,
                format!("`{}` is not a valid message name", message_name),
            ));
        }

        let mut out = String::new();
        let doc = single_line(&entity.comment);
        if doc.is_empty() {
            out.push_str(&format!("// {}\n", message_name));
        } else {
            out.push_str(&format!("// {} {}\n", message_name, doc));
        }
        out.push_str(&format!("message {} {{\n", message_name));
        for (i, field) in entity.fields.iter().enumerate() {
            let mf = self.message_field(field);
            if !is_proto_identifier(&mf.name) {
                return Err(EmitError::invalid(
                    &entity.name,
                    format!("`{}` is not a valid field name", mf.name),
                ));
            }
            if !mf.comment.is_empty() {
                out.push_str(&format!("  // {}\n", mf.comment));
            }
            let annotations = if mf.annotations.is_empty() {
                String::new()
            } else {
                format!(" [{}]", mf.annotations.join(", "))
            };
            out.push_str(&format!(
                "  {}{} {} = {}{};\n",
                mf.cardinality.label(),
                mf.type_name,
                mf.name,
                i + 1,
                annotations
            ));
        }
        out.push_str("}\n");
        Ok(out)
    }
}

impl Emitter for ProtoEmitter {
    fn emit(&self, entities: &[EntityDescriptor]) -> Result<String, EmitError> {
        let messages = entities
            .iter()
            .map(|e| self.render_message(e))
            .collect::<Result<Vec<_>, _>>()?;

        let fields: Vec<MessageField> = entities
            .iter()
            .flat_map(|e| e.fields.iter())
            .map(|f| self.message_field(f))
            .collect();
        let uses_timestamp = fields
            .iter()
            .any(|f| f.type_name == "google.protobuf.Timestamp");
        let uses_openapi = fields.iter().any(|f| !f.annotations.is_empty());

        let mut out = self.header.render("//");
        out.push_str("syntax = \"proto3\";\n\n");
        if !self.package_name.is_empty() {
            out.push_str(&format!("package {};\n\n", self.package_name));
        }
        if uses_timestamp || uses_openapi {
            if uses_timestamp {
                out.push_str(&format!("import \"{}\";\n", TIMESTAMP_IMPORT));
            }
            if uses_openapi {
                out.push_str(&format!("import \"{}\";\n", OPENAPIV2_IMPORT));
            }
            out.push('\n');
        }
        if !self.options.is_empty() {
            for (key, value) in &self.options {
                out.push_str(&format!("option {} = \"{}\";\n", key, value));
            }
            out.push('\n');
        }
        out.push_str(&messages.join("\n"));
        Ok(out)
    }

    fn suffix(&self) -> &'static str {
        ".proto"
    }
}
