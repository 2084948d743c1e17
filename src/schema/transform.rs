//! Field transformation pipeline.
//!
//! Rules run in a fixed order: soft delete, integer widening, bool-to-int,
//! nullable wrappers, then tag synthesis. Type rules key off the canonical
//! kind, which none of them change, so running the pipeline twice is a no-op.

use super::descriptor::FieldDescriptor;
use super::go_type::GoType;
use super::kind::{CanonicalKind, RapierKind};
use super::option::Options;
use crate::annotation;
use crate::utils::NamingStyle;

pub const SOFT_DELETE_COLUMN: &str = "deleted_at";

pub fn transform_field(field: &mut FieldDescriptor, options: &Options) {
    // The soft-delete marker is final; later type rules leave it alone.
    if !apply_soft_delete(field) {
        apply_widening(field, options);
        apply_bool_int(field, options);
        apply_null_wrapper(field, options);
    }
    synthesize_tags(field, options);
}

fn apply_soft_delete(field: &mut FieldDescriptor) -> bool {
    if field.name != SOFT_DELETE_COLUMN || !field.kind().is_integer() {
        return false;
    }
    field.go_type = GoType::soft_delete(field.kind());
    field.go_pointer = false;
    true
}

fn apply_widening(field: &mut FieldDescriptor, options: &Options) {
    let kind = field.kind();
    let widened = match kind {
        CanonicalKind::Int32 if options.enable_integer_int => Some(("int", RapierKind::Int)),
        CanonicalKind::Uint32 if options.enable_integer_int => Some(("uint", RapierKind::Uint)),
        CanonicalKind::Int8 | CanonicalKind::Int16 | CanonicalKind::Int32 if options.enable_int => {
            Some(("int", RapierKind::Int))
        }
        CanonicalKind::Uint8 | CanonicalKind::Uint16 | CanonicalKind::Uint32
            if options.enable_int =>
        {
            Some(("uint", RapierKind::Uint))
        }
        _ => None,
    };
    if let Some((ident, rapier_kind)) = widened {
        field.go_type = GoType::new(kind, ident, "");
        field.rapier_kind = rapier_kind;
    }
}

fn apply_bool_int(field: &mut FieldDescriptor, options: &Options) {
    if options.enable_bool_int && field.kind().is_bool() {
        field.go_type = GoType::new(CanonicalKind::Bool, "int", "");
        field.rapier_kind = RapierKind::Int;
    }
}

fn apply_null_wrapper(field: &mut FieldDescriptor, options: &Options) {
    if !(options.disable_null_to_point && field.nullable) {
        return;
    }
    if let Some(wrapper) = GoType::sql_null(field.kind()) {
        field.go_type = wrapper;
        field.go_pointer = false;
    }
}

fn synthesize_tags(field: &mut FieldDescriptor, options: &Options) {
    for (tag, style) in &options.tags {
        let Some(value) = tag_value(field, tag, style, options) else {
            continue;
        };
        let rendered = format!("{}:\"{}\"", tag, value);
        if !field.tags.contains(&rendered) {
            field.tags.push(rendered);
        }
    }
}

fn tag_value(field: &FieldDescriptor, tag: &str, style: &str, options: &Options) -> Option<String> {
    let is_json = tag == "json";
    if is_json {
        if let Some(explicit) = annotation::json_tag(&field.comment) {
            return Some(explicit);
        }
    }

    let Some(naming) = NamingStyle::parse(style) else {
        tracing::warn!(tag, style, field = %field.name, "unknown naming style, tag skipped");
        return None;
    };
    let mut value = naming.apply(&field.name);
    if value.is_empty() {
        return None;
    }

    if !options.ignore_omitempty {
        value.push_str(",omitempty");
    }
    if is_json && annotation::has_affix(&field.comment) {
        value.push_str(",string");
    }
    Some(value)
}
