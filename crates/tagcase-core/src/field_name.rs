//! Canonical field name resolution.

use crate::ast::{Field, TypeExpr};

/// Errors raised while inspecting a field declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field type cannot be reduced to a name or a shape.
    #[error("unsupported type expression: {0}")]
    UnsupportedType(String),
}

/// Resolves the name tags on this field are checked against.
///
/// The last non-empty declared identifier wins, so `A, B int` resolves to
/// `B`. Embedded fields take the name of their (dereferenced, unqualified)
/// type: `*pkg.Thing` resolves to `Thing`.
///
/// # Errors
///
/// Returns [`FieldError::UnsupportedType`] for an embedded field whose type
/// is not an identifier, pointer or selector.
pub fn resolve_field_name(field: &Field) -> Result<String, FieldError> {
    if let Some(name) = field.names.iter().rev().find(|n| !n.is_empty()) {
        return Ok(name.clone());
    }
    type_name(&field.ty)
}

fn type_name(ty: &TypeExpr) -> Result<String, FieldError> {
    match ty {
        TypeExpr::Ident(name) => Ok(name.clone()),
        TypeExpr::Pointer(inner) => type_name(inner),
        TypeExpr::Selector { name, .. } => Ok(name.clone()),
        other => Err(FieldError::UnsupportedType(other.to_string())),
    }
}
