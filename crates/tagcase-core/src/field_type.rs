//! Field type shape classification.

use crate::ast::TypeExpr;

/// Base type named by an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// `bool`
    Bool,
    /// `string`
    String,
    /// `int`
    Int,
    /// `int8`
    Int8,
    /// `int16`
    Int16,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `uint`
    Uint,
    /// `uint8`
    Uint8,
    /// `uint16`
    Uint16,
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `uintptr`
    Uintptr,
    /// `float32`
    Float32,
    /// `float64`
    Float64,
    /// `complex64`
    Complex64,
    /// `complex128`
    Complex128,
    /// `byte`
    Byte,
    /// `rune`
    Rune,
    /// `error`
    Error,
    /// `any`
    Any,
    /// Any other (user-defined or imported) type name.
    Named,
}

impl BaseType {
    /// Classifies a type identifier.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "bool" => Self::Bool,
            "string" => Self::String,
            "int" => Self::Int,
            "int8" => Self::Int8,
            "int16" => Self::Int16,
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "uint" => Self::Uint,
            "uint8" => Self::Uint8,
            "uint16" => Self::Uint16,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "uintptr" => Self::Uintptr,
            "float32" => Self::Float32,
            "float64" => Self::Float64,
            "complex64" => Self::Complex64,
            "complex128" => Self::Complex128,
            "byte" => Self::Byte,
            "rune" => Self::Rune,
            "error" => Self::Error,
            "any" => Self::Any,
            _ => Self::Named,
        }
    }
}

/// One element of a field type shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Pointer qualifier.
    Pointer,
    /// Fixed-length array qualifier.
    Array,
    /// Slice qualifier.
    Slice,
    /// Map qualifier (applies to the value type).
    Map,
    /// Terminal base type.
    Base(BaseType),
}

/// Classifies a type expression into its shape, outermost qualifier first.
///
/// `*[]int` yields `[Pointer, Slice, Base(Int)]`. Map keys are not part of
/// the shape and package qualifiers are dropped. Returns an empty vector for
/// shapes that cannot be classified (inline structs, interfaces, functions,
/// channels, generic instantiations).
#[must_use]
pub fn classify(ty: &TypeExpr) -> Vec<FieldType> {
    let mut shape = Vec::new();
    if classify_into(ty, &mut shape) {
        shape
    } else {
        Vec::new()
    }
}

fn classify_into(ty: &TypeExpr, shape: &mut Vec<FieldType>) -> bool {
    match ty {
        TypeExpr::Ident(name) => {
            shape.push(FieldType::Base(BaseType::parse(name)));
            true
        }
        TypeExpr::Selector { name, .. } => {
            shape.push(FieldType::Base(BaseType::parse(name)));
            true
        }
        TypeExpr::Pointer(inner) => {
            shape.push(FieldType::Pointer);
            classify_into(inner, shape)
        }
        TypeExpr::Array { elem, .. } => {
            shape.push(FieldType::Array);
            classify_into(elem, shape)
        }
        TypeExpr::Slice(elem) => {
            shape.push(FieldType::Slice);
            classify_into(elem, shape)
        }
        TypeExpr::Map { value, .. } => {
            shape.push(FieldType::Map);
            classify_into(value, shape)
        }
        TypeExpr::Generic { .. }
        | TypeExpr::Struct
        | TypeExpr::Interface
        | TypeExpr::Func
        | TypeExpr::Chan(_)
        | TypeExpr::Other(_) => false,
    }
}
