//! Host-neutral syntax model consumed by the checker.
//!
//! Front ends (see `tagcase-go`) translate their parse trees into these
//! types. Only the parts needed for struct and field discovery are modelled.

/// Source position of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length of the node in bytes.
    pub length: usize,
}

impl Position {
    /// Creates a position from a line and column.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A type expression as written in a field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Plain identifier (`int`, `User`).
    Ident(String),
    /// Pointer type (`*T`).
    Pointer(Box<TypeExpr>),
    /// Fixed-length array type (`[N]T`).
    Array {
        /// Length expression as written.
        len: String,
        /// Element type.
        elem: Box<TypeExpr>,
    },
    /// Slice type (`[]T`).
    Slice(Box<TypeExpr>),
    /// Map type (`map[K]V`).
    Map {
        /// Key type.
        key: Box<TypeExpr>,
        /// Value type.
        value: Box<TypeExpr>,
    },
    /// Package-qualified reference (`pkg.Name`).
    Selector {
        /// Package qualifier.
        package: String,
        /// Selected identifier.
        name: String,
    },
    /// Generic instantiation (`List[T]`).
    Generic {
        /// Instantiated type.
        base: Box<TypeExpr>,
        /// Type arguments.
        args: Vec<TypeExpr>,
    },
    /// Inline struct type.
    Struct,
    /// Interface type.
    Interface,
    /// Function type.
    Func,
    /// Channel type.
    Chan(Box<TypeExpr>),
    /// Anything the front end does not model, with its source text.
    Other(String),
}

impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "{name}"),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Array { len, elem } => write!(f, "[{len}]{elem}"),
            Self::Slice(elem) => write!(f, "[]{elem}"),
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Selector { package, name } => write!(f, "{package}.{name}"),
            Self::Generic { base, args } => {
                write!(f, "{base}[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, "]")
            }
            Self::Struct => write!(f, "struct{{...}}"),
            Self::Interface => write!(f, "interface{{...}}"),
            Self::Func => write!(f, "func(...)"),
            Self::Chan(elem) => write!(f, "chan {elem}"),
            Self::Other(text) => write!(f, "{text}"),
        }
    }
}

/// Raw tag literal attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLit {
    /// Literal text including its delimiters (usually backticks).
    pub raw: String,
    /// Position of the literal.
    pub position: Position,
}

impl TagLit {
    /// Creates a tag literal.
    #[must_use]
    pub fn new(raw: impl Into<String>, position: Position) -> Self {
        Self {
            raw: raw.into(),
            position,
        }
    }
}

/// A field declaration inside a struct type.
///
/// `names` is empty for embedded fields and holds several entries for
/// grouped declarations such as `A, B int`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared identifiers, in source order.
    pub names: Vec<String>,
    /// Declared type.
    pub ty: TypeExpr,
    /// Tag literal, if any.
    pub tag: Option<TagLit>,
    /// Position of the declaration.
    pub position: Position,
}

impl Field {
    /// Creates a named field without a tag.
    #[must_use]
    pub fn named(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            names: vec![name.into()],
            ty,
            tag: None,
            position: Position::default(),
        }
    }

    /// Creates an embedded field without a tag.
    #[must_use]
    pub fn embedded(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
            tag: None,
            position: Position::default(),
        }
    }

    /// Attaches a tag literal.
    #[must_use]
    pub fn with_tag(mut self, raw: impl Into<String>) -> Self {
        self.tag = Some(TagLit::new(raw, self.position));
        self
    }
}

/// A struct type node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructType {
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Position of the `struct` keyword.
    pub position: Position,
}

impl StructType {
    /// Creates a struct type with the given fields.
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            position: Position::default(),
        }
    }
}

/// Access to the struct types of a parsed source.
///
/// Implementations must visit struct types in pre-order: an enclosing
/// struct is visited before any struct nested in its fields.
pub trait SyntaxTree {
    /// Calls `visit` for every struct type in the tree.
    fn for_each_struct(&self, visit: &mut dyn FnMut(&StructType));
}

/// An in-memory tree holding already-converted struct types.
#[derive(Debug, Clone, Default)]
pub struct SourceFile {
    /// Struct types in pre-order.
    pub structs: Vec<StructType>,
}

impl SourceFile {
    /// Creates a source file from struct types in pre-order.
    #[must_use]
    pub fn new(structs: Vec<StructType>) -> Self {
        Self { structs }
    }
}

impl SyntaxTree for SourceFile {
    fn for_each_struct(&self, visit: &mut dyn FnMut(&StructType)) {
        for node in &self.structs {
            visit(node);
        }
    }
}
