//! Conversion of Tree-sitter Go nodes into the tagcase syntax model.

use tree_sitter::Node;

use tagcase_core::ast::{Field, Position, StructType, TagLit, TypeExpr};

fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
}

fn position(node: &Node<'_>) -> Position {
    let start = node.start_position();
    Position::new(start.row + 1, start.column + 1)
        .with_span(node.start_byte(), node.end_byte() - node.start_byte())
}

fn first_named_child<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let child = node
        .named_children(&mut cursor)
        .find(|c| c.kind() != "comment");
    child
}

/// Converts a `struct_type` node.
#[must_use]
pub fn struct_type(node: &Node<'_>, src: &[u8]) -> StructType {
    let mut fields = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() != "field_declaration_list" {
            continue;
        }
        let mut list_cursor = child.walk();
        for decl in child.named_children(&mut list_cursor) {
            if decl.kind() == "field_declaration" {
                fields.push(field_declaration(&decl, src));
            }
        }
    }

    StructType {
        fields,
        position: position(node),
    }
}

/// Converts a `field_declaration` node.
#[must_use]
pub fn field_declaration(node: &Node<'_>, src: &[u8]) -> Field {
    let mut cursor = node.walk();
    let names: Vec<String> = node
        .children_by_field_name("name", &mut cursor)
        .map(|n| text(&n, src).to_owned())
        .collect();

    let declared = node
        .child_by_field_name("type")
        .map_or_else(|| TypeExpr::Other(String::new()), |t| type_expr(&t, src));

    // embedded `*T` carries the star as a bare token
    let ty = if names.is_empty() && has_star_token(node) {
        TypeExpr::Pointer(Box::new(declared))
    } else {
        declared
    };

    let tag = node
        .child_by_field_name("tag")
        .map(|t| TagLit::new(text(&t, src), position(&t)));

    Field {
        names,
        ty,
        tag,
        position: position(node),
    }
}

fn has_star_token(node: &Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|c| !c.is_named() && c.kind() == "*");
    found
}

/// Converts a type node into a [`TypeExpr`].
#[must_use]
pub fn type_expr(node: &Node<'_>, src: &[u8]) -> TypeExpr {
    let field = |name: &str| {
        node.child_by_field_name(name)
            .map_or_else(|| TypeExpr::Other(String::new()), |n| type_expr(&n, src))
    };

    match node.kind() {
        "type_identifier" | "identifier" => TypeExpr::Ident(text(node, src).to_owned()),
        "pointer_type" => {
            let inner = first_named_child(node)
                .map_or_else(|| TypeExpr::Other(String::new()), |n| type_expr(&n, src));
            TypeExpr::Pointer(Box::new(inner))
        }
        "array_type" => TypeExpr::Array {
            len: node
                .child_by_field_name("length")
                .map(|n| text(&n, src).to_owned())
                .unwrap_or_default(),
            elem: Box::new(field("element")),
        },
        "slice_type" => TypeExpr::Slice(Box::new(field("element"))),
        "map_type" => TypeExpr::Map {
            key: Box::new(field("key")),
            value: Box::new(field("value")),
        },
        "qualified_type" => TypeExpr::Selector {
            package: node
                .child_by_field_name("package")
                .map(|n| text(&n, src).to_owned())
                .unwrap_or_default(),
            name: node
                .child_by_field_name("name")
                .map(|n| text(&n, src).to_owned())
                .unwrap_or_default(),
        },
        "generic_type" => TypeExpr::Generic {
            base: Box::new(field("type")),
            args: node
                .child_by_field_name("type_arguments")
                .map(|args| type_arguments(&args, src))
                .unwrap_or_default(),
        },
        "channel_type" => TypeExpr::Chan(Box::new(field("value"))),
        "struct_type" => TypeExpr::Struct,
        "interface_type" => TypeExpr::Interface,
        "function_type" => TypeExpr::Func,
        _ => TypeExpr::Other(text(node, src).to_owned()),
    }
}

fn type_arguments(node: &Node<'_>, src: &[u8]) -> Vec<TypeExpr> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .map(|arg| {
            // newer grammars wrap each argument in `type_elem`
            if arg.kind() == "type_elem" {
                first_named_child(&arg)
                    .map_or_else(|| TypeExpr::Other(text(&arg, src).to_owned()), |t| type_expr(&t, src))
            } else {
                type_expr(&arg, src)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tagcase_core::ast::{StructType, SyntaxTree, TypeExpr};

    use crate::GoSource;

    fn fields_of(body: &str) -> StructType {
        let src = format!("package m\n\ntype T struct {{\n{body}\n}}\n");
        let parsed = GoSource::parse(src).unwrap();
        let mut first = None;
        parsed.for_each_struct(&mut |s| {
            if first.is_none() {
                first = Some(s.clone());
            }
        });
        first.unwrap()
    }

    fn ident(name: &str) -> TypeExpr {
        TypeExpr::Ident(name.into())
    }

    #[test]
    fn named_field_with_tag() {
        let s = fields_of("\tUserID int `json:\"user_id,omitempty\"`");
        let field = &s.fields[0];
        assert_eq!(field.names, vec!["UserID"]);
        assert_eq!(field.ty, ident("int"));
        let tag = field.tag.as_ref().unwrap();
        assert_eq!(tag.raw, "`json:\"user_id,omitempty\"`");
        assert_eq!(tag.position.line, 4);
        assert_eq!(tag.position.column, 13);
    }

    #[test]
    fn grouped_names_keep_order() {
        let s = fields_of("\tA, B string `json:\"b\"`");
        assert_eq!(s.fields[0].names, vec!["A", "B"]);
    }

    #[test]
    fn embedded_pointer_to_qualified_type() {
        let s = fields_of("\t*pkg.Thing `json:\"thing\"`");
        let field = &s.fields[0];
        assert!(field.names.is_empty());
        assert_eq!(
            field.ty,
            TypeExpr::Pointer(Box::new(TypeExpr::Selector {
                package: "pkg".into(),
                name: "Thing".into(),
            }))
        );
    }

    #[test]
    fn embedded_plain_type() {
        let s = fields_of("\tBase");
        assert!(s.fields[0].names.is_empty());
        assert_eq!(s.fields[0].ty, ident("Base"));
        assert!(s.fields[0].tag.is_none());
    }

    #[test]
    fn composite_types() {
        let s = fields_of(
            "\tA *[]int\n\tB [4]byte\n\tC map[string]*time.Time\n\tD chan int\n\tE func()\n\tF interface{}",
        );
        let types: Vec<String> = s.fields.iter().map(|f| f.ty.to_string()).collect();
        assert_eq!(
            types,
            vec![
                "*[]int",
                "[4]byte",
                "map[string]*time.Time",
                "chan int",
                "func(...)",
                "interface{...}",
            ]
        );
    }

    #[test]
    fn generic_instantiation() {
        let s = fields_of("\tItems List[int] `json:\"items\"`");
        assert_eq!(
            s.fields[0].ty,
            TypeExpr::Generic {
                base: Box::new(ident("List")),
                args: vec![ident("int")],
            }
        );
    }

    #[test]
    fn inline_struct_field() {
        let s = fields_of("\tMeta struct {\n\t\tX int\n\t} `json:\"meta\"`");
        assert_eq!(s.fields[0].ty, TypeExpr::Struct);
        assert!(s.fields[0].tag.is_some());
    }

    #[test]
    fn interpreted_string_tag() {
        let s = fields_of("\tName string \"json:\\\"name\\\"\"");
        assert_eq!(s.fields[0].tag.as_ref().unwrap().raw, "\"json:\\\"name\\\"\"");
    }
}
