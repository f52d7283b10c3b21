//! Go parsing with Tree-sitter.

use tree_sitter::{Language, Parser, Tree};

use tagcase_core::ast::{StructType, SyntaxTree};

use crate::convert;

/// Errors raised while parsing Go source.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The Go grammar could not be loaded into the parser.
    #[error("failed to load go grammar: {0}")]
    Language(String),
    /// The parser produced no tree.
    #[error("parser returned no syntax tree")]
    NoTree,
}

/// Parses Go source files.
pub struct GoParser {
    language: Language,
}

impl GoParser {
    /// Creates a new Go parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    /// File extensions this parser handles.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        &[".go"]
    }

    /// Parses `source` into a tree.
    ///
    /// Tree-sitter recovers from syntax errors, so malformed input still
    /// yields a tree; check [`GoSource::has_errors`].
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or no tree is produced.
    pub fn parse(&self, source: impl Into<String>) -> Result<GoSource, ParseError> {
        let source = source.into();
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Language(e.to_string()))?;
        let tree = parser.parse(source.as_bytes(), None).ok_or(ParseError::NoTree)?;
        Ok(GoSource { source, tree })
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed Go file.
pub struct GoSource {
    source: String,
    tree: Tree,
}

impl GoSource {
    /// Parses `source` with a fresh [`GoParser`].
    ///
    /// # Errors
    ///
    /// See [`GoParser::parse`].
    pub fn parse(source: impl Into<String>) -> Result<Self, ParseError> {
        GoParser::new().parse(source)
    }

    /// Returns the source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true if Tree-sitter had to recover from syntax errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

impl SyntaxTree for GoSource {
    fn for_each_struct(&self, visit: &mut dyn FnMut(&StructType)) {
        let src = self.source.as_bytes();
        let mut cursor = self.tree.walk();

        loop {
            let node = cursor.node();
            if node.kind() == "struct_type" {
                visit(&convert::struct_type(&node, src));
            }

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structs(src: &str) -> Vec<StructType> {
        let parsed = GoSource::parse(src).unwrap();
        let mut out = Vec::new();
        parsed.for_each_struct(&mut |s| out.push(s.clone()));
        out
    }

    #[test]
    fn finds_top_level_struct() {
        let s = structs("package m\n\ntype User struct {\n\tName string `json:\"name\"`\n}\n");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].fields.len(), 1);
        assert_eq!(s[0].position.line, 3);
        assert_eq!(s[0].position.column, 11);
    }

    #[test]
    fn nested_structs_come_after_parent() {
        let s = structs(
            "package m\n\ntype Outer struct {\n\tA int\n\tInner struct {\n\t\tB int\n\t\tC int\n\t}\n}\n",
        );
        let sizes: Vec<_> = s.iter().map(|n| n.fields.len()).collect();
        assert_eq!(sizes, vec![2, 2]);
    }

    #[test]
    fn structs_inside_functions_are_found() {
        let s = structs(
            "package m\n\nfunc f() {\n\tv := struct {\n\t\tX int `json:\"x\"`\n\t}{}\n\t_ = v\n}\n",
        );
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn empty_source_has_no_structs() {
        assert!(structs("").is_empty());
        assert!(structs("package m\n").is_empty());
    }

    #[test]
    fn syntax_errors_are_flagged() {
        let parsed = GoSource::parse("package m\ntype X struct {\n").unwrap();
        assert!(parsed.has_errors());
        let clean = GoSource::parse("package m\n").unwrap();
        assert!(!clean.has_errors());
    }
}
