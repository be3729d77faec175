//! Positioned diagnostics
//!
//! The tree layer itself never fails; this is the value type an external
//! error reporter builds from a [`File`]'s name and a node's position when
//! it has something to say about the source.

use std::fmt;
use thiserror::Error;

use crate::ast::render::Node;
use crate::ast::types::{File, Position};

/// A message anchored to a location in a named source.
#[derive(Debug, Clone, Error)]
pub struct Diagnostic {
    pub message: String,
    /// Source identifier, normally [`File::name`].
    pub source_name: String,
    pub position: Position,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, source_name: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            source_name: source_name.into(),
            position,
        }
    }

    /// Anchor a message at a node within a file.
    pub fn for_node(message: impl Into<String>, file: &File, node: &dyn Node) -> Self {
        Self::new(message, file.name.clone(), node.pos())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.position.is_known() {
            write!(
                f,
                "{}:{}:{}: {}",
                self.source_name, self.position.line, self.position.column, self.message
            )
        } else {
            write!(f, "{}: {}", self.source_name, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::types::Ast;

    #[test]
    fn test_display_with_position() {
        let d = Diagnostic::new("unexpected token", "script.sh", Position::new(3, 7, 42));
        assert_eq!(d.to_string(), "script.sh:3:7: unexpected token");
    }

    #[test]
    fn test_display_unknown_position() {
        let d = Diagnostic::new("empty input", "script.sh", Position::UNKNOWN);
        assert_eq!(d.to_string(), "script.sh: empty input");
    }

    #[test]
    fn test_for_node() {
        let mut stmt = Ast::stmt(Ast::command(vec![Ast::lit_word("echo")]));
        stmt.position = Position::new(2, 1, 10);
        let file = Ast::file("demo.sh", vec![stmt]);
        let d = Diagnostic::for_node("unreachable statement", &file, &file.stmts[0]);
        assert_eq!(d.to_string(), "demo.sh:2:1: unreachable statement");
    }
}
