//! sh-syntax - syntax trees for shell source
//!
//! This library defines the AST shared between a shell parser and its
//! consumers (formatters, linters, interpreters), together with the
//! canonical renderer that turns any tree back into valid shell source.

pub mod ast;
pub mod diagnostics;
pub mod token;

pub use ast::render::Node;
pub use ast::types::*;
pub use diagnostics::Diagnostic;
pub use token::Token;
