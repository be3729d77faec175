//! Abstract Syntax Tree (AST) for shell source
//!
//! `types` defines the node hierarchy; `render` turns any node back into
//! canonical shell source text.

pub mod render;
pub mod types;
