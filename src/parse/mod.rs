//! Parsing boundary: adapts the external tree-sitter parser.
//!
//! Tree construction is an external collaborator's concern; everything past
//! this module operates on the lowered [`crate::tree::SyntaxTree`] and never
//! touches tree-sitter types directly.

pub mod ast;
pub mod python;
