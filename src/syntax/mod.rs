//! Syntax layer: position-annotated XML trees.
//!
//! - [`parse`] turns document text into a [`ParsedNode`] tree or a [`ParseError`]
//! - [`find_node_at`] answers "which node is at line L, column C"

mod node;
mod parser;
mod query;

pub use node::{NodeKind, ParsedNode};
pub use parser::{ParseError, parse};
pub use query::{find_node_at, find_path_at};
