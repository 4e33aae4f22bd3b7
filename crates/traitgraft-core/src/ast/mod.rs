//! The mutable tree the pass operates on.
//!
//! - [`node`]: the closed [`NodeKind`] vocabulary
//! - [`arena`]: the id-addressed [`Arena`] with traversal and rewrite helpers

pub mod arena;
pub mod node;

pub use arena::{Arena, Node, NodeId};
pub use node::{BinOp, DeclKind, NodeKind, Param, UnOp};
