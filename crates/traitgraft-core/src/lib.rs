//! Shared foundation for the traitgraft lowering pass.
//!
//! ## Modules
//!
//! - [`ast`]: the id-addressed arena tree the pass reads and rewrites
//! - [`error`]: the two failure domains (compile-time vs resolver runtime)
//! - [`marker`]: reserved placeholder spellings produced by the upstream
//!   lexical layer, and their surface counterparts
//! - [`names`]: explicit per-unit collision-free identifier generation
//! - [`runtime`]: executable reference model of the resolver contract
//! - [`span`]: source locations carried through rewrites

pub mod ast;
pub mod error;
pub mod marker;
pub mod names;
pub mod runtime;
pub mod span;

pub use ast::{Arena, BinOp, DeclKind, Node, NodeId, NodeKind, Param, UnOp};
pub use error::{CompileError, GraftError, ResolveError};
pub use names::FreshNames;
pub use runtime::{TokenSource, TraitToken, Value, resolve};
pub use span::Span;
