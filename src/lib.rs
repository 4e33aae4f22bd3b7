//! traitgraft: structural trait dispatch for a dynamic language, lowered
//! to primitive tree constructs.
//!
//! Code declares, per lexical block, expressions that supply named
//! capabilities (`use traits * from <expr>;`), and reaches a capability's
//! unique token with `object.*name`. An external lexical layer encodes
//! that syntax as placeholder tree shapes; this crate rewrites the
//! placeholders into dynamic-key member accesses plus one synthesized
//! runtime resolver per compiled unit, so any standard evaluator for the
//! target language can run the result unmodified.
//!
//! The pipeline lives in [`traitgraft_pass`]; the tree, errors, marker
//! spellings, and the resolver's runtime reference model live in
//! [`traitgraft_core`].
//!
//! ```
//! use traitgraft::{Arena, Span, marker, transform};
//!
//! let sp = Span::default();
//! let mut arena = Arena::new();
//!
//! // use traits * from providers;
//! let providers = arena.ident("providers", sp);
//! let stmt = arena.expr_stmt(providers, sp);
//! let anchor = arena.labeled(marker::TRAITS_LABEL, stmt, sp);
//!
//! // obj.*value;
//! let obj = arena.ident("obj", sp);
//! let placeholder = arena.ident(marker::TRAIT_REF_PROP, sp);
//! let inner = arena.member(obj, placeholder, false, sp);
//! let name = arena.ident("value", sp);
//! let access = arena.member(inner, name, false, sp);
//! let access_stmt = arena.expr_stmt(access, sp);
//!
//! let program = arena.program(vec![anchor, access_stmt], sp);
//! let stats = transform(&mut arena, program).unwrap();
//! assert_eq!(stats.accesses_rewritten, 1);
//! assert_eq!(stats.declarations_emitted, 1);
//! ```

pub use traitgraft_core::{
    Arena, BinOp, CompileError, DeclKind, FreshNames, GraftError, Node, NodeId, NodeKind, Param,
    ResolveError, Span, TokenSource, TraitToken, UnOp, Value, marker, resolve,
};
pub use traitgraft_pass::{Namespace, NamespaceRegistry, PassContext, TransformStats, transform};
