//! The traitgraft lowering pass.
//!
//! Rewrites the trait-dispatch extension's placeholder tree shapes into
//! primitive constructs any standard evaluator for the target language can
//! execute: dynamic-key member accesses plus one synthesized resolver
//! routine per compiled unit.
//!
//! ## Pipeline
//!
//! Six stages, each run to completion over the same in-memory tree:
//!
//! 1. [`registry`]: discover provider statements, group them by enclosing
//!    block into namespaces
//! 2. [`inherit`]: propagate provider visibility from enclosing blocks
//!    into nested namespaces
//! 3. [`rewrite`]: convert trait accesses into dynamic-key accesses,
//!    lazily triggering [`synth`] for the shared resolver routine
//! 4. [`emit`]: insert resolver-call declarations, delete anchors
//! 5. [`verify`]: assert no placeholder markers remain (read-only)
//! 6. [`patch`]: restore surface spellings inside literal text
//!
//! The pass is single-threaded and one-shot per unit; any compile-time
//! error aborts it without producing output.

pub mod context;
pub mod emit;
pub mod inherit;
pub mod patch;
pub mod registry;
pub mod rewrite;
pub mod synth;
pub mod verify;

pub use context::PassContext;
pub use registry::{Namespace, NamespaceRegistry};

use traitgraft_core::{Arena, CompileError, NodeId};

/// What one run of the pass did to a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformStats {
    /// Namespaces discovered (provider-declaring blocks).
    pub namespaces: usize,
    /// Trait accesses rewritten (including computed-name fallbacks).
    pub accesses_rewritten: usize,
    /// Resolver-call declarations emitted.
    pub declarations_emitted: usize,
    /// String/template literals whose text was restored.
    pub literals_patched: usize,
}

/// Run the whole pipeline over one compiled unit.
pub fn transform(arena: &mut Arena, program: NodeId) -> Result<TransformStats, CompileError> {
    let (namespaces, accesses_rewritten, declarations_emitted) = {
        let mut ctx = PassContext::new(arena, program);
        registry::collect(&mut ctx)?;
        inherit::propagate(&mut ctx);
        let accesses = rewrite::rewrite(&mut ctx)?;
        let declarations = emit::emit(&mut ctx);
        (ctx.registry.len(), accesses, declarations)
    };
    verify::verify(arena, program)?;
    let literals_patched = patch::patch_literals(arena, program);
    Ok(TransformStats {
        namespaces,
        accesses_rewritten,
        declarations_emitted,
        literals_patched,
    })
}
