//! Verifier: assert no placeholder markers survive the pass.
//!
//! A read-only sweep over the whole unit. Any leftover reserved label or
//! placeholder property means a marker escaped every namespace's governed
//! subtree, which almost always means a trait access with no provider
//! declaration anywhere in its ancestor chain. That is a compile-time
//! error here, not a runtime one later.

use traitgraft_core::{Arena, CompileError, NodeId, NodeKind, marker};

/// Reject the unit if any placeholder marker remains in the tree.
pub fn verify(arena: &Arena, root: NodeId) -> Result<(), CompileError> {
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        match arena.kind(id) {
            NodeKind::Labeled { label, .. } if label == marker::TRAITS_LABEL => {
                return Err(CompileError::UnresolvedMarker {
                    span: arena.span(id),
                });
            }
            NodeKind::Ident { name } if name == marker::TRAIT_REF_PROP => {
                return Err(CompileError::UnresolvedMarker {
                    span: arena.span(id),
                });
            }
            _ => {}
        }
        arena.visit_children(id, &mut |child| stack.push(child));
    }
    Ok(())
}
