//! Member rewriter: convert trait-access markers into dynamic-key accesses.
//!
//! For each namespace, walks its block's subtree without descending into
//! nested namespace blocks (those carry the outer providers through
//! inheritance and rewrite their own markers independently). Every marker
//! with a literal trait name is rewritten to `object[<generated>]`, where
//! the generated identifier is memoized per (namespace, name) and later
//! bound by the emitter.
//!
//! Known limitation, preserved deliberately: a *computed* trait access
//! (`obj.*[expr]`) has no statically known name, so the construct collapses
//! to a plain computed access `obj[expr]` on the underlying object and the
//! dispatch semantics are silently dropped.

use traitgraft_core::{Arena, CompileError, NodeId, NodeKind, marker};

use crate::context::PassContext;
use crate::synth;

/// Rewrite every trait access governed by some namespace. Returns the
/// number of accesses rewritten across the unit.
pub fn rewrite(ctx: &mut PassContext<'_>) -> Result<usize, CompileError> {
    let mut rewritten = 0;
    for index in 0..ctx.registry.len() {
        let block = ctx.registry.entry(index).block;
        walk(ctx, index, block, block, &mut rewritten)?;
    }
    Ok(rewritten)
}

/// Whether `id` is the inner marker shape: a non-computed member access
/// through the reserved placeholder property.
fn is_placeholder_member(arena: &Arena, id: NodeId) -> bool {
    let NodeKind::Member {
        property,
        computed: false,
        ..
    } = arena.kind(id)
    else {
        return false;
    };
    matches!(arena.kind(*property), NodeKind::Ident { name } if name == marker::TRAIT_REF_PROP)
}

fn walk(
    ctx: &mut PassContext<'_>,
    ns_index: usize,
    ns_block: NodeId,
    id: NodeId,
    rewritten: &mut usize,
) -> Result<(), CompileError> {
    if id != ns_block && ctx.registry.is_namespace(id) {
        return Ok(());
    }

    if let NodeKind::Member {
        object,
        property,
        computed,
    } = ctx.arena.kind(id)
    {
        let (object, property, computed) = (*object, *property, *computed);
        let span = ctx.arena.span(id);

        if is_placeholder_member(ctx.arena, id) {
            // An inner marker with no outer member consuming it.
            return Err(CompileError::MalformedTraitAccess { span });
        }

        if is_placeholder_member(ctx.arena, object) {
            let NodeKind::Member {
                object: underlying, ..
            } = ctx.arena.kind(object)
            else {
                return Err(CompileError::MalformedTraitAccess { span });
            };
            let underlying = *underlying;

            if computed {
                // Dynamic trait name: fall back to plain access.
                ctx.arena.replace(
                    id,
                    NodeKind::Member {
                        object: underlying,
                        property,
                        computed: true,
                    },
                );
            } else {
                let NodeKind::Ident { name } = ctx.arena.kind(property) else {
                    return Err(CompileError::MalformedTraitAccess { span });
                };
                let name = name.clone();
                let generated = ctx
                    .registry
                    .entry_mut(ns_index)
                    .bind(&name, &mut ctx.names);
                synth::ensure_resolver(ctx);
                let key = ctx.arena.ident(generated, span);
                ctx.arena.replace(
                    id,
                    NodeKind::Member {
                        object: underlying,
                        property: key,
                        computed: true,
                    },
                );
            }
            *rewritten += 1;
        }
    }

    // Children are taken after any rewrite, so the detached marker is
    // never revisited while the underlying object still is.
    for child in ctx.arena.children(id) {
        walk(ctx, ns_index, ns_block, child, rewritten)?;
    }
    Ok(())
}
