//! Namespace inheritance: propagate provider visibility from enclosing
//! blocks into nested ones.
//!
//! Each namespace's effective provider set is the union of its own
//! providers and the own providers of every strict ancestor block that is
//! itself a namespace. The walk reads only own-provider prefixes, so the
//! result is independent of the order namespaces are processed in, and
//! running it again adds nothing. Must complete before rewriting: the
//! rewriter and emitter consume the final provider lists.

use crate::context::PassContext;

/// Propagate ancestor providers into every namespace.
pub fn propagate(ctx: &mut PassContext<'_>) {
    for index in 0..ctx.registry.len() {
        let block = ctx.registry.entry(index).block;

        // Nearest ancestor first, so inherited providers keep a
        // deterministic discovery order behind the namespace's own.
        let mut inherited = Vec::new();
        let mut current = ctx.parent(block);
        while let Some(ancestor) = current {
            if let Some(ancestor_index) = ctx.registry.index_of(ancestor) {
                inherited.extend_from_slice(ctx.registry.entry(ancestor_index).own_providers());
            }
            current = ctx.parent(ancestor);
        }

        let namespace = ctx.registry.entry_mut(index);
        for provider in inherited {
            if !namespace.providers.contains(&provider) {
                namespace.providers.push(provider);
            }
        }
    }
}
