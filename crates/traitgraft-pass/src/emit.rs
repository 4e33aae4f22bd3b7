//! Code emitter: materialize resolver-call declarations and retire anchors.
//!
//! For every namespace with at least one requested trait name, one
//! declaration per name is inserted immediately before the namespace's
//! first anchor statement:
//!
//! ```text
//! const _value = _resolveTrait("value", <providers...>);
//! ```
//!
//! Arguments are the trait-name literal followed by the namespace's
//! effective providers in discovery order; provider expression nodes are
//! passed by reference, so an expression inherited by several namespaces
//! appears in each of their calls without being copied. Once every
//! namespace is emitted, all anchor statements are deleted: the original
//! provider declarations have no further syntactic role.

use traitgraft_core::DeclKind;

use crate::context::PassContext;
use crate::synth;

/// Emit declarations for every namespace, then delete all anchors.
/// Returns the number of declarations emitted.
pub fn emit(ctx: &mut PassContext<'_>) -> usize {
    let mut emitted = 0;

    for index in 0..ctx.registry.len() {
        let (block, first_anchor, providers, bindings) = {
            let ns = ctx.registry.entry(index);
            if ns.bindings.is_empty() {
                continue;
            }
            (
                ns.block,
                ns.anchors[0],
                ns.providers.clone(),
                ns.bindings.clone(),
            )
        };

        let resolver = synth::ensure_resolver(ctx);
        let mut decls = Vec::with_capacity(bindings.len());
        for (trait_name, generated) in &bindings {
            let span = ctx.arena.span(first_anchor);
            let callee = ctx.arena.ident(&resolver, span);
            let mut args = Vec::with_capacity(providers.len() + 1);
            args.push(ctx.arena.string(trait_name, span));
            args.extend(providers.iter().copied());
            let call = ctx.arena.call(callee, args, span);
            decls.push(ctx.arena.var_decl(DeclKind::Const, generated, Some(call), span));
        }
        emitted += decls.len();

        let body = ctx.arena.stmts_mut(block);
        if let Some(pos) = body.iter().position(|&s| s == first_anchor) {
            body.splice(pos..pos, decls);
        }
    }

    for index in 0..ctx.registry.len() {
        let (block, anchors) = {
            let ns = ctx.registry.entry(index);
            (ns.block, ns.anchors.clone())
        };
        ctx.arena
            .stmts_mut(block)
            .retain(|stmt| !anchors.contains(stmt));
    }

    emitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{inherit, registry, rewrite};
    use traitgraft_core::{Arena, NodeId, NodeKind, Span, marker};

    fn sp() -> Span {
        Span::default()
    }

    fn provider(arena: &mut Arena, block: NodeId, name: &str) -> NodeId {
        let expr = arena.ident(name, sp());
        let stmt = arena.expr_stmt(expr, sp());
        let labeled = arena.labeled(marker::TRAITS_LABEL, stmt, sp());
        arena.stmts_mut(block).push(labeled);
        expr
    }

    fn access(arena: &mut Arena, block: NodeId, obj: &str, name: &str) -> NodeId {
        let object = arena.ident(obj, sp());
        let placeholder = arena.ident(marker::TRAIT_REF_PROP, sp());
        let inner = arena.member(object, placeholder, false, sp());
        let prop = arena.ident(name, sp());
        let outer = arena.member(inner, prop, false, sp());
        let stmt = arena.expr_stmt(outer, sp());
        arena.stmts_mut(block).push(stmt);
        outer
    }

    fn run(ctx: &mut PassContext<'_>) -> usize {
        registry::collect(ctx).unwrap();
        inherit::propagate(ctx);
        rewrite::rewrite(ctx).unwrap();
        emit(ctx)
    }

    #[test]
    fn declaration_replaces_anchor_position() {
        let mut arena = Arena::new();
        let program = arena.program(vec![], sp());
        let before = {
            let x = arena.ident("before", sp());
            let stmt = arena.expr_stmt(x, sp());
            arena.stmts_mut(program).push(stmt);
            stmt
        };
        let provider_expr = provider(&mut arena, program, "p");
        access(&mut arena, program, "obj", "value");

        let mut ctx = PassContext::new(&mut arena, program);
        assert_eq!(run(&mut ctx), 1);

        // [resolver, before, const _value = ..., access stmt]
        let body: Vec<NodeId> = ctx.arena.stmts(program).to_vec();
        assert_eq!(body.len(), 4);
        assert!(matches!(
            ctx.arena.kind(body[0]),
            NodeKind::FuncDecl { .. }
        ));
        assert_eq!(body[1], before);

        let NodeKind::VarDecl {
            kind,
            name,
            init: Some(init),
        } = ctx.arena.kind(body[2])
        else {
            panic!("expected generated declaration");
        };
        assert_eq!(*kind, DeclKind::Const);
        assert_eq!(name, "_value");

        let NodeKind::Call { callee, args } = ctx.arena.kind(*init) else {
            panic!("expected resolver call");
        };
        assert!(matches!(
            ctx.arena.kind(*callee),
            NodeKind::Ident { name } if name == "_resolveTrait"
        ));
        assert_eq!(args.len(), 2);
        assert!(matches!(
            ctx.arena.kind(args[0]),
            NodeKind::StringLit { value } if value == "value"
        ));
        assert_eq!(args[1], provider_expr);
    }

    #[test]
    fn one_declaration_per_distinct_name() {
        let mut arena = Arena::new();
        let program = arena.program(vec![], sp());
        provider(&mut arena, program, "p");
        access(&mut arena, program, "a", "one");
        access(&mut arena, program, "b", "one");
        access(&mut arena, program, "c", "two");

        let mut ctx = PassContext::new(&mut arena, program);
        assert_eq!(run(&mut ctx), 2);
    }

    #[test]
    fn anchors_are_deleted_even_without_bindings() {
        let mut arena = Arena::new();
        let program = arena.program(vec![], sp());
        provider(&mut arena, program, "p");

        let mut ctx = PassContext::new(&mut arena, program);
        assert_eq!(run(&mut ctx), 0);
        assert!(ctx.arena.stmts(program).is_empty());
        assert!(ctx.resolver.is_none());
    }

    #[test]
    fn inherited_providers_appear_in_call_arguments() {
        let mut arena = Arena::new();
        let inner = arena.block(vec![], sp());
        let program = arena.program(vec![inner], sp());
        let outer_provider = provider(&mut arena, program, "outer");
        let inner_provider = provider(&mut arena, inner, "inner");
        access(&mut arena, inner, "obj", "value");

        let mut ctx = PassContext::new(&mut arena, program);
        assert_eq!(run(&mut ctx), 1);

        let body = ctx.arena.stmts(inner).to_vec();
        let NodeKind::VarDecl {
            init: Some(init), ..
        } = ctx.arena.kind(body[0])
        else {
            panic!("expected generated declaration first in block");
        };
        let NodeKind::Call { args, .. } = ctx.arena.kind(*init) else {
            panic!("expected resolver call");
        };
        // Name literal, then own provider, then inherited one.
        assert_eq!(&args[1..], &[inner_provider, outer_provider]);
    }

    #[test]
    fn shared_provider_node_feeds_both_namespaces() {
        let mut arena = Arena::new();
        let inner = arena.block(vec![], sp());
        let program = arena.program(vec![inner], sp());
        let shared = provider(&mut arena, program, "shared");
        access(&mut arena, program, "a", "x");
        provider(&mut arena, inner, "own");
        access(&mut arena, inner, "b", "y");

        let mut ctx = PassContext::new(&mut arena, program);
        assert_eq!(run(&mut ctx), 2);

        let mut uses = 0;
        let mut stack = vec![program];
        while let Some(id) = stack.pop() {
            if let NodeKind::Call { args, .. } = ctx.arena.kind(id)
                && args.contains(&shared)
            {
                uses += 1;
            }
            ctx.arena.visit_children(id, &mut |c| stack.push(c));
        }
        assert_eq!(uses, 2);
    }
}
