//! Resolver synthesizer: one shared resolution routine per compiled unit.
//!
//! Synthesized lazily the first time any namespace requests a trait name,
//! bound to a fresh top-level name, and inserted at the start of the unit.
//! The routine is the only artifact of this pass that survives into the
//! host program's own execution. In surface syntax it reads:
//!
//! ```text
//! function _resolveTrait(name, ...providers) {
//!     let found;
//!     for (const p of providers) {
//!         const v = p[name];
//!         if (typeof v === "symbol") {
//!             if (found !== undefined) {
//!                 throw new TypeError("multiple providers for trait " + name);
//!             }
//!             found = v;
//!         }
//!     }
//!     if (found === undefined) {
//!         throw new TypeError("no provider for trait " + name);
//!     }
//!     return found;
//! }
//! ```

use traitgraft_core::{Arena, BinOp, DeclKind, NodeId, NodeKind, Param, Span, UnOp};

use crate::context::PassContext;

/// Base spelling the resolver's fresh name is derived from.
const RESOLVER_BASE: &str = "resolveTrait";

/// Return the unit's resolver name, synthesizing and inserting the routine
/// on first use. Subsequent calls are no-ops.
pub fn ensure_resolver(ctx: &mut PassContext<'_>) -> String {
    if let Some(name) = &ctx.resolver {
        return name.clone();
    }
    let name = ctx.names.fresh(RESOLVER_BASE);
    let func = build_resolver(ctx.arena, &name);
    ctx.arena.stmts_mut(ctx.program).insert(0, func);
    ctx.resolver = Some(name.clone());
    name
}

/// `throw new TypeError("<prefix>" + name);`
fn throw_type_error(arena: &mut Arena, prefix: &str) -> NodeId {
    let sp = Span::default();
    let message = arena.string(prefix, sp);
    let name = arena.ident("name", sp);
    let concat = arena.alloc(
        NodeKind::Binary {
            op: BinOp::Add,
            left: message,
            right: name,
        },
        sp,
    );
    let callee = arena.ident("TypeError", sp);
    let error = arena.alloc(
        NodeKind::New {
            callee,
            args: vec![concat],
        },
        sp,
    );
    arena.alloc(NodeKind::Throw { arg: error }, sp)
}

fn build_resolver(arena: &mut Arena, name: &str) -> NodeId {
    let sp = Span::default();

    // let found;
    let decl_found = arena.var_decl(DeclKind::Let, "found", None, sp);

    // const v = p[name];
    let p = arena.ident("p", sp);
    let key = arena.ident("name", sp);
    let lookup = arena.member(p, key, true, sp);
    let decl_v = arena.var_decl(DeclKind::Const, "v", Some(lookup), sp);

    // if (found !== undefined) throw ...;
    let ambiguous = throw_type_error(arena, "multiple providers for trait ");
    let found = arena.ident("found", sp);
    let undefined = arena.ident("undefined", sp);
    let already_found = arena.alloc(
        NodeKind::Binary {
            op: BinOp::StrictNe,
            left: found,
            right: undefined,
        },
        sp,
    );
    let ambiguity_guard = arena.alloc(
        NodeKind::If {
            test: already_found,
            then_branch: ambiguous,
            else_branch: None,
        },
        sp,
    );

    // found = v;
    let found = arena.ident("found", sp);
    let v = arena.ident("v", sp);
    let record = arena.alloc(
        NodeKind::Assign {
            target: found,
            value: v,
        },
        sp,
    );
    let record_stmt = arena.expr_stmt(record, sp);

    // if (typeof v === "symbol") { ... }
    let v = arena.ident("v", sp);
    let typeof_v = arena.alloc(
        NodeKind::Unary {
            op: UnOp::TypeOf,
            operand: v,
        },
        sp,
    );
    let symbol = arena.string("symbol", sp);
    let is_token = arena.alloc(
        NodeKind::Binary {
            op: BinOp::StrictEq,
            left: typeof_v,
            right: symbol,
        },
        sp,
    );
    let candidate_body = arena.block(vec![ambiguity_guard, record_stmt], sp);
    let candidate_check = arena.alloc(
        NodeKind::If {
            test: is_token,
            then_branch: candidate_body,
            else_branch: None,
        },
        sp,
    );

    // for (const p of providers) { ... }
    let providers = arena.ident("providers", sp);
    let scan_body = arena.block(vec![decl_v, candidate_check], sp);
    let scan = arena.alloc(
        NodeKind::ForOf {
            decl: "p".to_string(),
            iterable: providers,
            body: scan_body,
        },
        sp,
    );

    // if (found === undefined) throw ...;
    let missing = throw_type_error(arena, "no provider for trait ");
    let found = arena.ident("found", sp);
    let undefined = arena.ident("undefined", sp);
    let nothing_found = arena.alloc(
        NodeKind::Binary {
            op: BinOp::StrictEq,
            left: found,
            right: undefined,
        },
        sp,
    );
    let absence_guard = arena.alloc(
        NodeKind::If {
            test: nothing_found,
            then_branch: missing,
            else_branch: None,
        },
        sp,
    );

    // return found;
    let found = arena.ident("found", sp);
    let done = arena.alloc(NodeKind::Return { arg: Some(found) }, sp);

    let body = arena.block(vec![decl_found, scan, absence_guard, done], sp);
    arena.func_decl(
        name,
        vec![Param::plain("name"), Param::rest("providers")],
        body,
        sp,
    )
}
