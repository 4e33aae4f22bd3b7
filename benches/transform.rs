//! Benchmark the full lowering pipeline over a synthetic unit.

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use traitgraft::{Arena, NodeId, Span, marker, transform};

const BLOCKS: usize = 50;
const ACCESSES_PER_BLOCK: usize = 8;

fn provider(arena: &mut Arena, block: NodeId, name: &str) {
    let sp = Span::default();
    let expr = arena.ident(name, sp);
    let stmt = arena.expr_stmt(expr, sp);
    let labeled = arena.labeled(marker::TRAITS_LABEL, stmt, sp);
    arena.stmts_mut(block).push(labeled);
}

fn access(arena: &mut Arena, block: NodeId, obj: &str, name: &str) {
    let sp = Span::default();
    let object = arena.ident(obj, sp);
    let placeholder = arena.ident(marker::TRAIT_REF_PROP, sp);
    let inner = arena.member(object, placeholder, false, sp);
    let prop = arena.ident(name, sp);
    let outer = arena.member(inner, prop, false, sp);
    let stmt = arena.expr_stmt(outer, sp);
    arena.stmts_mut(block).push(stmt);
}

/// One top-level provider plus nested blocks with their own providers and
/// a spread of trait accesses, some shared names, some unique.
fn build_unit() -> (Arena, NodeId) {
    let sp = Span::default();
    let mut arena = Arena::new();
    let program = arena.program(vec![], sp);
    provider(&mut arena, program, "rootCaps");
    for b in 0..BLOCKS {
        let block = arena.block(vec![], sp);
        arena.stmts_mut(program).push(block);
        provider(&mut arena, block, &format!("caps{b}"));
        for a in 0..ACCESSES_PER_BLOCK {
            access(&mut arena, block, "obj", &format!("trait{}", a % 3));
        }
    }
    (arena, program)
}

fn bench_transform(c: &mut Criterion) {
    c.bench_function("transform_unit", |b| {
        b.iter_batched(
            build_unit,
            |(mut arena, program)| transform(&mut arena, program).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
