//! Collision-free identifier generation.
//!
//! Generated trait bindings and the resolver routine need names that cannot
//! clash with anything the unit already mentions. Instead of tying
//! generation to an implicit scope object, [`FreshNames`] is an explicit
//! per-unit value: a set of taken spellings plus a preferred-base scheme,
//! threaded through the pass context.

use rustc_hash::FxHashSet;

use crate::ast::{Arena, NodeId};

/// Per-unit fresh-name generator.
#[derive(Debug, Default)]
pub struct FreshNames {
    used: FxHashSet<String>,
}

impl FreshNames {
    /// An empty generator (nothing taken yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a generator with every identifier spelling in the unit.
    pub fn from_unit(arena: &Arena, root: NodeId) -> Self {
        let mut used = FxHashSet::default();
        arena.collect_idents(root, &mut used);
        Self { used }
    }

    /// Whether a spelling is already taken.
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Mark a spelling as taken.
    pub fn claim(&mut self, name: impl Into<String>) {
        self.used.insert(name.into());
    }

    /// Produce a guaranteed-fresh name derived from `base`: `_base`, then
    /// `_base2`, `_base3`, ... The returned spelling is claimed.
    pub fn fresh(&mut self, base: &str) -> String {
        let first = format!("_{base}");
        if self.used.insert(first.clone()) {
            return first;
        }
        let mut n = 2u32;
        loop {
            let candidate = format!("_{base}{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;
    use crate::ast::DeclKind;

    #[test]
    fn fresh_prefixes_with_underscore() {
        let mut names = FreshNames::new();
        assert_eq!(names.fresh("value"), "_value");
        assert!(names.is_used("_value"));
    }

    #[test]
    fn fresh_numbers_on_collision() {
        let mut names = FreshNames::new();
        names.claim("_value");
        names.claim("_value2");
        assert_eq!(names.fresh("value"), "_value3");
    }

    #[test]
    fn same_base_yields_distinct_names() {
        let mut names = FreshNames::new();
        let a = names.fresh("resolveTrait");
        let b = names.fresh("resolveTrait");
        assert_ne!(a, b);
    }

    #[test]
    fn seeded_from_unit() {
        let sp = Span::default();
        let mut arena = Arena::new();
        let init = arena.number(1.0, sp);
        let decl = arena.var_decl(DeclKind::Const, "_value", Some(init), sp);
        let program = arena.program(vec![decl], sp);

        let mut names = FreshNames::from_unit(&arena, program);
        assert!(names.is_used("_value"));
        assert_eq!(names.fresh("value"), "_value2");
    }
}
