//! Literal text patcher: restore surface spellings inside literal text.
//!
//! The upstream lexical layer's marker substitution is purely textual, so
//! it also fires inside string and template literals. After the structural
//! passes finish, this cosmetic sweep rewrites the marker spellings in
//! literal *text* back to the canonical surface syntax, so programs that
//! mention the extension's syntax as data keep saying what they said.
//! Structural nodes are never touched.

use traitgraft_core::{Arena, NodeId, NodeKind, marker};

fn patch_text(text: &mut String) -> bool {
    let mut changed = false;
    if text.contains(marker::PROVIDER_MARKER_TEXT) {
        *text = text.replace(marker::PROVIDER_MARKER_TEXT, marker::PROVIDER_SURFACE_TEXT);
        changed = true;
    }
    if text.contains(marker::ACCESS_MARKER_TEXT) {
        *text = text.replace(marker::ACCESS_MARKER_TEXT, marker::ACCESS_SURFACE_TEXT);
        changed = true;
    }
    changed
}

/// Patch every string and template literal under `root`. Returns the
/// number of literals whose text changed.
pub fn patch_literals(arena: &mut Arena, root: NodeId) -> usize {
    let mut patched = 0;
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        stack.extend(arena.children(id));
        match arena.kind_mut(id) {
            NodeKind::StringLit { value } => {
                if patch_text(value) {
                    patched += 1;
                }
            }
            NodeKind::TemplateLit { quasis, .. } => {
                let mut changed = false;
                for quasi in quasis {
                    changed |= patch_text(quasi);
                }
                if changed {
                    patched += 1;
                }
            }
            _ => {}
        }
    }
    patched
}

#[cfg(test)]
mod tests {
    use super::*;
    use traitgraft_core::Span;

    fn sp() -> Span {
        Span::default()
    }

    #[test]
    fn restores_access_spelling_in_strings() {
        let mut arena = Arena::new();
        let lit = arena.string("call obj.__traitref__.value here", sp());
        let stmt = arena.expr_stmt(lit, sp());
        let program = arena.program(vec![stmt], sp());

        assert_eq!(patch_literals(&mut arena, program), 1);
        assert_eq!(
            arena.kind(lit),
            &NodeKind::StringLit {
                value: "call obj.*value here".to_string()
            }
        );
    }

    #[test]
    fn restores_provider_spelling_in_template_quasis() {
        let mut arena = Arena::new();
        let expr = arena.ident("src", sp());
        let template = arena.alloc(
            NodeKind::TemplateLit {
                quasis: vec![
                    "__traits__: ".to_string(),
                    " -- a.__traitref__.b".to_string(),
                ],
                exprs: vec![expr],
            },
            sp(),
        );
        let stmt = arena.expr_stmt(template, sp());
        let program = arena.program(vec![stmt], sp());

        assert_eq!(patch_literals(&mut arena, program), 1);
        let NodeKind::TemplateLit { quasis, .. } = arena.kind(template) else {
            panic!("expected template literal");
        };
        assert_eq!(quasis[0], "use traits * from ");
        assert_eq!(quasis[1], " -- a.*b");
    }

    #[test]
    fn untouched_literals_are_not_counted() {
        let mut arena = Arena::new();
        let lit = arena.string("plain text", sp());
        let stmt = arena.expr_stmt(lit, sp());
        let program = arena.program(vec![stmt], sp());
        assert_eq!(patch_literals(&mut arena, program), 0);
    }

    #[test]
    fn structural_identifiers_are_left_alone() {
        let mut arena = Arena::new();
        // An identifier that happens to share the marker spelling is a
        // structural node; only literal text is patched.
        let ident = arena.ident("__traitref__", sp());
        let stmt = arena.expr_stmt(ident, sp());
        let program = arena.program(vec![stmt], sp());

        assert_eq!(patch_literals(&mut arena, program), 0);
        assert_eq!(
            arena.kind(ident),
            &NodeKind::Ident {
                name: "__traitref__".to_string()
            }
        );
    }
}
