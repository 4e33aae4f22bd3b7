//! Namespace registry: discover provider statements and group them by
//! enclosing block.
//!
//! A provider statement is the labeled marker the upstream lexical layer
//! emits for `use traits * from <expr>;`. Each block (or the unit top
//! level) that directly contains at least one of them becomes a
//! [`Namespace`]: the set of providers visible to trait accesses in that
//! block's governed subtree. Placement and arity are validated here;
//! everything after this stage can assume well-formed namespaces.

use rustc_hash::FxHashMap;
use traitgraft_core::{CompileError, FreshNames, NodeId, NodeKind, marker};

use crate::context::PassContext;

/// The provider set governing one block.
#[derive(Debug)]
pub struct Namespace {
    /// The block (or program) this namespace governs.
    pub block: NodeId,
    /// The provider statements themselves, in discovery order. Deleted by
    /// the emitter once their expressions are captured.
    pub anchors: Vec<NodeId>,
    /// Effective provider expressions: own providers in discovery order,
    /// then inherited ones appended by the inheritance stage. Expressions
    /// are referenced, never copied.
    pub providers: Vec<NodeId>,
    /// Length of the own-provider prefix of `providers`.
    pub own_len: usize,
    /// Requested trait names mapped to their generated identifiers, in
    /// request order. At most one entry per name.
    pub bindings: Vec<(String, String)>,
}

impl Namespace {
    fn new(block: NodeId, anchor: NodeId, provider: NodeId) -> Self {
        Self {
            block,
            anchors: vec![anchor],
            providers: vec![provider],
            own_len: 1,
            bindings: Vec::new(),
        }
    }

    fn attach(&mut self, anchor: NodeId, provider: NodeId) {
        self.anchors.push(anchor);
        if !self.providers.contains(&provider) {
            self.providers.push(provider);
            self.own_len += 1;
        }
    }

    /// This namespace's own providers, excluding inherited ones.
    pub fn own_providers(&self) -> &[NodeId] {
        &self.providers[..self.own_len]
    }

    /// The generated identifier for a trait name, if already requested.
    pub fn binding(&self, name: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, generated)| generated.as_str())
    }

    /// Request a trait name, returning its generated identifier. Memoized:
    /// every occurrence of the same name in this namespace shares one
    /// identifier.
    pub fn bind(&mut self, name: &str, names: &mut FreshNames) -> String {
        if let Some(existing) = self.binding(name) {
            return existing.to_string();
        }
        let generated = names.fresh(name);
        self.bindings.push((name.to_string(), generated.clone()));
        generated
    }
}

/// All namespaces of one unit, keyed by governing block, in discovery order.
#[derive(Debug, Default)]
pub struct NamespaceRegistry {
    by_block: FxHashMap<NodeId, usize>,
    entries: Vec<Namespace>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of namespaces discovered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no namespaces were discovered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `block` governs a namespace.
    pub fn is_namespace(&self, block: NodeId) -> bool {
        self.by_block.contains_key(&block)
    }

    /// The registry index of the namespace governing `block`, if any.
    pub fn index_of(&self, block: NodeId) -> Option<usize> {
        self.by_block.get(&block).copied()
    }

    /// The namespace at a registry index.
    pub fn entry(&self, index: usize) -> &Namespace {
        &self.entries[index]
    }

    /// Mutable namespace at a registry index.
    pub fn entry_mut(&mut self, index: usize) -> &mut Namespace {
        &mut self.entries[index]
    }

    /// Iterate namespaces in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.entries.iter()
    }

    /// Attach a provider statement to `block`'s namespace, creating the
    /// namespace if this is the block's first provider.
    fn attach(&mut self, block: NodeId, anchor: NodeId, provider: NodeId) {
        match self.by_block.get(&block) {
            Some(&index) => self.entries[index].attach(anchor, provider),
            None => {
                self.by_block.insert(block, self.entries.len());
                self.entries.push(Namespace::new(block, anchor, provider));
            }
        }
    }
}

/// Discover every provider statement in the unit and populate the registry.
///
/// Validates each one: it must be a direct child of a block or the top
/// level, and it must wrap exactly one expression statement.
pub fn collect(ctx: &mut PassContext<'_>) -> Result<(), CompileError> {
    let mut stack = vec![ctx.program];
    // Depth-first, source order, so discovery order is deterministic.
    while let Some(id) = stack.pop() {
        if let NodeKind::Labeled { label, body } = ctx.arena.kind(id)
            && label == marker::TRAITS_LABEL
        {
            let body = *body;
            let span = ctx.arena.span(id);
            let placed_in_block = ctx
                .parent(id)
                .is_some_and(|p| ctx.arena.kind(p).is_stmt_list());
            if !placed_in_block {
                return Err(CompileError::MisplacedProvider { span });
            }
            let NodeKind::ExprStmt { expr } = ctx.arena.kind(body) else {
                return Err(CompileError::ProviderMissingExpression { span });
            };
            let provider = *expr;
            // Parent presence was just checked above.
            if let Some(block) = ctx.parent(id) {
                ctx.registry.attach(block, id, provider);
            }
        }
        let mut children = ctx.arena.children(id);
        children.reverse();
        stack.extend(children);
    }
    Ok(())
}
