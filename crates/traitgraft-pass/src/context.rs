//! Per-unit pass context.
//!
//! Everything the pass stages share lives here and is passed explicitly:
//! the arena, the parent map, the fresh-name generator, the namespace
//! registry, and the resolver binding once it exists. There is no global
//! "currently processing unit" state.

use traitgraft_core::{Arena, FreshNames, NodeId};

use crate::registry::NamespaceRegistry;

/// Mutable state threaded through every pass stage for one compiled unit.
pub struct PassContext<'a> {
    /// The unit's tree.
    pub arena: &'a mut Arena,
    /// The unit's root node.
    pub program: NodeId,
    /// Parent map computed before any mutation; only consulted for nodes
    /// that existed at that point (registry placement checks and the
    /// inheritance walk).
    pub parents: Vec<Option<NodeId>>,
    /// Collision-free name generation, seeded from the whole unit.
    pub names: FreshNames,
    /// Discovered namespaces, keyed by their governing block.
    pub registry: NamespaceRegistry,
    /// The synthesized resolver's name, once any trait name is requested.
    pub resolver: Option<String>,
}

impl<'a> PassContext<'a> {
    /// Set up the context for one unit.
    pub fn new(arena: &'a mut Arena, program: NodeId) -> Self {
        let parents = arena.parent_map(program);
        let names = FreshNames::from_unit(arena, program);
        Self {
            arena,
            program,
            parents,
            names,
            registry: NamespaceRegistry::new(),
            resolver: None,
        }
    }

    /// The parent of `id`, if it has one in the original tree.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.index()).copied().flatten()
    }
}
