//! Index arena holding the tree for one compiled unit.
//!
//! Nodes are addressed by stable integer [`NodeId`]s. Passes read and
//! rewrite nodes by id, which sidesteps aliasing problems a pointer-based
//! mutable tree would have: replacing a node's kind in place leaves every
//! other reference to that id valid, and a node can be referenced from
//! several places at once (provider expressions are shared by reference
//! between the resolver calls that use them).
//!
//! Deleting a statement means removing its id from the enclosing statement
//! list; the node itself stays in the arena. The arena never compacts, so
//! ids are never invalidated.

use rustc_hash::FxHashSet;

use super::node::{DeclKind, NodeKind, Param};
use crate::Span;

/// A stable handle to a node in the [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The arena index of this id.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A tree node: a kind plus the source span it originated from.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

/// The node arena for one compiled unit.
#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a node and return its id.
    pub fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { kind, span });
        id
    }

    /// The node behind an id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// The kind of a node.
    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    /// The span of a node.
    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    /// Mutable access to a node's kind.
    #[inline]
    pub fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id.index()].kind
    }

    /// Replace a node's kind in place, keeping its id and span.
    /// Returns the previous kind.
    pub fn replace(&mut self, id: NodeId, kind: NodeKind) -> NodeKind {
        std::mem::replace(&mut self.nodes[id.index()].kind, kind)
    }

    /// The statement list of a `Program` or `Block` node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a statement container.
    pub fn stmts(&self, id: NodeId) -> &[NodeId] {
        match self.kind(id) {
            NodeKind::Program { body } | NodeKind::Block { body } => body,
            other => panic!("expected a statement container, found {other:?}"),
        }
    }

    /// Mutable statement list of a `Program` or `Block` node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a statement container.
    pub fn stmts_mut(&mut self, id: NodeId) -> &mut Vec<NodeId> {
        match &mut self.nodes[id.index()].kind {
            NodeKind::Program { body } | NodeKind::Block { body } => body,
            other => panic!("expected a statement container, found {other:?}"),
        }
    }

    /// Invoke `f` for each direct child of `id`, in source order.
    pub fn visit_children(&self, id: NodeId, f: &mut impl FnMut(NodeId)) {
        match self.kind(id) {
            NodeKind::Program { body } | NodeKind::Block { body } => {
                for &s in body {
                    f(s);
                }
            }
            NodeKind::Labeled { body, .. } => f(*body),
            NodeKind::ExprStmt { expr } => f(*expr),
            NodeKind::VarDecl { init, .. } => {
                if let Some(init) = init {
                    f(*init);
                }
            }
            NodeKind::FuncDecl { body, .. } => f(*body),
            NodeKind::Return { arg } => {
                if let Some(arg) = arg {
                    f(*arg);
                }
            }
            NodeKind::If {
                test,
                then_branch,
                else_branch,
            } => {
                f(*test);
                f(*then_branch);
                if let Some(e) = else_branch {
                    f(*e);
                }
            }
            NodeKind::ForOf { iterable, body, .. } => {
                f(*iterable);
                f(*body);
            }
            NodeKind::Throw { arg } => f(*arg),
            NodeKind::Assign { target, value } => {
                f(*target);
                f(*value);
            }
            NodeKind::Ident { .. }
            | NodeKind::StringLit { .. }
            | NodeKind::NumberLit { .. } => {}
            NodeKind::TemplateLit { exprs, .. } => {
                for &e in exprs {
                    f(e);
                }
            }
            NodeKind::ObjectLit { props } => {
                for &(_, v) in props {
                    f(v);
                }
            }
            NodeKind::Member {
                object, property, ..
            } => {
                f(*object);
                f(*property);
            }
            NodeKind::Call { callee, args } | NodeKind::New { callee, args } => {
                f(*callee);
                for &a in args {
                    f(a);
                }
            }
            NodeKind::Binary { left, right, .. } => {
                f(*left);
                f(*right);
            }
            NodeKind::Unary { operand, .. } => f(*operand),
        }
    }

    /// Direct children of `id`, in source order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.visit_children(id, &mut |c| out.push(c));
        out
    }

    /// Compute a parent map for the subtree rooted at `root`, indexed by
    /// [`NodeId::index`]. Nodes outside the subtree (and the root itself)
    /// map to `None`.
    ///
    /// Computed once per unit, before any mutation; later passes only
    /// consult it for nodes that existed at that point.
    pub fn parent_map(&self, root: NodeId) -> Vec<Option<NodeId>> {
        let mut parents = vec![None; self.nodes.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            self.visit_children(id, &mut |child| {
                parents[child.index()] = Some(id);
                stack.push(child);
            });
        }
        parents
    }

    /// Collect every identifier spelling bound or referenced in the subtree
    /// rooted at `root`: identifier expressions, declared variable and
    /// function names, parameter names, and loop bindings.
    ///
    /// Seeds the fresh-name generator so generated names cannot collide
    /// with anything already in the unit.
    pub fn collect_idents(&self, root: NodeId, out: &mut FxHashSet<String>) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            match self.kind(id) {
                NodeKind::Ident { name } => {
                    out.insert(name.clone());
                }
                NodeKind::VarDecl { name, .. } | NodeKind::ForOf { decl: name, .. } => {
                    out.insert(name.clone());
                }
                NodeKind::FuncDecl { name, params, .. } => {
                    out.insert(name.clone());
                    for p in params {
                        out.insert(p.name.clone());
                    }
                }
                _ => {}
            }
            self.visit_children(id, &mut |child| stack.push(child));
        }
    }
}

// Builder helpers. The synthesizer and the tests construct trees through
// these instead of spelling out NodeKind structs.
impl Arena {
    pub fn program(&mut self, body: Vec<NodeId>, span: Span) -> NodeId {
        self.alloc(NodeKind::Program { body }, span)
    }

    pub fn block(&mut self, body: Vec<NodeId>, span: Span) -> NodeId {
        self.alloc(NodeKind::Block { body }, span)
    }

    pub fn labeled(&mut self, label: impl Into<String>, body: NodeId, span: Span) -> NodeId {
        self.alloc(
            NodeKind::Labeled {
                label: label.into(),
                body,
            },
            span,
        )
    }

    pub fn expr_stmt(&mut self, expr: NodeId, span: Span) -> NodeId {
        self.alloc(NodeKind::ExprStmt { expr }, span)
    }

    pub fn var_decl(
        &mut self,
        kind: DeclKind,
        name: impl Into<String>,
        init: Option<NodeId>,
        span: Span,
    ) -> NodeId {
        self.alloc(
            NodeKind::VarDecl {
                kind,
                name: name.into(),
                init,
            },
            span,
        )
    }

    pub fn func_decl(
        &mut self,
        name: impl Into<String>,
        params: Vec<Param>,
        body: NodeId,
        span: Span,
    ) -> NodeId {
        self.alloc(
            NodeKind::FuncDecl {
                name: name.into(),
                params,
                body,
            },
            span,
        )
    }

    pub fn ident(&mut self, name: impl Into<String>, span: Span) -> NodeId {
        self.alloc(NodeKind::Ident { name: name.into() }, span)
    }

    pub fn string(&mut self, value: impl Into<String>, span: Span) -> NodeId {
        self.alloc(
            NodeKind::StringLit {
                value: value.into(),
            },
            span,
        )
    }

    pub fn number(&mut self, value: f64, span: Span) -> NodeId {
        self.alloc(NodeKind::NumberLit { value }, span)
    }

    pub fn object(&mut self, props: Vec<(String, NodeId)>, span: Span) -> NodeId {
        self.alloc(NodeKind::ObjectLit { props }, span)
    }

    pub fn member(
        &mut self,
        object: NodeId,
        property: NodeId,
        computed: bool,
        span: Span,
    ) -> NodeId {
        self.alloc(
            NodeKind::Member {
                object,
                property,
                computed,
            },
            span,
        )
    }

    pub fn call(&mut self, callee: NodeId, args: Vec<NodeId>, span: Span) -> NodeId {
        self.alloc(NodeKind::Call { callee, args }, span)
    }
}
