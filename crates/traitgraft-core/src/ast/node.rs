//! Tree node kinds for the target dynamic language.
//!
//! A deliberately small, closed vocabulary: the constructs the upstream
//! front end hands us plus the primitive constructs the pass emits
//! (dynamic-key member access, function and variable declarations, call
//! expressions). Anything a standard evaluator for the target language
//! understands but this pass never inspects can be smuggled through as one
//! of these shapes by the external front end.
//!
//! Nodes reference their children by [`NodeId`](super::NodeId); the arena
//! owns every node and ids stay stable across rewrites.

use super::NodeId;

/// Statement and expression kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The compiled unit's top-level statement sequence.
    Program { body: Vec<NodeId> },
    /// A braced statement block.
    Block { body: Vec<NodeId> },
    /// A labeled statement (`label: stmt`).
    Labeled { label: String, body: NodeId },
    /// An expression statement.
    ExprStmt { expr: NodeId },
    /// A single-binding variable declaration.
    VarDecl {
        kind: DeclKind,
        name: String,
        init: Option<NodeId>,
    },
    /// A function declaration.
    FuncDecl {
        name: String,
        params: Vec<Param>,
        body: NodeId,
    },
    /// A return statement.
    Return { arg: Option<NodeId> },
    /// An if statement.
    If {
        test: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    },
    /// A `for (const <decl> of <iterable>)` loop.
    ForOf {
        decl: String,
        iterable: NodeId,
        body: NodeId,
    },
    /// A throw statement.
    Throw { arg: NodeId },
    /// An assignment expression (`target = value`).
    Assign { target: NodeId, value: NodeId },
    /// An identifier reference.
    Ident { name: String },
    /// A string literal.
    StringLit { value: String },
    /// A template literal: n+1 text chunks around n embedded expressions.
    TemplateLit {
        quasis: Vec<String>,
        exprs: Vec<NodeId>,
    },
    /// A numeric literal.
    NumberLit { value: f64 },
    /// An object literal with string-keyed properties.
    ObjectLit { props: Vec<(String, NodeId)> },
    /// Member access. `computed` selects `object[property]` over
    /// `object.property`; a non-computed property is an `Ident`.
    Member {
        object: NodeId,
        property: NodeId,
        computed: bool,
    },
    /// A call expression.
    Call { callee: NodeId, args: Vec<NodeId> },
    /// A `new` expression.
    New { callee: NodeId, args: Vec<NodeId> },
    /// A binary operation.
    Binary {
        op: BinOp,
        left: NodeId,
        right: NodeId,
    },
    /// A unary prefix operation.
    Unary { op: UnOp, operand: NodeId },
}

/// Variable declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Const,
    Let,
}

/// Binary operators the pass emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `===`
    StrictEq,
    /// `!==`
    StrictNe,
}

/// Unary operators the pass emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    /// `typeof`
    TypeOf,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Whether this is a rest parameter (`...name`).
    pub rest: bool,
}

impl Param {
    /// A plain positional parameter.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: false,
        }
    }

    /// A rest parameter.
    pub fn rest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: true,
        }
    }
}

impl NodeKind {
    /// Whether this kind is a statement container whose body can be edited
    /// (the unit top level or a block).
    pub fn is_stmt_list(&self) -> bool {
        matches!(self, NodeKind::Program { .. } | NodeKind::Block { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stmt_list_kinds() {
        assert!(NodeKind::Program { body: vec![] }.is_stmt_list());
        assert!(NodeKind::Block { body: vec![] }.is_stmt_list());
        assert!(
            !NodeKind::Ident {
                name: "x".to_string()
            }
            .is_stmt_list()
        );
    }

    #[test]
    fn param_constructors() {
        assert!(!Param::plain("name").rest);
        assert!(Param::rest("providers").rest);
    }
}
