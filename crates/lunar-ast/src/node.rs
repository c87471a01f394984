//! Node definitions.

use lunar_common::Location;
use serde::Serialize;

/// Index of a node in a [`NodeArena`](crate::NodeArena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Not,
    Minus,
    Len,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Concat,
    CompareEq,
    CompareNe,
    CompareLt,
    CompareLe,
    CompareGt,
    CompareGe,
    And,
    Or,
}

/// How a table constructor entry was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TableItemKind {
    /// `{ value }`
    List,
    /// `{ name = value }`; the key is a string constant node.
    Record,
    /// `{ [key] = value }`
    General,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableItem {
    pub kind: TableItemKind,
    /// `NodeIndex::NONE` for list items.
    pub key: NodeIndex,
    pub value: NodeIndex,
}

/// Node payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum NodeKind {
    // Expressions
    ConstantNil,
    ConstantBool(bool),
    ConstantNumber(f64),
    ConstantString(String),
    Local(String),
    Global(String),
    Varargs,
    /// Parenthesized expression.
    Group(NodeIndex),
    Call {
        func: NodeIndex,
        args: Vec<NodeIndex>,
        self_call: bool,
    },
    IndexName {
        expr: NodeIndex,
        name: String,
    },
    IndexExpr {
        expr: NodeIndex,
        index: NodeIndex,
    },
    Function {
        params: Vec<String>,
        vararg: bool,
        /// A `Block` statement.
        body: NodeIndex,
    },
    Table {
        items: Vec<TableItem>,
    },
    Unary {
        op: UnaryOp,
        expr: NodeIndex,
    },
    Binary {
        op: BinaryOp,
        left: NodeIndex,
        right: NodeIndex,
    },
    IfElse {
        condition: NodeIndex,
        then_expr: NodeIndex,
        else_expr: NodeIndex,
    },

    // Statements
    Block(Vec<NodeIndex>),
    Return(Vec<NodeIndex>),
    ExprStat(NodeIndex),
    LocalStat {
        names: Vec<String>,
        values: Vec<NodeIndex>,
    },
}

impl NodeKind {
    pub fn is_expression(&self) -> bool {
        !self.is_statement()
    }

    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::Block(_)
                | NodeKind::Return(_)
                | NodeKind::ExprStat(_)
                | NodeKind::LocalStat { .. }
        )
    }

    /// Constants, table constructors, and function literals.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            NodeKind::Table { .. }
                | NodeKind::Function { .. }
                | NodeKind::ConstantNumber(_)
                | NodeKind::ConstantString(_)
                | NodeKind::ConstantBool(_)
                | NodeKind::ConstantNil
        )
    }

    pub fn is_group(&self) -> bool {
        matches!(self, NodeKind::Group(_))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub location: Location,
}
