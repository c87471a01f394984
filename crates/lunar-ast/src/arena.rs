//! NodeArena creation and access methods.

use crate::node::*;
use lunar_common::Location;

/// Flat storage for syntax nodes. Nodes are never removed.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<&NodeKind> {
        self.get(index).map(|node| &node.kind)
    }

    pub fn add(&mut self, kind: NodeKind, location: Location) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node { kind, location });
        index
    }

    // =========================================================================
    // Constants
    // =========================================================================

    pub fn add_nil(&mut self, location: Location) -> NodeIndex {
        self.add(NodeKind::ConstantNil, location)
    }

    pub fn add_bool(&mut self, value: bool, location: Location) -> NodeIndex {
        self.add(NodeKind::ConstantBool(value), location)
    }

    pub fn add_number(&mut self, value: f64, location: Location) -> NodeIndex {
        self.add(NodeKind::ConstantNumber(value), location)
    }

    pub fn add_string(&mut self, value: impl Into<String>, location: Location) -> NodeIndex {
        self.add(NodeKind::ConstantString(value.into()), location)
    }

    // =========================================================================
    // Names
    // =========================================================================

    pub fn add_local(&mut self, name: impl Into<String>, location: Location) -> NodeIndex {
        self.add(NodeKind::Local(name.into()), location)
    }

    pub fn add_global(&mut self, name: impl Into<String>, location: Location) -> NodeIndex {
        self.add(NodeKind::Global(name.into()), location)
    }

    // =========================================================================
    // Compound expressions
    // =========================================================================

    pub fn add_group(&mut self, inner: NodeIndex, location: Location) -> NodeIndex {
        self.add(NodeKind::Group(inner), location)
    }

    pub fn add_call(
        &mut self,
        func: NodeIndex,
        args: Vec<NodeIndex>,
        location: Location,
    ) -> NodeIndex {
        self.add(
            NodeKind::Call {
                func,
                args,
                self_call: false,
            },
            location,
        )
    }

    /// `obj:method(args)`
    pub fn add_method_call(
        &mut self,
        func: NodeIndex,
        args: Vec<NodeIndex>,
        location: Location,
    ) -> NodeIndex {
        self.add(
            NodeKind::Call {
                func,
                args,
                self_call: true,
            },
            location,
        )
    }

    pub fn add_index_name(
        &mut self,
        expr: NodeIndex,
        name: impl Into<String>,
        location: Location,
    ) -> NodeIndex {
        self.add(
            NodeKind::IndexName {
                expr,
                name: name.into(),
            },
            location,
        )
    }

    pub fn add_index_expr(
        &mut self,
        expr: NodeIndex,
        index: NodeIndex,
        location: Location,
    ) -> NodeIndex {
        self.add(NodeKind::IndexExpr { expr, index }, location)
    }

    pub fn add_unary(&mut self, op: UnaryOp, expr: NodeIndex, location: Location) -> NodeIndex {
        self.add(NodeKind::Unary { op, expr }, location)
    }

    pub fn add_binary(
        &mut self,
        op: BinaryOp,
        left: NodeIndex,
        right: NodeIndex,
        location: Location,
    ) -> NodeIndex {
        self.add(NodeKind::Binary { op, left, right }, location)
    }

    pub fn add_if_else(
        &mut self,
        condition: NodeIndex,
        then_expr: NodeIndex,
        else_expr: NodeIndex,
        location: Location,
    ) -> NodeIndex {
        self.add(
            NodeKind::IfElse {
                condition,
                then_expr,
                else_expr,
            },
            location,
        )
    }

    pub fn add_table(&mut self, items: Vec<TableItem>, location: Location) -> NodeIndex {
        self.add(NodeKind::Table { items }, location)
    }

    pub fn add_function(
        &mut self,
        params: Vec<String>,
        vararg: bool,
        body: NodeIndex,
        location: Location,
    ) -> NodeIndex {
        self.add(
            NodeKind::Function {
                params,
                vararg,
                body,
            },
            location,
        )
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn add_block(&mut self, statements: Vec<NodeIndex>, location: Location) -> NodeIndex {
        self.add(NodeKind::Block(statements), location)
    }

    pub fn add_return(&mut self, values: Vec<NodeIndex>, location: Location) -> NodeIndex {
        self.add(NodeKind::Return(values), location)
    }

    pub fn add_expr_stat(&mut self, expr: NodeIndex, location: Location) -> NodeIndex {
        self.add(NodeKind::ExprStat(expr), location)
    }

    pub fn add_local_stat(
        &mut self,
        names: Vec<String>,
        values: Vec<NodeIndex>,
        location: Location,
    ) -> NodeIndex {
        self.add(NodeKind::LocalStat { names, values }, location)
    }
}

impl TableItem {
    pub fn list(value: NodeIndex) -> TableItem {
        TableItem {
            kind: TableItemKind::List,
            key: NodeIndex::NONE,
            value,
        }
    }

    pub fn record(key: NodeIndex, value: NodeIndex) -> TableItem {
        TableItem {
            kind: TableItemKind::Record,
            key,
            value,
        }
    }

    pub fn general(key: NodeIndex, value: NodeIndex) -> TableItem {
        TableItem {
            kind: TableItemKind::General,
            key,
            value,
        }
    }
}
