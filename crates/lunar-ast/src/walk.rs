//! Pre-order traversal with caller-controlled descent.
//!
//! Instead of a visitor object with one hook per node shape, the walk takes
//! a single callback that inspects a node and answers whether its children
//! should be visited. Returning `false` makes the node an opaque leaf.

use crate::arena::NodeArena;
use crate::node::{NodeIndex, NodeKind};
use smallvec::SmallVec;

/// Invoke `f` on each direct child of `index`, in source order.
///
/// Record keys of table constructors are children too (they are string
/// constant nodes). A function literal's only child is its body block.
pub fn for_each_child<F>(arena: &NodeArena, index: NodeIndex, mut f: F)
where
    F: FnMut(NodeIndex),
{
    let Some(node) = arena.get(index) else {
        return;
    };

    let mut visit = |child: NodeIndex| {
        if child.is_some() {
            f(child);
        }
    };

    match &node.kind {
        NodeKind::ConstantNil
        | NodeKind::ConstantBool(_)
        | NodeKind::ConstantNumber(_)
        | NodeKind::ConstantString(_)
        | NodeKind::Local(_)
        | NodeKind::Global(_)
        | NodeKind::Varargs => {}
        NodeKind::Group(inner) => visit(*inner),
        NodeKind::Call { func, args, .. } => {
            visit(*func);
            args.iter().copied().for_each(&mut visit);
        }
        NodeKind::IndexName { expr, .. } => visit(*expr),
        NodeKind::IndexExpr { expr, index } => {
            visit(*expr);
            visit(*index);
        }
        NodeKind::Function { body, .. } => visit(*body),
        NodeKind::Table { items } => {
            for item in items {
                visit(item.key);
                visit(item.value);
            }
        }
        NodeKind::Unary { expr, .. } => visit(*expr),
        NodeKind::Binary { left, right, .. } => {
            visit(*left);
            visit(*right);
        }
        NodeKind::IfElse {
            condition,
            then_expr,
            else_expr,
        } => {
            visit(*condition);
            visit(*then_expr);
            visit(*else_expr);
        }
        NodeKind::Block(statements) => statements.iter().copied().for_each(&mut visit),
        NodeKind::Return(values) => values.iter().copied().for_each(&mut visit),
        NodeKind::ExprStat(expr) => visit(*expr),
        NodeKind::LocalStat { values, .. } => values.iter().copied().for_each(&mut visit),
    }
}

/// Walk the subtree rooted at `root` in pre-order.
///
/// `visit` is called for every reached node; its children are only reached
/// when it returns `true`. Uses an explicit stack, so deeply nested literals
/// do not grow the call stack.
pub fn walk<F>(arena: &NodeArena, root: NodeIndex, mut visit: F)
where
    F: FnMut(NodeIndex, &NodeKind) -> bool,
{
    let mut stack: Vec<NodeIndex> = vec![root];
    while let Some(index) = stack.pop() {
        let Some(node) = arena.get(index) else {
            continue;
        };
        if !visit(index, &node.kind) {
            continue;
        }

        let mut children: SmallVec<[NodeIndex; 8]> = SmallVec::new();
        for_each_child(arena, index, |child| children.push(child));
        // Reverse so the leftmost child is popped first.
        stack.extend(children.into_iter().rev());
    }
}

#[cfg(test)]
#[path = "../tests/walk_tests.rs"]
mod tests;
