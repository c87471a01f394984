//! Blocked types inside literals.
//!
//! Bidirectional inference pushes an expected type (from a parameter or an
//! annotation) into a literal. Before doing so the caller needs every
//! placeholder the literal's sub-expressions are still typed as. The scan
//! descends through literals and parentheses only: identifiers, calls,
//! operators and the like are opaque leaves resolved on their own.

use crate::arena::TypeArena;
use crate::type_queries::is_blocked;
use crate::types::TypeId;
use lunar_ast::{NodeArena, NodeIndex, NodeKind, walk};
use rustc_hash::FxHashMap;

/// Type currently assigned to each expression.
pub type ExprTypeMap = FxHashMap<NodeIndex, TypeId>;

/// Table constructors, function literals, and constants.
pub fn is_literal(nodes: &NodeArena, expr: NodeIndex) -> bool {
    nodes.kind(expr).is_some_and(NodeKind::is_literal)
}

fn is_literal_or_group(kind: &NodeKind) -> bool {
    kind.is_literal() || kind.is_group()
}

/// Collect the blocked types of `root` and every literal or parenthesized
/// sub-expression reachable through literals and parentheses.
fn collect_blocked(
    nodes: &NodeArena,
    types: &TypeArena,
    ast_types: &ExprTypeMap,
    root: NodeIndex,
    to_block: &mut Vec<TypeId>,
) {
    walk(nodes, root, |index, kind| {
        if kind.is_statement() {
            return false;
        }
        if let Some(&ty) = ast_types.get(&index) {
            if is_blocked(types, ty) {
                to_block.push(ty);
            }
        }
        is_literal_or_group(kind)
    });
}

/// Blocked types inside the table constructor `expr`, in visit order.
pub fn find_blocked_types_in_table(
    nodes: &NodeArena,
    types: &TypeArena,
    expr: NodeIndex,
    ast_types: &ExprTypeMap,
) -> Vec<TypeId> {
    debug_assert!(
        matches!(nodes.kind(expr), Some(NodeKind::Table { .. })),
        "find_blocked_types_in_table expects a table constructor"
    );
    let mut to_block = Vec::new();
    collect_blocked(nodes, types, ast_types, expr, &mut to_block);
    to_block
}

/// Blocked types inside the literal (or parenthesized) arguments of the
/// call `expr`. Other arguments are skipped entirely.
pub fn find_blocked_arg_types_in_call(
    nodes: &NodeArena,
    types: &TypeArena,
    expr: NodeIndex,
    ast_types: &ExprTypeMap,
) -> Vec<TypeId> {
    let Some(NodeKind::Call { args, .. }) = nodes.kind(expr) else {
        debug_assert!(false, "find_blocked_arg_types_in_call expects a call");
        return Vec::new();
    };

    let mut to_block = Vec::new();
    for &arg in args {
        if nodes.kind(arg).is_some_and(is_literal_or_group) {
            collect_blocked(nodes, types, ast_types, arg, &mut to_block);
        }
    }
    to_block
}

#[cfg(test)]
#[path = "../tests/literal_tests.rs"]
mod tests;
