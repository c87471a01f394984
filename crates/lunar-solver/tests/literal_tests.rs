use super::*;
use crate::types::ScopeId;
use lunar_ast::TableItem;
use lunar_common::Location;

fn loc() -> Location {
    Location::default()
}

#[test]
fn literal_classification() {
    let mut nodes = NodeArena::new();
    let number = nodes.add_number(1.0, loc());
    let table = nodes.add_table(vec![], loc());
    let name = nodes.add_local("x", loc());
    let group = nodes.add_group(number, loc());

    assert!(is_literal(&nodes, number));
    assert!(is_literal(&nodes, table));
    assert!(!is_literal(&nodes, name));
    assert!(!is_literal(&nodes, group));
    assert!(!is_literal(&nodes, NodeIndex::NONE));
}

#[test]
fn table_literal_with_blocked_members() {
    let mut nodes = NodeArena::new();
    let mut types = TypeArena::new();
    let mut ast_types = ExprTypeMap::default();

    let key = nodes.add_string("a", loc());
    let value = nodes.add_number(1.0, loc());
    let inner_value = nodes.add_bool(true, loc());
    let inner = nodes.add_table(vec![TableItem::list(inner_value)], loc());
    let table = nodes.add_table(vec![TableItem::record(key, value), TableItem::list(inner)], loc());

    let table_ty = types.blocked();
    let value_ty = types.blocked();
    let inner_value_ty = types.blocked();
    ast_types.insert(table, table_ty);
    ast_types.insert(key, TypeId::STRING);
    ast_types.insert(value, value_ty);
    ast_types.insert(inner, TypeId::NUMBER);
    ast_types.insert(inner_value, inner_value_ty);

    let blocked = find_blocked_types_in_table(&nodes, &types, table, &ast_types);
    assert_eq!(blocked, vec![table_ty, value_ty, inner_value_ty]);
}

#[test]
fn calls_inside_a_table_are_opaque() {
    let mut nodes = NodeArena::new();
    let mut types = TypeArena::new();
    let mut ast_types = ExprTypeMap::default();

    let f = nodes.add_global("f", loc());
    let arg = nodes.add_table(vec![], loc());
    let call = nodes.add_call(f, vec![arg], loc());
    let table = nodes.add_table(vec![TableItem::list(call)], loc());

    let call_ty = types.blocked();
    let arg_ty = types.blocked();
    let f_ty = types.blocked();
    ast_types.insert(call, call_ty);
    ast_types.insert(arg, arg_ty);
    ast_types.insert(f, f_ty);

    let blocked = find_blocked_types_in_table(&nodes, &types, table, &ast_types);
    assert_eq!(blocked, vec![call_ty]);
}

#[test]
fn function_literal_bodies_are_not_scanned() {
    let mut nodes = NodeArena::new();
    let mut types = TypeArena::new();
    let mut ast_types = ExprTypeMap::default();

    let ret_value = nodes.add_number(1.0, loc());
    let ret = nodes.add_return(vec![ret_value], loc());
    let body = nodes.add_block(vec![ret], loc());
    let function = nodes.add_function(vec![], false, body, loc());
    let table = nodes.add_table(vec![TableItem::list(function)], loc());

    let function_ty = types.blocked();
    let ret_value_ty = types.blocked();
    ast_types.insert(function, function_ty);
    ast_types.insert(ret_value, ret_value_ty);

    let blocked = find_blocked_types_in_table(&nodes, &types, table, &ast_types);
    assert_eq!(blocked, vec![function_ty]);
}

#[test]
fn resolved_placeholders_are_skipped() {
    let mut nodes = NodeArena::new();
    let mut types = TypeArena::new();
    let mut ast_types = ExprTypeMap::default();

    let value = nodes.add_number(1.0, loc());
    let table = nodes.add_table(vec![TableItem::list(value)], loc());

    let free = types.fresh_type(ScopeId::ROOT);
    types.bind(free, TypeId::NUMBER);
    let pending = types.pending_expansion("T", vec![]);
    ast_types.insert(value, free);
    ast_types.insert(table, pending);

    assert!(find_blocked_types_in_table(&nodes, &types, table, &ast_types).is_empty());
}

#[test]
fn bound_to_blocked_reports_the_recorded_handle() {
    let mut nodes = NodeArena::new();
    let mut types = TypeArena::new();
    let mut ast_types = ExprTypeMap::default();

    let table = nodes.add_table(vec![], loc());
    let blocked = types.blocked();
    let free = types.fresh_type(ScopeId::ROOT);
    types.bind(free, blocked);
    ast_types.insert(table, free);

    assert_eq!(find_blocked_types_in_table(&nodes, &types, table, &ast_types), vec![free]);
}

#[test]
fn call_arguments_scan_only_literals_and_groups() {
    let mut nodes = NodeArena::new();
    let mut types = TypeArena::new();
    let mut ast_types = ExprTypeMap::default();

    let f = nodes.add_global("f", loc());
    let local = nodes.add_local("x", loc());
    let field = nodes.add_number(2.0, loc());
    let table = nodes.add_table(vec![TableItem::list(field)], loc());
    let grouped_inner = nodes.add_string("s", loc());
    let group = nodes.add_group(grouped_inner, loc());
    let call = nodes.add_call(f, vec![local, table, group], loc());

    let local_ty = types.blocked();
    let field_ty = types.blocked();
    let inner_ty = types.blocked();
    ast_types.insert(local, local_ty);
    ast_types.insert(field, field_ty);
    ast_types.insert(grouped_inner, inner_ty);

    let blocked = find_blocked_arg_types_in_call(&nodes, &types, call, &ast_types);
    assert_eq!(blocked, vec![field_ty, inner_ty]);
}

#[test]
fn operators_and_index_expressions_are_opaque() {
    use lunar_ast::{BinaryOp, UnaryOp};

    let mut nodes = NodeArena::new();
    let mut types = TypeArena::new();
    let mut ast_types = ExprTypeMap::default();

    let lhs = nodes.add_table(vec![], loc());
    let rhs = nodes.add_number(1.0, loc());
    let sum = nodes.add_binary(BinaryOp::Add, lhs, rhs, loc());
    let negated_inner = nodes.add_table(vec![], loc());
    let negated = nodes.add_unary(UnaryOp::Minus, negated_inner, loc());
    let base = nodes.add_local("t", loc());
    let key = nodes.add_string("k", loc());
    let indexed = nodes.add_index_expr(base, key, loc());
    let field = nodes.add_index_name(base, "f", loc());
    let cond = nodes.add_bool(true, loc());
    let then_table = nodes.add_table(vec![], loc());
    let choice = nodes.add_if_else(cond, then_table, rhs, loc());
    let method_arg = nodes.add_table(vec![], loc());
    let method = nodes.add_method_call(field, vec![method_arg], loc());
    let general_key = nodes.add_string("g", loc());
    let table = nodes.add_table(
        vec![
            TableItem::list(sum),
            TableItem::list(negated),
            TableItem::list(indexed),
            TableItem::list(choice),
            TableItem::general(general_key, method),
        ],
        loc(),
    );

    let sum_ty = types.blocked();
    ast_types.insert(sum, sum_ty);
    for inner in [lhs, rhs, negated_inner, key, then_table, cond, method_arg, field] {
        let ty = types.blocked();
        ast_types.insert(inner, ty);
    }
    let method_ty = types.blocked();
    ast_types.insert(method, method_ty);

    let blocked = find_blocked_types_in_table(&nodes, &types, table, &ast_types);
    assert_eq!(blocked, vec![sum_ty, method_ty]);
}
