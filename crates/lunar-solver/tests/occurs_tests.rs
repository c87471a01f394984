use super::*;

#[test]
fn needle_occurs_in_itself() {
    let mut arena = TypeArena::new();
    let blocked = arena.blocked();
    assert!(occurs_check(&arena, blocked, blocked));
}

#[test]
fn occurs_through_union_and_intersection() {
    let mut arena = TypeArena::new();
    let blocked = arena.blocked();
    let inner = arena.intersection(vec![TypeId::STRING, blocked]);
    let outer = arena.union(vec![TypeId::NUMBER, inner]);
    assert!(occurs_check(&arena, blocked, outer));

    let other = arena.blocked();
    assert!(!occurs_check(&arena, other, outer));
}

#[test]
fn occurs_through_bound_haystack() {
    let mut arena = TypeArena::new();
    let pending = arena.pending_expansion("List", vec![TypeId::NUMBER]);
    let union = arena.union(vec![TypeId::NIL, pending]);
    let free = arena.fresh_type(ScopeId::ROOT);
    arena.bind(free, union);
    assert!(occurs_check(&arena, pending, free));
}

#[test]
fn tables_and_functions_are_opaque() {
    let mut arena = TypeArena::new();
    let blocked = arena.blocked();
    let table = arena.table(TableType::with_props([("x", Property::rw(blocked))]));
    let rets = arena.pack(vec![blocked], None);
    let function = arena.function(TypePackId::EMPTY, rets);
    let union = arena.union(vec![table, function]);

    assert!(!occurs_check(&arena, blocked, table));
    assert!(!occurs_check(&arena, blocked, union));
}

#[test]
#[should_panic(expected = "not a blocked or pending-expansion type")]
fn needle_must_be_a_placeholder() {
    let arena = TypeArena::new();
    occurs_check(&arena, TypeId::NUMBER, TypeId::NUMBER);
}

#[test]
fn self_referential_union_terminates() {
    let mut arena = TypeArena::new();
    let blocked = arena.blocked();
    let free = arena.fresh_type(ScopeId::ROOT);
    let union = arena.union(vec![TypeId::NUMBER, free]);
    arena.bind(free, union);

    assert!(!occurs_check(&arena, blocked, union));

    let other = arena.fresh_type(ScopeId::ROOT);
    let with_needle = arena.union(vec![other, blocked]);
    arena.bind(other, with_needle);
    assert!(occurs_check(&arena, blocked, with_needle));
}
