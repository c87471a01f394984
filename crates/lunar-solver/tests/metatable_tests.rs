use super::*;
use lunar_common::Location;

fn loc() -> Location {
    Location::on_line(3, 1, 8)
}

/// A table with metatable `{ __index = index }`.
fn with_index(arena: &mut TypeArena, index: TypeId) -> TypeId {
    let mt = arena.table(TableType::with_props([("__index", Property::rw(index))]));
    let mut table = TableType::new();
    table.metatable = Some(mt);
    arena.table(table)
}

/// A receiver whose property `x` is `hops` `__index` tables away.
fn index_chain(arena: &mut TypeArena, hops: usize) -> TypeId {
    let mut current = arena.table(TableType::with_props([("x", Property::rw(TypeId::NUMBER))]));
    for _ in 0..hops {
        current = with_index(arena, current);
    }
    current
}

#[test]
fn direct_property_without_metatable() {
    lunar_common::init_tracing();
    let mut arena = TypeArena::new();
    let table = arena.table(TableType::with_props([("x", Property::rw(TypeId::NUMBER))]));
    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);

    assert_eq!(
        resolver.find_table_property_respecting_meta(table, "x", loc()),
        Some(TypeId::NUMBER)
    );
    assert_eq!(resolver.find_table_property_respecting_meta(table, "y", loc()), None);
    assert!(diagnostics.is_empty());
}

#[test]
fn resolves_through_index_table() {
    let mut arena = TypeArena::new();
    let receiver = index_chain(&mut arena, 2);
    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);

    assert_eq!(
        resolver.find_table_property_respecting_meta(receiver, "x", loc()),
        Some(TypeId::NUMBER)
    );
    assert_eq!(resolver.find_table_property_respecting_meta(receiver, "z", loc()), None);
    assert!(diagnostics.is_empty());
}

#[test]
fn chain_of_exactly_the_limit_resolves() {
    let mut arena = TypeArena::new();
    let receiver = index_chain(&mut arena, 100);
    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);

    assert_eq!(
        resolver.find_table_property_respecting_meta(receiver, "x", loc()),
        Some(TypeId::NUMBER)
    );
}

#[test]
fn chain_past_the_limit_gives_up_silently() {
    let mut arena = TypeArena::new();
    let receiver = index_chain(&mut arena, 101);
    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);

    assert_eq!(resolver.find_table_property_respecting_meta(receiver, "x", loc()), None);
    assert!(diagnostics.is_empty());
}

#[test]
fn configured_limit_is_honored() {
    let mut arena = TypeArena::new();
    let receiver = index_chain(&mut arena, 3);
    let mut diagnostics = DiagnosticCollector::new();

    let options = KernelOptions::default().with_max_index_chain(2);
    let mut resolver = MetatableResolver::with_options(&arena, &mut diagnostics, options);
    assert_eq!(resolver.find_table_property_respecting_meta(receiver, "x", loc()), None);

    let options = KernelOptions::default().with_max_index_chain(3);
    let mut resolver = MetatableResolver::with_options(&arena, &mut diagnostics, options);
    assert_eq!(
        resolver.find_table_property_respecting_meta(receiver, "x", loc()),
        Some(TypeId::NUMBER)
    );
}

#[test]
fn self_referential_index_terminates() {
    let mut arena = TypeArena::new();
    let mt = arena.table(TableType::new());
    arena
        .table_mut(mt)
        .expect("table")
        .props
        .insert("__index".into(), Property::rw(mt));
    arena.table_mut(mt).expect("table").metatable = Some(mt);

    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);
    assert_eq!(resolver.find_table_property_respecting_meta(mt, "missing", loc()), None);
    assert!(diagnostics.is_empty());
}

#[test]
fn index_function_yields_first_return() {
    let mut arena = TypeArena::new();
    let rets = arena.pack(vec![TypeId::STRING, TypeId::NUMBER], None);
    let getter = arena.function(TypePackId::EMPTY, rets);
    let receiver = with_index(&mut arena, getter);

    let silent = arena.function(TypePackId::EMPTY, TypePackId::EMPTY);
    let silent_receiver = with_index(&mut arena, silent);

    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);
    assert_eq!(
        resolver.find_table_property_respecting_meta(receiver, "anything", loc()),
        Some(TypeId::STRING)
    );
    assert_eq!(
        resolver.find_table_property_respecting_meta(silent_receiver, "anything", loc()),
        Some(TypeId::NIL)
    );
}

#[test]
fn any_receiver_and_any_index() {
    let mut arena = TypeArena::new();
    let receiver = with_index(&mut arena, TypeId::ANY);
    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);

    assert_eq!(
        resolver.find_table_property_respecting_meta(TypeId::ANY, "x", loc()),
        Some(TypeId::ANY)
    );
    assert_eq!(
        resolver.find_table_property_respecting_meta(receiver, "x", loc()),
        Some(TypeId::ANY)
    );
    assert_eq!(
        resolver.find_table_property(TypeId::ANY, "x", loc()),
        Some(Property::rw(TypeId::ANY))
    );
}

#[test]
fn any_metatable_yields_any_entry() {
    let mut arena = TypeArena::new();
    let mut table = TableType::new();
    table.metatable = Some(TypeId::ANY);
    let table = arena.table(table);

    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);
    assert_eq!(
        resolver.find_metatable_entry(table, "__add", loc()),
        Some(TypeId::ANY)
    );
    assert_eq!(
        resolver.find_table_property_respecting_meta(table, "x", loc()),
        Some(TypeId::ANY)
    );
}

#[test]
fn non_table_metatable_is_reported() {
    let mut arena = TypeArena::new();
    let mut table = TableType::new();
    table.metatable = Some(TypeId::NUMBER);
    let table = arena.table(table);

    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);
    assert_eq!(resolver.find_metatable_entry(table, "__index", loc()), None);

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics.as_slice()[0];
    assert_eq!(diagnostic.code, diagnostic_codes::METATABLE_NOT_A_TABLE);
    assert_eq!(diagnostic.message_text, "Metatable was not a table");
    assert_eq!(diagnostic.location, loc());
}

#[test]
fn non_callable_index_is_reported() {
    let mut arena = TypeArena::new();
    let receiver = with_index(&mut arena, TypeId::NUMBER);

    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);
    assert_eq!(resolver.find_table_property_respecting_meta(receiver, "x", loc()), None);

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics.as_slice()[0];
    assert_eq!(diagnostic.code, diagnostic_codes::INDEX_NOT_FUNCTION_OR_TABLE);
    assert_eq!(
        diagnostic.message_text,
        "__index should either be a function or table. Got number"
    );
}

#[test]
fn primitive_values_use_their_intrinsic_metatable() {
    let mut arena = TypeArena::new();
    let upper_rets = arena.pack(vec![TypeId::STRING], None);
    let upper = arena.function(TypePackId::EMPTY, upper_rets);
    let strlib = arena.table(TableType::with_props([("upper", Property::rw(upper))]));
    let mt = arena.table(TableType::with_props([("__index", Property::rw(strlib))]));
    arena.set_primitive_metatable(PrimitiveKind::String, mt);
    let literal = arena.string_singleton("hi");

    assert_eq!(get_metatable(&arena, TypeId::STRING), Some(mt));
    assert_eq!(get_metatable(&arena, literal), Some(mt));
    assert_eq!(get_metatable(&arena, TypeId::NUMBER), None);

    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);
    assert_eq!(
        resolver.find_table_property_respecting_meta(literal, "upper", loc()),
        Some(upper)
    );
}

#[test]
fn whole_property_lookup() {
    let mut arena = TypeArena::new();
    let base = arena.table(TableType::with_props([(
        "x",
        Property::readonly(TypeId::STRING),
    )]));
    let receiver = with_index(&mut arena, base);
    arena
        .table_mut(receiver)
        .expect("table")
        .props
        .insert("own".into(), Property::rw_split(TypeId::NUMBER, TypeId::NIL));

    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);
    assert_eq!(
        resolver.find_table_property(receiver, "own", loc()),
        Some(Property::rw_split(TypeId::NUMBER, TypeId::NIL))
    );
    assert_eq!(
        resolver.find_table_property(receiver, "x", loc()),
        Some(Property::rw(TypeId::STRING))
    );
    assert_eq!(resolver.find_table_property(receiver, "nope", loc()), None);
}

#[test]
fn split_mode_respects_value_context() {
    let mut arena = TypeArena::new();
    let table = arena.table(TableType::with_props([
        ("split", Property::rw_split(TypeId::NUMBER, TypeId::STRING)),
        ("ro", Property::readonly(TypeId::BOOLEAN)),
    ]));

    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);
    assert_eq!(
        resolver.find_table_property_in_context(table, "split", ValueContext::RValue, loc()),
        Some(TypeId::NUMBER)
    );
    assert_eq!(
        resolver.find_table_property_in_context(table, "split", ValueContext::LValue, loc()),
        Some(TypeId::STRING)
    );
    assert_eq!(
        resolver.find_table_property_in_context(table, "ro", ValueContext::LValue, loc()),
        None
    );
}

#[test]
fn legacy_mode_uses_the_single_type() {
    let mut arena = TypeArena::new();
    let table = arena.table(TableType::with_props([(
        "split",
        Property::rw_split(TypeId::NUMBER, TypeId::STRING),
    )]));

    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver =
        MetatableResolver::with_options(&arena, &mut diagnostics, KernelOptions::legacy());
    assert_eq!(
        resolver.find_table_property_in_context(table, "split", ValueContext::LValue, loc()),
        Some(TypeId::NUMBER)
    );
}

#[test]
fn chase_continues_past_a_malformed_index() {
    let mut arena = TypeArena::new();
    let strlib = arena.table(TableType::with_props([("x", Property::rw(TypeId::NUMBER))]));
    let string_mt = arena.table(TableType::with_props([("__index", Property::rw(strlib))]));
    arena.set_primitive_metatable(PrimitiveKind::String, string_mt);
    let receiver = with_index(&mut arena, TypeId::STRING);

    let mut diagnostics = DiagnosticCollector::new();
    let mut resolver = MetatableResolver::new(&arena, &mut diagnostics);
    assert_eq!(
        resolver.find_table_property_respecting_meta(receiver, "x", loc()),
        Some(TypeId::NUMBER)
    );

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics.as_slice()[0];
    assert_eq!(diagnostic.code, diagnostic_codes::INDEX_NOT_FUNCTION_OR_TABLE);
    assert_eq!(
        diagnostic.message_text,
        "__index should either be a function or table. Got string"
    );
}
