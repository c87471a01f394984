//! Metatable Resolution
//!
//! Resolves table properties through `__index` chains. A lookup first checks
//! the receiver's own property map; on a miss it asks for the receiver's
//! `__index` metamethod and keeps chasing:
//!
//! - `__index` is a table: look the name up there, else chase that table's
//!   own `__index`
//! - `__index` is a function: the property is the function's first return
//!   value (`nil` if it returns nothing)
//! - `__index` is `any`: the property is `any`
//! - anything else: report a diagnostic and keep chasing from that value
//!
//! The chase is capped at [`KernelOptions::max_index_chain`] hops. Hitting
//! the cap yields "not found" without a diagnostic.

use crate::arena::TypeArena;
use crate::format::type_to_string;
use crate::options::{KernelOptions, ValueContext};
use crate::type_pack::first;
use crate::type_queries::get_table_type;
use crate::types::*;
use lunar_common::diagnostics::diagnostic_messages;
use lunar_common::{DiagnosticCollector, Location, diagnostic_codes, format_message};
use tracing::{Level, debug, span, trace};

/// The metatable attached to `ty`: a table's own link, or the intrinsic
/// metatable registered for a primitive.
pub fn get_metatable(arena: &TypeArena, ty: TypeId) -> Option<TypeId> {
    match arena.get(ty) {
        TypeData::Table(table) => table.metatable,
        TypeData::Primitive(kind) => arena.primitive_metatable(*kind),
        TypeData::Singleton(SingletonValue::String(_)) => {
            arena.primitive_metatable(PrimitiveKind::String)
        }
        TypeData::Singleton(SingletonValue::Boolean(_)) => {
            arena.primitive_metatable(PrimitiveKind::Boolean)
        }
        _ => None,
    }
}

/// Resolves properties and metatable entries, recording malformed
/// metatables into a shared diagnostic collector.
pub struct MetatableResolver<'a> {
    arena: &'a TypeArena,
    diagnostics: &'a mut DiagnosticCollector,
    options: KernelOptions,
}

impl<'a> MetatableResolver<'a> {
    pub fn new(arena: &'a TypeArena, diagnostics: &'a mut DiagnosticCollector) -> Self {
        MetatableResolver {
            arena,
            diagnostics,
            options: KernelOptions::default(),
        }
    }

    pub fn with_options(
        arena: &'a TypeArena,
        diagnostics: &'a mut DiagnosticCollector,
        options: KernelOptions,
    ) -> Self {
        MetatableResolver {
            arena,
            diagnostics,
            options,
        }
    }

    /// Look up `entry` in the metatable of `ty`.
    ///
    /// Returns `any` when the metatable is `any`, and `None` when there is no
    /// metatable, the entry is missing, or the metatable is not a table (the
    /// latter also records a diagnostic).
    pub fn find_metatable_entry(
        &mut self,
        ty: TypeId,
        entry: &str,
        location: Location,
    ) -> Option<TypeId> {
        let ty = self.arena.follow(ty);
        let metatable = get_metatable(self.arena, ty)?;
        let unwrapped = self.arena.follow(metatable);

        if matches!(self.arena.raw(unwrapped), TypeData::Any) {
            return Some(TypeId::ANY);
        }

        let Some(mtt) = get_table_type(self.arena, unwrapped) else {
            debug!(ty = ty.0, metatable = unwrapped.0, "metatable is not a table");
            self.diagnostics.error(
                location,
                diagnostic_codes::METATABLE_NOT_A_TABLE,
                diagnostic_messages::METATABLE_NOT_A_TABLE,
            );
            return None;
        };

        mtt.prop(entry).map(Property::ty)
    }

    /// Find property `name` on `ty`, returning the whole property.
    ///
    /// Properties found on the receiver itself are returned as stored. On
    /// `any`, a read/write property of type `any` is minted. Properties
    /// resolved through `__index` are returned as read/write properties of
    /// the resolved type.
    pub fn find_table_property(
        &mut self,
        ty: TypeId,
        name: &str,
        location: Location,
    ) -> Option<Property> {
        let ty = self.arena.follow(ty);
        if matches!(self.arena.raw(ty), TypeData::Any) {
            return Some(Property::rw(ty));
        }

        if let Some(table) = get_table_type(self.arena, ty) {
            if let Some(prop) = table.prop(name) {
                return Some(*prop);
            }
        }

        self.chase_index(ty, name, location).map(Property::rw)
    }

    /// Find the type of property `name` on `ty` for a read.
    pub fn find_table_property_respecting_meta(
        &mut self,
        ty: TypeId,
        name: &str,
        location: Location,
    ) -> Option<TypeId> {
        self.find_table_property_in_context(ty, name, ValueContext::RValue, location)
    }

    /// Find the type of property `name` on `ty`, honoring `__index`.
    ///
    /// Under [`SolverMode::Split`](crate::SolverMode::Split), a property found
    /// directly on the receiver yields its read type for
    /// [`ValueContext::RValue`] and its write type for
    /// [`ValueContext::LValue`]; a property lacking that side yields `None`
    /// without consulting `__index`. Under the legacy mode the single stored
    /// type is returned for both.
    pub fn find_table_property_in_context(
        &mut self,
        ty: TypeId,
        name: &str,
        context: ValueContext,
        location: Location,
    ) -> Option<TypeId> {
        let ty = self.arena.follow(ty);
        if matches!(self.arena.raw(ty), TypeData::Any) {
            return Some(ty);
        }

        if let Some(table) = get_table_type(self.arena, ty) {
            if let Some(prop) = table.prop(name) {
                if !self.options.mode.splits_properties() {
                    return Some(prop.ty());
                }
                return match context {
                    ValueContext::RValue => prop.read_ty(),
                    ValueContext::LValue => prop.write_ty(),
                };
            }
        }

        self.chase_index(ty, name, location)
    }

    /// Follow the `__index` chain starting at the metatable of `ty`.
    fn chase_index(&mut self, ty: TypeId, name: &str, location: Location) -> Option<TypeId> {
        let _span = span!(Level::TRACE, "chase_index", ty = ty.0, name).entered();
        let arena = self.arena;

        let mut mt_index = self.find_metatable_entry(ty, "__index", location);
        let mut count: u32 = 0;
        while let Some(current) = mt_index {
            let index = arena.follow(current);

            if count >= self.options.max_index_chain {
                debug!(hops = count, "__index chain exceeded the hop limit");
                return None;
            }
            count += 1;

            match arena.raw(index) {
                TypeData::Table(itt) => {
                    if let Some(prop) = itt.prop(name) {
                        trace!(hops = count, "resolved through __index table");
                        return Some(prop.ty());
                    }
                }
                TypeData::Function(itf) => {
                    trace!(hops = count, "resolved through __index function");
                    return Some(index_function_result(arena, itf));
                }
                TypeData::Any => return Some(TypeId::ANY),
                _ => {
                    let message = format_message(
                        diagnostic_messages::INDEX_NOT_FUNCTION_OR_TABLE,
                        &[&type_to_string(arena, index)],
                    );
                    self.diagnostics.error(
                        location,
                        diagnostic_codes::INDEX_NOT_FUNCTION_OR_TABLE,
                        message,
                    );
                }
            }

            mt_index = self.find_metatable_entry(index, "__index", location);
        }

        None
    }
}

/// The property type produced by an `__index` function: its first return
/// value, or `nil` when it returns nothing.
fn index_function_result(arena: &TypeArena, function: &FunctionType) -> TypeId {
    first(arena, function.ret_types).unwrap_or(TypeId::NIL)
}

#[cfg(test)]
#[path = "../tests/metatable_tests.rs"]
mod tests;
