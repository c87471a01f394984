//! Type formatting for diagnostic messages.
//!
//! This is a short-form printer: enough to name the offending type in a
//! message, bounded in depth so recursive tables terminate.

use crate::arena::TypeArena;
use crate::type_pack::flatten;
use crate::types::*;
use lunar_common::limits::MAX_FORMAT_DEPTH;
use std::fmt::Write;

pub struct TypeFormatter<'a> {
    arena: &'a TypeArena,
    max_depth: u32,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(arena: &'a TypeArena) -> Self {
        TypeFormatter {
            arena,
            max_depth: MAX_FORMAT_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn format(&self, ty: TypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty, 0);
        out
    }

    pub fn format_pack(&self, pack: TypePackId) -> String {
        let mut out = String::new();
        self.write_pack(&mut out, pack, 0);
        out
    }

    fn write_type(&self, out: &mut String, ty: TypeId, depth: u32) {
        if depth > self.max_depth {
            out.push_str("...");
            return;
        }
        let ty = self.arena.follow(ty);
        match self.arena.raw(ty) {
            TypeData::Any => out.push_str("any"),
            TypeData::Never => out.push_str("never"),
            TypeData::Unknown => out.push_str("unknown"),
            TypeData::Error => out.push_str("*error-type*"),
            TypeData::Nil => out.push_str("nil"),
            TypeData::Primitive(kind) => out.push_str(kind.name()),
            TypeData::Singleton(SingletonValue::Boolean(value)) => {
                let _ = write!(out, "{value}");
            }
            TypeData::Singleton(SingletonValue::String(value)) => {
                let _ = write!(out, "\"{value}\"");
            }
            TypeData::Table(table) => self.write_table(out, table, depth),
            TypeData::Function(function) => {
                out.push('(');
                self.write_pack(out, function.arg_types, depth + 1);
                out.push_str(") -> ");
                self.write_returns(out, function.ret_types, depth + 1);
            }
            TypeData::Union(members) => self.write_joined(out, members, " | ", depth),
            TypeData::Intersection(members) => self.write_joined(out, members, " & ", depth),
            TypeData::Free(_) => {
                let _ = write!(out, "'{ty}");
            }
            TypeData::Generic(generic) => out.push_str(&generic.name),
            TypeData::Blocked => {
                let _ = write!(out, "*blocked-{}*", ty.0);
            }
            TypeData::PendingExpansion(pending) => {
                out.push_str(&pending.name);
                if !pending.type_args.is_empty() {
                    out.push('<');
                    self.write_joined(out, &pending.type_args, ", ", depth);
                    out.push('>');
                }
            }
            // follow() never stops on a bound node.
            TypeData::Bound(_) => out.push_str("*bound*"),
        }
    }

    fn write_joined(&self, out: &mut String, members: &[TypeId], separator: &str, depth: u32) {
        for (i, &member) in members.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            self.write_type(out, member, depth + 1);
        }
    }

    fn write_table(&self, out: &mut String, table: &TableType, depth: u32) {
        if let Some(name) = &table.name {
            out.push_str(name);
            return;
        }
        if table.props.is_empty() && table.indexer.is_none() {
            out.push_str("{}");
            return;
        }

        out.push_str("{ ");
        let mut first = true;
        let mut sep = |out: &mut String| {
            if !first {
                out.push_str(", ");
            }
            first = false;
        };
        if let Some(indexer) = &table.indexer {
            sep(out);
            out.push('[');
            self.write_type(out, indexer.key, depth + 1);
            out.push_str("]: ");
            self.write_type(out, indexer.value, depth + 1);
        }
        for (name, prop) in &table.props {
            if prop.is_shared() {
                sep(out);
                let _ = write!(out, "{name}: ");
                self.write_type(out, prop.ty(), depth + 1);
                continue;
            }
            if let Some(read) = prop.read_ty() {
                sep(out);
                let _ = write!(out, "read {name}: ");
                self.write_type(out, read, depth + 1);
            }
            if let Some(write) = prop.write_ty() {
                sep(out);
                let _ = write!(out, "write {name}: ");
                self.write_type(out, write, depth + 1);
            }
        }
        out.push_str(" }");
    }

    fn write_returns(&self, out: &mut String, pack: TypePackId, depth: u32) {
        let (head, tail) = flatten(self.arena, pack);
        if head.len() == 1 && tail.is_none() {
            self.write_type(out, head[0], depth);
        } else {
            out.push('(');
            self.write_pack(out, pack, depth);
            out.push(')');
        }
    }

    fn write_pack(&self, out: &mut String, pack: TypePackId, depth: u32) {
        if depth > self.max_depth {
            out.push_str("...");
            return;
        }
        let (head, tail) = flatten(self.arena, pack);
        self.write_joined(out, &head, ", ", depth);
        let Some(tail) = tail else {
            return;
        };
        if !head.is_empty() {
            out.push_str(", ");
        }
        match self.arena.get_pack(tail) {
            TypePackData::Variadic(variadic) => {
                out.push_str("...");
                self.write_type(out, variadic.ty, depth + 1);
            }
            TypePackData::Free(_) => {
                let _ = write!(out, "'{}...", self.arena.follow_pack(tail));
            }
            TypePackData::Generic(generic) => {
                let _ = write!(out, "{}...", generic.name);
            }
            TypePackData::Blocked => out.push_str("*blocked-tp*"),
            TypePackData::Error => out.push_str("*error-type*..."),
            TypePackData::Fixed(_) | TypePackData::Bound(_) => {}
        }
    }
}

/// Format `ty` with default settings.
pub fn type_to_string(arena: &TypeArena, ty: TypeId) -> String {
    TypeFormatter::new(arena).format(ty)
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
