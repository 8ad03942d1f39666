//! Name resolution for class references and dotted value references.
//!
//! A bare name resolves through the scope chain and then the class table
//! (which holds the builtins). A dotted name resolves its base first and
//! then looks the member up on a namespace, a class, or a variable's type.

use sift_ir::{ExprArena, ExprId, ExprKind, StringInterner};
use sift_types::{ClassId, Idx, Pool, Symbol, SymbolEnv, TypeFlags, VarInfo};

use crate::checker::Checker;
use crate::errors::ResolveError;
use crate::expr;

/// Resolve a `Name` or `Attribute` expression to the symbol it denotes.
pub(crate) fn resolve_symbol(
    ck: &mut Checker<'_>,
    env: &SymbolEnv,
    id: ExprId,
) -> Result<Symbol, ResolveError> {
    let arena = ck.arena;
    match arena.get_expr(id).kind {
        ExprKind::Name(name) => env
            .lookup(name)
            .cloned()
            .or_else(|| ck.pool.classes().find(name).map(Symbol::Class))
            .ok_or_else(|| unresolved(ck, id)),
        ExprKind::Attribute { base, attr } => match resolve_symbol(ck, env, base)? {
            Symbol::Namespace(namespace) => namespace
                .member(attr)
                .cloned()
                .ok_or_else(|| unresolved(ck, id)),
            Symbol::Class(class) => {
                class_member(ck.pool, class, attr).ok_or_else(|| unresolved(ck, id))
            }
            Symbol::Alias(alias) => ck
                .pool
                .class_of(alias.target)
                .and_then(|class| class_member(ck.pool, class, attr))
                .ok_or_else(|| unresolved(ck, id)),
            Symbol::Var(var) => {
                // Unknown attributes of a typed value are not reported here.
                let ty = ck
                    .pool
                    .lookup_attribute(var.current, attr)
                    .unwrap_or(Idx::ANY);
                Ok(Symbol::Var(VarInfo::new(ty)))
            }
        },
        _ => {
            let ty = expr::infer_expr(ck, env, id);
            Ok(Symbol::Var(VarInfo::new(ty)))
        }
    }
}

/// Resolve the class expression of a class pattern to the type it tests.
pub(crate) fn resolve_class_ref(
    ck: &mut Checker<'_>,
    env: &SymbolEnv,
    id: ExprId,
) -> Result<Idx, ResolveError> {
    match resolve_symbol(ck, env, id)? {
        Symbol::Class(class) => Ok(ck.pool.any_instance(class)),
        Symbol::Alias(alias) if alias.has_type_args => Err(ResolveError::ParameterizedAlias),
        Symbol::Alias(alias) => Ok(alias.target),
        Symbol::Var(var) => Err(ResolveError::NotAType {
            found: ck.format(var.current),
        }),
        Symbol::Namespace(namespace) => Err(ResolveError::NotAType {
            found: ck.pool.interner().lookup(namespace.name).to_string(),
        }),
    }
}

/// A class-level attribute seen as a variable.
///
/// Final attributes holding a literal keep it, so `Color.RED` can act as a
/// literal in value patterns.
fn class_member(pool: &mut Pool, class: ClassId, attr: sift_ir::Name) -> Option<Symbol> {
    let (owner, attribute) = pool.classes().find_attribute(class, attr)?;
    let ty = pool.substitute(attribute.ty, owner, &[]);
    let final_literal = (attribute.is_final && pool.flags(ty).contains(TypeFlags::IS_LITERAL))
        .then_some(ty);
    Some(Symbol::Var(VarInfo {
        declared: ty,
        current: ty,
        final_literal,
    }))
}

fn unresolved(ck: &Checker<'_>, id: ExprId) -> ResolveError {
    ResolveError::UnresolvedName {
        name: dotted_name(ck.arena, ck.pool.interner(), id),
    }
}

/// Render a `Name`/`Attribute` chain as `a.b.c`.
pub(crate) fn dotted_name(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    let mut parts = Vec::new();
    let mut current = id;
    loop {
        match arena.get_expr(current).kind {
            ExprKind::Name(name) => {
                parts.push(interner.lookup(name));
                break;
            }
            ExprKind::Attribute { base, attr } => {
                parts.push(interner.lookup(attr));
                current = base;
            }
            _ => {
                parts.push("<expr>");
                break;
            }
        }
    }
    parts.reverse();
    parts.join(".")
}
