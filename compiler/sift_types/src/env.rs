//! Symbol environment for name resolution and scoping.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use sift_ir::Name;

use crate::{ClassId, Idx};

/// A variable: its declared type and the type it currently holds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarInfo {
    pub declared: Idx,
    pub current: Idx,
    /// For a `Final` variable initialized with a literal: that literal type.
    pub final_literal: Option<Idx>,
}

impl VarInfo {
    /// A variable whose current type is its declared type.
    pub fn new(declared: Idx) -> Self {
        VarInfo {
            declared,
            current: declared,
            final_literal: None,
        }
    }

    /// A `Final` constant holding `literal`, declared as `declared`.
    pub fn final_constant(declared: Idx, literal: Idx) -> Self {
        VarInfo {
            declared,
            current: literal,
            final_literal: Some(literal),
        }
    }
}

/// A type alias.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct AliasInfo {
    pub target: Idx,
    /// `Alias = list[int]` style aliases carry explicit type arguments.
    pub has_type_args: bool,
}

/// A module-like namespace reachable through dotted names.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    pub name: Name,
    members: FxHashMap<Name, Symbol>,
}

impl Namespace {
    pub fn new(name: Name) -> Self {
        Namespace {
            name,
            members: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_member(mut self, name: Name, symbol: Symbol) -> Self {
        self.members.insert(name, symbol);
        self
    }

    pub fn member(&self, name: Name) -> Option<&Symbol> {
        self.members.get(&name)
    }
}

/// What a name refers to.
#[derive(Clone, Debug)]
pub enum Symbol {
    Var(VarInfo),
    Class(ClassId),
    Alias(AliasInfo),
    Namespace(Rc<Namespace>),
}

/// Internal storage for `SymbolEnv`, wrapped in `Rc` for cheap cloning.
#[derive(Clone, Debug, Default)]
struct SymbolEnvInner {
    symbols: FxHashMap<Name, Symbol>,
    /// Parent scope - cheap `Rc` clone when creating child scopes.
    parent: Option<SymbolEnv>,
}

/// Symbol environment with nested scopes.
///
/// Each match branch checks its body in a child scope, so captures and
/// narrowings never leak into sibling branches.
///
/// # Performance
/// Uses `Rc<SymbolEnvInner>` internally: creating a child scope is O(1).
#[derive(Clone, Debug, Default)]
pub struct SymbolEnv(Rc<SymbolEnvInner>);

impl SymbolEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a child scope.
    #[must_use]
    pub fn child(&self) -> Self {
        SymbolEnv(Rc::new(SymbolEnvInner {
            symbols: FxHashMap::default(),
            parent: Some(self.clone()),
        }))
    }

    /// Bind a name in the current scope, shadowing outer bindings.
    pub fn declare(&mut self, name: Name, symbol: Symbol) {
        Rc::make_mut(&mut self.0).symbols.insert(name, symbol);
    }

    /// Declare a variable whose current type is its declared type.
    pub fn declare_var(&mut self, name: Name, declared: Idx) {
        self.declare(name, Symbol::Var(VarInfo::new(declared)));
    }

    /// Set the current type of a visible variable, recording the narrowing
    /// in this scope. Returns `false` if `name` is not a variable.
    pub fn narrow(&mut self, name: Name, current: Idx) -> bool {
        let Some(var) = self.lookup_var(name) else {
            return false;
        };
        let narrowed = VarInfo { current, ..var };
        self.declare(name, Symbol::Var(narrowed));
        true
    }

    /// Look up a name, searching parent scopes.
    pub fn lookup(&self, name: Name) -> Option<&Symbol> {
        self.0
            .symbols
            .get(&name)
            .or_else(|| self.0.parent.as_ref().and_then(|p| p.lookup(name)))
    }

    /// Look up a variable, searching parent scopes.
    pub fn lookup_var(&self, name: Name) -> Option<VarInfo> {
        match self.lookup(name) {
            Some(Symbol::Var(var)) => Some(*var),
            _ => None,
        }
    }

    /// Check if a name is bound in the current scope only.
    pub fn is_bound_locally(&self, name: Name) -> bool {
        self.0.symbols.contains_key(&name)
    }

    /// Variables bound or narrowed in this scope, sorted by name.
    pub fn local_vars(&self) -> Vec<(Name, VarInfo)> {
        let mut vars: Vec<_> = self
            .0
            .symbols
            .iter()
            .filter_map(|(&name, symbol)| match symbol {
                Symbol::Var(var) => Some((name, *var)),
                _ => None,
            })
            .collect();
        vars.sort_by_key(|&(name, _)| name);
        vars
    }
}

#[cfg(test)]
mod tests;
