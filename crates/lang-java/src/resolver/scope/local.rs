use crate::resolver::context::ResolveHelper;
use crate::resolver::{ScopeKind, ScopeLookup};
use indexmap::IndexMap;
use scopechain_api::{SymbolResult, TypeSymbol, ValueSymbol};
use smol_str::SmolStr;

/// Locals, parameters and local classes declared directly in a block.
#[derive(Debug, Default, Clone)]
pub struct LocalScope {
    variables: IndexMap<SmolStr, ValueSymbol>,
    classes: IndexMap<SmolStr, TypeSymbol>,
}

impl LocalScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, variable: ValueSymbol) -> Self {
        self.variables
            .insert(SmolStr::new(variable.name()), variable);
        self
    }

    pub fn with_class(mut self, class: TypeSymbol) -> Self {
        self.classes.insert(SmolStr::new(class.simple_name()), class);
        self
    }

    pub fn variables(&self) -> impl Iterator<Item = &ValueSymbol> {
        self.variables.values()
    }
}

impl ScopeLookup for LocalScope {
    fn kind(&self) -> ScopeKind {
        ScopeKind::Local
    }

    fn resolve_type_name_impl(
        &self,
        simple_name: &str,
        _helper: &ResolveHelper,
    ) -> SymbolResult<Option<TypeSymbol>> {
        Ok(self.classes.get(simple_name).cloned())
    }

    fn resolve_value_name_impl(
        &self,
        simple_name: &str,
        _helper: &ResolveHelper,
    ) -> SymbolResult<Option<ValueSymbol>> {
        Ok(self.variables.get(simple_name).cloned())
    }
}
