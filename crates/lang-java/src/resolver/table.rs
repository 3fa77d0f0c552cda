use super::context::ResolveHelper;
use super::stream::{MethodCandidates, MethodStream};
use super::{ResolveResult, ScopeKind, SymbolTable, TableId};
use scopechain_api::{MethodSymbol, SymbolResult, TypeSymbol, ValueSymbol};
use std::sync::Arc;
use tracing::trace;

/// The local lookups of one kind of scope.
///
/// Implementations only look at their own bindings. Returning `Ok(None)` (or
/// no candidates) hands the query to the enclosing table; the engine in
/// [`ScopedTable`] does the delegation.
pub trait ScopeLookup: Send + Sync {
    fn kind(&self) -> ScopeKind;

    fn resolve_type_name_impl(
        &self,
        _simple_name: &str,
        _helper: &ResolveHelper,
    ) -> SymbolResult<Option<TypeSymbol>> {
        Ok(None)
    }

    fn resolve_value_name_impl(
        &self,
        _simple_name: &str,
        _helper: &ResolveHelper,
    ) -> SymbolResult<Option<ValueSymbol>> {
        Ok(None)
    }

    fn resolve_method_name_impl<'a>(
        &'a self,
        _simple_name: &'a str,
        _helper: &'a ResolveHelper,
    ) -> SymbolResult<MethodCandidates<'a>> {
        Ok(Box::new(std::iter::empty::<MethodSymbol>()))
    }
}

/// A table for one scope: its local lookups plus a link to the enclosing table.
pub struct ScopedTable<S> {
    id: TableId,
    parent: Arc<dyn SymbolTable>,
    helper: Arc<ResolveHelper>,
    scope: S,
}

impl<S: ScopeLookup> ScopedTable<S> {
    pub fn new(parent: Arc<dyn SymbolTable>, helper: Arc<ResolveHelper>, scope: S) -> Self {
        Self {
            id: TableId::next(),
            parent,
            helper,
            scope,
        }
    }

    pub fn shared(
        parent: Arc<dyn SymbolTable>,
        helper: Arc<ResolveHelper>,
        scope: S,
    ) -> Arc<dyn SymbolTable>
    where
        S: 'static,
    {
        Arc::new(Self::new(parent, helper, scope))
    }

    pub fn scope(&self) -> &S {
        &self.scope
    }

    pub fn helper(&self) -> &ResolveHelper {
        &self.helper
    }
}

impl<S: ScopeLookup> SymbolTable for ScopedTable<S> {
    fn id(&self) -> TableId {
        self.id
    }

    fn kind(&self) -> ScopeKind {
        self.scope.kind()
    }

    fn parent(&self) -> Option<&Arc<dyn SymbolTable>> {
        Some(&self.parent)
    }

    fn resolve_type_name(&self, simple_name: &str) -> SymbolResult<ResolveResult<TypeSymbol>> {
        if let Some(symbol) = self.scope.resolve_type_name_impl(simple_name, &self.helper)? {
            trace!(scope = self.kind().name(), name = simple_name, %symbol, "type resolved locally");
            return Ok(ResolveResult::found(symbol, self.owner()));
        }

        trace!(scope = self.kind().name(), name = simple_name, "type not bound locally, asking parent");
        let result = self.parent.resolve_type_name(simple_name)?;
        Ok(result.with_deepest_cause(ResolveResult::failed(self.owner())))
    }

    fn resolve_value_name(&self, simple_name: &str) -> SymbolResult<ResolveResult<ValueSymbol>> {
        if let Some(symbol) = self.scope.resolve_value_name_impl(simple_name, &self.helper)? {
            trace!(scope = self.kind().name(), name = simple_name, %symbol, "value resolved locally");
            return Ok(ResolveResult::found(symbol, self.owner()));
        }

        trace!(scope = self.kind().name(), name = simple_name, "value not bound locally, asking parent");
        let result = self.parent.resolve_value_name(simple_name)?;
        Ok(result.with_deepest_cause(ResolveResult::failed(self.owner())))
    }

    fn resolve_method_name<'a>(&'a self, simple_name: &'a str) -> MethodStream<'a> {
        // Both segments are deferred: the parent's stream is only created
        // once the local candidates run out.
        MethodStream::empty()
            .then_local(move || {
                trace!(scope = self.kind().name(), name = simple_name, "collecting local methods");
                self.scope
                    .resolve_method_name_impl(simple_name, &self.helper)
            })
            .then_stream(move || {
                trace!(
                    scope = self.kind().name(),
                    name = simple_name,
                    "local methods exhausted, asking parent"
                );
                self.parent.resolve_method_name(simple_name)
            })
    }
}
