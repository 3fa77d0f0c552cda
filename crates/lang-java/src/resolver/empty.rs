use super::{MethodStream, ResolveResult, ScopeKind, SymbolTable, TableId};
use once_cell::sync::Lazy;
use scopechain_api::{SymbolResult, TypeSymbol, ValueSymbol};
use std::sync::Arc;

static INSTANCE: Lazy<Arc<EmptySymbolTable>> =
    Lazy::new(|| Arc::new(EmptySymbolTable { _private: () }));

/// The table at the top of every chain. It knows no names and has no parent.
#[derive(Debug)]
pub struct EmptySymbolTable {
    _private: (),
}

impl EmptySymbolTable {
    /// The process-wide instance. Every call returns the same allocation.
    pub fn instance() -> Arc<dyn SymbolTable> {
        INSTANCE.clone()
    }
}

impl SymbolTable for EmptySymbolTable {
    fn id(&self) -> TableId {
        TableId::EMPTY
    }

    fn kind(&self) -> ScopeKind {
        ScopeKind::Empty
    }

    fn parent(&self) -> Option<&Arc<dyn SymbolTable>> {
        None
    }

    fn resolve_type_name(&self, _simple_name: &str) -> SymbolResult<ResolveResult<TypeSymbol>> {
        Ok(ResolveResult::failed(self.owner()))
    }

    fn resolve_value_name(&self, _simple_name: &str) -> SymbolResult<ResolveResult<ValueSymbol>> {
        Ok(ResolveResult::failed(self.owner()))
    }

    fn resolve_method_name<'a>(&'a self, _simple_name: &'a str) -> MethodStream<'a> {
        MethodStream::empty()
    }
}
