//! Lexical name resolution over a chain of scope tables.
//!
//! Every lexical region (block, class body, imports, package, `java.lang`)
//! owns one [`SymbolTable`]. Tables are linked innermost to outermost and the
//! chain always ends at [`EmptySymbolTable`]. A query starts at the innermost
//! table and only moves outward when the current table cannot answer it.
//!
//! Two guarantees hold for every table built on [`ScopedTable`]:
//!
//! - If the local bindings answer a type or value query, the parent is never
//!   called.
//! - A [`MethodStream`] only asks the parent for candidates once every local
//!   candidate has been pulled.

use scopechain_api::{SymbolResult, TypeSymbol, ValueSymbol};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod context;
pub mod empty;
pub mod result;
pub mod scope;
pub mod stream;
mod table;

pub use context::ResolveHelper;
pub use empty::EmptySymbolTable;
pub use result::ResolveResult;
pub use stream::{MethodCandidates, MethodStream};
pub use table::{ScopeLookup, ScopedTable};

/// Identifies one table instance for provenance in [`ResolveResult`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(u64);

impl TableId {
    /// Reserved for the empty table.
    pub const EMPTY: TableId = TableId(0);

    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        TableId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Empty,
    Local,
    Member,
    Import,
    Package,
    Builtin,
}

impl ScopeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScopeKind::Empty => "Empty",
            ScopeKind::Local => "Local",
            ScopeKind::Member => "Member",
            ScopeKind::Import => "Import",
            ScopeKind::Package => "Package",
            ScopeKind::Builtin => "Builtin",
        }
    }
}

/// Non-owning reference to the table that produced a result.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOwner {
    pub id: TableId,
    pub kind: ScopeKind,
}

/// One scope's view of the names visible from it.
///
/// Tables are immutable once built and may be shared between threads.
pub trait SymbolTable: Send + Sync {
    fn id(&self) -> TableId;

    fn kind(&self) -> ScopeKind;

    fn owner(&self) -> TableOwner {
        TableOwner {
            id: self.id(),
            kind: self.kind(),
        }
    }

    /// The enclosing table, or `None` for the empty table.
    fn parent(&self) -> Option<&Arc<dyn SymbolTable>>;

    fn resolve_type_name(&self, simple_name: &str) -> SymbolResult<ResolveResult<TypeSymbol>>;

    fn resolve_value_name(&self, simple_name: &str) -> SymbolResult<ResolveResult<ValueSymbol>>;

    /// All methods named `simple_name` visible from here, innermost scope first.
    ///
    /// Each call returns a fresh stream. Nothing is computed until it is pulled.
    fn resolve_method_name<'a>(&'a self, simple_name: &'a str) -> MethodStream<'a>;
}

impl std::fmt::Debug for dyn SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("id", &self.id())
            .field("kind", &self.kind())
            .finish()
    }
}
