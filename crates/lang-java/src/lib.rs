//! Scope-chain name resolution for Java sources.
//!
//! Resolves unqualified type, value and method names by walking a chain of
//! [`SymbolTable`]s outward, consulting each enclosing scope only when the
//! inner ones cannot answer.

pub mod logging;
pub mod resolver;

pub use resolver::scope::{
    BuiltinScope, ImportDecl, ImportScope, LocalScope, MemberScope, PackageScope,
};
pub use resolver::{
    EmptySymbolTable, MethodCandidates, MethodStream, ResolveHelper, ResolveResult, ScopeKind,
    ScopeLookup, ScopedTable, SymbolTable, TableId, TableOwner,
};
