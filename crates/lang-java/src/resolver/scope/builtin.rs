use crate::resolver::context::ResolveHelper;
use crate::resolver::{ScopeKind, ScopeLookup};
use scopechain_api::models::fqn;
use scopechain_api::{SymbolResult, TypeSymbol};

pub const JAVA_LANG: &str = "java.lang";

/// The implicit `import java.lang.*;` of every compilation unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinScope;

impl ScopeLookup for BuiltinScope {
    fn kind(&self) -> ScopeKind {
        ScopeKind::Builtin
    }

    fn resolve_type_name_impl(
        &self,
        simple_name: &str,
        helper: &ResolveHelper,
    ) -> SymbolResult<Option<TypeSymbol>> {
        helper.load_class_ignore_failure(&fqn::join(JAVA_LANG, simple_name))
    }
}
