use crate::resolver::context::ResolveHelper;
use crate::resolver::{ScopeKind, ScopeLookup};
use scopechain_api::models::fqn;
use scopechain_api::{SymbolResult, TypeSymbol};

/// Top-level types of the unit's own package, visible without an import.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageScope;

impl ScopeLookup for PackageScope {
    fn kind(&self) -> ScopeKind {
        ScopeKind::Package
    }

    fn resolve_type_name_impl(
        &self,
        simple_name: &str,
        helper: &ResolveHelper,
    ) -> SymbolResult<Option<TypeSymbol>> {
        let candidate = fqn::join(helper.package_name(), simple_name);
        helper.load_class_ignore_failure(&candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scopechain_api::{ClassRepository, TypeKind};
    use std::sync::Arc;

    #[test]
    fn test_package_scope_same_package() {
        let repo = ClassRepository::new()
            .with_class(TypeSymbol::builder("com.example.Sibling", TypeKind::Class).build())
            .and_then(|r| r.with_class(TypeSymbol::builder("Orphan", TypeKind::Class).build()))
            .unwrap();
        let repo = Arc::new(repo);

        let helper = ResolveHelper::new("com.example", repo.clone());
        let res = PackageScope.resolve_type_name_impl("Sibling", &helper).unwrap();
        assert_eq!(res.unwrap().canonical_name(), "com.example.Sibling");
        assert!(PackageScope.resolve_type_name_impl("Orphan", &helper).unwrap().is_none());

        let default_package = ResolveHelper::new("", repo);
        let orphan = PackageScope
            .resolve_type_name_impl("Orphan", &default_package)
            .unwrap();
        assert_eq!(orphan.unwrap().canonical_name(), "Orphan");
    }
}
