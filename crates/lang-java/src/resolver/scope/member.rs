use crate::resolver::context::ResolveHelper;
use crate::resolver::{MethodCandidates, ScopeKind, ScopeLookup};
use scopechain_api::{SymbolResult, TypeSymbol, ValueSymbol};

/// The body of a class: its fields, methods and member types.
///
/// Inherited members are not looked up here.
#[derive(Debug, Clone)]
pub struct MemberScope {
    class: TypeSymbol,
}

impl MemberScope {
    pub fn new(class: TypeSymbol) -> Self {
        Self { class }
    }

    pub fn class(&self) -> &TypeSymbol {
        &self.class
    }
}

impl ScopeLookup for MemberScope {
    fn kind(&self) -> ScopeKind {
        ScopeKind::Member
    }

    fn resolve_type_name_impl(
        &self,
        simple_name: &str,
        _helper: &ResolveHelper,
    ) -> SymbolResult<Option<TypeSymbol>> {
        // Member types shadow the enclosing class's own name.
        if let Some(member) = self.class.member_type(simple_name) {
            return Ok(Some(member.clone()));
        }
        Ok((self.class.simple_name() == simple_name).then(|| self.class.clone()))
    }

    fn resolve_value_name_impl(
        &self,
        simple_name: &str,
        _helper: &ResolveHelper,
    ) -> SymbolResult<Option<ValueSymbol>> {
        Ok(self.class.declared_field(simple_name).cloned())
    }

    fn resolve_method_name_impl<'a>(
        &'a self,
        simple_name: &'a str,
        _helper: &'a ResolveHelper,
    ) -> SymbolResult<MethodCandidates<'a>> {
        Ok(Box::new(self.class.declared_methods(simple_name).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scopechain_api::{ClassRepository, MethodSymbol, TypeKind};
    use std::sync::Arc;

    fn scope() -> MemberScope {
        MemberScope::new(
            TypeSymbol::builder("com.example.Service", TypeKind::Class)
                .field("count", "int", false)
                .method("run", &[], "void", false)
                .method("helper", &[], "void", true)
                .method("run", &["java.lang.String"], "void", false)
                .member_type("Config", TypeKind::Record, |b| b)
                .build(),
        )
    }

    #[test]
    fn test_member_scope_methods_in_order() {
        let helper = ResolveHelper::new("com.example", Arc::new(ClassRepository::new()));
        let scope = scope();

        let overloads: Vec<MethodSymbol> = scope
            .resolve_method_name_impl("run", &helper)
            .unwrap()
            .collect();
        assert_eq!(overloads.len(), 2);
        assert_eq!(overloads[0].arity(), 0);
        assert_eq!(overloads[1].arity(), 1);
        assert!(overloads.iter().all(|m| m.declaring_type() == "com.example.Service"));
    }

    #[test]
    fn test_member_scope_fields_and_types() {
        let helper = ResolveHelper::new("com.example", Arc::new(ClassRepository::new()));
        let scope = scope();

        let count = scope.resolve_value_name_impl("count", &helper).unwrap().unwrap();
        assert_eq!(count.type_name(), "int");
        assert!(scope.resolve_value_name_impl("run", &helper).unwrap().is_none());

        let config = scope.resolve_type_name_impl("Config", &helper).unwrap().unwrap();
        assert_eq!(config.canonical_name(), "com.example.Service.Config");
        let own = scope.resolve_type_name_impl("Service", &helper).unwrap();
        assert_eq!(own.as_ref(), Some(scope.class()));
        assert!(scope.resolve_type_name_impl("String", &helper).unwrap().is_none());
    }
}
