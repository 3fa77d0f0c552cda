use scopechain_api::{SymbolFactory, SymbolResult, TypeSymbol};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Context shared by the tables of one compilation unit.
pub struct ResolveHelper {
    package: String,
    factory: Arc<dyn SymbolFactory>,
}

impl ResolveHelper {
    /// `package` is the unit's package, empty for the default package.
    pub fn new(package: impl Into<String>, factory: Arc<dyn SymbolFactory>) -> Self {
        Self {
            package: package.into(),
            factory,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package
    }

    /// Loads a class. `Ok(None)` when the factory does not know it.
    pub fn load_class_or_fail(&self, fqcn: &str) -> SymbolResult<Option<TypeSymbol>> {
        self.factory.load_class(fqcn)
    }

    /// Loads a class named by an import, warning when it cannot be found.
    pub fn load_class_report_failure(
        &self,
        import: &str,
        fqcn: &str,
    ) -> SymbolResult<Option<TypeSymbol>> {
        let loaded = self.load_class_or_fail(fqcn)?;
        if loaded.is_none() {
            warn!(import, fqcn, "Cannot find classpath symbol");
        }
        Ok(loaded)
    }

    /// Loads a class that may legitimately be missing (on-demand imports,
    /// same-package guesses).
    pub fn load_class_ignore_failure(&self, canonical_name: &str) -> SymbolResult<Option<TypeSymbol>> {
        self.load_class_or_fail(canonical_name)
    }
}

impl fmt::Debug for ResolveHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveHelper")
            .field("package", &self.package)
            .finish_non_exhaustive()
    }
}
