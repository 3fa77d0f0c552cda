use crate::resolver::context::ResolveHelper;
use crate::resolver::{MethodCandidates, ScopeKind, ScopeLookup};
use scopechain_api::models::fqn;
use scopechain_api::{MethodSymbol, SymbolError, SymbolResult, TypeSymbol, ValueSymbol};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDecl {
    /// `import java.util.List;`
    Single(String),
    /// `import java.util.*;`
    OnDemand(String),
    /// `import static java.lang.Math.max;`
    Static { class: String, member: String },
    /// `import static java.lang.Math.*;`
    StaticOnDemand(String),
}

impl ImportDecl {
    /// Parses the text of an import declaration, with or without the
    /// `import` keyword and trailing semicolon.
    pub fn parse(text: &str) -> SymbolResult<Self> {
        let body = text.trim();
        let body = body.strip_prefix("import ").unwrap_or(body).trim();
        let body = body.strip_suffix(';').unwrap_or(body).trim();

        let (is_static, path) = match body.strip_prefix("static ") {
            Some(rest) => (true, rest.trim()),
            None => (false, body),
        };

        let (target, on_demand) = match path.strip_suffix(".*") {
            Some(prefix) => (prefix, true),
            None => (path, false),
        };

        if !fqn::is_well_formed(target) {
            return Err(SymbolError::malformed(text, "not a valid import"));
        }

        Ok(match (is_static, on_demand) {
            (false, false) => ImportDecl::Single(target.to_string()),
            (false, true) => ImportDecl::OnDemand(target.to_string()),
            (true, true) => ImportDecl::StaticOnDemand(target.to_string()),
            (true, false) => {
                let class = fqn::package_of(target);
                if class.is_empty() {
                    return Err(SymbolError::malformed(text, "static import needs a class"));
                }
                ImportDecl::Static {
                    class: class.to_string(),
                    member: fqn::simple_name(target).to_string(),
                }
            }
        })
    }
}

impl fmt::Display for ImportDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportDecl::Single(name) => write!(f, "import {};", name),
            ImportDecl::OnDemand(prefix) => write!(f, "import {}.*;", prefix),
            ImportDecl::Static { class, member } => write!(f, "import static {}.{};", class, member),
            ImportDecl::StaticOnDemand(class) => write!(f, "import static {}.*;", class),
        }
    }
}

/// The import declarations of a compilation unit.
///
/// Single-type imports shadow on-demand ones; among on-demand imports the
/// first declared wins. Classes are only loaded when a lookup reaches this
/// scope.
#[derive(Debug, Clone, Default)]
pub struct ImportScope {
    imports: Vec<ImportDecl>,
}

impl ImportScope {
    pub fn new(imports: Vec<ImportDecl>) -> Self {
        Self { imports }
    }

    pub fn parse<'s>(declarations: impl IntoIterator<Item = &'s str>) -> SymbolResult<Self> {
        let imports = declarations
            .into_iter()
            .map(ImportDecl::parse)
            .collect::<SymbolResult<Vec<_>>>()?;
        Ok(Self::new(imports))
    }

    pub fn imports(&self) -> &[ImportDecl] {
        &self.imports
    }

    /// Classes named by `import static C.name;` for this name.
    fn single_static_classes<'s>(
        &'s self,
        simple_name: &'s str,
    ) -> impl Iterator<Item = (&'s ImportDecl, &'s str)> + 's {
        self.imports.iter().filter_map(move |decl| match decl {
            ImportDecl::Static { class, member } if member == simple_name => {
                Some((decl, class.as_str()))
            }
            _ => None,
        })
    }

    fn static_on_demand_classes(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().filter_map(|decl| match decl {
            ImportDecl::StaticOnDemand(class) => Some(class.as_str()),
            _ => None,
        })
    }
}

impl ScopeLookup for ImportScope {
    fn kind(&self) -> ScopeKind {
        ScopeKind::Import
    }

    fn resolve_type_name_impl(
        &self,
        simple_name: &str,
        helper: &ResolveHelper,
    ) -> SymbolResult<Option<TypeSymbol>> {
        for decl in &self.imports {
            if let ImportDecl::Single(name) = decl {
                if fqn::simple_name(name) == simple_name {
                    if let Some(class) = helper.load_class_report_failure(&decl.to_string(), name)? {
                        return Ok(Some(class));
                    }
                }
            }
        }

        for decl in &self.imports {
            if let ImportDecl::OnDemand(prefix) = decl {
                let candidate = fqn::join(prefix, simple_name);
                if let Some(class) = helper.load_class_ignore_failure(&candidate)? {
                    return Ok(Some(class));
                }
            }
        }

        Ok(None)
    }

    fn resolve_value_name_impl(
        &self,
        simple_name: &str,
        helper: &ResolveHelper,
    ) -> SymbolResult<Option<ValueSymbol>> {
        let static_field = |class: &TypeSymbol| {
            class
                .declared_field(simple_name)
                .filter(|f| f.is_static())
                .cloned()
        };

        for (decl, class) in self.single_static_classes(simple_name) {
            let loaded = helper.load_class_report_failure(&decl.to_string(), class)?;
            if let Some(field) = loaded.as_ref().and_then(static_field) {
                return Ok(Some(field));
            }
        }

        for class in self.static_on_demand_classes() {
            let loaded = helper.load_class_ignore_failure(class)?;
            if let Some(field) = loaded.as_ref().and_then(static_field) {
                return Ok(Some(field));
            }
        }

        Ok(None)
    }

    fn resolve_method_name_impl<'a>(
        &'a self,
        simple_name: &'a str,
        helper: &'a ResolveHelper,
    ) -> SymbolResult<MethodCandidates<'a>> {
        let static_methods = |class: &TypeSymbol| -> Vec<MethodSymbol> {
            class
                .declared_methods(simple_name)
                .filter(|m| m.is_static())
                .cloned()
                .collect()
        };

        // A single static import of the name hides every on-demand one,
        // even when its class turns out to be missing.
        let mut methods = Vec::new();
        let mut named = false;
        for (decl, class) in self.single_static_classes(simple_name) {
            named = true;
            if let Some(class) = helper.load_class_report_failure(&decl.to_string(), class)? {
                methods.extend(static_methods(&class));
            }
        }
        if named {
            return Ok(Box::new(methods.into_iter()));
        }

        for class in self.static_on_demand_classes() {
            if let Some(class) = helper.load_class_ignore_failure(class)? {
                methods.extend(static_methods(&class));
            }
        }
        Ok(Box::new(methods.into_iter()))
    }
}
