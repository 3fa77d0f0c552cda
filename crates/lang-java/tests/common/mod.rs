use scopechain_api::{
    ClassRepository, MethodSymbol, SymbolError, SymbolFactory, SymbolResult, TypeKind, TypeSymbol,
    ValueSymbol,
};
use scopechain_java::{MethodCandidates, ResolveHelper, ScopeKind, ScopeLookup};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub const NOT_QUERIED: &str = "The parent shouldn't have been queried";

/// Mirrors `javasymbols.testdata.Statics`.
#[allow(dead_code)]
pub fn statics() -> TypeSymbol {
    TypeSymbol::builder("javasymbols.testdata.Statics", TypeKind::Class)
        .field("PUBLIC_FIELD", "java.lang.String", true)
        .method("publicMethod", &[], "void", true)
        .build()
}

#[allow(dead_code)]
pub fn public_field(statics: &TypeSymbol) -> ValueSymbol {
    statics.declared_field("PUBLIC_FIELD").unwrap().clone()
}

#[allow(dead_code)]
pub fn public_method(statics: &TypeSymbol) -> MethodSymbol {
    statics.declared_methods("publicMethod").next().unwrap().clone()
}

#[allow(dead_code)]
pub fn test_helper(package: &str) -> Arc<ResolveHelper> {
    Arc::new(ResolveHelper::new(package, Arc::new(ClassRepository::new())))
}

type Getter<T> = Box<dyn Fn() -> SymbolResult<Option<T>> + Send + Sync>;

/// A scope whose local lookups are plain closures, so a test decides exactly
/// what each table answers and can panic when a table must not be reached.
#[allow(dead_code)]
pub struct StubScope {
    types: Option<Getter<TypeSymbol>>,
    values: Option<Getter<ValueSymbol>>,
    methods: Option<Getter<MethodSymbol>>,
}

#[allow(dead_code)]
impl StubScope {
    pub fn empty() -> Self {
        Self {
            types: None,
            values: None,
            methods: None,
        }
    }

    /// Every hook panics.
    pub fn unreachable() -> Self {
        Self::empty()
            .types(|| panic!("{}", NOT_QUERIED))
            .values(|| panic!("{}", NOT_QUERIED))
            .methods(|| panic!("{}", NOT_QUERIED))
    }

    pub fn types(
        mut self,
        getter: impl Fn() -> SymbolResult<Option<TypeSymbol>> + Send + Sync + 'static,
    ) -> Self {
        self.types = Some(Box::new(getter));
        self
    }

    pub fn values(
        mut self,
        getter: impl Fn() -> SymbolResult<Option<ValueSymbol>> + Send + Sync + 'static,
    ) -> Self {
        self.values = Some(Box::new(getter));
        self
    }

    pub fn methods(
        mut self,
        getter: impl Fn() -> SymbolResult<Option<MethodSymbol>> + Send + Sync + 'static,
    ) -> Self {
        self.methods = Some(Box::new(getter));
        self
    }
}

impl ScopeLookup for StubScope {
    fn kind(&self) -> ScopeKind {
        ScopeKind::Local
    }

    fn resolve_type_name_impl(
        &self,
        _simple_name: &str,
        _helper: &ResolveHelper,
    ) -> SymbolResult<Option<TypeSymbol>> {
        self.types.as_ref().map_or(Ok(None), |get| get())
    }

    fn resolve_value_name_impl(
        &self,
        _simple_name: &str,
        _helper: &ResolveHelper,
    ) -> SymbolResult<Option<ValueSymbol>> {
        self.values.as_ref().map_or(Ok(None), |get| get())
    }

    fn resolve_method_name_impl<'a>(
        &'a self,
        _simple_name: &'a str,
        _helper: &'a ResolveHelper,
    ) -> SymbolResult<MethodCandidates<'a>> {
        let found = match &self.methods {
            Some(get) => get()?,
            None => None,
        };
        Ok(Box::new(found.into_iter()))
    }
}

/// Wraps a scope and counts how often any of its hooks runs.
#[allow(dead_code)]
pub struct Probe<S> {
    inner: S,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl<S> Probe<S> {
    pub fn new(inner: S) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl<S: ScopeLookup> ScopeLookup for Probe<S> {
    fn kind(&self) -> ScopeKind {
        self.inner.kind()
    }

    fn resolve_type_name_impl(
        &self,
        simple_name: &str,
        helper: &ResolveHelper,
    ) -> SymbolResult<Option<TypeSymbol>> {
        self.hit();
        self.inner.resolve_type_name_impl(simple_name, helper)
    }

    fn resolve_value_name_impl(
        &self,
        simple_name: &str,
        helper: &ResolveHelper,
    ) -> SymbolResult<Option<ValueSymbol>> {
        self.hit();
        self.inner.resolve_value_name_impl(simple_name, helper)
    }

    fn resolve_method_name_impl<'a>(
        &'a self,
        simple_name: &'a str,
        helper: &'a ResolveHelper,
    ) -> SymbolResult<MethodCandidates<'a>> {
        self.hit();
        self.inner.resolve_method_name_impl(simple_name, helper)
    }
}

/// A factory that records every class it is asked for.
#[allow(dead_code)]
pub struct RecordingFactory {
    inner: ClassRepository,
    broken: HashSet<String>,
    loads: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingFactory {
    pub fn new(inner: ClassRepository) -> Self {
        Self {
            inner,
            broken: HashSet::new(),
            loads: Mutex::new(Vec::new()),
        }
    }

    /// Loading `name` fails as if its class file were corrupt.
    pub fn broken_on(mut self, name: &str) -> Self {
        self.broken.insert(name.to_string());
        self
    }

    pub fn loads(&self) -> Vec<String> {
        self.loads.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.loads.lock().unwrap().clear();
    }
}

impl SymbolFactory for RecordingFactory {
    fn load_class(&self, binary_name: &str) -> SymbolResult<Option<TypeSymbol>> {
        self.loads.lock().unwrap().push(binary_name.to_string());
        if self.broken.contains(binary_name) {
            return Err(SymbolError::ClassLoad {
                name: binary_name.to_string(),
                reason: "truncated class file".to_string(),
            });
        }
        self.inner.load_class(binary_name)
    }
}
