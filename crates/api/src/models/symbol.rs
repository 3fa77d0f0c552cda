use super::fqn;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Field,
    EnumConstant,
    Local,
    Parameter,
}

/// Symbol handles compare by identity: two handles are equal only when they
/// point at the same declaration produced by the factory.
macro_rules! identity_handle {
    ($handle:ident) => {
        impl PartialEq for $handle {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0)
            }
        }

        impl Eq for $handle {}

        impl Hash for $handle {
            fn hash<H: Hasher>(&self, state: &mut H) {
                Arc::as_ptr(&self.0).hash(state);
            }
        }
    };
}

// --- Types ---

#[derive(Debug)]
struct TypeData {
    canonical_name: SmolStr,
    package: SmolStr,
    kind: TypeKind,
    fields: Vec<ValueSymbol>,
    methods: Vec<MethodSymbol>,
    member_types: Vec<TypeSymbol>,
}

/// A declared class, interface, enum, annotation or record.
#[derive(Clone)]
pub struct TypeSymbol(Arc<TypeData>);

identity_handle!(TypeSymbol);

impl TypeSymbol {
    /// Start declaring a top-level type. The package is taken from the name.
    pub fn builder(canonical_name: &str, kind: TypeKind) -> TypeSymbolBuilder {
        TypeSymbolBuilder::new(
            SmolStr::new(canonical_name),
            SmolStr::new(fqn::package_of(canonical_name)),
            kind,
        )
    }

    pub fn canonical_name(&self) -> &str {
        &self.0.canonical_name
    }

    pub fn simple_name(&self) -> &str {
        fqn::simple_name(&self.0.canonical_name)
    }

    pub fn package_name(&self) -> &str {
        &self.0.package
    }

    pub fn kind(&self) -> TypeKind {
        self.0.kind
    }

    pub fn declared_fields(&self) -> &[ValueSymbol] {
        &self.0.fields
    }

    pub fn declared_field(&self, name: &str) -> Option<&ValueSymbol> {
        self.0.fields.iter().find(|f| f.name() == name)
    }

    pub fn all_declared_methods(&self) -> &[MethodSymbol] {
        &self.0.methods
    }

    /// Overloads named `name`, in declaration order.
    pub fn declared_methods<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a MethodSymbol> + 'a {
        self.0.methods.iter().filter(move |m| m.name() == name)
    }

    pub fn member_types(&self) -> &[TypeSymbol] {
        &self.0.member_types
    }

    pub fn member_type(&self, simple_name: &str) -> Option<&TypeSymbol> {
        self.0
            .member_types
            .iter()
            .find(|t| t.simple_name() == simple_name)
    }
}

impl fmt::Debug for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSymbol")
            .field("name", &self.0.canonical_name)
            .field("kind", &self.0.kind)
            .finish()
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.canonical_name)
    }
}

/// Assembles a type declaration bottom-up. Members record the type being
/// built as their declaring type.
pub struct TypeSymbolBuilder {
    canonical_name: SmolStr,
    package: SmolStr,
    kind: TypeKind,
    fields: Vec<ValueSymbol>,
    methods: Vec<MethodSymbol>,
    member_types: Vec<TypeSymbol>,
}

impl TypeSymbolBuilder {
    fn new(canonical_name: SmolStr, package: SmolStr, kind: TypeKind) -> Self {
        Self {
            canonical_name,
            package,
            kind,
            fields: Vec::new(),
            methods: Vec::new(),
            member_types: Vec::new(),
        }
    }

    pub fn field(mut self, name: &str, type_name: &str, is_static: bool) -> Self {
        let field = ValueSymbol::new(ValueData {
            name: SmolStr::new(name),
            kind: ValueKind::Field,
            type_name: SmolStr::new(type_name),
            declaring_type: Some(self.canonical_name.clone()),
            is_static,
        });
        self.fields.push(field);
        self
    }

    /// Enum constants are static fields typed by the enclosing enum.
    pub fn enum_constant(mut self, name: &str) -> Self {
        let constant = ValueSymbol::new(ValueData {
            name: SmolStr::new(name),
            kind: ValueKind::EnumConstant,
            type_name: self.canonical_name.clone(),
            declaring_type: Some(self.canonical_name.clone()),
            is_static: true,
        });
        self.fields.push(constant);
        self
    }

    pub fn method(
        mut self,
        name: &str,
        parameter_types: &[&str],
        return_type: &str,
        is_static: bool,
    ) -> Self {
        self.methods.push(MethodSymbol(Arc::new(MethodData {
            name: SmolStr::new(name),
            declaring_type: self.canonical_name.clone(),
            parameter_types: parameter_types.iter().map(|p| SmolStr::new(p)).collect(),
            return_type: SmolStr::new(return_type),
            is_static,
        })));
        self
    }

    /// Declare a member type named `outer.name`, configured by `declare`.
    pub fn member_type(
        mut self,
        name: &str,
        kind: TypeKind,
        declare: impl FnOnce(TypeSymbolBuilder) -> TypeSymbolBuilder,
    ) -> Self {
        let nested = TypeSymbolBuilder::new(
            SmolStr::new(fqn::join(&self.canonical_name, name)),
            self.package.clone(),
            kind,
        );
        self.member_types.push(declare(nested).build());
        self
    }

    pub fn build(self) -> TypeSymbol {
        TypeSymbol(Arc::new(TypeData {
            canonical_name: self.canonical_name,
            package: self.package,
            kind: self.kind,
            fields: self.fields,
            methods: self.methods,
            member_types: self.member_types,
        }))
    }
}

// --- Values ---

#[derive(Debug)]
struct ValueData {
    name: SmolStr,
    kind: ValueKind,
    type_name: SmolStr,
    declaring_type: Option<SmolStr>,
    is_static: bool,
}

/// A field, enum constant, local variable or formal parameter.
#[derive(Clone)]
pub struct ValueSymbol(Arc<ValueData>);

identity_handle!(ValueSymbol);

impl ValueSymbol {
    fn new(data: ValueData) -> Self {
        Self(Arc::new(data))
    }

    pub fn local(name: &str, type_name: &str) -> Self {
        Self::new(ValueData {
            name: SmolStr::new(name),
            kind: ValueKind::Local,
            type_name: SmolStr::new(type_name),
            declaring_type: None,
            is_static: false,
        })
    }

    pub fn parameter(name: &str, type_name: &str) -> Self {
        Self::new(ValueData {
            name: SmolStr::new(name),
            kind: ValueKind::Parameter,
            type_name: SmolStr::new(type_name),
            declaring_type: None,
            is_static: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn kind(&self) -> ValueKind {
        self.0.kind
    }

    pub fn type_name(&self) -> &str {
        &self.0.type_name
    }

    /// `None` for locals and parameters.
    pub fn declaring_type(&self) -> Option<&str> {
        self.0.declaring_type.as_deref()
    }

    pub fn is_static(&self) -> bool {
        self.0.is_static
    }
}

impl fmt::Debug for ValueSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueSymbol")
            .field("name", &self.0.name)
            .field("kind", &self.0.kind)
            .field("type", &self.0.type_name)
            .finish()
    }
}

impl fmt::Display for ValueSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.declaring_type {
            Some(owner) => write!(f, "{}#{}", owner, self.0.name),
            None => f.write_str(&self.0.name),
        }
    }
}

// --- Methods ---

#[derive(Debug)]
struct MethodData {
    name: SmolStr,
    declaring_type: SmolStr,
    parameter_types: Vec<SmolStr>,
    return_type: SmolStr,
    is_static: bool,
}

/// One declared method. Overloads are distinct symbols sharing a name.
#[derive(Clone)]
pub struct MethodSymbol(Arc<MethodData>);

identity_handle!(MethodSymbol);

impl MethodSymbol {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn declaring_type(&self) -> &str {
        &self.0.declaring_type
    }

    pub fn parameter_types(&self) -> impl Iterator<Item = &str> {
        self.0.parameter_types.iter().map(SmolStr::as_str)
    }

    pub fn arity(&self) -> usize {
        self.0.parameter_types.len()
    }

    pub fn return_type(&self) -> &str {
        &self.0.return_type
    }

    pub fn is_static(&self) -> bool {
        self.0.is_static
    }
}

impl fmt::Debug for MethodSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodSymbol({})", self)
    }
}

impl fmt::Display for MethodSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}(", self.0.declaring_type, self.0.name)?;
        for (i, param) in self.0.parameter_types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(param)?;
        }
        f.write_str(")")
    }
}
