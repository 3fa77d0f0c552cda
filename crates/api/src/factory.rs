use crate::error::{SymbolError, SymbolResult};
use crate::models::fqn;
use crate::models::symbol::TypeSymbol;
use indexmap::IndexMap;
use smol_str::SmolStr;

/// Produces type symbols from the classpath or from already-parsed declarations.
///
/// `Ok(None)` means the class is simply not there. An `Err` means the
/// metadata for an existing class could not be materialized.
pub trait SymbolFactory: Send + Sync {
    fn load_class(&self, binary_name: &str) -> SymbolResult<Option<TypeSymbol>>;
}

/// An in-memory [`SymbolFactory`] over declarations that were already built.
///
/// Member types are registered under their canonical names as well, so both
/// `a.Outer.Inner` and the binary form `a.Outer$Inner` can be loaded.
#[derive(Debug, Default, Clone)]
pub struct ClassRepository {
    classes: IndexMap<SmolStr, TypeSymbol>,
}

impl ClassRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`ClassRepository::insert`].
    pub fn with_class(mut self, class: TypeSymbol) -> SymbolResult<Self> {
        self.insert(class)?;
        Ok(self)
    }

    pub fn insert(&mut self, class: TypeSymbol) -> SymbolResult<()> {
        if !fqn::is_well_formed(class.canonical_name()) {
            return Err(SymbolError::malformed(
                class.canonical_name(),
                "not a valid canonical name",
            ));
        }
        for member in class.member_types() {
            self.insert(member.clone())?;
        }
        self.classes
            .insert(SmolStr::new(class.canonical_name()), class);
        Ok(())
    }

    pub fn get(&self, canonical_name: &str) -> Option<&TypeSymbol> {
        self.classes.get(canonical_name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Registered classes in insertion order; member types precede their outer type.
    pub fn iter(&self) -> impl Iterator<Item = &TypeSymbol> {
        self.classes.values()
    }
}

impl SymbolFactory for ClassRepository {
    fn load_class(&self, binary_name: &str) -> SymbolResult<Option<TypeSymbol>> {
        if binary_name.contains('$') {
            return Ok(self.get(&fqn::canonical(binary_name)).cloned());
        }
        Ok(self.get(binary_name).cloned())
    }
}
