//! The scope kinds a Java compilation unit is made of, innermost first:
//! blocks, class bodies, imports, the current package and `java.lang`.

pub mod builtin;
pub mod import_scope;
pub mod local;
pub mod member;
pub mod package_scope;

pub use builtin::BuiltinScope;
pub use import_scope::{ImportDecl, ImportScope};
pub use local::LocalScope;
pub use member::MemberScope;
pub use package_scope::PackageScope;
