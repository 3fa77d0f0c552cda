pub mod fqn;
pub mod symbol;

pub use symbol::*;
