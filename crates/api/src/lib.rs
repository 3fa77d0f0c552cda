pub mod error;
pub mod factory;
pub mod models;

// Re-export commonly used types
pub use error::{SymbolError, SymbolResult};
pub use factory::{ClassRepository, SymbolFactory};
pub use models::*;
