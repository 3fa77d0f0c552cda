#[derive(Debug, thiserror::Error)]
pub enum SymbolError {
    #[error("Malformed symbol {name}: {reason}")]
    MalformedSymbol { name: String, reason: String },
    #[error("Failed to load class {name}: {reason}")]
    ClassLoad { name: String, reason: String },
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SymbolError {
    pub fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SymbolError::MalformedSymbol {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type SymbolResult<T> = std::result::Result<T, SymbolError>;
