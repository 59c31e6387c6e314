//! Error types for the dialect layer.

/// Errors that can occur while mapping or editing column types.
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    /// A logical type is not registered, or has no physical types for a dialect.
    #[error("Unsupported logical type '{logical_type}' for dialect '{dialect}'")]
    UnsupportedLogicalType {
        /// The dialect that was asked.
        dialect: String,
        /// The logical type name as given.
        logical_type: String,
    },

    /// The dialect name does not match any supported dialect family.
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    /// The identity kind name is not one of `none`, `ai` or `ag`.
    #[error("Unknown identity kind: {0}")]
    UnknownIdentityKind(String),

    /// Another column in the table already auto-increments.
    #[error("Column '{column}' cannot auto-increment: '{existing}' already does")]
    AutoIncrementConflict {
        /// The column being edited.
        column: String,
        /// The sibling that already holds the auto-increment flag.
        existing: String,
    },

    /// The physical type cannot auto-increment in this dialect.
    #[error("Type '{physical_type}' cannot auto-increment in dialect '{dialect}'")]
    AutoIncrementUnsupported {
        /// The dialect name.
        dialect: &'static str,
        /// The column's physical type.
        physical_type: String,
    },

    /// The physical type has no unsigned variant in this dialect.
    #[error("Type '{physical_type}' has no unsigned variant in dialect '{dialect}'")]
    UnsignedUnsupported {
        /// The dialect name.
        dialect: &'static str,
        /// The column's physical type.
        physical_type: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl DialectError {
    /// Builds an [`DialectError::UnsupportedLogicalType`].
    pub(crate) fn unsupported(dialect: impl Into<String>, logical_type: impl Into<String>) -> Self {
        Self::UnsupportedLogicalType {
            dialect: dialect.into(),
            logical_type: logical_type.into(),
        }
    }
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
