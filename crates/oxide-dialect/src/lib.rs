//! Logical column types mapped onto SQL dialects.
//!
//! `oxide-dialect` sits between a schema designer and the database engines it
//! targets. Users pick dialect-neutral [`LogicalColumnType`]s; each
//! [`DialectProfile`] turns them into physical types and draft
//! [`ColumnDefinition`]s, and classifies foreign physical types on import.
//!
//! # Architecture
//!
//! - **Types** - the logical type registry and the abstract categories used
//!   for reverse classification
//! - **Dialect** - one profile per engine family (MySQL, PostgreSQL,
//!   SQL Server, SQLite, Oracle) with its type catalog and column defaults
//! - **Resolver** - physical type string to category to suggested logical type
//! - **Policy** - table-wide mutation rules (single auto-increment column,
//!   unsigned reset, length clamping)
//! - **Statement** - SQL text helpers: splitting, routine names, preview limits
//! - **Inference** - draft columns from a sample JSON object
//!
//! # Example
//!
//! ```rust
//! use oxide_dialect::prelude::*;
//!
//! let mysql = DialectKind::MySql.profile();
//! let columns = mysql.new_table_columns(IdentityKind::AutoIncrement).unwrap();
//! assert_eq!(columns[0].physical_type, "int");
//! assert!(columns[0].unsigned && columns[0].auto_increment);
//!
//! let policy = ColumnPolicy::new(mysql);
//! let (id, rest) = columns.split_first().unwrap();
//! assert!(!policy.auto_increment_eligible(&rest[0], std::slice::from_ref(id)));
//!
//! let resolver = TypeResolver::new(mysql);
//! assert_eq!(resolver.classify("BIGINT(20) UNSIGNED"), AbstractCategory::Integer);
//! ```

pub mod column;
pub mod config;
pub mod dialect;
pub mod error;
pub mod inference;
pub mod policy;
pub mod resolver;
pub mod statement;
pub mod types;

pub use column::{ColumnDefinition, DefaultValue, MutationState, ValidationRule, Validator};
pub use config::DialectConfig;
pub use dialect::{DialectKind, DialectProfile, RowLimit};
pub use error::{DialectError, Result};
pub use inference::{
    InferenceOptions, infer_columns, infer_columns_for, infer_columns_for_with, infer_columns_with,
};
pub use policy::ColumnPolicy;
pub use resolver::TypeResolver;
pub use statement::{
    extract_function_name, extract_procedure_name, limit_preview, limit_preview_with,
    split_statements,
};
pub use types::{AbstractCategory, IdentityKind, LogicalColumnType};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::column::{ColumnDefinition, DefaultValue, MutationState};
    pub use crate::dialect::{DialectKind, DialectProfile, RowLimit};
    pub use crate::error::{DialectError, Result};
    pub use crate::policy::ColumnPolicy;
    pub use crate::resolver::TypeResolver;
    pub use crate::types::{AbstractCategory, IdentityKind, LogicalColumnType};
}
