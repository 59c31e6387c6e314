//! SQLite profile.
//!
//! SQLite accepts almost any type name and maps it onto a storage class, so
//! the catalog lists the names other tools commonly emit.

use super::{DialectKind, DialectProfile, RowLimit, normalize};
use crate::types::{AbstractCategory, IdentityKind, LogicalColumnType};

const CATALOG: &[&str] = &[
    "varchar",
    "integer",
    "int",
    "tinyint",
    "smallint",
    "mediumint",
    "bigint",
    "unsigned big int",
    "int2",
    "int8",
    "character",
    "varying character",
    "nchar",
    "native character",
    "nvarchar",
    "text",
    "clob",
    "blob",
    "real",
    "double",
    "double precision",
    "float",
    "numeric",
    "decimal",
    "boolean",
    "date",
    "datetime",
    "timestamp",
    "time",
];

const ID_CATALOG: &[&str] = &[
    "integer",
    "int",
    "tinyint",
    "smallint",
    "mediumint",
    "bigint",
    "unsigned big int",
    "int2",
    "int8",
    "character",
    "varchar",
    "varying character",
    "nchar",
    "native character",
    "nvarchar",
    "text",
    "clob",
    "blob",
    "real",
    "double",
    "double precision",
    "float",
    "numeric",
    "decimal",
    "boolean",
    "date",
    "datetime",
    "timestamp",
    "time",
];

const AUTO_INCREMENT: &[&str] = &["integer"];
const SHORT_STRING: &[&str] = &[
    "varchar",
    "character",
    "nchar",
    "nvarchar",
    "varying character",
    "native character",
];
const SHORT_TEXT: &[&str] = &[
    "varchar",
    "text",
    "character",
    "nchar",
    "nvarchar",
    "varying character",
    "native character",
    "clob",
];
const LONG_TEXT: &[&str] = &["text", "clob", "varchar", "character", "nvarchar"];
const TEXTUAL: &[&str] = &["text", "clob", "varchar"];
const CHECKBOX: &[&str] = &[
    "boolean", "integer", "int", "tinyint", "smallint", "bigint", "int2", "int8",
];
const COLLABORATOR: &[&str] = &["varchar", "text", "character", "nchar", "nvarchar"];
const DATE: &[&str] = &["date", "datetime", "timestamp", "varchar", "text"];
const TIME: &[&str] = &["time", "text", "varchar"];
const YEAR: &[&str] = &["integer", "int"];
const CONTACT: &[&str] = &["varchar", "text"];
const URL: &[&str] = &["varchar", "text", "clob"];
const NUMBER: &[&str] = &[
    "integer",
    "int",
    "bigint",
    "smallint",
    "tinyint",
    "mediumint",
    "int2",
    "int8",
    "numeric",
    "decimal",
    "real",
    "double",
    "float",
];
const DECIMAL: &[&str] = &["decimal", "numeric", "real", "double", "double precision", "float"];
const CURRENCY: &[&str] = &[
    "decimal", "numeric", "real", "double", "float", "integer", "int", "bigint",
];
const PERCENT: &[&str] = &["double", "real", "float", "decimal", "numeric", "integer", "int"];
const DURATION: &[&str] = &[
    "integer", "int", "bigint", "decimal", "numeric", "real", "double", "float",
];
const RATING: &[&str] = &[
    "integer", "int", "bigint", "smallint", "tinyint", "numeric", "real", "double", "float",
];
const COUNT: &[&str] = &["integer", "int", "bigint", "smallint", "tinyint", "int2", "int8"];
const FORMULA: &[&str] = &["varchar", "text"];
const VARCHAR: &[&str] = &["varchar"];
const DATE_TIME: &[&str] = &["datetime", "timestamp"];
const GEOMETRY: &[&str] = &["text", "varchar"];

/// SQLite profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteProfile;

impl SqliteProfile {
    /// Creates a new SQLite profile.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DialectProfile for SqliteProfile {
    fn kind(&self) -> DialectKind {
        DialectKind::Sqlite
    }

    fn catalog(&self) -> &'static [&'static str] {
        CATALOG
    }

    fn physical_types_for(
        &self,
        logical: LogicalColumnType,
        identity: IdentityKind,
    ) -> &'static [&'static str] {
        use LogicalColumnType as L;
        match logical {
            L::Id => match identity {
                IdentityKind::AutoIncrement => AUTO_INCREMENT,
                IdentityKind::ExternallyGenerated => SHORT_STRING,
                IdentityKind::None => ID_CATALOG,
            },
            L::ForeignKey | L::Button => CATALOG,
            L::SingleLineText => SHORT_TEXT,
            L::LongText => LONG_TEXT,
            L::Attachment | L::MultiSelect | L::SingleSelect => TEXTUAL,
            L::Json => TEXTUAL,
            L::Checkbox => CHECKBOX,
            L::Collaborator => COLLABORATOR,
            L::Date => DATE,
            L::Time => TIME,
            L::Year => YEAR,
            L::PhoneNumber | L::Email => CONTACT,
            L::Url => URL,
            L::Number => NUMBER,
            L::Decimal => DECIMAL,
            L::Currency => CURRENCY,
            L::Percent => PERCENT,
            L::Duration => DURATION,
            L::Rating => RATING,
            L::Count | L::AutoNumber => COUNT,
            L::Formula => FORMULA,
            L::Rollup | L::Lookup | L::Barcode => VARCHAR,
            L::DateTime | L::CreateTime | L::LastModifiedTime => DATE_TIME,
            L::Geometry => GEOMETRY,
        }
    }

    fn classify_known(&self, physical: &str) -> Option<AbstractCategory> {
        use AbstractCategory as C;
        let category = match normalize(physical).as_str() {
            "int" | "integer" | "tinyint" | "smallint" | "mediumint" | "bigint"
            | "unsigned big int" | "int2" | "int8" => C::Integer,
            "real" | "double" | "double precision" | "float" | "numeric" | "decimal" => C::Float,
            "boolean" | "bool" => C::Boolean,
            "character" | "varchar" | "varying character" | "nchar" | "native character"
            | "nvarchar" => C::String,
            "text" | "clob" => C::Text,
            "blob" => C::Blob,
            "date" => C::Date,
            "datetime" | "timestamp" => C::DateTime,
            "time" => C::Time,
            "json" => C::Json,
            _ => return None,
        };
        Some(category)
    }

    fn default_length(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "varchar" | "character" | "varying character" | "nchar" | "native character"
            | "nvarchar" => Some(255),
            _ => None,
        }
    }

    fn default_scale(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "decimal" | "numeric" => Some(2),
            _ => None,
        }
    }

    fn max_length(&self, physical: &str) -> Option<u32> {
        // SQLITE_MAX_LENGTH; declared lengths are otherwise not enforced.
        if self.is_length_editable(physical) {
            Some(1_000_000_000)
        } else {
            None
        }
    }

    fn max_scale(&self, _physical: &str) -> Option<u32> {
        None
    }

    fn is_length_editable(&self, physical: &str) -> bool {
        matches!(
            normalize(physical).as_str(),
            "varchar"
                | "character"
                | "varying character"
                | "nchar"
                | "native character"
                | "nvarchar"
        )
    }

    fn supports_auto_increment(&self, physical: &str) -> bool {
        normalize(physical) == "integer"
    }

    fn row_limit(&self) -> RowLimit {
        RowLimit::LimitOffset
    }
}
