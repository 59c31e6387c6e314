//! MySQL / MariaDB profile.

use super::{DialectKind, DialectProfile, RowLimit, normalize, strip_modifiers};
use crate::types::{AbstractCategory, IdentityKind, LogicalColumnType};

const CATALOG: &[&str] = &[
    "varchar",
    "int",
    "integer",
    "smallint",
    "mediumint",
    "bigint",
    "tinyint",
    "bit",
    "boolean",
    "float",
    "decimal",
    "double",
    "serial",
    "date",
    "datetime",
    "timestamp",
    "time",
    "year",
    "char",
    "nchar",
    "text",
    "tinytext",
    "mediumtext",
    "longtext",
    "binary",
    "varbinary",
    "blob",
    "tinyblob",
    "mediumblob",
    "longblob",
    "enum",
    "set",
    "geometry",
    "point",
    "linestring",
    "polygon",
    "multipoint",
    "multilinestring",
    "multipolygon",
    "geometrycollection",
    "json",
];

const ID_CATALOG: &[&str] = &[
    "int",
    "integer",
    "smallint",
    "mediumint",
    "bigint",
    "tinyint",
    "bit",
    "boolean",
    "float",
    "decimal",
    "double",
    "serial",
    "date",
    "datetime",
    "timestamp",
    "time",
    "year",
    "char",
    "varchar",
    "nchar",
    "text",
    "tinytext",
    "mediumtext",
    "longtext",
    "binary",
    "varbinary",
    "blob",
    "tinyblob",
    "mediumblob",
    "longblob",
    "enum",
    "set",
    "geometry",
    "point",
    "linestring",
    "polygon",
    "multipoint",
    "multilinestring",
    "multipolygon",
    "geometrycollection",
    "json",
];

const AUTO_INCREMENT: &[&str] = &["int", "integer", "bigint", "mediumint", "smallint", "tinyint"];
const SHORT_STRING: &[&str] = &["varchar", "char", "nchar"];
const SHORT_TEXT: &[&str] = &[
    "varchar",
    "char",
    "nchar",
    "text",
    "tinytext",
    "mediumtext",
    "longtext",
];
const LONG_TEXT: &[&str] = &[
    "text",
    "mediumtext",
    "longtext",
    "tinytext",
    "varchar",
    "char",
    "nchar",
];
const ATTACHMENT: &[&str] = &["text", "mediumtext", "longtext", "tinytext", "json", "varchar"];
const CHECKBOX: &[&str] = &[
    "tinyint",
    "boolean",
    "bit",
    "int",
    "integer",
    "smallint",
    "mediumint",
    "bigint",
    "char",
];
const MULTI_SELECT: &[&str] = &["set", "text", "tinytext", "mediumtext", "longtext", "varchar"];
const SINGLE_SELECT: &[&str] = &["enum", "text", "tinytext", "mediumtext", "longtext", "varchar"];
const DATE: &[&str] = &["date", "datetime", "timestamp", "varchar"];
const TIME: &[&str] = &["time", "varchar"];
const YEAR: &[&str] = &["year", "int"];
const URL: &[&str] = &[
    "varchar",
    "text",
    "char",
    "nchar",
    "tinytext",
    "mediumtext",
    "longtext",
];
const NUMBER: &[&str] = &[
    "bigint",
    "int",
    "integer",
    "mediumint",
    "smallint",
    "tinyint",
    "decimal",
    "float",
    "double",
];
const DECIMAL: &[&str] = &["decimal", "float", "double"];
const CURRENCY: &[&str] = &[
    "decimal",
    "float",
    "double",
    "int",
    "integer",
    "bigint",
    "mediumint",
    "smallint",
    "tinyint",
];
const PERCENT: &[&str] = &[
    "double",
    "decimal",
    "float",
    "int",
    "integer",
    "bigint",
    "mediumint",
    "smallint",
    "tinyint",
];
const WHOLE_FIRST: &[&str] = &[
    "int",
    "integer",
    "bigint",
    "mediumint",
    "smallint",
    "tinyint",
    "decimal",
    "float",
    "double",
];
const COUNT: &[&str] = &["int", "integer", "bigint", "mediumint", "smallint", "tinyint"];
const FORMULA: &[&str] = &["varchar", "text"];
const VARCHAR: &[&str] = &["varchar"];
const DATE_TIME: &[&str] = &["datetime", "timestamp"];
const GEOMETRY: &[&str] = &[
    "geometry",
    "point",
    "linestring",
    "polygon",
    "multipoint",
    "multilinestring",
    "multipolygon",
    "geometrycollection",
];
const JSON: &[&str] = &["json", "text", "tinytext", "mediumtext", "longtext"];

/// MySQL-family profile (MySQL, MariaDB).
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlProfile;

impl MySqlProfile {
    /// Creates a new MySQL profile.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn lookup(physical: &str) -> String {
    strip_modifiers(&normalize(physical))
}

impl DialectProfile for MySqlProfile {
    fn kind(&self) -> DialectKind {
        DialectKind::MySql
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
            L::Attachment => ATTACHMENT,
            L::Checkbox => CHECKBOX,
            L::MultiSelect => MULTI_SELECT,
            L::SingleSelect => SINGLE_SELECT,
            L::Collaborator | L::PhoneNumber | L::Email => SHORT_STRING,
            L::Date => DATE,
            L::Time => TIME,
            L::Year => YEAR,
            L::Url => URL,
            L::Number => NUMBER,
            L::Decimal => DECIMAL,
            L::Currency => CURRENCY,
            L::Percent => PERCENT,
            L::Duration | L::Rating => WHOLE_FIRST,
            L::Count | L::AutoNumber => COUNT,
            L::Formula => FORMULA,
            L::Rollup | L::Lookup | L::Barcode => VARCHAR,
            L::DateTime | L::CreateTime | L::LastModifiedTime => DATE_TIME,
            L::Geometry => GEOMETRY,
            L::Json => JSON,
        }
    }

    fn classify_known(&self, physical: &str) -> Option<AbstractCategory> {
        use AbstractCategory as C;
        let category = match lookup(physical).as_str() {
            "int" | "integer" | "smallint" | "mediumint" | "bigint" | "tinyint" | "bit"
            | "serial" => C::Integer,
            "bool" | "boolean" => C::Boolean,
            "float" | "decimal" | "dec" | "numeric" | "double" | "double precision" | "real" => {
                C::Float
            }
            "date" => C::Date,
            "datetime" | "timestamp" => C::DateTime,
            "time" => C::Time,
            "year" => C::Year,
            "char" | "varchar" | "nchar" | "nvarchar" | "binary" | "varbinary" => C::String,
            "geometry" | "point" | "linestring" | "polygon" | "multipoint" | "multilinestring"
            | "multipolygon" | "geometrycollection" => C::String,
            "text" | "tinytext" | "mediumtext" | "longtext" => C::Text,
            "blob" | "tinyblob" | "mediumblob" | "longblob" => C::Blob,
            "enum" => C::Enum,
            "set" => C::Set,
            "json" => C::Json,
            _ => return None,
        };
        Some(category)
    }

    fn default_length(&self, physical: &str) -> Option<u32> {
        match lookup(physical).as_str() {
            "int" | "integer" => Some(11),
            "tinyint" => Some(1),
            "smallint" => Some(5),
            "mediumint" => Some(9),
            "bigint" | "serial" => Some(20),
            "bit" => Some(64),
            "float" => Some(12),
            "decimal" => Some(10),
            "double" => Some(22),
            "year" => Some(4),
            "char" | "nchar" | "binary" => Some(255),
            "varchar" => Some(45),
            "varbinary" => Some(65500),
            _ => None,
        }
    }

    fn default_scale(&self, physical: &str) -> Option<u32> {
        match lookup(physical).as_str() {
            "float" | "decimal" | "double" => Some(2),
            _ => None,
        }
    }

    fn max_length(&self, physical: &str) -> Option<u32> {
        match lookup(physical).as_str() {
            "char" | "nchar" | "binary" | "tinyint" => Some(255),
            "varchar" | "varbinary" => Some(65535),
            "bit" => Some(64),
            "decimal" => Some(65),
            _ => None,
        }
    }

    fn max_scale(&self, physical: &str) -> Option<u32> {
        match lookup(physical).as_str() {
            "decimal" | "float" | "double" => Some(30),
            _ => None,
        }
    }

    fn is_length_editable(&self, physical: &str) -> bool {
        matches!(
            lookup(physical).as_str(),
            "char" | "varchar" | "nchar" | "binary" | "varbinary"
        )
    }

    fn supports_auto_increment(&self, physical: &str) -> bool {
        matches!(
            lookup(physical).as_str(),
            "int" | "integer" | "bigint" | "mediumint" | "smallint" | "tinyint" | "serial"
        )
    }

    fn has_unsigned_variant(&self, physical: &str) -> bool {
        matches!(
            lookup(physical).as_str(),
            "int" | "integer" | "bigint" | "mediumint" | "smallint" | "tinyint"
        )
    }

    fn row_limit(&self) -> RowLimit {
        RowLimit::LimitOffset
    }
}
