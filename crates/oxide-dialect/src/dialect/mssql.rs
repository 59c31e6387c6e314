//! Microsoft SQL Server profile.

use super::{DialectKind, DialectProfile, RowLimit, normalize};
use crate::types::{AbstractCategory, IdentityKind, LogicalColumnType};

const CATALOG: &[&str] = &[
    "varchar",
    "bigint",
    "binary",
    "bit",
    "char",
    "date",
    "datetime",
    "datetime2",
    "datetimeoffset",
    "decimal",
    "float",
    "geography",
    "geometry",
    "hierarchyid",
    "image",
    "int",
    "money",
    "nchar",
    "ntext",
    "numeric",
    "nvarchar",
    "real",
    "smalldatetime",
    "smallint",
    "smallmoney",
    "sql_variant",
    "sysname",
    "text",
    "time",
    "timestamp",
    "tinyint",
    "uniqueidentifier",
    "varbinary",
    "xml",
];

const ID_CATALOG: &[&str] = &[
    "int",
    "bigint",
    "binary",
    "bit",
    "char",
    "date",
    "datetime",
    "datetime2",
    "datetimeoffset",
    "decimal",
    "float",
    "geography",
    "geometry",
    "hierarchyid",
    "image",
    "money",
    "nchar",
    "ntext",
    "numeric",
    "nvarchar",
    "real",
    "smalldatetime",
    "smallint",
    "smallmoney",
    "sql_variant",
    "sysname",
    "text",
    "time",
    "timestamp",
    "tinyint",
    "uniqueidentifier",
    "varbinary",
    "varchar",
    "xml",
];

const AUTO_INCREMENT: &[&str] = &["int", "bigint", "smallint", "tinyint"];
const SHORT_STRING: &[&str] = &["varchar", "nvarchar", "char", "nchar"];
const SHORT_TEXT: &[&str] = &["varchar", "nvarchar", "char", "nchar", "text", "ntext"];
const LONG_TEXT: &[&str] = &["text", "ntext", "varchar", "nvarchar", "char", "nchar", "xml"];
const TEXTUAL: &[&str] = &["text", "ntext", "varchar", "nvarchar"];
const CHECKBOX: &[&str] = &["bit", "tinyint", "smallint", "int", "bigint", "char", "nchar"];
const DATE: &[&str] = &[
    "date",
    "datetime",
    "datetime2",
    "datetimeoffset",
    "smalldatetime",
    "varchar",
];
const TIME: &[&str] = &["time", "varchar"];
const YEAR: &[&str] = &["int", "smallint", "tinyint"];
const CONTACT: &[&str] = &["varchar", "nvarchar"];
const URL: &[&str] = &["varchar", "nvarchar", "text", "ntext"];
const NUMBER: &[&str] = &[
    "int", "bigint", "smallint", "tinyint", "decimal", "numeric", "float", "real",
];
const DECIMAL: &[&str] = &["decimal", "numeric", "float", "real", "money", "smallmoney"];
const CURRENCY: &[&str] = &[
    "decimal",
    "money",
    "smallmoney",
    "numeric",
    "float",
    "real",
    "int",
    "bigint",
    "smallint",
];
const PERCENT: &[&str] = &[
    "float", "real", "decimal", "numeric", "int", "bigint", "smallint",
];
const DURATION: &[&str] = &[
    "decimal", "numeric", "int", "bigint", "smallint", "float", "real",
];
const RATING: &[&str] = &[
    "int", "bigint", "smallint", "tinyint", "decimal", "numeric", "float", "real",
];
const COUNT: &[&str] = &["int", "bigint", "smallint", "tinyint"];
const FORMULA: &[&str] = &["varchar", "nvarchar", "text"];
const VARCHAR: &[&str] = &["varchar"];
const DATE_TIME: &[&str] = &["datetime", "datetime2", "datetimeoffset", "smalldatetime"];
const GEOMETRY: &[&str] = &["geometry", "geography"];

/// SQL Server profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct MssqlProfile;

impl MssqlProfile {
    /// Creates a new SQL Server profile.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DialectProfile for MssqlProfile {
    fn kind(&self) -> DialectKind {
        DialectKind::Mssql
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
            L::Attachment | L::MultiSelect | L::SingleSelect | L::Json => TEXTUAL,
            L::Checkbox => CHECKBOX,
            L::Collaborator => SHORT_STRING,
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
            "bigint" | "int" | "smallint" | "tinyint" => C::Integer,
            "bit" => C::Boolean,
            "decimal" | "numeric" | "float" | "real" | "money" | "smallmoney" => C::Float,
            "char" | "nchar" | "varchar" | "nvarchar" | "uniqueidentifier" | "sysname"
            | "sql_variant" | "hierarchyid" | "geography" | "geometry" => C::String,
            "text" | "ntext" | "xml" => C::Text,
            "binary" | "varbinary" | "image" | "timestamp" | "rowversion" => C::Blob,
            "date" => C::Date,
            "datetime" | "datetime2" | "datetimeoffset" | "smalldatetime" => C::DateTime,
            "time" => C::Time,
            _ => return None,
        };
        Some(category)
    }

    fn default_length(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "char" | "nchar" | "varchar" | "nvarchar" | "binary" | "varbinary" => Some(255),
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
        match normalize(physical).as_str() {
            "char" | "varchar" | "binary" | "varbinary" => Some(8000),
            "nchar" | "nvarchar" => Some(4000),
            "decimal" | "numeric" => Some(38),
            _ => None,
        }
    }

    fn max_scale(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "decimal" | "numeric" => Some(38),
            _ => None,
        }
    }

    fn is_length_editable(&self, physical: &str) -> bool {
        matches!(
            normalize(physical).as_str(),
            "char" | "nchar" | "varchar" | "nvarchar" | "binary" | "varbinary"
        )
    }

    fn supports_auto_increment(&self, physical: &str) -> bool {
        matches!(
            normalize(physical).as_str(),
            "int" | "bigint" | "smallint" | "tinyint"
        )
    }

    fn row_limit(&self) -> RowLimit {
        RowLimit::OffsetFetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::DefaultValue;

    #[test]
    fn test_checkbox_is_bit() {
        let col = MssqlProfile::new()
            .draft_column("done", LogicalColumnType::Checkbox, IdentityKind::None)
            .unwrap();
        assert_eq!(col.physical_type, "bit");
        assert_eq!(col.default, Some(DefaultValue::Boolean(false)));
        assert_eq!(MssqlProfile.render_default(&DefaultValue::Boolean(false)), "0");
    }

    #[test]
    fn test_json_falls_back_to_text() {
        let types = MssqlProfile.physical_types_for(LogicalColumnType::Json, IdentityKind::None);
        assert_eq!(types[0], "text");
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            MssqlProfile.classify_known("NVARCHAR(MAX)"),
            Some(AbstractCategory::String)
        );
        assert_eq!(
            MssqlProfile.classify_known("datetimeoffset(7)"),
            Some(AbstractCategory::DateTime)
        );
        assert_eq!(
            MssqlProfile.classify_known("rowversion"),
            Some(AbstractCategory::Blob)
        );
    }

    #[test]
    fn test_length_maxima() {
        assert_eq!(MssqlProfile.max_length("nvarchar"), Some(4000));
        assert_eq!(MssqlProfile.max_length("varchar"), Some(8000));
        assert!(MssqlProfile.is_length_editable("NVARCHAR"));
        assert!(!MssqlProfile.is_length_editable("ntext"));
    }
}
