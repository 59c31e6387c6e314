//! Oracle Database profile.
//!
//! Type names are kept upper-case, the way Oracle reports them. Lookups are
//! case-insensitive like every other profile.

use super::{DialectKind, DialectProfile, RowLimit, normalize};
use crate::types::{AbstractCategory, IdentityKind, LogicalColumnType};

const CATALOG: &[&str] = &[
    "VARCHAR2",
    "CHAR",
    "VARCHAR",
    "NUMBER",
    "INTEGER",
    "SMALLINT",
    "DECIMAL",
    "FLOAT",
    "NCHAR",
    "NVARCHAR2",
    "CLOB",
    "NCLOB",
    "LONG",
    "BINARY_FLOAT",
    "BINARY_DOUBLE",
    "DATE",
    "TIMESTAMP",
    "TIMESTAMP WITH LOCAL TIME ZONE",
    "TIMESTAMP WITH TIME ZONE",
    "INTERVAL YEAR TO MONTH",
    "INTERVAL DAY TO SECOND",
    "BLOB",
    "BFILE",
    "RAW",
    "LONG RAW",
    "ROWID",
    "UROWID",
    "JSON",
    "XMLType",
    "UriType",
    "SDO_GEOMETRY",
];

const ID_CATALOG: &[&str] = &[
    "NUMBER",
    "INTEGER",
    "SMALLINT",
    "DECIMAL",
    "FLOAT",
    "CHAR",
    "VARCHAR",
    "VARCHAR2",
    "NCHAR",
    "NVARCHAR2",
    "CLOB",
    "NCLOB",
    "LONG",
    "BINARY_FLOAT",
    "BINARY_DOUBLE",
    "DATE",
    "TIMESTAMP",
    "TIMESTAMP WITH LOCAL TIME ZONE",
    "TIMESTAMP WITH TIME ZONE",
    "INTERVAL YEAR TO MONTH",
    "INTERVAL DAY TO SECOND",
    "BLOB",
    "BFILE",
    "RAW",
    "LONG RAW",
    "ROWID",
    "UROWID",
    "JSON",
    "XMLType",
    "UriType",
    "SDO_GEOMETRY",
];

const AUTO_INCREMENT: &[&str] = &["NUMBER", "INTEGER"];
const SHORT_STRING: &[&str] = &["VARCHAR2", "CHAR", "NCHAR", "NVARCHAR2", "VARCHAR"];
const SHORT_TEXT: &[&str] = &[
    "VARCHAR2",
    "VARCHAR",
    "CHAR",
    "NCHAR",
    "NVARCHAR2",
    "CLOB",
    "NCLOB",
];
const LONG_TEXT: &[&str] = &[
    "CLOB",
    "NCLOB",
    "VARCHAR2",
    "VARCHAR",
    "CHAR",
    "NCHAR",
    "NVARCHAR2",
];
const JSON: &[&str] = &["CLOB", "JSON", "NCLOB", "VARCHAR2"];
const CHECKBOX: &[&str] = &["NUMBER", "INTEGER", "SMALLINT", "CHAR"];
const CONTACT: &[&str] = &["VARCHAR2", "VARCHAR", "NVARCHAR2"];
const URL: &[&str] = &["VARCHAR2", "VARCHAR", "NVARCHAR2", "CLOB"];
const DATE: &[&str] = &[
    "DATE",
    "TIMESTAMP",
    "TIMESTAMP WITH TIME ZONE",
    "TIMESTAMP WITH LOCAL TIME ZONE",
];
const TIME: &[&str] = &["TIMESTAMP", "DATE", "VARCHAR2"];
const WHOLE: &[&str] = &["NUMBER", "INTEGER", "SMALLINT"];
const DECIMAL: &[&str] = &["NUMBER", "DECIMAL", "FLOAT", "BINARY_FLOAT", "BINARY_DOUBLE"];
const CURRENCY: &[&str] = &["NUMBER", "DECIMAL", "FLOAT"];
const PERCENT: &[&str] = &["NUMBER", "FLOAT", "BINARY_DOUBLE", "BINARY_FLOAT", "DECIMAL"];
const DURATION: &[&str] = &["NUMBER", "INTEGER"];
const FORMULA: &[&str] = &["VARCHAR2", "VARCHAR", "CLOB"];
const VARCHAR: &[&str] = &["VARCHAR2", "VARCHAR"];
const DATE_TIME: &[&str] = &[
    "TIMESTAMP",
    "TIMESTAMP WITH TIME ZONE",
    "TIMESTAMP WITH LOCAL TIME ZONE",
    "DATE",
];
const GEOMETRY: &[&str] = &["SDO_GEOMETRY", "VARCHAR2", "CLOB"];

/// Oracle profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleProfile;

impl OracleProfile {
    /// Creates a new Oracle profile.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DialectProfile for OracleProfile {
    fn kind(&self) -> DialectKind {
        DialectKind::Oracle
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
            L::SingleLineText
            | L::Collaborator
            | L::MultiSelect
            | L::SingleSelect => SHORT_TEXT,
            L::LongText | L::Attachment => LONG_TEXT,
            L::Json => JSON,
            L::Checkbox => CHECKBOX,
            L::Date => DATE,
            L::Time => TIME,
            L::Year | L::Number | L::Rating | L::Count | L::AutoNumber => WHOLE,
            L::PhoneNumber | L::Email => CONTACT,
            L::Url => URL,
            L::Decimal => DECIMAL,
            L::Currency => CURRENCY,
            L::Percent => PERCENT,
            L::Duration => DURATION,
            L::Formula => FORMULA,
            L::Rollup | L::Lookup | L::Barcode => VARCHAR,
            L::DateTime | L::CreateTime | L::LastModifiedTime => DATE_TIME,
            L::Geometry => GEOMETRY,
        }
    }

    fn classify_known(&self, physical: &str) -> Option<AbstractCategory> {
        use AbstractCategory as C;
        let category = match normalize(physical).as_str() {
            "integer" | "int" | "smallint" | "signed binary integer"
            | "unsigned binary integer" => C::Integer,
            "number" | "decimal" | "numeric" | "float" | "real" | "double precision"
            | "binary_float" | "binary_double" => C::Float,
            "char" | "varchar" | "varchar2" | "nchar" | "nvarchar2" | "rowid" | "urowid"
            | "uritype" | "bfile" | "interval year to month" | "interval day to second"
            | "sdo_geometry" => C::String,
            "clob" | "nclob" | "long" | "xmltype" => C::Text,
            "blob" | "raw" | "long raw" => C::Blob,
            "date" => C::Date,
            "timestamp"
            | "timestamp with local time zone"
            | "timestamp with time zone"
            | "timestamp with local tz"
            | "timestamp with tz" => C::DateTime,
            "time" | "time with tz" => C::Time,
            "json" => C::Json,
            _ => return None,
        };
        Some(category)
    }

    fn default_length(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "varchar2" | "varchar" | "nvarchar2" | "nchar" => Some(45),
            _ => None,
        }
    }

    fn default_scale(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "decimal" => Some(2),
            _ => None,
        }
    }

    fn max_length(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "varchar2" | "varchar" => Some(4000),
            "nvarchar2" | "char" | "raw" => Some(2000),
            "nchar" => Some(1000),
            "number" | "decimal" => Some(38),
            _ => None,
        }
    }

    fn max_scale(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "number" | "decimal" => Some(127),
            _ => None,
        }
    }

    fn is_length_editable(&self, physical: &str) -> bool {
        matches!(
            normalize(physical).as_str(),
            "char" | "varchar" | "varchar2" | "nchar" | "nvarchar2" | "raw"
        )
    }

    fn supports_auto_increment(&self, physical: &str) -> bool {
        matches!(normalize(physical).as_str(), "number" | "integer")
    }

    fn draft_length(&self, logical: LogicalColumnType, physical: &str) -> Option<u32> {
        match (logical, normalize(physical).as_str()) {
            (LogicalColumnType::Checkbox, "number") => Some(1),
            _ => self.default_length(physical),
        }
    }

    fn row_limit(&self) -> RowLimit {
        RowLimit::FetchFirst
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::DefaultValue;

    #[test]
    fn test_auto_increment_id_is_number() {
        let col = OracleProfile::new()
            .draft_column("ID", LogicalColumnType::Id, IdentityKind::AutoIncrement)
            .unwrap();
        assert_eq!(col.physical_type, "NUMBER");
        assert!(col.auto_increment);
        assert!(!col.unsigned);
    }

    #[test]
    fn test_generated_id_uses_oracle_strings() {
        let types =
            OracleProfile.physical_types_for(LogicalColumnType::Id, IdentityKind::ExternallyGenerated);
        assert_eq!(types[0], "VARCHAR2");
        assert!(types.iter().all(|t| OracleProfile.classify_known(t)
            == Some(AbstractCategory::String)));
    }

    #[test]
    fn test_checkbox_is_number_one() {
        let col = OracleProfile
            .draft_column("DONE", LogicalColumnType::Checkbox, IdentityKind::None)
            .unwrap();
        assert_eq!(col.physical_type, "NUMBER");
        assert_eq!(col.length, Some(1));
        assert_eq!(col.default, Some(DefaultValue::Integer(0)));
    }

    #[test]
    fn test_title_column_is_varchar2_45() {
        let col = OracleProfile.new_column("2").unwrap();
        assert_eq!(col.name, "title2");
        assert_eq!(col.physical_type, "VARCHAR2");
        assert_eq!(col.length, Some(45));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(
            OracleProfile.classify_known("xmltype"),
            Some(AbstractCategory::Text)
        );
        assert_eq!(
            OracleProfile.classify_known("Timestamp With Local Time Zone"),
            Some(AbstractCategory::DateTime)
        );
        assert_eq!(
            OracleProfile.classify_known("NUMBER(10,2)"),
            Some(AbstractCategory::Float)
        );
    }

    #[test]
    fn test_lengths_follow_type() {
        assert!(OracleProfile.is_length_editable("VARCHAR2"));
        assert!(!OracleProfile.is_length_editable("CLOB"));
        assert!(!OracleProfile.is_length_editable("NUMBER"));
        assert_eq!(OracleProfile.max_length("VARCHAR2"), Some(4000));
    }
}
