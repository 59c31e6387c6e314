//! PostgreSQL profile.

use super::{DialectKind, DialectProfile, RowLimit, normalize};
use crate::column::DefaultValue;
use crate::types::{AbstractCategory, IdentityKind, LogicalColumnType};

const CATALOG: &[&str] = &[
    "character varying",
    "int",
    "integer",
    "bigint",
    "smallint",
    "int2",
    "int4",
    "int8",
    "serial",
    "serial2",
    "serial4",
    "serial8",
    "smallserial",
    "bigserial",
    "bit",
    "bool",
    "boolean",
    "real",
    "float4",
    "float8",
    "double precision",
    "numeric",
    "decimal",
    "money",
    "char",
    "character",
    "bpchar",
    "varchar",
    "text",
    "name",
    "uuid",
    "date",
    "time",
    "time without time zone",
    "timetz",
    "time with time zone",
    "timestamp",
    "timestamp without time zone",
    "timestamptz",
    "timestamp with time zone",
    "interval",
    "json",
    "jsonb",
    "xml",
    "bytea",
    "inet",
    "cidr",
    "macaddr",
    "point",
    "line",
    "lseg",
    "box",
    "path",
    "polygon",
    "circle",
    "int4range",
    "int8range",
    "numrange",
    "tsrange",
    "tstzrange",
    "daterange",
    "tsvector",
    "tsquery",
    "oid",
];

const ID_CATALOG: &[&str] = &[
    "int4",
    "int",
    "integer",
    "bigint",
    "smallint",
    "int2",
    "int8",
    "serial",
    "serial2",
    "serial4",
    "serial8",
    "smallserial",
    "bigserial",
    "bit",
    "bool",
    "boolean",
    "real",
    "float4",
    "float8",
    "double precision",
    "numeric",
    "decimal",
    "money",
    "char",
    "character",
    "bpchar",
    "varchar",
    "character varying",
    "text",
    "name",
    "uuid",
    "date",
    "time",
    "time without time zone",
    "timetz",
    "time with time zone",
    "timestamp",
    "timestamp without time zone",
    "timestamptz",
    "timestamp with time zone",
    "interval",
    "json",
    "jsonb",
    "xml",
    "bytea",
    "inet",
    "cidr",
    "macaddr",
    "point",
    "line",
    "lseg",
    "box",
    "path",
    "polygon",
    "circle",
    "int4range",
    "int8range",
    "numrange",
    "tsrange",
    "tstzrange",
    "daterange",
    "tsvector",
    "tsquery",
    "oid",
];

const AUTO_INCREMENT: &[&str] = &[
    "int4",
    "integer",
    "int",
    "int8",
    "bigint",
    "int2",
    "smallint",
    "serial",
    "serial4",
    "serial8",
    "bigserial",
    "smallserial",
    "serial2",
];
const SHORT_STRING: &[&str] = &["character varying", "varchar", "char", "character", "bpchar"];
const SHORT_TEXT: &[&str] = &[
    "character varying",
    "varchar",
    "char",
    "character",
    "bpchar",
    "text",
];
const LONG_TEXT: &[&str] = &["text", "character varying", "varchar", "char", "character"];
const ATTACHMENT: &[&str] = &["text", "json", "jsonb", "character varying"];
const CHECKBOX: &[&str] = &[
    "bool",
    "boolean",
    "bit",
    "int2",
    "int4",
    "int8",
    "smallint",
    "int",
    "integer",
    "bigint",
    "char",
    "character",
];
const SELECT: &[&str] = &["text", "character varying", "varchar", "char"];
const COLLABORATOR: &[&str] = &["character varying", "varchar", "char", "character", "text"];
const DATE: &[&str] = &[
    "date",
    "timestamp",
    "timestamp without time zone",
    "timestamptz",
    "timestamp with time zone",
];
const YEAR: &[&str] = &["int", "integer", "int2", "int4", "smallint"];
const TIME: &[&str] = &[
    "time",
    "time without time zone",
    "timetz",
    "time with time zone",
    "timestamp",
    "timestamptz",
];
const CONTACT: &[&str] = &["character varying", "varchar", "text"];
const NUMBER: &[&str] = &[
    "bigint",
    "int8",
    "int",
    "integer",
    "int2",
    "int4",
    "smallint",
    "numeric",
    "decimal",
    "real",
    "float4",
    "float8",
    "double precision",
];
const DECIMAL: &[&str] = &[
    "decimal",
    "numeric",
    "real",
    "float4",
    "float8",
    "double precision",
];
const CURRENCY: &[&str] = &[
    "decimal",
    "numeric",
    "money",
    "real",
    "float4",
    "float8",
    "double precision",
    "int",
    "integer",
    "bigint",
    "int2",
    "int4",
    "int8",
    "smallint",
];
const PERCENT: &[&str] = &[
    "double precision",
    "float8",
    "float4",
    "real",
    "numeric",
    "decimal",
    "int",
    "integer",
    "bigint",
    "smallint",
];
const DURATION: &[&str] = &[
    "decimal",
    "numeric",
    "int",
    "integer",
    "bigint",
    "int2",
    "int4",
    "int8",
    "smallint",
    "double precision",
    "float4",
    "float8",
    "real",
];
const RATING: &[&str] = &[
    "smallint",
    "int",
    "integer",
    "bigint",
    "int2",
    "int4",
    "int8",
    "numeric",
    "double precision",
    "float4",
    "float8",
    "real",
];
const COUNT: &[&str] = &[
    "int",
    "integer",
    "bigint",
    "int2",
    "int4",
    "int8",
    "smallint",
    "serial",
    "bigserial",
    "smallserial",
];
const FORMULA: &[&str] = &["character varying", "text"];
const VARYING: &[&str] = &["character varying"];
const DATE_TIME: &[&str] = &[
    "timestamp",
    "timestamp without time zone",
    "timestamptz",
    "timestamp with time zone",
];
const GEOMETRY: &[&str] = &["polygon", "point", "circle", "box", "line", "lseg", "path"];
const JSON: &[&str] = &["json", "jsonb", "text"];

/// PostgreSQL profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresProfile;

impl PostgresProfile {
    /// Creates a new PostgreSQL profile.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DialectProfile for PostgresProfile {
    fn kind(&self) -> DialectKind {
        DialectKind::Postgres
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
            L::MultiSelect | L::SingleSelect => SELECT,
            L::Collaborator => COLLABORATOR,
            L::Date => DATE,
            L::Time => TIME,
            L::Year => YEAR,
            L::PhoneNumber | L::Email | L::Url => CONTACT,
            L::Number => NUMBER,
            L::Decimal => DECIMAL,
            L::Currency => CURRENCY,
            L::Percent => PERCENT,
            L::Duration => DURATION,
            L::Rating => RATING,
            L::Count | L::AutoNumber => COUNT,
            L::Formula => FORMULA,
            L::Rollup | L::Lookup | L::Barcode => VARYING,
            L::DateTime | L::CreateTime | L::LastModifiedTime => DATE_TIME,
            L::Geometry => GEOMETRY,
            L::Json => JSON,
        }
    }

    fn classify_known(&self, physical: &str) -> Option<AbstractCategory> {
        use AbstractCategory as C;
        let category = match normalize(physical).as_str() {
            "int" | "integer" | "bigint" | "smallint" | "int2" | "int4" | "int8" | "serial"
            | "serial2" | "serial4" | "serial8" | "smallserial" | "bigserial" | "bit"
            | "bit varying" | "varbit" | "oid" => C::Integer,
            "real" | "float4" | "float8" | "double precision" | "numeric" | "decimal"
            | "money" => C::Float,
            "bool" | "boolean" => C::Boolean,
            "char" | "character" | "bpchar" | "varchar" | "character varying" | "name"
            | "uuid" | "interval" | "inet" | "cidr" | "macaddr" | "macaddr8" | "tsvector"
            | "tsquery" | "int4range" | "int8range" | "numrange" | "tsrange" | "tstzrange"
            | "daterange" => C::String,
            "point" | "line" | "lseg" | "box" | "path" | "polygon" | "circle" => C::String,
            "text" | "xml" | "citext" => C::Text,
            "date" => C::Date,
            "time" | "time without time zone" | "timetz" | "time with time zone" => C::Time,
            "timestamp" | "timestamp without time zone" | "timestamptz"
            | "timestamp with time zone" => C::DateTime,
            "bytea" => C::Blob,
            "json" | "jsonb" => C::Json,
            _ => return None,
        };
        Some(category)
    }

    fn default_length(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "char" | "character" | "bpchar" => Some(255),
            "bit" => Some(1),
            _ => None,
        }
    }

    fn default_scale(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "numeric" | "decimal" => Some(2),
            _ => None,
        }
    }

    fn max_length(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "char" | "character" | "bpchar" | "varchar" | "character varying" => Some(10_485_760),
            "bit" | "bit varying" | "varbit" => Some(83_886_080),
            "numeric" | "decimal" => Some(1000),
            _ => None,
        }
    }

    fn max_scale(&self, physical: &str) -> Option<u32> {
        match normalize(physical).as_str() {
            "numeric" | "decimal" => Some(1000),
            _ => None,
        }
    }

    fn is_length_editable(&self, physical: &str) -> bool {
        matches!(
            normalize(physical).as_str(),
            "char"
                | "character"
                | "bpchar"
                | "varchar"
                | "character varying"
                | "bit"
                | "bit varying"
                | "varbit"
        )
    }

    fn supports_auto_increment(&self, physical: &str) -> bool {
        matches!(
            normalize(physical).as_str(),
            "int"
                | "integer"
                | "bigint"
                | "smallint"
                | "int2"
                | "int4"
                | "int8"
                | "serial"
                | "serial2"
                | "serial4"
                | "serial8"
                | "smallserial"
                | "bigserial"
        )
    }

    fn render_default(&self, default: &DefaultValue) -> String {
        match default {
            DefaultValue::Boolean(b) => String::from(if *b { "true" } else { "false" }),
            _ => default.to_sql(),
        }
    }

    fn row_limit(&self) -> RowLimit {
        RowLimit::Limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_increment_id() {
        let col = PostgresProfile::new()
            .draft_column("id", LogicalColumnType::Id, IdentityKind::AutoIncrement)
            .unwrap();
        assert_eq!(col.physical_type, "int4");
        assert!(col.auto_increment);
        // Postgres has no unsigned integers.
        assert!(!col.unsigned);
    }

    #[test]
    fn test_generated_id_is_string() {
        let col = PostgresProfile
            .draft_column("id", LogicalColumnType::Id, IdentityKind::ExternallyGenerated)
            .unwrap();
        assert_eq!(col.physical_type, "character varying");
        assert!(col.primary_key);
        assert!(!col.auto_increment);
        assert!(!col.unsigned);
    }

    #[test]
    fn test_checkbox_default_renders_false() {
        let col = PostgresProfile
            .draft_column("done", LogicalColumnType::Checkbox, IdentityKind::None)
            .unwrap();
        assert_eq!(col.physical_type, "bool");
        let default = col.default.unwrap();
        assert_eq!(default, DefaultValue::Boolean(false));
        assert_eq!(PostgresProfile.render_default(&default), "false");
    }

    #[test]
    fn test_classify_multi_word_types() {
        assert_eq!(
            PostgresProfile.classify_known("TIMESTAMP(3) WITH TIME ZONE"),
            Some(AbstractCategory::DateTime)
        );
        assert_eq!(
            PostgresProfile.classify_known("character varying(255)"),
            Some(AbstractCategory::String)
        );
        assert_eq!(
            PostgresProfile.classify_known("jsonb"),
            Some(AbstractCategory::Json)
        );
    }

    #[test]
    fn test_no_unsigned() {
        assert!(!PostgresProfile.is_unsigned_editable("integer"));
        assert!(!PostgresProfile.has_unsigned_variant("bigint"));
        assert_eq!(PostgresProfile.default_scale("NUMERIC"), Some(2));
        assert!(PostgresProfile.is_scale_editable("numeric"));
        assert!(!PostgresProfile.is_scale_editable("float8"));
    }
}
