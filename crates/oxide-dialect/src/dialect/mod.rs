//! Per-dialect type catalogs and column rules.
//!
//! Every supported SQL engine family has a profile implementing
//! [`DialectProfile`]. Profiles are zero-sized and their catalogs are static
//! slices, so a profile can be shared freely across threads.
//!
//! Each profile maps a [`LogicalColumnType`] with an exhaustive `match`, so
//! adding a logical type does not compile until every dialect handles it.
//!
//! # Example
//!
//! ```rust
//! use oxide_dialect::dialect::{DialectKind, DialectProfile};
//! use oxide_dialect::types::{IdentityKind, LogicalColumnType};
//!
//! let pg = DialectKind::Postgres.profile();
//! let types = pg.physical_types_for(LogicalColumnType::Email, IdentityKind::None);
//! assert_eq!(types[0], "character varying");
//!
//! let id = pg
//!     .draft_column("id", LogicalColumnType::Id, IdentityKind::AutoIncrement)
//!     .unwrap();
//! assert!(id.primary_key && id.auto_increment);
//! ```

mod mssql;
mod mysql;
mod oracle;
mod postgres;
mod sqlite;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use mssql::MssqlProfile;
pub use mysql::MySqlProfile;
pub use oracle::OracleProfile;
pub use postgres::PostgresProfile;
pub use sqlite::SqliteProfile;

use crate::column::{ColumnDefinition, DefaultValue, ValidationRule, Validator};
use crate::error::{DialectError, Result};
use crate::statement;
use crate::types::{AbstractCategory, IdentityKind, LogicalColumnType};

/// Supported SQL engine families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// MySQL and MariaDB.
    #[default]
    #[serde(alias = "mysql2", alias = "mariadb")]
    MySql,
    /// PostgreSQL.
    #[serde(alias = "pg", alias = "postgresql")]
    Postgres,
    /// Microsoft SQL Server.
    #[serde(alias = "sqlserver")]
    Mssql,
    /// SQLite.
    #[serde(alias = "sqlite3")]
    Sqlite,
    /// Oracle Database.
    #[serde(alias = "oracledb")]
    Oracle,
}

impl DialectKind {
    /// Every supported dialect.
    pub const ALL: [Self; 5] = [
        Self::MySql,
        Self::Postgres,
        Self::Mssql,
        Self::Sqlite,
        Self::Oracle,
    ];

    /// Returns the canonical dialect name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
            Self::Mssql => "mssql",
            Self::Sqlite => "sqlite",
            Self::Oracle => "oracle",
        }
    }

    /// Returns the profile for this dialect.
    #[must_use]
    pub fn profile(self) -> &'static dyn DialectProfile {
        match self {
            Self::MySql => &MySqlProfile,
            Self::Postgres => &PostgresProfile,
            Self::Mssql => &MssqlProfile,
            Self::Sqlite => &SqliteProfile,
            Self::Oracle => &OracleProfile,
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectKind {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mysql2" | "mariadb" => Ok(Self::MySql),
            "pg" | "postgres" | "postgresql" => Ok(Self::Postgres),
            "mssql" | "sqlserver" => Ok(Self::Mssql),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "oracle" | "oracledb" => Ok(Self::Oracle),
            _ => Err(DialectError::UnknownDialect(s.to_string())),
        }
    }
}

/// How a dialect bounds the rows of a preview query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLimit {
    /// `LIMIT n`
    Limit,
    /// `LIMIT 0,n`
    LimitOffset,
    /// `OFFSET 0 ROWS FETCH NEXT n ROWS ONLY`
    OffsetFetch,
    /// `FETCH FIRST n ROWS ONLY`
    FetchFirst,
}

/// Rule set for one SQL engine family.
///
/// Methods taking a physical type name accept it in any case and with
/// type arguments (`VARCHAR(255)`), see [`normalize`].
pub trait DialectProfile: Send + Sync + fmt::Debug {
    /// Returns the dialect this profile describes.
    fn kind(&self) -> DialectKind;

    /// Returns the dialect name.
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Returns the general-purpose type catalog.
    fn catalog(&self) -> &'static [&'static str];

    /// Returns the eligible physical types, recommended default first.
    fn physical_types_for(
        &self,
        logical: LogicalColumnType,
        identity: IdentityKind,
    ) -> &'static [&'static str];

    /// Classifies a physical type this dialect knows about.
    fn classify_known(&self, physical: &str) -> Option<AbstractCategory>;

    /// Returns the default declared length for a physical type.
    fn default_length(&self, physical: &str) -> Option<u32>;

    /// Returns the default scale for a physical type.
    fn default_scale(&self, physical: &str) -> Option<u32>;

    /// Returns the largest legal declared length.
    fn max_length(&self, physical: &str) -> Option<u32>;

    /// Returns the largest legal scale.
    fn max_scale(&self, physical: &str) -> Option<u32>;

    /// Returns whether the user may change the declared length.
    fn is_length_editable(&self, physical: &str) -> bool;

    /// Returns whether the type can auto-increment.
    fn supports_auto_increment(&self, physical: &str) -> bool;

    /// Returns how preview queries are row-limited.
    fn row_limit(&self) -> RowLimit;

    /// Returns whether the type has a signed and an unsigned variant.
    fn has_unsigned_variant(&self, _physical: &str) -> bool {
        false
    }

    /// Returns whether the user may toggle the unsigned flag.
    fn is_unsigned_editable(&self, physical: &str) -> bool {
        self.has_unsigned_variant(physical)
    }

    /// Returns whether the user may change the scale.
    fn is_scale_editable(&self, physical: &str) -> bool {
        self.default_scale(physical).is_some()
    }

    /// Returns whether the type is numeric in this dialect.
    fn is_numeric(&self, physical: &str) -> bool {
        self.classify_known(physical)
            .is_some_and(AbstractCategory::is_numeric)
    }

    /// Declared length for a draft of `logical` stored as `physical`.
    fn draft_length(&self, _logical: LogicalColumnType, physical: &str) -> Option<u32> {
        self.default_length(physical)
    }

    /// Default value a logical type mandates when stored as `physical`.
    fn default_value_for(
        &self,
        logical: LogicalColumnType,
        physical: &str,
    ) -> Option<DefaultValue> {
        match logical {
            LogicalColumnType::Checkbox => Some(false_equivalent(self.classify_known(physical))),
            LogicalColumnType::Rating => Some(DefaultValue::Integer(0)),
            _ => None,
        }
    }

    /// Renders a default value as this dialect spells it.
    fn render_default(&self, default: &DefaultValue) -> String {
        match default {
            DefaultValue::Boolean(b) => String::from(if *b { "1" } else { "0" }),
            _ => default.to_sql(),
        }
    }

    /// Returns the default physical type for a logical type.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedLogicalType`] if the dialect maps
    /// the logical type to no physical types.
    fn default_physical_type(
        &self,
        logical: LogicalColumnType,
        identity: IdentityKind,
    ) -> Result<&'static str> {
        self.physical_types_for(logical, identity)
            .first()
            .copied()
            .ok_or_else(|| DialectError::unsupported(self.name(), logical.as_str()))
    }

    /// Builds a draft column for a logical type.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::default_physical_type`].
    fn draft_column(
        &self,
        name: &str,
        logical: LogicalColumnType,
        identity: IdentityKind,
    ) -> Result<ColumnDefinition> {
        let physical = self.default_physical_type(logical, identity)?;
        let mut column = ColumnDefinition::new(name, physical)
            .logical(logical)
            .created();
        column.length = self.draft_length(logical, physical);
        column.scale = self.default_scale(physical);

        if logical == LogicalColumnType::Id {
            column = column.primary_key();
            if identity == IdentityKind::AutoIncrement {
                column.auto_increment = self.supports_auto_increment(physical);
                column.unsigned = self.has_unsigned_variant(physical);
            }
        }

        column.default = self.default_value_for(logical, physical);
        if let Some(validator) = Validator::for_logical_type(logical) {
            column = column.validate(ValidationRule::new(validator));
        }
        Ok(column)
    }

    /// Returns the columns of a freshly created table: a key and a title.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::draft_column`].
    fn new_table_columns(&self, identity: IdentityKind) -> Result<Vec<ColumnDefinition>> {
        let identity = match identity {
            IdentityKind::None => IdentityKind::AutoIncrement,
            other => other,
        };
        let id = self.draft_column("id", LogicalColumnType::Id, identity)?;
        let title = self.new_column("")?;
        Ok(vec![id, title])
    }

    /// Returns a fresh short-text column named `title<suffix>`.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::draft_column`].
    fn new_column(&self, suffix: &str) -> Result<ColumnDefinition> {
        self.draft_column(
            &format!("title{suffix}"),
            LogicalColumnType::SingleLineText,
            IdentityKind::None,
        )
    }

    /// Limits the first statement of `sql` if it is a SELECT.
    fn limit_preview<'a>(&self, sql: &'a str, limit: Option<u64>) -> Cow<'a, str> {
        statement::limit_preview_with(sql, limit, self.row_limit())
    }
}

/// Normalizes a physical type name for lookup.
///
/// Lowercases, drops parenthesized arguments and collapses whitespace:
/// `"TIMESTAMP(6)  WITH TIME ZONE"` becomes `"timestamp with time zone"`.
#[must_use]
pub fn normalize(physical: &str) -> String {
    let mut stripped = String::with_capacity(physical.len());
    let mut depth = 0usize;
    for c in physical.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => stripped.push(c),
            _ => {}
        }
    }
    stripped
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drops sign and padding modifiers from a normalized type name.
pub(crate) fn strip_modifiers(normalized: &str) -> String {
    normalized
        .split(' ')
        .filter(|word| !matches!(*word, "unsigned" | "signed" | "zerofill"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The checkbox default for a type of the given category.
fn false_equivalent(category: Option<AbstractCategory>) -> DefaultValue {
    match category {
        Some(AbstractCategory::Boolean) => DefaultValue::Boolean(false),
        Some(AbstractCategory::Integer | AbstractCategory::Float) => DefaultValue::Integer(0),
        _ => DefaultValue::String(String::from("0")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dialect_aliases() {
        assert_eq!("mysql2".parse::<DialectKind>().unwrap(), DialectKind::MySql);
        assert_eq!("MariaDB".parse::<DialectKind>().unwrap(), DialectKind::MySql);
        assert_eq!("pg".parse::<DialectKind>().unwrap(), DialectKind::Postgres);
        assert_eq!("sqlserver".parse::<DialectKind>().unwrap(), DialectKind::Mssql);
        assert_eq!("sqlite3".parse::<DialectKind>().unwrap(), DialectKind::Sqlite);
        assert_eq!("oracledb".parse::<DialectKind>().unwrap(), DialectKind::Oracle);
        assert!(matches!(
            "db2".parse::<DialectKind>(),
            Err(DialectError::UnknownDialect(_))
        ));
    }

    #[test]
    fn test_serde_aliases() {
        let kind: DialectKind = serde_json::from_str("\"pg\"").unwrap();
        assert_eq!(kind, DialectKind::Postgres);
        assert_eq!(serde_json::to_string(&DialectKind::Mssql).unwrap(), "\"mssql\"");
    }

    #[test]
    fn test_profile_kind_matches() {
        for kind in DialectKind::ALL {
            assert_eq!(kind.profile().kind(), kind);
            assert_eq!(kind.profile().name(), kind.as_str());
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("VARCHAR(255)"), "varchar");
        assert_eq!(
            normalize("  TIMESTAMP(6)   WITH TIME ZONE "),
            "timestamp with time zone"
        );
        assert_eq!(normalize("int(11) unsigned"), "int unsigned");
        assert_eq!(strip_modifiers("int unsigned zerofill"), "int");
    }

    #[test]
    fn test_false_equivalent() {
        assert_eq!(
            false_equivalent(Some(AbstractCategory::Boolean)),
            DefaultValue::Boolean(false)
        );
        assert_eq!(
            false_equivalent(Some(AbstractCategory::Integer)),
            DefaultValue::Integer(0)
        );
        assert_eq!(
            false_equivalent(Some(AbstractCategory::String)),
            DefaultValue::String("0".into())
        );
    }
}
