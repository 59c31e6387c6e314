//! Logical column types and the abstract categories they group into.
//!
//! A [`LogicalColumnType`] is what a user picks for a field ("Email",
//! "Currency"). It says nothing about storage. Each dialect profile maps it
//! to a list of physical types. Going the other way, a physical type string
//! is classified into an [`AbstractCategory`], which is coarse and lossy.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DialectError, Result};

/// Dialect-neutral semantic column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalColumnType {
    /// Primary key column.
    #[serde(rename = "ID")]
    Id,
    /// Short single-line text.
    SingleLineText,
    /// Unbounded text.
    LongText,
    /// Attachment metadata (stored as serialized text).
    Attachment,
    /// Boolean checkbox.
    Checkbox,
    /// Multiple values from a fixed option list.
    MultiSelect,
    /// One value from a fixed option list.
    SingleSelect,
    /// Reference to a workspace user.
    Collaborator,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Calendar year.
    Year,
    /// Phone number.
    PhoneNumber,
    /// Email address.
    Email,
    /// Web address.
    #[serde(rename = "URL")]
    Url,
    /// Whole number.
    Number,
    /// Fractional number.
    Decimal,
    /// Monetary amount.
    Currency,
    /// Percentage.
    Percent,
    /// Elapsed time.
    Duration,
    /// Star rating.
    Rating,
    /// Computed formula.
    Formula,
    /// Aggregate over linked records.
    Rollup,
    /// Count of linked records.
    Count,
    /// Value looked up through a link.
    Lookup,
    /// Date and time.
    DateTime,
    /// Row creation timestamp.
    CreateTime,
    /// Row modification timestamp.
    LastModifiedTime,
    /// Sequential number.
    AutoNumber,
    /// Barcode payload.
    Barcode,
    /// Action button.
    Button,
    /// Spatial value.
    Geometry,
    /// Structured JSON document.
    #[serde(rename = "JSON")]
    Json,
    /// Reference to another table's key.
    ForeignKey,
}

impl LogicalColumnType {
    /// Every logical type, in declaration order.
    pub const ALL: [Self; 33] = [
        Self::Id,
        Self::SingleLineText,
        Self::LongText,
        Self::Attachment,
        Self::Checkbox,
        Self::MultiSelect,
        Self::SingleSelect,
        Self::Collaborator,
        Self::Date,
        Self::Time,
        Self::Year,
        Self::PhoneNumber,
        Self::Email,
        Self::Url,
        Self::Number,
        Self::Decimal,
        Self::Currency,
        Self::Percent,
        Self::Duration,
        Self::Rating,
        Self::Formula,
        Self::Rollup,
        Self::Count,
        Self::Lookup,
        Self::DateTime,
        Self::CreateTime,
        Self::LastModifiedTime,
        Self::AutoNumber,
        Self::Barcode,
        Self::Button,
        Self::Geometry,
        Self::Json,
        Self::ForeignKey,
    ];

    /// Returns the canonical name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::SingleLineText => "SingleLineText",
            Self::LongText => "LongText",
            Self::Attachment => "Attachment",
            Self::Checkbox => "Checkbox",
            Self::MultiSelect => "MultiSelect",
            Self::SingleSelect => "SingleSelect",
            Self::Collaborator => "Collaborator",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Year => "Year",
            Self::PhoneNumber => "PhoneNumber",
            Self::Email => "Email",
            Self::Url => "URL",
            Self::Number => "Number",
            Self::Decimal => "Decimal",
            Self::Currency => "Currency",
            Self::Percent => "Percent",
            Self::Duration => "Duration",
            Self::Rating => "Rating",
            Self::Formula => "Formula",
            Self::Rollup => "Rollup",
            Self::Count => "Count",
            Self::Lookup => "Lookup",
            Self::DateTime => "DateTime",
            Self::CreateTime => "CreateTime",
            Self::LastModifiedTime => "LastModifiedTime",
            Self::AutoNumber => "AutoNumber",
            Self::Barcode => "Barcode",
            Self::Button => "Button",
            Self::Geometry => "Geometry",
            Self::Json => "JSON",
            Self::ForeignKey => "ForeignKey",
        }
    }

    /// Returns the single abstract category this logical type belongs to.
    #[must_use]
    pub const fn category(self) -> AbstractCategory {
        use AbstractCategory as C;
        match self {
            Self::Id
            | Self::Number
            | Self::Duration
            | Self::Rating
            | Self::Count
            | Self::AutoNumber => C::Integer,
            Self::Decimal | Self::Currency | Self::Percent => C::Float,
            Self::SingleLineText
            | Self::Collaborator
            | Self::PhoneNumber
            | Self::Email
            | Self::Url
            | Self::Formula
            | Self::Rollup
            | Self::Lookup
            | Self::Barcode
            | Self::Button
            | Self::Geometry
            | Self::ForeignKey => C::String,
            Self::LongText | Self::Attachment => C::Text,
            Self::Checkbox => C::Boolean,
            Self::MultiSelect => C::Set,
            Self::SingleSelect => C::Enum,
            Self::Date => C::Date,
            Self::Time => C::Time,
            Self::Year => C::Year,
            Self::DateTime | Self::CreateTime | Self::LastModifiedTime => C::DateTime,
            Self::Json => C::Json,
        }
    }

    /// Categories that a physical type offered for this logical type may
    /// classify into.
    ///
    /// `ID`, `ForeignKey` and `Button` accept the whole catalog, so they
    /// accept every category.
    #[must_use]
    pub const fn accepted_categories(self) -> &'static [AbstractCategory] {
        use AbstractCategory as C;
        match self {
            Self::Id | Self::ForeignKey | Self::Button => &AbstractCategory::ALL,
            Self::SingleLineText
            | Self::LongText
            | Self::Collaborator
            | Self::PhoneNumber
            | Self::Email
            | Self::Url
            | Self::Formula
            | Self::Geometry => &[C::String, C::Text],
            Self::Rollup | Self::Lookup | Self::Barcode => &[C::String, C::Text],
            Self::Attachment => &[C::Text, C::String, C::Json, C::Blob],
            Self::Checkbox => &[C::Boolean, C::Integer, C::Float, C::String],
            Self::MultiSelect => &[C::Set, C::Text, C::String],
            Self::SingleSelect => &[C::Enum, C::Text, C::String],
            Self::Date => &[C::Date, C::DateTime, C::String, C::Text],
            Self::Time => &[C::Time, C::DateTime, C::Date, C::String, C::Text],
            Self::Year => &[C::Year, C::Integer, C::Float],
            Self::Number
            | Self::Decimal
            | Self::Currency
            | Self::Percent
            | Self::Duration
            | Self::Rating => &[C::Integer, C::Float],
            Self::Count | Self::AutoNumber => &[C::Integer, C::Float],
            Self::DateTime | Self::CreateTime | Self::LastModifiedTime => {
                &[C::DateTime, C::Date]
            }
            Self::Json => &[C::Json, C::Text, C::String],
        }
    }
}

impl fmt::Display for LogicalColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalColumnType {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DialectError::unsupported("any", s))
    }
}

/// Coarse category used for reverse classification of physical types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbstractCategory {
    /// Whole numbers.
    Integer,
    /// Fractional and fixed-point numbers.
    Float,
    /// Bounded character data.
    String,
    /// Unbounded character data.
    Text,
    /// True/false.
    Boolean,
    /// Calendar date.
    Date,
    /// Date with time of day.
    #[serde(rename = "datetime")]
    DateTime,
    /// Time of day.
    Time,
    /// Calendar year.
    Year,
    /// Binary data.
    Blob,
    /// Single value from a declared list.
    Enum,
    /// Multiple values from a declared list.
    Set,
    /// Structured document.
    Json,
}

impl AbstractCategory {
    /// Every category.
    pub const ALL: [Self; 13] = [
        Self::Integer,
        Self::Float,
        Self::String,
        Self::Text,
        Self::Boolean,
        Self::Date,
        Self::DateTime,
        Self::Time,
        Self::Year,
        Self::Blob,
        Self::Enum,
        Self::Set,
        Self::Json,
    ];

    /// Returns the lowercase category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Year => "year",
            Self::Blob => "blob",
            Self::Enum => "enum",
            Self::Set => "set",
            Self::Json => "json",
        }
    }

    /// Returns whether the category holds numbers.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Suggests the logical type an imported column of this category should
    /// start out as. Import-time default only.
    #[must_use]
    pub const fn suggest_logical_type(self) -> LogicalColumnType {
        use LogicalColumnType as L;
        match self {
            Self::Integer => L::Number,
            Self::Boolean => L::Checkbox,
            Self::Float => L::Decimal,
            Self::Date => L::Date,
            Self::DateTime => L::DateTime,
            Self::Time => L::Time,
            Self::Year => L::Year,
            Self::String => L::SingleLineText,
            Self::Text => L::LongText,
            Self::Blob => L::Attachment,
            Self::Enum => L::SingleSelect,
            Self::Set => L::MultiSelect,
            Self::Json => L::LongText,
        }
    }
}

impl fmt::Display for AbstractCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an identifier column gets its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IdentityKind {
    /// Generation strategy not decided yet.
    #[default]
    #[serde(rename = "none")]
    None,
    /// Engine-managed auto-increment integer.
    #[serde(rename = "AI")]
    AutoIncrement,
    /// Application-assigned string key.
    #[serde(rename = "AG")]
    ExternallyGenerated,
}

impl IdentityKind {
    /// Returns the short name of the identity kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AutoIncrement => "AI",
            Self::ExternallyGenerated => "AG",
        }
    }
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityKind {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "ai" | "auto" | "autoincrement" | "auto-increment" => Ok(Self::AutoIncrement),
            "ag" | "generated" | "external" | "externally-generated" => {
                Ok(Self::ExternallyGenerated)
            }
            _ => Err(DialectError::UnknownIdentityKind(s.to_string())),
        }
    }
}
