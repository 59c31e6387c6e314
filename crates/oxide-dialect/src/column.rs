//! Draft column definitions.
//!
//! A [`ColumnDefinition`] is what a dialect profile or the schema inference
//! hands to the schema designer. It is plain data: dialect rules are applied
//! by [`crate::policy::ColumnPolicy`], not by the column itself.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::LogicalColumnType;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(https?|ftp)://[^\s/$.?#][^\s]*$|^(?i)[a-z0-9-]+(\.[a-z0-9-]+)+(/[^\s]*)?$")
        .unwrap()
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ().-]{5,18}[0-9]$").unwrap());
static CURRENCY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[$€£¥]?\s?-?(\d{1,3}(,\d{3})+|\d+)(\.\d{1,2})?$").unwrap());

/// Tracks how a column relates to what has been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationState {
    /// Loaded as-is, never touched.
    #[default]
    Unset,
    /// Created in this editing session.
    New,
    /// An existing column with pending edits.
    Modified,
}

impl MutationState {
    /// State after the column is created.
    #[must_use]
    pub const fn created(self) -> Self {
        match self {
            Self::Unset | Self::New => Self::New,
            Self::Modified => Self::Modified,
        }
    }

    /// State after a property edit.
    ///
    /// A `New` column stays `New` until it has been persisted once.
    #[must_use]
    pub const fn edited(self, persisted: bool) -> Self {
        match self {
            Self::New if !persisted => Self::New,
            Self::Unset | Self::New | Self::Modified => Self::Modified,
        }
    }
}

/// Default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DefaultValue {
    /// NULL default.
    Null,
    /// Boolean default.
    Boolean(bool),
    /// Integer default.
    Integer(i64),
    /// Float default.
    Float(f64),
    /// String default.
    String(String),
    /// Raw SQL expression (e.g., CURRENT_TIMESTAMP).
    Expression(String),
}

impl DefaultValue {
    /// Returns the generic SQL representation of the default value.
    ///
    /// Dialects that spell booleans differently override this through
    /// [`crate::dialect::DialectProfile::render_default`].
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Boolean(b) => {
                if *b {
                    String::from("TRUE")
                } else {
                    String::from("FALSE")
                }
            }
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Expression(expr) => expr.clone(),
        }
    }
}

/// Named validators understood by the column editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Validator {
    /// Phone number.
    #[serde(rename = "isMobilePhone")]
    MobilePhone,
    /// Email address.
    #[serde(rename = "isEmail")]
    Email,
    /// Web address.
    #[serde(rename = "isURL")]
    Url,
    /// Monetary amount.
    #[serde(rename = "isCurrency")]
    Currency,
}

impl Validator {
    /// Returns the validator's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MobilePhone => "isMobilePhone",
            Self::Email => "isEmail",
            Self::Url => "isURL",
            Self::Currency => "isCurrency",
        }
    }

    /// Returns the validator a logical type carries, if any.
    #[must_use]
    pub const fn for_logical_type(logical: LogicalColumnType) -> Option<Self> {
        match logical {
            LogicalColumnType::PhoneNumber => Some(Self::MobilePhone),
            LogicalColumnType::Email => Some(Self::Email),
            LogicalColumnType::Url => Some(Self::Url),
            LogicalColumnType::Currency => Some(Self::Currency),
            _ => None,
        }
    }

    fn is_match(self, value: &str) -> bool {
        match self {
            Self::MobilePhone => PHONE_RE.is_match(value),
            Self::Email => EMAIL_RE.is_match(value),
            Self::Url => URL_RE.is_match(value),
            Self::Currency => CURRENCY_RE.is_match(value),
        }
    }
}

/// A validation rule attached to a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Validator to run.
    pub validator: Validator,
    /// Validator arguments.
    pub args: Vec<String>,
    /// Message reported on failure.
    pub message: String,
}

impl ValidationRule {
    /// Creates a rule with no arguments and the standard failure message.
    #[must_use]
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            args: vec![String::new()],
            message: format!("Validation failed : {}", validator.as_str()),
        }
    }

    /// Checks a value.
    ///
    /// # Errors
    ///
    /// Returns the rule's failure message if the value does not match.
    pub fn check(&self, value: &str) -> Result<(), String> {
        if self.validator.is_match(value.trim()) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

/// A draft or physical column specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// Physical type name as the dialect spells it.
    pub physical_type: String,
    /// Logical type the column was drafted for, if known.
    pub logical_type: Option<LogicalColumnType>,
    /// Numeric precision.
    pub precision: Option<u32>,
    /// Numeric scale.
    pub scale: Option<u32>,
    /// Declared length.
    pub length: Option<u32>,
    /// Whether the column is nullable.
    pub nullable: bool,
    /// Whether this is a primary key.
    pub primary_key: bool,
    /// Whether this column auto-increments.
    pub auto_increment: bool,
    /// Whether the numeric type is unsigned.
    pub unsigned: bool,
    /// Default value.
    pub default: Option<DefaultValue>,
    /// Validation rules.
    pub validations: Vec<ValidationRule>,
    /// Mutation marker.
    pub state: MutationState,
    /// Free-form comment.
    pub comment: String,
}

impl ColumnDefinition {
    /// Creates a nullable, untouched column.
    #[must_use]
    pub fn new(name: impl Into<String>, physical_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            physical_type: physical_type.into(),
            logical_type: None,
            precision: None,
            scale: None,
            length: None,
            nullable: true,
            primary_key: false,
            auto_increment: false,
            unsigned: false,
            default: None,
            validations: Vec::new(),
            state: MutationState::Unset,
            comment: String::new(),
        }
    }

    /// Sets the logical type.
    #[must_use]
    pub fn logical(mut self, logical: LogicalColumnType) -> Self {
        self.logical_type = Some(logical);
        self
    }

    /// Sets precision and scale.
    #[must_use]
    pub fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    /// Sets the declared length.
    #[must_use]
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Marks the column as PRIMARY KEY.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false; // Primary keys are implicitly NOT NULL
        self
    }

    /// Marks the column as auto-incrementing.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Marks the column as unsigned.
    #[must_use]
    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Attaches a validation rule.
    #[must_use]
    pub fn validate(mut self, rule: ValidationRule) -> Self {
        self.validations.push(rule);
        self
    }

    /// Marks the column as created in this session.
    #[must_use]
    pub fn created(mut self) -> Self {
        self.state = self.state.created();
        self
    }

    /// Records a property edit on the mutation marker.
    pub fn touch(&mut self, persisted: bool) {
        self.state = self.state.edited(persisted);
    }

    /// Returns whether the column was created in this session.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.state == MutationState::New
    }

    /// Runs every validation rule against a value.
    ///
    /// # Errors
    ///
    /// Returns the messages of all failing rules, in rule order.
    pub fn check_value(&self, value: &str) -> Result<(), Vec<String>> {
        let failures: Vec<String> = self
            .validations
            .iter()
            .filter_map(|rule| rule.check(value).err())
            .collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_column() {
        let col = ColumnDefinition::new("id", "int");
        assert_eq!(col.name, "id");
        assert_eq!(col.physical_type, "int");
        assert!(col.nullable);
        assert!(!col.primary_key);
        assert_eq!(col.state, MutationState::Unset);
    }

    #[test]
    fn test_primary_key_column() {
        let col = ColumnDefinition::new("id", "bigint")
            .primary_key()
            .auto_increment()
            .unsigned();
        assert!(col.primary_key);
        assert!(col.auto_increment);
        assert!(col.unsigned);
        assert!(!col.nullable); // Primary key implies NOT NULL
    }

    #[test]
    fn test_mutation_transitions() {
        assert_eq!(MutationState::Unset.created(), MutationState::New);
        assert_eq!(MutationState::New.edited(false), MutationState::New);
        assert_eq!(MutationState::New.edited(true), MutationState::Modified);
        assert_eq!(MutationState::Unset.edited(false), MutationState::Modified);
        assert_eq!(MutationState::Modified.edited(false), MutationState::Modified);
        assert_eq!(MutationState::Modified.created(), MutationState::Modified);
    }

    #[test]
    fn test_touch_never_reverts() {
        let mut col = ColumnDefinition::new("title", "varchar").created();
        col.touch(false);
        assert!(col.is_new());
        col.touch(true);
        assert_eq!(col.state, MutationState::Modified);
        col.touch(false);
        assert_eq!(col.state, MutationState::Modified);
    }

    #[test]
    fn test_default_value_to_sql() {
        assert_eq!(DefaultValue::Null.to_sql(), "NULL");
        assert_eq!(DefaultValue::Boolean(true).to_sql(), "TRUE");
        assert_eq!(DefaultValue::Integer(0).to_sql(), "0");
        assert_eq!(DefaultValue::Float(2.5).to_sql(), "2.5");
        assert_eq!(DefaultValue::String("it's".into()).to_sql(), "'it''s'"); // Escaped
        assert_eq!(
            DefaultValue::Expression("CURRENT_TIMESTAMP".into()).to_sql(),
            "CURRENT_TIMESTAMP"
        );
    }

    #[test]
    fn test_validation_rule_message() {
        let rule = ValidationRule::new(Validator::Email);
        assert_eq!(rule.message, "Validation failed : isEmail");
        assert_eq!(rule.args, vec![String::new()]);
        assert!(rule.check("ada@example.com").is_ok());
        assert_eq!(
            rule.check("not-an-email").unwrap_err(),
            "Validation failed : isEmail"
        );
    }

    #[test]
    fn test_validators() {
        let phone = ValidationRule::new(Validator::MobilePhone);
        assert!(phone.check("+1 (555) 123-4567").is_ok());
        assert!(phone.check("call me").is_err());

        let url = ValidationRule::new(Validator::Url);
        assert!(url.check("https://example.com/path?q=1").is_ok());
        assert!(url.check("example.org").is_ok());
        assert!(url.check("not a url").is_err());

        let currency = ValidationRule::new(Validator::Currency);
        assert!(currency.check("$1,234.50").is_ok());
        assert!(currency.check("-12").is_ok());
        assert!(currency.check("12.345").is_err());
    }

    #[test]
    fn test_check_value_collects_failures() {
        let col = ColumnDefinition::new("contact", "varchar")
            .validate(ValidationRule::new(Validator::Email))
            .validate(ValidationRule::new(Validator::Url));
        let failures = col.check_value("nope").unwrap_err();
        assert_eq!(failures.len(), 2);
        assert!(ColumnDefinition::new("free", "text").check_value("anything").is_ok());
    }

    #[test]
    fn test_validator_for_logical_type() {
        assert_eq!(
            Validator::for_logical_type(LogicalColumnType::Currency),
            Some(Validator::Currency)
        );
        assert_eq!(Validator::for_logical_type(LogicalColumnType::Number), None);
    }
}
