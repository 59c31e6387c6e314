//! Reverse classification of physical type names.
//!
//! Used when a foreign schema is imported: a type string such as
//! `int(11) unsigned` is bucketed into an [`AbstractCategory`] and from there
//! given a suggested [`LogicalColumnType`]. The suggestion is only a starting
//! point for the user.

use tracing::debug;

use crate::column::ColumnDefinition;
use crate::dialect::{DialectProfile, normalize};
use crate::types::{AbstractCategory, LogicalColumnType};

/// Classifies physical types for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    profile: &'a dyn DialectProfile,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver for the given dialect profile.
    #[must_use]
    pub const fn new(profile: &'a dyn DialectProfile) -> Self {
        Self { profile }
    }

    /// Returns the profile this resolver classifies for.
    #[must_use]
    pub const fn profile(&self) -> &'a dyn DialectProfile {
        self.profile
    }

    /// Classifies a physical type name.
    ///
    /// Never fails: names the dialect does not know are `string`.
    #[must_use]
    pub fn classify(&self, physical: &str) -> AbstractCategory {
        match self.profile.classify_known(physical) {
            Some(category) => category,
            None => {
                debug!(
                    dialect = self.profile.name(),
                    physical = %physical,
                    "Unknown physical type, classifying as string"
                );
                AbstractCategory::String
            }
        }
    }

    /// Suggests a logical type for a physical type name.
    #[must_use]
    pub fn suggest_logical_type(&self, physical: &str) -> LogicalColumnType {
        self.classify(physical).suggest_logical_type()
    }

    /// Builds an untouched column from a foreign column description.
    ///
    /// Type arguments are read as `(length)` or `(precision, scale)`
    /// depending on the category. A trailing `unsigned` sets the flag.
    #[must_use]
    pub fn import_column(&self, name: &str, physical: &str) -> ColumnDefinition {
        let category = self.classify(physical);
        let base = base_type(physical);
        let args = type_args(physical);
        let normalized = normalize(physical);

        let mut column =
            ColumnDefinition::new(name, base).logical(category.suggest_logical_type());
        match (category, args.as_slice()) {
            (AbstractCategory::Float, [precision, scale, ..]) => {
                column.precision = Some(*precision);
                column.scale = Some(*scale);
            }
            (AbstractCategory::Float, [precision]) => column.precision = Some(*precision),
            (_, [length, ..]) => column.length = Some(*length),
            (_, []) => {}
        }
        column.unsigned = normalized.split(' ').any(|word| word == "unsigned")
            && self.profile.has_unsigned_variant(physical);
        column
    }
}

/// Returns the type name with arguments and sign modifiers removed, keeping
/// the original spelling.
fn base_type(physical: &str) -> String {
    let head = physical.split('(').next().unwrap_or(physical);
    let mut words: Vec<&str> = head
        .split_whitespace()
        .filter(|w| {
            !w.eq_ignore_ascii_case("unsigned")
                && !w.eq_ignore_ascii_case("signed")
                && !w.eq_ignore_ascii_case("zerofill")
        })
        .collect();
    // Keep suffixes that follow the arguments, e.g. `timestamp(6) with time zone`.
    if let Some(close) = physical.find(')') {
        words.extend(physical[close + 1..].split_whitespace().filter(|w| {
            !w.eq_ignore_ascii_case("unsigned")
                && !w.eq_ignore_ascii_case("signed")
                && !w.eq_ignore_ascii_case("zerofill")
        }));
    }
    words.join(" ")
}

/// Parses numeric type arguments; non-numeric lists (enum values) yield none.
fn type_args(physical: &str) -> Vec<u32> {
    let Some(open) = physical.find('(') else {
        return Vec::new();
    };
    let Some(close) = physical[open..].find(')') else {
        return Vec::new();
    };
    physical[open + 1..open + close]
        .split(',')
        .map(|arg| arg.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default()
}
