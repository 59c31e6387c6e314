//! Draft schemas inferred from sample JSON data.
//!
//! Inference looks at one sample object and proposes one column per key, in
//! key order. It never fails: values it cannot type (arrays, nulls) are
//! skipped and anything other than an object yields no columns.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::{debug, warn};

use crate::column::ColumnDefinition;
use crate::dialect::DialectProfile;
use crate::types::{IdentityKind, LogicalColumnType};

/// Thresholds and sizes used by [`infer_columns_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceOptions {
    /// Longest string, in UTF-16 code units, still treated as short text.
    pub short_text_max: usize,
    /// Declared length of inferred short-text columns.
    pub short_text_length: u32,
    /// Precision of inferred integer columns.
    pub integer_precision: u32,
    /// Precision of inferred decimal columns.
    pub float_precision: u32,
    /// Scale of inferred decimal columns.
    pub float_scale: u32,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            short_text_max: 255,
            short_text_length: 45,
            integer_precision: 10,
            float_precision: 10,
            float_scale: 2,
        }
    }
}

/// Infers draft columns from a sample object using default options.
///
/// ```rust
/// use oxide_dialect::inference::infer_columns;
/// use oxide_dialect::types::LogicalColumnType;
///
/// let columns = infer_columns(&serde_json::json!({"age": 30, "name": "Ada"}));
/// assert_eq!(columns[0].physical_type, "int");
/// assert_eq!(columns[1].logical_type, Some(LogicalColumnType::SingleLineText));
/// ```
#[must_use]
pub fn infer_columns(sample: &Value) -> Vec<ColumnDefinition> {
    infer_columns_with(sample, &InferenceOptions::default())
}

/// Infers draft columns from a sample object.
#[must_use]
pub fn infer_columns_with(sample: &Value, options: &InferenceOptions) -> Vec<ColumnDefinition> {
    let Some(object) = sample.as_object() else {
        warn!(kind = value_kind(sample), "Sample is not an object, nothing to infer");
        return Vec::new();
    };

    object
        .iter()
        .filter_map(|(name, value)| infer_column(name, value, options))
        .collect()
}

/// Infers columns with default options and re-targets them to a dialect.
///
/// See [`infer_columns_for_with`].
#[must_use]
pub fn infer_columns_for(sample: &Value, profile: &dyn DialectProfile) -> Vec<ColumnDefinition> {
    infer_columns_for_with(sample, profile, &InferenceOptions::default())
}

/// Infers columns and re-targets them to a dialect's default physical types.
///
/// Precision, scale and length keep their inferred values.
#[must_use]
pub fn infer_columns_for_with(
    sample: &Value,
    profile: &dyn DialectProfile,
    options: &InferenceOptions,
) -> Vec<ColumnDefinition> {
    let mut columns = infer_columns_with(sample, options);
    for column in &mut columns {
        let Some(logical) = column.logical_type else {
            continue;
        };
        match profile.default_physical_type(logical, IdentityKind::None) {
            Ok(physical) => column.physical_type = physical.to_string(),
            Err(e) => warn!(column = %column.name, error = %e, "Keeping inferred type"),
        }
    }
    columns
}

fn infer_column(name: &str, value: &Value, options: &InferenceOptions) -> Option<ColumnDefinition> {
    let column = match value {
        Value::Number(n) if is_whole(n) => ColumnDefinition::new(name, "int")
            .logical(LogicalColumnType::Number)
            .precision(options.integer_precision, 0),
        Value::Number(_) => ColumnDefinition::new(name, "float")
            .logical(LogicalColumnType::Decimal)
            .precision(options.float_precision, options.float_scale),
        Value::String(s) if s.encode_utf16().count() <= options.short_text_max => {
            ColumnDefinition::new(name, "varchar")
                .logical(LogicalColumnType::SingleLineText)
                .length(options.short_text_length)
        }
        Value::String(_) => ColumnDefinition::new(name, "text").logical(LogicalColumnType::LongText),
        Value::Bool(_) => ColumnDefinition::new(name, "boolean").logical(LogicalColumnType::Checkbox),
        Value::Object(_) => ColumnDefinition::new(name, "json").logical(LogicalColumnType::Json),
        Value::Array(_) | Value::Null => {
            debug!(column = %name, kind = value_kind(value), "Skipping untyped sample value");
            return None;
        }
    };
    Some(column.created())
}

/// Whole numbers count as integers however they are written, so `30.0` and
/// `1e3` qualify.
fn is_whole(n: &Number) -> bool {
    n.is_i64()
        || n.is_u64()
        || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::column::MutationState;
    use crate::dialect::OracleProfile;

    #[test]
    fn test_number_kinds() {
        let columns = infer_columns(&json!({"count": 3, "ratio": 0.25, "big": 18446744073709551615u64}));
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].physical_type, "int");
        assert_eq!(columns[0].precision, Some(10));
        assert_eq!(columns[0].scale, Some(0));
        assert_eq!(columns[1].physical_type, "float");
        assert_eq!(columns[1].logical_type, Some(LogicalColumnType::Decimal));
        assert_eq!(columns[1].scale, Some(2));
        assert_eq!(columns[2].physical_type, "int");
    }

    #[test]
    fn test_whole_floats_are_integers() {
        let columns = infer_columns(&json!({"qty": 30.0, "n": 1e3, "neg": -2.0, "half": 2.5}));
        assert_eq!(columns[0].physical_type, "int");
        assert_eq!(columns[0].logical_type, Some(LogicalColumnType::Number));
        assert_eq!(columns[0].scale, Some(0));
        assert_eq!(columns[1].logical_type, Some(LogicalColumnType::Number));
        assert_eq!(columns[2].logical_type, Some(LogicalColumnType::Number));
        assert_eq!(columns[3].logical_type, Some(LogicalColumnType::Decimal));
    }

    #[test]
    fn test_string_threshold_counts_utf16_units() {
        let options = InferenceOptions::default();
        let at_limit = "é".repeat(255);
        let over = "a".repeat(256);
        // 128 astral characters take 256 UTF-16 code units.
        let astral = "😀".repeat(128);
        let columns = infer_columns(&json!({"a": at_limit, "b": over, "c": astral}));
        assert_eq!(columns[0].physical_type, "varchar");
        assert_eq!(columns[0].length, Some(options.short_text_length));
        assert_eq!(columns[1].physical_type, "text");
        assert_eq!(columns[1].length, None);
        assert_eq!(columns[2].physical_type, "text");
    }

    #[test]
    fn test_skips_arrays_and_nulls() {
        let columns = infer_columns(&json!({"tags": ["a"], "gone": null, "meta": {"k": 1}}));
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].name, "meta");
        assert_eq!(columns[0].logical_type, Some(LogicalColumnType::Json));
        assert_eq!(columns[0].state, MutationState::New);
    }

    #[test]
    fn test_non_object_yields_nothing() {
        assert!(infer_columns(&json!([1, 2, 3])).is_empty());
        assert!(infer_columns(&json!("text")).is_empty());
        assert!(infer_columns(&Value::Null).is_empty());
    }

    #[test]
    fn test_custom_options() {
        let options = InferenceOptions {
            short_text_max: 3,
            short_text_length: 10,
            ..InferenceOptions::default()
        };
        let columns = infer_columns_with(&json!({"a": "abc", "b": "abcd"}), &options);
        assert_eq!(columns[0].length, Some(10));
        assert_eq!(columns[1].physical_type, "text");
    }

    #[test]
    fn test_retarget_to_dialect() {
        let columns = infer_columns_for(&json!({"age": 30, "name": "Ada", "ok": true}), &OracleProfile);
        assert_eq!(columns[0].physical_type, "NUMBER");
        assert_eq!(columns[0].precision, Some(10));
        assert_eq!(columns[1].physical_type, "VARCHAR2");
        assert_eq!(columns[1].length, Some(45));
        assert_eq!(columns[2].physical_type, "NUMBER");
    }

    #[test]
    fn test_retarget_honors_options() {
        let options = InferenceOptions {
            short_text_length: 80,
            integer_precision: 12,
            ..InferenceOptions::default()
        };
        let columns =
            infer_columns_for_with(&json!({"age": 30, "name": "Ada"}), &OracleProfile, &options);
        assert_eq!(columns[0].physical_type, "NUMBER");
        assert_eq!(columns[0].precision, Some(12));
        assert_eq!(columns[1].physical_type, "VARCHAR2");
        assert_eq!(columns[1].length, Some(80));
    }
}
