//! Column mutation rules that span a whole table.
//!
//! A [`DialectProfile`] knows what a single physical type allows. The policy
//! applies that knowledge to columns being edited next to their siblings:
//! only one column may auto-increment, `unsigned` only survives on types that
//! have a signed variant, and lengths stay within what the dialect accepts.

use tracing::debug;

use crate::column::ColumnDefinition;
use crate::dialect::DialectProfile;
use crate::error::{DialectError, Result};

/// Applies a dialect's column rules to a table being edited.
#[derive(Debug, Clone, Copy)]
pub struct ColumnPolicy<'a> {
    profile: &'a dyn DialectProfile,
}

impl<'a> ColumnPolicy<'a> {
    /// Creates a policy for the given dialect profile.
    #[must_use]
    pub const fn new(profile: &'a dyn DialectProfile) -> Self {
        Self { profile }
    }

    /// Returns whether `column` may be switched to auto-increment.
    ///
    /// Siblings are matched by name, so `siblings` may include `column`.
    #[must_use]
    pub fn auto_increment_eligible(
        &self,
        column: &ColumnDefinition,
        siblings: &[ColumnDefinition],
    ) -> bool {
        self.profile.supports_auto_increment(&column.physical_type)
            && auto_increment_holder(column, siblings).is_none()
    }

    /// Turns auto-increment on or off.
    ///
    /// # Errors
    ///
    /// Enabling fails with [`DialectError::AutoIncrementUnsupported`] if the
    /// physical type cannot auto-increment, and with
    /// [`DialectError::AutoIncrementConflict`] if a sibling already does.
    pub fn set_auto_increment(
        &self,
        column: &mut ColumnDefinition,
        siblings: &[ColumnDefinition],
        enabled: bool,
        persisted: bool,
    ) -> Result<()> {
        if enabled {
            if !self.profile.supports_auto_increment(&column.physical_type) {
                return Err(DialectError::AutoIncrementUnsupported {
                    dialect: self.profile.name(),
                    physical_type: column.physical_type.clone(),
                });
            }
            if let Some(existing) = auto_increment_holder(column, siblings) {
                return Err(DialectError::AutoIncrementConflict {
                    column: column.name.clone(),
                    existing: existing.name.clone(),
                });
            }
        }
        if column.auto_increment != enabled {
            column.auto_increment = enabled;
            column.touch(persisted);
        }
        Ok(())
    }

    /// Sets or clears the unsigned flag.
    ///
    /// # Errors
    ///
    /// Enabling fails with [`DialectError::UnsignedUnsupported`] if the
    /// physical type has no unsigned variant.
    pub fn set_unsigned(
        &self,
        column: &mut ColumnDefinition,
        enabled: bool,
        persisted: bool,
    ) -> Result<()> {
        if enabled && !self.profile.is_unsigned_editable(&column.physical_type) {
            return Err(DialectError::UnsignedUnsupported {
                dialect: self.profile.name(),
                physical_type: column.physical_type.clone(),
            });
        }
        if column.unsigned != enabled {
            column.unsigned = enabled;
            column.touch(persisted);
        }
        Ok(())
    }

    /// Clears `unsigned` on new columns whose type has no unsigned variant.
    ///
    /// Run before generating DDL; a type change after creation may have left
    /// the flag behind. Returns how many columns were changed.
    pub fn reconcile_unsigned_flags(&self, columns: &mut [ColumnDefinition]) -> usize {
        let mut reset = 0;
        for column in columns.iter_mut() {
            if column.is_new()
                && column.unsigned
                && !self.profile.has_unsigned_variant(&column.physical_type)
            {
                debug!(
                    column = %column.name,
                    physical = %column.physical_type,
                    "Resetting unsigned flag"
                );
                column.unsigned = false;
                reset += 1;
            }
        }
        reset
    }

    /// Default length for a physical type, within the dialect's maximum.
    #[must_use]
    pub fn default_length(&self, physical: &str) -> Option<u32> {
        self.profile
            .default_length(physical)
            .map(|len| self.clamp_length(physical, len))
    }

    /// Default scale for a physical type, within the dialect's maximum.
    #[must_use]
    pub fn default_scale(&self, physical: &str) -> Option<u32> {
        self.profile
            .default_scale(physical)
            .map(|scale| self.clamp_scale(physical, scale))
    }

    /// Bounds a requested length by the dialect's maximum.
    #[must_use]
    pub fn clamp_length(&self, physical: &str, length: u32) -> u32 {
        self.profile
            .max_length(physical)
            .map_or(length, |max| length.min(max))
    }

    /// Bounds a requested scale by the dialect's maximum.
    #[must_use]
    pub fn clamp_scale(&self, physical: &str, scale: u32) -> u32 {
        self.profile
            .max_scale(physical)
            .map_or(scale, |max| scale.min(max))
    }

    /// Changes the physical type of a column.
    ///
    /// Length and scale are reset to the new type's defaults. Flags the new
    /// type cannot carry are cleared.
    pub fn change_physical_type(
        &self,
        column: &mut ColumnDefinition,
        physical: &str,
        persisted: bool,
    ) {
        if column.physical_type == physical {
            return;
        }
        let length = match column.logical_type {
            Some(logical) => self.profile.draft_length(logical, physical),
            None => self.profile.default_length(physical),
        };
        column.physical_type = physical.to_string();
        column.length = length.map(|len| self.clamp_length(physical, len));
        column.scale = self.default_scale(physical);

        if column.unsigned && !self.profile.has_unsigned_variant(physical) {
            column.unsigned = false;
        }
        if column.auto_increment && !self.profile.supports_auto_increment(physical) {
            debug!(
                column = %column.name,
                physical = %physical,
                "Clearing auto-increment on type change"
            );
            column.auto_increment = false;
        }
        column.touch(persisted);
    }
}

/// Returns the sibling other than `column` that already auto-increments.
fn auto_increment_holder<'s>(
    column: &ColumnDefinition,
    siblings: &'s [ColumnDefinition],
) -> Option<&'s ColumnDefinition> {
    siblings
        .iter()
        .find(|s| s.auto_increment && s.name != column.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::MutationState;
    use crate::dialect::{MssqlProfile, MySqlProfile, PostgresProfile};

    #[test]
    fn test_eligible_ignores_self() {
        let policy = ColumnPolicy::new(&MySqlProfile);
        let id = ColumnDefinition::new("id", "int").auto_increment();
        let title = ColumnDefinition::new("title", "varchar");
        let siblings = vec![id.clone(), title];
        assert!(policy.auto_increment_eligible(&id, &siblings));
    }

    #[test]
    fn test_only_one_auto_increment() {
        let policy = ColumnPolicy::new(&MySqlProfile);
        let siblings = vec![ColumnDefinition::new("id", "int").auto_increment()];
        let mut counter = ColumnDefinition::new("counter", "bigint");
        assert!(!policy.auto_increment_eligible(&counter, &siblings));

        let err = policy
            .set_auto_increment(&mut counter, &siblings, true, false)
            .unwrap_err();
        assert!(matches!(
            err,
            DialectError::AutoIncrementConflict { ref existing, .. } if existing == "id"
        ));
        assert!(!counter.auto_increment);
    }

    #[test]
    fn test_auto_increment_needs_integer() {
        let policy = ColumnPolicy::new(&PostgresProfile);
        let mut title = ColumnDefinition::new("title", "text");
        assert!(!policy.auto_increment_eligible(&title, &[]));
        assert!(matches!(
            policy.set_auto_increment(&mut title, &[], true, false),
            Err(DialectError::AutoIncrementUnsupported { dialect: "postgres", .. })
        ));
        // Turning it off is always allowed.
        assert!(policy.set_auto_increment(&mut title, &[], false, false).is_ok());
    }

    #[test]
    fn test_set_unsigned() {
        let mysql = ColumnPolicy::new(&MySqlProfile);
        let mut qty = ColumnDefinition::new("qty", "int").created();
        mysql.set_unsigned(&mut qty, true, false).unwrap();
        assert!(qty.unsigned);
        assert_eq!(qty.state, MutationState::New);

        let pg = ColumnPolicy::new(&PostgresProfile);
        let mut qty = ColumnDefinition::new("qty", "integer");
        assert!(matches!(
            pg.set_unsigned(&mut qty, true, true),
            Err(DialectError::UnsignedUnsupported { .. })
        ));
        assert_eq!(qty.state, MutationState::Unset);
    }

    #[test]
    fn test_reconcile_only_touches_new_columns() {
        let policy = ColumnPolicy::new(&MySqlProfile);
        let mut columns = vec![
            ColumnDefinition::new("a", "varchar").unsigned().created(),
            ColumnDefinition::new("b", "int").unsigned().created(),
            ColumnDefinition::new("c", "varchar").unsigned(),
        ];
        assert_eq!(policy.reconcile_unsigned_flags(&mut columns), 1);
        assert!(!columns[0].unsigned);
        assert!(columns[1].unsigned);
        assert!(columns[2].unsigned);
    }

    #[test]
    fn test_clamping() {
        let policy = ColumnPolicy::new(&MssqlProfile);
        assert_eq!(policy.clamp_length("nvarchar", 10_000), 4000);
        assert_eq!(policy.clamp_length("varchar", 100), 100);
        assert_eq!(policy.clamp_length("text", 10_000), 10_000);
        assert_eq!(policy.clamp_scale("decimal", 60), 38);
        assert_eq!(policy.default_length("varchar"), Some(255));
        assert_eq!(policy.default_scale("numeric"), Some(2));
        assert_eq!(policy.default_scale("int"), None);
    }

    #[test]
    fn test_change_physical_type() {
        let policy = ColumnPolicy::new(&MySqlProfile);
        let mut col = MySqlProfile
            .draft_column(
                "id",
                crate::types::LogicalColumnType::Id,
                crate::types::IdentityKind::AutoIncrement,
            )
            .unwrap();
        assert!(col.unsigned && col.auto_increment);

        policy.change_physical_type(&mut col, "varchar", false);
        assert_eq!(col.physical_type, "varchar");
        assert_eq!(col.length, Some(45));
        assert!(!col.unsigned);
        assert!(!col.auto_increment);
        assert_eq!(col.state, MutationState::New);

        policy.change_physical_type(&mut col, "decimal", true);
        assert_eq!(col.scale, Some(2));
        assert_eq!(col.state, MutationState::Modified);
    }
}
