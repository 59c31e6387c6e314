#![allow(dead_code)]

use oxide_dialect::prelude::*;
use proptest::prelude::*;

pub const IDENTITIES: [IdentityKind; 3] = [
    IdentityKind::None,
    IdentityKind::AutoIncrement,
    IdentityKind::ExternallyGenerated,
];

pub fn profiles() -> impl Iterator<Item = &'static dyn DialectProfile> {
    DialectKind::ALL.into_iter().map(DialectKind::profile)
}

pub fn draft(kind: DialectKind, logical: LogicalColumnType, identity: IdentityKind) -> ColumnDefinition {
    kind.profile()
        .draft_column("col", logical, identity)
        .unwrap_or_else(|e| panic!("Failed to draft {logical} for {kind}: {e}"))
}

pub fn dialect_kind() -> impl Strategy<Value = DialectKind> {
    prop::sample::select(DialectKind::ALL.to_vec())
}

pub fn logical_type() -> impl Strategy<Value = LogicalColumnType> {
    prop::sample::select(LogicalColumnType::ALL.to_vec())
}

/// Up to `max` columns as (logical type, wants auto-increment) pairs.
pub fn table(max: usize) -> impl Strategy<Value = Vec<(LogicalColumnType, bool)>> {
    prop::collection::vec((logical_type(), any::<bool>()), 1..max)
}
