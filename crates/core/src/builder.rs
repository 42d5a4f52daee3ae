//! Mapping of validated records into snapshots.
//!
//! Builders assume the record already passed the validity filter, but still
//! tolerate missing optional fields: an unreadable path or name becomes an
//! empty string, an unreadable rarity becomes `Normal`, a missing rectangle
//! becomes `ScreenRect::EMPTY`. Builders never fail.

use crate::host::{ItemRecord, ScreenRect};
use crate::snapshot::{ItemSnapshot, NpcItemKind, NpcItemSnapshot};

/// Materialize the display-relevant fields of a record.
pub fn item_snapshot(record: &dyn ItemRecord) -> ItemSnapshot {
    ItemSnapshot {
        path: record.path().unwrap_or_default(),
        display_name: record.display_name().unwrap_or_default(),
        rarity: record.rarity().unwrap_or_default(),
        address: record.address(),
    }
}

/// Materialize an NPC-sourced record with its provenance tag and, when the
/// item is backed by an on-screen element, its client rectangle.
pub fn npc_item_snapshot(
    record: &dyn ItemRecord,
    kind: NpcItemKind,
    rect: Option<ScreenRect>,
) -> NpcItemSnapshot {
    NpcItemSnapshot {
        item: item_snapshot(record),
        kind,
        screen_rect: rect.unwrap_or(ScreenRect::EMPTY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ComponentRef, Rarity, RecordAddress};

    use crate::host::FixtureRecord;

    /// A record that passes the filter but exposes none of its optional
    /// descriptive fields.
    fn minimal_record() -> FixtureRecord {
        FixtureRecord {
            valid: true,
            address: RecordAddress(0x40),
            base: Some(ComponentRef::new(RecordAddress(0x41))),
            mods: Some(ComponentRef::new(RecordAddress(0x42))),
            path: None,
            display_name: None,
            rarity: None,
        }
    }

    #[test]
    fn missing_optional_fields_map_to_defaults() {
        let snapshot = item_snapshot(&minimal_record());
        assert_eq!(snapshot.path, "");
        assert_eq!(snapshot.display_name, "");
        assert_eq!(snapshot.rarity, Rarity::Normal);
        assert_eq!(snapshot.address, RecordAddress(0x40));
    }

    #[test]
    fn npc_snapshot_without_rect_is_empty_rect() {
        let snapshot = npc_item_snapshot(&minimal_record(), NpcItemKind::Shop, None);
        assert_eq!(snapshot.kind, NpcItemKind::Shop);
        assert!(snapshot.screen_rect.is_empty());
    }

    #[test]
    fn npc_snapshot_keeps_provided_rect() {
        let rect = ScreenRect::new(4.0, 8.0, 32.0, 64.0);
        let snapshot =
            npc_item_snapshot(&minimal_record(), NpcItemKind::RitualReward, Some(rect));
        assert_eq!(snapshot.screen_rect, rect);
        assert!(!snapshot.screen_rect.is_empty());
    }
}
