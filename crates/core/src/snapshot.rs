//! Snapshot value types materialized from raw records.
//!
//! Snapshots are immutable copies of a record's display-relevant fields taken
//! at refresh time. They are created by the builder, stored by the category
//! caches, and superseded (never updated) by the next refresh of their
//! category.

use serde::Serialize;

use crate::host::{Rarity, RecordAddress, ScreenRect};

/// Fully-materialized copy of one item at refresh time.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ItemSnapshot {
    /// Identity path of the item.
    pub path: String,
    /// Human-readable name.
    pub display_name: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Address of the owning record at capture time.
    pub address: RecordAddress,
}

/// Provenance of an NPC-sourced item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
pub enum NpcItemKind {
    QuestReward,
    Shop,
    RitualReward,
}

/// An NPC-sourced item snapshot with provenance and, when the item is
/// currently drawn by a window, its client rectangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NpcItemSnapshot {
    pub item: ItemSnapshot,
    pub kind: NpcItemKind,
    /// `ScreenRect::EMPTY` for items sourced purely from a server-side list.
    pub screen_rect: ScreenRect,
}

/// One tab of a trade window at refresh time.
///
/// Tabs are index-ordered; an index carries no identity across refreshes
/// beyond its position.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TraderTabSnapshot {
    pub items: Vec<NpcItemSnapshot>,
}

impl std::fmt::Display for TraderTabSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.items.len())
    }
}
