//! The seven category aggregators and their on-demand container.
//!
//! [`SnapshotEngine`] owns one [`TimedCache`] per item category, each wired
//! to its query function over a shared provider handle. Every engine instance
//! owns its caches outright, so independent instances never interfere. The
//! engine is driven from one coordination loop: something ticks it (or asks
//! for the container directly) and presentation reads whatever the last
//! refresh produced.

use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;

use crate::cache::{TimedCache, remember_last_value};
use crate::host::{CURSOR_SLOTS, EQUIPPED_SLOTS, GameDataProvider, INVENTORY_SLOTS};
use crate::query;
use crate::snapshot::{ItemSnapshot, NpcItemSnapshot, TraderTabSnapshot};

/// Minimum interval between recomputes of any one category.
pub const DEFAULT_SNAPSHOT_TTL: Duration = Duration::from_secs(1);

/// Read-only aggregate of the latest value of every category.
///
/// Assembled fresh on each request and never cached itself; borrows the
/// category values for the duration of one presentation pass.
#[derive(Debug, Serialize)]
pub struct ItemContainer<'a> {
    pub hovered_item: Option<&'a ItemSnapshot>,
    pub player_items: &'a [ItemSnapshot],
    pub inventory_items: &'a [ItemSnapshot],
    pub cursor_items: &'a [ItemSnapshot],
    pub stash_items: &'a [ItemSnapshot],
    pub reward_items: &'a [NpcItemSnapshot],
    pub ritual_items: &'a [NpcItemSnapshot],
    pub trader_tabs: &'a [TraderTabSnapshot],
}

impl ItemContainer<'_> {
    fn empty() -> Self {
        ItemContainer {
            hovered_item: None,
            player_items: &[],
            inventory_items: &[],
            cursor_items: &[],
            stash_items: &[],
            reward_items: &[],
            ritual_items: &[],
            trader_tabs: &[],
        }
    }

    /// Total number of snapshots across all categories.
    pub fn item_count(&self) -> usize {
        self.player_items.len()
            + self.inventory_items.len()
            + self.cursor_items.len()
            + self.stash_items.len()
            + self.reward_items.len()
            + self.ritual_items.len()
            + self
                .trader_tabs
                .iter()
                .map(|tab| tab.items.len())
                .sum::<usize>()
    }
}

/// Aggregates all item categories behind per-category TTL caches.
pub struct SnapshotEngine {
    enabled: bool,
    hovered: Option<ItemSnapshot>,
    player_items: TimedCache<Vec<ItemSnapshot>>,
    inventory_items: TimedCache<Vec<ItemSnapshot>>,
    cursor_items: TimedCache<Vec<ItemSnapshot>>,
    stash_items: TimedCache<Vec<ItemSnapshot>>,
    reward_items: TimedCache<Vec<NpcItemSnapshot>>,
    ritual_items: TimedCache<Vec<NpcItemSnapshot>>,
    trader_tabs: TimedCache<Vec<TraderTabSnapshot>>,
}

impl SnapshotEngine {
    /// Wire every category to `provider` with the given TTL.
    ///
    /// The engine starts disabled; nothing queries the provider until
    /// [`set_enabled`](Self::set_enabled) or [`toggle`](Self::toggle).
    pub fn new(provider: Rc<dyn GameDataProvider>, ttl: Duration) -> Self {
        let player = Rc::clone(&provider);
        let inventory = Rc::clone(&provider);
        let cursor = Rc::clone(&provider);
        let stash = Rc::clone(&provider);
        let rewards = Rc::clone(&provider);
        let ritual = Rc::clone(&provider);
        let trader = provider;

        Self {
            enabled: false,
            hovered: None,
            player_items: TimedCache::new(
                "player_items",
                ttl,
                Box::new(move || query::slot_snapshots(player.as_ref(), &EQUIPPED_SLOTS)),
            ),
            inventory_items: TimedCache::new(
                "inventory_items",
                ttl,
                Box::new(move || query::slot_snapshots(inventory.as_ref(), &INVENTORY_SLOTS)),
            ),
            cursor_items: TimedCache::new(
                "cursor_items",
                ttl,
                Box::new(move || query::slot_snapshots(cursor.as_ref(), &CURSOR_SLOTS)),
            ),
            stash_items: TimedCache::new(
                "stash_items",
                ttl,
                Box::new(move || query::stash_snapshots(stash.as_ref())),
            ),
            reward_items: TimedCache::new(
                "reward_items",
                ttl,
                Box::new(move || query::quest_reward_snapshots(rewards.as_ref())),
            ),
            ritual_items: TimedCache::new(
                "ritual_items",
                ttl,
                Box::new(move || query::ritual_snapshots(ritual.as_ref())),
            ),
            trader_tabs: TimedCache::new(
                "trader_tabs",
                ttl,
                remember_last_value(move |previous| {
                    query::trader_tab_snapshots(trader.as_ref(), previous)
                }),
            ),
        }
    }

    pub fn with_default_ttl(provider: Rc<dyn GameDataProvider>) -> Self {
        Self::new(provider, DEFAULT_SNAPSHOT_TTL)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip the enabled flag, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        tracing::info!(enabled = self.enabled, "snapshot collection toggled");
        self.enabled
    }

    /// Record the snapshot the host currently reports as hovered.
    pub fn set_hovered(&mut self, item: Option<ItemSnapshot>) {
        self.hovered = item;
    }

    /// Assemble the container, lazily refreshing each category first.
    ///
    /// When the engine is disabled every category short-circuits to empty
    /// without touching the provider.
    pub fn container(&mut self) -> ItemContainer<'_> {
        if !self.enabled {
            return ItemContainer::empty();
        }

        ItemContainer {
            hovered_item: self.hovered.as_ref(),
            player_items: self.player_items.value(),
            inventory_items: self.inventory_items.value(),
            cursor_items: self.cursor_items.value(),
            stash_items: self.stash_items.value(),
            reward_items: self.reward_items.value(),
            ritual_items: self.ritual_items.value(),
            trader_tabs: self.trader_tabs.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{FixtureProvider, FixtureRecord, SlotId};

    fn engine_over(provider: &Rc<FixtureProvider>, ttl: Duration) -> SnapshotEngine {
        let shared: Rc<dyn GameDataProvider> = provider.clone();
        SnapshotEngine::new(shared, ttl)
    }

    #[test]
    fn disabled_engine_never_queries() {
        let provider = Rc::new(FixtureProvider::new());
        let mut engine = engine_over(&provider, DEFAULT_SNAPSHOT_TTL);

        let container = engine.container();
        assert_eq!(container.item_count(), 0);
        assert_eq!(provider.query_count(), 0);
    }

    #[test]
    fn repeated_reads_within_ttl_query_once_per_category() {
        let provider = Rc::new(FixtureProvider::new());
        provider.set_slot_items(
            SlotId::MainInventory,
            vec![FixtureRecord::live(0x10, "Metadata/Items/Wisdom", "Scroll").into_ref()],
        );
        let mut engine = engine_over(&provider, Duration::from_secs(60));
        engine.set_enabled(true);

        assert_eq!(engine.container().inventory_items.len(), 1);
        let after_first = provider.query_count();
        engine.container();
        assert_eq!(provider.query_count(), after_first);
    }

    #[test]
    fn failing_provider_retains_previous_categories() {
        let provider = Rc::new(FixtureProvider::new());
        provider.set_slot_items(
            SlotId::Weapon,
            vec![FixtureRecord::live(0x20, "Metadata/Items/Sceptre", "Sceptre").into_ref()],
        );
        // zero TTL so every read recomputes
        let mut engine = engine_over(&provider, Duration::ZERO);
        engine.set_enabled(true);

        assert_eq!(engine.container().player_items.len(), 1);

        provider.set_failing(true);
        let container = engine.container();
        assert_eq!(container.player_items.len(), 1);
        assert_eq!(container.player_items[0].display_name, "Sceptre");
    }

    #[test]
    fn hovered_item_rides_along() {
        let provider = Rc::new(FixtureProvider::new());
        let mut engine = engine_over(&provider, DEFAULT_SNAPSHOT_TTL);
        engine.set_enabled(true);
        engine.set_hovered(Some(ItemSnapshot {
            display_name: "Hovered".into(),
            ..ItemSnapshot::default()
        }));

        let container = engine.container();
        assert_eq!(container.hovered_item.unwrap().display_name, "Hovered");
    }
}
