//! Deterministic in-memory provider for tests and the demo client.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{QueryError, QueryResult};

use super::provider::{
    GameDataProvider, RewardCandidate, SlotId, StashView, TradeWindows, VisibleItem,
};
use super::record::{ComponentRef, ItemRecord, Rarity, RecordAddress, RecordRef};

/// Plain-data record used to stage fixtures.
///
/// Fields mirror the [`ItemRecord`] capability set one-for-one so tests can
/// break any single validity condition in isolation.
#[derive(Clone, Debug, Default)]
pub struct FixtureRecord {
    pub valid: bool,
    pub address: RecordAddress,
    pub base: Option<ComponentRef>,
    pub mods: Option<ComponentRef>,
    pub path: Option<String>,
    pub display_name: Option<String>,
    pub rarity: Option<Rarity>,
}

impl FixtureRecord {
    /// A fully live record that passes every validity condition.
    pub fn live(address: u64, path: &str, display_name: &str) -> Self {
        Self {
            valid: true,
            address: RecordAddress(address),
            base: Some(ComponentRef::new(RecordAddress(address + 1))),
            mods: Some(ComponentRef::new(RecordAddress(address + 2))),
            path: Some(path.to_string()),
            display_name: Some(display_name.to_string()),
            rarity: Some(Rarity::Normal),
        }
    }

    /// A stale handle of the kind the host leaks during scene transitions.
    pub fn ghost(address: u64) -> Self {
        Self {
            valid: false,
            address: RecordAddress(address),
            ..Self::default()
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    /// Wrap into the shared handle form providers hand out.
    pub fn into_ref(self) -> RecordRef {
        Rc::new(self)
    }
}

impl ItemRecord for FixtureRecord {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn address(&self) -> RecordAddress {
        self.address
    }

    fn base(&self) -> Option<ComponentRef> {
        self.base
    }

    fn mods(&self) -> Option<ComponentRef> {
        self.mods
    }

    fn path(&self) -> Option<String> {
        self.path.clone()
    }

    fn display_name(&self) -> Option<String> {
        self.display_name.clone()
    }

    fn rarity(&self) -> Option<Rarity> {
        self.rarity
    }
}

/// In-memory [`GameDataProvider`] serving staged fixtures.
///
/// State is mutable through `&self` so a test or demo loop can reshape the
/// world while the engine holds its own `Rc` to the provider. Interior
/// mutability is `RefCell`/`Cell`, matching the single-threaded contract of
/// the core. Every trait call is tallied, and `set_failing(true)` makes all
/// subsequent queries return `QueryError::HostRead`.
#[derive(Default)]
pub struct FixtureProvider {
    slots: RefCell<HashMap<SlotId, Vec<RecordRef>>>,
    stash: RefCell<StashView>,
    rewards: RefCell<Vec<RewardCandidate>>,
    ritual_visible: Cell<bool>,
    ritual: RefCell<Vec<VisibleItem>>,
    trade: RefCell<TradeWindows>,
    failing: Cell<bool>,
    queries: Cell<u64>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_slot_items(&self, slot: SlotId, records: Vec<RecordRef>) {
        self.slots.borrow_mut().insert(slot, records);
    }

    pub fn open_stash(&self, items: Vec<RecordRef>) {
        *self.stash.borrow_mut() = StashView {
            is_open: true,
            items,
        };
    }

    pub fn close_stash(&self) {
        *self.stash.borrow_mut() = StashView::default();
    }

    pub fn set_reward_candidates(&self, candidates: Vec<RewardCandidate>) {
        *self.rewards.borrow_mut() = candidates;
    }

    pub fn set_ritual(&self, visible: bool, items: Vec<VisibleItem>) {
        self.ritual_visible.set(visible);
        *self.ritual.borrow_mut() = items;
    }

    pub fn set_trade_windows(&self, windows: TradeWindows) {
        *self.trade.borrow_mut() = windows;
    }

    /// Make every subsequent query fail until turned off again.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Number of provider queries served (or failed) so far.
    pub fn query_count(&self) -> u64 {
        self.queries.get()
    }

    fn tally(&self) -> QueryResult<()> {
        self.queries.set(self.queries.get() + 1);
        if self.failing.get() {
            return Err(QueryError::HostRead("injected fixture failure".into()));
        }
        Ok(())
    }
}

impl GameDataProvider for FixtureProvider {
    fn records_for_slots(&self, slots: &[SlotId]) -> QueryResult<Vec<RecordRef>> {
        self.tally()?;
        let staged = self.slots.borrow();
        Ok(slots
            .iter()
            .flat_map(|slot| staged.get(slot).cloned().unwrap_or_default())
            .collect())
    }

    fn active_stash_view(&self) -> QueryResult<StashView> {
        self.tally()?;
        Ok(self.stash.borrow().clone())
    }

    fn quest_reward_candidates(&self) -> QueryResult<Vec<RewardCandidate>> {
        self.tally()?;
        Ok(self.rewards.borrow().clone())
    }

    fn ritual_window_visible(&self) -> QueryResult<bool> {
        self.tally()?;
        Ok(self.ritual_visible.get())
    }

    fn ritual_items(&self) -> QueryResult<Vec<VisibleItem>> {
        self.tally()?;
        Ok(self.ritual.borrow().clone())
    }

    fn trade_windows(&self) -> QueryResult<TradeWindows> {
        self.tally()?;
        Ok(self.trade.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_slots_round_trip() {
        let provider = FixtureProvider::new();
        provider.set_slot_items(
            SlotId::Weapon,
            vec![FixtureRecord::live(0x10, "Metadata/Weapon", "Axe").into_ref()],
        );

        let records = provider
            .records_for_slots(&[SlotId::Weapon, SlotId::Offhand])
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address(), RecordAddress(0x10));
        assert_eq!(provider.query_count(), 1);
    }

    #[test]
    fn failure_injection_covers_every_query() {
        let provider = FixtureProvider::new();
        provider.set_failing(true);

        assert!(provider.records_for_slots(&[SlotId::Cursor]).is_err());
        assert!(provider.active_stash_view().is_err());
        assert!(provider.quest_reward_candidates().is_err());
        assert!(provider.ritual_window_visible().is_err());
        assert!(provider.ritual_items().is_err());
        assert!(provider.trade_windows().is_err());
        assert_eq!(provider.query_count(), 6);
    }
}
