//! The provider seam between the core and the live-data host.
//!
//! [`GameDataProvider`] is the only way the core reaches host state. A real
//! implementation adapts the host SDK; [`FixtureProvider`](super::fixture)
//! serves deterministic fixtures for tests and the demo client. Lookups are
//! in-memory on the host side and expected to complete in microseconds —
//! nothing here blocks on I/O.
//!
//! Absent windows are not errors: a closed stash is `is_open: false`, an
//! invisible trade window is `is_visible: false`. A `QueryError` means the
//! read itself failed and the caller should keep whatever it had.

use crate::error::QueryResult;

use super::record::{RecordRef, ScreenRect};

/// Named equipment and inventory slots the core may enumerate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum SlotId {
    Weapon,
    Offhand,
    WeaponSwap,
    OffhandSwap,
    BodyArmour,
    Helmet,
    Gloves,
    Boots,
    Amulet,
    RingLeft,
    RingRight,
    MainInventory,
    Cursor,
}

/// Slots carried on the player's body.
pub const EQUIPPED_SLOTS: [SlotId; 11] = [
    SlotId::Weapon,
    SlotId::Offhand,
    SlotId::WeaponSwap,
    SlotId::OffhandSwap,
    SlotId::BodyArmour,
    SlotId::Helmet,
    SlotId::Gloves,
    SlotId::Boots,
    SlotId::Amulet,
    SlotId::RingLeft,
    SlotId::RingRight,
];

/// The main backpack grid.
pub const INVENTORY_SLOTS: [SlotId; 1] = [SlotId::MainInventory];

/// The item held on the cursor, if any.
pub const CURSOR_SLOTS: [SlotId; 1] = [SlotId::Cursor];

/// The currently active stash view, if a stash is open at all.
#[derive(Clone, Default)]
pub struct StashView {
    pub is_open: bool,
    pub items: Vec<RecordRef>,
}

/// One candidate from the quest reward window.
///
/// The host can surface a reward slot whose record has already been torn
/// down, hence the `Option`. The rect is present only when the candidate is
/// backed by an on-screen element.
#[derive(Clone, Default)]
pub struct RewardCandidate {
    pub record: Option<RecordRef>,
    pub rect: Option<ScreenRect>,
}

/// An item currently drawn by a window, with its client rectangle.
#[derive(Clone)]
pub struct VisibleItem {
    pub record: RecordRef,
    pub rect: ScreenRect,
}

impl VisibleItem {
    pub fn new(record: RecordRef, rect: ScreenRect) -> Self {
        Self { record, rect }
    }
}

/// One tab of a trade window.
///
/// `server_items` is the authoritative server-side list; the host sometimes
/// fails to resolve it for a tab, in which case only `ui_items` are
/// available. The two lists can overlap by address.
#[derive(Clone, Default)]
pub struct TradeTabView {
    pub server_items: Option<Vec<RecordRef>>,
    pub ui_items: Vec<VisibleItem>,
}

/// One of the two possible trade window instances.
#[derive(Clone, Default)]
pub struct TradeWindowView {
    pub is_visible: bool,
    pub tabs: Vec<TradeTabView>,
}

/// Both trade window instances, queried together.
#[derive(Clone, Default)]
pub struct TradeWindows {
    pub hideout: TradeWindowView,
    pub world: TradeWindowView,
}

/// Read-only capability set the snapshot core consumes from the host.
pub trait GameDataProvider {
    /// Enumerate the raw records currently held by the given slots.
    fn records_for_slots(&self, slots: &[SlotId]) -> QueryResult<Vec<RecordRef>>;

    /// The active stash view. `is_open: false` when no stash is the current
    /// view.
    fn active_stash_view(&self) -> QueryResult<StashView>;

    /// Candidates offered by the quest reward window.
    fn quest_reward_candidates(&self) -> QueryResult<Vec<RewardCandidate>>;

    /// Whether the ritual window currently reports itself visible.
    fn ritual_window_visible(&self) -> QueryResult<bool>;

    /// Items the ritual window is currently drawing.
    fn ritual_items(&self) -> QueryResult<Vec<VisibleItem>>;

    /// Both trade window instances with their tabs.
    fn trade_windows(&self) -> QueryResult<TradeWindows>;
}
