//! The seam between the snapshot core and the live-data host.
//!
//! Everything the core knows about the host lives behind two narrow traits:
//! [`ItemRecord`] (per-record capabilities) and [`GameDataProvider`]
//! (per-window queries). A real adapter over the host SDK implements both on
//! its side of the seam; [`FixtureProvider`] is the shipped deterministic
//! double used by tests and the demo client.

mod fixture;
mod provider;
mod record;

pub use fixture::{FixtureProvider, FixtureRecord};
pub use provider::{
    CURSOR_SLOTS, EQUIPPED_SLOTS, GameDataProvider, INVENTORY_SLOTS, RewardCandidate, SlotId,
    StashView, TradeTabView, TradeWindowView, TradeWindows, VisibleItem,
};
pub use record::{ComponentRef, ItemRecord, Rarity, RecordAddress, RecordRef, ScreenRect};
