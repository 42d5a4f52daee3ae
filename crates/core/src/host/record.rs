//! Record-level capabilities exposed by the host.
//!
//! A record is a possibly-stale reference to a live entity owned by the host.
//! The core never dereferences host memory itself; everything it may read is
//! behind [`ItemRecord`]. Records can go stale at any moment (the host hands
//! out transient ghost handles during scene transitions), so every lookup
//! returns `Option` and the validity filter decides what is safe to read.

use std::rc::Rc;

use serde::Serialize;

/// Non-owning handle to a host entity. Zero means the entity is not live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RecordAddress(pub u64);

impl RecordAddress {
    pub const NULL: Self = Self(0);

    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for RecordAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Reference to one of a record's descriptive components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComponentRef {
    pub address: RecordAddress,
}

impl ComponentRef {
    pub const fn new(address: RecordAddress) -> Self {
        Self { address }
    }
}

/// Display rarity tier of an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, strum::Display)]
pub enum Rarity {
    #[default]
    Normal,
    Magic,
    Rare,
    Unique,
}

/// Screen-space rectangle of a UI element, in client coordinates.
///
/// `EMPTY` marks items sourced purely from a server-side list, with no
/// on-screen element to point at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub const EMPTY: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Capability set of a raw host record.
///
/// Implemented by the real host adapter and by [`FixtureRecord`] for tests.
/// A record is *live* only when [`is_valid`](Self::is_valid) holds, its own
/// address is nonzero, and both required components resolve with nonzero
/// addresses — see [`crate::filter::is_live_record`].
pub trait ItemRecord {
    /// Host-reported live-entity flag.
    fn is_valid(&self) -> bool;

    /// Address of the underlying entity.
    fn address(&self) -> RecordAddress;

    /// The base descriptive component, if it resolves.
    fn base(&self) -> Option<ComponentRef>;

    /// The mods descriptive component, if it resolves.
    fn mods(&self) -> Option<ComponentRef>;

    /// Identity path of the item, when readable.
    fn path(&self) -> Option<String>;

    /// Human-readable name, when readable.
    fn display_name(&self) -> Option<String>;

    /// Rarity tier, when readable.
    fn rarity(&self) -> Option<Rarity>;
}

/// Shared handle to a raw record as handed out by a provider.
///
/// `Rc`, not `Arc`: the whole pipeline is single-threaded by contract.
pub type RecordRef = Rc<dyn ItemRecord>;
