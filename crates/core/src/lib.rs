//! Snapshot caching and aggregation core.
//!
//! Periodically samples volatile host data sources (equipment and inventory
//! slots, the stash view, reward and trade windows), filters out stale or
//! invalid records, and materializes normalized snapshots behind per-category
//! TTL caches. Presentation reads an [`ItemContainer`] assembled on demand
//! from the latest value of every category. The host is reached only through
//! the narrow [`host::GameDataProvider`] seam, which ships with a
//! deterministic [`host::FixtureProvider`] double.
pub mod builder;
pub mod cache;
pub mod engine;
pub mod error;
pub mod filter;
pub mod host;
pub mod query;
pub mod snapshot;

pub use cache::{Producer, TimedCache, remember_last_value};
pub use engine::{DEFAULT_SNAPSHOT_TTL, ItemContainer, SnapshotEngine};
pub use error::{QueryError, QueryResult};
pub use filter::is_live_record;
pub use host::{
    ComponentRef, FixtureProvider, FixtureRecord, GameDataProvider, ItemRecord, Rarity,
    RecordAddress, RecordRef, ScreenRect, SlotId,
};
pub use snapshot::{ItemSnapshot, NpcItemKind, NpcItemSnapshot, TraderTabSnapshot};
