//! Per-category query functions: pull raw records, filter, build snapshots.
//!
//! Each function is one category's producer body. Failures propagate as
//! `QueryError` and are absorbed by the cache layer; an absent window is an
//! empty result, not a failure.

use crate::builder::{item_snapshot, npc_item_snapshot};
use crate::error::QueryResult;
use crate::filter::is_live_record;
use crate::host::{GameDataProvider, ItemRecord, SlotId};
use crate::snapshot::{ItemSnapshot, NpcItemKind, NpcItemSnapshot, TraderTabSnapshot};

/// Snapshots of every item held by the given slots.
pub fn slot_snapshots(
    provider: &dyn GameDataProvider,
    slots: &[SlotId],
) -> QueryResult<Vec<ItemSnapshot>> {
    let records = provider.records_for_slots(slots)?;
    Ok(records
        .iter()
        .filter(|record| is_live_record(record.as_ref()))
        .map(|record| item_snapshot(record.as_ref()))
        .collect())
}

/// Snapshots of the visible stash contents; empty when no stash is the
/// active view.
pub fn stash_snapshots(provider: &dyn GameDataProvider) -> QueryResult<Vec<ItemSnapshot>> {
    let view = provider.active_stash_view()?;
    if !view.is_open {
        return Ok(Vec::new());
    }
    Ok(view
        .items
        .iter()
        .filter(|record| is_live_record(record.as_ref()))
        .map(|record| item_snapshot(record.as_ref()))
        .collect())
}

/// Snapshots of the quest reward window's candidates, tagged `QuestReward`.
///
/// Candidates without a record are dropped before filtering.
pub fn quest_reward_snapshots(
    provider: &dyn GameDataProvider,
) -> QueryResult<Vec<NpcItemSnapshot>> {
    let candidates = provider.quest_reward_candidates()?;
    Ok(candidates
        .into_iter()
        .filter_map(|candidate| {
            let record = candidate.record?;
            if !is_live_record(record.as_ref()) {
                return None;
            }
            Some(npc_item_snapshot(
                record.as_ref(),
                NpcItemKind::QuestReward,
                candidate.rect,
            ))
        })
        .collect())
}

/// Snapshots of the ritual window's items, tagged `RitualReward`; empty
/// unless the window reports itself visible.
pub fn ritual_snapshots(provider: &dyn GameDataProvider) -> QueryResult<Vec<NpcItemSnapshot>> {
    if !provider.ritual_window_visible()? {
        return Ok(Vec::new());
    }
    let items = provider.ritual_items()?;
    Ok(items
        .iter()
        .filter(|visible| is_live_record(visible.record.as_ref()))
        .map(|visible| {
            npc_item_snapshot(
                visible.record.as_ref(),
                NpcItemKind::RitualReward,
                Some(visible.rect),
            )
        })
        .collect())
}

/// Tab snapshots of whichever trade window is currently visible, preferring
/// the hideout instance when both are; empty when neither is.
///
/// Per tab, the server-side authoritative list and the UI-visible list are
/// filtered independently and appended in that order, all tagged `Shop`.
/// Overlapping addresses are kept from both sources, not deduplicated. A tab
/// with no server list is logged and still yields its passing UI items.
///
/// `_previous` is the last successful snapshot, threaded through
/// [`remember_last_value`](crate::cache::remember_last_value) so this
/// producer *can* reconcile against prior state; current policy rebuilds
/// purely from the visible window and ignores it.
pub fn trader_tab_snapshots(
    provider: &dyn GameDataProvider,
    _previous: Vec<TraderTabSnapshot>,
) -> QueryResult<Vec<TraderTabSnapshot>> {
    let windows = provider.trade_windows()?;
    let window = if windows.hideout.is_visible {
        windows.hideout
    } else if windows.world.is_visible {
        windows.world
    } else {
        return Ok(Vec::new());
    };

    Ok(window
        .tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            if tab.server_items.is_none() {
                tracing::warn!(tab = index, "server item list missing, using ui items only");
            }

            let mut items = Vec::new();
            if let Some(server) = &tab.server_items {
                items.extend(
                    server
                        .iter()
                        .filter(|record| is_tradeable(record.as_ref()))
                        .map(|record| npc_item_snapshot(record.as_ref(), NpcItemKind::Shop, None)),
                );
            }
            items.extend(
                tab.ui_items
                    .iter()
                    .filter(|visible| is_tradeable(visible.record.as_ref()))
                    .map(|visible| {
                        npc_item_snapshot(
                            visible.record.as_ref(),
                            NpcItemKind::Shop,
                            Some(visible.rect),
                        )
                    }),
            );

            TraderTabSnapshot { items }
        })
        .collect())
}

/// Trade items must expose a path on top of the usual validity conditions.
fn is_tradeable(record: &dyn ItemRecord) -> bool {
    record.path().is_some() && is_live_record(record)
}
