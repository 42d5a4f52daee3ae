//! Scripted fixture world for the demonstration loop.
//!
//! Stages a small set of items and periodically reshapes the windows so the
//! per-category caches have something to react to.

use lootlens_core::host::{
    FixtureProvider, FixtureRecord, RewardCandidate, SlotId, TradeTabView, TradeWindowView,
    TradeWindows, VisibleItem,
};
use lootlens_core::{Rarity, ScreenRect};

/// Populate the provider with the initial world.
pub fn stage(provider: &FixtureProvider) {
    provider.set_slot_items(
        SlotId::Weapon,
        vec![
            FixtureRecord::live(0x1000, "Metadata/Items/Weapons/Reaver Axe", "Reaver Axe")
                .with_rarity(Rarity::Rare)
                .into_ref(),
        ],
    );
    provider.set_slot_items(
        SlotId::Helmet,
        vec![
            FixtureRecord::live(0x1010, "Metadata/Items/Armours/Iron Hat", "Iron Hat").into_ref(),
        ],
    );
    provider.set_slot_items(
        SlotId::MainInventory,
        vec![
            FixtureRecord::live(0x1020, "Metadata/Items/Currency/Chaos", "Chaos Orb").into_ref(),
            FixtureRecord::live(0x1021, "Metadata/Items/Currency/Alchemy", "Orb of Alchemy")
                .into_ref(),
            // a stale handle the filter should drop
            FixtureRecord::ghost(0x1022).into_ref(),
        ],
    );
    provider.set_reward_candidates(vec![RewardCandidate {
        record: Some(
            FixtureRecord::live(0x1030, "Metadata/Items/Gems/Fireball", "Fireball")
                .with_rarity(Rarity::Magic)
                .into_ref(),
        ),
        rect: Some(ScreenRect::new(420.0, 360.0, 48.0, 48.0)),
    }]);
}

/// Reshape the windows based on the tick counter.
pub fn advance(provider: &FixtureProvider, tick: u64) {
    // stash drifts open and closed
    if tick % 40 == 10 {
        provider.open_stash(vec![
            FixtureRecord::live(0x2000, "Metadata/Items/Maps/Strand", "Strand Map").into_ref(),
            FixtureRecord::live(0x2001, "Metadata/Items/Maps/Beach", "Beach Map").into_ref(),
        ]);
    } else if tick % 40 == 30 {
        provider.close_stash();
    }

    // a hideout trader shows up now and then
    if tick % 60 == 20 {
        provider.set_trade_windows(TradeWindows {
            hideout: TradeWindowView {
                is_visible: true,
                tabs: vec![TradeTabView {
                    server_items: Some(vec![
                        FixtureRecord::live(0x3000, "Metadata/Items/Belts/Leather", "Leather Belt")
                            .into_ref(),
                        FixtureRecord::live(0x3001, "Metadata/Items/Rings/Iron", "Iron Ring")
                            .into_ref(),
                    ]),
                    ui_items: vec![VisibleItem::new(
                        FixtureRecord::live(0x3000, "Metadata/Items/Belts/Leather", "Leather Belt")
                            .into_ref(),
                        ScreenRect::new(600.0, 240.0, 48.0, 48.0),
                    )],
                }],
            },
            world: TradeWindowView::default(),
        });
    } else if tick % 60 == 50 {
        provider.set_trade_windows(TradeWindows::default());
    }
}
