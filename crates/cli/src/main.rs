//! Demonstration client: drives the snapshot core against the fixture
//! provider from a single-threaded coordination loop.
mod config;
mod input;
mod scenario;

use std::rc::Rc;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;
use lootlens_core::SnapshotEngine;
use lootlens_core::host::{FixtureProvider, GameDataProvider};

use config::CliConfig;
use input::KeyAction;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    tracing::info!(?config, "starting");
    tracing::info!("keys: space/F8 toggle collection, d dump container, q quit");

    let provider = Rc::new(FixtureProvider::new());
    scenario::stage(&provider);

    let shared: Rc<dyn GameDataProvider> = provider.clone();
    let mut engine = SnapshotEngine::new(shared, config.snapshot_ttl);
    engine.set_enabled(config.start_enabled);

    terminal::enable_raw_mode()?;
    let outcome = run(&mut engine, &provider, &config);
    terminal::disable_raw_mode()?;
    outcome
}

fn run(engine: &mut SnapshotEngine, provider: &FixtureProvider, config: &CliConfig) -> Result<()> {
    let mut tick: u64 = 0;
    loop {
        if event::poll(config.tick)? {
            if let Event::Key(key) = event::read()? {
                match input::handle_key(key) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Toggle => {
                        engine.toggle();
                    }
                    KeyAction::Dump => dump(engine)?,
                    KeyAction::None => {}
                }
            }
        }

        tick += 1;
        scenario::advance(provider, tick);

        let container = engine.container();
        if tick % 4 == 0 {
            tracing::info!(
                tick,
                items = container.item_count(),
                stash = container.stash_items.len(),
                trader_tabs = container.trader_tabs.len(),
                "refresh"
            );
        }
    }
}

fn dump(engine: &mut SnapshotEngine) -> Result<()> {
    let container = engine.container();
    let json = serde_json::to_string_pretty(&container)?;
    // leave raw mode so the multi-line dump keeps its line starts
    terminal::disable_raw_mode()?;
    println!("{json}");
    terminal::enable_raw_mode()?;
    Ok(())
}
