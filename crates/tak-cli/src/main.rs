//! Terminal front end for the stack game.

use std::io;
use tak_core::{GameEngine, GameState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod parser;
mod prompt;
mod render;
mod settings;

use prompt::{Prompt, Table};
use settings::Settings;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so they stay out of the board
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = Settings::from_env()?;
    info!(config = ?settings.config, bot = ?settings.bot.as_ref().map(|b| b.color), "starting game");

    let state = GameState::new(settings.config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompt = Prompt::new(stdin.lock(), stdout.lock(), settings.colorize);
    let mut table = Table::new(prompt, settings.bot);

    let mut engine = GameEngine::new(state);
    let outcome = engine.run(&mut table);
    info!(?outcome, turns = engine.state().turn.turn_index, "game ended");

    Ok(())
}
