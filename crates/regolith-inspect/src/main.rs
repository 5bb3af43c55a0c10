//! Regolith board inspector.
//!
//! Loads a saved game document, rebuilds the board and prints which spaces
//! each player may use for every placement type.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod document;
mod report;

use document::GameDocument;
use report::BoardReport;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Document path from the first argument, or from env
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("REGOLITH_DOCUMENT").ok())
        .context("usage: regolith-inspect <game.json> (or set REGOLITH_DOCUMENT)")?;
    let pretty = std::env::var("REGOLITH_PRETTY").is_ok_and(|v| v == "1");

    info!("Inspecting {}", path);

    let document = GameDocument::load(&path)?;
    let board = document.restore_board()?;
    let report = BoardReport::build(&board, &document.players, &document.options)?;

    let output = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);
    Ok(())
}
