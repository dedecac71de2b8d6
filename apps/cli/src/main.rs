//! # Takeout - Console Ordering Simulator
//!
//! Entry point for the interactive terminal session.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, `RUST_LOG`-filterable)
//! 2. Build the hardcoded menu catalog
//! 3. Run the ordering session over locked stdin/stdout
//! 4. Print the itemized receipt
//!
//! No flags, no config files, no persisted state. Exit code 0 on normal
//! completion; a closed stdin mid-session propagates as an `io::Error`.

mod prompt;
mod session;

use std::io;

use takeout_core::catalog::default_menu;
use takeout_core::receipt::receipt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::prompt::Console;
use crate::session::place_order;

fn main() -> io::Result<()> {
    // Log to stderr so stdout carries only the menu, prompts, and receipt.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let catalog = default_menu();
    info!(items = catalog.item_count(), "menu catalog loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let (order, total) = place_order(&catalog, &mut console)?;

    console.say("This is what we are preparing for you.")?;
    console.say("")?;
    console.print(&receipt(&order))?;

    info!(lines = order.line_count(), total = %total, "session finished");
    Ok(())
}
