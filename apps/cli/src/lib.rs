//! # Shopcart Shell Library
//!
//! Interactive front end over `shopcart-core`.
//!
//! ## Module Organization
//! ```text
//! shopcart_cli/
//! ├── lib.rs            ◄── You are here (startup)
//! ├── main.rs           ◄── Binary entry point, exit code
//! ├── shell.rs          ◄── Menu loop
//! ├── commands/
//! │   ├── add_record.rs    ◄── Code → quantity → method, "END" lists
//! │   └── search_record.rs ◄── Keyword search, aggregated table
//! ├── console.rs        ◄── Prompt/print over BufRead + Write
//! ├── render.rs         ◄── Fixed-width tables, JSON report
//! ├── config.rs         ◄── SHOP_* environment overrides
//! └── error.rs          ◄── ShellError, retry messages
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod render;
pub mod shell;

use std::io;

use shopcart_core::{Catalog, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ConfigState;
use console::Console;
use error::ShellResult;
use shell::Shell;

/// Runs the shell on the process's stdin and stdout.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr, so prompts stay clean)
/// 2. Load configuration from the environment
/// 3. Load the standard catalog and open a session
/// 4. Run the menu until `3` or end of input
/// 5. Log the session summary
pub fn run() -> ShellResult<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(
        store_name = %config.store_name,
        delivery_markup_pct = config.pricing().delivery_markup.percentage(),
        output = ?config.output,
        "Configuration loaded"
    );

    let catalog = Catalog::standard()?;
    info!(products = catalog.len(), "Catalog loaded");

    let session = Session::new(catalog, config.pricing());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut shell = Shell::new(console, session, config);
    shell.run()?;

    let session = shell.session();
    info!(
        session_id = %session.id(),
        records = session.all_records().len(),
        total = %session.total(),
        "Session ended"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show rejected inputs and each recorded purchase
/// - `RUST_LOG=shopcart_cli=info` - Session and search events only
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
