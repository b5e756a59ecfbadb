use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tokio::sync::mpsc;

// Declare modules
mod app;
mod client;
mod constants;
mod domain;
mod event;
mod handler;
mod network;
#[cfg(test)]
mod test_utils;
mod theme;
mod tui;
mod ui;

use crate::{
    app::App,
    client::OrdClient,
    constants::{NO_INSCRIPTIONS_MSG, TICK_RATE},
    domain::{AddressLookup, OrdError},
    event::{Action, LookupEvent},
    handler::handle_event,
    network::LookupManager,
    tui::Tui,
};

// lazyord version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// lazyord - Terminal UI for Bitcoin ordinal inscription lookup
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Base URL of the ordinals index API
    #[arg(long, value_name = "URL", global = true)]
    hiro_url: Option<String>,

    /// Base URL of the mempool.space explorer API
    #[arg(long, value_name = "URL", global = true)]
    mempool_url: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up an address once and print the results
    Lookup {
        /// Bitcoin address to query
        address: String,

        /// Print the merged lookup result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    color_eyre::install()?;

    let cli = Cli::parse();
    let client =
        OrdClient::new(cli.hiro_url.clone(), cli.mempool_url.clone()).map_err(OrdError::into_report)?;

    match cli.command {
        Some(Commands::Lookup { address, json }) => run_lookup(&client, &address, json).await,
        None => run_tui(client).await,
    }
}

/// One-shot lookup printed to stdout, no TUI.
async fn run_lookup(client: &OrdClient, address: &str, json: bool) -> Result<()> {
    let lookup = client
        .lookup_address(address)
        .await
        .map_err(OrdError::into_report)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lookup)?);
        return Ok(());
    }

    print_lookup(&lookup);
    Ok(())
}

/// Plain-text rendering of a lookup for the one-shot path.
fn print_lookup(lookup: &AddressLookup) {
    if lookup.cards.is_empty() {
        println!("{NO_INSCRIPTIONS_MSG}");
    } else {
        let count = lookup.cards.len();
        let plural = if count == 1 { "" } else { "s" };
        println!("Found {count} inscription{plural}.");

        for card in &lookup.cards {
            println!();
            println!("{}", card.title());
            let badge = if card.is_image { " [img]" } else { "" };
            println!("  Type: {}{badge}", card.content_type);
            if let Some(height) = card.block_height {
                println!("  Block: {height}");
            }
            if let Some(transfer) = card.transfer_label() {
                println!("  Last transfer: {transfer}");
            }
            if let Some(link) = card.detail_link() {
                println!("  View: {link}");
            }
        }
        println!();
    }

    println!("{}", lookup.balance.summary_line());
}

/// Interactive TUI entry.
async fn run_tui(client: OrdClient) -> Result<()> {
    let hiro_host = client
        .hiro_base_url()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .to_string();

    let mut terminal = tui::init()?;
    let mut app = App::new();

    // Channel for lookup results -> main loop
    let (lookup_event_sender, mut lookup_event_receiver) = mpsc::channel::<LookupEvent>(16);
    let manager = LookupManager::new(
        client,
        tokio::runtime::Handle::current(),
        lookup_event_sender,
    );

    let result = run_app(
        &mut terminal,
        &mut app,
        &manager,
        &mut lookup_event_receiver,
        &hiro_host,
    )
    .await;

    tui::restore()?;
    result
}

/// Main application loop.
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    manager: &LookupManager,
    lookup_event_receiver: &mut mpsc::Receiver<LookupEvent>,
    hiro_host: &str,
) -> Result<()> {
    loop {
        if app.exit {
            break;
        }

        // --- Drawing ---
        terminal.draw(|frame| ui::render(app, frame, hiro_host))?;

        // --- Terminal events ---
        // Poll with a very small timeout so the loop stays responsive to
        // both key presses and lookup completions.
        let mut terminal_event_ready = false;
        if crossterm::event::poll(std::time::Duration::from_millis(1))? {
            terminal_event_ready = true;
        }

        if terminal_event_ready {
            match crossterm::event::read() {
                Ok(event) => {
                    if let Some(action) = handle_event(app, event) {
                        if let Err(e) = app.update(action, manager) {
                            app.update(Action::ShowMessage(format!("Error: {e}")), manager)?;
                        }
                    }
                }
                Err(_) => {
                    app.exit = true;
                }
            }
        }

        // --- Lookup events ---
        match lookup_event_receiver.try_recv() {
            Ok(LookupEvent::LookupFinished(result)) => {
                if let Err(e) = app.update(Action::UpdateLookup(result), manager) {
                    app.update(Action::ShowMessage(format!("Error: {e}")), manager)?;
                }
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                app.exit = true;
            }
        }

        // Small sleep to keep CPU usage down when idle.
        if !terminal_event_ready {
            tokio::time::sleep(TICK_RATE).await;
        }
    }
    Ok(())
}
