//! wikictl TUI
//!
//! Terminal user interface for creating, updating, and deleting a personal
//! wiki against the wiki resource endpoint

use std::io;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod action;
mod app;
mod config;
mod event;
mod ui;

use app::App;
use event::EventHandler;

/// wikictl Terminal UI
#[derive(Parser, Debug)]
#[command(name = "wikictl-tui", version, about)]
struct Args {
    /// Wiki server address
    #[arg(short, long, default_value = "http://localhost:3000")]
    server: String,

    /// Tick rate in milliseconds
    #[arg(long, default_value = "250")]
    tick_rate: u64,

    /// Enable debug logging to file
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        let file = std::fs::File::create("wikictl-tui.log")?;
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(file))
            .init();
    }

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run
    let tick_rate = Duration::from_millis(args.tick_rate);
    let result = run_app(&mut terminal, &args.server, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Run the application main loop
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    server: &str,
    tick_rate: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Completions and timer firings come back over this channel
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let mut app = App::new(server, sender)?;

    // Create event handler
    let mut events = EventHandler::new(tick_rate);
    events.start();

    // Main loop
    loop {
        // Draw UI
        terminal.draw(|frame| ui::render(frame, &app))?;

        // Wait for either a terminal event or an application action
        tokio::select! {
            event = events.next() => {
                if let Some(event) = event {
                    let action = match event {
                        event::Event::Key(key) => event::key_to_action(key, app.focus),
                        event::Event::Resize(_, _) => action::TuiAction::Render,
                        event::Event::Tick => action::TuiAction::Tick,
                    };
                    app.handle_action(action);
                }
            }
            action = receiver.recv() => {
                if let Some(action) = action {
                    app.handle_action(action);
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
