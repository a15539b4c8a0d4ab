//! Patches Please terminal client.
//!
//! A TUI for the "guess which code file is real" trivia game. The client
//! talks to a game server (default `http://localhost:8000/api`, overridable
//! via `PATCHES_API_URL`) and renders each response into a header, two code
//! panes, and a lives/score sidebar.

mod app;
mod events;
mod ui;
mod worker;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use patches_core::GameApi;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;
use tokio::sync::mpsc;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let api = GameApi::from_env();

    // Channels to the network worker
    let (request_tx, request_rx) = mpsc::channel(8);
    let (response_tx, response_rx) = mpsc::channel(8);
    let worker = tokio::spawn(worker::run(api, request_rx, response_tx));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(request_tx, response_rx)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    worker.abort();

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|f| render(f, &mut app))?;

        // Apply any finished network work
        while let Ok(response) = app.response_rx.try_recv() {
            app.apply_response(response);
        }

        // Poll for events; the timeout keeps worker responses flowing in
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if handle_event(&mut app, ev) == EventResult::Quit {
                return Ok(());
            }
        }
    }
}

fn print_help() {
    println!("Patches Please - terminal client for the code trivia game");
    println!();
    println!("USAGE:");
    println!("  patches [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help    Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("  PATCHES_API_URL    Game server base URL (default: http://localhost:8000/api)");
    println!();
    println!("KEYS:");
    println!("  Space    Start the next level");
    println!("  y        Accept (the shown file is real)");
    println!("  n        Deny (the shown file is fake)");
    println!("  Esc      End the current game");
    println!("  Tab      Switch code pane focus");
    println!("  j/k      Scroll the focused pane");
    println!("  q        Quit");
}
