use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use tripq::app::App;
use tripq::ask::{QueryClient, ask_blocking};
use tripq::config::{ConfigResult, load_config};
use tripq::logging;

/// Ask travel questions about India from your terminal
#[derive(Parser, Debug)]
#[command(name = "tripq", version, about)]
struct Args {
    /// Query endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ask one question, print the answer, and exit
    #[arg(long, value_name = "QUESTION")]
    ask: Option<String>,

    /// Write debug logs to the cache directory
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = logging::init(args.debug) {
        log::debug!("Log file: {}", path.display());
    }

    let ConfigResult {
        mut config,
        warning,
    } = load_config(args.config.as_deref());

    if let Some(endpoint) = args.endpoint {
        config.endpoint.url = endpoint;
    }

    let client = QueryClient::new(&config.endpoint.url)?;

    if let Some(question) = args.ask {
        if let Some(warning) = &warning {
            log::warn!("{}", warning);
        }
        if let Some(text) = ask_blocking(&client, &question)? {
            println!("{}", text);
        }
        return Ok(());
    }

    let app = App::with_worker(&config, client);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableBracketedPaste)?;

    let result = run(terminal, app, warning);

    if let Err(e) = execute!(stdout(), DisableBracketedPaste) {
        log::warn!("Failed to disable bracketed paste: {}", e);
    }
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App, warning: Option<String>) -> Result<()> {
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }

    loop {
        app.poll_response();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    app.shutdown();
    Ok(())
}
