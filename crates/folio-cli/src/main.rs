//! Folio - a single-page portfolio in the terminal
//!
//! Scroll through hero, about, skills, projects, experience and contact
//! sections; the header tracks the section in view and switches to a
//! frosted style once the page scrolls.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use folio_core::{on_scroll, paths, Config, Portfolio};

mod tui;

use tui::app::terminal_scroll_config;
use tui::state::PortfolioView;
use tui::themes::THEME_REGISTRY;

/// Folio - portfolio viewer
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A single-page portfolio in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme name (overrides the config file)
    #[arg(short, long, global = true)]
    theme: Option<String>,

    /// Config file (defaults to ~/.folio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Portfolio content file (TOML); built-in content when omitted
    #[arg(long, global = true)]
    content: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the portfolio (default)
    View,

    /// List available themes
    Themes,

    /// Print the section registry measured at a content width
    Sections {
        #[arg(short, long, default_value_t = 100)]
        width: usize,
    },

    /// Print the scroll state for a scroll position, in rows
    Spy {
        scroll_y: usize,

        #[arg(short, long, default_value_t = 100)]
        width: usize,
    },
}

/// Log to ~/.folio/logs/folio.log; stdout belongs to the TUI
fn init_logging() {
    let log_dir = paths::logs_dir();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Logging disabled: cannot create {}: {}", log_dir.display(), e);
        return;
    }
    let log_file = match std::fs::File::create(log_dir.join("folio.log")) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    };
    config.context("Failed to load config")
}

/// Mount the page headlessly at a content width
fn measure(
    portfolio: Portfolio,
    config: &Config,
    theme: Option<&str>,
    width: usize,
) -> Result<PortfolioView> {
    let theme = THEME_REGISTRY.get_or_default(config.theme_name(theme));
    Ok(PortfolioView::mount(
        portfolio,
        theme,
        terminal_scroll_config(config),
        width.max(1),
    )?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tui::terminal::restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();

    // Everything that can fail on user input is loaded before the
    // terminal is taken over
    let config = load_config(cli.config.as_deref())?;
    let portfolio = Portfolio::load_or_builtin(cli.content.as_deref())
        .context("Failed to load portfolio content")?;
    let theme = cli.theme.as_deref();

    match cli.command.unwrap_or(Commands::View) {
        Commands::View => {
            let size = crossterm::terminal::size().unwrap_or((100, 30));
            let mut app = tui::App::new(portfolio, &config, theme, size)?;
            app.run().await?;
        }
        Commands::Themes => {
            println!("Available themes:");
            for (name, theme) in THEME_REGISTRY.list() {
                println!("  {:<14} {}", name, theme.display_name);
            }
        }
        Commands::Sections { width } => {
            let view = measure(portfolio, &config, theme, width)?;
            for section in view.spy.registry().sections() {
                println!("{} {}", section.id, section.vertical_offset);
            }
        }
        Commands::Spy { scroll_y, width } => {
            let view = measure(portfolio, &config, theme, width)?;
            let state = on_scroll(scroll_y, view.spy.registry(), view.spy.config());
            println!("scroll_y: {}", state.scroll_y);
            println!("is_past_threshold: {}", state.is_past_threshold);
            println!("active_section_id: {}", state.active_section_id);
            println!("chrome: {:?}", state.chrome());
        }
    }

    Ok(())
}
