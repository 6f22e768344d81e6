//! Patternbook Entry Point
//!
//! Launches the terminal pattern browser, or prints catalog content for
//! scripting.
//!
//! # Usage
//!
//! ```bash
//! # Browse the built-in catalog
//! patternbook
//!
//! # Open a pattern straight away, comparing against Java
//! patternbook --pattern observer --mode java
//!
//! # Print a pattern as plain text
//! patternbook --pattern singleton --print
//!
//! # List or search the catalog
//! patternbook --list
//! patternbook --search pointer
//!
//! # Custom catalog and verbose logging
//! RUST_LOG=debug patternbook --catalog ./my-patterns.toml
//! ```
//!
//! The browser logs to `patternbook.log` in the state directory since it
//! owns the terminal. Headless modes log to stderr.

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_core::{
    default_config_path, default_log_path, load_config_from_path, loader, render_listing,
    render_text, BrowserConfig, ComparisonMode, ConfigOverrides, PatternCatalog, PatternView,
    SelectionState,
};
use patternbook_tui::App;

/// Patternbook - browse design patterns in traditional C++, modern C++ and Java
#[derive(Parser, Debug)]
#[command(name = "patternbook")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalog file (.toml or .json); the built-in catalog if omitted
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long, env = "PATTERNBOOK_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Category to open
    #[arg(long, value_name = "ID")]
    category: Option<String>,

    /// Pattern to open (moves to its category)
    #[arg(short = 'p', long, value_name = "ID")]
    pattern: Option<String>,

    /// Comparison mode: cppModern or java
    #[arg(short = 'm', long, value_name = "MODE", value_parser = parse_mode)]
    mode: Option<ComparisonMode>,

    /// Print the selected pattern as plain text and exit
    #[arg(long)]
    print: bool,

    /// List categories and patterns and exit
    #[arg(long, conflicts_with = "print")]
    list: bool,

    /// Search patterns by id, name or description and exit
    #[arg(short = 's', long, value_name = "QUERY", conflicts_with_all = ["print", "list"])]
    search: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "PATTERNBOOK_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    /// Modes that write to stdout instead of opening the browser
    fn headless(&self) -> bool {
        self.print || self.list || self.search.is_some()
    }

    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(ref path) = self.catalog {
            overrides = overrides.with_catalog_path(path.clone());
        }
        if let Some(ref category) = self.category {
            overrides = overrides.with_category(category.clone());
        }
        if let Some(ref pattern) = self.pattern {
            overrides = overrides.with_pattern(pattern.clone());
        }
        if let Some(mode) = self.mode {
            overrides = overrides.with_comparison_mode(mode);
        }
        overrides
    }
}

fn parse_mode(value: &str) -> Result<ComparisonMode, String> {
    ComparisonMode::parse(value)
        .ok_or_else(|| format!("expected \"cppModern\" or \"java\", got {value:?}"))
}

/// Initialize logging with the specified level
///
/// Headless runs log to stderr; the browser logs to `log_path`.
fn init_logging(level: &str, headless: bool, log_path: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "patternbook={level},patternbook_tui={level},catalog_core={level}"
        ))
    });

    if headless {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .with(filter)
            .init();
    } else {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {parent:?}"))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file: {log_path:?}"))?;

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(filter)
            .init();
    }

    Ok(())
}

/// Load configuration and apply CLI overrides
fn resolve_config(args: &Args) -> Result<BrowserConfig> {
    let path = args.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(path).context("Failed to load configuration")?;
    args.overrides().apply(&mut config);

    info!(
        source = %config.source(),
        catalog = ?config.catalog_path,
        mode = %config.comparison_mode,
        "Configuration resolved"
    );
    Ok(config)
}

fn load_catalog(config: &BrowserConfig) -> Result<PatternCatalog> {
    let catalog = loader::load(config.catalog_path.as_deref()).with_context(|| {
        match config.catalog_path {
            Some(ref path) => format!("Failed to load catalog from {}", path.display()),
            None => "Built-in catalog is invalid".to_string(),
        }
    })?;

    info!(
        categories = catalog.categories().len(),
        patterns = catalog.patterns().len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Handle `--list`, `--search` and `--print`
fn run_headless(args: &Args, config: &BrowserConfig, catalog: &PatternCatalog) -> Result<()> {
    if args.list {
        print!("{}", render_listing(catalog));
        return Ok(());
    }

    if let Some(ref query) = args.search {
        let hits = catalog.search(query);
        if hits.is_empty() {
            eprintln!("No patterns match {query:?}");
        }
        for pattern in hits {
            println!(
                "{:<20} {:<24} {}",
                pattern.id.as_str(),
                pattern.name,
                catalog.category_name(&pattern.category).unwrap_or_default()
            );
        }
        return Ok(());
    }

    let selection = initial_selection(config, catalog);
    let view = PatternView::resolve(&selection, catalog).with_context(|| {
        format!("Category {} has no patterns to print", selection.category())
    })?;
    print!("{}", render_text(&view, &config.render_options()));
    Ok(())
}

fn initial_selection(config: &BrowserConfig, catalog: &PatternCatalog) -> SelectionState {
    SelectionState::with_defaults(
        catalog,
        config.default_category.as_deref(),
        config.default_pattern.as_deref(),
        config.comparison_mode,
    )
}

fn main() -> Result<()> {
    let args = Args::parse();
    let headless = args.headless();

    // Initialize logging first
    init_logging(&args.log_level, headless, &default_log_path())?;
    info!(version = env!("CARGO_PKG_VERSION"), "patternbook starting");

    let config = resolve_config(&args)?;
    let catalog = load_catalog(&config)?;

    if headless {
        return run_headless(&args, &config, &catalog);
    }

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: patternbook requires a terminal (TTY)");
        eprintln!();
        eprintln!("For non-interactive use try:");
        eprintln!("  patternbook --print --pattern <ID>");
        eprintln!("  patternbook --list");
        eprintln!("  patternbook --search <QUERY>");
        std::process::exit(1);
    }

    let selection = initial_selection(&config, &catalog);
    let mut app = App::new(catalog, selection, config.render_options());

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Propagate any errors
    result
}
