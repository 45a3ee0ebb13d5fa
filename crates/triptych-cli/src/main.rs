//! triptych CLI: scroll-driven tabbed section for the terminal

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use triptych_core::{core_version, IndicatorStyle, TabSet};
use triptych_tui::headless::{HeadlessConfig, HeadlessSession};
use triptych_tui::{run_tui, tui_version, Action, AppOptions, Theme};

/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

/// Scroll-driven tabbed section for the terminal
#[derive(Parser)]
#[command(name = "triptych")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory with per-tab art files (001.txt, 002.txt, 003.txt)
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Color theme (noir, mocha)
    #[arg(long, global = true, default_value = "noir")]
    theme: String,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Run a session headlessly and print the final frame
    Snapshot {
        /// Terminal width
        #[arg(long, default_value_t = triptych_tui::headless::DEFAULT_WIDTH)]
        width: u16,

        /// Terminal height
        #[arg(long, default_value_t = triptych_tui::headless::DEFAULT_HEIGHT)]
        height: u16,

        /// Ticks to run before capturing
        #[arg(long, default_value = "40")]
        ticks: usize,

        /// Navigate to this tab first (1-based)
        #[arg(long)]
        tab: Option<usize>,
    },

    /// Print tab metadata and versions
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.log_file != DEFAULT_LOG_FILE {
        init_logging(&cli.log_level, &cli.log_file);
    }

    let options = match app_options(&cli) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            if let Err(e) = rt.block_on(run_tui(options)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Snapshot {
            width,
            height,
            ticks,
            tab,
        }) => {
            cmd_snapshot(options, width, height, ticks, tab);
        }
        Some(Commands::Info { json }) => {
            cmd_info(json, cli.assets.as_deref());
        }
    }
}

fn app_options(cli: &Cli) -> Result<AppOptions, String> {
    let Some(theme) = Theme::by_name(&cli.theme) else {
        return Err(format!(
            "Unknown theme '{}'; expected noir or mocha",
            cli.theme
        ));
    };
    Ok(AppOptions {
        assets_dir: cli.assets.clone(),
        theme,
        ..AppOptions::default()
    })
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {log_file}: {e}");
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }
}

fn cmd_snapshot(options: AppOptions, width: u16, height: u16, ticks: usize, tab: Option<usize>) {
    let config = HeadlessConfig {
        width,
        height,
        options,
        ..HeadlessConfig::default()
    };
    let mut session = match HeadlessSession::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to build session: {e}");
            std::process::exit(1);
        }
    };

    // Let the initial activation commit before navigating.
    session.tick(2);
    if let Some(tab) = tab {
        session.send_action(Action::Tab(tab.saturating_sub(1)));
    }
    session.tick(ticks);

    match session.render() {
        Ok(frame) => println!("{frame}"),
        Err(e) => {
            eprintln!("Failed to render: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_info(json: bool, assets: Option<&Path>) {
    let tabs = TabSet::builtin();
    let count = tabs.len();

    if json {
        let entries: Vec<_> = tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                serde_json::json!({
                    "id": tab.id,
                    "label": tab.label(),
                    "heading": tab.heading,
                    "body": tab.body,
                    "art": assets.map(|dir| tab.art_path(dir)),
                    "indicator": IndicatorStyle::for_tab(index, count),
                })
            })
            .collect();
        let output = serde_json::json!({
            "tabs": entries,
            "core_version": core_version(),
            "tui_version": tui_version(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("failed to serialize")
        );
        return;
    }

    println!("Triptych Tabs\n");

    for (index, tab) in tabs.iter().enumerate() {
        println!("  {} - {}", tab.label(), tab.heading);
        if let Some(dir) = assets {
            println!("    Art: {}", tab.art_path(dir).display());
        }
        println!("    Indicator: {}", IndicatorStyle::for_tab(index, count));
    }

    println!();
    println!("core {}  tui {}", core_version(), tui_version());
}
