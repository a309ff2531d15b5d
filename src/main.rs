#![allow(non_snake_case)]

mod app;
mod context;
mod pages;
mod probe;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Paths and settings chosen on the command line
#[derive(Debug, Clone)]
pub struct ReaderSettings {
    pub guides_dir: PathBuf,
    pub data_dir: PathBuf,
    pub config: Option<PathBuf>,
}

static SETTINGS: OnceLock<ReaderSettings> = OnceLock::new();

/// Settings set from the command line, or the defaults
pub fn get_settings() -> ReaderSettings {
    SETTINGS.get().cloned().unwrap_or_else(|| ReaderSettings {
        guides_dir: PathBuf::from("guides"),
        data_dir: default_data_dir(),
        config: None,
    })
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("guidenav")
}

/// guidenav - desktop guide reader
#[derive(Parser, Debug)]
#[command(name = "guidenav-desktop")]
#[command(about = "Read markdown travel guides with a live outline and reading progress")]
struct Args {
    /// Directory of markdown guides
    #[arg(short, long, default_value = "guides")]
    guides_dir: PathBuf,

    /// Data directory for saved guides and ratings
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    guidenav_core::logging::init_logging(args.verbose);

    let settings = ReaderSettings {
        guides_dir: args.guides_dir,
        data_dir: args.data_dir.unwrap_or_else(default_data_dir),
        config: args.config,
    };

    tracing::info!(
        "Starting reader with guides {:?}, data dir {:?}",
        settings.guides_dir,
        settings.data_dir
    );
    let _ = SETTINGS.set(settings);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("guidenav")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
