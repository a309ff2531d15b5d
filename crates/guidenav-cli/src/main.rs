//! guidenav CLI
//!
//! Thin wrapper around guidenav-core for inspecting guides and reader
//! preferences from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Print the navigable outline of a guide
//! guidenav outline guides/lusail-stadium.md
//!
//! # Same, as JSON
//! guidenav outline guides/lusail-stadium.md --json
//!
//! # Render the guide to HTML with anchors applied
//! guidenav render guides/lusail-stadium.md
//!
//! # Compute scroll progress for a layout reading
//! guidenav progress --top 1200 --height 6000 --viewport 900
//!
//! # Reader preferences
//! guidenav prefs save lusail-stadium
//! guidenav prefs rate lusail-stadium 4
//! guidenav prefs show lusail-stadium
//! guidenav prefs list
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guidenav_core::logging::init_logging;
use guidenav_core::{
    index_headings, scroll_percent, ArticleId, GuideConfig, GuideDocument, PreferenceStore,
    Rating, RedbStore, ScrollMetrics,
};

/// guidenav - scroll navigation for long-form guides
#[derive(Parser)]
#[command(name = "guidenav")]
#[command(version = "0.1.0")]
#[command(about = "guidenav - scroll navigation for long-form guides")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: ~/.guidenav/data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the outline of a markdown guide
    Outline {
        /// Markdown file
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render a markdown guide to HTML with heading anchors
    Render {
        /// Markdown file
        file: PathBuf,
    },

    /// Compute scroll progress for a layout reading
    Progress {
        /// Scroll offset in pixels
        #[arg(long, allow_hyphen_values = true)]
        top: f64,
        /// Total scrollable height in pixels
        #[arg(long)]
        height: f64,
        /// Viewport height in pixels
        #[arg(long)]
        viewport: f64,
    },

    /// Reader preference management
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Show the saved flag and rating of an article
    Show {
        /// Article id (guide slug)
        article: String,
    },
    /// Mark an article as saved
    Save {
        /// Article id (guide slug)
        article: String,
    },
    /// Remove the saved mark
    Unsave {
        /// Article id (guide slug)
        article: String,
    },
    /// Rate an article from 1 to 5 stars
    Rate {
        /// Article id (guide slug)
        article: String,
        /// Stars (1-5)
        #[arg(allow_hyphen_values = true)]
        stars: i64,
    },
    /// List saved articles
    List,
}

/// Get the default data directory (~/.guidenav/data)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".guidenav")
        .join("data")
}

fn load_config(path: Option<&PathBuf>) -> Result<GuideConfig> {
    match path {
        Some(path) => GuideConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display())),
        None => Ok(GuideConfig::default()),
    }
}

fn open_preferences(data_dir: &Path, config: &GuideConfig) -> Result<PreferenceStore> {
    let db_path = data_dir.join("preferences.redb");
    let store = RedbStore::open(&db_path)
        .with_context(|| format!("Failed to open preference store at {}", db_path.display()))?;
    Ok(PreferenceStore::new(
        Arc::new(store),
        config.storage_namespace.clone(),
    ))
}

fn print_record(prefs: &PreferenceStore, article: &ArticleId) {
    let record = prefs.record(article);
    println!("Article: {}", article);
    println!("  Saved: {}", if record.saved { "yes" } else { "no" });
    match record.rating {
        Some(rating) => println!("  Rating: {}", rating),
        None => println!("  Rating: (not rated)"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    match cli.command {
        Commands::Outline { file, json } => {
            let doc = GuideDocument::load(&file)
                .with_context(|| format!("Failed to read guide '{}'", file.display()))?;
            let index = index_headings(&doc.headings(), &config);

            if json {
                println!("{}", serde_json::to_string_pretty(&index.outline)?);
            } else {
                println!("{} ({} sections)", doc.title(), index.outline.len());
                for entry in &index.outline {
                    let indent = if entry.level > 2 { "    " } else { "  " };
                    println!("{}{}  #{}", indent, entry.label, entry.id);
                }
            }
        }

        Commands::Render { file } => {
            let doc = GuideDocument::load(&file)
                .with_context(|| format!("Failed to read guide '{}'", file.display()))?;
            let index = index_headings(&doc.headings(), &config);
            print!("{}", doc.render(&index.assignments));
        }

        Commands::Progress {
            top,
            height,
            viewport,
        } => {
            let percent = scroll_percent(ScrollMetrics::new(top, height, viewport));
            println!("{:.1}%", percent);
        }

        Commands::Prefs { action } => {
            let prefs = open_preferences(&data_dir, &config)?;
            match action {
                PrefsAction::Show { article } => {
                    print_record(&prefs, &ArticleId::new(article));
                }
                PrefsAction::Save { article } => {
                    let article = ArticleId::new(article);
                    prefs.set_saved(&article, true);
                    println!("Saved {}", article);
                }
                PrefsAction::Unsave { article } => {
                    let article = ArticleId::new(article);
                    prefs.set_saved(&article, false);
                    println!("Removed {} from saved guides", article);
                }
                PrefsAction::Rate { article, stars } => {
                    let rating = Rating::new(stars)?;
                    let article = ArticleId::new(article);
                    prefs.set_rating(&article, rating);
                    println!("Rated {} {}", article, rating);
                }
                PrefsAction::List => {
                    let saved = prefs.saved_articles();
                    if saved.is_empty() {
                        println!("No saved guides.");
                    } else {
                        println!("Saved guides ({}):", saved.len());
                        for article in saved {
                            println!("  {}", article);
                        }
                    }
                }
            }
        }
    }

    tracing::debug!("command finished");
    Ok(())
}
