use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Output format for recipe text
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw Markdown as returned by the provider
    Markdown,
    /// Rendered HTML fragment
    Html,
}

#[derive(Parser)]
#[command(name = "culina")]
#[command(about = "culina - your AI-powered kitchen companion")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/culina/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory for saved recipes (overrides config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format for recipe text
    #[arg(short = 'f', long, global = true, value_enum, default_value = "markdown")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a full recipe for a named dish
    Recipe {
        /// Dish name, e.g. "Lemon Butter Chicken"
        dish: String,

        /// Save the recipe to the saved-recipes book
        #[arg(long)]
        save: bool,
    },

    /// Suggest recipes for the ingredients you have on hand
    Ingredients {
        /// Ingredient list, e.g. chicken breast garlic lemon rosemary
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Fetch the full recipe for the Nth suggestion (1-based)
        #[arg(long, value_name = "N")]
        full: Option<usize>,
    },

    /// Suggest recipes for a mood or craving
    ///
    /// Try the classics: "Comfort Food", "Healthy", "Indulgent" - or any
    /// craving in your own words.
    Mood {
        /// The mood, e.g. "Comfort Food"
        mood: String,

        /// Fetch the full recipe for the Nth suggestion (1-based)
        #[arg(long, value_name = "N")]
        full: Option<usize>,
    },

    /// Manage the saved-recipes book
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
}

#[derive(Subcommand)]
pub enum SavedCommands {
    /// List saved recipes
    List,

    /// Print a saved recipe
    View {
        /// Recipe id, as shown by `saved list`
        id: String,
    },

    /// Delete a saved recipe
    Delete {
        /// Recipe id, as shown by `saved list`
        id: String,
    },
}
