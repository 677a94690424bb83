//! Daily Most-Played Track Library
//!
//! This library powers `dailyspin`, a small integration job that looks at the
//! trailing 24 hours of a Last.fm user's play history, figures out the most
//! listened track and appends it to a Spotify playlist unless the playlist
//! already carries a track of that name.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback/trigger server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `lastfm` - Last.fm play history client
//! - `management` - Token lifecycle and persistence
//! - `pipeline` - The daily selection run from history fetch to playlist append
//! - `scheduler` - Daily trigger for the pipeline in server mode
//! - `selection` - Play tally ranking and duplicate-avoiding selection
//! - `server` - Local HTTP server for OAuth callbacks and the daily trigger
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use dailyspin::{config, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> dailyspin::Res<()> {
//!     config::load_env().await?;
//!     let outcome = pipeline::run_daily_selection(&config::lastfm_user(), &config::spotify_playlist_id()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod lastfm;
pub mod management;
pub mod pipeline;
pub mod scheduler;
pub mod selection;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Fetching play history...");
/// info!("Found {} plays", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// success!("Added {} to the playlist", track_name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Used for unrecoverable errors that require immediate program termination.
/// Code placed after an invocation of this macro will not execute.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important information that users should
/// notice, without terminating the program.
///
/// # Example
///
/// ```
/// warning!("Token cache not found, will create new one");
/// warning!("Track {} not found in the catalog", name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
