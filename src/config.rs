//! Configuration management for dailyspin.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Last.fm and Spotify API credentials, the target
//! playlist and local server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `dailyspin/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/dailyspin/.env`
/// - macOS: `~/Library/Application Support/dailyspin/.env`
/// - Windows: `%LOCALAPPDATA%/dailyspin/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an error
/// string if directory creation or file loading fails.
///
/// # Example
///
/// ```
/// use dailyspin::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dailyspin/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the address for the local callback and trigger server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the local HTTP server should bind, both for
/// OAuth callbacks during authentication and for the `/daily` trigger
/// endpoint in server mode.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8888"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Last.fm user whose play history is reconciled.
///
/// # Panics
///
/// Panics if the `LASTFM_USER` environment variable is not set.
pub fn lastfm_user() -> String {
    env::var("LASTFM_USER").expect("LASTFM_USER must be set")
}

/// Returns the Last.fm API key used for history requests.
///
/// # Panics
///
/// Panics if the `LASTFM_API_KEY` environment variable is not set.
pub fn lastfm_api_key() -> String {
    env::var("LASTFM_API_KEY").expect("LASTFM_API_KEY must be set")
}

/// Returns the Last.fm API base URL.
///
/// Usually `https://ws.audioscrobbler.com/2.0`. Kept configurable so tests
/// and forks of the history service can point elsewhere.
///
/// # Panics
///
/// Panics if the `LASTFM_API_URL` environment variable is not set.
pub fn lastfm_api_url() -> String {
    env::var("LASTFM_API_URL").expect("LASTFM_API_URL must be set")
}

/// Returns the ID of the Spotify playlist that receives the daily pick.
///
/// # Panics
///
/// Panics if the `SPOTIFY_PLAYLIST_ID` environment variable is not set.
pub fn spotify_playlist_id() -> String {
    env::var("SPOTIFY_PLAYLIST_ID").expect("SPOTIFY_PLAYLIST_ID must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_API_REDIRECT_URI` environment variable which specifies
/// the callback URL that Spotify should redirect to after user authorization.
/// This must match the redirect URI registered in the Spotify application settings.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
///
/// # Example
///
/// ```
/// let redirect_uri = spotify_redirect_uri(); // e.g., "http://127.0.0.1:8888/callback"
/// ```
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions.
///
/// Retrieves the `SPOTIFY_API_AUTH_SCOPE` environment variable which defines
/// the scope of permissions requested during OAuth authentication. Playlist
/// reconciliation needs the playlist read and modify scopes.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
///
/// # Example
///
/// ```
/// let scope = spotify_scope(); // e.g., "playlist-modify-public playlist-read-private"
/// ```
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_API_AUTH_URL` environment variable which contains
/// the base URL for Spotify's OAuth authorization endpoint. This is where
/// users are redirected to grant permissions to the application.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for all API
/// operations after authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL for exchanging authorization codes for access tokens during the
/// OAuth flow, and for refreshing expired access tokens afterwards.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}
