//! Configuration management for the SoundCloud downloader.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration, most importantly the client id that is
//! attached to every SoundCloud API request.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Public v2 catalog API base used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://api-v2.soundcloud.com";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `scdlcli/.env`. This allows users to store the
/// client id securely without hardcoding it.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/scdlcli/.env`
/// - macOS: `~/Library/Application Support/scdlcli/.env`
/// - Windows: `%LOCALAPPDATA%/scdlcli/.env`
///
/// A missing `.env` file is not an error: configuration may come entirely
/// from process environment variables.
///
/// # Returns
///
/// Returns `Ok(())` if the environment is ready, or an error string if
/// directory creation fails.
///
/// # Example
///
/// ```
/// use scdlcli::config;
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
    path.push("scdlcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the SoundCloud client id attached to every API request.
///
/// Retrieves the `SOUNDCLOUD_CLIENT_ID` environment variable. SoundCloud's
/// public v2 API does not require an OAuth flow for catalog reads; a static
/// client id passed as a query parameter is sufficient.
///
/// # Panics
///
/// Panics if the `SOUNDCLOUD_CLIENT_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let client_id = soundcloud_client_id(); // e.g., "a3e059563d7fd3372b49b37f00a00bcf"
/// ```
pub fn soundcloud_client_id() -> String {
    env::var("SOUNDCLOUD_CLIENT_ID").expect("SOUNDCLOUD_CLIENT_ID must be set")
}

/// Returns the SoundCloud v2 API base URL.
///
/// Retrieves the `SOUNDCLOUD_API_URL` environment variable, falling back to
/// [`DEFAULT_API_URL`] when unset. Overriding is mainly useful for pointing
/// the client at a test double.
///
/// # Example
///
/// ```
/// let api_url = soundcloud_apiurl(); // e.g., "https://api-v2.soundcloud.com"
/// ```
pub fn soundcloud_apiurl() -> String {
    env::var("SOUNDCLOUD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
