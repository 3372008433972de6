//! Configuration management for the migration service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and an optional `.env` file. It provides a
//! centralized way to manage application configuration including the
//! Spotify Web API base URL and the server bind address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//!
//! No provider application credentials are baked into the binary; the
//! access token used for every Spotify call arrives with each request.

use std::env;

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is not an error: container and service deployments
/// typically inject configuration through the process environment directly.
///
/// # Example
///
/// ```
/// use audiomigrate::config;
///
/// config::load_env();
/// ```
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the address the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the migration API listens for requests.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for all catalog
/// operations: search, profile lookup, and playlist management.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}
