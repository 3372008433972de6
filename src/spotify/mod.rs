//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API that the
//! migration workflows are built on: session construction from a
//! caller-supplied token bundle, track search, user-profile lookup, and
//! playlist creation and population. It is the only place in the service
//! that performs HTTP communication with Spotify, and the only place where
//! provider failures are translated into the service's error taxonomy.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Orchestration Layer (migration)
//!          ↓
//! Spotify Integration Layer
//!     ├── Session (token validation, expiry)
//!     ├── Search (track search, retry/backoff)
//!     ├── User (profile lookup)
//!     └── Playlist Operations (list, create, populate)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## The `Catalog` seam
//!
//! The orchestration layer never calls the submodule functions directly; it
//! is generic over the [`Catalog`] trait, which [`SpotifySession`]
//! implements by delegating to the submodules. Tests drive the orchestrator
//! with a scripted stand-in instead of the network.
//!
//! ## Error translation
//!
//! All provider failures become [`ApiError`] variants at this boundary:
//!
//! - `401`/`403` → [`ApiError::Auth`]
//! - `429`, connect and timeout failures → [`ApiError::Transient`]
//!   (retried with bounded backoff inside the client, honoring
//!   `Retry-After` up to 120 seconds)
//! - `5xx` and undecodable bodies → [`ApiError::Upstream`]
//!
//! ## API Coverage
//!
//! - `GET /search` - Track search scoped to title/artist/album terms
//! - `GET /me` - Authenticated user's profile
//! - `GET /users/{user_id}/playlists` - Existing playlists for the
//!   duplicate-name guard
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//!
//! ## Session lifecycle
//!
//! Each request constructs its own [`SpotifySession`] from the token bundle
//! it carries; there is no cross-request session cache and tokens are never
//! persisted. An expired session fails every subsequent call with
//! [`ApiError::Auth`].

pub mod playlist;
pub mod search;
pub mod session;
pub mod user;

pub use session::SpotifySession;

use std::time::Duration;

use reqwest::StatusCode;

use crate::{
    error::ApiError,
    types::{CreatedPlaylist, PlaylistSummary, RemoteTrack},
};

/// Upper bound on any single provider round trip. Dropping the request
/// future cancels an in-flight call, so together these bound the worst-case
/// latency of one catalog operation.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw query terms for a track search, taken verbatim from a local audio
/// item. The client lower-cases them while building the provider query.
#[derive(Debug, Clone)]
pub struct SearchTerms {
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
}

/// The catalog operations the migration workflows depend on.
///
/// Implemented by [`SpotifySession`] against the live Web API and by test
/// doubles in the integration tests. Callers are always generic over the
/// concrete implementation, so no Send bound is promised here.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    async fn search_tracks(&self, terms: &SearchTerms) -> Result<Vec<RemoteTrack>, ApiError>;

    async fn current_user_id(&self) -> Result<String, ApiError>;

    async fn list_user_playlists(&self, user_id: &str) -> Result<Vec<PlaylistSummary>, ApiError>;

    async fn create_playlist(&self, user_id: &str, name: &str)
    -> Result<CreatedPlaylist, ApiError>;

    /// Adds the given track URIs to a playlist and returns the resulting
    /// snapshot id.
    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<String, ApiError>;
}

impl Catalog for SpotifySession {
    async fn search_tracks(&self, terms: &SearchTerms) -> Result<Vec<RemoteTrack>, ApiError> {
        search::search_tracks(self, terms).await
    }

    async fn current_user_id(&self) -> Result<String, ApiError> {
        user::current_user_id(self).await
    }

    async fn list_user_playlists(&self, user_id: &str) -> Result<Vec<PlaylistSummary>, ApiError> {
        playlist::list_for_user(self, user_id).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<CreatedPlaylist, ApiError> {
        playlist::create(self, user_id, name).await
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<String, ApiError> {
        playlist::add_tracks(self, playlist_id, uris).await
    }
}

/// Maps a non-success provider status to the error taxonomy.
pub(crate) fn translate_status(status: StatusCode, detail: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(detail),
        StatusCode::TOO_MANY_REQUESTS => ApiError::Transient(detail),
        StatusCode::NOT_FOUND => ApiError::NotFound(detail),
        _ => ApiError::Upstream(detail),
    }
}

/// Maps a transport-level reqwest failure to the error taxonomy.
pub(crate) fn translate_transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() || err.is_connect() {
        ApiError::Transient(err.to_string())
    } else {
        ApiError::Upstream(err.to_string())
    }
}
