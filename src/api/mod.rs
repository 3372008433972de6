//! # API Module
//!
//! This module provides the HTTP endpoints of the migration service. It is
//! the boundary where the routing framework hands over parsed, validated
//! JSON payloads and takes back JSON responses; everything below it works
//! with plain domain types.
//!
//! ## Endpoints
//!
//! ### Migration
//!
//! - [`migrate`] - Matches a caller-supplied local audio library against the
//!   Spotify catalog and returns the per-item match groups. Best-effort:
//!   items whose search fails are skipped, items without matches are
//!   omitted.
//! - [`export`] - Creates a new Spotify playlist from already-matched track
//!   URIs, rejecting duplicate playlist names before anything is created.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information for
//!   monitoring systems and load balancers.
//!
//! ## Error responses
//!
//! Handlers return `Result<Json<_>, ApiError>`; the error taxonomy carries
//! its own status mapping and serializes as `{"error": "..."}`.
//!
//! ## Related Modules
//!
//! - [`crate::migration`] - The workflows these handlers drive
//! - [`crate::spotify`] - Spotify API integration

mod export;
mod health;
mod migrate;

pub use export::export;
pub use health::health;
pub use migrate::migrate;
