//! Migration and playlist-export orchestration.
//!
//! Two workflows live here, both generic over the [`Catalog`] seam:
//!
//! - [`run_migration`] walks the caller's audio library, searches the
//!   catalog once per item, and accumulates accepted candidates into
//!   per-item match groups.
//! - [`export_playlist`] creates a new remote playlist from already-matched
//!   track URIs, guarded against duplicate names.
//!
//! Each request is a single run with no persisted state; match groups live
//! only for the duration of the request and are returned to the caller.

use crate::{
    error::ApiError,
    info, matching,
    spotify::{Catalog, SearchTerms},
    success,
    types::{CreatedPlaylist, LocalAudioItem, MatchGroup},
    warning,
};

/// Matches every local audio item against the remote catalog.
///
/// Items are searched strictly one at a time. Concurrent fanout would burst
/// the provider rate limit on large libraries and scramble the per-item log
/// order that makes migration runs debuggable.
///
/// Failure policy, per item: a search that still fails after the client's
/// bounded retries is logged and the item is skipped, so one flaky search
/// cannot void an otherwise successful run. An [`ApiError::Auth`] aborts the
/// whole run instead, since every remaining call would fail the same way.
///
/// Items for which no candidate is accepted are omitted from the result;
/// the output therefore never has more entries than the input.
pub async fn run_migration<C: Catalog>(
    catalog: &C,
    audio_list: &[LocalAudioItem],
) -> Result<Vec<MatchGroup>, ApiError> {
    let mut groups: Vec<MatchGroup> = Vec::new();

    for item in audio_list {
        let terms = SearchTerms {
            title: item.title.clone(),
            artist: item.artist.clone(),
            album: item.album.clone(),
        };

        let candidates = match catalog.search_tracks(&terms).await {
            Ok(candidates) => candidates,
            Err(err @ ApiError::Auth(_)) => return Err(err),
            Err(err) => {
                warning!("Search for '{}' failed, skipping item: {}", item.title, err);
                continue;
            }
        };

        let accepted = matching::find_matches(item, &candidates);
        if !accepted.is_empty() {
            info!("Matched {} candidate(s) for '{}'", accepted.len(), item.title);
            matching::upsert_matches(&mut groups, item, accepted);
        }
    }

    Ok(groups)
}

/// Creates a remote playlist named `title` and populates it with
/// `track_uris` in one batched call.
///
/// The duplicate check compares names exactly and runs before any create
/// call is issued; an existing playlist of the same name is never touched or
/// overwritten. If populating fails after the create succeeded, the empty
/// playlist is left behind and the failure surfaces as
/// [`ApiError::Upstream`] with the orphaned playlist id in the message.
pub async fn export_playlist<C: Catalog>(
    catalog: &C,
    title: &str,
    track_uris: &[String],
) -> Result<CreatedPlaylist, ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::Validation(
            "playlist title must not be empty".to_string(),
        ));
    }

    let user_id = catalog.current_user_id().await?;

    let existing = catalog.list_user_playlists(&user_id).await?;
    if existing.iter().any(|p| p.name == title) {
        return Err(ApiError::Conflict(format!(
            "playlist '{title}' already exists"
        )));
    }

    let playlist = catalog.create_playlist(&user_id, title).await?;
    success!("Created playlist '{}' ({})", playlist.name, playlist.id);

    if let Err(err) = catalog.add_tracks(&playlist.id, track_uris).await {
        // No compensating delete: whether to clean up the orphaned playlist
        // is an open product decision.
        warning!("Failed to populate playlist {}: {}", playlist.id, err);
        return Err(ApiError::Upstream(format!(
            "playlist {} was created but its tracks could not be added: {err}",
            playlist.id
        )));
    }

    success!(
        "Added {} track(s) to playlist '{}'",
        track_uris.len(),
        playlist.name
    );

    Ok(playlist)
}
