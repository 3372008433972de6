use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;

use crate::{
    config,
    error::ApiError,
    matching::normalize_case,
    spotify::{REQUEST_TIMEOUT, SearchTerms, SpotifySession, translate_status, translate_transport},
    types::{RemoteTrack, SearchResponse},
    warning,
};

/// Maximum number of track results requested per search.
const SEARCH_LIMIT: u32 = 40;

/// Bounded retry budget for rate-limit and gateway failures.
const MAX_ATTEMPTS: u32 = 3;

/// A Retry-After above this is treated as a hard transient failure rather
/// than slept through.
const RETRY_AFTER_CAP_SECS: u64 = 120;

/// Builds the field-scoped provider query from the search terms.
///
/// All terms are lower-cased. The free-text leading term repeats the title,
/// followed by `track:`/`album:`/`artist:` scopes; absent fields are simply
/// omitted (the match engine rejects candidates for absent fields anyway,
/// so a broader query cannot change an accepted result).
pub fn build_query(terms: &SearchTerms) -> String {
    let title = normalize_case(&terms.title);
    let mut query = format!("{title} track:{title}");

    if let Some(album) = &terms.album {
        query.push_str(&format!(" album:{}", normalize_case(album)));
    }
    if let Some(artist) = &terms.artist {
        query.push_str(&format!(" artist:{}", normalize_case(artist)));
    }

    query
}

/// Issues one track search against the Spotify Web API.
///
/// Returns up to [`SEARCH_LIMIT`] results projected into [`RemoteTrack`].
/// Rate-limit responses are retried after the provider's `Retry-After`
/// delay and 502s after a fixed pause, at most [`MAX_ATTEMPTS`] attempts in
/// total; what survives the retry budget is returned as
/// [`ApiError::Transient`] so the orchestrator can apply its own policy.
///
/// # Arguments
///
/// * `session` - Valid session for Spotify API authentication
/// * `terms` - Title and optional artist/album of the item being migrated
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<RemoteTrack>)` - Candidate tracks in provider ranking order
/// - `Err(ApiError)` - Translated provider, network, or session failure
pub async fn search_tracks(
    session: &SpotifySession,
    terms: &SearchTerms,
) -> Result<Vec<RemoteTrack>, ApiError> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());
    let query = build_query(terms);
    let limit = SEARCH_LIMIT.to_string();

    let mut attempt = 0;
    loop {
        attempt += 1;
        let token = session.bearer()?;

        let response = session
            .http()
            .get(&api_url)
            .query(&[
                ("q", query.as_str()),
                ("type", "track"),
                ("limit", limit.as_str()),
            ])
            .bearer_auth(token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(err) => {
                if (err.is_timeout() || err.is_connect()) && attempt < MAX_ATTEMPTS {
                    sleep(Duration::from_secs(2 * attempt as u64)).await;
                    continue; // retry
                }
                return Err(translate_transport(err));
            }
        };

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(1);

            if retry_after <= RETRY_AFTER_CAP_SECS && attempt < MAX_ATTEMPTS {
                sleep(Duration::from_secs(retry_after)).await;
                continue; // retry
            }

            warning!(
                "Rate limited with a retry-after of {} seconds; giving up on this search.",
                retry_after
            );
            return Err(ApiError::Transient(format!(
                "rate limited for {retry_after}s"
            )));
        }

        if status == StatusCode::BAD_GATEWAY && attempt < MAX_ATTEMPTS {
            sleep(Duration::from_secs(2)).await;
            continue; // retry
        }

        if !status.is_success() {
            return Err(translate_status(
                status,
                format!("search failed with status {status}"),
            ));
        }

        let body = response
            .json::<SearchResponse>()
            .await
            .map_err(|e| ApiError::Upstream(e.to_string()))?;

        return Ok(body.tracks.items.into_iter().map(RemoteTrack::from).collect());
    }
}
