use crate::{
    config,
    error::ApiError,
    spotify::{REQUEST_TIMEOUT, SpotifySession, translate_status, translate_transport},
    types::{
        AddTracksBody, AddTracksResponse, CreatePlaylistBody, CreatedPlaylist, PlaylistSummary,
        UserPlaylistsResponse,
    },
};

/// Lists the playlists owned by or followed by the given user.
///
/// Used by the export flow as a duplicate-name guard before any playlist is
/// created.
pub async fn list_for_user(
    session: &SpotifySession,
    user_id: &str,
) -> Result<Vec<PlaylistSummary>, ApiError> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
    );
    let token = session.bearer()?;

    let response = session
        .http()
        .get(&api_url)
        .bearer_auth(token)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(translate_transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(translate_status(
            status,
            format!("playlist listing failed with status {status}"),
        ));
    }

    let body = response
        .json::<UserPlaylistsResponse>()
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(body.items)
}

/// Creates a new private playlist for the given user.
pub async fn create(
    session: &SpotifySession,
    user_id: &str,
    name: &str,
) -> Result<CreatedPlaylist, ApiError> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
    );
    let token = session.bearer()?;

    let response = session
        .http()
        .post(&api_url)
        .bearer_auth(token)
        .json(&CreatePlaylistBody {
            name: name.to_string(),
            public: false,
        })
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(translate_transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(translate_status(
            status,
            format!("playlist creation failed with status {status}"),
        ));
    }

    response
        .json::<CreatedPlaylist>()
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))
}

/// Adds the given track URIs to a playlist in one batched call and returns
/// the resulting snapshot id.
pub async fn add_tracks(
    session: &SpotifySession,
    playlist_id: &str,
    uris: &[String],
) -> Result<String, ApiError> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
    );
    let token = session.bearer()?;

    let response = session
        .http()
        .post(&api_url)
        .bearer_auth(token)
        .json(&AddTracksBody {
            uris: uris.to_vec(),
        })
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(translate_transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(translate_status(
            status,
            format!("adding tracks failed with status {status}"),
        ));
    }

    let body = response
        .json::<AddTracksResponse>()
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(body.snapshot_id)
}
