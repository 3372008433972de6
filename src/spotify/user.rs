use crate::{
    config,
    error::ApiError,
    spotify::{REQUEST_TIMEOUT, SpotifySession, translate_status, translate_transport},
    types::UserProfile,
};

/// Fetches the authenticated user's Spotify id via `GET /me`.
pub async fn current_user_id(session: &SpotifySession) -> Result<String, ApiError> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());
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
            format!("profile lookup failed with status {status}"),
        ));
    }

    let profile = response
        .json::<UserProfile>()
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(profile.id)
}
