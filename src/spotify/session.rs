use chrono::{DateTime, Duration, Utc};
use reqwest::Client;

use crate::{error::ApiError, types::AccessCredential};

/// An authenticated Spotify Web API session, scoped to a single request.
///
/// Wraps the caller-supplied access token together with its computed expiry
/// and a reusable HTTP client. The token bundle is forwarded as-is; this
/// service never refreshes or persists it.
#[derive(Debug)]
pub struct SpotifySession {
    client: Client,
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl SpotifySession {
    /// Constructs a session from a caller-supplied token bundle.
    ///
    /// Only structural validation happens here: an empty access token, an
    /// empty token type, or a lifetime of zero or beyond the representable
    /// range is rejected with [`ApiError::Auth`]. Whether the token is
    /// actually accepted by Spotify surfaces on the first API call.
    pub fn create(credential: &AccessCredential) -> Result<Self, ApiError> {
        if credential.access_token.trim().is_empty() {
            return Err(ApiError::Auth("access token is empty".to_string()));
        }
        if credential.token_type.trim().is_empty() {
            return Err(ApiError::Auth("token type is missing".to_string()));
        }
        if credential.expires_in == 0 {
            return Err(ApiError::Auth("token is already expired".to_string()));
        }

        // expires_in is caller-supplied; an absurd value must not abort the task.
        let lifetime = i64::try_from(credential.expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| ApiError::Auth("token lifetime is out of range".to_string()))?;
        let expires_at = Utc::now()
            .checked_add_signed(lifetime)
            .ok_or_else(|| ApiError::Auth("token lifetime is out of range".to_string()))?;

        Ok(SpotifySession {
            client: Client::new(),
            access_token: credential.access_token.clone(),
            expires_at,
        })
    }

    /// Returns the bearer token, or [`ApiError::Auth`] once the session has
    /// outlived the lifetime the caller declared for it.
    pub(crate) fn bearer(&self) -> Result<&str, ApiError> {
        if Utc::now() >= self.expires_at {
            return Err(ApiError::Auth("session expired".to_string()));
        }
        Ok(&self.access_token)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }
}
