use serde::{Deserialize, Serialize};

/// Token bundle supplied by the caller with every request.
///
/// Forwarded to the Spotify client as-is and never persisted by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessCredential {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: String,
}

/// One record of the caller's local audio library.
///
/// `title` is always present; `artist` and `album` may be absent, in which
/// case no remote candidate can ever pass the corresponding match test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalAudioItem {
    pub id: String,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
}

/// Normalized projection of a Spotify search result.
///
/// Only the first credited artist is considered. `image` carries the second
/// cover-art variant when the album has more than one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteTrack {
    pub id: String,
    pub uri: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub image: Option<String>,
}

/// One local audio item paired with the remote tracks accepted for it,
/// in discovery order. Items without any accepted match never produce a
/// group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchGroup {
    pub item: LocalAudioItem,
    pub matches: Vec<RemoteTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MigrateRequest {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: String,
    pub audio_list: Vec<LocalAudioItem>,
}

impl MigrateRequest {
    pub fn credential(&self) -> AccessCredential {
        AccessCredential {
            access_token: self.access_token.clone(),
            token_type: self.token_type.clone(),
            expires_in: self.expires_in,
            refresh_token: self.refresh_token.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MigrateResponse {
    pub data: Vec<MatchGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: String,
    pub title: String,
    /// Track URIs already matched by a previous migration run.
    pub playlist: Vec<String>,
}

impl ExportRequest {
    pub fn credential(&self) -> AccessCredential {
        AccessCredential {
            access_token: self.access_token.clone(),
            token_type: self.token_type.clone(),
            expires_in: self.expires_in,
            refresh_token: self.refresh_token.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportResponse {
    pub playlist: CreatedPlaylist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: TracksContainer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TracksContainer {
    pub items: Vec<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub album: AlbumRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    pub name: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    pub url: String,
}

impl From<TrackObject> for RemoteTrack {
    fn from(track: TrackObject) -> Self {
        RemoteTrack {
            id: track.id,
            uri: track.uri,
            title: track.name,
            artist: track
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            image: track.album.images.get(1).map(|i| i.url.clone()),
            album: track.album.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPlaylistsResponse {
    pub items: Vec<PlaylistSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistBody {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedPlaylist {
    pub id: String,
    pub name: String,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTracksBody {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}
