use axum::Json;

use crate::{
    error::ApiError,
    migration,
    spotify::SpotifySession,
    types::{ExportRequest, ExportResponse},
};

pub async fn export(Json(req): Json<ExportRequest>) -> Result<Json<ExportResponse>, ApiError> {
    let session = SpotifySession::create(&req.credential())?;

    let playlist = migration::export_playlist(&session, &req.title, &req.playlist).await?;

    Ok(Json(ExportResponse { playlist }))
}
