use axum::Json;

use crate::{
    error::ApiError,
    info, migration,
    spotify::SpotifySession,
    types::{MigrateRequest, MigrateResponse},
};

pub async fn migrate(Json(req): Json<MigrateRequest>) -> Result<Json<MigrateResponse>, ApiError> {
    let session = SpotifySession::create(&req.credential())?;

    info!("Migrating {} audio item(s)", req.audio_list.len());
    let data = migration::run_migration(&session, &req.audio_list).await?;

    Ok(Json(MigrateResponse { data }))
}
