use axum::Json;

use crate::database::models::{Motorista, MotoristaCreate};
use crate::error::ApiResult;
use crate::middleware::{DbSession, RecordId, ValidJson};
use crate::services::motorista_service;

/// GET /motoristas/ - All drivers
pub async fn list(mut session: DbSession) -> ApiResult<Vec<Motorista>> {
    let motoristas = motorista_service::list(&mut *session).await?;
    Ok(Json(motoristas))
}

/// GET /motoristas/:id - One driver or 404
pub async fn get(RecordId(id): RecordId, mut session: DbSession) -> ApiResult<Motorista> {
    let motorista = motorista_service::get(&mut *session, id).await?;
    Ok(Json(motorista))
}

/// POST /motoristas/ - Create a driver
pub async fn post(
    mut session: DbSession,
    ValidJson(payload): ValidJson<MotoristaCreate>,
) -> ApiResult<Motorista> {
    let motorista = motorista_service::create(&mut *session, &payload).await?;
    Ok(Json(motorista))
}

/// PUT /motoristas/:id - Replace every field of a driver
pub async fn put(
    RecordId(id): RecordId,
    mut session: DbSession,
    ValidJson(payload): ValidJson<MotoristaCreate>,
) -> ApiResult<Motorista> {
    let motorista = motorista_service::update(&mut *session, id, &payload).await?;
    Ok(Json(motorista))
}

/// DELETE /motoristas/:id - Delete a driver without vehicles; returns its last state
pub async fn delete(RecordId(id): RecordId, mut session: DbSession) -> ApiResult<Motorista> {
    let motorista = motorista_service::delete(&mut *session, id).await?;
    Ok(Json(motorista))
}
