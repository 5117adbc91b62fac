use axum::Json;

use crate::database::models::{Veiculo, VeiculoCreate};
use crate::error::ApiResult;
use crate::middleware::{DbSession, RecordId, ValidJson};
use crate::services::veiculo_service;

/// GET /veiculos/
pub async fn list(mut session: DbSession) -> ApiResult<Vec<Veiculo>> {
    let veiculos = veiculo_service::list(&mut *session).await?;
    Ok(Json(veiculos))
}

/// GET /veiculos/:id
pub async fn get(RecordId(id): RecordId, mut session: DbSession) -> ApiResult<Veiculo> {
    let veiculo = veiculo_service::get(&mut *session, id).await?;
    Ok(Json(veiculo))
}

/// POST /veiculos/ - 400 when the driver already owns a vehicle
pub async fn post(
    mut session: DbSession,
    ValidJson(payload): ValidJson<VeiculoCreate>,
) -> ApiResult<Veiculo> {
    let veiculo = veiculo_service::create(&mut *session, &payload).await?;
    Ok(Json(veiculo))
}

/// PUT /veiculos/:id
pub async fn put(
    RecordId(id): RecordId,
    mut session: DbSession,
    ValidJson(payload): ValidJson<VeiculoCreate>,
) -> ApiResult<Veiculo> {
    let veiculo = veiculo_service::update(&mut *session, id, &payload).await?;
    Ok(Json(veiculo))
}

/// DELETE /veiculos/:id - Returns the vehicle as it was just before deletion
pub async fn delete(RecordId(id): RecordId, mut session: DbSession) -> ApiResult<Veiculo> {
    let veiculo = veiculo_service::delete(&mut *session, id).await?;
    Ok(Json(veiculo))
}
