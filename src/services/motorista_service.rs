use tracing::{info, warn};

use crate::database::manager::DatabaseError;
use crate::database::models::{Motorista, MotoristaCreate};
use crate::database::store::Session;

use super::{ServiceError, ServiceResult, MOTORISTA_HAS_VEICULOS, MOTORISTA_NOT_FOUND};

pub async fn list(session: &mut dyn Session) -> ServiceResult<Vec<Motorista>> {
    Ok(session.list_motoristas().await?)
}

pub async fn get(session: &mut dyn Session, id: i32) -> ServiceResult<Motorista> {
    session
        .get_motorista(id)
        .await?
        .ok_or(ServiceError::NotFound(MOTORISTA_NOT_FOUND))
}

pub async fn create(session: &mut dyn Session, data: &MotoristaCreate) -> ServiceResult<Motorista> {
    let created = session.insert_motorista(data).await?;
    info!(motorista_id = created.id, "Created motorista");
    Ok(created)
}

/// Full replacement of an existing driver
pub async fn update(
    session: &mut dyn Session,
    id: i32,
    data: &MotoristaCreate,
) -> ServiceResult<Motorista> {
    session
        .update_motorista(id, data)
        .await?
        .ok_or(ServiceError::NotFound(MOTORISTA_NOT_FOUND))
}

/// Delete a driver that owns no vehicles, returning its last state.
///
/// The vehicle check runs before the delete; a vehicle attached in between
/// is caught by the foreign key and reported the same way.
pub async fn delete(session: &mut dyn Session, id: i32) -> ServiceResult<Motorista> {
    get(session, id).await?;

    let attached = session.veiculos_by_motorista(id).await?;
    if !attached.is_empty() {
        warn!(motorista_id = id, veiculos = attached.len(), "Refusing to delete motorista with veiculos");
        return Err(ServiceError::Conflict(MOTORISTA_HAS_VEICULOS));
    }

    match session.delete_motorista(id).await {
        Ok(Some(deleted)) => {
            info!(motorista_id = id, "Deleted motorista");
            Ok(deleted)
        }
        Ok(None) => Err(ServiceError::NotFound(MOTORISTA_NOT_FOUND)),
        Err(DatabaseError::ForeignKeyViolation(_)) => Err(ServiceError::Conflict(MOTORISTA_HAS_VEICULOS)),
        Err(e) => Err(e.into()),
    }
}
