use tracing::{info, warn};

use crate::database::manager::DatabaseError;
use crate::database::models::{Veiculo, VeiculoCreate};
use crate::database::store::Session;

use super::{
    ServiceError, ServiceResult, MOTORISTA_ALREADY_HAS_VEICULO, MOTORISTA_NOT_FOUND, VEICULO_NOT_FOUND,
};

/// Map constraint violations on a veiculos write to business errors
fn write_error(err: DatabaseError) -> ServiceError {
    match err {
        DatabaseError::UniqueViolation(_) => ServiceError::Conflict(MOTORISTA_ALREADY_HAS_VEICULO),
        DatabaseError::ForeignKeyViolation(_) => ServiceError::NotFound(MOTORISTA_NOT_FOUND),
        other => other.into(),
    }
}

pub async fn list(session: &mut dyn Session) -> ServiceResult<Vec<Veiculo>> {
    Ok(session.list_veiculos().await?)
}

pub async fn get(session: &mut dyn Session, id: i32) -> ServiceResult<Veiculo> {
    session
        .get_veiculo(id)
        .await?
        .ok_or(ServiceError::NotFound(VEICULO_NOT_FOUND))
}

/// Create a vehicle for a driver that does not own one yet
pub async fn create(session: &mut dyn Session, data: &VeiculoCreate) -> ServiceResult<Veiculo> {
    let existing = session.veiculos_by_motorista(data.motorista_id).await?;
    if !existing.is_empty() {
        warn!(motorista_id = data.motorista_id, "Motorista already has a veiculo");
        return Err(ServiceError::Conflict(MOTORISTA_ALREADY_HAS_VEICULO));
    }

    let created = session.insert_veiculo(data).await.map_err(write_error)?;
    info!(veiculo_id = created.id, motorista_id = created.motorista_id, "Created veiculo");
    Ok(created)
}

pub async fn update(session: &mut dyn Session, id: i32, data: &VeiculoCreate) -> ServiceResult<Veiculo> {
    session
        .update_veiculo(id, data)
        .await
        .map_err(write_error)?
        .ok_or(ServiceError::NotFound(VEICULO_NOT_FOUND))
}

/// Delete a vehicle and return the snapshot taken by the delete itself
pub async fn delete(session: &mut dyn Session, id: i32) -> ServiceResult<Veiculo> {
    let deleted = session
        .delete_veiculo(id)
        .await?
        .ok_or(ServiceError::NotFound(VEICULO_NOT_FOUND))?;
    info!(veiculo_id = id, "Deleted veiculo");
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;
    use crate::database::models::MotoristaCreate;
    use crate::database::store::Store;
    use crate::services::testing::StaleOwnershipSession;

    async fn seeded(store: &MemoryStore) -> (Box<dyn Session>, i32) {
        let mut s = store.session().await.unwrap();
        let ana = s
            .insert_motorista(&MotoristaCreate { name: "Ana".into(), cnh: None })
            .await
            .unwrap();
        (s, ana.id)
    }

    fn payload(motorista_id: i32, plate: &str) -> VeiculoCreate {
        VeiculoCreate { motorista_id, plate: plate.to_string(), model: Some("Uno".to_string()) }
    }

    #[tokio::test]
    async fn second_vehicle_is_rejected_without_insert() {
        let store = MemoryStore::new();
        let (mut s, ana) = seeded(&store).await;

        create(s.as_mut(), &payload(ana, "ABC123")).await.unwrap();
        let err = create(s.as_mut(), &payload(ana, "XYZ999")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(MOTORISTA_ALREADY_HAS_VEICULO)));
        assert_eq!(list(s.as_mut()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn second_vehicle_past_ownership_check_hits_constraint() {
        let store = MemoryStore::new();
        let (mut s, ana) = seeded(&store).await;
        create(s.as_mut(), &payload(ana, "ABC123")).await.unwrap();

        let mut stale = StaleOwnershipSession(store.session().await.unwrap());
        let err = create(&mut stale, &payload(ana, "XYZ999")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(MOTORISTA_ALREADY_HAS_VEICULO)));
        assert_eq!(list(s.as_mut()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn vehicle_for_unknown_driver_is_not_found() {
        let store = MemoryStore::new();
        let (mut s, _) = seeded(&store).await;
        let err = create(s.as_mut(), &payload(404, "ABC123")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(MOTORISTA_NOT_FOUND)));
    }

    #[tokio::test]
    async fn moving_vehicle_to_owner_of_another_is_conflict() {
        let store = MemoryStore::new();
        let (mut s, ana) = seeded(&store).await;
        let bruno = s
            .insert_motorista(&MotoristaCreate { name: "Bruno".into(), cnh: None })
            .await
            .unwrap()
            .id;
        create(s.as_mut(), &payload(ana, "ABC123")).await.unwrap();
        let second = create(s.as_mut(), &payload(bruno, "XYZ999")).await.unwrap();

        let err = update(s.as_mut(), second.id, &payload(ana, "XYZ999")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_returns_pre_delete_snapshot() {
        let store = MemoryStore::new();
        let (mut s, ana) = seeded(&store).await;
        let created = create(s.as_mut(), &payload(ana, "ABC123")).await.unwrap();
        let updated = update(s.as_mut(), created.id, &payload(ana, "ABC999")).await.unwrap();

        let deleted = delete(s.as_mut(), created.id).await.unwrap();
        assert_eq!(deleted, updated);
        assert!(matches!(
            delete(s.as_mut(), created.id).await,
            Err(ServiceError::NotFound(VEICULO_NOT_FOUND))
        ));
    }
}
