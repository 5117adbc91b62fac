pub mod motorista_service;
pub mod veiculo_service;

use thiserror::Error;

use crate::database::manager::DatabaseError;

pub const MOTORISTA_NOT_FOUND: &str = "Motorista não encontrado";
pub const VEICULO_NOT_FOUND: &str = "Veículo não encontrado";
pub const MOTORISTA_HAS_VEICULOS: &str =
    "Não é possível excluir o motorista pois existem veículos vinculados a ele.";
pub const MOTORISTA_ALREADY_HAS_VEICULO: &str = "Este motorista já possui um veículo cadastrado.";

/// Outcome of a business rule check, before it becomes an HTTP status
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;

    use crate::database::manager::DatabaseError;
    use crate::database::models::{Motorista, MotoristaCreate, Veiculo, VeiculoCreate};
    use crate::database::store::Session;

    /// Session whose ownership lookup always comes back empty, as it does when
    /// another request writes a vehicle between the check and the write.
    /// Everything else goes to the wrapped session.
    pub struct StaleOwnershipSession(pub Box<dyn Session>);

    #[async_trait]
    impl Session for StaleOwnershipSession {
        async fn ping(&mut self) -> Result<(), DatabaseError> {
            self.0.ping().await
        }

        async fn list_motoristas(&mut self) -> Result<Vec<Motorista>, DatabaseError> {
            self.0.list_motoristas().await
        }

        async fn get_motorista(&mut self, id: i32) -> Result<Option<Motorista>, DatabaseError> {
            self.0.get_motorista(id).await
        }

        async fn insert_motorista(&mut self, data: &MotoristaCreate) -> Result<Motorista, DatabaseError> {
            self.0.insert_motorista(data).await
        }

        async fn update_motorista(
            &mut self,
            id: i32,
            data: &MotoristaCreate,
        ) -> Result<Option<Motorista>, DatabaseError> {
            self.0.update_motorista(id, data).await
        }

        async fn delete_motorista(&mut self, id: i32) -> Result<Option<Motorista>, DatabaseError> {
            self.0.delete_motorista(id).await
        }

        async fn list_veiculos(&mut self) -> Result<Vec<Veiculo>, DatabaseError> {
            self.0.list_veiculos().await
        }

        async fn get_veiculo(&mut self, id: i32) -> Result<Option<Veiculo>, DatabaseError> {
            self.0.get_veiculo(id).await
        }

        async fn veiculos_by_motorista(&mut self, _motorista_id: i32) -> Result<Vec<Veiculo>, DatabaseError> {
            Ok(vec![])
        }

        async fn insert_veiculo(&mut self, data: &VeiculoCreate) -> Result<Veiculo, DatabaseError> {
            self.0.insert_veiculo(data).await
        }

        async fn update_veiculo(
            &mut self,
            id: i32,
            data: &VeiculoCreate,
        ) -> Result<Option<Veiculo>, DatabaseError> {
            self.0.update_veiculo(id, data).await
        }

        async fn delete_veiculo(&mut self, id: i32) -> Result<Option<Veiculo>, DatabaseError> {
            self.0.delete_veiculo(id).await
        }
    }
}
