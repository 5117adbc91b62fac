use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Motorista, MotoristaCreate, Veiculo, VeiculoCreate};

/// Source of per-request database sessions
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Acquire a session. Dropping the returned value releases it.
    async fn session(&self) -> Result<Box<dyn Session>, DatabaseError>;

    /// Short backend name for logs and the health endpoint
    fn backend(&self) -> &'static str;

    /// Release every pooled resource (called on shutdown)
    async fn close(&self);
}

/// One unit of database access, scoped to a single request.
///
/// Every method is a single statement with autocommit semantics. Storage
/// constraints surface as `DatabaseError::UniqueViolation` and
/// `DatabaseError::ForeignKeyViolation`.
#[async_trait]
pub trait Session: Send {
    async fn ping(&mut self) -> Result<(), DatabaseError>;

    async fn list_motoristas(&mut self) -> Result<Vec<Motorista>, DatabaseError>;
    async fn get_motorista(&mut self, id: i32) -> Result<Option<Motorista>, DatabaseError>;
    async fn insert_motorista(&mut self, data: &MotoristaCreate) -> Result<Motorista, DatabaseError>;
    async fn update_motorista(
        &mut self,
        id: i32,
        data: &MotoristaCreate,
    ) -> Result<Option<Motorista>, DatabaseError>;
    /// Delete and return the row as it was before deletion
    async fn delete_motorista(&mut self, id: i32) -> Result<Option<Motorista>, DatabaseError>;

    async fn list_veiculos(&mut self) -> Result<Vec<Veiculo>, DatabaseError>;
    async fn get_veiculo(&mut self, id: i32) -> Result<Option<Veiculo>, DatabaseError>;
    /// Vehicles referencing `motorista_id`
    async fn veiculos_by_motorista(&mut self, motorista_id: i32) -> Result<Vec<Veiculo>, DatabaseError>;
    async fn insert_veiculo(&mut self, data: &VeiculoCreate) -> Result<Veiculo, DatabaseError>;
    async fn update_veiculo(
        &mut self,
        id: i32,
        data: &VeiculoCreate,
    ) -> Result<Option<Veiculo>, DatabaseError>;
    /// Delete and return the row as it was before deletion
    async fn delete_veiculo(&mut self, id: i32) -> Result<Option<Veiculo>, DatabaseError>;
}
