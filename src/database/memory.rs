use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::database::manager::DatabaseError;
use crate::database::models::{Motorista, MotoristaCreate, Veiculo, VeiculoCreate};
use crate::database::store::{Session, Store};

const UNIQUE_MOTORISTA: &str = "veiculos_motorista_id_key";
const FK_MOTORISTA: &str = "veiculos_motorista_id_fkey";

#[derive(Debug)]
struct Tables {
    motoristas: BTreeMap<i32, Motorista>,
    veiculos: BTreeMap<i32, Veiculo>,
    next_motorista_id: i32,
    next_veiculo_id: i32,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            motoristas: BTreeMap::new(),
            veiculos: BTreeMap::new(),
            next_motorista_id: 1,
            next_veiculo_id: 1,
        }
    }
}

impl Tables {
    /// Same checks the PostgreSQL schema performs on veiculos writes.
    /// `own_id` is the vehicle being updated, if any.
    fn check_veiculo(&self, data: &VeiculoCreate, own_id: Option<i32>) -> Result<(), DatabaseError> {
        if !self.motoristas.contains_key(&data.motorista_id) {
            return Err(DatabaseError::ForeignKeyViolation(FK_MOTORISTA.to_string()));
        }
        let taken = self
            .veiculos
            .values()
            .any(|v| v.motorista_id == data.motorista_id && Some(v.id) != own_id);
        if taken {
            return Err(DatabaseError::UniqueViolation(UNIQUE_MOTORISTA.to_string()));
        }
        Ok(())
    }
}

/// Process-local store with the same constraint behavior as the SQL schema.
/// Ids are generated like SERIAL columns: never reused, even after deletes.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn session(&self) -> Result<Box<dyn Session>, DatabaseError> {
        Ok(Box::new(MemorySession {
            tables: Arc::clone(&self.tables),
        }))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn close(&self) {}
}

pub struct MemorySession {
    tables: Arc<Mutex<Tables>>,
}

#[async_trait]
impl Session for MemorySession {
    async fn ping(&mut self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn list_motoristas(&mut self) -> Result<Vec<Motorista>, DatabaseError> {
        let tables = self.tables.lock().await;
        Ok(tables.motoristas.values().cloned().collect())
    }

    async fn get_motorista(&mut self, id: i32) -> Result<Option<Motorista>, DatabaseError> {
        let tables = self.tables.lock().await;
        Ok(tables.motoristas.get(&id).cloned())
    }

    async fn insert_motorista(&mut self, data: &MotoristaCreate) -> Result<Motorista, DatabaseError> {
        let mut tables = self.tables.lock().await;
        let id = tables.next_motorista_id;
        tables.next_motorista_id += 1;

        let record = data.clone().into_record(id);
        tables.motoristas.insert(id, record.clone());
        Ok(record)
    }

    async fn update_motorista(
        &mut self,
        id: i32,
        data: &MotoristaCreate,
    ) -> Result<Option<Motorista>, DatabaseError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.motoristas.get_mut(&id).map(|row| {
            *row = data.clone().into_record(id);
            row.clone()
        }))
    }

    async fn delete_motorista(&mut self, id: i32) -> Result<Option<Motorista>, DatabaseError> {
        let mut tables = self.tables.lock().await;
        if tables.veiculos.values().any(|v| v.motorista_id == id) {
            return Err(DatabaseError::ForeignKeyViolation(FK_MOTORISTA.to_string()));
        }
        Ok(tables.motoristas.remove(&id))
    }

    async fn list_veiculos(&mut self) -> Result<Vec<Veiculo>, DatabaseError> {
        let tables = self.tables.lock().await;
        Ok(tables.veiculos.values().cloned().collect())
    }

    async fn get_veiculo(&mut self, id: i32) -> Result<Option<Veiculo>, DatabaseError> {
        let tables = self.tables.lock().await;
        Ok(tables.veiculos.get(&id).cloned())
    }

    async fn veiculos_by_motorista(&mut self, motorista_id: i32) -> Result<Vec<Veiculo>, DatabaseError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .veiculos
            .values()
            .filter(|v| v.motorista_id == motorista_id)
            .cloned()
            .collect())
    }

    async fn insert_veiculo(&mut self, data: &VeiculoCreate) -> Result<Veiculo, DatabaseError> {
        let mut tables = self.tables.lock().await;
        tables.check_veiculo(data, None)?;

        let id = tables.next_veiculo_id;
        tables.next_veiculo_id += 1;

        let record = data.clone().into_record(id);
        tables.veiculos.insert(id, record.clone());
        Ok(record)
    }

    async fn update_veiculo(
        &mut self,
        id: i32,
        data: &VeiculoCreate,
    ) -> Result<Option<Veiculo>, DatabaseError> {
        let mut tables = self.tables.lock().await;
        if !tables.veiculos.contains_key(&id) {
            return Ok(None);
        }
        tables.check_veiculo(data, Some(id))?;

        let record = data.clone().into_record(id);
        tables.veiculos.insert(id, record.clone());
        Ok(Some(record))
    }

    async fn delete_veiculo(&mut self, id: i32) -> Result<Option<Veiculo>, DatabaseError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.veiculos.remove(&id))
    }
}
