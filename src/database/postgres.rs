use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tracing::{debug, info};

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Motorista, MotoristaCreate, Veiculo, VeiculoCreate};
use crate::database::store::{Session, Store};

const MOTORISTA_COLUMNS: &str = "id, name, cnh";
const VEICULO_COLUMNS: &str = "id, motorista_id, plate, model";

/// PostgreSQL-backed store. Each session owns one pooled connection.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        DatabaseManager::migrate(&self.pool).await
    }
}

#[async_trait]
impl Store for PgStore {
    async fn session(&self) -> Result<Box<dyn Session>, DatabaseError> {
        let conn = self.pool.acquire().await?;
        debug!("Acquired database connection (idle: {})", self.pool.num_idle());
        Ok(Box::new(PgSession { conn }))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}

/// A single pooled connection; returned to the pool on drop
pub struct PgSession {
    conn: PoolConnection<Postgres>,
}

impl Drop for PgSession {
    fn drop(&mut self) {
        debug!("Releasing database connection");
    }
}

#[async_trait]
impl Session for PgSession {
    async fn ping(&mut self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&mut *self.conn).await?;
        Ok(())
    }

    async fn list_motoristas(&mut self) -> Result<Vec<Motorista>, DatabaseError> {
        let sql = format!("SELECT {} FROM motoristas ORDER BY id", MOTORISTA_COLUMNS);
        let rows = sqlx::query_as::<_, Motorista>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(rows)
    }

    async fn get_motorista(&mut self, id: i32) -> Result<Option<Motorista>, DatabaseError> {
        let sql = format!("SELECT {} FROM motoristas WHERE id = $1", MOTORISTA_COLUMNS);
        let row = sqlx::query_as::<_, Motorista>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(row)
    }

    async fn insert_motorista(&mut self, data: &MotoristaCreate) -> Result<Motorista, DatabaseError> {
        let sql = format!(
            "INSERT INTO motoristas (name, cnh) VALUES ($1, $2) RETURNING {}",
            MOTORISTA_COLUMNS
        );
        let row = sqlx::query_as::<_, Motorista>(&sql)
            .bind(&data.name)
            .bind(&data.cnh)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(row)
    }

    async fn update_motorista(
        &mut self,
        id: i32,
        data: &MotoristaCreate,
    ) -> Result<Option<Motorista>, DatabaseError> {
        let sql = format!(
            "UPDATE motoristas SET name = $2, cnh = $3 WHERE id = $1 RETURNING {}",
            MOTORISTA_COLUMNS
        );
        let row = sqlx::query_as::<_, Motorista>(&sql)
            .bind(id)
            .bind(&data.name)
            .bind(&data.cnh)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(row)
    }

    async fn delete_motorista(&mut self, id: i32) -> Result<Option<Motorista>, DatabaseError> {
        let sql = format!("DELETE FROM motoristas WHERE id = $1 RETURNING {}", MOTORISTA_COLUMNS);
        let row = sqlx::query_as::<_, Motorista>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(row)
    }

    async fn list_veiculos(&mut self) -> Result<Vec<Veiculo>, DatabaseError> {
        let sql = format!("SELECT {} FROM veiculos ORDER BY id", VEICULO_COLUMNS);
        let rows = sqlx::query_as::<_, Veiculo>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(rows)
    }

    async fn get_veiculo(&mut self, id: i32) -> Result<Option<Veiculo>, DatabaseError> {
        let sql = format!("SELECT {} FROM veiculos WHERE id = $1", VEICULO_COLUMNS);
        let row = sqlx::query_as::<_, Veiculo>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(row)
    }

    async fn veiculos_by_motorista(&mut self, motorista_id: i32) -> Result<Vec<Veiculo>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM veiculos WHERE motorista_id = $1 ORDER BY id",
            VEICULO_COLUMNS
        );
        let rows = sqlx::query_as::<_, Veiculo>(&sql)
            .bind(motorista_id)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(rows)
    }

    async fn insert_veiculo(&mut self, data: &VeiculoCreate) -> Result<Veiculo, DatabaseError> {
        let sql = format!(
            "INSERT INTO veiculos (motorista_id, plate, model) VALUES ($1, $2, $3) RETURNING {}",
            VEICULO_COLUMNS
        );
        let row = sqlx::query_as::<_, Veiculo>(&sql)
            .bind(data.motorista_id)
            .bind(&data.plate)
            .bind(&data.model)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(row)
    }

    async fn update_veiculo(
        &mut self,
        id: i32,
        data: &VeiculoCreate,
    ) -> Result<Option<Veiculo>, DatabaseError> {
        let sql = format!(
            "UPDATE veiculos SET motorista_id = $2, plate = $3, model = $4 WHERE id = $1 RETURNING {}",
            VEICULO_COLUMNS
        );
        let row = sqlx::query_as::<_, Veiculo>(&sql)
            .bind(id)
            .bind(data.motorista_id)
            .bind(&data.plate)
            .bind(&data.model)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(row)
    }

    async fn delete_veiculo(&mut self, id: i32) -> Result<Option<Veiculo>, DatabaseError> {
        let sql = format!("DELETE FROM veiculos WHERE id = $1 RETURNING {}", VEICULO_COLUMNS);
        let row = sqlx::query_as::<_, Veiculo>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(row)
    }
}
