//! DDL for the driver/vehicle tables, applied by `frota-api migrate` and at
//! startup when `database.run_migrations` is set.

/// PostgreSQL schema:
/// - `veiculos.motorista_id` is UNIQUE, so a driver owns at most one vehicle
/// - the foreign key is `ON DELETE RESTRICT`, so a driver with a vehicle
///   cannot be deleted
pub const POSTGRES_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS motoristas (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    cnh TEXT NULL
);

CREATE TABLE IF NOT EXISTS veiculos (
    id SERIAL PRIMARY KEY,
    motorista_id INTEGER NOT NULL REFERENCES motoristas(id) ON DELETE RESTRICT,
    plate TEXT NOT NULL,
    model TEXT NULL,
    CONSTRAINT veiculos_motorista_id_key UNIQUE (motorista_id)
);
"#;

/// Split the bundled DDL into individual statements (sqlx prepares one at a time)
pub fn statements(ddl: &str) -> impl Iterator<Item = &str> {
    ddl.split(';').map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_two_create_statements() {
        let stmts: Vec<&str> = statements(POSTGRES_INIT).collect();
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].starts_with("CREATE TABLE IF NOT EXISTS motoristas"));
        assert!(stmts[1].contains("UNIQUE (motorista_id)"));
    }
}
