pub mod config;
pub mod database;
pub mod models;
pub mod setup;

pub use sea_orm;

use crate::config::get_env_or_throw;
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Mutex;

/**
 * The global database connection
 */
static DB_CONN: Lazy<Mutex<Option<DatabaseConnection>>> = Lazy::new(|| Mutex::new(None));

/**
 * Load the .env file (used by tests; the server binary calls dotenv itself)
 *
 * # Returns
 * @return () - The result of the operation
 */
pub fn init() {
    dotenv::dotenv().ok();
}

/**
 * Establish a connection to the database and store it globally
 *
 * # Returns
 * @return Result<(), sea_orm::DbErr> - The result of the operation
 */
pub async fn setup() -> Result<(), DbErr> {
    let database_url = get_env_or_throw("DB_URL");
    let db_conn = Database::connect(&database_url).await?;
    let mut db_conn_global = DB_CONN.lock().unwrap();
    *db_conn_global = Some(db_conn);
    Ok(())
}

/**
 * Get a reference to the established database connection
 *
 * # Returns
 * @return Result<DatabaseConnection, sea_orm::DbErr> - The database connection or an error
 */
pub async fn get_database_connection() -> Result<DatabaseConnection, DbErr> {
    let db_conn = DB_CONN.lock().unwrap();
    if let Some(ref conn) = *db_conn {
        Ok(conn.clone())
    } else {
        Err(DbErr::Custom(
            "Database connection is not established".into(),
        ))
    }
}

/**
 * Sets up a fresh in-memory SQLite database with the full portal schema
 * and installs it as the global connection. One pooled connection only,
 * so every query sees the same memory database.
 */
pub async fn setup_test_environment() {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);
    let db_conn = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    setup::create_all_tables(&db_conn)
        .await
        .expect("Failed to create portal schema");
    let mut db_conn_global = DB_CONN.lock().unwrap();
    *db_conn_global = Some(db_conn);
}

#[cfg(test)]
mod tests {

    use super::*;
    use serial_test::serial;

    /**
     * Test that the in-memory test database comes up with the schema applied
     */
    #[tokio::test]
    #[serial]
    async fn test_setup_test_environment() {
        setup_test_environment().await;
        let conn = get_database_connection().await;
        assert!(conn.is_ok());
    }

    /**
     * Test that the connection getter fails before setup
     */
    #[tokio::test]
    #[serial]
    async fn test_connection_required() {
        {
            let mut db_conn_global = DB_CONN.lock().unwrap();
            *db_conn_global = None;
        }
        let conn = get_database_connection().await;
        assert!(conn.is_err());
    }
}
