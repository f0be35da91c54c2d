//! # Client Repository
//!
//! Database operations for clients.

use sqlx::{SqliteExecutor, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use bookstore_core::Client;

/// Repository for client database operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClientRepository { pool }
    }

    /// Inserts a new client with the id it carries.
    ///
    /// ## Returns
    /// * `Ok(Client)` - The stored client
    /// * `Err(DbError::DuplicateKey)` - The id is already taken
    pub async fn insert(&self, client: &Client) -> DbResult<Client> {
        debug!(id = client.id, "Inserting client");

        sqlx::query(
            r#"
            INSERT INTO clients (id, first_name, last_name, address)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(client.id)
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.address)
        .execute(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::DuplicateKey { .. } => DbError::duplicate("Client id", client.id.to_string()),
            other => other,
        })?;

        Ok(client.clone())
    }

    /// Gets a client by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Client))` - Client found
    /// * `Ok(None)` - Client not found
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, first_name, last_name, address
            FROM clients
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    /// Lists every client, ordered by id.
    pub async fn find_all(&self) -> DbResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, first_name, last_name, address
            FROM clients
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = clients.len(), "Listed clients");
        Ok(clients)
    }

    /// Replaces every field except the id.
    ///
    /// ## Returns
    /// * `Ok(true)` - A row was updated
    /// * `Ok(false)` - No client has this id (nothing changed)
    pub async fn update(&self, client: &Client) -> DbResult<bool> {
        debug!(id = client.id, "Updating client");

        let result = sqlx::query(
            r#"
            UPDATE clients SET
                first_name = ?2,
                last_name = ?3,
                address = ?4
            WHERE id = ?1
            "#,
        )
        .bind(client.id)
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.address)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a client by id. Returns the number of rows removed (0 or 1).
    pub async fn delete_by_id(&self, id: i64) -> DbResult<u64> {
        Self::delete_by_id_with(&self.pool, id).await
    }

    /// [`delete_by_id`](Self::delete_by_id) on any executor (pool or transaction).
    pub async fn delete_by_id_with<'e, E>(executor: E, id: i64) -> DbResult<u64>
    where
        E: SqliteExecutor<'e>,
    {
        debug!(id, "Deleting client");

        let result = sqlx::query("DELETE FROM clients WHERE id = ?1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use crate::DbError;
    use bookstore_core::Client;

    fn client(id: i64, first: &str) -> Client {
        Client {
            id,
            first_name: first.to_string(),
            last_name: "Hopper".to_string(),
            address: "1 Navy Way".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.clients();

        repo.insert(&client(2, "Grace")).await.unwrap();
        repo.insert(&client(1, "Ada")).await.unwrap();

        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(client(2, "Grace")));
        assert_eq!(repo.find_by_id(3).await.unwrap(), None);

        let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_reported() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.clients();

        repo.insert(&client(1, "Ada")).await.unwrap();
        let err = repo.insert(&client(1, "Grace")).await.unwrap_err();

        match err {
            DbError::DuplicateKey { field, value } => {
                assert_eq!(field, "Client id");
                assert_eq!(value, "1");
            }
            other => panic!("expected DuplicateKey, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_reports_missing_row() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.clients();

        repo.insert(&client(1, "Ada")).await.unwrap();

        assert!(repo.update(&client(1, "Augusta")).await.unwrap());
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().first_name, "Augusta");

        assert!(!repo.update(&client(9, "Nobody")).await.unwrap());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_counts_rows() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.clients();

        repo.insert(&client(1, "Ada")).await.unwrap();

        assert_eq!(repo.delete_by_id(1).await.unwrap(), 1);
        assert_eq!(repo.delete_by_id(1).await.unwrap(), 0);
    }
}
