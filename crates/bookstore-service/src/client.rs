//! # Client Service
//!
//! Validated CRUD and filtering for clients.
//!
//! Deleting a client together with its purchases lives in
//! [`PurchaseService::cascade_delete_client`](crate::PurchaseService::cascade_delete_client).

use tracing::{debug, info};

use bookstore_core::validation::validate_client;
use bookstore_core::Client;
use bookstore_db::Database;

use crate::error::ServiceResult;

/// Client operations.
#[derive(Debug, Clone)]
pub struct ClientService {
    db: Database,
}

impl ClientService {
    pub fn new(db: Database) -> Self {
        ClientService { db }
    }

    /// Validates and stores a new client.
    ///
    /// ## Errors
    /// * Validation - one entry per invalid field
    /// * Storage `DuplicateKey` - the id is taken
    pub async fn add(&self, client: Client) -> ServiceResult<Client> {
        validate_client(&client)?;

        let stored = self.db.clients().insert(&client).await?;
        info!(id = stored.id, "Client added");
        Ok(stored)
    }

    /// Every client, ordered by id.
    pub async fn list(&self) -> ServiceResult<Vec<Client>> {
        Ok(self.db.clients().find_all().await?)
    }

    /// Validates and replaces every field except the id.
    ///
    /// An unknown id is not an error; nothing changes.
    pub async fn update(&self, client: Client) -> ServiceResult<()> {
        validate_client(&client)?;

        if !self.db.clients().update(&client).await? {
            debug!(id = client.id, "Update skipped: no such client");
        }
        Ok(())
    }

    /// Removes one client. Purchases are left alone.
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if self.db.clients().delete_by_id(id).await? == 0 {
            debug!(id, "Delete skipped: no such client");
        }
        Ok(())
    }

    /// Clients whose first name, last name or address contains `needle`
    /// (case-sensitive).
    pub async fn filter(&self, needle: &str) -> ServiceResult<Vec<Client>> {
        let clients = self.list().await?;
        Ok(clients.into_iter().filter(|c| c.matches(needle)).collect())
    }

    pub async fn find_one(&self, id: i64) -> ServiceResult<Option<Client>> {
        Ok(self.db.clients().find_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_db::DbConfig;

    async fn service() -> ClientService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        ClientService::new(db)
    }

    fn client(id: i64, first: &str, last: &str, address: &str) -> Client {
        Client {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: address.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_without_writing() {
        let service = service().await;

        let err = service.add(client(1, "", "Lovelace", "")).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(
            err.validation_errors().unwrap().fields(),
            vec!["first_name", "address"]
        );
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_storage_error() {
        let service = service().await;

        service.add(client(1, "Ada", "Lovelace", "London")).await.unwrap();
        let err = service
            .add(client(1, "Grace", "Hopper", "Arlington"))
            .await
            .unwrap_err();

        assert!(!err.is_validation());
        assert!(err.to_string().contains("Duplicate"));
    }

    #[tokio::test]
    async fn test_update_missing_is_noop() {
        let service = service().await;

        service.add(client(1, "Ada", "Lovelace", "London")).await.unwrap();
        service.update(client(2, "Grace", "Hopper", "Arlington")).await.unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all, vec![client(1, "Ada", "Lovelace", "London")]);
    }

    #[tokio::test]
    async fn test_update_validates() {
        let service = service().await;

        service.add(client(1, "Ada", "Lovelace", "London")).await.unwrap();
        let err = service.update(client(1, "Ada", " ", "London")).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.find_one(1).await.unwrap().unwrap().last_name, "Lovelace");
    }

    #[tokio::test]
    async fn test_delete_twice_never_errors() {
        let service = service().await;

        service.add(client(1, "Ada", "Lovelace", "London")).await.unwrap();
        service.delete(1).await.unwrap();
        service.delete(1).await.unwrap();

        assert_eq!(service.find_one(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_filter_matches_any_field_case_sensitive() {
        let service = service().await;

        service.add(client(1, "Ada", "Lovelace", "London")).await.unwrap();
        service.add(client(2, "Grace", "Hopper", "Arlington")).await.unwrap();
        service.add(client(3, "Alan", "Turing", "Wilmslow")).await.unwrap();

        let ids = |v: Vec<Client>| v.into_iter().map(|c| c.id).collect::<Vec<_>>();

        assert_eq!(ids(service.filter("Lo").await.unwrap()), vec![1]);
        assert_eq!(ids(service.filter("ing").await.unwrap()), vec![2, 3]);
        assert!(service.filter("lovelace").await.unwrap().is_empty());
        assert_eq!(service.filter("").await.unwrap().len(), 3);
    }
}
