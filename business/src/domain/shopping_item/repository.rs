use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::ShoppingItem;

#[async_trait]
pub trait ShoppingItemRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingItem, RepositoryError>;
    async fn save(&self, item: &ShoppingItem) -> Result<(), RepositoryError>;
    /// Fails with `RepositoryError::NotFound` when no item had this id.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
