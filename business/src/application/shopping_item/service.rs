use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::service::{AddShoppingItemParams, ShoppingCartService};

pub struct ShoppingCartServiceImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

fn not_found_or_repository(error: RepositoryError) -> ShoppingItemError {
    match error {
        RepositoryError::NotFound => ShoppingItemError::NotFound,
        other => ShoppingItemError::Repository(other),
    }
}

#[async_trait]
impl ShoppingCartService for ShoppingCartServiceImpl {
    async fn get_all_items(&self) -> Result<Vec<ShoppingItem>, ShoppingItemError> {
        self.logger.info("Getting all shopping items");
        let items = self.repository.get_all().await?;
        self.logger
            .info(&format!("Retrieved {} shopping items", items.len()));
        Ok(items)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger
            .info(&format!("Fetching shopping item by id: {}", id));

        self.repository
            .get_by_id(id)
            .await
            .map_err(not_found_or_repository)
    }

    async fn add(&self, params: AddShoppingItemParams) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger
            .info(&format!("Adding shopping item: {}", params.name));

        let item = ShoppingItem::new(params.name, params.manufacturer, params.price)?;
        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Shopping item added: {}", item.id));
        Ok(item)
    }

    async fn remove(&self, id: Uuid) -> Result<(), ShoppingItemError> {
        self.logger
            .info(&format!("Removing shopping item: {}", id));

        self.repository
            .delete(id)
            .await
            .map_err(not_found_or_repository)?;

        self.logger
            .info(&format!("Shopping item removed: {}", id));
        Ok(())
    }
}
