use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shopping_item::model::ShoppingItem;
use business::domain::shopping_item::repository::ShoppingItemRepository;

pub const ORANGE_JUICE_ID: Uuid = Uuid::from_u128(0xab2bd817_98cd_4cf3_a80a_53ea0cd9c200);
pub const DIARY_MILK_ID: Uuid = Uuid::from_u128(0x815accac_fd5b_478a_a9d6_f171a2f6ae7f);
pub const FROZEN_PIZZA_ID: Uuid = Uuid::from_u128(0x33704c4a_5b87_464c_bfb6_51971b4d18ad);

/// Process-local shopping item store. Items are kept in insertion order.
#[derive(Debug, Default)]
pub struct ShoppingItemRepositoryInMemory {
    items: RwLock<Vec<ShoppingItem>>,
}

impl ShoppingItemRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ShoppingItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Store pre-filled with three sample items under fixed identifiers.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self::with_items(vec![
            ShoppingItem::from_repository(
                ORANGE_JUICE_ID,
                "Orange Juice".to_string(),
                "Orange Tree".to_string(),
                Decimal::new(500, 2),
                now,
            ),
            ShoppingItem::from_repository(
                DIARY_MILK_ID,
                "Diary Milk".to_string(),
                "Cow".to_string(),
                Decimal::new(400, 2),
                now,
            ),
            ShoppingItem::from_repository(
                FROZEN_PIZZA_ID,
                "Frozen Pizza".to_string(),
                "Uncle Mickey".to_string(),
                Decimal::new(1200, 2),
                now,
            ),
        ])
    }
}

#[async_trait]
impl ShoppingItemRepository for ShoppingItemRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError> {
        Ok(self.items.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingItem, RepositoryError> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, item: &ShoppingItem) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => items.push(item.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
