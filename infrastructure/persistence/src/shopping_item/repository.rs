use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shopping_item::model::ShoppingItem;
use business::domain::shopping_item::repository::ShoppingItemRepository;

use super::entity::ShoppingItemEntity;

pub struct ShoppingItemRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(%error, "shopping_items query failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ShoppingItemRepository for ShoppingItemRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingItemEntity>(
            "SELECT id, name, manufacturer, price, created_at FROM shopping_items ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingItem, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingItemEntity>(
            "SELECT id, name, manufacturer, price, created_at FROM shopping_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, item: &ShoppingItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO shopping_items (id, name, manufacturer, price, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                manufacturer = EXCLUDED.manufacturer,
                price = EXCLUDED.price"#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.manufacturer)
        .bind(item.price)
        .bind(item.created_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shopping_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
