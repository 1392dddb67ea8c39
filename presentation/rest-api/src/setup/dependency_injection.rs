use std::sync::Arc;

use logger::TracingLogger;
use persistence::db::{create_postgres_pool, run_migrations};
use persistence::shopping_item::in_memory::ShoppingItemRepositoryInMemory;
use persistence::shopping_item::repository::ShoppingItemRepositoryPostgres;

use business::application::shopping_item::service::ShoppingCartServiceImpl;
use business::domain::shopping_item::repository::ShoppingItemRepository;

use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub shopping_cart_api: crate::api::shopping_item::routes::ShoppingCartApi,
}

impl DependencyContainer {
    pub async fn new(storage: &StorageConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(storage.backend_name());

        // Infrastructure adapters
        let repository: Arc<dyn ShoppingItemRepository> = match storage {
            StorageConfig::InMemory { seed_sample_items } => {
                tracing::info!(seed_sample_items, "using in-memory shopping item storage");
                if *seed_sample_items {
                    Arc::new(ShoppingItemRepositoryInMemory::seeded())
                } else {
                    Arc::new(ShoppingItemRepositoryInMemory::new())
                }
            }
            StorageConfig::Postgres {
                database,
                migrations_path,
            } => {
                tracing::info!("using postgres shopping item storage");
                let pool = create_postgres_pool(database).await?;
                run_migrations(&pool, migrations_path).await?;
                Arc::new(ShoppingItemRepositoryPostgres::new(pool))
            }
        };

        let shopping_cart_service = Arc::new(ShoppingCartServiceImpl { repository, logger });

        let shopping_cart_api =
            crate::api::shopping_item::routes::ShoppingCartApi::new(shopping_cart_service);

        Ok(Self {
            health_api,
            shopping_cart_api,
        })
    }
}
