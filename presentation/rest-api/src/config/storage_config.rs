use std::env;

use persistence::db::DatabaseConfig;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Where shopping items are kept
#[derive(Debug, Clone)]
pub enum StorageConfig {
    InMemory { seed_sample_items: bool },
    Postgres {
        database: DatabaseConfig,
        migrations_path: String,
    },
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (optional; in-memory storage when unset)
    /// - DATABASE_MIGRATIONS_PATH: Migrations directory (default: "infrastructure/persistence/migrations")
    /// - SEED_SAMPLE_ITEMS: "true" or "1" to pre-fill the in-memory store (default: false)
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MIGRATIONS_PATH").ok(),
            env::var("SEED_SAMPLE_ITEMS").ok(),
        )
    }

    fn from_vars(
        database_url: Option<String>,
        migrations_path: Option<String>,
        seed_sample_items: Option<String>,
    ) -> Self {
        match database_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => StorageConfig::Postgres {
                database: DatabaseConfig::new(url),
                migrations_path: migrations_path
                    .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
            },
            None => StorageConfig::InMemory {
                seed_sample_items: seed_sample_items
                    .is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1")),
            },
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            StorageConfig::InMemory { .. } => "in-memory",
            StorageConfig::Postgres { .. } => "postgres",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_empty_in_memory_storage() {
        let config = StorageConfig::from_vars(None, None, None);

        assert!(matches!(
            config,
            StorageConfig::InMemory {
                seed_sample_items: false
            }
        ));
        assert_eq!(config.backend_name(), "in-memory");
    }

    #[test]
    fn should_seed_in_memory_storage_when_requested() {
        let config = StorageConfig::from_vars(None, None, Some("TRUE".to_string()));

        assert!(matches!(
            config,
            StorageConfig::InMemory {
                seed_sample_items: true
            }
        ));
    }

    #[test]
    fn should_use_postgres_when_database_url_set() {
        let config = StorageConfig::from_vars(
            Some("postgres://localhost/cart".to_string()),
            None,
            Some("true".to_string()),
        );

        let StorageConfig::Postgres {
            database,
            migrations_path,
        } = config
        else {
            panic!("expected postgres storage");
        };
        assert_eq!(database.connection_string, "postgres://localhost/cart");
        assert_eq!(migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_ignore_blank_database_url() {
        let config = StorageConfig::from_vars(Some("  ".to_string()), None, None);

        assert_eq!(config.backend_name(), "in-memory");
    }
}
