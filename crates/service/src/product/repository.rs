use async_trait::async_trait;

use super::domain::Product;
use crate::errors::ServiceError;

/// Repository abstraction for product persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All stored products, ascending by id.
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError>;
    /// Insert when `id` is unset, otherwise overwrite the existing record.
    /// Saving an id that is no longer stored fails with `NotFound`.
    async fn save(&self, product: Product) -> Result<Product, ServiceError>;
    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i64, Product>,
        last_id: i64,
    }

    #[derive(Default)]
    pub struct InMemoryProductRepository {
        table: Mutex<Table>,
    }

    impl InMemoryProductRepository {
        /// Seed with existing products; rows without an id get one assigned.
        pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
            let mut table = Table::default();
            let mut pending = Vec::new();
            for p in products {
                match p.id {
                    Some(id) => {
                        table.last_id = table.last_id.max(id);
                        table.rows.insert(id, p);
                    }
                    None => pending.push(p),
                }
            }
            for mut p in pending {
                table.last_id += 1;
                p.id = Some(table.last_id);
                table.rows.insert(table.last_id, p);
            }
            Self { table: Mutex::new(table) }
        }

        fn lock(&self) -> MutexGuard<'_, Table> {
            self.table.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
            Ok(self.lock().rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
            Ok(self.lock().rows.get(&id).cloned())
        }

        async fn save(&self, mut product: Product) -> Result<Product, ServiceError> {
            let mut table = self.lock();
            match product.id {
                None => {
                    table.last_id += 1;
                    let id = table.last_id;
                    product.id = Some(id);
                    table.rows.insert(id, product.clone());
                }
                Some(id) => {
                    let Some(slot) = table.rows.get_mut(&id) else {
                        return Err(ServiceError::not_found("product"));
                    };
                    *slot = product.clone();
                }
            }
            Ok(product)
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock().rows.remove(&id).is_some())
        }
    }
}
