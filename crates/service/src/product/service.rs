use std::sync::Arc;

use tracing::{debug, instrument};

use super::domain::Product;
use super::repository::ProductRepository;
use crate::errors::ServiceError;

/// Stateless façade over the product store. Every call is a single
/// delegation to the repository; no checks are added here.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ServiceError> {
        let list = self.repo.find_all().await?;
        debug!(count = list.len(), "products listed");
        Ok(list)
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Insert (no id) or overwrite (id set).
    ///
    /// # Examples
    /// ```
    /// use service::product::{Product, ProductService, repository::mock::InMemoryProductRepository};
    /// use std::sync::Arc;
    /// let svc = ProductService::new(Arc::new(InMemoryProductRepository::default()));
    /// let p = Product { id: None, name: "New Product".into(), price: 150.0, description: None };
    /// let saved = tokio_test::block_on(svc.save_product(p)).unwrap();
    /// assert_eq!(saved.id, Some(1));
    /// ```
    #[instrument(skip(self, product), fields(id = ?product.id))]
    pub async fn save_product(&self, product: Product) -> Result<Product, ServiceError> {
        self.repo.save(product).await
    }

    /// Returns whether a record was removed.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<bool, ServiceError> {
        self.repo.delete_by_id(id).await
    }
}
