use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::product::domain::Product;
use crate::product::repository::ProductRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = models::product::find_all(&self.db).await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        Ok(models::product::find_by_id(&self.db, id).await?.map(Product::from))
    }

    async fn save(&self, product: Product) -> Result<Product, ServiceError> {
        let description = product.description.as_deref();
        let saved = match product.id {
            None => models::product::insert(&self.db, &product.name, product.price, description).await?,
            Some(id) => models::product::update(&self.db, id, &product.name, product.price, description).await?,
        };
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::product::delete_by_id(&self.db, id).await?)
    }
}
