use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Domain product (business view). `id` is `None` until the store assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl Product {
    /// Overlay the mutable fields from `input`; the identity is kept.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.price = input.price;
        self.description = input.description;
    }
}

impl From<models::product::Model> for Product {
    fn from(m: models::product::Model) -> Self {
        Self { id: Some(m.id), name: m.name, price: m.price, description: m.description }
    }
}

/// Create/update request body. An `id` sent by the client is not part of
/// the input and is dropped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl ProductInput {
    /// Field checks applied at the request boundary.
    pub fn validate(&self) -> Result<(), ServiceError> {
        models::product::validate_name(&self.name)?;
        models::product::validate_price(self.price)?;
        Ok(())
    }

    /// A product that has not been stored yet.
    pub fn into_new_product(self) -> Product {
        Product { id: None, name: self.name, price: self.price, description: self.description }
    }
}
