//! Service layer providing product CRUD operations on top of models.
//! - Separates the transport layer from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Persistence sits behind the `ProductRepository` trait.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod product;
