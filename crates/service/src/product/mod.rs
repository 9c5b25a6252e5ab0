//! Product module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Product, ProductInput};
pub use repository::ProductRepository;
pub use service::ProductService;
