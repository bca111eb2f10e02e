//! Product lifecycle plus the filtered, paginated product search.

pub mod repository;
pub mod service;
pub mod transfer;

pub use repository::{ProductRepository, SeaOrmProductRepository};
pub use service::ProductService;
pub use transfer::{CreateProductRequest, ProductSearchRequest, UpdateProductRequest};
