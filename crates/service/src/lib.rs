//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access via repository traits.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Reports failures as `ServiceError` values, never panics.

pub mod errors;
pub mod pagination;
pub mod customer;
pub mod product;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use pagination::{Page, PageRequest, Pagination};
