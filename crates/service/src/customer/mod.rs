//! Customer lifecycle: transfer objects, persistence, and the service enforcing
//! existence checks.

pub mod repository;
pub mod service;
pub mod transfer;

pub use repository::{CustomerRepository, SeaOrmCustomerRepository};
pub use service::CustomerService;
pub use transfer::{CreateCustomerRequest, CustomerSearchRequest, UpdateCustomerRequest};
