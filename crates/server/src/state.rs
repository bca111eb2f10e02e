use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::customer::{CustomerService, SeaOrmCustomerRepository};
use service::product::{ProductService, SeaOrmProductRepository};

/// Services shared by all handlers, composed explicitly from one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerService<SeaOrmCustomerRepository>>,
    pub products: Arc<ProductService<SeaOrmProductRepository>>,
}

impl AppState {
    pub fn from_db(db: DatabaseConnection) -> Self {
        let customers = CustomerService::new(Arc::new(SeaOrmCustomerRepository::new(db.clone())));
        let products = ProductService::new(Arc::new(SeaOrmProductRepository::new(db)));
        Self { customers: Arc::new(customers), products: Arc::new(products) }
    }
}
