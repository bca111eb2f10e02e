use std::sync::Arc;

use models::product;
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

use super::repository::ProductRepository;
use super::transfer::{CreateProductRequest, ProductSearchRequest, UpdateProductRequest};

const ENTITY: &str = "product";

/// Application service encapsulating product business rules.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, request))]
    pub async fn create_product(&self, request: CreateProductRequest) -> Result<product::Model, ServiceError> {
        request.validate()?;
        let created = self.repo.create(&request.name, request.price, request.quantity).await?;
        info!(product_id = created.id, "product_created");
        Ok(created)
    }

    pub async fn get_product(&self, id: i32) -> Result<product::Model, ServiceError> {
        if id <= 0 {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    #[instrument(skip(self, request))]
    pub async fn update_product(&self, id: i32, request: UpdateProductRequest) -> Result<product::Model, ServiceError> {
        request.validate()?;
        if id <= 0 {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        let updated = self
            .repo
            .update(id, &request)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(product_id = id, "product_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        if id <= 0 || !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(product_id = id, "product_deleted");
        Ok(())
    }

    pub async fn search_products(
        &self,
        request: ProductSearchRequest,
        page: PageRequest<product::Column>,
    ) -> Result<Page<product::Model>, ServiceError> {
        request.validate()?;
        let filter = request.to_filter();
        debug!(criteria = filter.criteria().len(), page = page.pagination.page, "product_search");
        self.repo.search(filter, page).await
    }
}
