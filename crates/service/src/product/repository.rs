use async_trait::async_trait;
use models::product;
use models::query::{apply_sort, Filter};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

use super::transfer::UpdateProductRequest;

/// Storage boundary for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, name: &str, price: f64, quantity: i32) -> Result<product::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<product::Model>, ServiceError>;
    /// Apply the present fields in one transaction; `None` when `id` does not exist.
    async fn update(&self, id: i32, changes: &UpdateProductRequest) -> Result<Option<product::Model>, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn search(
        &self,
        filter: Filter<product::Column>,
        page: PageRequest<product::Column>,
    ) -> Result<Page<product::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn create(&self, name: &str, price: f64, quantity: i32) -> Result<product::Model, ServiceError> {
        Ok(product::create(&self.db, name, price, quantity).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        Ok(product::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn update(&self, id: i32, changes: &UpdateProductRequest) -> Result<Option<product::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let mut select = product::Entity::find_by_id(id);
        if txn.get_database_backend() == DbBackend::Postgres {
            select = select.lock_exclusive();
        }
        let Some(existing) = select.one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        if changes.is_empty() {
            txn.commit().await?;
            return Ok(Some(existing));
        }
        let mut am: product::ActiveModel = existing.into();
        if let Some(n) = &changes.name { am.name = Set(n.clone()); }
        if let Some(p) = changes.price { am.price = Set(p); }
        if let Some(q) = changes.quantity { am.quantity = Set(q); }
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = product::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn search(
        &self,
        filter: Filter<product::Column>,
        page: PageRequest<product::Column>,
    ) -> Result<Page<product::Model>, ServiceError> {
        let (page_idx, per_page) = page.pagination.normalize();
        let select = apply_sort(product::Entity::find().filter(filter.into_condition()), &page.sort)
            .order_by_asc(product::Column::Id);
        let paginator = select.paginate(&self.db, per_page);
        let totals = paginator.num_items_and_pages().await?;
        // past the last page the offset may not even fit in u64
        let content = if page_idx < totals.number_of_pages {
            paginator.fetch_page(page_idx).await?
        } else {
            Vec::new()
        };
        Ok(Page {
            content,
            page: page_idx,
            size: per_page,
            total_elements: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }
}
