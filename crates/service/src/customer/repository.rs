use async_trait::async_trait;
use models::customer;
use models::query::{apply_sort, Filter};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

use super::transfer::UpdateCustomerRequest;

/// Storage boundary for customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, first_name: &str, last_name: &str) -> Result<customer::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<customer::Model>, ServiceError>;
    /// Apply the present fields in one transaction; `None` when `id` does not exist.
    async fn update(&self, id: i32, changes: &UpdateCustomerRequest) -> Result<Option<customer::Model>, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn search(
        &self,
        filter: Filter<customer::Column>,
        page: PageRequest<customer::Column>,
    ) -> Result<Page<customer::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn create(&self, first_name: &str, last_name: &str) -> Result<customer::Model, ServiceError> {
        Ok(customer::create(&self.db, first_name, last_name).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<customer::Model>, ServiceError> {
        Ok(customer::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn update(&self, id: i32, changes: &UpdateCustomerRequest) -> Result<Option<customer::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let mut select = customer::Entity::find_by_id(id);
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
        let mut am: customer::ActiveModel = existing.into();
        if let Some(f) = &changes.first_name { am.first_name = Set(f.clone()); }
        if let Some(l) = &changes.last_name { am.last_name = Set(l.clone()); }
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = customer::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn search(
        &self,
        filter: Filter<customer::Column>,
        page: PageRequest<customer::Column>,
    ) -> Result<Page<customer::Model>, ServiceError> {
        let (page_idx, per_page) = page.pagination.normalize();
        // id as the final key keeps page boundaries stable across equal sort values
        let select = apply_sort(customer::Entity::find().filter(filter.into_condition()), &page.sort)
            .order_by_asc(customer::Column::Id);
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
