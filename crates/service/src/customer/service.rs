use std::sync::Arc;

use models::customer;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

use super::repository::CustomerRepository;
use super::transfer::{CreateCustomerRequest, CustomerSearchRequest, UpdateCustomerRequest};

const ENTITY: &str = "customer";

/// Application service encapsulating customer business rules.
/// Validation runs before any storage call; missing ids surface as `ResourceNotFound`.
pub struct CustomerService<R: CustomerRepository> {
    repo: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, request))]
    pub async fn create_customer(&self, request: CreateCustomerRequest) -> Result<customer::Model, ServiceError> {
        request.validate()?;
        let created = self.repo.create(&request.first_name, &request.last_name).await?;
        info!(customer_id = created.id, "customer_created");
        Ok(created)
    }

    pub async fn get_customer(&self, id: i32) -> Result<customer::Model, ServiceError> {
        if id <= 0 {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    /// Overwrite the fields present in `request`; absent fields keep their value.
    #[instrument(skip(self, request))]
    pub async fn update_customer(&self, id: i32, request: UpdateCustomerRequest) -> Result<customer::Model, ServiceError> {
        request.validate()?;
        if id <= 0 {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        let updated = self
            .repo
            .update(id, &request)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(customer_id = id, "customer_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: i32) -> Result<(), ServiceError> {
        if id <= 0 || !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(customer_id = id, "customer_deleted");
        Ok(())
    }

    pub async fn list_customers(
        &self,
        search: CustomerSearchRequest,
        page: PageRequest<customer::Column>,
    ) -> Result<Page<customer::Model>, ServiceError> {
        self.repo.search(search.to_filter(), page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::SeaOrmCustomerRepository;
    use crate::test_support::get_db;
    use models::query::SortOrder;

    async fn service() -> anyhow::Result<CustomerService<SeaOrmCustomerRepository>> {
        let db = get_db().await?;
        Ok(CustomerService::new(Arc::new(SeaOrmCustomerRepository::new(db))))
    }

    async fn create(svc: &CustomerService<SeaOrmCustomerRepository>) -> customer::Model {
        svc.create_customer(CreateCustomerRequest::new("Popescu", "Elena")).await.unwrap()
    }

    #[tokio::test]
    async fn create_customer_returns_customer_with_id() -> anyhow::Result<()> {
        let svc = service().await?;
        let a = create(&svc).await;
        let b = create(&svc).await;
        assert!(a.id > 0);
        assert_ne!(a.id, b.id);
        Ok(())
    }

    #[tokio::test]
    async fn create_customer_with_blank_name_is_invalid() -> anyhow::Result<()> {
        let svc = service().await?;
        let err = svc.create_customer(CreateCustomerRequest::new("", "Elena")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));
        let page = svc.list_customers(CustomerSearchRequest::default(), PageRequest::default()).await?;
        assert_eq!(page.total_elements, 0);
        Ok(())
    }

    #[tokio::test]
    async fn get_customer_with_unknown_id_is_not_found() -> anyhow::Result<()> {
        let svc = service().await?;
        assert!(matches!(svc.get_customer(0).await, Err(ServiceError::ResourceNotFound { id: 0, .. })));
        assert!(matches!(svc.get_customer(4242).await, Err(ServiceError::ResourceNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn get_customer_with_existing_id_returns_matching_customer() -> anyhow::Result<()> {
        let svc = service().await?;
        let created = create(&svc).await;
        let found = svc.get_customer(created.id).await?;
        assert_eq!(found, created);
        assert_eq!(found.first_name, "Popescu");
        assert_eq!(found.last_name, "Elena");
        Ok(())
    }

    #[tokio::test]
    async fn update_customer_with_all_fields() -> anyhow::Result<()> {
        let svc = service().await?;
        let created = create(&svc).await;
        let request = UpdateCustomerRequest {
            first_name: Some(format!("{}_Edited", created.first_name)),
            last_name: Some(format!("{}_Edited", created.last_name)),
        };
        let updated = svc.update_customer(created.id, request.clone()).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(Some(updated.first_name.clone()), request.first_name);
        assert_eq!(Some(updated.last_name.clone()), request.last_name);
        assert_eq!(svc.get_customer(created.id).await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn update_customer_with_some_fields_leaves_others_unchanged() -> anyhow::Result<()> {
        let svc = service().await?;
        let created = create(&svc).await;
        let request = UpdateCustomerRequest { first_name: None, last_name: Some("Ionescu".into()) };
        let updated = svc.update_customer(created.id, request).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.first_name, created.first_name);
        assert_eq!(updated.last_name, "Ionescu");

        let untouched = svc.update_customer(created.id, UpdateCustomerRequest::default()).await?;
        assert_eq!(untouched, updated);
        Ok(())
    }

    #[tokio::test]
    async fn update_customer_with_unknown_id_is_not_found_and_mutates_nothing() -> anyhow::Result<()> {
        let svc = service().await?;
        let created = create(&svc).await;
        let request = UpdateCustomerRequest { first_name: Some("Nobody".into()), last_name: None };
        let err = svc.update_customer(created.id + 1000, request).await.unwrap_err();
        assert!(matches!(err, ServiceError::ResourceNotFound { .. }));
        assert_eq!(svc.get_customer(created.id).await?, created);
        Ok(())
    }

    #[tokio::test]
    async fn delete_customer_removes_it() -> anyhow::Result<()> {
        let svc = service().await?;
        let created = create(&svc).await;
        svc.delete_customer(created.id).await?;
        assert!(matches!(svc.get_customer(created.id).await, Err(ServiceError::ResourceNotFound { .. })));
        assert!(matches!(svc.delete_customer(created.id).await, Err(ServiceError::ResourceNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn list_customers_filters_and_sorts() -> anyhow::Result<()> {
        let svc = service().await?;
        svc.create_customer(CreateCustomerRequest::new("Ana", "Popescu")).await?;
        svc.create_customer(CreateCustomerRequest::new("Bogdan", "Ionescu")).await?;
        svc.create_customer(CreateCustomerRequest::new("Carmen", "Popa")).await?;

        let search = CustomerSearchRequest { first_name: None, last_name: Some("Pop".into()) };
        let page = PageRequest::of(0, 10).sorted_by(SortOrder::desc(customer::Column::FirstName));
        let found = svc.list_customers(search, page).await?;
        let names: Vec<_> = found.content.iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(names, vec!["Carmen", "Ana"]);
        assert_eq!(found.total_elements, 2);
        assert_eq!(found.total_pages, 1);
        Ok(())
    }

    #[tokio::test]
    async fn list_customers_with_huge_page_index_is_empty() -> anyhow::Result<()> {
        let svc = service().await?;
        create(&svc).await;
        let found = svc.list_customers(CustomerSearchRequest::default(), PageRequest::of(u64::MAX, 100)).await?;
        assert!(found.is_empty());
        assert_eq!(found.total_elements, 1);
        Ok(())
    }
}
