//! Query-string pieces shared by list endpoints.

use models::query::SortOrder;
use sea_orm::ColumnTrait;
use service::pagination::{PageRequest, Pagination, DEFAULT_PAGE_SIZE};

use crate::errors::JsonApiError;

#[derive(Debug, Default)]
pub struct PageParams {
    /// 0-based page index
    pub page: Option<u64>,
    pub size: Option<u64>,
    /// `field` or `field,asc|desc`, several separated by `;`
    pub sort: Option<String>,
}

impl PageParams {
    pub fn into_request<C: ColumnTrait>(self) -> Result<PageRequest<C>, JsonApiError> {
        let sort = match self.sort.as_deref() {
            Some(s) => SortOrder::parse_list(s).map_err(|e| JsonApiError::bad_request(e.to_string()))?,
            None => Vec::new(),
        };
        let pagination = Pagination::new(self.page.unwrap_or(0), self.size.unwrap_or(DEFAULT_PAGE_SIZE));
        Ok(PageRequest::new(pagination, sort))
    }
}
