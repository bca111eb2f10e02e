use models::{customer, query::Filter};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
}

impl CreateCustomerRequest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into() }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        customer::validate_name("first_name", &self.first_name)?;
        customer::validate_name("last_name", &self.last_name)?;
        Ok(())
    }
}

/// Absent fields are left unchanged.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateCustomerRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UpdateCustomerRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(f) = &self.first_name { customer::validate_name("first_name", f)?; }
        if let Some(l) = &self.last_name { customer::validate_name("last_name", l)?; }
        Ok(())
    }

    pub fn is_empty(&self) -> bool { self.first_name.is_none() && self.last_name.is_none() }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CustomerSearchRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl CustomerSearchRequest {
    pub fn to_filter(&self) -> Filter<customer::Column> {
        let mut filter = Filter::new();
        if let Some(f) = self.first_name.as_deref().filter(|s| !s.is_empty()) {
            filter = filter.contains(customer::Column::FirstName, f);
        }
        if let Some(l) = self.last_name.as_deref().filter(|s| !s.is_empty()) {
            filter = filter.contains(customer::Column::LastName, l);
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_deserializes_missing_fields_as_none() {
        let req: UpdateCustomerRequest = serde_json::from_str(r#"{"last_name":"Ionescu"}"#).unwrap();
        assert!(req.first_name.is_none());
        assert_eq!(req.last_name.as_deref(), Some("Ionescu"));
        assert!(!req.is_empty());
    }

    #[test]
    fn update_request_rejects_blank_present_field() {
        let req = UpdateCustomerRequest { first_name: Some(" ".into()), last_name: None };
        assert!(matches!(req.validate(), Err(ServiceError::InvalidRequest(_))));
    }

    #[test]
    fn search_request_skips_empty_filters() {
        let req = CustomerSearchRequest { first_name: Some(String::new()), last_name: Some("esc".into()) };
        assert_eq!(req.to_filter().criteria().len(), 1);
        assert!(CustomerSearchRequest::default().to_filter().is_empty());
    }
}
