use models::product::{self, Column};
use models::query::Filter;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl CreateProductRequest {
    pub fn new(name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self { name: name.into(), price, quantity }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        product::validate_name(&self.name)?;
        product::validate_price(self.price)?;
        product::validate_quantity(self.quantity)?;
        Ok(())
    }
}

/// Absent fields are left unchanged.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(n) = &self.name { product::validate_name(n)?; }
        if let Some(p) = self.price { product::validate_price(p)?; }
        if let Some(q) = self.quantity { product::validate_quantity(q)?; }
        Ok(())
    }

    pub fn is_empty(&self) -> bool { self.name.is_none() && self.price.is_none() && self.quantity.is_none() }
}

/// Product search criteria. Every present field narrows the result (logical AND).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProductSearchRequest {
    #[serde(default)]
    pub partial_name: Option<String>,
    #[serde(default)]
    pub minimum_price: Option<f64>,
    #[serde(default)]
    pub maximum_price: Option<f64>,
    #[serde(default)]
    pub minimum_quantity: Option<i32>,
}

impl ProductSearchRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        for (field, v) in [("minimum_price", self.minimum_price), ("maximum_price", self.maximum_price)] {
            if let Some(p) = v {
                if !p.is_finite() {
                    return Err(ServiceError::invalid(format!("{field} must be a finite number")));
                }
            }
        }
        if let (Some(lo), Some(hi)) = (self.minimum_price, self.maximum_price) {
            if lo > hi {
                return Err(ServiceError::invalid("minimum_price must not exceed maximum_price"));
            }
        }
        Ok(())
    }

    /// Build the conjunctive filter. The four common shapes map onto the named
    /// presets in `models::product`; anything else is composed field by field.
    pub fn to_filter(&self) -> Filter<Column> {
        let name = self.partial_name.as_deref().filter(|s| !s.is_empty());
        match (name, self.minimum_price, self.maximum_price, self.minimum_quantity) {
            (Some(n), None, None, None) => product::name_containing(n),
            (Some(n), None, None, Some(q)) => product::name_containing_and_min_quantity(n, q),
            (None, Some(lo), Some(hi), Some(q)) => product::price_between_and_min_quantity(lo, hi, q),
            (Some(n), Some(lo), Some(hi), Some(q)) => {
                product::name_containing_price_between_and_min_quantity(n, lo, hi, q)
            }
            (name, lo, hi, q) => {
                let mut filter = Filter::new();
                if let Some(n) = name { filter = filter.contains(Column::Name, n); }
                filter = match (lo, hi) {
                    (Some(lo), Some(hi)) => filter.between(Column::Price, lo, hi),
                    (Some(lo), None) => filter.gte(Column::Price, lo),
                    (None, Some(hi)) => filter.lte(Column::Price, hi),
                    (None, None) => filter,
                };
                if let Some(q) = q { filter = filter.gte(Column::Quantity, q); }
                filter
            }
        }
    }
}
