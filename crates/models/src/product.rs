use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::query::Filter;

pub const MAX_NAME_LEN: usize = 256;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(errors::ModelError::Validation(format!("name longer than {MAX_NAME_LEN} characters")));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() {
        return Err(errors::ModelError::Validation("price must be a finite number".into()));
    }
    if price < 0.0 {
        return Err(errors::ModelError::Validation("price must be >= 0".into()));
    }
    Ok(())
}

pub fn validate_quantity(quantity: i32) -> Result<(), errors::ModelError> {
    if quantity < 0 {
        return Err(errors::ModelError::Validation("quantity must be >= 0".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, price: f64, quantity: i32) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_price(price)?;
    validate_quantity(quantity)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        quantity: Set(quantity),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

// Named searches. Each one is a fixed preset of the general builder.

pub fn name_containing(partial_name: &str) -> Filter<Column> {
    Filter::new().contains(Column::Name, partial_name)
}

pub fn name_containing_and_min_quantity(partial_name: &str, minimum_quantity: i32) -> Filter<Column> {
    name_containing(partial_name).gte(Column::Quantity, minimum_quantity)
}

pub fn price_between_and_min_quantity(minimum_price: f64, maximum_price: f64, minimum_quantity: i32) -> Filter<Column> {
    Filter::new()
        .between(Column::Price, minimum_price, maximum_price)
        .gte(Column::Quantity, minimum_quantity)
}

pub fn name_containing_price_between_and_min_quantity(
    partial_name: &str,
    minimum_price: f64,
    maximum_price: f64,
    minimum_quantity: i32,
) -> Filter<Column> {
    name_containing(partial_name)
        .between(Column::Price, minimum_price, maximum_price)
        .gte(Column::Quantity, minimum_quantity)
}
