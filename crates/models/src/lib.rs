//! SeaORM entities for the shop, their field validation, and the predicate
//! builder used by every paginated search.

pub mod errors;
pub mod db;
pub mod query;
pub mod customer;
pub mod product;
