//! Domain layer for the food-in-art catalog service.
//!
//! Holds the records the API serializes, the error taxonomy, the store
//! seams implemented by `artfood-db`, and the lookup workflows that sit
//! between them. This crate has no database or HTTP dependency.

pub mod catalog;
pub mod error;
pub mod item;
pub mod lookup;
pub mod types;
