//! Bakery point-of-sale data pipeline: load and clean the CSV export,
//! filter by product, aggregate sales.

pub mod data;
