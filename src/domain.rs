//! Domain logic
//!
//! This module contains the directory's business types:
//! - Company records and page decoding
//! - Filter values and sort order
//! - Page queries and their serialized form
//! - Sort projection and text helpers

pub mod company;
pub mod filter;
pub mod query;
pub mod sort;
pub mod text;

pub use company::Company;
pub use filter::{CompanyFilter, FilterField, FilterState, SortOrder};
pub use query::CompanyQuery;
