//! Reusable UI widgets
//!
//! Widgets render one piece of data and know nothing about `AppState`.

pub mod company_card;
pub mod filter_input;

pub use company_card::{CompanyCard, CARD_HEIGHT};
pub use filter_input::FilterInput;
