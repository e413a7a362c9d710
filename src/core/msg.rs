use serde::{Deserialize, Serialize};

pub mod list;
pub mod system;
pub mod ui;

use crate::core::state::{filters, pagination, sentinel};
use list::ListMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and never carry terminal events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // UI mode (delegated to UiState)
    Ui(UiMsg),

    // Selection within the card list (delegated to ListState)
    List(ListMsg),

    // Filter inputs and debounce (delegated to FiltersState)
    Filters(filters::Message),

    // Paging (delegated to PaginationState)
    Pagination(pagination::Message),

    // Sentinel geometry (delegated to SentinelObserver)
    Sentinel(sentinel::Message),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Sentinel(sentinel::Message::NodeLaidOut(_)))
    }
}
