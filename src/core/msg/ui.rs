use serde::{Deserialize, Serialize};

use crate::domain::FilterField;

/// Messages specific to UiState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    /// Focus a filter input
    StartEditing(FilterField),
    /// Back to list navigation
    StopEditing,
    /// Move focus to the next filter input
    NextField,
}
