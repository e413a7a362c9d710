use serde::{Deserialize, Serialize};

/// Messages specific to ListState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListMsg {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
}
