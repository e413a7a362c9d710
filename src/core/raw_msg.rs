use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::{
    core::state::{pagination::FetchTicket, sentinel::SentinelLayout},
    domain::Company,
    infrastructure::api::FetchError,
};

/// Raw messages from external sources (input, network, timers, layout)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Network events
    PageLoaded {
        ticket: FetchTicket,
        result: Result<Vec<Company>, FetchError>,
    },

    // Timer events
    DebounceElapsed {
        generation: u64,
    },

    // Layout reported by the list after drawing
    SentinelLaidOut(Option<SentinelLayout>),

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Tick | RawMsg::Render | RawMsg::SentinelLaidOut(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(RawMsg::SentinelLaidOut(None).is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
        assert!(!RawMsg::DebounceElapsed { generation: 1 }.is_frequent());
    }

    #[test]
    fn test_raw_msg_equality() {
        assert_eq!(RawMsg::Quit, RawMsg::Quit);
        assert_ne!(RawMsg::Tick, RawMsg::Render);
    }

    #[test]
    fn test_raw_msg_serialization() -> Result<()> {
        let msg = RawMsg::PageLoaded {
            ticket: FetchTicket { epoch: 2, page: 3 },
            result: Err(FetchError::Response { status: 500 }),
        };
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: RawMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
