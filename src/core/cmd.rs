use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{core::state::pagination::FetchTicket, domain::query::CompanyQuery};

/// Elm-like command definitions
/// Represents side effects (network requests, timers, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Request one page; the response comes back as `RawMsg::PageLoaded` carrying `ticket`
    FetchPage {
        ticket: FetchTicket,
        query: CompanyQuery,
    },

    /// (Re)arm the debounce timer, superseding any pending one
    ScheduleDebounce { generation: u64, delay: Duration },
    /// Drop the pending debounce timer without firing it
    CancelDebounce,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(mut commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchPage { .. } | Cmd::ScheduleDebounce { .. } => true,
            Cmd::CancelDebounce | Cmd::LogError { .. } | Cmd::LogInfo { .. } | Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Short name used in execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::FetchPage { .. } => "FetchPage",
            Cmd::ScheduleDebounce { .. } => "ScheduleDebounce",
            Cmd::CancelDebounce => "CancelDebounce",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::Batch(_) => "Batch",
            Cmd::None => "None",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::filter::CompanyFilter;

    fn fetch_cmd() -> Cmd {
        Cmd::FetchPage {
            ticket: FetchTicket { epoch: 0, page: 1 },
            query: CompanyQuery::new(1, 10, CompanyFilter::default()),
        }
    }

    #[test]
    fn test_batch_collapses() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::CancelDebounce]), Cmd::CancelDebounce);
        assert_eq!(
            Cmd::batch(vec![Cmd::CancelDebounce, Cmd::None]),
            Cmd::Batch(vec![Cmd::CancelDebounce, Cmd::None])
        );
    }

    #[test]
    fn test_is_async() {
        assert!(fetch_cmd().is_async());
        assert!(Cmd::ScheduleDebounce {
            generation: 1,
            delay: Duration::from_millis(500)
        }
        .is_async());
        assert!(!Cmd::CancelDebounce.is_async());
        assert!(Cmd::Batch(vec![Cmd::None, fetch_cmd()]).is_async());
        assert!(!Cmd::Batch(vec![Cmd::None]).is_async());
    }

    #[test]
    fn test_name() {
        assert_eq!(fetch_cmd().name(), "FetchPage");
        assert_eq!(Cmd::None.name(), "None");
    }
}
