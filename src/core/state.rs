//! Application state
//!
//! `AppState` is the single model of the Elm loop. Each concern owns a sub-state with
//! its own `update`; `core::update` routes messages and keeps the sentinel
//! registration in sync with pagination.

use std::time::Duration;

pub mod cache;
pub mod filters;
pub mod list;
pub mod pagination;
pub mod sentinel;
pub mod system;
pub mod ui;

use crate::{core::cmd::Cmd, domain::Company, infrastructure::config::Config};

use filters::FiltersState;
use list::ListState;
use pagination::PaginationState;
use sentinel::{Registration, SentinelObserver};
use system::SystemState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub system: SystemState,
    pub ui: UiState,
    pub filters: FiltersState,
    pub pagination: PaginationState,
    pub sentinel: SentinelObserver,
    pub list: ListState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from the loaded configuration
    pub fn new_with_config(config: Config) -> Self {
        Self {
            filters: FiltersState::new(Duration::from_millis(config.debounce_ms)),
            pagination: PaginationState::new(config.page_size, config.cache_enabled),
            sentinel: SentinelObserver::new(config.observer),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Commands to run when the directory is first shown: load page 1
    pub fn init(&mut self) -> Vec<Cmd> {
        self.pagination.update(pagination::Message::Started)
    }

    /// The key the sentinel subscription is registered under
    pub fn registration(&self) -> Registration {
        Registration {
            gate: self.pagination.gate(),
            epoch: self.pagination.epoch(),
            page: self.pagination.page(),
        }
    }

    /// Companies in display order
    pub fn visible_companies(&self) -> impl Iterator<Item = &Company> {
        self.list.projection.view(self.pagination.items())
    }

    pub fn selected_company(&self) -> Option<&Company> {
        self.list.selected_company(self.pagination.items())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::state::sentinel::ObserverOptions;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.pagination.items().is_empty());
        assert!(!state.pagination.is_loading());
        assert!(!state.system.should_quit);
        assert!(!state.ui.is_editing());
        assert_eq!(state.selected_company(), None);
    }

    #[test]
    fn test_new_with_config_applies_settings() {
        let config = Config {
            page_size: 25,
            debounce_ms: 0,
            cache_enabled: false,
            observer: ObserverOptions::full_visibility(),
            ..Default::default()
        };
        let mut state = AppState::new_with_config(config);

        assert!(state.pagination.cache().is_none());
        assert_eq!(state.sentinel.options(), &ObserverOptions::full_visibility());

        let cmds = state.init();
        match cmds.as_slice() {
            [Cmd::FetchPage { query, .. }] => assert_eq!(query.limit, 25),
            other => panic!("expected one fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_registration_tracks_pagination() {
        let mut state = AppState::default();
        let before = state.registration();
        state.init();
        let after = state.registration();

        assert_ne!(before, after);
        assert!(after.gate.loading);
        assert_eq!(after.page, 1);
        assert_eq!(after.epoch, 0);
    }
}
