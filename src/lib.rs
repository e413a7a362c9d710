//! # corpdir - company directory TUI
//!
//! Browse a paginated company API from the terminal. Filter edits are debounced, the
//! list loads the next page when its end scrolls into view, and pages already seen are
//! served from memory.
//!
//! ## Architecture
//!
//! The crate follows an Elm-like architecture:
//!
//! - **State** (`core::state`): the single `AppState` model
//! - **Message** (`core::msg`): events that change the state
//! - **Update** (`core::update`): the pure transition function
//! - **Command** (`core::cmd`): side effects, executed by `core::cmd_executor`
//! - **View** (`presentation`): components drawing the state
//!
//! ```rust
//! use corpdir::core::{cmd::Cmd, msg::{list::ListMsg, Msg}, state::AppState, update::update};
//!
//! let mut state = AppState::default();
//! let commands = state.init();
//! assert!(matches!(commands.as_slice(), [Cmd::FetchPage { .. }]));
//!
//! let (state, _) = update(Msg::List(ListMsg::SelectNext), state);
//! assert_eq!(state.list.selected, None); // nothing loaded yet
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
