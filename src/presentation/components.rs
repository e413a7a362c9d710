//! Components
//!
//! Components render slices of `AppState` into regions of the frame. Apart from the
//! list's scroll offset they hold no state of their own.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::{sentinel::SentinelLayout, AppState};

pub mod company_list;
pub mod filter_bar;
pub mod status_bar;

pub use company_list::CompanyListComponent;
pub use filter_bar::FilterBarComponent;
pub use status_bar::StatusBarComponent;

const TITLE: &str = "Company Directory";

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub filter_bar: FilterBarComponent,
    pub list: CompanyListComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole screen and return where the list's sentinel ended up
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) -> Option<SentinelLayout> {
        let layout = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(3), // filter inputs
            Constraint::Min(0),    // cards
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(TITLE).bold()).alignment(Alignment::Center),
            layout[0],
        );
        self.filter_bar.view(state, frame, layout[1]);
        let sentinel = self.list.view(state, frame, layout[2]);
        self.status_bar.view(state, frame, layout[3]);
        sentinel
    }
}
