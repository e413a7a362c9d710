//! Filter bar component
//!
//! The three text inputs and the current sort order, on one bordered row.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::FilterField,
    presentation::widgets::FilterInput,
};

const SORT_WIDTH: u16 = 16;

#[derive(Debug, Clone, Default)]
pub struct FilterBarComponent;

impl FilterBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let layout = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(SORT_WIDTH),
        ])
        .split(area);

        let draft = state.filters.draft();
        let focused = state.ui.focused_field();
        for (field, column) in FilterField::ALL.into_iter().zip(layout.iter()) {
            let input = FilterInput::new(field, draft.get(field))
                .focused(focused == Some(field))
                .focused_style(styles.get_or_default("input_focused"))
                .placeholder_style(styles.get_or_default("muted"));
            frame.render_widget(input, *column);
        }

        let sort = Paragraph::new(state.filters.sort_order().label()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Sort "),
        );
        frame.render_widget(sort, layout[3]);
    }
}
