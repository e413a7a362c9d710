//! Status bar component
//!
//! One line at the bottom: the status message on the left, key hints on the right.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

const NORMAL_HINTS: &str = "j/k move  / n c i filter  s sort  x clear  r retry  q quit";
const EDITING_HINTS: &str = "Tab next field  Enter/Esc done";

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Left-hand text: the status message, else a summary of what is loaded
    pub fn message(&self, state: &AppState) -> String {
        if let Some(message) = &state.system.status_message {
            return message.clone();
        }
        let loaded = state.pagination.items().len();
        match state.list.selected {
            Some(index) => format!("{}/{loaded}", index + 1),
            None => format!("{loaded} loaded"),
        }
    }

    pub fn hints(&self, state: &AppState) -> &'static str {
        if state.ui.is_editing() {
            EDITING_HINTS
        } else {
            NORMAL_HINTS
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.styles.get_or_default("status");
        let hints = self.hints(state);
        let layout = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hints.len() as u16),
        ])
        .split(area);

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(self.message(state)).style(style), layout[0]);
        frame.render_widget(
            Paragraph::new(hints)
                .style(style.add_modifier(Modifier::DIM))
                .alignment(Alignment::Right),
            layout[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::{list::ListMsg, system::SystemMsg, ui::UiMsg, Msg},
            state::pagination::{self, FetchTicket},
        },
        domain::FilterField,
        test_helpers::{apply_all, companies},
    };

    fn loaded(n: usize) -> AppState {
        let mut state = AppState::default();
        state.init();
        apply_all(
            state,
            [Msg::Pagination(pagination::Message::PageLoaded {
                ticket: FetchTicket { epoch: 0, page: 1 },
                result: Ok(companies(n)),
            })],
        )
        .0
    }

    #[test]
    fn test_message_summarises_progress() {
        let bar = StatusBarComponent::new();
        let state = loaded(10);
        assert_eq!(bar.message(&state), "10 loaded");

        let (state, _) = apply_all(state, [Msg::List(ListMsg::SelectNext)]);
        assert_eq!(bar.message(&state), "1/10");
    }

    #[test]
    fn test_status_message_wins() {
        let (state, _) = apply_all(
            loaded(3),
            [Msg::System(SystemMsg::UpdateStatusMessage("Nothing to retry".into()))],
        );
        assert_eq!(StatusBarComponent::new().message(&state), "Nothing to retry");
    }

    #[test]
    fn test_hints_follow_mode() {
        let bar = StatusBarComponent::new();
        let state = AppState::default();
        assert_eq!(bar.hints(&state), NORMAL_HINTS);

        let (state, _) = apply_all(state, [Msg::Ui(UiMsg::StartEditing(FilterField::Name))]);
        assert_eq!(bar.hints(&state), EDITING_HINTS);
    }
}
