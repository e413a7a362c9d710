use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{list::ListMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{filters, pagination, sentinel, AppState},
    },
    domain::FilterField,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Network events
        RawMsg::PageLoaded { ticket, result } => {
            vec![Msg::Pagination(pagination::Message::PageLoaded {
                ticket,
                result,
            })]
        }

        // Timers
        RawMsg::DebounceElapsed { generation } => {
            vec![Msg::Filters(filters::Message::DebounceElapsed { generation })]
        }

        // Layout
        RawMsg::SentinelLaidOut(layout) => {
            vec![Msg::Sentinel(sentinel::Message::NodeLaidOut(layout))]
        }

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    match state.ui.focused_field() {
        Some(field) => translate_editing_keys(key, field, state),
        None => translate_normal_mode_keys(key, state),
    }
}

/// Key bindings while a filter input has focus
fn translate_editing_keys(key: KeyEvent, field: FilterField, state: &AppState) -> Vec<Msg> {
    let current = state.filters.draft().get(field);
    match key.code {
        KeyCode::Esc | KeyCode::Enter => vec![Msg::Ui(UiMsg::StopEditing)],
        KeyCode::Tab => vec![Msg::Ui(UiMsg::NextField)],
        KeyCode::Backspace => {
            let mut chars = current.chars();
            if chars.next_back().is_none() {
                return vec![];
            }
            vec![field_edited(field, chars.as_str())]
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut value = current.to_string();
            value.push(c);
            vec![field_edited(field, &value)]
        }
        _ => vec![],
    }
}

fn field_edited(field: FilterField, value: &str) -> Msg {
    Msg::Filters(filters::Message::FieldEdited {
        field,
        value: value.to_string(),
    })
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.action_for(key) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::ScrollUp => vec![Msg::List(ListMsg::SelectPrevious)],
        Action::ScrollDown => vec![Msg::List(ListMsg::SelectNext)],
        Action::ScrollToTop => vec![Msg::List(ListMsg::SelectFirst)],
        Action::ScrollToBottom => vec![Msg::List(ListMsg::SelectLast)],
        Action::EditName => vec![Msg::Ui(UiMsg::StartEditing(FilterField::Name))],
        Action::EditCountry => vec![Msg::Ui(UiMsg::StartEditing(FilterField::Country))],
        Action::EditIndustry => vec![Msg::Ui(UiMsg::StartEditing(FilterField::Industry))],
        Action::CycleSort => vec![Msg::Filters(filters::Message::SortCycled)],
        Action::ClearFilters => vec![Msg::Filters(filters::Message::Cleared)],
        Action::Retry => translate_retry_key(state),
    }
}

/// Retry only makes sense after a failed page
fn translate_retry_key(state: &AppState) -> Vec<Msg> {
    if state.pagination.error().is_none() {
        return vec![Msg::System(SystemMsg::UpdateStatusMessage(
            "Nothing to retry".to_string(),
        ))];
    }
    vec![
        Msg::System(SystemMsg::ClearStatusMessage),
        Msg::Pagination(pagination::Message::RetryRequested),
    ]
}
