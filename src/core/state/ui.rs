use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::FilterField,
};

/// High-level UI mode for keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing(FilterField),
}

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub mode: InputMode,
}

impl UiState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, InputMode::Editing(_))
    }

    /// The focused filter input, if any
    pub fn focused_field(&self) -> Option<FilterField> {
        match self.mode {
            InputMode::Editing(field) => Some(field),
            InputMode::Normal => None,
        }
    }

    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::StartEditing(field) => self.mode = InputMode::Editing(field),
            UiMsg::StopEditing => self.mode = InputMode::Normal,
            UiMsg::NextField => {
                if let InputMode::Editing(field) = self.mode {
                    self.mode = InputMode::Editing(field.next());
                }
            }
        }
        vec![]
    }
}
