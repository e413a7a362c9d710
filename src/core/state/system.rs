use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub terminal_size: Option<(u16, u16)>,
    pub status_message: Option<String>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }
            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }
            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }
            SystemMsg::Resize(width, height) => {
                self.terminal_size = Some((width, height));
                vec![]
            }
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }
            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }
            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut system = SystemState::default();
        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }

    #[test]
    fn test_resize_records_size() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Resize(80, 24));
        assert_eq!(system.terminal_size, Some((80, 24)));
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_status_message_lifecycle() {
        let mut system = SystemState::default();
        system.update(SystemMsg::UpdateStatusMessage("Test".to_string()));
        assert_eq!(system.status_message, Some("Test".to_string()));
        system.update(SystemMsg::ClearStatusMessage);
        assert_eq!(system.status_message, None);
    }

    #[test]
    fn test_show_error_logs() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::ShowError("boom".to_string()));
        assert_eq!(system.status_message, Some("Error: boom".to_string()));
        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "boom".to_string()
            }]
        );
    }
}
