//! Application state management
//!
//! Tracks whether the desktop or the modal greeting owns input, and maps
//! keyboard events to global commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which layer receives input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AppState {
    /// Desktop with zero or more list windows
    #[default]
    Desktop,
    /// Modal greeting dialog on top of the desktop
    Greeting,
}

/// Global commands handled by the host before any window sees the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the greeting dialog (Alt-G)
    Greeting,
    /// Open a new list window (Alt-L)
    OpenList,
    /// Close the active list window (Ctrl-W)
    CloseWindow,
    /// Bring the next list window to the front (F6)
    NextWindow,
    /// Quit application (Alt-X, Ctrl-C)
    Quit,
    /// Not a global command
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the desktop
    pub fn new() -> Self {
        Self {
            current_state: AppState::Desktop,
            previous_state: None,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> &AppState {
        &self.current_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            self.previous_state = Some(self.current_state.clone());
            self.current_state = new_state;
        }
    }

    /// Go back to the previous state if available, otherwise go to the desktop
    pub fn go_back(&mut self) {
        self.current_state = self.previous_state.take().unwrap_or_default();
    }

    /// Convert keyboard event to a global command
    pub fn key_to_command(key: KeyEvent) -> Command {
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('g') | KeyCode::Char('G') if alt => Command::Greeting,
            KeyCode::Char('l') | KeyCode::Char('L') if alt => Command::OpenList,
            KeyCode::Char('x') | KeyCode::Char('X') if alt => Command::Quit,
            KeyCode::Char('c') if ctrl => Command::Quit,
            KeyCode::Char('w') if ctrl => Command::CloseWindow,
            KeyCode::F(6) => Command::NextWindow,
            _ => Command::None,
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new();
        assert_eq!(*state_manager.current_state(), AppState::Desktop);
        assert!(!state_manager.should_quit());
    }

    #[test]
    fn test_state_transitions() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Greeting);
        assert_eq!(*state_manager.current_state(), AppState::Greeting);

        // Same state does not overwrite history
        state_manager.transition_to(AppState::Greeting);
        state_manager.go_back();
        assert_eq!(*state_manager.current_state(), AppState::Desktop);
    }

    #[test]
    fn test_go_back() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Greeting);
        state_manager.go_back();
        assert_eq!(*state_manager.current_state(), AppState::Desktop);

        // Go back from Desktop (should stay at Desktop)
        state_manager.go_back();
        assert_eq!(*state_manager.current_state(), AppState::Desktop);
    }

    #[test]
    fn test_quit_handling() {
        let mut state_manager = StateManager::new();
        state_manager.quit();
        assert!(state_manager.should_quit());
    }

    #[test]
    fn test_key_to_command() {
        assert_eq!(
            StateManager::key_to_command(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::ALT)),
            Command::Greeting
        );
        assert_eq!(
            StateManager::key_to_command(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::ALT)),
            Command::OpenList
        );
        assert_eq!(
            StateManager::key_to_command(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            Command::Quit
        );
        assert_eq!(
            StateManager::key_to_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
        assert_eq!(
            StateManager::key_to_command(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            Command::CloseWindow
        );
        assert_eq!(
            StateManager::key_to_command(KeyEvent::new(KeyCode::F(6), KeyModifiers::NONE)),
            Command::NextWindow
        );

        // Plain letters and arrows belong to the widgets
        assert_eq!(
            StateManager::key_to_command(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)),
            Command::None
        );
        assert_eq!(
            StateManager::key_to_command(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
            Command::None
        );
    }
}
