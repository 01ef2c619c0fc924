//! Key bindings for the interactive table.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything a key press can ask the model to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Split,
    Join,
    Undo,
    Redo,
    Export,
    Copy,
    ToggleHelp,
    Quit,
}

/// Bindings shown on the one-line help.
pub const SHORT_HELP: &[Action] = &[
    Action::Up,
    Action::Down,
    Action::PageUp,
    Action::PageDown,
    Action::Split,
    Action::Join,
    Action::Undo,
    Action::Redo,
    Action::Export,
    Action::ToggleHelp,
    Action::Quit,
];

/// Bindings shown on the full help, one group per line.
pub const FULL_HELP: &[&[Action]] = &[
    &[Action::Up, Action::Down, Action::PageUp, Action::PageDown],
    &[Action::Left, Action::Right],
    &[Action::Split, Action::Join],
    &[Action::Undo, Action::Redo],
    &[Action::Export, Action::Copy],
    &[Action::ToggleHelp, Action::Quit],
];

impl Action {
    /// Key label and description for the help line.
    pub fn help(self) -> (&'static str, &'static str) {
        match self {
            Action::Up => ("↑/k", "up"),
            Action::Down => ("↓/j", "down"),
            Action::Left => ("←/h", "scroll left"),
            Action::Right => ("→/l", "scroll right"),
            Action::PageUp => ("pgup", "page up"),
            Action::PageDown => ("pgdown", "page down"),
            Action::Split => ("s", "split"),
            Action::Join => ("x", "join"),
            Action::Undo => ("u", "undo"),
            Action::Redo => ("r", "redo"),
            Action::Export => ("e", "export JSON"),
            Action::Copy => ("c", "copy to clipboard"),
            Action::ToggleHelp => ("?", "help"),
            Action::Quit => ("q", "quit"),
        }
    }
}

/// Map a terminal key event to an action. Releases and unbound keys map to
/// `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Left | KeyCode::Char('h') => Action::Left,
        KeyCode::Right | KeyCode::Char('l') => Action::Right,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Char('s') => Action::Split,
        KeyCode::Char('x') => Action::Join,
        KeyCode::Char('u') => Action::Undo,
        KeyCode::Char('r') => Action::Redo,
        KeyCode::Char('e') => Action::Export,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => return None,
    };
    Some(action)
}
