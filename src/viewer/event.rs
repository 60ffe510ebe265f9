//! Discrete view events and the keyboard layout that produces them.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewEvent {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    PageLeft,
    PageRight,
    Help,
    Pause,
    Stop,
    /// Termination requested by a signal rather than a key.
    Interrupt,
}

impl ViewEvent {
    pub const ALL: [ViewEvent; 12] = [
        ViewEvent::Up,
        ViewEvent::Down,
        ViewEvent::Left,
        ViewEvent::Right,
        ViewEvent::PageUp,
        ViewEvent::PageDown,
        ViewEvent::PageLeft,
        ViewEvent::PageRight,
        ViewEvent::Help,
        ViewEvent::Pause,
        ViewEvent::Stop,
        ViewEvent::Interrupt,
    ];

    /// Event bound to `key`, or `None` for unbound keys and key releases.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Self::Stop),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Esc => Some(Self::Stop),
            KeyCode::Char(ch) => Self::from_char(ch),
            _ => None,
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'q' => Some(Self::Stop),
            'i' => Some(Self::PageUp),
            'k' => Some(Self::PageDown),
            'j' => Some(Self::PageLeft),
            'l' => Some(Self::PageRight),
            'h' => Some(Self::Help),
            ' ' => Some(Self::Pause),
            _ => None,
        }
    }
}

/// Key help shown on request.
pub const HELP_TEXT: &str = "\
Keys:
  Up   : moves window 1 space up       Down : moves window 1 space down
  Left : moves window 1 space left     Right: moves window 1 space right
  I    : moves window 1 page up        K    : moves window 1 page down
  J    : moves window 1 page left      L    : moves window 1 page right
  Space: pauses / resumes evolution    H    : displays this help
  Q    : ends the program
";

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::ViewEvent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_step_and_letters_page() {
        let table = [
            (KeyCode::Up, ViewEvent::Up),
            (KeyCode::Down, ViewEvent::Down),
            (KeyCode::Left, ViewEvent::Left),
            (KeyCode::Right, ViewEvent::Right),
            (KeyCode::Char('i'), ViewEvent::PageUp),
            (KeyCode::Char('k'), ViewEvent::PageDown),
            (KeyCode::Char('j'), ViewEvent::PageLeft),
            (KeyCode::Char('L'), ViewEvent::PageRight),
            (KeyCode::Char('h'), ViewEvent::Help),
            (KeyCode::Char(' '), ViewEvent::Pause),
            (KeyCode::Char('q'), ViewEvent::Stop),
            (KeyCode::Esc, ViewEvent::Stop),
        ];
        for (code, expected) in table {
            assert_eq!(ViewEvent::from_key(press(code)), Some(expected), "{code:?}");
        }
    }

    #[test]
    fn ctrl_c_stops() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ViewEvent::from_key(key), Some(ViewEvent::Stop));
        let key = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL);
        assert_eq!(ViewEvent::from_key(key), None);
    }

    #[test]
    fn unbound_and_released_keys_are_ignored() {
        assert_eq!(ViewEvent::from_key(press(KeyCode::Char('z'))), None);
        assert_eq!(ViewEvent::from_key(press(KeyCode::Enter)), None);

        let mut release = press(KeyCode::Up);
        release.kind = KeyEventKind::Release;
        assert_eq!(ViewEvent::from_key(release), None);
    }
}
