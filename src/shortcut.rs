//! Key chords and the shortcuts they map to.

use crate::config::Chrome;
use input_core::InlineFormat;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Cmd on macOS.
    pub command: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        command: false,
        shift: false,
        alt: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };
    pub const COMMAND: Modifiers = Modifiers {
        command: true,
        ..Modifiers::NONE
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    /// Ctrl or Cmd held.
    pub fn command_like(self) -> bool {
        self.ctrl || self.command
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub fn ctrl(ch: char) -> Self {
        Self::new(Key::Char(ch), Modifiers::CTRL)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ToggleFormat(InlineFormat),
    CopyAll,
}

/// Map a chord to a shortcut for the given chrome. Letter keys match
/// regardless of ASCII case so Shift and Caps Lock do not disable them.
pub fn resolve_shortcut(chord: KeyChord, chrome: Chrome) -> Option<Shortcut> {
    if !chord.modifiers.command_like() || chord.modifiers.alt {
        return None;
    }
    let Key::Char(ch) = chord.key else {
        return None;
    };
    match ch.to_ascii_lowercase() {
        'b' => Some(Shortcut::ToggleFormat(InlineFormat::Bold)),
        'i' => Some(Shortcut::ToggleFormat(InlineFormat::Italic)),
        'u' => Some(Shortcut::ToggleFormat(InlineFormat::Underline)),
        'c' if chrome.copies_on_shortcut() => Some(Shortcut::CopyAll),
        _ => None,
    }
}
