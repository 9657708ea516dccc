//! Keyboard Module - Key state and key event dispatch
//!
//! Tracks which keys and characters are held and derives the modifier set.
//! Key events go to the focused control only.
//!
//! # API
//!
//! - `Root::event_key_down(key, character)` - Feed a key press
//! - `Root::event_key_up(key, character)` - Feed a key release
//! - `Root::is_key_pressed(key)` / `Root::is_character_pressed(c)` - Held state
//! - `Root::mod_keys()` - Current modifier set
//! - `Root::is_text_input_required()` - Focused control wants text input
//!
//! # Example
//!
//! ```ignore
//! use spark_widgets::state::{Key, Root};
//!
//! let mut root = Root::new(800, 600);
//! root.event_key_down(Key::ShiftLeft, None);
//! root.event_key_down(Key::Character, Some('A'));
//! assert!(root.mod_keys().shift());
//! ```

use std::collections::HashSet;

use crate::types::ControlFlags;

use super::events::EventKind;
use super::root::Root;

// =============================================================================
// TYPES
// =============================================================================

/// Platform-independent key identifier.
///
/// Printable input arrives as [`Key::Character`] together with the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Character,
    Backspace,
    Tab,
    Enter,
    Escape,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Left,
    Right,
    Up,
    Down,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

bitflags::bitflags! {
    /// Held modifier keys. Left and right are tracked separately.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModKeys: u8 {
        const SHIFT_LEFT = 1 << 0;
        const SHIFT_RIGHT = 1 << 1;
        const CONTROL_LEFT = 1 << 2;
        const CONTROL_RIGHT = 1 << 3;
        const ALT_LEFT = 1 << 4;
        const ALT_RIGHT = 1 << 5;
    }
}

impl ModKeys {
    pub fn shift(self) -> bool {
        self.intersects(ModKeys::SHIFT_LEFT | ModKeys::SHIFT_RIGHT)
    }

    pub fn control(self) -> bool {
        self.intersects(ModKeys::CONTROL_LEFT | ModKeys::CONTROL_RIGHT)
    }

    pub fn alt(self) -> bool {
        self.intersects(ModKeys::ALT_LEFT | ModKeys::ALT_RIGHT)
    }
}

/// Snapshot of the held keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyboardState {
    pub pressed_keys: HashSet<Key>,
    pub pressed_characters: HashSet<char>,
    pub mod_keys: ModKeys,
}

impl KeyboardState {
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    pub fn is_character_pressed(&self, character: char) -> bool {
        self.pressed_characters.contains(&character)
    }

    fn update(&mut self, key: Key, character: Option<char>, down: bool) {
        match (key, character) {
            (Key::Character, Some(c)) => {
                if down {
                    self.pressed_characters.insert(c);
                } else {
                    self.pressed_characters.remove(&c);
                }
            }
            _ => {
                if down {
                    self.pressed_keys.insert(key);
                } else {
                    self.pressed_keys.remove(&key);
                }
                self.update_mod_keys();
            }
        }
    }

    fn update_mod_keys(&mut self) {
        const MAPPING: [(Key, ModKeys); 6] = [
            (Key::ShiftLeft, ModKeys::SHIFT_LEFT),
            (Key::ShiftRight, ModKeys::SHIFT_RIGHT),
            (Key::ControlLeft, ModKeys::CONTROL_LEFT),
            (Key::ControlRight, ModKeys::CONTROL_RIGHT),
            (Key::AltLeft, ModKeys::ALT_LEFT),
            (Key::AltRight, ModKeys::ALT_RIGHT),
        ];

        self.mod_keys = MAPPING
            .iter()
            .filter(|(key, _)| self.pressed_keys.contains(key))
            .fold(ModKeys::empty(), |acc, (_, flag)| acc | *flag);
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl Root {
    /// Feed a key press. Resets the text cursor blink phase.
    pub fn event_key_down(&mut self, key: Key, character: Option<char>) {
        self.cursor_blinker = 0.0;
        self.keyboard.update(key, character, true);
        self.dispatch_key(true, key, character);
        self.process_requests();
    }

    /// Feed a key release.
    pub fn event_key_up(&mut self, key: Key, character: Option<char>) {
        self.keyboard.update(key, character, false);
        self.dispatch_key(false, key, character);
        self.process_requests();
    }

    fn dispatch_key(&self, down: bool, key: Key, character: Option<char>) {
        let Some(focused) = self.focused.upgrade() else {
            return;
        };

        trace!(control = focused.id(), ?key, down, "key");
        focused.send_event(EventKind::Key {
            down,
            key,
            character,
            mod_keys: self.keyboard.mod_keys,
        });
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keyboard.is_key_pressed(key)
    }

    pub fn is_character_pressed(&self, character: char) -> bool {
        self.keyboard.is_character_pressed(character)
    }

    pub fn mod_keys(&self) -> ModKeys {
        self.keyboard.mod_keys
    }

    /// Snapshot of the keyboard state.
    pub fn keyboard_state(&self) -> KeyboardState {
        self.keyboard.clone()
    }

    /// True when the focused control carries the needs-text-input flag.
    pub fn is_text_input_required(&self) -> bool {
        self.focused
            .upgrade()
            .is_some_and(|focused| focused.has_flags(ControlFlags::NEEDS_TEXT_INPUT))
    }
}

// =============================================================================
// TESTS
// =============================================================================
