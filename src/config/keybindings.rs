//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides vim-style defaults alongside arrow keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Uppercase characters may arrive with or without `SHIFT` depending on
    /// the terminal, so a shifted character also matches its unshifted
    /// binding.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&key).copied().or_else(|| {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                let unshifted = KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
                self.bindings.get(&unshifted).copied()
            } else {
                None
            }
        })
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }

    fn bind_char(&mut self, ch: char, action: KeyAction) {
        self.bind(KeyCode::Char(ch), KeyModifiers::NONE, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Pagination
        keys.bind_char('g', KeyAction::FirstPage);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::FirstPage);
        keys.bind_char('h', KeyAction::PrevPage);
        keys.bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevPage);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevPage);
        keys.bind_char('l', KeyAction::NextPage);
        keys.bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextPage);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextPage);
        keys.bind_char('G', KeyAction::LastPage);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::LastPage);

        // Date range
        keys.bind_char('[', KeyAction::ShiftRangeBack);
        keys.bind_char(']', KeyAction::ShiftRangeForward);
        keys.bind_char('}', KeyAction::ExtendRange);
        keys.bind_char('{', KeyAction::ShrinkRange);
        keys.bind_char('t', KeyAction::ResetRange);

        // Selectors
        keys.bind_char('o', KeyAction::NextLocation);
        keys.bind_char('O', KeyAction::PrevLocation);
        keys.bind_char('z', KeyAction::NextZone);
        keys.bind_char('Z', KeyAction::PrevZone);
        keys.bind_char('x', KeyAction::ClearSelectors);

        // Table
        keys.bind_char('j', KeyAction::SelectNextRow);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectNextRow);
        keys.bind_char('k', KeyAction::SelectPrevRow);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectPrevRow);

        // Application
        keys.bind_char('r', KeyAction::Refresh);
        keys.bind_char('?', KeyAction::Help);
        keys.bind_char('q', KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
