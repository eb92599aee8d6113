//! Keybinding System
//!
//! Maps key events to navigation commands. Bindings are overridable from
//! configuration via a small string syntax (`"Right"`, `"Ctrl+n"`,
//! `"PageDown"`, ...).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Navigation command triggered by a key binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Reveal the next build step, or move to the next slide
    Next,
    /// Hide the current build step, or move to the previous slide
    Previous,
    /// Request or exit fullscreen
    ToggleFullscreen,
    /// Leave the presentation
    Quit,
}

impl Action {
    /// Parse an action name as used in configuration files
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "next" => Some(Action::Next),
            "previous" | "prev" => Some(Action::Previous),
            "toggle_fullscreen" | "fullscreen" => Some(Action::ToggleFullscreen),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Key combination
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombination {
    /// Key code
    pub code: KeyCode,
    /// Modifiers
    pub modifiers: KeyModifiers,
}

impl KeyCombination {
    /// Create a new key combination
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key combination without modifiers
    #[must_use]
    pub fn simple(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Create a key combination with Ctrl
    #[must_use]
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Create a key combination with Shift
    #[must_use]
    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }

    /// Parse from string representation, e.g. `"Ctrl+n"` or `"PageDown"`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        if parts.is_empty() {
            return None;
        }

        let mut modifiers = KeyModifiers::NONE;
        let key_str = parts.last()?;

        for part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "meta" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = parse_key_code(key_str)?;
        Some(Self { code, modifiers })
    }

    /// Format as string for help display
    #[must_use]
    pub fn to_string_repr(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }

        let key = format_key_code(&self.code);
        parts.push(&key);

        parts.join("+")
    }
}

/// Parse a key code from string
fn parse_key_code(s: &str) -> Option<KeyCode> {
    let s = s.to_lowercase();
    match s.as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "space" => Some(KeyCode::Char(' ')),
        "tab" => Some(KeyCode::Tab),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        _ => {
            if s.len() == 1 {
                Some(KeyCode::Char(s.chars().next()?))
            } else {
                None
            }
        }
    }
}

/// Format a key code as string
fn format_key_code(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "?".to_string(),
    }
}

/// Keybinding configuration
#[derive(Debug, Clone)]
pub struct Keybindings {
    /// Key to action mappings
    bindings: HashMap<KeyCombination, Action>,
    /// Action to key mappings (for help display)
    reverse: HashMap<Action, Vec<KeyCombination>>,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keybindings {
    /// Create empty keybindings
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            reverse: HashMap::new(),
        }
    }

    /// The standard presenter bindings.
    ///
    /// Right / Space / PageDown advance, Left / PageUp retreat, `f`
    /// toggles fullscreen, `q` / Esc / Ctrl+C quit.
    #[must_use]
    pub fn standard() -> Self {
        let mut kb = Self::new();

        kb.bind(KeyCombination::simple(KeyCode::Right), Action::Next);
        kb.bind(KeyCombination::simple(KeyCode::Char(' ')), Action::Next);
        kb.bind(KeyCombination::simple(KeyCode::PageDown), Action::Next);

        kb.bind(KeyCombination::simple(KeyCode::Left), Action::Previous);
        kb.bind(KeyCombination::simple(KeyCode::PageUp), Action::Previous);

        kb.bind(
            KeyCombination::simple(KeyCode::Char('f')),
            Action::ToggleFullscreen,
        );
        kb.bind(
            KeyCombination::shift(KeyCode::Char('F')),
            Action::ToggleFullscreen,
        );

        kb.bind(KeyCombination::simple(KeyCode::Char('q')), Action::Quit);
        kb.bind(KeyCombination::simple(KeyCode::Esc), Action::Quit);
        kb.bind(KeyCombination::ctrl(KeyCode::Char('c')), Action::Quit);

        kb
    }

    /// Apply configured overrides on top of the current bindings.
    ///
    /// Each entry maps an action name to the full list of key strings
    /// bound to it; an override replaces that action's previous keys.
    /// Unknown actions and unparseable keys are skipped with a warning.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, Vec<String>>) {
        for (name, keys) in overrides {
            let Some(action) = Action::from_name(name) else {
                tracing::warn!(action = %name, "Unknown action in keybinding overrides");
                continue;
            };

            self.unbind_action(action);
            for key_str in keys {
                match KeyCombination::parse(key_str) {
                    Some(key) => self.bind(key, action),
                    None => {
                        tracing::warn!(key = %key_str, "Unparseable key in keybinding overrides");
                    }
                }
            }
        }
    }

    /// Bind a key combination to an action
    pub fn bind(&mut self, key: KeyCombination, action: Action) {
        self.bindings.insert(key.clone(), action);
        self.reverse.entry(action).or_default().push(key);
    }

    /// Remove every binding for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(keys) = self.reverse.remove(&action) {
            for key in keys {
                self.bindings.remove(&key);
            }
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, event: &KeyEvent) -> Option<Action> {
        let key = KeyCombination::new(event.code, event.modifiers);
        self.bindings.get(&key).copied()
    }

    /// Get a formatted string for an action's keys
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        self.reverse
            .get(&action)
            .filter(|keys| !keys.is_empty())
            .map(|keys| {
                keys.iter()
                    .map(KeyCombination::to_string_repr)
                    .collect::<Vec<_>>()
                    .join(" / ")
            })
            .unwrap_or_else(|| "unbound".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_combination_parse() {
        let key = KeyCombination::parse("Ctrl+c").unwrap();
        assert_eq!(key.code, KeyCode::Char('c'));
        assert!(key.modifiers.contains(KeyModifiers::CONTROL));

        let key = KeyCombination::parse("PageDown").unwrap();
        assert_eq!(key.code, KeyCode::PageDown);
        assert_eq!(key.modifiers, KeyModifiers::NONE);

        let key = KeyCombination::parse("Space").unwrap();
        assert_eq!(key.code, KeyCode::Char(' '));

        assert!(KeyCombination::parse("Hyper+x").is_none());
    }

    #[test]
    fn test_standard_bindings() {
        let kb = Keybindings::standard();

        for code in [KeyCode::Right, KeyCode::Char(' '), KeyCode::PageDown] {
            let event = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(kb.get_action(&event), Some(Action::Next), "{code:?}");
        }

        for code in [KeyCode::Left, KeyCode::PageUp] {
            let event = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(kb.get_action(&event), Some(Action::Previous), "{code:?}");
        }

        let event = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);
        assert_eq!(kb.get_action(&event), Some(Action::ToggleFullscreen));
        let event = KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT);
        assert_eq!(kb.get_action(&event), Some(Action::ToggleFullscreen));

        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(kb.get_action(&event), Some(Action::Quit));

        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(kb.get_action(&event), None);
    }

    #[test]
    fn test_apply_overrides() {
        let mut kb = Keybindings::standard();

        let mut overrides = HashMap::new();
        overrides.insert("next".to_string(), vec!["n".to_string()]);
        kb.apply_overrides(&overrides);

        let event = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(kb.get_action(&event), Some(Action::Next));

        // the old bindings for that action are replaced
        let event = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(kb.get_action(&event), None);

        // other actions are untouched
        let event = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(kb.get_action(&event), Some(Action::Previous));
    }

    #[test]
    fn test_overrides_skip_unknowns() {
        let mut kb = Keybindings::standard();

        let mut overrides = HashMap::new();
        overrides.insert("warp_speed".to_string(), vec!["w".to_string()]);
        overrides.insert("quit".to_string(), vec!["nosuchkey".to_string()]);
        kb.apply_overrides(&overrides);

        let event = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(kb.get_action(&event), None);
        assert_eq!(kb.format_keys(Action::Quit), "unbound");
    }

    #[test]
    fn test_format_keys() {
        let kb = Keybindings::standard();
        let keys = kb.format_keys(Action::Next);
        assert!(keys.contains("Space"));
    }
}
