//! Key bindings
//!
//! One explicit table maps (screen, key) to an action; it is consulted for
//! every key press and also drives the help line, so the two can never
//! drift apart. Plain character keys without a binding fall through to
//! text input on the login screen.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::Screen;

/// Everything a key press can mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    Submit,
    RefreshCaptcha,
    PrevPage,
    NextPage,
    CyclePageSize,
    EditPage,
    TriggerAnalysis,
    SelectNext,
    SelectPrev,
    OpenDetails,
    CloseModal,
}

/// A single entry of the binding table
pub struct Binding {
    pub screen: Screen,
    pub code: KeyCode,
    pub mods: KeyModifiers,
    pub action: Action,
    pub help: &'static str,
}

/// The complete subscription table, constructed once
pub const BINDINGS: &[Binding] = &[
    // Login screen
    Binding {
        screen: Screen::Login,
        code: KeyCode::Tab,
        mods: KeyModifiers::NONE,
        action: Action::FocusNext,
        help: "tab next field",
    },
    Binding {
        screen: Screen::Login,
        code: KeyCode::BackTab,
        mods: KeyModifiers::SHIFT,
        action: Action::FocusPrev,
        help: "shift-tab previous field",
    },
    Binding {
        screen: Screen::Login,
        code: KeyCode::Enter,
        mods: KeyModifiers::NONE,
        action: Action::Submit,
        help: "enter sign in",
    },
    Binding {
        screen: Screen::Login,
        code: KeyCode::Char('r'),
        mods: KeyModifiers::CONTROL,
        action: Action::RefreshCaptcha,
        help: "ctrl-r new captcha",
    },
    Binding {
        screen: Screen::Login,
        code: KeyCode::Char('c'),
        mods: KeyModifiers::CONTROL,
        action: Action::Quit,
        help: "ctrl-c quit",
    },
    // Browser screen
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Left,
        mods: KeyModifiers::NONE,
        action: Action::PrevPage,
        help: "← previous page",
    },
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Right,
        mods: KeyModifiers::NONE,
        action: Action::NextPage,
        help: "→ next page",
    },
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Up,
        mods: KeyModifiers::NONE,
        action: Action::SelectPrev,
        help: "↑ select",
    },
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Down,
        mods: KeyModifiers::NONE,
        action: Action::SelectNext,
        help: "↓ select",
    },
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Enter,
        mods: KeyModifiers::NONE,
        action: Action::OpenDetails,
        help: "enter details",
    },
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Char('a'),
        mods: KeyModifiers::NONE,
        action: Action::TriggerAnalysis,
        help: "a run analysis",
    },
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Char('s'),
        mods: KeyModifiers::NONE,
        action: Action::CyclePageSize,
        help: "s page size",
    },
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Char('g'),
        mods: KeyModifiers::NONE,
        action: Action::EditPage,
        help: "g go to page",
    },
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Esc,
        mods: KeyModifiers::NONE,
        action: Action::CloseModal,
        help: "esc close details",
    },
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Char('q'),
        mods: KeyModifiers::NONE,
        action: Action::Quit,
        help: "q quit",
    },
    Binding {
        screen: Screen::Browser,
        code: KeyCode::Char('c'),
        mods: KeyModifiers::CONTROL,
        action: Action::Quit,
        help: "ctrl-c quit",
    },
];

/// Look up the action bound to a key on the given screen
pub fn lookup(screen: Screen, code: KeyCode, mods: KeyModifiers) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|b| b.screen == screen && b.code == code && b.mods == mods)
        .map(|b| b.action)
}

/// Help entries for a screen, in table order
pub fn help_entries(screen: Screen) -> impl Iterator<Item = &'static str> {
    BINDINGS
        .iter()
        .filter(move |b| b.screen == screen)
        .map(|b| b.help)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_respects_screen_and_modifiers() {
        assert_eq!(
            lookup(Screen::Browser, KeyCode::Char('a'), KeyModifiers::NONE),
            Some(Action::TriggerAnalysis)
        );
        // 'a' is text input on the login screen, not an action
        assert_eq!(
            lookup(Screen::Login, KeyCode::Char('a'), KeyModifiers::NONE),
            None
        );
        // ctrl-r refreshes the captcha; plain 'r' does not
        assert_eq!(
            lookup(Screen::Login, KeyCode::Char('r'), KeyModifiers::CONTROL),
            Some(Action::RefreshCaptcha)
        );
        assert_eq!(
            lookup(Screen::Login, KeyCode::Char('r'), KeyModifiers::NONE),
            None
        );
    }
}
