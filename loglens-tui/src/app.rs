//! Top-level application state
//!
//! Routes messages to the controller owning the active screen and applies
//! keymap actions. The two controllers share nothing; the app only decides
//! who sees an event.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::auth::{LoginForm, LoginResolution};
use crate::browser::LogBrowser;
use crate::config::Config;
use crate::keymap::{self, Action};
use crate::msg::{Cmd, Msg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Browser,
}

pub struct App {
    pub screen: Screen,
    pub login: LoginForm,
    pub browser: LogBrowser,
    pub should_quit: bool,
    /// Last rendered modal surface, for backdrop hit-testing
    pub modal_area: Option<Rect>,
    /// Last rendered captcha line; clicking it refreshes the image
    pub captcha_area: Option<Rect>,
}

impl App {
    /// Build the initial state plus the command that kicks things off
    /// (the first captcha fetch)
    pub fn new(config: &Config) -> (Self, Cmd) {
        let app = Self {
            screen: Screen::Login,
            login: LoginForm::new(),
            browser: LogBrowser::new(config.page_size, config.refresh_delay),
            should_quit: false,
            modal_area: None,
            captcha_area: None,
        };
        (app, Cmd::FetchCaptcha)
    }

    pub fn update(&mut self, msg: Msg) -> Cmd {
        match msg {
            Msg::Key(key) => self.on_key(key),
            Msg::Mouse(mouse) => self.on_mouse(mouse),
            Msg::Resize(..) => Cmd::None,
            Msg::CaptchaReady(result) => {
                self.login.captcha_ready(result);
                Cmd::None
            }
            Msg::LoginSettled(result) => match self.login.login_settled(result) {
                LoginResolution::Accepted => {
                    // Terminal transition for the login controller; the
                    // browser starts with an unconditional first-page load.
                    self.screen = Screen::Browser;
                    self.browser.start_load(1)
                }
                LoginResolution::Denied(cmd) => cmd,
            },
            Msg::LogsSettled {
                token,
                page,
                result,
            } => self.browser.logs_settled(token, page, result),
            Msg::AnalysisSettled(result) => self.browser.analysis_settled(result),
            Msg::RefreshDue => self.browser.refresh_due(),
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Cmd {
        // The modal is topmost: it swallows everything except dismissal
        if self.screen == Screen::Browser && self.browser.modal.visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.browser.close_modal();
            }
            return Cmd::None;
        }

        // Page-number editing is a sub-mode with its own input handling
        if self.screen == Screen::Browser && self.browser.page_input.is_some() {
            match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => self.browser.page_input_char(c),
                KeyCode::Backspace => self.browser.page_input_backspace(),
                KeyCode::Enter => return self.browser.commit_page_input(),
                KeyCode::Esc => self.browser.cancel_page_edit(),
                _ => {}
            }
            return Cmd::None;
        }

        if let Some(action) = keymap::lookup(self.screen, key.code, key.modifiers) {
            return self.apply(action);
        }

        // Unbound keys are text input for the focused login field
        if self.screen == Screen::Login {
            match key.code {
                KeyCode::Char(c) => self.login.insert_char(c),
                KeyCode::Backspace => self.login.backspace(),
                _ => {}
            }
        }
        Cmd::None
    }

    fn apply(&mut self, action: Action) -> Cmd {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Cmd::Quit
            }
            Action::FocusNext => {
                self.login.focus_next();
                Cmd::None
            }
            Action::FocusPrev => {
                self.login.focus_prev();
                Cmd::None
            }
            Action::Submit => self.login.submit(),
            Action::RefreshCaptcha => self.login.refresh_captcha(),
            Action::PrevPage => self.browser.prev_page(),
            Action::NextPage => self.browser.next_page(),
            Action::CyclePageSize => self.browser.cycle_page_size(),
            Action::EditPage => {
                self.browser.begin_page_edit();
                Cmd::None
            }
            Action::TriggerAnalysis => self.browser.trigger_analysis(),
            Action::SelectNext => {
                self.browser.select_next();
                Cmd::None
            }
            Action::SelectPrev => {
                self.browser.select_prev();
                Cmd::None
            }
            Action::OpenDetails => {
                self.browser.open_details();
                Cmd::None
            }
            Action::CloseModal => {
                self.browser.close_modal();
                Cmd::None
            }
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Cmd {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Cmd::None;
        }
        let position = Position::new(mouse.column, mouse.row);

        // A click on the backdrop (anywhere outside the modal surface)
        // dismisses the modal
        if self.screen == Screen::Browser && self.browser.modal.visible {
            if !self
                .modal_area
                .is_some_and(|area| area.contains(position))
            {
                self.browser.close_modal();
            }
            return Cmd::None;
        }

        // Clicking the captcha line fetches a fresh image
        if self.screen == Screen::Login
            && self
                .captcha_area
                .is_some_and(|area| area.contains(position))
        {
            return self.login.refresh_captcha();
        }

        Cmd::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use loglens_client::LoginOutcome;

    fn app() -> App {
        App::new(&Config::default()).0
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn initialization_fetches_a_captcha() {
        let (_, cmd) = App::new(&Config::default());
        assert_eq!(cmd, Cmd::FetchCaptcha);
    }

    #[test]
    fn accepted_login_switches_screen_and_loads_page_one() {
        let mut app = app();
        let cmd = app.update(Msg::LoginSettled(Ok(LoginOutcome::Accepted)));

        assert_eq!(app.screen, Screen::Browser);
        assert!(matches!(cmd, Cmd::LoadLogs { page: 1, .. }));
    }

    #[test]
    fn typed_characters_land_in_the_focused_field() {
        let mut app = app();
        app.update(Msg::Key(key(KeyCode::Char('b'))));
        app.update(Msg::Key(key(KeyCode::Char('o'))));
        app.update(Msg::Key(key(KeyCode::Char('b'))));
        assert_eq!(app.login.username.value, "bob");

        app.update(Msg::Key(key(KeyCode::Tab)));
        app.update(Msg::Key(key(KeyCode::Char('x'))));
        assert_eq!(app.login.password.value, "x");
    }

    #[test]
    fn modal_swallows_browser_keys_until_dismissed() {
        let mut app = app();
        app.screen = Screen::Browser;
        app.browser.modal.visible = true;

        // 'a' would trigger analysis, but the modal is topmost
        let cmd = app.update(Msg::Key(key(KeyCode::Char('a'))));
        assert_eq!(cmd, Cmd::None);
        assert!(!app.browser.task.running);

        app.update(Msg::Key(key(KeyCode::Esc)));
        assert!(!app.browser.modal.visible);
    }

    #[test]
    fn backdrop_click_dismisses_modal_but_surface_click_does_not() {
        let mut app = app();
        app.screen = Screen::Browser;
        app.browser.modal.visible = true;
        app.modal_area = Some(Rect::new(10, 5, 40, 10));

        app.update(Msg::Mouse(click(15, 8)));
        assert!(app.browser.modal.visible);

        app.update(Msg::Mouse(click(2, 2)));
        assert!(!app.browser.modal.visible);
    }

    #[test]
    fn captcha_click_requests_a_fresh_image() {
        let mut app = app();
        app.captcha_area = Some(Rect::new(0, 10, 40, 1));

        let cmd = app.update(Msg::Mouse(click(5, 10)));
        assert_eq!(cmd, Cmd::FetchCaptcha);

        let cmd = app.update(Msg::Mouse(click(5, 0)));
        assert_eq!(cmd, Cmd::None);
    }
}
