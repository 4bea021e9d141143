//! Terminal rendering
//!
//! Pure projection of application state onto the frame; the only state
//! written back are the rendered areas used for mouse hit-testing.

mod browser;
mod login;
mod modal;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{App, Screen};

pub fn draw(frame: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Login => login::draw(frame, app),
        Screen::Browser => browser::draw(frame, app),
    }

    if app.screen == Screen::Browser && app.browser.modal.visible {
        modal::draw(frame, app);
    } else {
        app.modal_area = None;
    }
}

/// A rectangle of the given percentage size, centered in `area`
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
