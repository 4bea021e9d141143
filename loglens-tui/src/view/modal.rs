//! Detail-viewer overlay

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::view::centered_rect;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(70, 60, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(app.browser.modal.body.as_str())
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .title("Log details")
                    .title_bottom("esc to close · click outside to dismiss")
                    .border_style(Style::default().fg(Color::Cyan)),
            ),
        area,
    );

    // Remember the surface so mouse dismissal can tell backdrop from content
    app.modal_area = Some(area);
}
