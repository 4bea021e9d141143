//! Login screen

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::{App, Screen};
use crate::auth::{CaptchaImage, Field, FieldId};
use crate::keymap;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let width = area.width.min(64);
    let box_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(19) / 2,
        width,
        height: 19.min(area.height),
    };

    let [title, username, username_err, password, password_err, captcha, captcha_err, captcha_info, submit, help] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(box_area);

    frame.render_widget(
        Paragraph::new("Log Analysis Service")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .centered(),
        title,
    );

    draw_field(frame, app, FieldId::Username, username, username_err, false);
    draw_field(frame, app, FieldId::Password, password, password_err, true);
    draw_field(frame, app, FieldId::Captcha, captcha, captcha_err, false);

    let (info, info_style) = match &app.login.captcha_image {
        CaptchaImage::Loading => (
            "captcha: fetching image...".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        CaptchaImage::Saved(path) => (
            format!("captcha image: {} (ctrl-r or click to refresh)", path.display()),
            Style::default().fg(Color::DarkGray),
        ),
        CaptchaImage::Failed(message) => (
            format!("captcha unavailable: {}", message),
            Style::default().fg(Color::Red),
        ),
    };
    frame.render_widget(Paragraph::new(info).style(info_style), captcha_info);
    app.captcha_area = Some(captcha_info);

    let submit_line = if app.login.submitting {
        Line::styled("Signing in...", Style::default().fg(Color::Yellow))
    } else {
        Line::styled("[ Sign in ]", Style::default().add_modifier(Modifier::BOLD))
    };
    frame.render_widget(Paragraph::new(submit_line).centered(), submit);

    let help_text = keymap::help_entries(Screen::Login)
        .collect::<Vec<_>>()
        .join(" · ");
    frame.render_widget(
        Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        help,
    );
}

fn draw_field(
    frame: &mut Frame,
    app: &App,
    id: FieldId,
    area: Rect,
    error_area: Rect,
    masked: bool,
) {
    let field: &Field = app.login.field(id);
    let focused = app.login.focus == Some(id);

    let border = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let shown = if masked {
        "*".repeat(field.value.chars().count())
    } else {
        field.value.clone()
    };

    frame.render_widget(
        Paragraph::new(shown).block(
            Block::bordered()
                .title(id.label())
                .border_style(border),
        ),
        area,
    );

    if let Some(error) = &field.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            error_area,
        );
    }
}
