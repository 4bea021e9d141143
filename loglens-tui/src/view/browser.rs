//! Log table screen

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::{App, Screen};
use crate::browser::TaskStatus;
use crate::format;
use crate::keymap;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [header, table_area, pagination, status, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let mut title = vec![Span::styled(
        "Error logs",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if app.browser.loading {
        title.push(Span::styled(
            "  Loading...",
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), header);

    let rows: Vec<Row> = app
        .browser
        .rows
        .iter()
        .map(|record| {
            Row::new(vec![
                record.id.to_string(),
                format::timestamp(record.log_time),
                record.application_label().to_string(),
                format::error_preview(&record.error_message),
                format::analysis_preview(&record.analysis_result),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(19),
            Constraint::Length(16),
            Constraint::Min(30),
            Constraint::Length(33),
        ],
    )
    .header(
        Row::new(vec!["ID", "Time", "Application", "Error", "Analysis"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::bordered())
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(app.browser.selected));
    frame.render_stateful_widget(table, table_area, &mut state);

    frame.render_widget(Paragraph::new(pagination_line(app)), pagination);

    let status_style = match app.browser.task.status {
        TaskStatus::Idle => Style::default().fg(Color::DarkGray),
        TaskStatus::Running => Style::default().fg(Color::Yellow),
        TaskStatus::Success => Style::default().fg(Color::Green),
        TaskStatus::Error => Style::default().fg(Color::Red),
    };
    frame.render_widget(
        Paragraph::new(app.browser.task.message.as_str()).style(status_style),
        status,
    );

    // A failed load reports out-of-band here, in place of the help line
    if let Some(notice) = &app.browser.notice {
        frame.render_widget(
            Paragraph::new(notice.as_str()).style(Style::default().fg(Color::Red)),
            footer,
        );
    } else {
        let help_text = keymap::help_entries(Screen::Browser)
            .collect::<Vec<_>>()
            .join(" · ");
        frame.render_widget(
            Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray)),
            footer,
        );
    }
}

fn pagination_line(app: &App) -> Line<'static> {
    let browser = &app.browser;

    if let Some(buffer) = &browser.page_input {
        return Line::styled(
            format!("go to page: {}_  (enter to load, esc to cancel)", buffer),
            Style::default().fg(Color::Yellow),
        );
    }

    let enabled = Style::default();
    let disabled = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled(
            "‹ prev",
            if browser.prev_enabled() { enabled } else { disabled },
        ),
        Span::raw(format!(
            "  page {} of {}  ",
            browser.displayed_page(),
            browser.pagination.total_pages
        )),
        Span::styled(
            "next ›",
            if browser.next_enabled() { enabled } else { disabled },
        ),
        Span::styled(
            format!(
                "   {} records · {} per page",
                browser.pagination.total_records, browser.pagination.page_size
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
