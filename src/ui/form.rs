//! Add / edit form overlay.

use crate::app::{App, FormField, ViewState};
use crate::ui::colors::Theme;
use crate::ui::components::centered_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 15, area);
    Clear.render(popup_area, frame.buffer_mut());

    let title = match app.view_state {
        ViewState::Editing(_) => " Edit Article ",
        ViewState::Viewing => " Add Article ",
    };

    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::ACCENT).bg(Theme::SURFACE));
    let inner_area = block.inner(popup_area);
    block.render(popup_area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .split(inner_area);

    let category = app
        .store
        .categories()
        .get(app.form.category_index)
        .unwrap_or_default();

    render_field(frame, chunks[0], "Article Name", &app.form.name, app.form.focus == FormField::Name);
    render_field(
        frame,
        chunks[1],
        "Category",
        &format!("◀ {} ▶", category),
        app.form.focus == FormField::Category,
    );
    render_field(
        frame,
        chunks[2],
        "Price (use comma as decimal separator)",
        &app.form.price,
        app.form.focus == FormField::Price,
    );

    let footer = match &app.form.error {
        Some(error) => Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(Theme::ALERT).bold(),
        )),
        None => Line::from(Span::styled(
            "⏎ Save • ⎋ Cancel • Tab Next field",
            Style::default().fg(Theme::MUTED),
        )),
    };
    Paragraph::new(footer)
        .alignment(Alignment::Center)
        .render(chunks[4], frame.buffer_mut());
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_color = if focused {
        Theme::EMPHASIS
    } else {
        Theme::BORDER
    };

    let mut text = value.to_string();
    if focused {
        text.push('▏');
    }

    Paragraph::new(text)
        .style(Style::default().fg(Theme::TEXT))
        .block(
            Block::bordered()
                .title(format!(" {} ", label))
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        )
        .render(area, frame.buffer_mut());
}
