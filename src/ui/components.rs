//! UI Components and Layout Module
//!
//! Reusable pieces shared by the list view and the form:
//!
//! - **Bottom Bar**: running totals and context-aware keyboard shortcuts
//! - **Overlays**: status messages, confirmation dialog, help menu
//! - **Layout helpers**: centered popups and the spotlight bar

use crate::app::{App, ConfirmationState, InputMode, ViewState};
use crate::models::price::format_with_currency;
use crate::ui::colors::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

/// Renders the bottom bar: totals on the left, shortcuts on the right.
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let navbar_chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let left_content = Paragraph::new(totals_line(app))
        .alignment(Alignment::Left)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::BORDER)),
        );

    let right_content = Paragraph::new(context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Theme::MUTED))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::BORDER)),
        );

    left_content.render(navbar_chunks[0], frame.buffer_mut());
    right_content.render(navbar_chunks[1], frame.buffer_mut());
}

fn totals_line(app: &App) -> Line<'static> {
    let total = format_with_currency(app.store.total(), &app.currency);
    let remaining = format_with_currency(app.store.remaining_total(), &app.currency);

    Line::from(vec![
        Span::styled(" Total: ", Style::default().fg(Theme::SUBTLE)),
        Span::styled(total, Style::default().fg(Theme::EMPHASIS).bold()),
        Span::styled("  │  Still to buy: ", Style::default().fg(Theme::SUBTLE)),
        Span::styled(remaining, Style::default().fg(Theme::OK)),
    ])
}

fn context_shortcuts(app: &App) -> String {
    if app.has_pending_action() {
        return " [y] Confirm │ [n] Cancel ".to_string();
    }

    match (&app.view_state, &app.input_mode) {
        (ViewState::Editing(_), _) | (_, InputMode::AddArticle) => {
            " [Tab] Next field │ [←→] Category │ [⏎] Save │ [Esc] Cancel ".to_string()
        }
        (_, InputMode::HelpMenu) => " Press any key to close ".to_string(),
        _ if app.store.is_empty() => " [a] Add │ [?] Help │ [q] Quit ".to_string(),
        _ => " [a] Add │ [e] Edit │ [␣] Bought │ [d] Delete │ [C] Clear │ [?] Help │ [q] Quit "
            .to_string(),
    }
}

/// Status message bar, dismissed by the next key press.
pub fn render_message_overlay(frame: &mut Frame, area: Rect, message: &str, is_error: bool) {
    let popup_area = spotlight_bar(70, area);

    Clear.render(popup_area, frame.buffer_mut());

    let (icon, color) = if is_error {
        ("✗", Theme::ALERT)
    } else {
        ("✓", Theme::OK)
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::SUBTLE).bg(Theme::SURFACE));
    let inner_area = block.inner(popup_area);
    block.render(popup_area, frame.buffer_mut());

    let chunks = Layout::horizontal([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(24),
    ])
    .split(inner_area);

    Paragraph::new(icon)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bold())
        .render(chunks[0], frame.buffer_mut());

    Paragraph::new(message)
        .alignment(Alignment::Left)
        .style(Style::default().fg(Theme::TEXT))
        .render(chunks[1], frame.buffer_mut());

    Paragraph::new("Press any key to dismiss")
        .alignment(Alignment::Right)
        .style(Style::default().fg(Theme::MUTED))
        .render(chunks[2], frame.buffer_mut());
}

pub fn render_confirmation_dialog(frame: &mut Frame, area: Rect, app: &App) {
    let question = match &app.confirmation_state {
        ConfirmationState::None => return,
        ConfirmationState::DeleteArticle { name, .. } => format!("Delete '{}'?", name),
        ConfirmationState::ClearAll => format!("Clear all {} articles?", app.store.len()),
    };

    let popup_area = centered_rect(50, 7, area);
    Clear.render(popup_area, frame.buffer_mut());

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(question, Style::default().fg(Theme::TEXT).bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Theme::ALERT).bold()),
            Span::raw(" Yes    "),
            Span::styled("[n]", Style::default().fg(Theme::OK).bold()),
            Span::raw(" No"),
        ]),
    ];

    Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .title(" Confirm ")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::ALERT).bg(Theme::SURFACE)),
        )
        .render(popup_area, frame.buffer_mut());
}

/// Keyboard shortcut reference.
pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(52, 18, area);
    Clear.render(popup_area, frame.buffer_mut());

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<8}", k), Style::default().fg(Theme::EMPHASIS)),
            Span::raw(what),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            "List",
            Style::default().fg(Theme::ALERT).bold(),
        )),
        key("↑/k ↓/j", "Move between articles"),
        key("a", "Add a new article"),
        key("e / ⏎", "Edit the selected article"),
        key("Space", "Mark bought / not bought"),
        key("d", "Delete the selected article"),
        key("C", "Clear all articles"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Form",
            Style::default().fg(Theme::ALERT).bold(),
        )),
        key("Tab", "Next field"),
        key("← →", "Change category"),
        key("⏎", "Save"),
        key("Esc", "Cancel"),
        Line::from(""),
        Line::from(Span::styled(
            "Prices use a comma as decimal separator (1,50)",
            Style::default().fg(Theme::MUTED).italic(),
        )),
    ];

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" Keyboard Shortcuts ")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::ACCENT).bg(Theme::SURFACE)),
        )
        .style(Style::default().fg(Theme::TEXT))
        .render(popup_area, frame.buffer_mut());
}

pub fn spotlight_bar(width_percent: u16, r: Rect) -> Rect {
    let layout = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(1),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .split(layout[1])[1]
}

/// A `width` x `height` box in the middle of `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
