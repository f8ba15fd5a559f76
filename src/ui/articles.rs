//! Article List Page
//!
//! The single screen of the app: a grouped list of articles with the bottom
//! bar, plus whatever overlay the current state asks for (form, dialog, help,
//! status message). Overlays are always drawn last.

use crate::app::{App, InputMode, ListRow, ViewState};
use crate::models::price::format_with_currency;
use crate::ui::colors::Theme;
use crate::ui::components::{
    render_bottom_bar, render_confirmation_dialog, render_help_overlay, render_message_overlay,
};
use crate::ui::form;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Widget, Wrap},
};

pub fn render(frame: &mut Frame, app: &App) {
    let main_area = frame.area();

    let block = Block::bordered()
        .title(" 󰒚 Article Price Calculator ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::BORDER));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).split(inner_area);

    if app.store.is_empty() {
        render_empty_list(frame, chunks[0]);
    } else {
        render_article_list(frame, chunks[0], app);
    }

    render_bottom_bar(frame, chunks[1], app);
    render_overlays(frame, main_area, app);
}

fn render_overlays(frame: &mut Frame, area: Rect, app: &App) {
    if app.has_pending_action() {
        render_confirmation_dialog(frame, area, app);
        return;
    }

    if app.is_form_open() {
        form::render(frame, area, app);
        return;
    }

    if app.input_mode == InputMode::HelpMenu {
        render_help_overlay(frame, area);
        return;
    }

    if let Some(ref message) = app.error_message {
        render_message_overlay(frame, area, message, true);
    } else if let Some(ref message) = app.success_message {
        render_message_overlay(frame, area, message, false);
    }
}

fn render_empty_list(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .split(area);

    let text = vec![
        Line::from(Span::styled(
            "All articles have been cleared!",
            Style::default().fg(Theme::OK).bold(),
        )),
        Line::from(""),
        Line::from("Press 'a' to add an article to your shopping list."),
    ];

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Theme::TEXT))
        .render(chunks[1], frame.buffer_mut());
}

fn render_article_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .title(format!(" Articles ({}) ", app.store.len()))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::SUBTLE));

    let editing = match app.view_state {
        ViewState::Editing(id) => Some(id),
        ViewState::Viewing => None,
    };

    let items: Vec<ListItem> = app
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| match row {
            ListRow::Category { name, known } => category_item(name, *known, i > 0),
            ListRow::Article(id) => {
                let selected = i == app.selected_row;
                match app.store.get(*id) {
                    Some(article) => {
                        let mut spans = vec![Span::styled(
                            if selected { "  ▶ " } else { "  - " },
                            Style::default().fg(Theme::ALERT),
                        )];

                        let mut name_style = Style::default().fg(Theme::TEXT);
                        if article.is_bought {
                            name_style = name_style
                                .fg(Theme::MUTED)
                                .add_modifier(Modifier::CROSSED_OUT);
                        }
                        if editing == Some(*id) {
                            name_style = name_style.fg(Theme::EMPHASIS);
                        }
                        spans.push(Span::styled(article.name.clone(), name_style));

                        if article.price > 0.0 {
                            spans.push(Span::styled(
                                format!(" - {}", format_with_currency(article.price, &app.currency)),
                                Style::default().fg(Theme::SUBTLE),
                            ));
                        }
                        if article.is_bought {
                            spans.push(Span::styled("  ✔", Style::default().fg(Theme::OK)));
                        }

                        ListItem::new(Line::from(spans))
                    }
                    None => ListItem::new(""),
                }
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Theme::SELECTION).bold());

    let mut list_state = ListState::default();
    if app.selected_article_id().is_some() {
        list_state.select(Some(app.selected_row));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn category_item(name: &str, known: bool, spaced: bool) -> ListItem<'static> {
    let color = if known { Theme::ACCENT } else { Theme::UNLISTED };
    let mut lines = Vec::new();
    if spaced {
        lines.push(Line::from(""));
    }
    let mut header = vec![Span::styled(
        format!("{}:", name),
        Style::default().fg(color).bold(),
    )];
    if !known {
        header.push(Span::styled(
            " (not in category list)",
            Style::default().fg(Theme::MUTED).italic(),
        ));
    }
    lines.push(Line::from(header));
    ListItem::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArticleDraft, ArticleStore, CategoryList, CsvStorage};
    use ratatui::{Terminal, backend::TestBackend};
    use tempfile::TempDir;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_groups_and_total() {
        let dir = TempDir::new().unwrap();
        let storage = CsvStorage::new(dir.path().join("articles.csv"));
        let mut store = ArticleStore::open(storage, CategoryList::default()).unwrap();
        store
            .add(&ArticleDraft::new("Milk", "Milk products", "1,50"))
            .unwrap();
        store.add(&ArticleDraft::new("Bread", "Bakery", "2")).unwrap();
        let app = App::new(store, "EUR".to_string());

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);

        let bakery = text.find("Bakery:").unwrap();
        let milk = text.find("Milk products:").unwrap();
        assert!(bakery < milk);
        assert!(text.contains("Bread - 2.00 EUR"));
        assert!(text.contains("Total: 3.50 EUR"));
    }

    #[test]
    fn test_renders_cleared_message_when_empty() {
        let dir = TempDir::new().unwrap();
        let storage = CsvStorage::new(dir.path().join("articles.csv"));
        let store = ArticleStore::open(storage, CategoryList::default()).unwrap();
        let app = App::new(store, "EUR".to_string());

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("All articles have been cleared!"));
    }
}
