use crate::models::ArticleStore;
use crate::models::price::{format_amount, format_with_currency};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const NAME_COLUMN: usize = 28;

/// Builds the grouped listing printed by `shoplist list`.
pub fn format_listing(store: &ArticleStore, currency: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let bar = "┃".bright_magenta();

    if store.is_empty() {
        lines.push(format!("{}  {}", bar, "All articles have been cleared!".green()));
        return lines;
    }

    for group in store.groups() {
        let mut header = group.category.bold().to_string();
        if !group.known {
            header.push_str(&format!(" {}", "(not in category list)".dimmed()));
        }
        header.push_str(&format!(
            " {}",
            format!("({})", format_with_currency(group.subtotal(), currency)).bright_black()
        ));
        lines.push(format!("{}  {}", bar, header));

        let count = group.articles.len();
        for (idx, article) in group.articles.iter().enumerate() {
            let branch = if idx == count - 1 { "└─" } else { "├─" };
            let name = pad_to_width(&article.name, NAME_COLUMN);
            let name = if article.is_bought {
                name.strikethrough().dimmed().to_string()
            } else {
                name.bright_white().to_string()
            };
            let price = if article.price > 0.0 {
                format_with_currency(article.price, currency)
            } else {
                String::new()
            };
            let check = if article.is_bought { "✔" } else { " " };

            lines.push(format!(
                "{}  {} {} {} {:>12} {}",
                bar,
                branch.bright_black(),
                article.id.short().yellow(),
                name,
                price,
                check.green()
            ));
        }
    }

    lines.push(format!("{}", "─".repeat(60).bright_magenta()));
    lines.push(format!(
        "{}  {} {}",
        bar,
        "Total:".bold(),
        format_with_currency(store.total(), currency).bright_yellow().bold()
    ));
    lines.push(format!(
        "{}  {} {}",
        bar,
        "Still to buy:".bold(),
        format!("{} {}", format_amount(store.remaining_total()), currency).bright_cyan()
    ));
    lines
}

/// Pads with spaces up to `width` display columns, truncating with `…`.
fn pad_to_width(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    if current <= width {
        return format!("{}{}", text, " ".repeat(width - current));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
