//! Keyboard Input Handling Module
//!
//! Translates terminal key events into application state changes. Each key
//! press is one interaction cycle: it may mutate the store, which persists
//! immediately, and the next frame is drawn from the new state.

use crate::app::{App, FormField, InputMode};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main keyboard event handler and dispatcher.
/// Returns `true` when the application should quit.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.has_pending_action() {
        handle_confirmation_keys(key, app);
        return false;
    }

    if app.is_form_open() {
        handle_form_keys(key, app);
        return false;
    }

    if app.input_mode == InputMode::HelpMenu {
        app.input_mode = InputMode::Normal;
        return false;
    }

    handle_list_keys(key, app)
}

fn handle_confirmation_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_pending_action(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_pending_action(),
        _ => {}
    }
}

/// Keys while the add or edit form is open.
fn handle_form_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_previous_field(),
        KeyCode::Left if app.form.focus == FormField::Category => app.form_cycle_category(false),
        KeyCode::Right | KeyCode::Char(' ') if app.form.focus == FormField::Category => {
            app.form_cycle_category(true)
        }
        KeyCode::Backspace => app.form_pop_char(),
        KeyCode::Char(c) => app.form_push_char(c),
        _ => {}
    }
}

/// Keys while browsing the list.
fn handle_list_keys(key: KeyEvent, app: &mut App) -> bool {
    // Any key dismisses a status message before doing its own work.
    app.clear_messages();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('?') => app.input_mode = InputMode::HelpMenu,
        KeyCode::Down | KeyCode::Char('j') => app.next_article(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_article(),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_add_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_editing(),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected_bought(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_confirmation(),
        KeyCode::Char('C') => app.request_clear_confirmation(),
        _ => {}
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewState;
    use crate::models::{ArticleStore, CategoryList, CsvStorage};
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        let storage = CsvStorage::new(dir.path().join("articles.csv"));
        let store = ArticleStore::open(storage, CategoryList::default()).unwrap();
        App::new(store, "EUR".to_string())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_events(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_article_through_form() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::AddArticle);
        type_text(&mut app, "Apples");
        press(&mut app, KeyCode::Tab);
        // Recipes -> Produce
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2,40");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        let article = &app.store.articles()[0];
        assert_eq!(article.name, "Apples");
        assert_eq!(article.category, "Produce");
        assert_eq!(article.price, 2.4);
        assert!(app.success_message.is_some());
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.form.name, "q");

        press(&mut app, KeyCode::Esc);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_edit_toggle_and_delete_keys() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Soap");
        press(&mut app, KeyCode::Enter);
        let id = app.selected_article_id().unwrap();

        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.get(id).unwrap().is_bought);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.view_state, ViewState::Editing(id));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view_state, ViewState::Viewing);
        assert_eq!(app.store.get(id).unwrap().name, "Soa");

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.len(), 1);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_help_toggles_and_any_key_closes_it() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.input_mode, InputMode::HelpMenu);
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        press(&mut app, KeyCode::Char('a'));
        let quit = handle_key_events(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert!(quit);
    }
}
