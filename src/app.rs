use crate::models::price::format_amount;
use crate::models::{ArticleDraft, ArticleId, ArticleStore};
use crate::ui::articles;
use ratatui::Frame;

/// Whether the list is being browsed or one article is open in the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Viewing,
    Editing(ArticleId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// The creation form is open
    AddArticle,
    HelpMenu,
}

/// Actions that wait for a y/n answer before they touch the data file.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationState {
    None,
    DeleteArticle { id: ArticleId, name: String },
    ClearAll,
}

/// One line of the grouped list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRow {
    Category { name: String, known: bool },
    Article(ArticleId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Price,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Category,
            FormField::Category => FormField::Price,
            FormField::Price => FormField::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Price,
            FormField::Category => FormField::Name,
            FormField::Price => FormField::Category,
        }
    }
}

/// Field values of the add/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleForm {
    pub name: String,
    pub category_index: usize,
    pub price: String,
    pub focus: FormField,
    /// Validation problem shown under the fields
    pub error: Option<String>,
}

impl ArticleForm {
    fn empty() -> Self {
        Self {
            name: String::new(),
            category_index: 0,
            price: String::new(),
            focus: FormField::Name,
            error: None,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub store: ArticleStore,
    pub currency: String,
    pub view_state: ViewState,
    pub input_mode: InputMode,
    pub confirmation_state: ConfirmationState,
    pub form: ArticleForm,
    pub rows: Vec<ListRow>,
    pub selected_row: usize,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(store: ArticleStore, currency: String) -> Self {
        let mut app = Self {
            store,
            currency,
            view_state: ViewState::Viewing,
            input_mode: InputMode::Normal,
            confirmation_state: ConfirmationState::None,
            form: ArticleForm::empty(),
            rows: Vec::new(),
            selected_row: 0,
            error_message: None,
            success_message: None,
        };

        app.refresh_rows(None);
        app
    }

    /// Rebuilds the grouped rows and puts the cursor back on `keep` when it
    /// still exists.
    pub fn refresh_rows(&mut self, keep: Option<ArticleId>) {
        let keep = keep.or_else(|| self.selected_article_id());
        let previous_row = self.selected_row;

        self.rows.clear();
        for group in self.store.groups() {
            self.rows.push(ListRow::Category {
                name: group.category.to_string(),
                known: group.known,
            });
            for article in group.articles {
                self.rows.push(ListRow::Article(article.id));
            }
        }

        let by_id = keep.and_then(|id| {
            self.rows
                .iter()
                .position(|row| *row == ListRow::Article(id))
        });

        self.selected_row = match by_id {
            Some(row) => row,
            None => self.nearest_article_row(previous_row).unwrap_or(0),
        };
    }

    fn nearest_article_row(&self, from: usize) -> Option<usize> {
        let from = from.min(self.rows.len().saturating_sub(1));
        (from..self.rows.len())
            .chain((0..from).rev())
            .find(|&i| matches!(self.rows.get(i), Some(ListRow::Article(_))))
    }

    pub fn selected_article_id(&self) -> Option<ArticleId> {
        match self.rows.get(self.selected_row) {
            Some(ListRow::Article(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn next_article(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let found = (1..=len)
            .map(|step| (self.selected_row + step) % len)
            .find(|&i| matches!(self.rows[i], ListRow::Article(_)));
        if let Some(row) = found {
            self.selected_row = row;
        }
    }

    pub fn previous_article(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let found = (1..=len)
            .map(|step| (self.selected_row + len - step) % len)
            .find(|&i| matches!(self.rows[i], ListRow::Article(_)));
        if let Some(row) = found {
            self.selected_row = row;
        }
    }

    pub fn open_add_form(&mut self) {
        self.clear_messages();
        self.view_state = ViewState::Viewing;
        self.form = ArticleForm::empty();
        self.input_mode = InputMode::AddArticle;
    }

    /// `Viewing -> Editing(id)` for the article under the cursor.
    pub fn start_editing(&mut self) {
        let Some(id) = self.selected_article_id() else {
            return;
        };
        let Some(article) = self.store.get(id) else {
            return;
        };

        let draft = ArticleDraft::from_article(article);
        // Articles from an edited category list fall back to the first entry.
        let category_index = self.store.categories().rank(&draft.category).unwrap_or(0);

        self.clear_messages();
        self.form = ArticleForm {
            name: draft.name,
            category_index,
            price: draft.price,
            focus: FormField::Name,
            error: None,
        };
        self.input_mode = InputMode::Normal;
        self.view_state = ViewState::Editing(id);
    }

    pub fn is_form_open(&self) -> bool {
        self.input_mode == InputMode::AddArticle || matches!(self.view_state, ViewState::Editing(_))
    }

    fn form_draft(&self) -> ArticleDraft {
        let category = self
            .store
            .categories()
            .get(self.form.category_index)
            .unwrap_or_default()
            .to_string();
        ArticleDraft::new(self.form.name.clone(), category, self.form.price.clone())
    }

    /// Saves the open form. Validation problems keep the form open.
    pub fn submit_form(&mut self) {
        let draft = self.form_draft();

        let result = match self.view_state {
            ViewState::Editing(id) => self.store.update(id, &draft).map(|_| id),
            ViewState::Viewing => self.store.add(&draft),
        };

        match result {
            Ok(id) => {
                let message = match self.view_state {
                    ViewState::Editing(_) => format!("Updated article {}", draft.name.trim()),
                    ViewState::Viewing => self.added_message(id),
                };
                self.close_form();
                self.refresh_rows(Some(id));
                self.set_success_message(message);
            }
            Err(e) if e.is_validation() => {
                self.form.error = Some(e.to_string());
            }
            Err(e) => {
                self.close_form();
                self.set_error_message(e.to_string());
            }
        }
    }

    fn added_message(&self, id: ArticleId) -> String {
        match self.store.get(id) {
            Some(article) => format!(
                "Added article {} with price {} in category {}",
                article.name,
                format_amount(article.price),
                article.category
            ),
            None => "Article added".to_string(),
        }
    }

    /// Discards the form and returns to `Viewing`.
    pub fn close_form(&mut self) {
        self.view_state = ViewState::Viewing;
        if self.input_mode == InputMode::AddArticle {
            self.input_mode = InputMode::Normal;
        }
        self.form = ArticleForm::empty();
    }

    pub fn form_push_char(&mut self, c: char) {
        match self.form.focus {
            FormField::Name => self.form.name.push(c),
            FormField::Price => self.form.price.push(c),
            FormField::Category => {}
        }
        self.form.error = None;
    }

    pub fn form_pop_char(&mut self) {
        match self.form.focus {
            FormField::Name => {
                self.form.name.pop();
            }
            FormField::Price => {
                self.form.price.pop();
            }
            FormField::Category => {}
        }
    }

    pub fn form_next_field(&mut self) {
        self.form.focus = self.form.focus.next();
    }

    pub fn form_previous_field(&mut self) {
        self.form.focus = self.form.focus.previous();
    }

    pub fn form_cycle_category(&mut self, forward: bool) {
        let count = self.store.categories().len();
        if count == 0 {
            return;
        }
        self.form.category_index = if forward {
            (self.form.category_index + 1) % count
        } else {
            (self.form.category_index + count - 1) % count
        };
    }

    pub fn toggle_selected_bought(&mut self) {
        let Some(id) = self.selected_article_id() else {
            return;
        };
        match self.store.toggle_bought(id) {
            Ok(_) => {
                self.clear_messages();
                self.refresh_rows(Some(id));
            }
            Err(e) => self.set_error_message(e.to_string()),
        }
    }

    pub fn request_delete_confirmation(&mut self) {
        let Some(id) = self.selected_article_id() else {
            return;
        };
        if let Some(name) = self.store.get(id).map(|a| a.name.clone()) {
            self.clear_messages();
            self.confirmation_state = ConfirmationState::DeleteArticle { id, name };
        }
    }

    /// Asked even for an empty list so the data file is reset to its header.
    pub fn request_clear_confirmation(&mut self) {
        self.clear_messages();
        self.confirmation_state = ConfirmationState::ClearAll;
    }

    pub fn has_pending_action(&self) -> bool {
        self.confirmation_state != ConfirmationState::None
    }

    pub fn cancel_pending_action(&mut self) {
        self.confirmation_state = ConfirmationState::None;
    }

    pub fn confirm_pending_action(&mut self) {
        let pending = std::mem::replace(&mut self.confirmation_state, ConfirmationState::None);
        match pending {
            ConfirmationState::None => {}
            ConfirmationState::DeleteArticle { id, name } => match self.store.delete(id) {
                Ok(_) => {
                    self.refresh_rows(None);
                    self.set_success_message(format!("Removed {}", name));
                }
                Err(e) => self.set_error_message(e.to_string()),
            },
            ConfirmationState::ClearAll => match self.store.clear_all() {
                Ok(()) => {
                    self.view_state = ViewState::Viewing;
                    self.refresh_rows(None);
                    self.set_success_message("All articles have been cleared!".to_string());
                }
                Err(e) => self.set_error_message(e.to_string()),
            },
        }
    }

    pub fn set_error_message(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
    }

    pub fn set_success_message(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    pub fn render(&self, frame: &mut Frame) {
        articles::render(frame, self);
    }
}
