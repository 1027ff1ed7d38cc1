// src/ports/text.rs
use crate::application::{CreateController, DetailController, EditController, ListController};
use crate::constants::LIST_PREVIEW_MAX_CHARS;
use crate::domain::tags::join_tags;
use crate::domain::{DomainError, Note};
use crate::shell::{Route, Screen};

/// Renders shell screens as plain terminal text.
#[derive(Debug)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Persistent header line shown above every screen.
    pub fn render_header(&self, route: &Route) -> String {
        format!("notecli {route}")
    }

    pub fn render(&self, screen: &Screen) -> String {
        match screen {
            Screen::List(controller) => self.render_list(controller),
            Screen::Detail(controller) => self.render_detail(controller),
            Screen::CreateForm(controller) => self.render_create(controller),
            Screen::EditForm(controller) => self.render_edit(controller),
        }
    }

    fn render_list(&self, controller: &ListController) -> String {
        if controller.loading {
            return "Loading notes...".to_string();
        }
        let mut lines = Vec::new();
        if let Some(err) = &controller.error {
            lines.push(error_line(err));
        } else if controller.notes.is_empty() {
            lines.push("No notes.".to_string());
        }
        for note in &controller.notes {
            lines.push(render_row(note));
        }
        lines.join("\n")
    }

    fn render_detail(&self, controller: &DetailController) -> String {
        if controller.loading {
            return "Loading...".to_string();
        }
        let Some(note) = &controller.note else {
            return self.render_not_found(controller.error.as_ref());
        };
        let mut lines = vec![note.title.clone(), String::new(), note.body.clone()];
        if !note.tags.is_empty() {
            lines.push(String::new());
            lines.push(format!("Tags: {}", join_tags(&note.tags)));
        }
        if controller.delete_confirmation_open {
            lines.push(String::new());
            lines.push("Delete note? This action cannot be undone.".to_string());
        }
        if let Some(err) = &controller.error {
            lines.push(String::new());
            lines.push(error_line(err));
        }
        lines.join("\n")
    }

    fn render_create(&self, controller: &CreateController) -> String {
        let mut lines = vec![
            "Create Note".to_string(),
            format!("Title: {}", controller.title),
            format!("Body: {}", controller.body),
            format!("Tags: {}", controller.tags_text),
        ];
        if controller.submitting {
            lines.push("Creating...".to_string());
        }
        if let Some(err) = &controller.error {
            lines.push(error_line(err));
        }
        lines.join("\n")
    }

    fn render_edit(&self, controller: &EditController) -> String {
        if controller.loading {
            return "Loading...".to_string();
        }
        if controller.note.is_none() {
            return self.render_not_found(controller.error.as_ref());
        }
        let mut lines = vec![
            "Edit Note".to_string(),
            format!("Title: {}", controller.title),
            format!("Body: {}", controller.body),
            format!("Tags: {}", controller.tags_text),
        ];
        if controller.submitting {
            lines.push("Saving...".to_string());
        }
        if let Some(err) = &controller.error {
            lines.push(error_line(err));
        }
        lines.join("\n")
    }

    fn render_not_found(&self, error: Option<&DomainError>) -> String {
        match error {
            // A plain 404 reads as the not-found message alone; anything
            // else also shows what actually went wrong.
            None | Some(DomainError::NoteNotFound(_)) => "Sorry, note not found".to_string(),
            Some(err) => format!("Sorry, note not found\n{}", error_line(err)),
        }
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn error_line(err: &DomainError) -> String {
    format!("Error: {err}")
}

/// One list row: id, title, first body line (truncated), tags.
fn render_row(note: &Note) -> String {
    let preview = truncate(first_line(&note.body), LIST_PREVIEW_MAX_CHARS);
    if note.tags.is_empty() {
        format!("{:>6}  {}  {}", note.id, note.title, preview)
    } else {
        format!(
            "{:>6}  {}  {}  [{}]",
            note.id,
            note.title,
            preview,
            join_tags(&note.tags)
        )
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    cut
}
