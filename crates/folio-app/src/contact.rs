//! Contact form state machine
//!
//! `Idle -> Submitting -> Success | Error`. A new submit attempt always starts
//! from `Idle`; a submit with a blank field is rejected and stays `Idle`.

use serde::Serialize;

pub const SUCCESS_TEXT: &str = "Message sent successfully! I will get back to you soon.";
pub const ERROR_TEXT: &str = "Failed to send message. Please try again later.";

/// The four form fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your full name",
            FormField::Email => "your.email@example.com",
            FormField::Subject => "What's this about?",
            FormField::Message => "Tell me about your project or idea...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Message)
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// What gets handed to the message dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact form contents and submission status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focused: FormField,
    pub status: FormStatus,
    /// Set when the last submit attempt was rejected for blank fields
    pub validation_error: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Type a character into the focused field. Ignored while submitting.
    pub fn insert_char(&mut self, c: char) {
        if self.is_submitting() {
            return;
        }
        let field = self.focused;
        self.value_mut(field).push(c);
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        let field = self.focused;
        self.value_mut(field).pop();
    }

    /// Enter: newline in the message field, otherwise move to the next field
    pub fn enter(&mut self) {
        if self.focused.is_multiline() {
            self.insert_char('\n');
        } else {
            self.focused = self.focused.next();
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Fields that are empty after trimming, in tab order
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    /// Start a submission.
    ///
    /// Resets the status to `Idle`, then validates. On success the form moves
    /// to `Submitting` and returns the message to dispatch. Returns `None` when
    /// a submission is already in flight or a field is blank; in the latter
    /// case `validation_error` names the missing fields.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.is_submitting() {
            return None;
        }

        self.status = FormStatus::Idle;
        self.validation_error = None;

        let missing = self.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|field| field.label()).collect();
            self.validation_error = Some(format!("Please fill in: {}", names.join(", ")));
            return None;
        }

        self.status = FormStatus::Submitting;
        Some(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    /// Record the dispatcher's outcome
    pub fn complete(&mut self, success: bool) {
        if success {
            self.name.clear();
            self.email.clear();
            self.subject.clear();
            self.message.clear();
            self.focused = FormField::Name;
            self.status = FormStatus::Success;
        } else {
            self.status = FormStatus::Error;
        }
    }

    /// Inline feedback text for the current status
    pub fn status_text(&self) -> Option<&str> {
        match self.status {
            FormStatus::Success => Some(SUCCESS_TEXT),
            FormStatus::Error => Some(ERROR_TEXT),
            FormStatus::Idle => self.validation_error.as_deref(),
            FormStatus::Submitting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Let's build something".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_success_clears_fields() {
        let mut form = filled();
        let message = form.begin_submit().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(form.status, FormStatus::Submitting);

        form.complete(true);
        assert_eq!(form.status, FormStatus::Success);
        assert!(form.name.is_empty() && form.message.is_empty());
        assert_eq!(form.status_text(), Some(SUCCESS_TEXT));
    }

    #[test]
    fn test_submit_failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete(false);

        assert_eq!(form.status, FormStatus::Error);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.subject, "Hello");
        assert_eq!(form.status_text(), Some(ERROR_TEXT));
    }

    #[test]
    fn test_submit_with_blank_fields_rejected() {
        let mut form = filled();
        form.email = "   ".into();
        form.message.clear();

        assert!(form.begin_submit().is_none());
        assert_eq!(form.status, FormStatus::Idle);
        let text = form.status_text().unwrap();
        assert!(text.contains("Email Address"));
        assert!(text.contains("Message"));
        assert!(!text.contains("Subject"));
    }

    #[test]
    fn test_resubmit_after_error_resets_status() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete(false);

        form.subject.clear();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status, FormStatus::Idle);

        form.subject = "Retry".into();
        assert!(form.begin_submit().is_some());
        assert_eq!(form.status, FormStatus::Submitting);
    }

    #[test]
    fn test_submit_disabled_while_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status, FormStatus::Submitting);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::new();
        form.insert_char('J');
        form.focus_next();
        form.insert_char('j');
        form.insert_char('x');
        form.backspace();

        assert_eq!(form.name, "J");
        assert_eq!(form.email, "j");
    }

    #[test]
    fn test_enter_moves_or_inserts_newline() {
        let mut form = ContactForm::new();
        form.enter();
        assert_eq!(form.focused, FormField::Email);

        form.focused = FormField::Message;
        form.insert_char('a');
        form.enter();
        form.insert_char('b');
        assert_eq!(form.message, "a\nb");
        assert_eq!(form.focused, FormField::Message);
    }

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }

    #[test]
    fn test_editing_ignored_while_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.insert_char('!');
        form.backspace();
        assert_eq!(form.name, "Ada");
    }
}
