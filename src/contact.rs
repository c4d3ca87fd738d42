use std::fmt;

use thiserror::Error;

/// How long the simulated send takes.
pub const MOCK_SUBMIT_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Element id, also used by the label's `for`.
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            _ => "text",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, ContactField::Message)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Required fields that are still empty. Whitespace counts as empty.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Sending => Some("Sending..."),
            SubmitStatus::Sent => Some("Message sent successfully!"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("a message is already being sent")]
    AlreadySending,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactState {
    /// Starts the simulated send. The caller schedules [`ContactState::complete`]
    /// after [`MOCK_SUBMIT_DELAY_MS`].
    pub fn begin_submit(&mut self) -> Result<(), ContactError> {
        if self.status == SubmitStatus::Sending {
            return Err(ContactError::AlreadySending);
        }
        if let Some(field) = self.form.missing_fields().into_iter().next() {
            return Err(ContactError::MissingField(field));
        }
        self.status = SubmitStatus::Sending;
        Ok(())
    }

    /// Finishes a pending send. Does nothing unless a send is in flight.
    pub fn complete(&mut self) -> bool {
        if self.status != SubmitStatus::Sending {
            return false;
        }
        self.status = SubmitStatus::Sent;
        self.form.clear();
        true
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.form.set(ContactField::Name, "Ada Lovelace");
        state.form.set(ContactField::Email, "ada@example.com");
        state.form.set(ContactField::Subject, "Internship");
        state.form.set(ContactField::Message, "Hello there");
        state
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut state = filled();
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.status.message(), None);

        state.begin_submit().expect("complete form should submit");
        assert_eq!(state.status, SubmitStatus::Sending);
        assert_eq!(state.status.message(), Some("Sending..."));
        // fields are kept while the send is in flight
        assert_eq!(state.form.get(ContactField::Name), "Ada Lovelace");

        assert!(state.complete());
        assert_eq!(state.status, SubmitStatus::Sent);
        assert_eq!(state.status.message(), Some("Message sent successfully!"));
        for field in ContactField::ALL {
            assert_eq!(state.form.get(field), "");
        }
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut state = filled();
        state.form.set(ContactField::Subject, "   ");
        assert_eq!(
            state.begin_submit(),
            Err(ContactError::MissingField(ContactField::Subject))
        );
        assert_eq!(state.status, SubmitStatus::Idle);

        let empty = ContactForm::default();
        assert_eq!(empty.missing_fields(), ContactField::ALL.to_vec());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut state = filled();
        state.begin_submit().unwrap();
        assert_eq!(state.begin_submit(), Err(ContactError::AlreadySending));
        assert!(state.is_sending());
    }

    #[test]
    fn test_complete_without_send_is_noop() {
        let mut state = filled();
        assert!(!state.complete());
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.form.get(ContactField::Email), "ada@example.com");
    }

    #[test]
    fn test_resubmit_after_sent() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.complete();

        state.form = filled().form;
        state.begin_submit().unwrap();
        assert_eq!(state.status, SubmitStatus::Sending);
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(ContactField::Email.input_type(), "email");
        assert_eq!(ContactField::Name.input_type(), "text");
        assert!(ContactField::Message.is_multiline());
        assert!(!ContactField::Subject.is_multiline());
        assert_eq!(
            ContactError::MissingField(ContactField::Email).to_string(),
            "email is required"
        );
    }
}
