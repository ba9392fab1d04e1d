//! Contact form state machine.
//!
//! `Idle -> Submitting -> Submitted -> Idle`. Submission is simulated: the
//! transition out of `Submitting` always succeeds after [`SUBMIT_DELAY_MS`],
//! and the confirmation is dismissed after [`CONFIRMATION_DISPLAY_MS`]. The
//! caller owns the timers; this type only validates and applies transitions.

use std::fmt;

pub const SUBMIT_DELAY_MS: u32 = 1_000;
pub const CONFIRMATION_DISPLAY_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Email => "Enter your email",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me more about your project or inquiry...",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Required fields that are still empty, in form order.
    pub fn missing(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("please fill in: {}", join_labels(.0))]
    MissingFields(Vec<ContactField>),
    #[error("a message is already being sent")]
    NotIdle,
}

fn join_labels(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Form values plus the submission phase, always updated together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    fields: ContactFields,
    phase: SubmissionPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    /// Applies user input. Ignored while the confirmation is shown, because
    /// the form itself is not on screen then.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.phase == SubmissionPhase::Submitted {
            return false;
        }
        *self.fields.slot(field) = value.into();
        true
    }

    pub fn begin_submit(&mut self) -> Result<(), SubmitRejected> {
        if self.phase != SubmissionPhase::Idle {
            return Err(SubmitRejected::NotIdle);
        }
        let missing = self.fields.missing();
        if !missing.is_empty() {
            return Err(SubmitRejected::MissingFields(missing));
        }
        self.phase = SubmissionPhase::Submitting;
        Ok(())
    }

    /// `Submitting -> Submitted`, clearing every field in the same step.
    /// Returns `false` when there was no submission in flight.
    pub fn complete_submit(&mut self) -> bool {
        if self.phase != SubmissionPhase::Submitting {
            return false;
        }
        self.fields = ContactFields::default();
        self.phase = SubmissionPhase::Submitted;
        true
    }

    /// `Submitted -> Idle`.
    pub fn dismiss_confirmation(&mut self) -> bool {
        if self.phase != SubmissionPhase::Submitted {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, "Ada");
        form.edit(ContactField::Email, "ada@example.com");
        form.edit(ContactField::Subject, "Hello");
        form.edit(ContactField::Message, "Let's build something");
        form
    }

    #[test]
    fn test_full_submission_cycle() {
        let mut form = filled_form();
        assert_eq!(form.phase(), SubmissionPhase::Idle);

        form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.fields().name, "Ada");

        assert!(form.complete_submit());
        assert!(form.is_submitted());
        assert!(form.fields().is_empty());

        assert!(form.dismiss_confirmation());
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn test_fields_are_never_partially_cleared() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let before = form.clone();
        form.complete_submit();
        let after = form.clone();

        // Either every field still holds its value or none does.
        for state in [&before, &after] {
            let filled = ContactField::ALL
                .iter()
                .filter(|f| !state.fields().get(**f).is_empty())
                .count();
            assert!(filled == 0 || filled == ContactField::ALL.len());
        }
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Email, "ada@example.com");

        let err = form.begin_submit().unwrap_err();
        assert_eq!(
            err,
            SubmitRejected::MissingFields(vec![
                ContactField::Name,
                ContactField::Subject,
                ContactField::Message
            ])
        );
        assert_eq!(err.to_string(), "please fill in: Your Name, Subject, Message");
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_email_format_is_not_validated() {
        let mut form = filled_form();
        form.edit(ContactField::Email, "not-an-email");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_second_submit_while_submitting_is_ignored() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::NotIdle));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_out_of_order_transitions_are_no_ops() {
        let mut form = filled_form();
        assert!(!form.complete_submit());
        assert!(!form.dismiss_confirmation());
        assert_eq!(form, filled_form());

        form.begin_submit().unwrap();
        assert!(!form.dismiss_confirmation());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_edits_ignored_while_confirmation_shown() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete_submit();

        assert!(!form.edit(ContactField::Name, "Grace"));
        assert!(form.fields().is_empty());
    }
}
