//! Contact form state. Delivery is simulated: nothing leaves the page.

use std::time::Duration;
use thiserror::Error;

/// Time spent in `Submitting` before the fake delivery lands.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1_500);
/// Time the success notice stays up before the form returns to `Idle`.
pub const SETTLE_DELAY: Duration = Duration::from_millis(5_000);
pub const SUCCESS_MESSAGE: &str = "Your message has been sent successfully!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "Project Discussion",
            Self::Message => "Your message here...",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// First required field that is blank, in form order.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Settled,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{} is required", .0.label())]
    MissingField(Field),

    #[error("a message is already being sent")]
    InFlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Edit(Field, String),
    Submit,
    /// Fake delivery for the given attempt has landed.
    Deliver(u64),
    /// Notice for the given attempt has timed out.
    Dismiss(u64),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub phase: Phase,
    pub notice: Option<&'static str>,
    pub error: Option<SubmitError>,
    attempt: u64,
}

impl ContactForm {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        if self.error == Some(SubmitError::MissingField(field)) {
            self.error = None;
        }
    }

    /// Accepts a submission and returns its attempt number. Fields are kept
    /// until delivery.
    pub fn submit(&mut self) -> Result<u64, SubmitError> {
        let outcome = self.check_submit();
        match outcome {
            Ok(()) => {
                self.attempt += 1;
                self.phase = Phase::Submitting;
                self.notice = None;
                self.error = None;
                Ok(self.attempt)
            }
            Err(error) => {
                if let SubmitError::MissingField(_) = error {
                    self.error = Some(error);
                }
                Err(error)
            }
        }
    }

    fn check_submit(&self) -> Result<(), SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        if let Some(field) = self.fields.first_missing() {
            return Err(SubmitError::MissingField(field));
        }
        Ok(())
    }

    /// `Submitting -> Settled` for the current attempt only.
    pub fn deliver(&mut self, attempt: u64) -> bool {
        if self.phase != Phase::Submitting || attempt != self.attempt {
            return false;
        }

        self.phase = Phase::Settled;
        self.fields = ContactFields::default();
        self.notice = Some(SUCCESS_MESSAGE);
        true
    }

    /// `Settled -> Idle` for the current attempt only.
    pub fn dismiss(&mut self, attempt: u64) -> bool {
        if self.phase != Phase::Settled || attempt != self.attempt {
            return false;
        }

        self.phase = Phase::Idle;
        self.notice = None;
        true
    }

    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => self.edit(field, value),
            ContactAction::Submit => {
                let _ = self.submit();
            }
            ContactAction::Deliver(attempt) => {
                self.deliver(attempt);
            }
            ContactAction::Dismiss(attempt) => {
                self.dismiss(attempt);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada".to_string());
        form.edit(Field::Email, "ada@example.com".to_string());
        form.edit(Field::Subject, "Hello".to_string());
        form.edit(Field::Message, "Let's build something.".to_string());
        form
    }

    #[test]
    fn valid_submission_walks_every_phase() {
        let mut form = filled();

        let attempt = form.submit().expect("filled form submits");
        assert_eq!(form.phase, Phase::Submitting);
        assert_eq!(form.fields.name, "Ada");

        assert!(form.deliver(attempt));
        assert_eq!(form.phase, Phase::Settled);
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.notice, Some(SUCCESS_MESSAGE));

        assert!(form.dismiss(attempt));
        assert_eq!(form.phase, Phase::Idle);
        assert_eq!(form.notice, None);
    }

    #[test]
    fn blank_field_is_rejected_and_reported() {
        let mut form = filled();
        form.edit(Field::Subject, "   ".to_string());

        assert_eq!(form.submit(), Err(SubmitError::MissingField(Field::Subject)));
        assert_eq!(form.phase, Phase::Idle);
        assert_eq!(form.error, Some(SubmitError::MissingField(Field::Subject)));
        assert_eq!(
            SubmitError::MissingField(Field::Subject).to_string(),
            "Subject is required"
        );

        form.edit(Field::Subject, "Fixed".to_string());
        assert_eq!(form.error, None);
    }

    #[test]
    fn second_submit_while_in_flight_is_blocked() {
        let mut form = filled();
        let attempt = form.submit().expect("first submit");

        assert_eq!(form.submit(), Err(SubmitError::InFlight));
        assert_eq!(form.attempt(), attempt);
        assert_eq!(form.error, None);
    }

    #[test]
    fn edits_during_submission_are_kept_until_delivery() {
        let mut form = filled();
        let attempt = form.submit().expect("submit");

        form.apply(ContactAction::Edit(Field::Message, "changed".to_string()));
        assert_eq!(form.fields.message, "changed");

        form.apply(ContactAction::Deliver(attempt));
        assert!(form.fields.message.is_empty());
    }

    #[test]
    fn stale_dismiss_does_not_clear_newer_notice() {
        let mut form = filled();
        let first = form.submit().expect("first");
        form.deliver(first);

        form.fields = filled().fields;
        let second = form.submit().expect("resubmit from settled");
        assert_eq!(form.notice, None);
        form.deliver(second);

        assert!(!form.dismiss(first));
        assert_eq!(form.notice, Some(SUCCESS_MESSAGE));
        assert!(form.dismiss(second));
    }

    #[test]
    fn out_of_phase_transitions_are_ignored() {
        let mut form = ContactForm::default();

        assert!(!form.deliver(0));
        assert!(!form.dismiss(0));
        assert_eq!(form.phase, Phase::Idle);
    }
}
