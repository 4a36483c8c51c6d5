use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;
use yew::Reducible;

use crate::config::SITE;
use crate::error::SiteError;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_NOTICE: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated message, ready to hand to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    Incomplete { missing: Vec<Field> },
    #[error("A message is already being sent")]
    Busy,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(FormError::Incomplete { missing });
        }
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    original_label: String,
    label: String,
    disabled: bool,
}

impl SubmitControl {
    fn new(label: &str) -> Self {
        Self {
            original_label: label.to_string(),
            label: label.to_string(),
            disabled: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }
}

/// Contact form fields plus the state of its submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    submit: SubmitControl,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    Edit(Field, String),
    BeginSend,
    Sent,
    /// Delivery failed: re-enable the button but keep what was typed.
    Failed,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL)
    }
}

impl ContactForm {
    pub fn new(submit_label: &str) -> Self {
        Self {
            fields: ContactFields::default(),
            submit: SubmitControl::new(submit_label),
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn submit(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn is_sending(&self) -> bool {
        self.submit.disabled
    }

    /// What a submit would do right now, without changing anything.
    pub fn check(&self) -> Result<ContactMessage, FormError> {
        if self.is_sending() {
            return Err(FormError::Busy);
        }
        self.fields.validate()
    }

    pub fn begin_send(&mut self) -> Result<ContactMessage, FormError> {
        let message = self.check()?;
        self.submit.disabled = true;
        self.submit.label = SENDING_LABEL.to_string();
        Ok(message)
    }

    pub fn finish_send(&mut self) {
        self.fields = ContactFields::default();
        self.restore_submit();
    }

    fn restore_submit(&mut self) {
        self.submit.label = self.submit.original_label.clone();
        self.submit.disabled = false;
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.fields.set(field, value),
            FormAction::BeginSend => {
                if let Err(e) = self.begin_send() {
                    log::debug!("Submit ignored: {}", e);
                }
            }
            FormAction::Sent => self.finish_send(),
            FormAction::Failed => self.restore_submit(),
        }
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Delivers a validated contact message.
///
/// The site ships only [`SimulatedTransport`]; a real mail or form endpoint
/// plugs in here.
pub trait MessageTransport {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SiteError>>;
}

pub struct SimulatedTransport {
    delay_ms: u32,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(SITE.send_delay_ms)
    }
}

impl MessageTransport for SimulatedTransport {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SiteError>> {
        let delay_ms = self.delay_ms;
        async move {
            TimeoutFuture::new(delay_ms).await;
            log::info!("Simulated delivery of message from {}", message.email);
            Ok(())
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;
    use proptest::prelude::*;

    struct InstantTransport;

    impl MessageTransport for InstantTransport {
        fn send(&self, _message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SiteError>> {
            future::ready(Ok(())).boxed_local()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(FormAction::Edit(Field::Name, "Ada".into()));
        form.apply(FormAction::Edit(Field::Email, "ada@example.com".into()));
        form.apply(FormAction::Edit(Field::Message, "Hello there".into()));
        form
    }

    #[test]
    fn validation_notice_text() {
        let err = ContactForm::default().check().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut form = filled();
        form.apply(FormAction::Edit(Field::Email, "   ".into()));
        assert_eq!(form.check().unwrap().email, "   ");
    }

    #[test]
    fn empty_field_is_reported_missing() {
        let mut form = filled();
        form.apply(FormAction::Edit(Field::Email, String::new()));
        assert_eq!(
            form.check(),
            Err(FormError::Incomplete { missing: vec![Field::Email] })
        );
    }

    #[test]
    fn full_round_trip_restores_submit_control() {
        let mut form = filled();
        let message = form.begin_send().unwrap();
        assert!(form.submit().disabled());
        assert_eq!(form.submit().label(), SENDING_LABEL);

        block_on(InstantTransport.send(message)).unwrap();
        form.apply(FormAction::Sent);

        assert!(!form.submit().disabled());
        assert_eq!(form.submit().label(), SUBMIT_LABEL);
        assert_eq!(form.fields(), &ContactFields::default());
    }

    #[test]
    fn resubmission_while_sending_is_rejected() {
        let mut form = filled();
        form.begin_send().unwrap();
        assert_eq!(form.check(), Err(FormError::Busy));
        let before = form.clone();
        form.apply(FormAction::BeginSend);
        assert_eq!(form, before);
    }

    #[test]
    fn failed_delivery_keeps_fields() {
        let mut form = filled();
        form.apply(FormAction::BeginSend);
        form.apply(FormAction::Failed);
        assert!(!form.submit().disabled());
        assert_eq!(form.submit().label(), SUBMIT_LABEL);
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn message_keeps_text_as_typed() {
        let mut form = filled();
        form.apply(FormAction::Edit(Field::Name, "  Ada  ".into()));
        assert_eq!(form.check().unwrap().name, "  Ada  ");
    }

    #[test]
    fn default_transport_waits_the_send_delay() {
        assert_eq!(SimulatedTransport::default().delay_ms(), 1500);
        assert_eq!(SimulatedTransport::new(250).delay_ms(), 250);
    }

    proptest! {
        #[test]
        fn any_empty_field_keeps_submit_enabled(
            name in prop_oneof![Just(String::new()), "[a-z]{1,8}"],
            email in prop_oneof![Just(String::new()), "[a-z]{1,8}@x\\.io"],
            message in prop_oneof![Just(String::new()), "[a-z ]{0,20}[a-z]"],
        ) {
            prop_assume!(name.is_empty() || email.is_empty() || message.is_empty());
            let mut form = ContactForm::default();
            form.apply(FormAction::Edit(Field::Name, name));
            form.apply(FormAction::Edit(Field::Email, email));
            form.apply(FormAction::Edit(Field::Message, message));
            let is_incomplete = matches!(form.check(), Err(FormError::Incomplete { .. }));
            prop_assert!(is_incomplete);
            form.apply(FormAction::BeginSend);
            prop_assert!(!form.submit().disabled());
            prop_assert_eq!(form.submit().label(), SUBMIT_LABEL);
        }
    }
}
