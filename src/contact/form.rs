use serde::Serialize;

use super::submit::SubmitError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Service,
        FormField::Message,
    ];

    /// The input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Service => "service",
            FormField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<FormField> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

pub const SERVICE_OPTIONS: [(&str, &str); 6] = [
    ("ai", "AI Solutions"),
    ("web3", "Web3 Development"),
    ("web", "Web Applications"),
    ("software", "Software Development"),
    ("design", "UI/UX Design"),
    ("other", "Other"),
];

/// The five contact fields. Nothing here validates; the inputs carry their
/// own `required`/`type` attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Service => &self.service,
            FormField::Message => &self.message,
        }
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Service => &mut self.service,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn reset(&mut self) {
        *self = ContactDraft::default();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Editing,
    Sending,
    Sent,
    Failed(SubmitError),
}

impl FormStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, FormStatus::Sending)
    }
}

/// Draft plus submission status. `finish` applies the transport's verdict:
/// success clears the draft, failure keeps it for another try.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            draft: ContactDraft::default(),
            status: FormStatus::Editing,
        }
    }
}

impl ContactForm {
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.update_field(field, value);
        if matches!(self.status, FormStatus::Sent | FormStatus::Failed(_)) {
            self.status = FormStatus::Editing;
        }
    }

    /// Update by input `name` attribute. Unknown names leave the form untouched.
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> bool {
        match FormField::from_name(name) {
            Some(field) => {
                self.update_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Snapshot to hand to the transport, or `None` while one is in flight.
    pub fn begin_submit(&mut self) -> Option<ContactDraft> {
        if self.status.is_sending() {
            return None;
        }
        self.status = FormStatus::Sending;
        Some(self.draft.clone())
    }

    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.draft.reset();
                self.status = FormStatus::Sent;
            }
            Err(err) => {
                log::warn!("contact submission failed: {}", err);
                self.status = FormStatus::Failed(err);
            }
        }
    }

    pub fn dismiss(&mut self) {
        if self.status == FormStatus::Sent {
            self.status = FormStatus::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "+1 555".into(),
            service: "ai".into(),
            message: "Build me an engine".into(),
        }
    }

    #[test]
    fn update_field_touches_only_that_field() {
        for field in FormField::ALL {
            let mut draft = ContactDraft::default();
            draft.update_field(field, "a@b.com");
            assert_eq!(draft.field(field), "a@b.com");
            for other in FormField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(draft.field(other), "", "{:?} changed", other);
            }
        }
    }

    #[test]
    fn update_overwrites_previous_value() {
        let mut draft = filled();
        draft.update_field(FormField::Email, "");
        assert_eq!(draft.email, "");
        assert_eq!(draft.name, "Ada");
    }

    #[test]
    fn update_by_input_name() {
        let mut form = ContactForm::default();
        assert!(form.update_named("email", "a@b.com"));
        assert_eq!(form.draft.email, "a@b.com");
        assert!(!form.update_named("company", "Acme"));
        assert_eq!(form.draft, ContactDraft { email: "a@b.com".into(), ..Default::default() });
    }

    #[test]
    fn every_input_name_resolves_to_its_field() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("Email"), None);
    }

    #[test]
    fn typing_after_a_send_clears_the_banner() {
        let mut form = ContactForm::default();
        form.begin_submit();
        form.finish(Ok(()));
        assert!(form.update_named("name", "Ada"));
        assert_eq!(form.status, FormStatus::Editing);
        assert_eq!(form.draft.field(FormField::Name), "Ada");
    }

    #[test]
    fn successful_submit_clears_every_field() {
        let mut form = ContactForm { draft: filled(), status: FormStatus::Editing };
        let sent = form.begin_submit().unwrap();
        assert_eq!(sent, filled());
        form.finish(Ok(()));
        assert_eq!(form.draft, ContactDraft::default());
        assert_eq!(form.status, FormStatus::Sent);
    }

    #[test]
    fn failed_submit_keeps_the_draft() {
        let mut form = ContactForm { draft: filled(), status: FormStatus::Editing };
        form.begin_submit();
        form.finish(Err(SubmitError::Rejected { status: 503 }));
        assert_eq!(form.draft, filled());
        assert_eq!(form.status, FormStatus::Failed(SubmitError::Rejected { status: 503 }));

        form.update_field(FormField::Message, "retry");
        assert_eq!(form.status, FormStatus::Editing);
    }

    #[test]
    fn no_second_submit_while_sending() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn service_options_are_valid_input_values() {
        let mut form = ContactForm::default();
        for (value, _) in SERVICE_OPTIONS {
            assert!(form.update_named(FormField::Service.name(), value));
            assert_eq!(form.draft.field(FormField::Service), value);
        }
    }
}
