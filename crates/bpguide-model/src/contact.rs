//! Contact form model.
//!
//! The guide has no submission backend. A submit validates the fields and
//! then reports [`SubmitOutcome::NoEndpoint`]; nothing leaves the process.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

/// One input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Every field, in form order.
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// HTML input id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Subject)
    }

    /// Whether the input spans several lines.
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A problem with one field of the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactIssue {
    #[error("{0} is required")]
    Missing(ContactField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl ContactIssue {
    pub fn field(&self) -> ContactField {
        match self {
            Self::Missing(field) => *field,
            Self::InvalidEmail(_) => ContactField::Email,
        }
    }
}

/// What happened when the form was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The fields need fixing first.
    Invalid(Vec<ContactIssue>),
    /// The fields are fine but there is nowhere to send them.
    NoEndpoint,
}

impl SubmitOutcome {
    pub fn summary(&self) -> String {
        match self {
            Self::Invalid(issues) => issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
            Self::NoEndpoint => {
                "Message not sent: no submission endpoint is configured.".to_string()
            }
        }
    }
}

/// Current contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
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

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Every problem with the current contents, in form order.
    pub fn validate(&self) -> Vec<ContactIssue> {
        let mut issues = Vec::new();
        for field in ContactField::ALL {
            let value = self.get(field).trim();
            if field.is_required() && value.is_empty() {
                issues.push(ContactIssue::Missing(field));
            } else if field == ContactField::Email && !is_plausible_email(value) {
                issues.push(ContactIssue::InvalidEmail(value.to_string()));
            }
        }
        issues
    }

    /// Validate and report. The form keeps its contents either way.
    pub fn submit(&self) -> SubmitOutcome {
        let issues = self.validate();
        if issues.is_empty() {
            info!("contact form is valid but no submission endpoint is configured");
            SubmitOutcome::NoEndpoint
        } else {
            debug!(issues = issues.len(), "contact form rejected");
            SubmitOutcome::Invalid(issues)
        }
    }
}

/// `local@domain.tld` with no whitespace and a dotted domain.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sarah Johnson".into(),
            email: "sarah@abc.example".into(),
            subject: String::new(),
            message: "Please add a REST API page.".into(),
        }
    }

    #[test]
    fn empty_form_reports_required_fields() {
        let issues = ContactForm::default().validate();
        assert_eq!(
            issues,
            vec![
                ContactIssue::Missing(ContactField::Name),
                ContactIssue::Missing(ContactField::Email),
                ContactIssue::Missing(ContactField::Message),
            ]
        );
    }

    #[test]
    fn malformed_email_is_flagged() {
        for bad in ["sarah", "sarah@", "@abc.com", "sarah@abc", "sa rah@abc.com", "a@b@c.com"] {
            let mut form = filled();
            form.set(ContactField::Email, bad);
            assert_eq!(
                form.validate(),
                vec![ContactIssue::InvalidEmail(bad.to_string())],
                "{bad}"
            );
        }
    }

    #[test]
    fn valid_form_has_nowhere_to_go() {
        assert_eq!(filled().submit(), SubmitOutcome::NoEndpoint);
        assert!(
            SubmitOutcome::NoEndpoint
                .summary()
                .contains("no submission endpoint")
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled();
        form.set(ContactField::Message, "   ");
        let issues = form.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field(), ContactField::Message);
        assert_eq!(issues[0].to_string(), "Message is required");
    }
}
