//! Contact form validation and mailto construction
//!
//! There is no backend: a valid submission becomes a `mailto:` URI for the
//! system mail client. A non-empty honeypot field marks the submission as
//! automated and it is dropped without feedback.

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

use crate::constants::contact::INCOMPLETE_MESSAGE;
use crate::content::Owner;

/// local-part "@" domain "." tld, no whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Characters left as-is by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Editable fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
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
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Name, a valid email, or the message is missing
    #[error("{}", INCOMPLETE_MESSAGE)]
    Incomplete { invalid: Vec<FormField> },
}

/// Result of a submission attempt that passed validation or was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Honeypot was filled; nothing is sent and no error is shown
    Discarded,
    /// Open this URI in the mail client
    Send { mailto: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Hidden field; humans leave it empty
    pub honeypot: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// Required fields that currently fail validation
    pub fn invalid_fields(&self) -> Vec<FormField> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(FormField::Name);
        }
        if !is_valid_email(&self.email) {
            invalid.push(FormField::Email);
        }
        if self.message.trim().is_empty() {
            invalid.push(FormField::Message);
        }
        invalid
    }

    /// Validate and build the mailto URI
    pub fn submit(&self, owner: &Owner, brand: &str) -> Result<SubmitOutcome, FormError> {
        if !self.honeypot.is_empty() {
            debug!("Honeypot filled, discarding contact submission");
            return Ok(SubmitOutcome::Discarded);
        }

        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(FormError::Incomplete { invalid });
        }

        let body = format!(
            "Hi {},\n\n{}\n\nFrom: {} <{}>",
            owner.first_name, self.message, self.name, self.email
        );
        let subject = if self.subject.is_empty() {
            format!("New message from {} portfolio", brand)
        } else {
            self.subject.clone()
        };

        info!("Contact form validated, handing off to mail client");
        Ok(SubmitOutcome::Send {
            mailto: format!(
                "mailto:{}?subject={}&body={}",
                owner.email,
                encode_component(&subject),
                encode_component(&body)
            ),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "Let's talk".to_string(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  a@b.co  "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.io"));
        assert!(!is_valid_email("a@@b.io"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("Let's (go)!"), "Let's%20(go)!");
        assert_eq!(encode_component("x\ny"), "x%0Ay");
        assert_eq!(encode_component("é"), "%C3%A9");
        assert_eq!(encode_component("<a@b.io>"), "%3Ca%40b.io%3E");
    }

    #[test]
    fn test_submit_builds_mailto() {
        let p = Portfolio::builtin();
        let outcome = filled().submit(&p.owner, &p.brand).unwrap();
        let SubmitOutcome::Send { mailto } = outcome else {
            panic!("expected send");
        };
        assert_eq!(
            mailto,
            "mailto:techblazecodes@gmail.com\
             ?subject=New%20message%20from%20TechBlaze%20portfolio\
             &body=Hi%20AbdulRahman%2C%0A%0ALet's%20talk%0A%0AFrom%3A%20Ada%20%3Cada%40example.com%3E"
        );
    }

    #[test]
    fn test_custom_subject() {
        let p = Portfolio::builtin();
        let mut form = filled();
        form.subject = "Hiring".to_string();
        let Ok(SubmitOutcome::Send { mailto }) = form.submit(&p.owner, &p.brand) else {
            panic!("expected send");
        };
        assert!(mailto.contains("?subject=Hiring&body="));
    }

    #[test]
    fn test_honeypot_discards_before_validation() {
        let p = Portfolio::builtin();
        let form = ContactForm {
            honeypot: "bot".to_string(),
            ..ContactForm::default()
        };
        assert_eq!(form.submit(&p.owner, &p.brand), Ok(SubmitOutcome::Discarded));
    }

    #[test]
    fn test_incomplete_lists_invalid_fields() {
        let p = Portfolio::builtin();
        let form = ContactForm {
            name: "  ".to_string(),
            email: "nope".to_string(),
            message: "hi".to_string(),
            ..ContactForm::default()
        };
        let err = form.submit(&p.owner, &p.brand).unwrap_err();
        assert_eq!(
            err,
            FormError::Incomplete {
                invalid: vec![FormField::Name, FormField::Email]
            }
        );
        assert_eq!(err.to_string(), INCOMPLETE_MESSAGE);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }
}
