//! Email rendered for the site owner when a visitor submits the form

use std::fmt;

use askama::Template;
use askama_escape::Escaper;

use super::ContactSubmission;
use crate::email::{EmailError, EmailTemplate};

/// Escaper for the HTML notification
///
/// Visitor values only ever land in element text, so rewriting `&`, `<` and
/// `>` is enough. Quotes and apostrophes reach the inbox as typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MailHtml;

impl Escaper for MailHtml {
    fn write_escaped<W>(&self, mut fmt: W, string: &str) -> fmt::Result
    where
        W: fmt::Write,
    {
        let mut last = 0;
        for (index, byte) in string.bytes().enumerate() {
            let entity = match byte {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => continue,
            };
            fmt.write_str(&string[last..index])?;
            fmt.write_str(entity)?;
            last = index + 1;
        }
        fmt.write_str(&string[last..])
    }
}

/// HTML notification, escaped with [`MailHtml`]
#[derive(Template)]
#[template(path = "emails/contact_notification.html", escape = "mail")]
pub struct ContactNotification<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "emails/contact_notification.txt")]
struct ContactNotificationText<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl<'a> ContactNotification<'a> {
    /// Borrow the fields of a submission for rendering
    #[must_use]
    pub fn new(submission: &'a ContactSubmission) -> Self {
        Self {
            name: &submission.name,
            email: &submission.email,
            subject: &submission.subject,
            message: &submission.message,
        }
    }
}

impl EmailTemplate for ContactNotification<'_> {
    fn render_email(&self) -> Result<(Option<String>, Option<String>), EmailError> {
        let html = self.render()?;
        let text = ContactNotificationText {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        }
        .render()?;
        Ok((Some(html), Some(text)))
    }
}
