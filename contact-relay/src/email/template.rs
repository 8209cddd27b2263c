//! Email template trait for Askama integration
//!
//! Provides a trait for rendering email templates with both HTML and plain text versions.

use super::EmailError;

/// Trait for email templates
///
/// Implement this trait on your Askama templates to render emails with both
/// HTML and plain text versions.
///
/// # Examples
///
/// ```rust
/// use contact_relay::email::{EmailError, EmailTemplate};
/// use askama::Template;
///
/// #[derive(Template)]
/// #[template(source = "<p>Hello, {{ name }}!</p>", ext = "html")]
/// struct Greeting {
///     name: String,
/// }
///
/// impl EmailTemplate for Greeting {
///     fn render_email(&self) -> Result<(Option<String>, Option<String>), EmailError> {
///         let html = self.render()?;
///         let text = format!("Hello, {}!", self.name);
///         Ok((Some(html), Some(text)))
///     }
/// }
/// ```
pub trait EmailTemplate {
    /// Render the email template
    ///
    /// Returns a tuple of `(html, text)` where either can be `None`.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::TemplateError` if the template fails to render
    fn render_email(&self) -> Result<(Option<String>, Option<String>), EmailError>;
}
