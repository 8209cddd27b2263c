//! Contact submission handling
//!
//! A submission is validated, rendered into an HTML email addressed to the
//! configured recipient with the visitor as Reply-To, and handed to an
//! [`EmailSender`](crate::email::EmailSender).

mod notification;
mod service;
mod submission;

pub use notification::ContactNotification;
pub use service::{ContactService, SUBJECT_PREFIX};
pub use submission::{ContactSubmission, SubmissionResult, SubmissionStatus, SUCCESS_MESSAGE};
