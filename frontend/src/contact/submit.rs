//! Handling a contact form submission.
//!
//! Submitting is two steps: [`accept`] runs synchronously inside the submit
//! handler so the fields clear straight away, then [`deliver`] runs on the
//! async executor.

use log::{error, warn};

use super::form::{ContactForm, ContactSubmission, FormError};
use super::sink::{SinkError, SubmissionSink};
use crate::toast::{Notifier, Toast};

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

pub const SUCCESS_MESSAGE: &str = "Thank you! We will contact you about membership options.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, we couldn't send your details. Please try again or email us directly.";

/// Hands an accepted submission to `sink` and tells the visitor how it went.
/// Exactly one toast is emitted either way.
pub async fn deliver<S, N>(
    submission: &ContactSubmission,
    sink: &S,
    notifier: &N,
) -> Result<(), SinkError>
where
    S: SubmissionSink + ?Sized,
    N: Notifier + ?Sized,
{
    match sink.deliver(submission).await {
        Ok(()) => {
            notifier.notify(Toast::success(SUCCESS_MESSAGE));
            Ok(())
        }
        Err(err) => {
            error!("Failed to deliver contact request: {err}");
            notifier.notify(Toast::error(FAILURE_MESSAGE));
            Err(err)
        }
    }
}

/// Validates `form` and clears it on success.
///
/// The browser's own `required`/`type=email` checks normally catch bad input
/// first; anything that slips past them is reported as an error toast and
/// the fields are left as typed.
pub fn accept<N>(form: &mut ContactForm, notifier: &N) -> Result<ContactSubmission, FormError>
where
    N: Notifier + ?Sized,
{
    form.accept().map_err(|err| {
        warn!("Contact form rejected: {err}");
        notifier.notify(Toast::error(err.to_string()));
        err
    })
}
