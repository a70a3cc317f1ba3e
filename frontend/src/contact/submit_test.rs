use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::contact::sink::{AcknowledgeOnly, DeliveryFuture, SharedSink};
use crate::toast::ToastKind;

#[derive(Default)]
struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

impl RecordingNotifier {
    fn kinds(&self) -> Vec<ToastKind> {
        self.toasts.borrow().iter().map(|toast| toast.kind).collect()
    }
}

#[derive(Default)]
struct RecordingSink {
    delivered: RefCell<Vec<ContactSubmission>>,
    fail_with: Option<SinkError>,
}

impl SubmissionSink for RecordingSink {
    fn deliver<'a>(&'a self, submission: &'a ContactSubmission) -> DeliveryFuture<'a> {
        Box::pin(async move {
            self.delivered.borrow_mut().push(submission.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        })
    }
}

fn jane() -> ContactForm {
    ContactForm {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: String::new(),
    }
}

/// What the contact section's submit handler does.
fn submit(form: &mut ContactForm, sink: &dyn SubmissionSink, notifier: &RecordingNotifier) {
    if let Ok(submission) = accept(form, notifier) {
        let _ = block_on(deliver(&submission, sink, notifier));
    }
}

// =============================================================
// Full submission
// =============================================================

#[test]
fn valid_form_notifies_success_once_and_clears() {
    let mut form = jane();
    let notifier = RecordingNotifier::default();

    submit(&mut form, &AcknowledgeOnly, &notifier);

    assert_eq!(*notifier.toasts.borrow(), vec![Toast::success(SUCCESS_MESSAGE)]);
    assert_eq!(form, ContactForm::default());
}

#[test]
fn valid_form_reaches_the_sink() {
    let mut form = jane();
    let sink = RecordingSink::default();
    let notifier = RecordingNotifier::default();

    submit(&mut form, &sink, &notifier);

    let delivered = sink.delivered.borrow();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].email, "jane@example.com");
    assert_eq!(delivered[0].phone, None);
}

#[test]
fn empty_name_never_reaches_success_path() {
    let mut form = ContactForm {
        name: String::new(),
        ..jane()
    };
    let sink = RecordingSink::default();
    let notifier = RecordingNotifier::default();

    submit(&mut form, &sink, &notifier);

    assert_eq!(notifier.kinds(), vec![ToastKind::Error]);
    assert!(sink.delivered.borrow().is_empty());
    assert_eq!(form.email, "jane@example.com");
}

#[test]
fn sink_failure_notifies_one_error_and_no_success() {
    let mut form = jane();
    let sink = RecordingSink {
        fail_with: Some(SinkError::Network("offline".to_string())),
        ..RecordingSink::default()
    };
    let notifier = RecordingNotifier::default();

    submit(&mut form, &sink, &notifier);

    assert_eq!(
        *notifier.toasts.borrow(),
        vec![Toast::error(FAILURE_MESSAGE)]
    );
    // Accepted before delivery, so the fields are already cleared
    assert_eq!(form, ContactForm::default());
}

// =============================================================
// accept
// =============================================================

#[test]
fn accept_reports_malformed_email_as_error_toast() {
    let mut form = ContactForm {
        email: "jane@exa_mple.com".to_string(),
        ..jane()
    };
    let notifier = RecordingNotifier::default();

    let result = accept(&mut form, &notifier);

    assert_eq!(
        result,
        Err(FormError::InvalidEmail("jane@exa_mple.com".to_string()))
    );
    assert_eq!(
        *notifier.toasts.borrow(),
        vec![Toast::error("`jane@exa_mple.com` is not a valid email address.")]
    );
    assert_eq!(form.name, "Jane Doe");
}

#[test]
fn accept_on_valid_form_is_silent() {
    let mut form = jane();
    let notifier = RecordingNotifier::default();

    let submission = accept(&mut form, &notifier).unwrap();

    assert_eq!(submission.name, "Jane Doe");
    assert!(notifier.toasts.borrow().is_empty());
    assert_eq!(form, ContactForm::default());
}

// =============================================================
// deliver
// =============================================================

#[test]
fn deliver_returns_sink_error() {
    let sink = RecordingSink {
        fail_with: Some(SinkError::Rejected {
            status: 422,
            message: "bad email".to_string(),
        }),
        ..RecordingSink::default()
    };
    let notifier = RecordingNotifier::default();
    let submission = jane().validate().unwrap();

    let result = block_on(deliver(&submission, &sink, &notifier));

    assert!(matches!(result, Err(SinkError::Rejected { status: 422, .. })));
    assert_eq!(notifier.kinds(), vec![ToastKind::Error]);
}

#[test]
fn deliver_works_through_shared_sink() {
    let sink = SharedSink::new(AcknowledgeOnly);
    let notifier = RecordingNotifier::default();
    let submission = jane().validate().unwrap();

    assert_eq!(block_on(deliver(&submission, &*sink, &notifier)), Ok(()));
    assert_eq!(notifier.kinds(), vec![ToastKind::Success]);
}
