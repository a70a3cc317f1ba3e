use futures::executor::block_on;

use super::*;

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: None,
    }
}

#[test]
fn acknowledge_only_accepts_everything() {
    let sink = AcknowledgeOnly;
    assert_eq!(block_on(sink.deliver(&submission())), Ok(()));
}

#[test]
fn shared_sink_equality_is_identity() {
    let sink = SharedSink::new(HttpSink::new("https://example.com/api/leads"));
    let other = SharedSink::new(HttpSink::new("https://example.com/api/leads"));
    assert!(sink == sink.clone());
    assert!(sink != other);
}

#[test]
fn rejection_message_reads_error_field() {
    assert_eq!(
        rejection_message(r#"{"error":"rate limited"}"#, "Too Many Requests"),
        "rate limited"
    );
}

#[test]
fn rejection_message_reads_message_field() {
    assert_eq!(
        rejection_message(r#"{"message":"bad email"}"#, "Bad Request"),
        "bad email"
    );
}

#[test]
fn rejection_message_prefers_error_when_both_fields_present() {
    assert_eq!(
        rejection_message(
            r#"{"error":"rate limited","message":"slow down"}"#,
            "Too Many Requests"
        ),
        "rate limited"
    );
}

#[test]
fn rejection_message_ignores_json_without_reason() {
    assert_eq!(rejection_message(r#"{"status":500}"#, "Bad Gateway"), r#"{"status":500}"#);
}

#[test]
fn rejection_message_falls_back_to_plain_body() {
    assert_eq!(
        rejection_message("  upstream down \n", "Bad Gateway"),
        "upstream down"
    );
}

#[test]
fn rejection_message_falls_back_to_status_text() {
    assert_eq!(rejection_message("", "Internal Server Error"), "Internal Server Error");
}

#[test]
fn sink_errors_render_readably() {
    let err = SinkError::Rejected {
        status: 503,
        message: "maintenance".to_string(),
    };
    assert_eq!(err.to_string(), "endpoint answered 503: maintenance");
}

#[test]
fn shared_sink_delivers_through_deref() {
    let sink = SharedSink::new(AcknowledgeOnly);
    assert_eq!(block_on(sink.deliver(&submission())), Ok(()));
}
