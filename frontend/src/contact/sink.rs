//! Where accepted contact forms go.
//!
//! The page has never had a backend of its own, so the default sink only
//! acknowledges. Building with `CONTACT_ENDPOINT` set switches to
//! [`HttpSink`], which POSTs each submission as JSON.

use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;
use std::rc::Rc;

use gloo_net::http::Request;
use log::info;
use serde::Deserialize;
use thiserror::Error;

use super::form::ContactSubmission;
use crate::config;

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

pub type DeliveryFuture<'a> = Pin<Box<dyn Future<Output = Result<(), SinkError>> + 'a>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("could not encode submission: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("endpoint answered {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl From<gloo_net::Error> for SinkError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => SinkError::Encode(err.to_string()),
            other => SinkError::Network(other.to_string()),
        }
    }
}

pub trait SubmissionSink {
    fn deliver<'a>(&'a self, submission: &'a ContactSubmission) -> DeliveryFuture<'a>;
}

/// Accepts everything and sends nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcknowledgeOnly;

impl SubmissionSink for AcknowledgeOnly {
    fn deliver<'a>(&'a self, submission: &'a ContactSubmission) -> DeliveryFuture<'a> {
        Box::pin(async move {
            info!("Contact request from {} acknowledged locally", submission.email);
            Ok(())
        })
    }
}

#[derive(Clone, Debug)]
pub struct HttpSink {
    endpoint: String,
}

impl HttpSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl SubmissionSink for HttpSink {
    fn deliver<'a>(&'a self, submission: &'a ContactSubmission) -> DeliveryFuture<'a> {
        Box::pin(async move {
            let response = Request::post(&self.endpoint)
                .json(submission)?
                .send()
                .await?;

            if response.ok() {
                info!("Contact request from {} delivered", submission.email);
                return Ok(());
            }

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(SinkError::Rejected {
                status,
                message: rejection_message(&body, &response.status_text()),
            })
        })
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    message: Option<String>,
}

/// Pulls a readable reason out of an error response body.
fn rejection_message(body: &str, status_text: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(reason) = parsed.error.or(parsed.message) {
            return reason;
        }
    }
    let body = body.trim();
    if body.is_empty() {
        status_text.to_string()
    } else {
        body.to_string()
    }
}

/// Cheaply clonable sink handle that can sit in component props.
#[derive(Clone)]
pub struct SharedSink(Rc<dyn SubmissionSink>);

impl SharedSink {
    pub fn new(sink: impl SubmissionSink + 'static) -> Self {
        Self(Rc::new(sink))
    }
}

impl PartialEq for SharedSink {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedSink {
    type Target = dyn SubmissionSink;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// The sink selected by build configuration.
pub fn configured_sink() -> SharedSink {
    match config::contact_endpoint() {
        Some(endpoint) => {
            info!("Contact form posts to {endpoint}");
            SharedSink::new(HttpSink::new(endpoint))
        }
        None => SharedSink::new(AcknowledgeOnly),
    }
}
