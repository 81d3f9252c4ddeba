use std::fmt::Display;

use serde::Serialize;

use crate::{
    parsing::escape::escape_html,
    render::{RenderOptions, render_with},
};

use super::{
    payload::{AnswerPayload, ChatError, FALLBACK_ANSWER},
    session::SessionIdProvider,
    transcript::{Role, TranscriptEntry, TranscriptSink},
};

/// Query sent to the answer endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub session_id: String,
    pub query: String,
}

/// Drives one chat transcript: user messages in, rendered answers out.
///
/// Network access stays with the caller. `submit_user_message` returns what
/// to send, and the response (or the failure) is handed back through
/// `receive_answer` / `receive_failure`.
pub struct ChatSurface<P: SessionIdProvider, S: TranscriptSink> {
    sessions: P,
    sink: S,
    options: RenderOptions,
    fallback: String,
}

impl<P: SessionIdProvider, S: TranscriptSink> ChatSurface<P, S> {
    pub fn new(sessions: P, sink: S) -> Self {
        Self {
            sessions,
            sink,
            options: RenderOptions::default(),
            fallback: FALLBACK_ANSWER.to_string(),
        }
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Appends the user's message and returns the query to send.
    ///
    /// Returns `None` for blank input, in which case nothing is appended.
    pub fn submit_user_message(&mut self, text: &str) -> Option<OutgoingMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.sink.append(TranscriptEntry {
            role: Role::User,
            html: escape_html(text).into_owned(),
        });

        Some(OutgoingMessage {
            session_id: self.sessions.session_id(),
            query: text.to_string(),
        })
    }

    /// Renders the endpoint's JSON answer into the transcript.
    ///
    /// An unparseable body is logged and skipped; the error is returned so the
    /// caller can decide whether to report it.
    pub fn receive_answer(&mut self, body: &str) -> Result<(), ChatError> {
        let payload = match AnswerPayload::parse(body) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("skipping answer: {e}");
                return Err(e);
            }
        };

        let html = render_with(payload.answer_or(&self.fallback), &self.options);
        self.append_assistant(html);
        Ok(())
    }

    /// Appends the fallback answer after the endpoint could not be reached.
    pub fn receive_failure(&mut self, err: impl Display) {
        log::warn!("answer request failed: {err}");
        let html = render_with(&self.fallback, &self.options);
        self.append_assistant(html);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn append_assistant(&mut self, html: String) {
        self.sink.append(TranscriptEntry {
            role: Role::Assistant,
            html,
        });
    }
}
