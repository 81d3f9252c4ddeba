//! # Chat Surface
//!
//! The seams between the renderer and a chat transcript. Session ids, the
//! transcript, and the answer endpoint are injected collaborators; this
//! module only decides what gets rendered and appended.
//!
//! ## Modules
//!
//! - **`payload`**: `AnswerPayload` parsed from the answer endpoint's JSON
//! - **`session`**: `SessionIdProvider` and its storage seam
//! - **`transcript`**: `TranscriptSink` receiving rendered entries
//! - **`surface`**: `ChatSurface` tying the three to the renderer

pub mod payload;
pub mod session;
pub mod surface;
pub mod transcript;

pub use payload::{AnswerPayload, ChatError, FALLBACK_ANSWER};
pub use session::{MemorySessionStore, SessionIdProvider, SessionStore, StoredSessionProvider};
pub use surface::{ChatSurface, OutgoingMessage};
pub use transcript::{MemoryTranscript, Role, TranscriptEntry, TranscriptSink};
