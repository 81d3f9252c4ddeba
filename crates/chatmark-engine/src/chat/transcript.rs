/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One message ready to be inserted into the transcript as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub role: Role,
    /// HTML fragment; safe to assign as the inner markup of a message bubble.
    pub html: String,
}

/// Receives entries in the order they should appear.
///
/// Implementations own presentation: bubbles, timestamps, scrolling,
/// highlighting of `pre > code` elements and copy buttons.
pub trait TranscriptSink {
    fn append(&mut self, entry: TranscriptEntry);
}

/// A [`TranscriptSink`] that just collects entries.
#[derive(Debug, Default, Clone)]
pub struct MemoryTranscript {
    entries: Vec<TranscriptEntry>,
}

impl MemoryTranscript {
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }
}

impl TranscriptSink for MemoryTranscript {
    fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }
}
