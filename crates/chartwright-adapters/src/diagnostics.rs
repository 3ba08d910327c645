//! Diagnostics sinks.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use chartwright_core::application::ports::Diagnostics;

/// Writes one line per message to any `io::Write`, stderr by default.
#[derive(Debug)]
pub struct WriterDiagnostics<W: Write + Send> {
    writer: Mutex<W>,
}

impl WriterDiagnostics<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> WriterDiagnostics<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Diagnostics for WriterDiagnostics<W> {
    fn warn(&self, message: &str) {
        // Write errors are dropped.
        if let Ok(mut w) = self.writer.lock() {
            let _ = writeln!(w, "{message}");
        }
    }
}

/// Collects messages in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryDiagnostics {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn warn(&self, message: &str) {
        if let Ok(mut m) = self.messages.lock() {
            m.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_emits_one_line_per_message() {
        let sink = WriterDiagnostics::new(Vec::new());
        sink.warn("first");
        sink.warn("second");
        assert_eq!(sink.into_inner(), b"first\nsecond\n");
    }

    #[test]
    fn memory_clones_share_buffer() {
        let sink = MemoryDiagnostics::new();
        let view = sink.clone();
        sink.warn("hello");
        assert_eq!(view.messages(), ["hello"]);
    }
}
