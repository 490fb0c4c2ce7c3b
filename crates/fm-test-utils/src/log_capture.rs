//! In-memory log capture
//!
//! Installs a `tracing-subscriber` fmt subscriber for the duration of a
//! closure and collects its output, so tests can assert on the diagnostics a
//! transformation emitted.

use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Captures formatted log lines emitted on the current thread
///
/// # Example
/// ```rust,ignore
/// let logs = LogCapture::new();
/// logs.run(|| mapper.transform_access_token(&headers, &mut token));
/// assert_eq!(logs.lines_at(Level::WARN).len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with a capturing subscriber as the thread default
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_level(true)
            .with_target(true)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    /// All captured lines
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    /// Captured lines at exactly `level`
    pub fn lines_at(&self, level: Level) -> Vec<String> {
        let prefix = level.as_str();
        self.lines()
            .into_iter()
            .filter(|line| line.trim_start().starts_with(prefix))
            .collect()
    }

    /// Captured lines from the mapper's decision target
    pub fn mapper_lines(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.contains("fm.mapper"))
            .collect()
    }
}
