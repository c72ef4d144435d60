//! Message destinations and the shared "an error occurred" flag.

use crate::metadata::{MessageColor, MessageMetadata, MessageTitle, RenderedMessage};
use crossterm::style::{style, Color, Stylize};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Records that at least one error-class message was dispatched.
///
/// The flag can only be set. Share it between sinks and the host with an [`Arc`].
#[derive(Debug, Default)]
pub struct ErrorFlag {
    occurred: AtomicBool,
}

impl ErrorFlag {
    /// Creates an unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks that an error occurred.
    pub fn set(&self) {
        self.occurred.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`set`](Self::set) has been called.
    pub fn is_set(&self) -> bool {
        self.occurred.load(Ordering::Relaxed)
    }
}

/// A destination for rendered messages.
pub trait MessageSink {
    /// Emits `text`. Error-titled messages also set the sink's error flag.
    fn accept(&self, text: &str, metadata: &MessageMetadata);
}

impl<S: MessageSink + ?Sized> MessageSink for &S {
    fn accept(&self, text: &str, metadata: &MessageMetadata) {
        (**self).accept(text, metadata)
    }
}

impl<S: MessageSink + ?Sized> MessageSink for Arc<S> {
    fn accept(&self, text: &str, metadata: &MessageMetadata) {
        (**self).accept(text, metadata)
    }
}

/// Writes messages to a terminal stream, colored when enabled.
pub struct TerminalSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    error_flag: Arc<ErrorFlag>,
}

impl TerminalSink {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: Box<dyn Write + Send>, color: bool, error_flag: Arc<ErrorFlag>) -> Self {
        Self {
            writer: Mutex::new(writer),
            color,
            error_flag,
        }
    }

    /// Creates a sink writing to standard error.
    pub fn stderr(color: bool, error_flag: Arc<ErrorFlag>) -> Self {
        Self::new(Box::new(io::stderr()), color, error_flag)
    }

    /// Returns the shared error flag.
    pub fn error_flag(&self) -> &Arc<ErrorFlag> {
        &self.error_flag
    }

    fn write(&self, text: &str, color: MessageColor) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("terminal writer poisoned"))?;
        match (self.color, color) {
            (true, MessageColor::Red) => write!(writer, "{}", style(text).with(Color::Red))?,
            (true, MessageColor::Yellow) => write!(writer, "{}", style(text).with(Color::Yellow))?,
            _ => writer.write_all(text.as_bytes())?,
        }
        writer.flush()
    }
}

impl MessageSink for TerminalSink {
    fn accept(&self, text: &str, metadata: &MessageMetadata) {
        if metadata.title == MessageTitle::Error {
            self.error_flag.set();
        }
        if let Err(err) = self.write(text, metadata.color) {
            tracing::warn!("dropped diagnostic output: {err}");
        }
    }
}

/// Accumulates rendered messages in memory.
pub struct CollectingSink {
    messages: Mutex<Vec<RenderedMessage>>,
    error_flag: Arc<ErrorFlag>,
}

impl CollectingSink {
    /// Creates an empty sink with its own error flag.
    pub fn new() -> Self {
        Self::with_error_flag(Arc::new(ErrorFlag::new()))
    }

    /// Creates an empty sink that sets the given shared flag.
    pub fn with_error_flag(error_flag: Arc<ErrorFlag>) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            error_flag,
        }
    }

    /// Returns the shared error flag.
    pub fn error_flag(&self) -> &Arc<ErrorFlag> {
        &self.error_flag
    }

    /// Takes all accumulated messages, leaving the sink empty.
    pub fn take_all(&self) -> Vec<RenderedMessage> {
        let mut messages = self.messages.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *messages)
    }

    /// Returns a snapshot of the accumulated messages without draining.
    pub fn messages(&self) -> Vec<RenderedMessage> {
        let messages = self.messages.lock().unwrap_or_else(|e| e.into_inner());
        messages.clone()
    }

    /// Returns the number of accumulated messages.
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns `true` if nothing has been accepted since the last drain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CollectingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSink for CollectingSink {
    fn accept(&self, text: &str, metadata: &MessageMetadata) {
        if metadata.title == MessageTitle::Error {
            self.error_flag.set();
        }
        let mut messages = self.messages.lock().unwrap_or_else(|e| e.into_inner());
        messages.push(RenderedMessage {
            text: text.to_string(),
            metadata: *metadata,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WARNING: MessageMetadata = MessageMetadata {
        title: MessageTitle::Warning,
        color: MessageColor::Yellow,
    };

    const ERROR: MessageMetadata = MessageMetadata {
        title: MessageTitle::Error,
        color: MessageColor::Red,
    };

    /// A writer whose contents stay readable after being boxed into a sink.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    #[test]
    fn flag_starts_unset() {
        let flag = ErrorFlag::new();
        assert!(!flag.is_set());
        flag.set();
        flag.set();
        assert!(flag.is_set());
    }

    #[test]
    fn terminal_plain_output() {
        let buffer = SharedBuffer::default();
        let flag = Arc::new(ErrorFlag::new());
        let sink = TerminalSink::new(Box::new(buffer.clone()), false, Arc::clone(&flag));
        sink.accept("CMake Warning:\n  hi\n\n", &WARNING);
        assert_eq!(buffer.contents(), "CMake Warning:\n  hi\n\n");
        assert!(!flag.is_set());
    }

    #[test]
    fn terminal_error_sets_flag() {
        let buffer = SharedBuffer::default();
        let flag = Arc::new(ErrorFlag::new());
        let sink = TerminalSink::new(Box::new(buffer.clone()), false, Arc::clone(&flag));
        sink.accept("CMake Error:\n  bad\n\n", &ERROR);
        assert!(flag.is_set());
        assert!(sink.error_flag().is_set());
    }

    #[test]
    fn terminal_colored_output() {
        let buffer = SharedBuffer::default();
        let sink = TerminalSink::new(Box::new(buffer.clone()), true, Arc::new(ErrorFlag::new()));
        sink.accept("bad", &ERROR);
        // NO_COLOR in the environment may strip the escapes.
        assert!(buffer.contents().contains("bad"));
    }

    #[test]
    fn terminal_normal_color_is_plain() {
        let buffer = SharedBuffer::default();
        let sink = TerminalSink::new(Box::new(buffer.clone()), true, Arc::new(ErrorFlag::new()));
        let normal = MessageMetadata {
            title: MessageTitle::Warning,
            color: MessageColor::Normal,
        };
        sink.accept("log", &normal);
        assert_eq!(buffer.contents(), "log");
    }

    #[test]
    fn terminal_write_failure_still_flags() {
        let flag = Arc::new(ErrorFlag::new());
        let sink = TerminalSink::new(Box::new(FailingWriter), false, Arc::clone(&flag));
        sink.accept("bad", &ERROR);
        assert!(flag.is_set());
    }

    #[test]
    fn collecting_sink() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());
        sink.accept("w", &WARNING);
        assert!(!sink.error_flag().is_set());
        sink.accept("e", &ERROR);
        assert!(sink.error_flag().is_set());
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages()[1].metadata, ERROR);
        let all = sink.take_all();
        assert_eq!(all.len(), 2);
        assert!(sink.take_all().is_empty());
        // The flag survives draining.
        assert!(sink.error_flag().is_set());
    }

    #[test]
    fn shared_flag_across_sinks() {
        let flag = Arc::new(ErrorFlag::new());
        let first = CollectingSink::with_error_flag(Arc::clone(&flag));
        let second = CollectingSink::with_error_flag(Arc::clone(&flag));
        first.accept("w", &WARNING);
        assert!(!flag.is_set());
        second.accept("e", &ERROR);
        assert!(flag.is_set());
    }

    #[test]
    fn thread_safety() {
        use std::thread;

        let sink = Arc::new(CollectingSink::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let sink = Arc::clone(&sink);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    sink.accept("w", &WARNING);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(sink.len(), 400);
    }
}
