//! Call context attached to a message: where it was issued and how execution got there.

use std::fmt;
use std::str::FromStr;

/// A call context that can describe itself for a rendered message.
///
/// Both methods only append; either may append nothing.
pub trait Backtrace {
    /// Appends the immediate context, e.g. `" at CMakeLists.txt:3 (message)"`.
    fn print_title(&self, out: &mut String);
    /// Appends the remaining frames.
    fn print_call_stack(&self, out: &mut String);
}

/// One entry of a [`ListFileBacktrace`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Frame {
    /// Path of the script file.
    pub file: String,
    /// One-based line number, or `0` when unknown.
    pub line: u32,
    /// Name of the command executing at this frame.
    pub command: Option<String>,
}

impl Frame {
    /// Creates a frame for a command invocation at `file:line`.
    ///
    /// An empty command name yields a frame without a command.
    pub fn new(file: impl Into<String>, line: u32, command: impl Into<String>) -> Self {
        let command = command.into();
        Self {
            file: file.into(),
            line,
            command: (!command.is_empty()).then_some(command),
        }
    }

    /// Creates a frame that names only a file.
    pub fn file(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: 0,
            command: None,
        }
    }

    /// Returns the command name, if present and non-empty.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref().filter(|c| !c.is_empty())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file)?;
        if self.line > 0 {
            write!(f, ":{}", self.line)?;
            if let Some(command) = self.command() {
                write!(f, " ({command})")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a frame description cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFrameError {
    /// The file part is empty.
    #[error("frame has no file")]
    MissingFile,
    /// The line part is not a number.
    #[error("invalid line number '{0}'")]
    InvalidLine(String),
}

impl FromStr for Frame {
    type Err = ParseFrameError;

    /// Parses `FILE[:LINE[:COMMAND]]`.
    ///
    /// Fields are taken from the right so that `FILE` may contain colons,
    /// as in `C:\src\CMakeLists.txt:3:message`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let frame = |file: &str, line: u32, command: Option<&str>| {
            if file.is_empty() {
                return Err(ParseFrameError::MissingFile);
            }
            Ok(Frame {
                file: file.to_string(),
                line,
                command: command.filter(|c| !c.is_empty()).map(str::to_string),
            })
        };

        let Some((head, last)) = s.rsplit_once(':') else {
            return frame(s, 0, None);
        };
        if let Some(line) = parse_line(last) {
            return frame(head, line?, None);
        }
        if let Some((file, line)) = head.rsplit_once(':') {
            if let Some(line) = parse_line(line) {
                return frame(file, line?, Some(last));
            }
        }
        if is_drive(head) {
            return frame(s, 0, None);
        }

        // Report the field standing where the line number belongs.
        let line = match head.rsplit_once(':') {
            Some((file, line)) if !is_drive(file) => line,
            _ => last,
        };
        Err(ParseFrameError::InvalidLine(line.to_string()))
    }
}

/// Parses a field made only of digits. `None` if it is not such a field.
fn parse_line(field: &str) -> Option<Result<u32, ParseFrameError>> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(
        field
            .parse()
            .map_err(|_| ParseFrameError::InvalidLine(field.to_string())),
    )
}

/// A single drive letter, the part of `C:\...` before the colon.
fn is_drive(prefix: &str) -> bool {
    prefix.len() == 1 && prefix.bytes().all(|b| b.is_ascii_alphabetic())
}

/// A backtrace through script files, immediate frame first.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ListFileBacktrace {
    frames: Vec<Frame>,
}

impl ListFileBacktrace {
    /// Creates an empty backtrace.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a backtrace from frames ordered innermost first.
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Returns a new backtrace with `frame` as the immediate context.
    pub fn push(&self, frame: Frame) -> Self {
        let mut frames = Vec::with_capacity(self.frames.len() + 1);
        frames.push(frame);
        frames.extend(self.frames.iter().cloned());
        Self { frames }
    }

    /// Returns the immediate frame.
    pub fn top(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// Returns the frames, innermost first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns `true` if there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Backtrace for ListFileBacktrace {
    fn print_title(&self, out: &mut String) {
        if let Some(top) = self.top() {
            out.push_str(if top.line > 0 { " at " } else { " in " });
            out.push_str(&top.to_string());
        }
    }

    fn print_call_stack(&self, out: &mut String) {
        // File-only frames carry no call.
        let mut callers = self.frames.iter().skip(1).filter(|f| f.command().is_some());
        let Some(first) = callers.next() else {
            return;
        };
        out.push_str("Call Stack (most recent call first):\n");
        for frame in std::iter::once(first).chain(callers) {
            out.push_str("  ");
            out.push_str(&frame.to_string());
            out.push('\n');
        }
    }
}
