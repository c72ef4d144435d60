//! Assembly of the text block for a single message.

use crate::backtrace::Backtrace;
use crate::formatter::{DocumentationFormatter, TextFormatter};
use crate::metadata::{MessageMetadata, RenderedMessage};
use crate::severity::Severity;
use crate::stack::{NoStackCapture, StackCapture};

/// Renders messages in the classic block format:
///
/// ```text
/// CMake Warning at CMakeLists.txt:3 (message):
///   Text wrapped and indented by two spaces.
/// Call Stack (most recent call first):
///   CMakeLists.txt:1 (include)
///
/// ```
pub struct MessageRenderer {
    formatter: Box<dyn TextFormatter + Send + Sync>,
    stack: Box<dyn StackCapture + Send + Sync>,
}

impl MessageRenderer {
    /// Creates a renderer with the default formatter and no stack capture.
    pub fn new() -> Self {
        Self {
            formatter: Box::new(DocumentationFormatter::new()),
            stack: Box::new(NoStackCapture),
        }
    }

    /// Replaces the text formatter.
    pub fn with_formatter(mut self, formatter: Box<dyn TextFormatter + Send + Sync>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replaces the stack capture used for internal errors.
    pub fn with_stack_capture(mut self, stack: Box<dyn StackCapture + Send + Sync>) -> Self {
        self.stack = stack;
        self
    }

    /// Renders `text` with the given severity and call context.
    pub fn render(
        &self,
        severity: Severity,
        text: &str,
        backtrace: &dyn Backtrace,
    ) -> RenderedMessage {
        let mut out = String::from(severity.preamble());

        // Immediate context.
        backtrace.print_title(&mut out);

        out.push_str(":\n");
        out.push_str(&self.formatter.format(text, "  "));

        backtrace.print_call_stack(&mut out);

        if let Some(hint) = severity.suppression_hint() {
            out.push_str(hint);
        }
        out.push('\n');

        if severity == Severity::InternalError {
            let stack = self.stack.capture_stack(0, 0);
            if !stack.is_empty() {
                out.push_str(&rewrite_stack_prefix(&stack));
                out.push('\n');
            }
        }

        RenderedMessage {
            text: out,
            metadata: MessageMetadata {
                title: severity.title(),
                color: severity.color(),
            },
        }
    }
}

impl Default for MessageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns a leading `WARNING:` from the stack capture into `Note:`.
fn rewrite_stack_prefix(stack: &str) -> String {
    match stack.strip_prefix("WARNING:") {
        Some(rest) => format!("Note:{rest}"),
        None => stack.to_string(),
    }
}
