//! The per-message pipeline: convert, filter, render, dispatch.

use crate::backtrace::Backtrace;
use crate::formatter::TextFormatter;
use crate::policy::{convert_severity, is_visible, WarningConfig};
use crate::renderer::MessageRenderer;
use crate::severity::Severity;
use crate::sink::MessageSink;
use crate::stack::StackCapture;
use tracing::debug;

/// Issues diagnostic messages under a warning configuration.
///
/// The configuration belongs to the host; the messenger only reads it.
pub struct Messenger<C, S> {
    config: C,
    sink: S,
    renderer: MessageRenderer,
}

impl<C: WarningConfig, S: MessageSink> Messenger<C, S> {
    /// Creates a messenger with the default renderer.
    pub fn new(config: C, sink: S) -> Self {
        Self {
            config,
            sink,
            renderer: MessageRenderer::new(),
        }
    }

    /// Replaces the stack capture used for internal errors.
    pub fn with_stack_capture(mut self, stack: Box<dyn StackCapture + Send + Sync>) -> Self {
        self.renderer = self.renderer.with_stack_capture(stack);
        self
    }

    /// Replaces the text formatter.
    pub fn with_formatter(mut self, formatter: Box<dyn TextFormatter + Send + Sync>) -> Self {
        self.renderer = self.renderer.with_formatter(formatter);
        self
    }

    /// Returns the warning configuration.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Returns the warning configuration for modification between messages.
    pub fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }

    /// Returns the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Issues a message, applying the configured escalation and filtering.
    ///
    /// A message whose severity the configuration converted is always shown;
    /// otherwise hidden severities are dropped before rendering.
    pub fn issue_message(&self, severity: Severity, text: &str, backtrace: &dyn Backtrace) {
        let converted = convert_severity(severity, &self.config);
        if converted != severity {
            debug!(from = %severity, to = %converted, "message severity converted");
        } else if !is_visible(severity, &self.config) {
            debug!(severity = %severity, "message suppressed");
            return;
        }
        self.display_message(converted, text, backtrace);
    }

    /// Renders and dispatches a message with exactly the given severity.
    pub fn display_message(&self, severity: Severity, text: &str, backtrace: &dyn Backtrace) {
        let rendered = self.renderer.render(severity, text, backtrace);
        self.sink.accept(&rendered.text, &rendered.metadata);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtrace::ListFileBacktrace;
    use crate::policy::WarningFlags;
    use crate::sink::CollectingSink;

    fn messenger(flags: WarningFlags) -> Messenger<WarningFlags, CollectingSink> {
        Messenger::new(flags, CollectingSink::new())
    }

    #[test]
    fn visible_message_dispatched() {
        let m = messenger(WarningFlags::default());
        m.issue_message(Severity::Warning, "X is deprecated", &ListFileBacktrace::empty());
        let all = m.sink().take_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "CMake Warning:\n  X is deprecated\n\n");
    }

    #[test]
    fn suppressed_message_dropped() {
        let m = messenger(WarningFlags {
            suppress_dev_warnings: true,
            ..Default::default()
        });
        m.issue_message(Severity::DeveloperWarning, "noise", &ListFileBacktrace::empty());
        assert!(m.sink().is_empty());
    }

    #[test]
    fn demotion_bypasses_filter() {
        let m = messenger(WarningFlags {
            suppress_dev_warnings: true,
            ..Default::default()
        });
        m.issue_message(Severity::DeveloperError, "policy", &ListFileBacktrace::empty());
        let all = m.sink().take_all();
        assert_eq!(all.len(), 1);
        assert!(all[0].text.starts_with("CMake Warning (dev):"));
        assert!(!m.sink().error_flag().is_set());
    }

    #[test]
    fn escalation_sets_error_flag() {
        let m = messenger(WarningFlags {
            deprecated_warnings_as_errors: true,
            ..Default::default()
        });
        m.issue_message(Severity::DeprecationWarning, "old", &ListFileBacktrace::empty());
        let all = m.sink().take_all();
        assert!(all[0].text.starts_with("CMake Deprecation Error:"));
        assert!(m.sink().error_flag().is_set());
    }

    #[test]
    fn display_message_skips_policy() {
        let m = messenger(WarningFlags {
            suppress_deprecated_warnings: true,
            ..Default::default()
        });
        m.display_message(Severity::DeprecationWarning, "old", &ListFileBacktrace::empty());
        assert_eq!(m.sink().len(), 1);
    }

    #[test]
    fn config_can_change_between_messages() {
        let mut m = messenger(WarningFlags::default());
        m.issue_message(Severity::DeveloperWarning, "a", &ListFileBacktrace::empty());
        m.config_mut().suppress_dev_warnings = true;
        m.issue_message(Severity::DeveloperWarning, "b", &ListFileBacktrace::empty());
        assert_eq!(m.sink().len(), 1);
        assert!(m.config().suppress_dev_warnings);
    }
}
