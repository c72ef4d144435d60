//! Severity conversion, visibility filtering, and rendering of configure-time messages.
//!
//! A [`Messenger`] takes a [`Severity`], the message text, and a [`Backtrace`],
//! escalates or demotes developer and deprecation messages according to its
//! [`WarningConfig`], drops hidden ones, renders the rest with a
//! [`MessageRenderer`], and hands the text to a [`MessageSink`]. Sinks set a
//! shared [`ErrorFlag`] whenever an error-class message goes out.

#![warn(missing_docs)]

pub mod backtrace;
pub mod formatter;
pub mod messenger;
pub mod metadata;
pub mod policy;
pub mod renderer;
pub mod severity;
pub mod sink;
pub mod stack;

pub use backtrace::{Backtrace, Frame, ListFileBacktrace, ParseFrameError};
pub use formatter::{DocumentationFormatter, TextFormatter};
pub use messenger::Messenger;
pub use metadata::{MessageColor, MessageMetadata, MessageTitle, RenderedMessage};
pub use policy::{convert_severity, is_visible, WarningConfig, WarningFlags};
pub use renderer::MessageRenderer;
pub use severity::Severity;
pub use sink::{CollectingSink, ErrorFlag, MessageSink, TerminalSink};
pub use stack::{NativeStackCapture, NoStackCapture, StackCapture};
