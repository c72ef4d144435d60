//! `herald issue` — render and emit one diagnostic message.

use std::sync::Arc;

use herald_diagnostics::{
    ErrorFlag, ListFileBacktrace, Messenger, NativeStackCapture, TerminalSink,
};

use crate::{GlobalArgs, IssueArgs};

/// Runs the `herald issue` command.
///
/// Returns exit code 1 if the message was dispatched as an error, 0 otherwise.
pub fn run(args: &IssueArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let flags = global.warning_flags()?;
    tracing::debug!(?flags, "resolved warning flags");

    let error_flag = Arc::new(ErrorFlag::new());
    let sink = TerminalSink::stderr(global.color, Arc::clone(&error_flag));
    let mut messenger = Messenger::new(flags, sink);
    if args.native_stack {
        messenger = messenger.with_stack_capture(Box::new(NativeStackCapture));
    }

    let backtrace = ListFileBacktrace::from_frames(args.frames.clone());
    messenger.issue_message(args.severity.into(), &args.text, &backtrace);

    Ok(if error_flag.is_set() { 1 } else { 0 })
}
