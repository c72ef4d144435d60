//! Optional capture of the tool's own stack for internal-error reports.

/// Captures a textual stack trace of the running program.
pub trait StackCapture {
    /// Returns the stack with the first `skip` frames dropped and at most
    /// `max` frames kept (`0` keeps all). An empty string means no stack is
    /// available.
    fn capture_stack(&self, skip: usize, max: usize) -> String;
}

/// A capture that never produces a stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStackCapture;

impl StackCapture for NoStackCapture {
    fn capture_stack(&self, _skip: usize, _max: usize) -> String {
        String::new()
    }
}

/// Captures the stack with [`std::backtrace::Backtrace`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeStackCapture;

impl StackCapture for NativeStackCapture {
    fn capture_stack(&self, skip: usize, max: usize) -> String {
        let backtrace = std::backtrace::Backtrace::force_capture();
        if backtrace.status() != std::backtrace::BacktraceStatus::Captured {
            return String::new();
        }
        select_frames(&backtrace.to_string(), skip, max)
    }
}

/// Keeps a window of frames from a rendered backtrace.
///
/// A frame starts at a line whose first token is `<index>:`; the `at` lines
/// that follow belong to it.
fn select_frames(rendered: &str, skip: usize, max: usize) -> String {
    let mut frames: Vec<Vec<&str>> = Vec::new();
    for line in rendered.lines() {
        if is_frame_start(line) || frames.is_empty() {
            frames.push(vec![line]);
        } else if let Some(frame) = frames.last_mut() {
            frame.push(line);
        }
    }

    let limit = if max == 0 { usize::MAX } else { max };
    frames
        .into_iter()
        .skip(skip)
        .take(limit)
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_frame_start(line: &str) -> bool {
    line.trim_start()
        .split_once(':')
        .is_some_and(|(index, _)| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENDERED: &str = "   0: main\n             at src/main.rs:1:1\n   1: start\n   2: entry\n             at lib.rs:9:2";

    #[test]
    fn no_capture_is_empty() {
        assert_eq!(NoStackCapture.capture_stack(0, 0), "");
    }

    #[test]
    fn select_all() {
        assert_eq!(select_frames(RENDERED, 0, 0), RENDERED);
    }

    #[test]
    fn select_window() {
        assert_eq!(select_frames(RENDERED, 1, 1), "   1: start");
        assert_eq!(
            select_frames(RENDERED, 2, 0),
            "   2: entry\n             at lib.rs:9:2"
        );
        assert_eq!(select_frames(RENDERED, 5, 0), "");
    }

    #[test]
    fn frame_start_detection() {
        assert!(is_frame_start("  12: foo"));
        assert!(!is_frame_start("        at src/lib.rs:3:4"));
        assert!(!is_frame_start(": nothing"));
    }

    #[test]
    fn native_capture_respects_limit() {
        let stack = NativeStackCapture.capture_stack(0, 1);
        assert!(stack.lines().filter(|l| is_frame_start(l)).count() <= 1);
    }
}
