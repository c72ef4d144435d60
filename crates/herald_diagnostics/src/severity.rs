//! Message severities and the display properties derived from them.

use crate::metadata::{MessageColor, MessageTitle};
use std::fmt;

/// The severity of a diagnostic message.
///
/// Developer and deprecation messages come in warning/error pairs that the
/// run configuration may escalate or demote (see [`convert_severity`](crate::convert_severity)).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Severity {
    /// A debug log message.
    Log,
    /// A plain warning.
    Warning,
    /// A user-facing error that fails the configure step.
    FatalError,
    /// A bug in the tool itself.
    InternalError,
    /// A warning meant for project developers.
    DeveloperWarning,
    /// A developer warning promoted to an error.
    DeveloperError,
    /// Use of a deprecated feature.
    DeprecationWarning,
    /// A deprecation warning promoted to an error.
    DeprecationError,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 8] = [
        Severity::Log,
        Severity::Warning,
        Severity::FatalError,
        Severity::InternalError,
        Severity::DeveloperWarning,
        Severity::DeveloperError,
        Severity::DeprecationWarning,
        Severity::DeprecationError,
    ];

    /// Returns the label that opens a rendered message of this severity.
    pub fn preamble(self) -> &'static str {
        match self {
            Severity::FatalError => "CMake Error",
            Severity::InternalError => "CMake Internal Error (please report a bug)",
            Severity::Log => "CMake Debug Log",
            Severity::DeprecationError => "CMake Deprecation Error",
            Severity::DeprecationWarning => "CMake Deprecation Warning",
            Severity::DeveloperWarning => "CMake Warning (dev)",
            Severity::DeveloperError => "CMake Error (dev)",
            Severity::Warning => "CMake Warning",
        }
    }

    /// Returns the terminal color requested for this severity.
    pub fn color(self) -> MessageColor {
        match self {
            Severity::InternalError | Severity::FatalError | Severity::DeveloperError => {
                MessageColor::Red
            }
            Severity::DeveloperWarning | Severity::Warning => MessageColor::Yellow,
            Severity::Log | Severity::DeprecationWarning | Severity::DeprecationError => {
                MessageColor::Normal
            }
        }
    }

    /// Returns the dispatch title for this severity.
    ///
    /// [`Log`](Severity::Log) is titled `Warning` even though its preamble
    /// reads "CMake Debug Log".
    pub fn title(self) -> MessageTitle {
        match self {
            Severity::FatalError
            | Severity::InternalError
            | Severity::DeprecationError
            | Severity::DeveloperError => MessageTitle::Error,
            Severity::Log
            | Severity::Warning
            | Severity::DeveloperWarning
            | Severity::DeprecationWarning => MessageTitle::Warning,
        }
    }

    /// Returns `true` if dispatching this severity marks the run as failed.
    pub fn is_error(self) -> bool {
        self.title() == MessageTitle::Error
    }

    /// Returns the hint telling the reader how to silence this message, if any.
    pub fn suppression_hint(self) -> Option<&'static str> {
        match self {
            Severity::DeveloperWarning => {
                Some("This warning is for project developers.  Use -Wno-dev to suppress it.")
            }
            Severity::DeveloperError => {
                Some("This error is for project developers. Use -Wno-error=dev to suppress it.")
            }
            Severity::Log
            | Severity::Warning
            | Severity::FatalError
            | Severity::InternalError
            | Severity::DeprecationWarning
            | Severity::DeprecationError => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Log => write!(f, "log"),
            Severity::Warning => write!(f, "warning"),
            Severity::FatalError => write!(f, "fatal error"),
            Severity::InternalError => write!(f, "internal error"),
            Severity::DeveloperWarning => write!(f, "developer warning"),
            Severity::DeveloperError => write!(f, "developer error"),
            Severity::DeprecationWarning => write!(f, "deprecation warning"),
            Severity::DeprecationError => write!(f, "deprecation error"),
        }
    }
}
