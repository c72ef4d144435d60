//! Run configuration, severity conversion, and visibility filtering.

use crate::severity::Severity;

/// Read access to the four switches that govern developer and deprecation messages.
pub trait WarningConfig {
    /// Developer warnings are promoted to errors.
    fn dev_warnings_as_errors(&self) -> bool;
    /// Developer warnings are hidden.
    fn suppress_dev_warnings(&self) -> bool;
    /// Deprecation warnings are promoted to errors.
    fn deprecated_warnings_as_errors(&self) -> bool;
    /// Deprecation warnings are hidden.
    fn suppress_deprecated_warnings(&self) -> bool;
}

/// The plain four-switch configuration.
///
/// All switches default to `false`: developer and deprecation warnings are
/// shown as warnings.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct WarningFlags {
    /// See [`WarningConfig::dev_warnings_as_errors`].
    pub dev_warnings_as_errors: bool,
    /// See [`WarningConfig::suppress_dev_warnings`].
    pub suppress_dev_warnings: bool,
    /// See [`WarningConfig::deprecated_warnings_as_errors`].
    pub deprecated_warnings_as_errors: bool,
    /// See [`WarningConfig::suppress_deprecated_warnings`].
    pub suppress_deprecated_warnings: bool,
}

impl WarningConfig for WarningFlags {
    fn dev_warnings_as_errors(&self) -> bool {
        self.dev_warnings_as_errors
    }

    fn suppress_dev_warnings(&self) -> bool {
        self.suppress_dev_warnings
    }

    fn deprecated_warnings_as_errors(&self) -> bool {
        self.deprecated_warnings_as_errors
    }

    fn suppress_deprecated_warnings(&self) -> bool {
        self.suppress_deprecated_warnings
    }
}

impl<T: WarningConfig + ?Sized> WarningConfig for &T {
    fn dev_warnings_as_errors(&self) -> bool {
        (**self).dev_warnings_as_errors()
    }

    fn suppress_dev_warnings(&self) -> bool {
        (**self).suppress_dev_warnings()
    }

    fn deprecated_warnings_as_errors(&self) -> bool {
        (**self).deprecated_warnings_as_errors()
    }

    fn suppress_deprecated_warnings(&self) -> bool {
        (**self).suppress_deprecated_warnings()
    }
}

/// Escalates or demotes developer and deprecation severities to match the
/// configuration. Every other severity is returned unchanged.
pub fn convert_severity<C: WarningConfig + ?Sized>(severity: Severity, config: &C) -> Severity {
    match severity {
        Severity::DeveloperWarning if config.dev_warnings_as_errors() => Severity::DeveloperError,
        Severity::DeveloperError if !config.dev_warnings_as_errors() => Severity::DeveloperWarning,
        Severity::DeprecationWarning if config.deprecated_warnings_as_errors() => {
            Severity::DeprecationError
        }
        Severity::DeprecationError if !config.deprecated_warnings_as_errors() => {
            Severity::DeprecationWarning
        }
        other => other,
    }
}

/// Decides whether a message of the given severity is shown.
///
/// Only meaningful for a severity that [`convert_severity`] left unchanged;
/// converted messages are always shown.
pub fn is_visible<C: WarningConfig + ?Sized>(severity: Severity, config: &C) -> bool {
    match severity {
        Severity::DeprecationError => config.deprecated_warnings_as_errors(),
        Severity::DeprecationWarning => !config.suppress_deprecated_warnings(),
        Severity::DeveloperError => config.dev_warnings_as_errors(),
        Severity::DeveloperWarning => !config.suppress_dev_warnings(),
        Severity::Log | Severity::Warning | Severity::FatalError | Severity::InternalError => true,
    }
}
