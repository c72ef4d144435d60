//! Configuration types deserialized from `herald.toml`.

use herald_diagnostics::WarningFlags;
use serde::Deserialize;

/// The top-level configuration parsed from `herald.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeraldConfig {
    /// Warning switches.
    #[serde(default)]
    pub warnings: WarningSection,
}

/// The `[warnings]` table. Every key defaults to `false`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WarningSection {
    /// Hide developer warnings.
    #[serde(default)]
    pub suppress_dev_warnings: bool,
    /// Promote developer warnings to errors.
    #[serde(default)]
    pub dev_warnings_as_errors: bool,
    /// Hide deprecation warnings.
    #[serde(default)]
    pub suppress_deprecated_warnings: bool,
    /// Promote deprecation warnings to errors.
    #[serde(default)]
    pub deprecated_warnings_as_errors: bool,
}

impl From<WarningSection> for WarningFlags {
    fn from(section: WarningSection) -> Self {
        WarningFlags {
            dev_warnings_as_errors: section.dev_warnings_as_errors,
            suppress_dev_warnings: section.suppress_dev_warnings,
            deprecated_warnings_as_errors: section.deprecated_warnings_as_errors,
            suppress_deprecated_warnings: section.suppress_deprecated_warnings,
        }
    }
}
