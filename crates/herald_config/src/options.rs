//! `-W` warning options: `-Wdev`, `-Wno-dev`, `-Werror=dev`, `-Wno-error=dev`
//! and the same forms for `deprecated`.

use crate::error::ConfigError;
use herald_diagnostics::WarningFlags;
use std::str::FromStr;

/// A diagnostic group controlled by `-W` options.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WarningGroup {
    /// Developer warnings (`dev`).
    Dev,
    /// Deprecation warnings (`deprecated`).
    Deprecated,
}

impl FromStr for WarningGroup {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(WarningGroup::Dev),
            "deprecated" => Ok(WarningGroup::Deprecated),
            other => Err(ConfigError::UnknownWarning(other.to_string())),
        }
    }
}

/// How a diagnostic group is reported.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum WarningLevel {
    /// Hidden.
    Ignore,
    /// Shown as a warning.
    Warn,
    /// Shown as an error.
    Error,
}

/// A single parsed `-W` option.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WarningOption {
    /// `-W<group>`: at least warn.
    Enable(WarningGroup),
    /// `-Wno-<group>`: ignore.
    Disable(WarningGroup),
    /// `-Werror=<group>`: report as errors.
    Error(WarningGroup),
    /// `-Wno-error=<group>`: at most warn.
    NoError(WarningGroup),
}

impl FromStr for WarningOption {
    type Err = ConfigError;

    /// Parses the text following `-W`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let group = |name: &str| -> Result<WarningGroup, ConfigError> {
            if name.is_empty() {
                Err(ConfigError::InvalidOption(s.to_string()))
            } else {
                name.parse()
            }
        };
        if let Some(name) = s.strip_prefix("no-error=") {
            Ok(WarningOption::NoError(group(name)?))
        } else if let Some(name) = s.strip_prefix("error=") {
            Ok(WarningOption::Error(group(name)?))
        } else if let Some(name) = s.strip_prefix("no-") {
            Ok(WarningOption::Disable(group(name)?))
        } else {
            Ok(WarningOption::Enable(group(s)?))
        }
    }
}

/// Levels requested by `-W` options. `None` means the group was not mentioned.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct WarningLevels {
    /// Level of developer warnings.
    pub dev: Option<WarningLevel>,
    /// Level of deprecation warnings. Follows `dev` when unset.
    pub deprecated: Option<WarningLevel>,
}

impl WarningLevels {
    /// Applies one option on top of the current levels.
    pub fn apply(&mut self, option: WarningOption) {
        let (group, level) = match option {
            WarningOption::Enable(g) => (g, self.current(g).max(WarningLevel::Warn)),
            WarningOption::Disable(g) => (g, WarningLevel::Ignore),
            WarningOption::Error(g) => (g, WarningLevel::Error),
            WarningOption::NoError(g) => (g, self.current(g).min(WarningLevel::Warn)),
        };
        *self.slot(group) = Some(level);
    }

    /// An unmentioned group counts as warning.
    fn current(&self, group: WarningGroup) -> WarningLevel {
        let level = match group {
            WarningGroup::Dev => self.dev,
            WarningGroup::Deprecated => self.deprecated,
        };
        level.unwrap_or(WarningLevel::Warn)
    }

    fn slot(&mut self, group: WarningGroup) -> &mut Option<WarningLevel> {
        match group {
            WarningGroup::Dev => &mut self.dev,
            WarningGroup::Deprecated => &mut self.deprecated,
        }
    }

    /// Overlays these levels on `base`, leaving unmentioned groups untouched.
    pub fn apply_to(&self, base: WarningFlags) -> WarningFlags {
        let mut flags = base;
        if let Some(level) = self.dev {
            flags.suppress_dev_warnings = level == WarningLevel::Ignore;
            flags.dev_warnings_as_errors = level == WarningLevel::Error;
        }
        if let Some(level) = self.deprecated.or(self.dev) {
            flags.suppress_deprecated_warnings = level == WarningLevel::Ignore;
            flags.deprecated_warnings_as_errors = level == WarningLevel::Error;
        }
        flags
    }
}

/// Parses `-W` option bodies (the text after `-W`) in order.
pub fn parse_warning_options<I, S>(options: I) -> Result<WarningLevels, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut levels = WarningLevels::default();
    for option in options {
        levels.apply(option.as_ref().parse()?);
    }
    Ok(levels)
}
