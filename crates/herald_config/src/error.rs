//! Error types for configuration loading and warning option parsing.

/// Errors that can occur when loading `herald.toml` or parsing `-W` options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A `-W` option names a diagnostic group that does not exist.
    #[error("unknown warning group '{0}'")]
    UnknownWarning(String),

    /// A `-W` option is malformed.
    #[error("invalid warning option '-W{0}'")]
    InvalidOption(String),
}
