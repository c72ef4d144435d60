//! Loading of `herald.toml` and `-W` warning options into [`WarningFlags`].
//!
//! The configuration file supplies the base values of the four warning
//! switches; command-line warning options are applied on top by
//! [`resolve_flags`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod options;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use herald_diagnostics::WarningFlags;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use options::{parse_warning_options, WarningGroup, WarningLevel, WarningLevels, WarningOption};
pub use resolve::resolve_flags;
pub use types::{HeraldConfig, WarningSection};
