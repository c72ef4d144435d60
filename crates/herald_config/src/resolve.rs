//! Resolution of the effective warning switches from file and command line.

use crate::error::ConfigError;
use crate::options::parse_warning_options;
use crate::types::HeraldConfig;
use herald_diagnostics::WarningFlags;

/// Resolves the effective [`WarningFlags`].
///
/// Values from `herald.toml` form the base; `-W` options (given without the
/// leading `-W`) are applied on top.
pub fn resolve_flags<I, S>(config: &HeraldConfig, options: I) -> Result<WarningFlags, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let levels = parse_warning_options(options)?;
    Ok(levels.apply_to(config.warnings.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn defaults_without_file_or_options() {
        let flags = resolve_flags(&HeraldConfig::default(), Vec::<String>::new()).unwrap();
        assert_eq!(flags, WarningFlags::default());
    }

    #[test]
    fn file_values_used_as_base() {
        let config = load_config_from_str("[warnings]\nsuppress_dev_warnings = true\n").unwrap();
        let flags = resolve_flags(&config, Vec::<String>::new()).unwrap();
        assert!(flags.suppress_dev_warnings);
        assert!(!flags.suppress_deprecated_warnings);
    }

    #[test]
    fn options_override_file() {
        let config = load_config_from_str(
            "[warnings]\nsuppress_dev_warnings = true\nsuppress_deprecated_warnings = true\n",
        )
        .unwrap();
        let flags = resolve_flags(&config, ["error=dev"]).unwrap();
        assert!(!flags.suppress_dev_warnings);
        assert!(flags.dev_warnings_as_errors);
        assert!(flags.deprecated_warnings_as_errors);
        assert!(!flags.suppress_deprecated_warnings);
    }

    #[test]
    fn bad_option_propagates() {
        let err = resolve_flags(&HeraldConfig::default(), ["bogus"]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownWarning(_)));
    }
}
