//! `herald flags` — print the resolved warning switches.

use herald_config::WarningFlags;

use crate::GlobalArgs;

/// Runs the `herald flags` command.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    print!("{}", describe(&global.warning_flags()?));
    Ok(0)
}

/// Formats the switches as `name = value` lines.
fn describe(flags: &WarningFlags) -> String {
    format!(
        "suppress_dev_warnings = {}\n\
         dev_warnings_as_errors = {}\n\
         suppress_deprecated_warnings = {}\n\
         deprecated_warnings_as_errors = {}\n",
        flags.suppress_dev_warnings,
        flags.dev_warnings_as_errors,
        flags.suppress_deprecated_warnings,
        flags.deprecated_warnings_as_errors,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_defaults() {
        assert_eq!(
            describe(&WarningFlags::default()),
            "suppress_dev_warnings = false\n\
             dev_warnings_as_errors = false\n\
             suppress_deprecated_warnings = false\n\
             deprecated_warnings_as_errors = false\n"
        );
    }

    #[test]
    fn describe_mixed() {
        let flags = WarningFlags {
            dev_warnings_as_errors: true,
            suppress_deprecated_warnings: true,
            ..Default::default()
        };
        let text = describe(&flags);
        assert!(text.contains("dev_warnings_as_errors = true\n"));
        assert!(text.contains("suppress_deprecated_warnings = true\n"));
        assert!(text.contains("suppress_dev_warnings = false\n"));
    }
}
