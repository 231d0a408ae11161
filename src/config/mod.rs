pub mod source;
pub mod toml_config;

use crate::domain::model::{BoundaryPolicy, ErrorMode, OutputFormat};
use crate::domain::ports::ConfigProvider;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Command line flags. Policy flags override each other, as do the two
/// error-mode flags: the last one given wins.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mars-rover")]
#[command(about = "Drive rovers across a plateau and report where they end up")]
#[command(args_override_self = true)]
pub struct CliConfig {
    /// Fail on out-of-bounds moves (default)
    #[arg(long, overrides_with_all = ["ignore_oob", "stop_on_oob", "wrap"])]
    pub strict: bool,

    /// Skip out-of-bounds moves
    #[arg(long, overrides_with_all = ["strict", "stop_on_oob", "wrap"])]
    pub ignore_oob: bool,

    /// Stop a rover at its first out-of-bounds move
    #[arg(long, overrides_with_all = ["strict", "ignore_oob", "wrap"])]
    pub stop_on_oob: bool,

    /// Wrap around the plateau edges
    #[arg(long, overrides_with_all = ["strict", "ignore_oob", "stop_on_oob"])]
    pub wrap: bool,

    /// Stop on the first rover error (default)
    #[arg(long, overrides_with = "collect_errors")]
    pub fail_fast: bool,

    /// Keep running the remaining rovers after an error
    #[arg(long, overrides_with = "fail_fast")]
    pub collect_errors: bool,

    /// Mission file to read; stdin when omitted or "-"
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// TOML file with default settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn boundary_policy(&self) -> Option<BoundaryPolicy> {
        if self.strict {
            Some(BoundaryPolicy::Strict)
        } else if self.ignore_oob {
            Some(BoundaryPolicy::IgnoreOob)
        } else if self.stop_on_oob {
            Some(BoundaryPolicy::StopOnOob)
        } else if self.wrap {
            Some(BoundaryPolicy::Wrap)
        } else {
            None
        }
    }

    fn error_mode(&self) -> Option<ErrorMode> {
        if self.collect_errors {
            Some(ErrorMode::CollectErrors)
        } else if self.fail_fast {
            Some(ErrorMode::FailFast)
        } else {
            None
        }
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", &input.to_string_lossy())?;
        }
        if let Some(config) = &self.config {
            validate_path("config", &config.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Effective settings after layering built-in defaults, the config file and flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSettings {
    pub boundary_policy: BoundaryPolicy,
    pub error_mode: ErrorMode,
    pub output_format: OutputFormat,
}

impl RunSettings {
    /// Later layers win over earlier ones.
    pub fn layered(layers: &[&dyn ConfigProvider]) -> Self {
        layers.iter().fold(Self::default(), |settings, layer| Self {
            boundary_policy: layer.boundary_policy().unwrap_or(settings.boundary_policy),
            error_mode: layer.error_mode().unwrap_or(settings.error_mode),
            output_format: layer.output_format().unwrap_or(settings.output_format),
        })
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["mars-rover"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.boundary_policy(), None);
        assert_eq!(cli.error_mode(), None);
        assert_eq!(RunSettings::layered(&[&cli]), RunSettings::default());
        assert_eq!(RunSettings::default().boundary_policy, BoundaryPolicy::Strict);
        assert_eq!(RunSettings::default().error_mode, ErrorMode::FailFast);
    }

    #[test]
    fn test_last_policy_flag_wins() {
        assert_eq!(
            parse(&["--strict", "--ignore-oob"]).boundary_policy(),
            Some(BoundaryPolicy::IgnoreOob)
        );
        assert_eq!(
            parse(&["--ignore-oob", "--stop-on-oob"]).boundary_policy(),
            Some(BoundaryPolicy::StopOnOob)
        );
        assert_eq!(
            parse(&["--wrap", "--strict"]).boundary_policy(),
            Some(BoundaryPolicy::Strict)
        );
        assert_eq!(
            parse(&["--wrap", "--wrap"]).boundary_policy(),
            Some(BoundaryPolicy::Wrap)
        );
    }

    #[test]
    fn test_last_error_mode_flag_wins() {
        assert_eq!(
            parse(&["--fail-fast", "--collect-errors"]).error_mode(),
            Some(ErrorMode::CollectErrors)
        );
        assert_eq!(
            parse(&["--collect-errors", "--fail-fast"]).error_mode(),
            Some(ErrorMode::FailFast)
        );
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = CliConfig::try_parse_from(["mars-rover", "--wat"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(parse(&["-f", "json"]).output_format(), Some(OutputFormat::Json));
        assert_eq!(parse(&["--format", "csv"]).output_format(), Some(OutputFormat::Csv));
        assert!(CliConfig::try_parse_from(["mars-rover", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[mission]
boundary_policy = "wrap"
error_mode = "collect-errors"

[output]
format = "json"
"#,
        )
        .unwrap();
        let cli = parse(&["--ignore-oob"]);

        let settings = RunSettings::layered(&[&file, &cli]);
        assert_eq!(settings.boundary_policy, BoundaryPolicy::IgnoreOob);
        assert_eq!(settings.error_mode, ErrorMode::CollectErrors);
        assert_eq!(settings.output_format, OutputFormat::Json);
    }
}
