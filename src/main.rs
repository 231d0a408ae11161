use clap::Parser;
use mars_rover::utils::{logger, validation::Validate};
use mars_rover::{CliConfig, InputSource, MissionEngine, RoverError, RunSettings, TomlConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    // clap prints usage and exits with 2 on unknown or malformed flags
    let cli = CliConfig::parse();

    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => return fail(&e),
    };

    logger::init_cli_logger(cli.verbose, file_config.log_level(), file_config.json_logs());
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate().and_then(|_| file_config.validate()) {
        return fail(&e);
    }

    let settings = RunSettings::layered(&[&file_config, &cli]);
    let source = InputSource::from_arg(cli.input.as_deref());
    let engine = MissionEngine::new(source, settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match engine.run(&mut out) {
        Ok(report) => {
            for e in report.failures() {
                eprintln!("{}", e.user_friendly_message());
            }
            if report.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &RoverError) -> ExitCode {
    tracing::debug!(
        "Mission failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    ExitCode::from(e.exit_code())
}
