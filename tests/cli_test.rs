use anyhow::Result;
use assert_cmd::Command;
use std::process::Output;
use tempfile::TempDir;

const CANONICAL: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n";

fn run(args: &[&str], stdin: &str) -> Result<Output> {
    let output = Command::cargo_bin("mars-rover")?
        .env_remove("RUST_LOG")
        .args(args)
        .write_stdin(stdin)
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_canonical_mission_default_flags() -> Result<()> {
    let output = run(&[], CANONICAL)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1 3 N\n5 1 E\n");
    assert!(stderr(&output).is_empty());
    Ok(())
}

#[test]
fn test_canonical_mission_strict() -> Result<()> {
    let output = run(&["--strict"], CANONICAL)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1 3 N\n5 1 E\n");
    Ok(())
}

#[test]
fn test_unknown_flag_is_usage_error() -> Result<()> {
    let output = run(&["--wat"], "5 5\n")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--wat"));
    assert!(stderr(&output).contains("Usage:"));
    assert!(stdout(&output).is_empty());
    Ok(())
}

#[test]
fn test_invalid_plateau_is_parse_error() -> Result<()> {
    let output = run(&[], "5 X\n")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Parse Error:"));
    assert!(stderr(&output).contains("Plateau line invalid (expected \"X Y\"): \"5 X\""));
    assert!(stdout(&output).is_empty());
    Ok(())
}

#[test]
fn test_invalid_command_is_parse_error() -> Result<()> {
    let output = run(&[], "5 5\n1 2 N\nLMQ\n")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Rover #1 invalid instructions (expected only L, R, M): \"LMQ\""));
    Ok(())
}

#[test]
fn test_strict_out_of_bounds_is_execution_error() -> Result<()> {
    let output = run(&[], "5 5\n0 0 S\nM\n")?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Execution Error:"));
    assert!(err.contains("Rover #1 instruction 1 out of bounds from (0,0,S)"));
    assert!(stdout(&output).is_empty());
    Ok(())
}

#[test]
fn test_boundary_policy_flags() -> Result<()> {
    let input = "5 5\n0 0 S\nMRM\n";

    let ignore = run(&["--ignore-oob"], input)?;
    assert_eq!(ignore.status.code(), Some(0));
    assert_eq!(stdout(&ignore), "0 0 W\n");
    assert!(stderr(&ignore).is_empty());

    let stop = run(&["--stop-on-oob"], input)?;
    assert_eq!(stop.status.code(), Some(0));
    assert_eq!(stdout(&stop), "0 0 S\n");

    let wrap = run(&["--wrap"], input)?;
    assert_eq!(wrap.status.code(), Some(0));
    assert_eq!(stdout(&wrap), "5 5 W\n");

    let last_wins = run(&["--ignore-oob", "--strict"], input)?;
    assert_eq!(last_wins.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_collect_errors_reports_and_continues() -> Result<()> {
    let input = "5 5\n1 2 N\nLMLMLMLMM\n0 0 S\nM\n3 3 E\nMMRMMRMRRM\n";
    let output = run(&["--collect-errors"], input)?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1 3 N\n5 1 E\n");
    assert!(stderr(&output).contains("Execution Error: Rover #2 instruction 1"));
    Ok(())
}

#[test]
fn test_multiple_rovers_and_rotations() -> Result<()> {
    let input = "5 5\n2 2 N\nLLLL\n3 3 E\nRRRR\n0 0 N\nRML\n";
    let output = run(&[], input)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "2 2 N\n3 3 E\n1 0 N\n");
    Ok(())
}

#[test]
fn test_input_and_config_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mission_path = temp_dir.path().join("mission.txt");
    let config_path = temp_dir.path().join("rover.toml");
    std::fs::write(&mission_path, "5 5\n0 0 S\nMRM\n")?;
    std::fs::write(
        &config_path,
        "[mission]\nboundary_policy = \"wrap\"\n\n[output]\nformat = \"json\"\n",
    )?;

    let mission_arg = mission_path.to_string_lossy().into_owned();
    let mission_arg = mission_arg.as_str();
    let config_arg = config_path.to_string_lossy().into_owned();
    let config_arg = config_arg.as_str();

    let output = run(&["--input", mission_arg, "--config", config_arg], "")?;
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value,
        serde_json::json!([{"rover": 1, "x": 5, "y": 5, "heading": "W"}])
    );

    let overridden = run(
        &["-i", mission_arg, "-c", config_arg, "--stop-on-oob", "-f", "text"],
        "",
    )?;
    assert_eq!(overridden.status.code(), Some(0));
    assert_eq!(stdout(&overridden), "0 0 S\n");
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<()> {
    let output = run(&["--input", "/no/such/mission.txt"], "")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Input Error:"));
    Ok(())
}

#[test]
fn test_bad_config_file_is_usage_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("rover.toml");
    std::fs::write(&config_path, "[mission]\nboundary_policy = \"clamp\"\n")?;

    let config_arg = config_path.to_string_lossy().into_owned();
    let output = run(&["-c", config_arg.as_str()], CANONICAL)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Config Error:"));
    assert!(stdout(&output).is_empty());
    Ok(())
}

#[test]
fn test_failure_prints_only_the_diagnostic_line() -> Result<()> {
    let output = run(&[], "5 5\n0 0 S\nM\n")?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Execution Error: Rover #1 instruction 1 out of bounds from (0,0,S)\n"
    );

    let parse = run(&[], "5 X\n")?;
    assert_eq!(
        stderr(&parse),
        "Parse Error: Plateau line invalid (expected \"X Y\"): \"5 X\"\n"
    );
    Ok(())
}

#[test]
fn test_csv_header_when_every_rover_fails() -> Result<()> {
    let output = run(&["-f", "csv", "--collect-errors"], "5 5\n0 0 S\nM\n")?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "rover,x,y,heading\n");
    assert_eq!(
        stderr(&output),
        "Execution Error: Rover #1 instruction 1 out of bounds from (0,0,S)\n"
    );
    Ok(())
}
