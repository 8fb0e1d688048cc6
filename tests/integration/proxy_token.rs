use crate::common::{combined_output, galaxy_command, run};

const CONFIG_ERROR_EXIT_CODE: i32 = 2;

#[test]
fn default_empty_token_fails_validation() {
    let output = run(galaxy_command().arg("proxy"));

    let text = combined_output(&output);
    assert_eq!(output.status.code(), Some(CONFIG_ERROR_EXIT_CODE));
    assert!(text.contains("invalid token provided"), "output: {text}");
    assert!(!text.contains("Starting galaxy proxy"), "output: {text}");
}

#[test]
fn malformed_env_token_fails_validation() {
    let output = run(galaxy_command().arg("proxy").env("TOKEN", "header.payload"));

    assert_eq!(output.status.code(), Some(CONFIG_ERROR_EXIT_CODE));
    assert!(combined_output(&output).contains("invalid token provided"));
}

#[test]
fn malformed_flag_token_overrides_valid_env_token() {
    let output = run(
        galaxy_command()
            .args(["proxy", "--token", "a.b.c.d"])
            .env("TOKEN", "a.b.c"),
    );

    assert_eq!(output.status.code(), Some(CONFIG_ERROR_EXIT_CODE));
}

#[test]
fn invalid_log_level_is_reported_and_defaults_to_info() {
    let output = run(galaxy_command().args(["proxy", "--log-level", "verbose", "--token", "bad"]));

    let text = combined_output(&output);
    assert_eq!(output.status.code(), Some(CONFIG_ERROR_EXIT_CODE));
    assert!(text.contains("Invalid log level (verbose) provided"), "output: {text}");
    assert!(text.contains("Defaulting to `info` level"), "output: {text}");
    assert!(text.contains("invalid token provided"), "output: {text}");
}

#[test]
fn error_level_suppresses_info_logs() {
    let output = run(
        galaxy_command()
            .args(["proxy", "--token", "bad"])
            .env("LOG_LEVEL", "error"),
    );

    let text = combined_output(&output);
    assert_eq!(output.status.code(), Some(CONFIG_ERROR_EXIT_CODE));
    assert!(text.contains("invalid token provided"), "output: {text}");
    assert!(!text.contains(" INFO "), "output: {text}");
}

#[test]
fn debug_level_enables_debug_logs() {
    let output = run(galaxy_command().args(["proxy", "--log-level", "debug", "--token", "bad"]));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(CONFIG_ERROR_EXIT_CODE));
    assert!(stdout.contains(" DEBUG "), "stdout: {stdout}");
    assert!(stdout.contains("Log level applied"), "stdout: {stdout}");
}

#[test]
fn info_level_hides_debug_logs() {
    let output = run(galaxy_command().args(["proxy", "--token", "bad"]));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(CONFIG_ERROR_EXIT_CODE));
    assert!(!stdout.contains(" DEBUG "), "stdout: {stdout}");
}

#[test]
fn startup_failure_is_printed_on_stderr() {
    let output = run(galaxy_command().args(["proxy", "--token", "a.b"]));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(CONFIG_ERROR_EXIT_CODE));
    assert!(
        stderr.contains("Failed to start galaxy: invalid token provided"),
        "stderr: {stderr}"
    );
}
