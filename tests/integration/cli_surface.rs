use crate::common::{combined_output, galaxy_command, run};

#[test]
fn version_flag_prints_crate_version() {
    let output = run(galaxy_command().arg("--version"));
    assert!(output.status.success(), "--version should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(concat!("galaxy ", env!("CARGO_PKG_VERSION"))),
        "stdout: {stdout}"
    );
}

#[test]
fn help_lists_all_modes() {
    let output = run(galaxy_command().arg("--help"));
    assert!(output.status.success(), "--help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in [
        "runner",
        "Starts a galaxy runner instance",
        "proxy",
        "Starts the proxy to collect metrics directly from envoy",
        "server",
        "Starts the galaxy server instance",
    ] {
        assert!(stdout.contains(needle), "help should mention {needle}:\n{stdout}");
    }
}

#[test]
fn runner_help_documents_env_fallbacks() {
    let output = run(galaxy_command().args(["runner", "--help"]));
    assert!(output.status.success(), "runner --help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in [
        "--port",
        "env: PORT",
        "--proxy-port",
        "env: PROXY_PORT",
        "--jwt-algo",
        "--driver-config",
        "--outside-cluster",
        "env: OUTSIDE_CLUSTER",
        "[default: 4050]",
        "[default: 4055]",
    ] {
        assert!(stdout.contains(needle), "runner help should mention {needle}:\n{stdout}");
    }
}

#[test]
fn unknown_subcommand_exits_non_zero() {
    let output = run(galaxy_command().arg("deploy"));
    assert_eq!(output.status.code(), Some(2));
    assert!(
        combined_output(&output).contains("deploy"),
        "error should name the subcommand"
    );
}

#[test]
fn missing_subcommand_exits_non_zero() {
    let output = run(&mut galaxy_command());
    assert!(!output.status.success());
}

#[test]
fn unknown_jwt_algorithm_is_rejected_before_start() {
    let output = run(galaxy_command().args(["runner", "--jwt-algo", "es512"]));
    let text = combined_output(&output);
    assert_eq!(output.status.code(), Some(2));
    assert!(text.contains("es512"), "output: {text}");
    assert!(!text.contains("Starting galaxy runner"), "output: {text}");
}
