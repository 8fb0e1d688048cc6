use std::process::{Command, Output};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_galaxy");

const GALAXY_ENV_VARS: &[&str] = &[
    "PORT",
    "PROXY_PORT",
    "LOG_LEVEL",
    "JWT_ALGO",
    "JWT_SECRET",
    "JWT_PROXY_SECRET",
    "DRIVER",
    "DRIVER_CONFIG",
    "OUTSIDE_CLUSTER",
    "ADDR",
    "TOKEN",
];

/// `galaxy` command with every galaxy variable removed from the child environment.
pub fn galaxy_command() -> Command {
    let mut command = Command::new(BINARY_PATH);
    for key in GALAXY_ENV_VARS {
        command.env_remove(key);
    }
    command
}

pub fn run(command: &mut Command) -> Output {
    command.output().expect("galaxy process should start")
}

/// Stdout and stderr joined, since logs go to stdout and clap errors to stderr.
pub fn combined_output(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
