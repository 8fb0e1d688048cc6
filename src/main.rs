//! Entry point for galaxy.
use std::process::ExitCode;

use clap::Parser;
use galaxy::{
    cli::{GalaxyArgs, LaunchProfile},
    modes::runtime::{self, RuntimeExit, StandaloneSubsystems},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    let profile = LaunchProfile::from(GalaxyArgs::parse());
    runtime::launch(profile, &StandaloneSubsystems).await
}
