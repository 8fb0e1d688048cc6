use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

/// Deployment backend the runner drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DriverType {
    Istio,
}

impl DriverType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DriverType::Istio => "istio",
        }
    }
}

/// Driver settings handed to the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverConfig {
    pub driver_type: DriverType,
    pub config_file_path: Option<PathBuf>,
    pub is_in_cluster: bool,
}

impl DriverConfig {
    /// `is_in_cluster` is always derived from the outside-cluster switch.
    pub fn new(
        driver_type: DriverType,
        config_file_path: Option<PathBuf>,
        outside_cluster: bool,
    ) -> Self {
        Self {
            driver_type,
            config_file_path: config_file_path.filter(|path| !path.as_os_str().is_empty()),
            is_in_cluster: !outside_cluster,
        }
    }
}
