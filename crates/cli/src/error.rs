//! Error types for xplanectl

use std::process::ExitCode;

use thiserror::Error;
use xplane_autopilot::ConfigError;
use xplane_udp::LinkError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid tuning: {0}")]
    Config(#[from] ConfigError),

    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidAddress(_) => 2,
            CliError::Config(_) => 3,
            CliError::Link(_) | CliError::Io(_) => 4,
            CliError::Json(_) => 1,
        }
    }
}

/// Exit status for any error reaching `main`.
pub fn exit_code(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<CliError>() {
        Some(e) => ExitCode::from(e.exit_code()),
        None => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(CliError::InvalidAddress("x".into()).exit_code(), 2);
        let config = ConfigError::Invalid {
            field: "rudder_gain",
            reason: "negative".into(),
        };
        assert_eq!(CliError::from(config).exit_code(), 3);
        assert_eq!(CliError::from(LinkError::NoRemote).exit_code(), 4);
        let io = std::io::Error::other("boom");
        assert_eq!(CliError::from(io).exit_code(), 4);
    }
}
