//! xplanectl - X-Plane telemetry and takeoff CLI
//!
//! Watches the `DATA` telemetry an X-Plane host streams over UDP and flies a
//! scripted takeoff by answering that telemetry with control packets.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{ShowValuesArgs, TakeOffArgs};

#[derive(Parser)]
#[command(name = "xplanectl")]
#[command(about = "X-Plane telemetry monitor and takeoff sequencer")]
#[command(version)]
#[command(long_about = "
xplanectl talks to an X-Plane host over its UDP data protocol.

show-values prints every known telemetry group as it arrives.
take-off releases the brakes, opens the throttle, holds the runway heading,
rotates once the wings carry enough lift and levels off after the climb.

Configure X-Plane's Data Output to send the needed rows to this machine.
Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print inbound telemetry in SI units
    ShowValues(ShowValuesArgs),

    /// Fly a scripted takeoff and initial climb
    TakeOff(TakeOffArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("xplanectl={log_level},xplane_autopilot={log_level},xplane_udp={log_level}")
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    match execute_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            error::exit_code(&e)
        }
    }
}

async fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::ShowValues(args) => commands::show_values::execute(args, cli.json).await,
        Commands::TakeOff(args) => commands::take_off::execute(args, cli.json).await,
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::net::{IpAddr, Ipv6Addr};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_show_values_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["xplanectl", "show-values"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        match &cli.command {
            Commands::ShowValues(args) => {
                assert_eq!(args.bind, IpAddr::V6(Ipv6Addr::UNSPECIFIED));
                assert_eq!(args.port, 49000);
            }
            _ => return Err("expected ShowValues command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_show_values_json_and_port() -> TestResult {
        let cli = Cli::try_parse_from([
            "xplanectl",
            "show-values",
            "--bind",
            "127.0.0.1",
            "--port",
            "49010",
            "--json",
        ])?;
        assert!(cli.json);
        match &cli.command {
            Commands::ShowValues(args) => {
                assert_eq!(args.bind, IpAddr::from([127, 0, 0, 1]));
                assert_eq!(args.port, 49010);
            }
            _ => return Err("expected ShowValues command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_take_off_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["xplanectl", "take-off", "10.0.0.5"])?;
        match &cli.command {
            Commands::TakeOff(args) => {
                assert_eq!(args.send_host, "10.0.0.5");
                assert_eq!(args.send_port, 49000);
                assert_eq!(args.listen_host, "0.0.0.0");
                assert_eq!(args.listen_port, 49000);
                assert!(!args.gentle);
            }
            _ => return Err("expected TakeOff command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_short_flags() -> TestResult {
        let cli = Cli::try_parse_from(["xplanectl", "show-values", "-b", "::1", "-p", "49100"])?;
        let Commands::ShowValues(args) = &cli.command else {
            return Err("expected ShowValues command".into());
        };
        assert_eq!(args.bind, IpAddr::V6(Ipv6Addr::LOCALHOST));
        assert_eq!(args.port, 49100);

        let cli = Cli::try_parse_from([
            "xplanectl", "take-off", "sim-box", "-p", "49001", "-b", "127.0.0.1", "-P", "49002",
        ])?;
        let Commands::TakeOff(args) = &cli.command else {
            return Err("expected TakeOff command".into());
        };
        assert_eq!(args.send_port, 49001);
        assert_eq!(args.listen_host, "127.0.0.1");
        assert_eq!(args.listen_port, 49002);
        Ok(())
    }

    #[test]
    fn parse_take_off_rejects_config_with_gentle() {
        let result = Cli::try_parse_from([
            "xplanectl",
            "take-off",
            "sim-box",
            "--config",
            "tuning.yaml",
            "--gentle",
        ]);
        assert!(matches!(result, Err(_)));
    }

    #[test]
    fn parse_take_off_requires_host() {
        assert!(matches!(
            Cli::try_parse_from(["xplanectl", "take-off"]),
            Err(_)
        ));
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        let cli = Cli::try_parse_from(["xplanectl", "-vv", "show-values"])?;
        assert_eq!(cli.verbose, 2);
        Ok(())
    }

    #[test]
    fn gentle_flag_selects_gentle_tuning() -> TestResult {
        let cli = Cli::try_parse_from(["xplanectl", "take-off", "sim-box", "--gentle"])?;
        let Commands::TakeOff(args) = &cli.command else {
            return Err("expected TakeOff command".into());
        };
        let config = commands::take_off::tuning(args)?;
        assert_eq!(config, xplane_autopilot::TakeoffConfig::gentle());
        Ok(())
    }
}
