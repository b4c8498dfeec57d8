//! Scripted takeoff against a live host.

use anyhow::Result;
use tracing::{info, warn};
use xplane_autopilot::{TakeoffConfig, TakeoffController};
use xplane_udp::{XPlaneLink, run_takeoff};

use crate::commands::{TakeOffArgs, listen_addr, resolve};
use crate::error::CliError;
use crate::output;

/// Tuning selected by the command line.
pub fn tuning(args: &TakeOffArgs) -> Result<TakeoffConfig, CliError> {
    match (&args.config, args.gentle) {
        (Some(path), _) => Ok(TakeoffConfig::load(path)?),
        (None, true) => Ok(TakeoffConfig::gentle()),
        (None, false) => Ok(TakeoffConfig::default()),
    }
}

/// Fly one takeoff attempt until the climb completes or Ctrl-C.
pub async fn execute(args: &TakeOffArgs, json: bool) -> Result<()> {
    let config = tuning(args)?;
    let local = listen_addr(&args.listen_host, args.listen_port)?;
    let remote = resolve(&args.send_host, args.send_port).await?;

    let mut controller = TakeoffController::new(config).map_err(CliError::from)?;
    let link = XPlaneLink::bind(local, remote).await.map_err(CliError::from)?;
    if !json {
        output::print_takeoff_start(local, remote);
    }

    controller.begin();
    let summary = tokio::select! {
        summary = run_takeoff(&link, &mut controller) => Some(summary.map_err(CliError::from)?),
        signal = tokio::signal::ctrl_c() => {
            signal.map_err(CliError::from)?;
            None
        }
    };

    match summary {
        Some(summary) => {
            info!(ticks = summary.ticks, "Takeoff complete");
            output::print_takeoff_summary(&summary, controller.phase(), json)?;
        }
        None => {
            warn!(phase = controller.phase().name(), "Takeoff aborted");
            controller.reset();
            output::print_takeoff_aborted(json)?;
        }
    }
    Ok(())
}
