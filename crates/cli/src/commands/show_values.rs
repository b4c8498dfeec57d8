//! Live telemetry dump.

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use xplane_udp::XPlaneLink;

use crate::commands::ShowValuesArgs;
use crate::error::CliError;
use crate::output;

/// Print every readable group of each inbound `DATA` packet until Ctrl-C.
pub async fn execute(args: &ShowValuesArgs, json: bool) -> Result<()> {
    let local = SocketAddr::new(args.bind, args.port);
    let link = XPlaneLink::listen(local).await.map_err(CliError::from)?;
    let mut frames = link.start_monitoring();

    if !json {
        output::print_listening(local);
    }

    loop {
        tokio::select! {
            frame = frames.recv() => match frame {
                Some(frame) => output::print_frame(&frame, json)?,
                None => break,
            },
            signal = tokio::signal::ctrl_c() => {
                signal.map_err(CliError::from)?;
                info!("Interrupted");
                break;
            }
        }
    }
    Ok(())
}
