//! Serial takeoff loop over a live link.

use tracing::{debug, info};
use xplane_autopilot::TakeoffController;

use crate::error::LinkResult;
use crate::link::{Inbound, XPlaneLink};

/// Counters from one [`run_takeoff`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TakeoffSummary {
    /// `DATA` datagrams handed to the controller.
    pub ticks: u64,
    /// Packets sent back to the host.
    pub packets_sent: u64,
    /// Datagrams that were not telemetry.
    pub ignored: u64,
}

/// Feed telemetry from `link` to `controller` until it is no longer active.
///
/// Each datagram is fully evaluated and its replies sent before the next is
/// read. Returns immediately if the controller is not active. Cancelling the
/// future between datagrams leaves the controller in its last phase; call
/// [`TakeoffController::reset`] to abandon the attempt.
///
/// # Errors
///
/// Any [`LinkError`](crate::LinkError) from receiving or sending. The
/// controller has already advanced past the tick whose send failed, and the
/// unsent replies of that tick are lost. Calling `run_takeoff` again resumes
/// from the next datagram; if the failed tick was the first one, the brake
/// release or throttle command may never have reached the host, so
/// [`TakeoffController::reset`] and [`TakeoffController::begin`] to start
/// over instead.
pub async fn run_takeoff(
    link: &XPlaneLink,
    controller: &mut TakeoffController,
) -> LinkResult<TakeoffSummary> {
    let mut summary = TakeoffSummary::default();

    while controller.is_active() {
        let (inbound, source) = link.recv().await?;
        let telemetry = match inbound {
            Inbound::Data(packet) => packet,
            Inbound::Command(command) => {
                debug!(%source, command = command.command(), "Ignoring inbound command");
                summary.ignored = summary.ignored.saturating_add(1);
                continue;
            }
            Inbound::Ignored(_) => {
                summary.ignored = summary.ignored.saturating_add(1);
                continue;
            }
        };

        summary.ticks = summary.ticks.saturating_add(1);
        for packet in controller.on_tick(&telemetry) {
            link.send(&packet).await?;
            summary.packets_sent = summary.packets_sent.saturating_add(1);
        }
    }

    info!(
        ticks = summary.ticks,
        packets_sent = summary.packets_sent,
        phase = controller.phase().name(),
        "Takeoff loop finished"
    );
    Ok(summary)
}
