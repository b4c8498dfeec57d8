//! Background telemetry stream.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use xplane_protocol::DataPacket;

use crate::link::{Inbound, XPlaneLink, classify};
use crate::{MAX_DATAGRAM_SIZE, telemetry_now_ns};

/// Frames buffered before the receive task waits on the consumer.
const CHANNEL_CAPACITY: usize = 100;
/// Pause after a socket error so a persistent failure does not spin.
const ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// One decoded `DATA` datagram with its arrival metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryFrame {
    pub packet: DataPacket,
    pub source: SocketAddr,
    /// Count of frames delivered before this one.
    pub sequence: u64,
    /// Datagram size in bytes.
    pub raw_size: usize,
    /// See [`telemetry_now_ns`].
    pub timestamp_ns: u64,
}

pub type TelemetryReceiver = mpsc::Receiver<TelemetryFrame>;

impl XPlaneLink {
    /// Spawn a task that forwards every `DATA` datagram as a
    /// [`TelemetryFrame`]. Commands and undecodable datagrams are logged and
    /// dropped. The task stops once the receiver is dropped.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start_monitoring(&self) -> TelemetryReceiver {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let socket = self.socket();

        tokio::spawn(async move {
            let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
            let mut sequence = 0u64;

            loop {
                let received = tokio::select! {
                    () = tx.closed() => break,
                    received = socket.recv_from(&mut buf) => received,
                };
                let (len, source) = match received {
                    Ok(received) => received,
                    Err(e) => {
                        warn!("X-Plane UDP receive error: {e}");
                        tokio::time::sleep(ERROR_BACKOFF).await;
                        continue;
                    }
                };

                let datagram = buf.get(..len).unwrap_or_default();
                let packet = match classify(datagram) {
                    Inbound::Data(packet) => packet,
                    Inbound::Command(command) => {
                        debug!(%source, command = command.command(), "Ignoring inbound command");
                        continue;
                    }
                    Inbound::Ignored(_) => continue,
                };

                let frame = TelemetryFrame {
                    packet,
                    source,
                    sequence,
                    raw_size: len,
                    timestamp_ns: telemetry_now_ns(),
                };
                if tx.send(frame).await.is_err() {
                    debug!("Receiver dropped, stopping X-Plane monitoring");
                    break;
                }
                sequence = sequence.saturating_add(1);
            }
            info!("Stopped X-Plane telemetry monitoring");
        });

        rx
    }
}
