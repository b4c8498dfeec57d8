//! Socket ownership and datagram classification.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::UdpSocket;
use tracing::{debug, info, warn};
use xplane_protocol::{CommandPacket, DataPacket, Packet, PacketError, decode};

use crate::MAX_DATAGRAM_SIZE;
use crate::error::{LinkError, LinkResult};

/// One received datagram, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Data(DataPacket),
    Command(CommandPacket),
    /// Unrecognized kind or malformed body. The next datagram is unaffected.
    Ignored(PacketError),
}

/// Decode a datagram, folding decode failures into [`Inbound::Ignored`].
pub fn classify(datagram: &[u8]) -> Inbound {
    match decode(datagram) {
        Ok(Packet::Data(packet)) => Inbound::Data(packet),
        Ok(Packet::Command(packet)) => Inbound::Command(packet),
        Err(e) => {
            if e.is_recoverable() {
                debug!(error = %e, len = datagram.len(), "Ignoring datagram");
            } else {
                warn!(error = %e, len = datagram.len(), "Dropping malformed datagram");
            }
            Inbound::Ignored(e)
        }
    }
}

/// A UDP socket paired with the host it talks to.
#[derive(Debug, Clone)]
pub struct XPlaneLink {
    socket: Arc<UdpSocket>,
    remote: Option<SocketAddr>,
}

impl XPlaneLink {
    /// Bind `local` and send to `remote`.
    ///
    /// # Errors
    ///
    /// [`LinkError::Bind`] when the local address is unavailable.
    pub async fn bind(local: SocketAddr, remote: SocketAddr) -> LinkResult<Self> {
        let link = Self::open(local, Some(remote)).await?;
        info!(local = %link.local_addr()?, %remote, "X-Plane link up");
        Ok(link)
    }

    /// Bind `local` for receiving only.
    ///
    /// # Errors
    ///
    /// [`LinkError::Bind`] when the local address is unavailable.
    pub async fn listen(local: SocketAddr) -> LinkResult<Self> {
        let link = Self::open(local, None).await?;
        info!(local = %link.local_addr()?, "Listening for X-Plane telemetry");
        Ok(link)
    }

    async fn open(local: SocketAddr, remote: Option<SocketAddr>) -> LinkResult<Self> {
        let socket = UdpSocket::bind(local)
            .await
            .map_err(|source| LinkError::Bind { addr: local, source })?;
        Ok(Self {
            socket: Arc::new(socket),
            remote,
        })
    }

    /// Address the socket is bound to, with the OS-assigned port if 0 was
    /// requested.
    ///
    /// # Errors
    ///
    /// [`LinkError::Io`] if the socket cannot report its address.
    pub fn local_addr(&self) -> LinkResult<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    pub fn remote(&self) -> Option<SocketAddr> {
        self.remote
    }

    pub(crate) fn socket(&self) -> Arc<UdpSocket> {
        Arc::clone(&self.socket)
    }

    /// Encode and send one packet to the remote host. Returns bytes sent.
    ///
    /// # Errors
    ///
    /// [`LinkError::NoRemote`] on a listen-only link, [`LinkError::Io`] if
    /// the send fails.
    pub async fn send(&self, packet: &Packet) -> LinkResult<usize> {
        let remote = self.remote.ok_or(LinkError::NoRemote)?;
        let bytes = packet.to_bytes();
        let sent = self.socket.send_to(&bytes, remote).await?;
        debug!(kind = ?packet.kind(), len = sent, %remote, "Sent packet");
        Ok(sent)
    }

    /// Wait for one datagram from any sender.
    ///
    /// # Errors
    ///
    /// [`LinkError::Io`] if the receive fails. Undecodable datagrams are not
    /// errors; they arrive as [`Inbound::Ignored`].
    pub async fn recv(&self) -> LinkResult<(Inbound, SocketAddr)> {
        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
        let (len, source) = self.socket.recv_from(&mut buf).await?;
        let datagram = buf.get(..len).unwrap_or_default();
        Ok((classify(datagram), source))
    }
}
