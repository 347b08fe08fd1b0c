use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};
use std::time::Duration;

use thiserror::Error;

use crate::protocol::{CheerMessage, DecodeError};

/// Default multicast group shared by every device on the network.
pub const DEFAULT_GROUP: Ipv4Addr = Ipv4Addr::new(224, 1, 1, 1);
/// Default UDP port.
pub const DEFAULT_PORT: u16 = 5123;
/// Default sender TTL: a datagram crosses at most this many router hops.
pub const DEFAULT_TTL: u32 = 3;
/// Receive buffer size. Larger datagrams are delivered truncated and then
/// typically fail decode with a length mismatch.
pub const RECV_BUFFER_LEN: usize = 1024;

/// Multicast endpoint configuration.
///
/// # Examples
/// ```
/// use cheercast_core::net::ChannelConfig;
///
/// let config = ChannelConfig::default();
/// assert_eq!(config.port, 5123);
/// assert_eq!(config.ttl, 3);
/// ```
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub group: Ipv4Addr,
    pub port: u16,
    pub ttl: u32,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            group: DEFAULT_GROUP,
            port: DEFAULT_PORT,
            ttl: DEFAULT_TTL,
        }
    }
}

/// Channel startup failure. Fatal to the caller: there is no implicit
/// retry, since the address may be unreachable or the interface may lack
/// multicast support.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("not a multicast address: {0}")]
    NotMulticast(Ipv4Addr),
    #[error("socket setup failed: {0}")]
    Io(#[from] io::Error),
}

/// Transmit failure, surfaced to the caller of [`MulticastChannel::send`].
#[derive(Debug, Error)]
pub enum SendError {
    #[error("datagram truncated by transport: sent {sent} of {len} bytes")]
    Truncated { sent: usize, len: usize },
    #[error("send failed: {0}")]
    Io(#[from] io::Error),
}

/// Receive failure. `Decode` is recoverable (log and continue); `Io` is for
/// the caller to handle, typically by restarting the channel.
#[derive(Debug, Error)]
pub enum RecvError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("undecodable datagram: {0}")]
    Decode(#[from] DecodeError),
}

/// One endpoint on the cheer multicast group.
///
/// A channel owns its socket and receive buffer exclusively. The buffer is
/// reused across datagrams; decoded messages own a copy of their bytes.
#[derive(Debug)]
pub struct MulticastChannel {
    socket: UdpSocket,
    dest: SocketAddrV4,
    buf: [u8; RECV_BUFFER_LEN],
}

impl MulticastChannel {
    /// Binds the configured port and joins the group for receiving.
    pub fn bind(config: &ChannelConfig) -> Result<Self, BindError> {
        if !config.group.is_multicast() {
            return Err(BindError::NotMulticast(config.group));
        }
        let socket = UdpSocket::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, config.port))?;
        socket.join_multicast_v4(&config.group, &Ipv4Addr::UNSPECIFIED)?;
        Ok(Self {
            socket,
            dest: SocketAddrV4::new(config.group, config.port),
            buf: [0; RECV_BUFFER_LEN],
        })
    }

    /// Opens a sending socket on an ephemeral port with the configured TTL.
    /// No group join: senders do not have to listen.
    pub fn connect(config: &ChannelConfig) -> Result<Self, BindError> {
        if !config.group.is_multicast() {
            return Err(BindError::NotMulticast(config.group));
        }
        let socket = UdpSocket::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0))?;
        socket.set_multicast_ttl_v4(config.ttl)?;
        Ok(Self {
            socket,
            dest: SocketAddrV4::new(config.group, config.port),
            buf: [0; RECV_BUFFER_LEN],
        })
    }

    /// Transmits the message blob as a single datagram.
    ///
    /// A blob beyond the platform's UDP payload limit is an error, never a
    /// silent truncation.
    pub fn send(&self, message: &CheerMessage) -> Result<(), SendError> {
        let blob = message.blob();
        let sent = self.socket.send_to(blob, self.dest)?;
        if sent != blob.len() {
            return Err(SendError::Truncated {
                sent,
                len: blob.len(),
            });
        }
        Ok(())
    }

    /// Blocks until one datagram arrives and decodes it.
    pub fn recv(&mut self) -> Result<(CheerMessage, SocketAddr), RecvError> {
        let (len, from) = self.socket.recv_from(&mut self.buf)?;
        let message = CheerMessage::from_bytes(&self.buf[..len])?;
        Ok((message, from))
    }

    /// Bounds how long [`MulticastChannel::recv`] may block. `None` blocks
    /// forever (the default).
    pub fn set_recv_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.socket.set_read_timeout(timeout)
    }

    /// The group address and port this channel sends to.
    pub fn destination(&self) -> SocketAddrV4 {
        self.dest
    }
}
