use std::{
    io,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket},
};

use thiserror::Error;

/// Failure of the send path. Any single failed send aborts the whole run;
/// a measurement tool has nothing useful to do with a broken path.
#[derive(Error, Debug)]
pub enum TransmitError {
    #[error("datagram send failed: {0}")]
    Send(#[source] io::Error),
}

/// The seam between the pacing core and the network. Blocking send of one
/// datagram; returns the byte count the OS reports as transmitted.
pub trait Transport {
    fn send(&mut self, payload: &[u8]) -> io::Result<usize>;
}

/// A connected UDP endpoint bound to one destination. Exactly one of these
/// exists per run; it is created at startup and lives for the process.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpTransport {
    /// Resolves `host` and connects an ephemeral local socket to it.
    pub fn connect(host: &str, port: u16) -> io::Result<UdpTransport> {
        let peer = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("no address found for host {}", host),
                )
            })?;
        let local = match peer.ip() {
            IpAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            IpAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        };
        let socket = UdpSocket::bind(local)?;
        socket.connect(peer)?;
        Ok(UdpTransport { socket, peer })
    }

    /// Wraps an already-connected socket. Used by tests with loopback pairs.
    pub fn from_socket(socket: UdpSocket) -> io::Result<UdpTransport> {
        let peer = socket.peer_addr()?;
        Ok(UdpTransport { socket, peer })
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Diagnostic read of a reply from the destination. Not part of the
    /// packet-generation flow; blocks until a datagram arrives.
    pub fn recv_echo(&self) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; 4096];
        let len = self.socket.recv(&mut buf)?;
        buf.truncate(len);
        Ok(buf)
    }
}

impl Transport for UdpTransport {
    fn send(&mut self, payload: &[u8]) -> io::Result<usize> {
        self.socket.send(payload)
    }
}
