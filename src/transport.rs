//! Bound-transport snapshot: the set of addresses a server has bound, plus
//! the address it advertises to peers. The engine derives enforcement mode
//! from this without ever touching a socket itself.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// A snapshot of where the embedding server is listening and what it
/// publishes. Constructed by the caller from its own transport-discovery
/// layer; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundTransport {
    bound: Vec<SocketAddr>,
    publish: SocketAddr,
}

impl BoundTransport {
    pub fn new(bound: Vec<SocketAddr>, publish: SocketAddr) -> Self {
        Self { bound, publish }
    }

    pub fn bound(&self) -> &[SocketAddr] {
        &self.bound
    }

    pub fn publish(&self) -> SocketAddr {
        self.publish
    }

    /// True iff any bound address is non-local, or the publish address is
    /// non-local.
    pub fn is_production(&self) -> bool {
        self.bound.iter().any(|a| !is_local(a.ip())) || !is_local(self.publish.ip())
    }
}

/// An address is local iff it is loopback or link-local; everything else is
/// non-local. This is the sole locality predicate the engine relies on.
pub fn is_local(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_loopback() || is_link_local_v4(v4),
        IpAddr::V6(v6) => v6.is_loopback() || is_link_local_v6(v6),
    }
}

fn is_link_local_v4(v4: Ipv4Addr) -> bool {
    // 169.254.0.0/16
    v4.octets()[0] == 169 && v4.octets()[1] == 254
}

fn is_link_local_v6(v6: Ipv6Addr) -> bool {
    // fe80::/10
    (v6.segments()[0] & 0xffc0) == 0xfe80
}
