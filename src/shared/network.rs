/**
 * Local Network Address Discovery
 *
 * Picks the address other devices on the LAN should use to reach this host.
 * Candidates are the host's interface addresses (unix) followed by the
 * source addresses of UDP route probes. Only IPv4 is considered. Loopback addresses are filtered out, a
 * `192.168.x.x` address is preferred, then the first remaining address, and
 * `127.0.0.1` is the last resort.
 */
use std::collections::BTreeSet;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Targets used to ask the OS which interface would route to them.
/// Connecting a UDP socket sends no packets.
const PROBE_TARGETS: [&str; 3] = ["10.255.255.255:1", "172.31.255.255:1", "192.168.255.255:1"];

/// Result of address discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAddresses {
    /// Address to display and encode in the QR code
    pub preferred: IpAddr,
    /// Every usable address, sorted, including `preferred`
    pub all: Vec<IpAddr>,
}

impl LocalAddresses {
    /// Addresses other than the preferred one
    pub fn others(&self) -> Vec<IpAddr> {
        self.all
            .iter()
            .copied()
            .filter(|ip| *ip != self.preferred)
            .collect()
    }

    pub fn is_loopback_only(&self) -> bool {
        self.preferred.is_loopback()
    }
}

impl Default for LocalAddresses {
    fn default() -> Self {
        select_preferred(std::iter::empty())
    }
}

fn is_private_lan(ip: &IpAddr) -> bool {
    matches!(ip, IpAddr::V4(v4) if v4.octets()[0] == 192 && v4.octets()[1] == 168)
}

/// Choose the preferred address out of `candidates`
pub fn select_preferred(candidates: impl IntoIterator<Item = IpAddr>) -> LocalAddresses {
    let mut first_seen = None;
    let mut unique = BTreeSet::new();

    for ip in candidates {
        if !ip.is_ipv4() || ip.is_loopback() || ip.is_unspecified() {
            continue;
        }
        if first_seen.is_none() {
            first_seen = Some(ip);
        }
        unique.insert(ip);
    }

    if unique.is_empty() {
        let loopback = IpAddr::V4(Ipv4Addr::LOCALHOST);
        return LocalAddresses {
            preferred: loopback,
            all: vec![loopback],
        };
    }

    let preferred = unique
        .iter()
        .copied()
        .find(is_private_lan)
        .or(first_seen)
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));

    LocalAddresses {
        preferred,
        all: unique.into_iter().collect(),
    }
}

fn probe_route_source(target: &str) -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(target).ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}

/// IPv4 addresses of every interface that is up
#[cfg(unix)]
pub fn interface_addresses() -> Vec<IpAddr> {
    use nix::ifaddrs::getifaddrs;
    use nix::net::if_::InterfaceFlags;

    match getifaddrs() {
        Ok(interfaces) => interfaces
            .filter(|iface| iface.flags.contains(InterfaceFlags::IFF_UP))
            .filter_map(|iface| {
                let address = iface.address?;
                address.as_sockaddr_in().map(|sin| IpAddr::V4(sin.ip()))
            })
            .collect(),
        Err(e) => {
            tracing::debug!("Listing interfaces failed: {}", e);
            Vec::new()
        }
    }
}

#[cfg(not(unix))]
pub fn interface_addresses() -> Vec<IpAddr> {
    Vec::new()
}

/// Inspect the host's interfaces and choose the preferred address
pub fn discover_local_addresses() -> LocalAddresses {
    let candidates: Vec<IpAddr> = interface_addresses()
        .into_iter()
        .chain(
            PROBE_TARGETS
                .iter()
                .filter_map(|target| probe_route_source(target)),
        )
        .collect();

    let addresses = select_preferred(candidates);
    tracing::debug!(
        "Detected local addresses: preferred={}, all={:?}",
        addresses.preferred,
        addresses.all
    );
    addresses
}

/// `ip:port` string shown to users and encoded in the QR code
pub fn server_url(ip: IpAddr, port: u16) -> String {
    std::net::SocketAddr::new(ip, port).to_string()
}
