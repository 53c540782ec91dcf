//! IP addresses and networks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::debug;

use super::NetworkError;

/// An IPv4 or IPv6 address
///
/// Ordered with every IPv4 address before every IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpAddress(IpAddr);

impl IpAddress {
    pub fn new(addr: IpAddr) -> Self {
        Self(addr)
    }

    /// Builds an address from its network-order bytes (4 or 16 of them)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NetworkError> {
        if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
            return Ok(Self(IpAddr::V4(Ipv4Addr::from(octets))));
        }
        if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
            return Ok(Self(IpAddr::V6(Ipv6Addr::from(octets))));
        }
        Err(NetworkError::InvalidLength {
            expected: "4 or 16",
            actual: bytes.len(),
        })
    }

    /// Network-order bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.0 {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }

    pub fn is_ipv4(&self) -> bool {
        self.0.is_ipv4()
    }

    pub fn is_ipv6(&self) -> bool {
        self.0.is_ipv6()
    }

    pub fn as_ip_addr(&self) -> IpAddr {
        self.0
    }

    fn max_prefix(&self) -> u8 {
        match self.0 {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for IpAddress {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<IpAddr>().map(Self).map_err(|e| {
            debug!(input = s, error = %e, "rejected IP address");
            NetworkError::InvalidIpAddress(s.to_string())
        })
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        Self(addr)
    }
}

/// A CIDR block such as `10.0.0.0/8`
///
/// Host bits are cleared on construction, so `10.1.2.3/8` and `10.0.0.0/8`
/// are the same network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpNetwork {
    address: IpAddress,
    prefix_len: u8,
}

impl IpNetwork {
    pub fn new(address: IpAddress, prefix_len: u8) -> Result<Self, NetworkError> {
        let max = address.max_prefix();
        if prefix_len > max {
            return Err(NetworkError::InvalidPrefix { prefix_len, max });
        }
        Ok(Self {
            address: mask(address, prefix_len),
            prefix_len,
        })
    }

    pub fn address(&self) -> IpAddress {
        self.address
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Returns true if `addr` falls inside the block
    ///
    /// Addresses of the other family are never contained.
    pub fn contains(&self, addr: &IpAddress) -> bool {
        addr.is_ipv4() == self.address.is_ipv4() && mask(*addr, self.prefix_len) == self.address
    }
}

impl fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

impl FromStr for IpNetwork {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, prefix_len) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| NetworkError::InvalidNetwork(s.to_string()))?;
        let prefix_len = prefix_len
            .parse::<u8>()
            .map_err(|_| NetworkError::InvalidNetwork(s.to_string()))?;
        Self::new(address.parse()?, prefix_len)
    }
}

fn mask(addr: IpAddress, prefix_len: u8) -> IpAddress {
    match addr.0 {
        IpAddr::V4(v4) => {
            let bits = u32::from(v4);
            let masked = if prefix_len == 0 {
                0
            } else {
                bits & (u32::MAX << (32 - u32::from(prefix_len)))
            };
            IpAddress(IpAddr::V4(Ipv4Addr::from(masked)))
        }
        IpAddr::V6(v6) => {
            let bits = u128::from(v6);
            let masked = if prefix_len == 0 {
                0
            } else {
                bits & (u128::MAX << (128 - u32::from(prefix_len)))
            };
            IpAddress(IpAddr::V6(Ipv6Addr::from(masked)))
        }
    }
}
