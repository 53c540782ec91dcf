//! 48-bit MAC addresses

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::NetworkError;

/// A 48-bit IEEE 802 MAC address
///
/// Accepts `00:1a:2b:3c:4d:5e`, `00-1A-2B-3C-4D-5E`, `001a.2b3c.4d5e` and
/// `001A2B3C4D5E`. Always renders lowercase and colon-separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NetworkError> {
        <[u8; 6]>::try_from(bytes)
            .map(Self)
            .map_err(|_| NetworkError::InvalidLength {
                expected: "6",
                actual: bytes.len(),
            })
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Group bit of the first octet
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// U/L bit of the first octet
    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & 0x02 != 0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl FromStr for MacAddress {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || {
            debug!(input, "rejected MAC address");
            NetworkError::InvalidMacAddress(s.to_string())
        };

        let separator = match (input.contains(':'), input.contains('-')) {
            (true, true) => return Err(invalid()),
            (true, false) => Some(':'),
            (false, true) => Some('-'),
            (false, false) => None,
        };
        let hex: String = if let Some(separator) = separator {
            let groups: Vec<&str> = input.split(separator).collect();
            if groups.len() != 6 || groups.iter().any(|g| g.len() != 2) {
                return Err(invalid());
            }
            groups.concat()
        } else if input.contains('.') {
            let groups: Vec<&str> = input.split('.').collect();
            if groups.len() != 3 || groups.iter().any(|g| g.len() != 4) {
                return Err(invalid());
            }
            groups.concat()
        } else {
            input.to_string()
        };

        if hex.len() != 12 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Self(octets))
    }
}

impl Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OCTETS: [u8; 6] = [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e];

    #[test]
    fn test_accepted_notations() {
        for text in ["00:1a:2b:3c:4d:5e", "00-1A-2B-3C-4D-5E", "001a.2b3c.4d5e", "001A2B3C4D5E"] {
            assert_eq!(text.parse::<MacAddress>().unwrap().octets(), OCTETS, "{text}");
        }
    }

    #[test]
    fn test_canonical_text() {
        assert_eq!(MacAddress::new(OCTETS).to_string(), "00:1a:2b:3c:4d:5e");
    }

    #[test]
    fn test_rejects_malformed() {
        for text in ["00:1a:2b:3c:4d", "00:1a:2b:3c:4d:5g", "001a2b3c4d5", "0:1a:2b:3c:4d:5e0"] {
            assert!(text.parse::<MacAddress>().is_err(), "{text}");
        }
    }

    #[test]
    fn test_rejects_mixed_separators() {
        for text in ["00:1a-2b:3c-4d:5e", "00-1a-2b-3c-4d:5e"] {
            assert!(text.parse::<MacAddress>().is_err(), "{text}");
        }
    }

    #[test]
    fn test_flag_bits() {
        let mac: MacAddress = "03:00:00:00:00:01".parse().unwrap();
        assert!(mac.is_multicast());
        assert!(mac.is_locally_administered());
        assert!(!MacAddress::new(OCTETS).is_multicast());
    }
}
