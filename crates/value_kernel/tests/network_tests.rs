//! Unit tests for the network address value objects

use value_kernel::{IpAddress, IpNetwork, MacAddress, NetworkError};

mod ip_address {
    use super::*;

    #[test]
    fn test_ipv6_text_is_compressed() {
        let addr: IpAddress = "2001:0db8:0000:0000:0000:0000:0000:0001".parse().unwrap();
        assert_eq!(addr.to_string(), "2001:db8::1");
        assert!(addr.is_ipv6());
    }

    #[test]
    fn test_ipv6_bytes() {
        let addr: IpAddress = "::1".parse().unwrap();
        let bytes = addr.to_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[15], 1);
        assert_eq!(IpAddress::from_bytes(&bytes).unwrap(), addr);
    }

    #[test]
    fn test_invalid_text() {
        assert_eq!(
            "256.0.0.1".parse::<IpAddress>(),
            Err(NetworkError::InvalidIpAddress("256.0.0.1".to_string()))
        );
    }

    #[test]
    fn test_ipv4_sorts_before_ipv6() {
        let v4: IpAddress = "255.255.255.255".parse().unwrap();
        let v6: IpAddress = "::".parse().unwrap();
        assert!(v4 < v6);
    }

    #[test]
    fn test_serializes_as_text() {
        let addr: IpAddress = "10.0.0.1".parse().unwrap();
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"10.0.0.1\"");
    }
}

mod ip_network {
    use super::*;

    #[test]
    fn test_host_route() {
        let net: IpNetwork = "10.0.0.1/32".parse().unwrap();
        assert!(net.contains(&"10.0.0.1".parse().unwrap()));
        assert!(!net.contains(&"10.0.0.2".parse().unwrap()));
    }

    #[test]
    fn test_ipv6_block() {
        let net: IpNetwork = "2001:db8::/32".parse().unwrap();
        assert!(net.contains(&"2001:db8:ffff::1".parse().unwrap()));
        assert!(!net.contains(&"2001:db9::1".parse().unwrap()));
        assert_eq!(net.prefix_len(), 32);
    }

    #[test]
    fn test_missing_prefix() {
        assert!(matches!(
            "10.0.0.0".parse::<IpNetwork>(),
            Err(NetworkError::InvalidNetwork(_))
        ));
    }

    #[test]
    fn test_ipv6_prefix_limit() {
        assert_eq!(
            "::/129".parse::<IpNetwork>(),
            Err(NetworkError::InvalidPrefix { prefix_len: 129, max: 128 })
        );
    }
}

mod mac_address {
    use super::*;

    #[test]
    fn test_bytes_round_trip() {
        let mac: MacAddress = "AA-BB-CC-DD-EE-FF".parse().unwrap();
        assert_eq!(MacAddress::from_bytes(&mac.octets()).unwrap(), mac);
        assert_eq!(mac.to_string(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_from_bytes_length() {
        assert_eq!(
            MacAddress::from_bytes(&[0; 8]),
            Err(NetworkError::InvalidLength { expected: "6", actual: 8 })
        );
    }

    #[test]
    fn test_group_count_is_checked() {
        assert!("00:1a:2b:3c:4d:5e".parse::<MacAddress>().is_ok());
        assert!("00:1a:2b:3c:4d:5e:6f".parse::<MacAddress>().is_err());
    }

    #[test]
    fn test_one_separator_per_address() {
        assert_eq!(
            "00:1a-2b:3c-4d:5e".parse::<MacAddress>(),
            Err(NetworkError::InvalidMacAddress("00:1a-2b:3c-4d:5e".to_string()))
        );
        assert!("00-1a-2b-3c-4d-5e".parse::<MacAddress>().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let mac: MacAddress = "001a.2b3c.4d5e".parse().unwrap();
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(json, "\"00:1a:2b:3c:4d:5e\"");
        assert_eq!(serde_json::from_str::<MacAddress>(&json).unwrap(), mac);
    }
}
