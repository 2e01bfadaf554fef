use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// IPv4 address packed into a `u32`, least-significant byte first.
///
/// Byte 0 (bits 0-7) becomes the first octet, byte 3 (bits 24-31) the last,
/// so `0x4774c836` is `54.200.116.71`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedAddress(u32);

impl SeedAddress {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn octets(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    pub fn to_ipv4(self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets())
    }

    /// Combine with the network port into a connection target.
    pub fn to_socket_addr(self, port: u16) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.to_ipv4(), port))
    }
}

impl fmt::Display for SeedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum AddressDecodeError {
    #[error("seed address must be 4 bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex seed address: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid seed address {value:?}: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Four bytes in storage order (index 0 = first octet).
impl TryFrom<&[u8]> for SeedAddress {
    type Error = AddressDecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let le: [u8; 4] = bytes
            .try_into()
            .map_err(|_| AddressDecodeError::InvalidLength(bytes.len()))?;
        Ok(Self(u32::from_le_bytes(le)))
    }
}

/// Accepts the table's own notation (`0x4774c836`) or a plain decimal `u32`.
impl FromStr for SeedAddress {
    type Err = AddressDecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            let be = hex::decode(digits)?;
            let be: [u8; 4] = be
                .as_slice()
                .try_into()
                .map_err(|_| AddressDecodeError::InvalidLength(be.len()))?;
            return Ok(Self(u32::from_be_bytes(be)));
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|source| AddressDecodeError::InvalidNumber {
                value: s.to_string(),
                source,
            })
    }
}

const fn s(raw: u32) -> SeedAddress {
    SeedAddress::new(raw)
}

/// Long-lived mainnet nodes, kept in the order they were collected.
/// Entries are historical data; do not sort or deduplicate.
pub static SEED_ADDRS: &[SeedAddress] = &[
    s(0x4774c836), s(0x082b20b4), s(0x156b91b4), s(0x86cb079d), s(0xde257899), s(0x48037899), s(0x5d33f285), s(0xe132f285),
    s(0x7e17f285), s(0xf713f285), s(0x0d56ed80), s(0x11217b7e), s(0x6e90767e), s(0xf690367d), s(0xb905357d), s(0xcd4f297c),
    s(0x29616f79), s(0xd3a13f77), s(0x50cef176), s(0x20c39a76), s(0x7b0d6c75), s(0x668c1e73), s(0xf6409a71), s(0xbeb5e96f),
    s(0x1088153d), s(0x03517b3d), s(0xfd35263c), s(0x595ff131), s(0x4854d431), s(0x3df85edb), s(0xddf85edb), s(0x59eb5edb),
    s(0x1b496adb), s(0x61ff83d3), s(0x529cb0b7), s(0xc9dcaab6), s(0x0874553b), s(0x8693507e), s(0xfc23547c), s(0xdb7d1176),
    s(0x82d696de), s(0x41f0aa99), s(0xa5c0a099), s(0x6945f9c0), s(0x290af285), s(0x6aabd13d), s(0xe9deee3c), s(0xd00b8a3a),
    s(0x33c7a799), s(0x412b7999), s(0x12351e7d), s(0x114c007b), s(0x82f31276), s(0xc55b1176), s(0x37094a75), s(0x8aa43a74),
    s(0xa1feaa72),
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_byte_order() {
        let seed = SeedAddress::new(0x4774c836);
        assert_eq!(seed.octets(), [0x36, 0xc8, 0x74, 0x47]);
        assert_eq!(seed.to_ipv4(), Ipv4Addr::new(54, 200, 116, 71));
        assert_eq!(
            seed.to_socket_addr(9401),
            "54.200.116.71:9401".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(SEED_ADDRS.len(), 57);
        assert_eq!(SEED_ADDRS[0].raw(), 0x4774c836);
        assert_eq!(SEED_ADDRS[56].raw(), 0xa1feaa72);
    }

    #[test]
    fn test_table_decode_is_deterministic() {
        for seed in SEED_ADDRS {
            assert_eq!(seed.to_ipv4(), seed.to_ipv4());
            assert_eq!(seed.to_ipv4().octets(), seed.octets());
        }
    }

    #[test]
    fn test_parse_table_notation() {
        let seed: SeedAddress = "0x4774c836".parse().unwrap();
        assert_eq!(seed, SEED_ADDRS[0]);
        assert_eq!(seed.to_string(), "0x4774c836");

        let seed: SeedAddress = "0X082B20B4".parse().unwrap();
        assert_eq!(seed.raw(), 0x082b20b4);

        let seed: SeedAddress = "1198835766".parse().unwrap();
        assert_eq!(seed.raw(), 0x4774c836);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "0x4774c8".parse::<SeedAddress>(),
            Err(AddressDecodeError::InvalidLength(3))
        ));
        assert!(matches!(
            "0x4774c83z".parse::<SeedAddress>(),
            Err(AddressDecodeError::InvalidHex(_))
        ));
        assert!(matches!(
            "54.200.116.71".parse::<SeedAddress>(),
            Err(AddressDecodeError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_try_from_bytes() {
        let seed = SeedAddress::try_from(&[0x36u8, 0xc8, 0x74, 0x47][..]).unwrap();
        assert_eq!(seed.raw(), 0x4774c836);

        let err = SeedAddress::try_from(&[1u8, 2, 3][..]).unwrap_err();
        assert!(matches!(err, AddressDecodeError::InvalidLength(3)));
    }

    proptest! {
        #[test]
        fn prop_decode_matches_le_bytes(raw in any::<u32>()) {
            let seed = SeedAddress::new(raw);
            let ip = seed.to_ipv4();
            prop_assert_eq!(ip, seed.to_ipv4());
            prop_assert_eq!(ip.octets()[0], (raw & 0xff) as u8);
            prop_assert_eq!(ip.octets()[1], ((raw >> 8) & 0xff) as u8);
            prop_assert_eq!(ip.octets()[2], ((raw >> 16) & 0xff) as u8);
            prop_assert_eq!(ip.octets()[3], (raw >> 24) as u8);
        }

        #[test]
        fn prop_display_parses_back(raw in any::<u32>()) {
            let seed = SeedAddress::new(raw);
            let parsed: SeedAddress = seed.to_string().parse().unwrap();
            prop_assert_eq!(parsed, seed);
        }
    }
}
