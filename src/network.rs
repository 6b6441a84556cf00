use std::{fmt, str::FromStr};

use super::errors::{BTCWireError, Result};

/// Represents the network to which a message belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    /// Mainnet
    /// Default Port 8333
    #[default]
    MainNet,

    /// Testnet
    /// Default Port 18333
    TestNet,

    /// Regtest
    /// Default Port 18444
    RegTest,

    /// Default signet
    /// Default Port 38333
    SigNet,
}

impl Network {
    /// The magic value as a number; it goes on the wire little-endian.
    pub fn magic(self) -> u32 {
        match self {
            Network::MainNet => 0xd9b4bef9,
            Network::TestNet => 0x0709110b,
            Network::RegTest => 0xdab5bffa,
            Network::SigNet => 0x40cf030a,
        }
    }

    pub fn from_magic(magic: u32) -> Result<Self> {
        match magic {
            0xd9b4bef9 => Ok(Self::MainNet),
            0x0709110b => Ok(Self::TestNet),
            0xdab5bffa => Ok(Self::RegTest),
            0x40cf030a => Ok(Self::SigNet),
            _ => Err(BTCWireError::UnknownNetwork(magic)),
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Network::MainNet => 8333,
            Network::TestNet => 18333,
            Network::RegTest => 18444,
            Network::SigNet => 38333,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Network::MainNet => "mainnet",
            Network::TestNet => "testnet",
            Network::RegTest => "regtest",
            Network::SigNet => "signet",
        })
    }
}

impl FromStr for Network {
    type Err = BTCWireError;

    /// Accepts a network name or the hex magic of one of the known networks.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::MainNet),
            "testnet" | "test" => Ok(Self::TestNet),
            "regtest" => Ok(Self::RegTest),
            "signet" => Ok(Self::SigNet),
            name => match name.strip_prefix("0x") {
                Some(digits) => match u32::from_str_radix(digits, 16) {
                    Ok(magic) => Self::from_magic(magic),
                    Err(_) => Err(BTCWireError::UnknownNetworkName(s.to_string())),
                },
                None => Err(BTCWireError::UnknownNetworkName(s.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, TestResult};
    use quickcheck_macros::quickcheck;

    impl Arbitrary for Network {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            match u8::arbitrary(g) % 4 {
                0 => Self::MainNet,
                1 => Self::TestNet,
                2 => Self::RegTest,
                3 => Self::SigNet,
                _ => unreachable!(),
            }
        }
    }

    #[quickcheck]
    fn test_magic(network: Network) -> TestResult {
        let network2 = Network::from_magic(network.magic()).unwrap();
        TestResult::from_bool(network == network2)
    }

    #[quickcheck]
    fn test_display_parses_back(network: Network) -> bool {
        network.to_string().parse::<Network>().unwrap() == network
    }

    #[test]
    fn test_magic_wire_order() {
        assert_eq!(
            Network::MainNet.magic().to_le_bytes(),
            [0xf9, 0xbe, 0xb4, 0xd9]
        );
        assert_eq!(
            Network::TestNet.magic().to_le_bytes(),
            [0x0b, 0x11, 0x09, 0x07]
        );
        assert_eq!(
            Network::RegTest.magic().to_le_bytes(),
            [0xfa, 0xbf, 0xb5, 0xda]
        );
        assert_eq!(
            Network::SigNet.magic().to_le_bytes(),
            [0x0a, 0x03, 0xcf, 0x40]
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("MainNet".parse::<Network>().unwrap(), Network::MainNet);
        assert_eq!("0xd9b4bef9".parse::<Network>().unwrap(), Network::MainNet);
        assert_eq!("signet".parse::<Network>().unwrap(), Network::SigNet);
        assert_eq!("0x40cf030a".parse::<Network>().unwrap(), Network::SigNet);
        assert!(matches!(
            "0xdeadbeef".parse::<Network>(),
            Err(BTCWireError::UnknownNetwork(0xdeadbeef))
        ));
        assert!(matches!(
            "moonnet".parse::<Network>(),
            Err(BTCWireError::UnknownNetworkName(name)) if name == "moonnet"
        ));
        // bare hex without the prefix is not a magic
        assert!(matches!(
            "d9b4bef9".parse::<Network>(),
            Err(BTCWireError::UnknownNetworkName(_))
        ));
    }
}
