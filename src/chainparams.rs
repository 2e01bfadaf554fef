//! Per-network parameters consumed by peer discovery.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::seeds::{SeedAddress, SEED_ADDRS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    #[serde(alias = "main")]
    #[value(alias = "main")]
    Mainnet,
    #[serde(alias = "test")]
    #[value(alias = "test")]
    Testnet,
    Regtest,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        })
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Mainnet),
            "test" | "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

/// Chain parameters for bootstrap
#[derive(Debug, Clone, Copy)]
pub struct ChainParams {
    pub network: Network,

    /// Port peers listen on by default; every seed address is dialed on it
    pub default_port: u16,

    /// Hardcoded last-resort nodes, shared by every provider
    pub seeds: &'static [SeedAddress],
}

impl ChainParams {
    /// Get chain parameters for a given network
    pub fn for_network(net: Network) -> Self {
        match net {
            Network::Mainnet => Self::mainnet(),
            Network::Testnet => Self::testnet(),
            Network::Regtest => Self::regtest(),
        }
    }

    fn mainnet() -> Self {
        Self {
            network: Network::Mainnet,
            default_port: 9401,
            seeds: SEED_ADDRS,
        }
    }

    /// Testnet has no long-lived nodes worth hardcoding
    fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            default_port: 19403,
            seeds: &[],
        }
    }

    fn regtest() -> Self {
        Self {
            network: Network::Regtest,
            default_port: 20444,
            seeds: &[],
        }
    }

    /// Same network and seeds, different listening port
    pub fn with_port(mut self, port: u16) -> Self {
        self.default_port = port;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_params() {
        let params = ChainParams::for_network(Network::Mainnet);
        assert_eq!(params.default_port, 9401);
        assert_eq!(params.seeds.len(), SEED_ADDRS.len());
        assert!(std::ptr::eq(params.seeds, SEED_ADDRS));
    }

    #[test]
    fn test_test_networks_have_no_seeds() {
        assert!(ChainParams::for_network(Network::Testnet).seeds.is_empty());
        assert!(ChainParams::for_network(Network::Regtest).seeds.is_empty());
    }

    #[test]
    fn test_port_override() {
        let params = ChainParams::for_network(Network::Mainnet).with_port(12345);
        assert_eq!(params.default_port, 12345);
        assert_eq!(params.network, Network::Mainnet);
    }

    #[test]
    fn test_network_parse() {
        assert_eq!("main".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("TestNet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("regtest".parse::<Network>().unwrap(), Network::Regtest);
        assert!("signet".parse::<Network>().is_err());
        assert_eq!(Network::Testnet.to_string(), "testnet");
    }
}
