//! Last-resort peer discovery from a hardcoded table of long-lived nodes.
//!
//! [`SeedPeers`] is one [`PeerDiscovery`] source among several (DNS seeds,
//! gossip); bootstrap falls back to it when the others come up empty.

pub mod chainparams; // Per-network port and seed table
pub mod config;      // Settings from file + environment
pub mod discovery;   // Discovery contract and the seed source
pub mod logging;     // tracing subscriber setup
pub mod seeds;       // Seed address encoding and table

pub use chainparams::{ChainParams, Network};
pub use discovery::{DiscoveryError, PeerDiscovery, SeedPeers};
pub use seeds::{AddressDecodeError, SeedAddress, SEED_ADDRS};
