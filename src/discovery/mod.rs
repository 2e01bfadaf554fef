// src/discovery/mod.rs
pub mod seed_peers;

pub use seed_peers::SeedPeers;

use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

use crate::seeds::AddressDecodeError;

/// Failure of a discovery source. Bootstrap treats it as non-fatal and
/// moves on to the next source.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to decode peer address")]
    Decode(#[from] AddressDecodeError),
}

/// A source of candidate peer addresses for bootstrap.
///
/// Running out of addresses is not an error: `next_peer` returns `Ok(None)`
/// and `peers` returns an empty list, so callers can tell "try another
/// source" apart from "this source is broken".
#[async_trait]
pub trait PeerDiscovery: Send + Sync {
    /// Pull the next candidate, advancing the source's cursor.
    async fn next_peer(&mut self) -> Result<Option<SocketAddr>, DiscoveryError>;

    /// Every address the source knows, in its natural order. Sources that
    /// resolve over the network bound the lookup by `timeout`.
    async fn peers(&self, timeout: Duration) -> Result<Vec<SocketAddr>, DiscoveryError>;

    /// Release whatever the source holds. Safe to call more than once.
    fn shutdown(&self);
}
