// src/discovery/seed_peers.rs
use async_trait::async_trait;
use std::iter::FusedIterator;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, trace};

use super::{DiscoveryError, PeerDiscovery};
use crate::chainparams::ChainParams;
use crate::seeds::SeedAddress;

/// Hardcoded seed nodes, used as a last resort when DNS and gossip come up
/// empty.
///
/// Acts as a cursor over the seed table: each call to
/// [`next_peer_addr`](Self::next_peer_addr) hands out the next entry and,
/// once the table is used up, keeps returning `None`. The cursor never
/// rewinds. [`all_peer_addrs`](Self::all_peer_addrs) ignores the cursor.
#[derive(Debug, Clone)]
pub struct SeedPeers {
    table: &'static [SeedAddress],
    port: u16,
    cursor: usize,
}

impl SeedPeers {
    pub fn new(params: &ChainParams) -> Self {
        Self::with_table(params.seeds, params.default_port)
    }

    pub fn with_table(table: &'static [SeedAddress], port: u16) -> Self {
        debug!(target: "discovery::seed", seeds = table.len(), port, "seed peer source created");
        Self {
            table,
            port,
            cursor: 0,
        }
    }

    /// Size of the whole seed table, consumed or not
    pub fn seed_count(&self) -> usize {
        self.table.len()
    }

    /// Number of entries handed out so far
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.table.len().saturating_sub(self.cursor)
    }

    /// Next seed address, or `None` once every entry has been handed out.
    pub fn next_peer_addr(&mut self) -> Option<SocketAddr> {
        let seed = *self.table.get(self.cursor)?;
        self.cursor += 1;

        let addr = seed.to_socket_addr(self.port);
        trace!(target: "discovery::seed", %seed, %addr, index = self.cursor - 1, "seed peer");
        if self.cursor == self.table.len() {
            debug!(target: "discovery::seed", "seed list exhausted");
        }
        Some(addr)
    }

    /// Every seed address in table order.
    pub fn all_peer_addrs(&self) -> Vec<SocketAddr> {
        self.table
            .iter()
            .map(|seed| seed.to_socket_addr(self.port))
            .collect()
    }
}

#[async_trait]
impl PeerDiscovery for SeedPeers {
    async fn next_peer(&mut self) -> Result<Option<SocketAddr>, DiscoveryError> {
        Ok(self.next_peer_addr())
    }

    /// Decoding is in-memory, so the timeout never comes into play.
    async fn peers(&self, _timeout: Duration) -> Result<Vec<SocketAddr>, DiscoveryError> {
        Ok(self.all_peer_addrs())
    }

    fn shutdown(&self) {
        debug!(target: "discovery::seed", handed_out = self.cursor, "seed peer source shut down");
    }
}

impl Iterator for SeedPeers {
    type Item = SocketAddr;

    fn next(&mut self) -> Option<SocketAddr> {
        self.next_peer_addr()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for SeedPeers {}

impl FusedIterator for SeedPeers {}
