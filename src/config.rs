// src/config.rs
use anyhow::{Context, Result};
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::chainparams::{ChainParams, Network};

/// Environment prefix, e.g. `SEED_PEERS_CHAIN=testnet`, `SEED_PEERS_LOG__JSON=true`
pub const ENV_PREFIX: &str = "SEED_PEERS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub chain: Network,

    /// Overrides the network's default port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,
    pub json: bool,
    /// Also write logs to `<dir>/seed-peers.log`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
            dir: None,
        }
    }
}

impl Settings {
    /// Defaults, then the TOML file (if given), then `SEED_PEERS_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, None)
    }

    fn load_from(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        builder
            .build()
            .and_then(|c| c.try_deserialize::<Settings>())
            .with_context(|| match path {
                Some(p) => format!("failed to load settings from {}", p.display()),
                None => "failed to load settings".to_string(),
            })
    }

    pub fn chain_params(&self) -> ChainParams {
        let params = ChainParams::for_network(self.chain);
        match self.port {
            Some(port) => params.with_port(port),
            None => params,
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to render settings")
    }
}
