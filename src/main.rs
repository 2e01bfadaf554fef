use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::{
    io::Write,
    net::SocketAddr,
    path::PathBuf,
    time::Duration,
};
use tracing::info;

use seed_peers::{
    config::Settings, logging, DiscoveryError, Network, PeerDiscovery, SeedAddress, SeedPeers,
};

/// Last line of `next` text output once the seed list is used up
const EXHAUSTED_MARKER: &str = "# no more seed peers";

#[derive(Parser, Debug, Clone)]
#[command(name = "seed-peers", version, about = "Hardcoded seed nodes for network bootstrap")]
struct Args {
    /// TOML settings file
    #[arg(long, env = "SEED_PEERS_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// chain: mainnet/testnet/regtest
    #[arg(long, value_enum, ignore_case = true)]
    chain: Option<Network>,

    /// override the network's default port
    #[arg(long)]
    port: Option<u16>,

    /// machine-readable output
    #[arg(long)]
    json: bool,

    /// JSON log lines on stderr
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print every seed peer in table order
    List,
    /// Pull peers one at a time, the way bootstrap does
    Next {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Decode table values such as 0x4774c836
    Decode {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Print the effective settings
    Config,
}

fn write_addrs(out: &mut dyn Write, addrs: &[SocketAddr]) -> Result<()> {
    for addr in addrs {
        writeln!(out, "{addr}")?;
    }
    Ok(())
}

/// Run one subcommand against `source`, writing results to `out`.
async fn dispatch(
    command: &Command,
    as_json: bool,
    settings: &Settings,
    source: &mut SeedPeers,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::List => {
            let peers = source
                .peers(Duration::ZERO)
                .await
                .context("seed discovery failed")?;
            if as_json {
                writeln!(out, "{}", serde_json::to_string_pretty(&json!({ "peers": peers }))?)?;
            } else {
                write_addrs(out, &peers)?;
            }
        }
        Command::Next { count } => {
            let mut peers = Vec::with_capacity(*count);
            while peers.len() < *count {
                match source.next_peer().await.context("seed discovery failed")? {
                    Some(addr) => peers.push(addr),
                    None => break,
                }
            }
            let exhausted = source.remaining() == 0;
            if as_json {
                let body = json!({ "peers": peers, "exhausted": exhausted });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                write_addrs(out, &peers)?;
                if exhausted {
                    writeln!(out, "{EXHAUSTED_MARKER}")?;
                }
            }
            if exhausted {
                info!(returned = peers.len(), "no more seed peers");
            }
        }
        Command::Decode { values } => {
            let mut decoded = Vec::with_capacity(values.len());
            for v in values {
                let seed: SeedAddress = v
                    .parse()
                    .map_err(DiscoveryError::from)
                    .with_context(|| format!("cannot decode {v:?}"))?;
                decoded.push((seed, seed.to_ipv4()));
            }
            if as_json {
                let rows: Vec<_> = decoded
                    .iter()
                    .map(|(seed, ip)| json!({ "seed": seed.to_string(), "ip": ip }))
                    .collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                for (seed, ip) in decoded {
                    writeln!(out, "{seed} {ip}")?;
                }
            }
        }
        Command::Config => {
            write!(out, "{}", settings.to_toml()?)?;
        }
    }
    Ok(())
}

/// The source is shut down whether or not the command succeeds.
async fn run(args: &Args, settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let params = settings.chain_params();
    info!(
        network = %params.network,
        port = params.default_port,
        seeds = params.seeds.len(),
        "seed discovery ready"
    );

    let mut source = SeedPeers::new(&params);
    let res = dispatch(&args.command, args.json, settings, &mut source, out).await;
    source.shutdown();
    res
}

fn apply_overrides(args: &Args, settings: &mut Settings) {
    if let Some(chain) = args.chain {
        settings.chain = chain;
    }
    if args.port.is_some() {
        settings.port = args.port;
    }
    if args.log_json {
        settings.log.json = true;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    apply_overrides(&args, &mut settings);

    let _guard = logging::init(&settings.log)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &settings, &mut out).await?;
    out.flush()?;
    Ok(())
}
