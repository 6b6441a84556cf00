use std::net::{SocketAddr, TcpStream};

use anyhow::Result;
use btc_p2p_wire::{
    GetDataPayload, Network, Session, SessionConfig, DEFAULT_READ_BUFFER_SIZE,
    DEFAULT_USER_AGENT, PROTOCOL_VERSION,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Connects to a Bitcoin node, performs the version/verack handshake and
/// asks it for transactions by id.
#[derive(Parser, Debug)]
#[command(name = "btc-getdata", version)]
struct Cli {
    /// Peer to connect to, e.g. 82.64.194.26:8333
    #[arg(long)]
    peer: SocketAddr,

    /// Transaction ids in their usual (big-endian) hex form
    #[arg(long = "txid", required = true)]
    tx_ids: Vec<String>,

    /// mainnet, testnet, regtest, signet, or the 0x-prefixed magic of one of them
    #[arg(long, default_value_t = Network::MainNet)]
    network: Network,

    /// User agent text, sent as /<text>/
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    #[arg(long, default_value_t = PROTOCOL_VERSION)]
    protocol_version: i32,

    #[arg(long, default_value_t = 0)]
    start_height: i32,

    /// Upper bound on bytes read per response
    #[arg(long, default_value_t = DEFAULT_READ_BUFFER_SIZE)]
    buffer_size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    // fail on bad ids before touching the network
    let getdata = GetDataPayload::transactions(&cli.tx_ids)?;

    tracing::info!("Connecting to {}", cli.peer);
    let stream = TcpStream::connect(cli.peer)?;

    let config = SessionConfig::default()
        .with_network(cli.network)
        .with_protocol_version(cli.protocol_version)
        .with_local_addr(stream.local_addr()?)
        .with_remote_addr(cli.peer)
        .with_user_agent(cli.user_agent)
        .with_start_height(cli.start_height)
        .with_read_buffer_size(cli.buffer_size);

    let mut session = Session::new(stream, config);
    let exchanges = session.run(getdata, &mut rand::thread_rng())?;

    for exchange in exchanges {
        println!("Command: {}", exchange.command);
        println!("Request: {}", hex::encode(&exchange.request));
        println!("Response: {}", hex::encode(&exchange.response));
    }

    Ok(())
}
