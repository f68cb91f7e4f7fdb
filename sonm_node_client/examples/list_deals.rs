//! List the deals a fixed address takes part in, talking to a locally
//! running node over its management Unix socket.
//!
//! Run a node first, then:
//!
//! ```text
//! cargo run -p sonm_node_client --example list_deals
//! ```

use sonm_node_client::{
    connection::Builder,
    deals::{generated_types::DealStatus, Client},
};

/// Socket the node serves its management API on.
const NODE_SOCKET: &str = "/tmp/sonm_node.sock";

/// Address whose deals to list.
const OWNER: &str = "0x8125721c2413d99a33e351e1f6bb4e56b1b633ab";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let connection = Builder::default().build_unix(NODE_SOCKET).await?;
    let mut client = Client::new(connection);

    let deals = client.list(OWNER, DealStatus::AnyStatus).await?;
    println!("{deals:#?}");

    Ok(())
}
