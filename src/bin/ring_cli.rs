// Binary to place keys on a slotring hash ring from the command line

use slotring::{HashRing, RingConfig};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: slotring-cli [--slots N] <node,node,...> <key> [key...]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut config = RingConfig::default();
    if args.first().map(String::as_str) == Some("--slots") {
        if args.len() < 2 {
            return Err(USAGE.into());
        }
        config.slot_space_size = args[1].parse::<u64>()?;
        args.drain(..2);
    }

    if args.len() < 2 {
        return Err(USAGE.into());
    }

    let ring = HashRing::with_config(config)?;
    for node in args[0].split(',').filter(|n| !n.is_empty()) {
        ring.add_node(node)?;
    }
    info!(
        nodes = ring.len(),
        slots = ring.slot_space_size(),
        "ring ready"
    );

    for key in &args[1..] {
        let owner = ring.get_node(key)?;
        println!("{} -> {} (slot {})", key, owner, ring.slot_for(key));
    }

    Ok(())
}
