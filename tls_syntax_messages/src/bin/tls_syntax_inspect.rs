use anyhow::{Context, Result};
use std::env;
use std::io::{self, Read};
use tls_syntax_messages::{config::InspectConfig, inspect};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = InspectConfig::from_env()?;

    let input = match env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    let hex_str = input.split_whitespace().collect::<String>();
    let buf = hex::decode(&hex_str).context("Input is not hex.")?;
    info!(kind = ?cfg.message, strict = cfg.strict, len = buf.len(), "Inspecting.");

    let insp = inspect::inspect(cfg.message, &buf, cfg.strict)?;
    println!("{}", insp.pretty);
    println!("consumed {} of {} bytes", insp.r_len, buf.len());
    println!(
        "re-encoding is {}",
        if insp.canonical { "identical" } else { "different" }
    );

    Ok(())
}
