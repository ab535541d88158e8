//! Locale Gateway
//!
//! Edge gateway in front of the news frontend. Every page request gets
//! exactly one locale and one routing action before it reaches the origin.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────────────┐
//!                       │                   LOCALE GATEWAY                     │
//!                       │                                                      │
//!   Client Request      │  ┌────────────┐   ┌─────────┐   ┌────────────────┐   │
//!   ────────────────────┼─▶│ request id │──▶│  trace  │──▶│     locale     │   │
//!                       │  │  + timeout │   │  span   │   │   middleware   │   │
//!                       │  └────────────┘   └─────────┘   └───┬────────┬───┘   │
//!                       │                                     │        │       │
//!                       │               301/302 + Location ◀──┘        ▼       │
//!   Client Response     │                                      ┌──────────────┐│
//!   ◀───────────────────┼──────────────────────────────────────│  forwarder   │┼──▶ Origin
//!                       │                                      └──────────────┘│
//!                       └──────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Locale-routing gateway for the news frontend.
#[derive(Parser)]
#[command(name = "locale-gateway", version)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    locale_gateway::lifecycle::start(cli.config.as_deref()).await?;
    Ok(())
}
