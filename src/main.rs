//! Tably - re-render markdown tables found in chat text.
//!
//! # Usage
//!
//! ```bash
//! tably message.txt
//! tably --style ascii message.txt
//! cat message.txt | tably --style cards --lang de
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tably::config::{RenderOptions, TableStyle};
use tably::pipeline;

/// Re-render markdown tables found in chat text
#[derive(Parser, Debug)]
#[command(name = "tably", version, about, long_about = None)]
struct Cli {
    /// Message text file to transform (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Table rendering style
    #[arg(long, value_enum, default_value = "unicode")]
    style: TableStyle,

    /// Do not list extracted links next to tables
    #[arg(long)]
    no_links: bool,

    /// Wrap listed link URLs in <...> to suppress chat previews
    #[arg(long)]
    no_previews: bool,

    /// Language code for the card usage hint
    #[arg(long, default_value = "en")]
    lang: String,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let text = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let opts = RenderOptions {
        style: cli.style,
        show_links: !cli.no_links,
        disable_link_previews: cli.no_previews,
        lang: cli.lang,
    };
    println!("{}", pipeline::rewrite(&text, &opts));
    Ok(())
}
