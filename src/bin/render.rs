//! Spot Renderer Binary
//!
//! Reads a JSON spot description and writes a PNG of the table.
//!
//! Options: --input, --card1, --card2, --output, --scale, --assets

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tableviz::cards::Card;
use tableviz::draw::TableRenderer;
use tableviz::state::GameState;

#[derive(Parser)]
#[command(about = "render a poker table image from a spot description")]
struct Args {
    /// JSON spot file, wrapped in a "game" envelope
    #[arg(long)]
    input: PathBuf,
    /// hero's first hole card, e.g. As
    #[arg(long)]
    card1: Option<String>,
    /// hero's second hole card, e.g. Kd
    #[arg(long)]
    card2: Option<String>,
    /// output PNG path
    #[arg(long, default_value = "table.png")]
    output: PathBuf,
    /// supersampling factor
    #[arg(long, default_value_t = 2)]
    scale: u32,
    /// asset directory (cards-images/, fonts/, avatar.png, logo.png)
    #[arg(long)]
    assets: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tableviz::log();
    let args = Args::parse();
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let game = GameState::from_json(&text).context("parsing spot description")?;
    let hole = match (args.card1.as_deref(), args.card2.as_deref()) {
        (Some(a), Some(b)) => Some((Card::try_from(a)?, Card::try_from(b)?)),
        (None, None) => None,
        _ => anyhow::bail!("provide both hole cards or neither"),
    };
    let mut renderer = TableRenderer::new(args.scale, args.assets);
    renderer.render_to_path(&game, hole, &args.output)?;
    log::info!("{:<32}{:<32}", "saved", args.output.display());
    Ok(())
}
