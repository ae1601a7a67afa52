use clap::Parser;

/// Emit the tiled clipping figure as SVG on stdout
#[derive(Parser, Debug)]
#[command(name = "clip-tiles")]
#[command(version)]
#[command(about = "Write clip_tiles.svg for the clipping post to stdout", long_about = None)]
struct Args {}

fn main() -> Result<(), String> {
    let _args = Args::parse();

    clip_figures::clip_tile_fig().map_err(|e| format!("Failed to write SVG: {}", e))
}
