use clap::Parser;
use imgintern::encoder::{self, Encoder, MinimalEncoder};
use imgintern::{output, pack};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "imgintern")]
#[command(about = "Convert images into an importable Python/Tkinter module")]
#[command(long_about = "\
Convert images into an importable Python/Tkinter module

Each input file becomes an entry in the generated module, keyed by its bare
file name (folder names are not stored — keep file names unique). Import the
module and load images by name; the data ships inside the .py file, so
frozen executables need no separate asset files.

Usage from Python:

  import tkinter as tk
  from images import load_image
  root = tk.Tk()
  tk.Label(image=load_image('dawn.png')).pack()
  root.mainloop()

Or as a window icon:

  root.iconphoto(True, load_image('logo.png'))

Run the generated module directly (python images.py) for a minimal viewer
that displays any embedded image.

By default every image is decoded and re-encoded as PNG; --size WxH resizes
to exactly those pixel dimensions first (aspect ratio is NOT preserved).
With --raw the source bytes are embedded untouched — the files must already
be in a format Tkinter displays (GIF, or PNG on Tk 8.6+) and --size is
unavailable.")]
#[command(version = version_string())]
struct Cli {
    /// Image files to embed; each file name becomes a lookup key
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Generated Python module
    #[arg(long, short, default_value = "images.py")]
    output: PathBuf,

    /// Resize every image to exactly WIDTHxHEIGHT pixels before embedding
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    size: Option<(u32, u32)>,

    /// Embed source bytes verbatim, without decoding or normalizing
    #[arg(long)]
    raw: bool,

    /// Replace the output file if it already exists
    #[arg(long)]
    force: bool,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT (e.g. 64x64), got {s:?}"))?;
    let width = w
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("bad width {w:?}"))?;
    let height = h
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("bad height {h:?}"))?;
    if width == 0 || height == 0 {
        return Err("dimensions must be nonzero".to_string());
    }
    Ok((width, height))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let encoder: Box<dyn Encoder> = if cli.raw {
        Box::new(MinimalEncoder::new())
    } else {
        encoder::default_encoder()
    };

    let report = pack::pack(&cli.images, &cli.output, cli.size, cli.force, encoder.as_ref())?;
    output::print_pack_report(&report);

    Ok(())
}
