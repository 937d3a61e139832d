//! Sprite dump CLI
//!
//! The external collaborator sketched by the decoder's specification: a
//! thin wrapper around [`gbsprite_rs::decode`] that knows about paths,
//! seek offsets, and image rendering so the core crate does not have to.
//!
//! # Usage
//!
//! ```bash
//! # Dump the raw 784-byte positioned bit planes
//! cargo run --example sprite_dump -- rom.gb --offset 0x12345 sprite.2bpp
//!
//! # Render the decoded sprite as a greyscale PNG, overriding the
//! # Pokedex-declared size used for positioning
//! cargo run --example sprite_dump -- rom.gb --offset 0x12345 --size 7x7 sprite.png
//! ```

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gbsprite_rs::{DecodedSprite, decode};
use image::GrayImage;
use log::{error, info};

/// Tiles per side of the fixed output frame the decoder positions into.
const FRAME_TILES: u32 = 7;

#[derive(Parser)]
#[command(name = "sprite_dump")]
#[command(author = "gbsprite-rs project")]
#[command(version)]
#[command(about = "Decode a Generation I Pokemon sprite from a ROM dump", long_about = None)]
struct Cli {
	/// Path to the ROM (or any file) containing the compressed sprite.
	input: PathBuf,

	/// Output path. A `.png` extension renders a greyscale image;
	/// anything else gets the raw 784-byte positioned bit planes.
	output: PathBuf,

	/// Byte offset into `input` where the compressed stream begins.
	#[arg(short, long, default_value_t = 0, value_parser = parse_offset)]
	offset: u64,

	/// Declared sprite size override, e.g. `7x7` (the Pokedex size).
	/// Only affects final positioning, never how many bits are read.
	#[arg(short, long, value_parser = parse_size)]
	size: Option<(u32, u32)>,
}

fn parse_offset(raw: &str) -> Result<u64, String> {
	if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
		u64::from_str_radix(hex, 16).map_err(|err| err.to_string())
	} else {
		raw.parse().map_err(|err: std::num::ParseIntError| err.to_string())
	}
}

fn parse_size(raw: &str) -> Result<(u32, u32), String> {
	let (w, h) = raw.split_once('x').ok_or_else(|| format!("expected WxH, got '{raw}'"))?;
	let w: u32 = w.parse().map_err(|_| format!("invalid width in '{raw}'"))?;
	let h: u32 = h.parse().map_err(|_| format!("invalid height in '{raw}'"))?;
	Ok((w, h))
}

fn main() -> ExitCode {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
	let cli = Cli::parse();

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{err}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	let mut file = File::open(&cli.input)?;
	file.seek(SeekFrom::Start(cli.offset))?;

	info!("decoding sprite from {} at offset {}", cli.input.display(), cli.offset);
	let sprite = decode(file, cli.size)?;
	info!("decoded {}x{} tiles", sprite.width(), sprite.height());

	if matches!(cli.output.extension().and_then(|ext| ext.to_str()), Some("png" | "PNG")) {
		render_png(&sprite)?.save(&cli.output)?;
	} else {
		std::fs::write(&cli.output, sprite.into_bytes())?;
	}

	info!("wrote {}", cli.output.display());
	Ok(())
}

/// Renders the decoded sprite's two bit planes to a greyscale image using
/// the pixel mapping `low_bit*85 + high_bit*170` over the fixed 7x7-tile
/// output frame.
fn render_png(sprite: &DecodedSprite) -> anyhow::Result<GrayImage> {
	let side = FRAME_TILES * 8;
	let mut img = GrayImage::new(side, side);

	let plane0 = sprite.plane0();
	let plane1 = sprite.plane1();

	for tile_col in 0..FRAME_TILES {
		for tile_row in 0..FRAME_TILES {
			let byte_idx = (tile_col * FRAME_TILES * 8 + tile_row * 8) as usize;
			for row in 0..8u32 {
				let low_byte = plane0[byte_idx + row as usize];
				let high_byte = plane1[byte_idx + row as usize];
				for bit in 0..8u32 {
					let low = (low_byte >> (7 - bit)) & 1;
					let high = (high_byte >> (7 - bit)) & 1;
					let value = low * 85 + high * 170;
					let x = tile_col * 8 + bit;
					let y = tile_row * 8 + row;
					img.put_pixel(x, y, image::Luma([value]));
				}
			}
		}
	}

	Ok(img)
}
