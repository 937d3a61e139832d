//! Decoder for the Generation I Pokemon Game Boy sprite compression
//! format: a bit-packed, run-length and delta-coded representation of a
//! two-bit-plane tile bitmap, reproducing the original cartridge
//! routine's center-bottom repositioning byte-for-byte, glitches
//! included.

mod bitreader;
mod plane;
mod position;
mod rle;
mod transform;

use std::io::Read;

use log::{debug, info};

use crate::file::PicError;

use bitreader::BitReader;
use plane::decode_plane;
use position::position;
use rle::RleStream;
use transform::{Mode, delta_decode, read_mode, xor_planes};

/// Size in bytes of one nominal 7x7-tile staging slot.
const SLOT_SIZE: usize = 392;

/// A decoded, center-bottom-positioned sprite.
///
/// Bytes `0..392` carry bit plane 0; bytes `392..784` carry bit plane 1,
/// both in the Game Boy's native column-major tile layout.
#[derive(Debug, Clone)]
pub struct DecodedSprite {
	buffer: Vec<u8>,
	width: u32,
	height: u32,
}

impl DecodedSprite {
	/// Bit plane 0, in sprite-framed position.
	pub fn plane0(&self) -> &[u8] {
		&self.buffer[0..SLOT_SIZE]
	}

	/// Bit plane 1, in sprite-framed position.
	pub fn plane1(&self) -> &[u8] {
		&self.buffer[SLOT_SIZE..SLOT_SIZE * 2]
	}

	/// Width, in tiles, used for the positioner cascade (the declared
	/// size, if one was supplied; otherwise the header-declared size).
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Height, in tiles, used for the positioner cascade.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Consumes `self`, returning the concatenated 784-byte plane buffer.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buffer
	}
}

/// Decodes a compressed sprite stream into its two positioned bit planes.
///
/// `declared_size` is the caller-supplied Pokedex-size override `(W, H)`
/// in tiles; when absent, the header-declared size is used both for
/// bitstream geometry and for final positioning. It never changes how
/// many bits are consumed from `reader`.
///
/// The only failures this can surface are I/O failure reading `reader`
/// and allocation failure sizing the staging buffer; malformed sprite
/// data decodes to *something*, by design.
pub fn decode<R: Read>(mut reader: R, declared_size: Option<(u32, u32)>) -> Result<DecodedSprite, PicError> {
	// Surface a deferred read error from the header nibbles immediately,
	// since BitReader itself never fails.
	let mut probe = [0u8; 1];
	if let Err(err) = reader.read_exact(&mut probe) {
		if err.kind() != std::io::ErrorKind::UnexpectedEof {
			return Err(PicError::Io(err));
		}
	}
	let reader = std::io::Cursor::new(probe).chain(reader);

	let mut bits = BitReader::new(reader);

	let width = bits.read(4);
	let height = bits.read(4);
	debug!("sprite header declared {width}x{height} tiles");

	let (decl_width, decl_height) = declared_size.unwrap_or((width, height));

	let tile_budget = 49u64
		.max(u64::from(width) * u64::from(height))
		.max(u64::from(decl_width) * u64::from(decl_height));
	let staging_len = 2 * SLOT_SIZE as u64 + 8 * tile_budget;

	// The spec's own formula sizes the staging buffer from the tile
	// *product*, but the Positioner's destination reach (offset plus
	// `(decl_width - 1) * 56 + decl_height * 8`) grows linearly in each
	// dimension independently. For a lopsided declared size — reachable
	// straight from the 4-bit header fields, no external override needed,
	// e.g. W=15, H=1 — the product-based budget underestimates that reach
	// and the cascade's copy would index past the allocation. Widen the
	// allocation to also cover it; this never changes which bytes the
	// decoder reports, only how much headroom backs them.
	let positioner_reach = 255u64 + u64::from(decl_width.saturating_sub(1)) * 56 + 8 * u64::from(decl_height);
	let staging_len = staging_len.max(SLOT_SIZE as u64 + positioner_reach);

	let staging_len: usize = usize::try_from(staging_len).map_err(|_| PicError::Allocation {
		requested: staging_len,
	})?;
	debug!("allocating {staging_len}-byte staging buffer");

	let mut buffer = Vec::new();
	buffer
		.try_reserve_exact(staging_len)
		.map_err(|_| PicError::Allocation { requested: staging_len })?;
	buffer.resize(staging_len, 0);

	let swap = bits.read(1) == 1;
	let (plane0_offset, plane1_offset) = if swap {
		(2 * SLOT_SIZE, SLOT_SIZE)
	} else {
		(SLOT_SIZE, 2 * SLOT_SIZE)
	};
	debug!(
		"plane swap flag is {}, plane 0 decodes into the slot at offset {plane0_offset}",
		u8::from(swap)
	);

	let plane_len = width as usize * height as usize * 8;

	info!("decompressing bit plane 0");
	{
		let mut symbols = RleStream::new(&mut bits);
		decode_plane(width, height, &mut symbols, &mut buffer[plane0_offset..plane0_offset + plane_len]);
	}

	let mode = read_mode(&mut bits);
	debug!("detected compression mode {mode:?}");

	info!("decompressing bit plane 1");
	{
		let mut symbols = RleStream::new(&mut bits);
		decode_plane(width, height, &mut symbols, &mut buffer[plane1_offset..plane1_offset + plane_len]);
	}

	apply_mode(mode, width, height, &mut buffer, plane0_offset, plane1_offset);

	info!("positioning planes using declared size {decl_width}x{decl_height}");
	// The cascade always runs slot B -> slot A, then slot C -> slot B,
	// independent of the swap flag: swap only chose which physical slot
	// each plane decoded into above. Using plane0_offset/plane1_offset
	// here would follow the *logical* planes instead of the *physical*
	// slots and scramble the output whenever swap=1.
	position(decl_width, decl_height, &mut buffer, SLOT_SIZE, 0);
	position(decl_width, decl_height, &mut buffer, 2 * SLOT_SIZE, SLOT_SIZE);

	info!("decode complete");

	Ok(DecodedSprite {
		buffer,
		width: decl_width,
		height: decl_height,
	})
}

fn apply_mode(mode: Mode, width: u32, height: u32, buffer: &mut [u8], plane0_offset: usize, plane1_offset: usize) {
	match mode {
		Mode::One => {
			delta_decode(width, height, &mut buffer[plane1_offset..]);
			delta_decode(width, height, &mut buffer[plane0_offset..]);
		}
		Mode::Two => {
			delta_decode(width, height, &mut buffer[plane0_offset..]);
			xor_in_place(width, height, buffer, plane1_offset, plane0_offset);
		}
		Mode::Three => {
			delta_decode(width, height, &mut buffer[plane1_offset..]);
			delta_decode(width, height, &mut buffer[plane0_offset..]);
			xor_in_place(width, height, buffer, plane1_offset, plane0_offset);
		}
	}
}

/// XORs `buffer[dst_offset..]` against `buffer[src_offset..]` when both
/// regions live in the same backing buffer but at different offsets.
fn xor_in_place(width: u32, height: u32, buffer: &mut [u8], dst_offset: usize, src_offset: usize) {
	let len = width as usize * height as usize * 8;
	let src: Vec<u8> = buffer[src_offset..src_offset + len].to_vec();
	xor_planes(width, height, &mut buffer[dst_offset..], &src);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test_log::test]
	fn all_zero_payload_decodes_to_all_zero_output() {
		// header 0x55 (W=5,H=5), swap=0, plane0 all-zero (mode bit 1 data, immediate
		// 00 terminator... easiest is to encode via RLE mode with a huge run covering
		// the whole plane), mode=1 (bit 0), plane1 all-zero likewise.
		// Construct conservatively: swap(0), then RLE mode(0) with run length >= plane size.
		let w = 5u32;
		let h = 5u32;
		let plane_bits = w * h * 8 * 4; // 4 symbols per byte written (2 bits each)... see below

		// Build the bitstream by hand using a small in-memory bit writer.
		let mut writer = BitWriter::new();
		writer.write(w, 4);
		writer.write(h, 4);
		writer.write(0, 1); // swap
		encode_all_zero_plane(&mut writer, plane_bits);
		writer.write(0, 1); // mode = 1
		encode_all_zero_plane(&mut writer, plane_bits);
		let data = writer.finish();

		let decoded = decode(&data[..], None).expect("decode should not fail on well-formed input");
		assert!(decoded.plane0().iter().all(|&b| b == 0));
		assert!(decoded.plane1().iter().all(|&b| b == 0));
	}

	#[test]
	fn zero_dimensions_do_not_panic() {
		let data = [0u8; 4];
		let decoded = decode(&data[..], None).expect("zero-size header must still decode");
		assert_eq!(decoded.plane0().len(), SLOT_SIZE);
	}

	#[test]
	fn lopsided_header_size_does_not_overrun_staging_buffer() {
		// W=15, H=1 (or the reverse) is reachable purely from the 4-bit
		// header fields, no external declared-size override required. Its
		// positioner reach grows linearly in each dimension while the
		// tile-product-based staging budget stays near its 49-tile floor,
		// so this must not index past the allocation.
		for header in [0xF1u8, 0x1Fu8] {
			let data = [header, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
			let decoded = decode(&data[..], None).expect("lopsided declared size must not panic");
			assert_eq!(decoded.plane0().len(), SLOT_SIZE);
			assert_eq!(decoded.plane1().len(), SLOT_SIZE);
		}
	}

	#[test]
	fn truncated_stream_does_not_panic() {
		let data = [0xFFu8; 1];
		let decoded = decode(&data[..], None).expect("truncated input must zero-pad, not fail");
		assert_eq!(decoded.plane0().len(), SLOT_SIZE);
	}

	#[test]
	fn positioner_cascade_follows_physical_slots_not_logical_planes() {
		// The cascade is always slot B -> A, then slot C -> B, regardless of
		// the swap flag; swap only chose which physical slot each logical
		// plane decoded into. Encode plane 0 as all-zero and plane 1 as a
		// nonzero literal pattern (mode 1: independent delta-decode, no
		// XOR, so each plane's zero-ness survives the transform). With
		// swap=0 plane 0 lands in slot B (-> final A) and plane 1 in slot C
		// (-> final B), so plane0() is all-zero and plane1() is not. With
		// swap=1 plane 0 lands in slot C (-> final B via the cascade's
		// second leg) and plane 1 in slot B (-> final A via the first
		// leg), flipping which accessor is all-zero.
		let build = |swap_bit: u32| {
			let mut writer = BitWriter::new();
			writer.write(1, 4); // header W=1
			writer.write(1, 4); // header H=1
			writer.write(swap_bit, 1);
			encode_all_zero_plane(&mut writer, 1 * 1 * 8 * 4); // plane 0
			writer.write(0, 1); // mode 1
			writer.write(1, 1); // plane 1 opens in data mode
			writer.write(0b01, 2);
			writer.write(0b10, 2);
			writer.write(0b00, 2); // terminator, switches to RLE mode
			write_run(&mut writer, 1 * 1 * 8 * 4 - 2);
			writer.finish()
		};

		let no_swap = decode(&build(0)[..], None).expect("well-formed input never fails");
		assert!(no_swap.plane0().iter().all(|&b| b == 0), "swap=0: plane 0 must land all-zero in slot A");
		assert!(
			no_swap.plane1().iter().any(|&b| b != 0),
			"swap=0: plane 1's nonzero pattern must land in slot B"
		);

		let swapped = decode(&build(1)[..], None).expect("well-formed input never fails");
		assert!(
			swapped.plane0().iter().any(|&b| b != 0),
			"swap=1: plane 1's nonzero pattern must land in slot A via the B->A leg"
		);
		assert!(
			swapped.plane1().iter().all(|&b| b == 0),
			"swap=1: plane 0 must land all-zero in slot B via the C->B leg"
		);
	}

	#[test]
	fn declared_size_overrides_positioning_without_changing_bits_consumed() {
		let mut writer = BitWriter::new();
		writer.write(1, 4); // header W=1
		writer.write(1, 4); // header H=1
		writer.write(0, 1); // swap
		encode_all_zero_plane(&mut writer, 1 * 1 * 8 * 4);
		writer.write(0, 1); // mode 1
		encode_all_zero_plane(&mut writer, 1 * 1 * 8 * 4);
		let data = writer.finish();

		let decoded = decode(&data[..], Some((8, 8))).expect("decode with declared size override");
		assert_eq!(decoded.width(), 8);
		assert_eq!(decoded.height(), 8);
	}

	/// Minimal MSB-first bit writer used only to build test fixtures.
	struct BitWriter {
		bytes: Vec<u8>,
		acc: u32,
		bits: u32,
	}

	impl BitWriter {
		fn new() -> Self {
			Self {
				bytes: Vec::new(),
				acc: 0,
				bits: 0,
			}
		}

		fn write(&mut self, value: u32, n: u32) {
			self.acc = (self.acc << n) | (value & ((1 << n) - 1));
			self.bits += n;
			while self.bits >= 8 {
				let shift = self.bits - 8;
				self.bytes.push(((self.acc >> shift) & 0xFF) as u8);
				self.bits -= 8;
			}
		}

		fn finish(mut self) -> Vec<u8> {
			if self.bits > 0 {
				let pad = 8 - self.bits;
				self.write(0, pad);
			}
			self.bytes
		}
	}

	/// Emits an RLE mode run covering at least `symbols` zero symbols using
	/// a single maximal packet, matching the encoding `decompress_stream`
	/// expects: mode bit 0 (rle), then a unary-prefixed width and count.
	fn encode_all_zero_plane(writer: &mut BitWriter, symbols: u32) {
		writer.write(0, 1); // opens in RLE mode
		write_run(writer, symbols);
	}

	/// Emits a run-length packet (without a leading mode bit) covering at
	/// least `symbols` zero symbols, for use mid-stream after a data-mode
	/// terminator has already switched control to RLE mode.
	fn write_run(writer: &mut BitWriter, symbols: u32) {
		// R = (1<<n_bits) + count - 1 for 0 <= count < (1<<n_bits); pick the
		// largest n_bits with (1<<n_bits) <= symbols + 1 so count fits.
		let target = u64::from(symbols) + 1;
		let mut n_bits = 1u32;
		while (1u64 << (n_bits + 1)) <= target {
			n_bits += 1;
		}
		let count = (target - (1u64 << n_bits)) as u32;
		for _ in 0..n_bits - 1 {
			writer.write(1, 1);
		}
		writer.write(0, 1);
		writer.write(count, n_bits);
	}
}
