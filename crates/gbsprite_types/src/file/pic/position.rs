//! Center-bottom tile repositioning, including its deliberate 8-bit
//! address-overflow truncation.
//!
//! The destination offset is computed modulo 256 exactly as the original
//! cartridge routine computes it, by truncating a signed tile offset into
//! a `u8`. For sprites taller or narrower than the nominal 7x7 tile grid
//! this wraps the destination address, writing into (and sometimes past)
//! neighboring staging buffers. That overlap is not a bug to work around:
//! it is the source of the genuine "MissingNo."-style glitch sprites, and
//! later cascade steps depend on reading back whatever ended up there.

/// Repositions an image into the bottom-center of its tile grid.
///
/// `buffer` holds both the `src_offset`-based source region and the
/// `dest_offset`-based destination region; they may overlap or span
/// outside a single sprite's nominal slot, which is why this takes one
/// shared buffer with raw offsets rather than split `&mut`/`&` slices.
/// The destination's first 392 bytes are always zeroed first, matching
/// the fixed-size staging slot of the original routine.
pub fn position(width: u32, height: u32, buffer: &mut [u8], src_offset: usize, dest_offset: usize) {
	let h_pad = 7i32 - height as i32;
	let w_pad = (8i32 - width as i32).div_euclid(2);
	let tile_offset = 7 * w_pad + h_pad;

	// Deliberately lossy: replicates the original routine's 8-bit address
	// wraparound by truncating a signed byte offset into a `u8`.
	let dest_tile_byte = ((tile_offset * 8) as i32 as u8) as usize;

	let h_col = height as usize * 8;

	// Snapshot the source before any destination write, since the two
	// regions may alias within `buffer`.
	let mut src = vec![0u8; width as usize * h_col];
	src.copy_from_slice(&buffer[src_offset..src_offset + width as usize * h_col]);

	for b in &mut buffer[dest_offset..dest_offset + 392] {
		*b = 0;
	}

	let mut src_pos = 0;
	let mut dst_pos = dest_tile_byte;
	for _ in 0..width {
		let dst_start = dest_offset + dst_pos;
		buffer[dst_start..dst_start + h_col].copy_from_slice(&src[src_pos..src_pos + h_col]);
		src_pos += h_col;
		dst_pos += 56;
	}
}
