//! Benchmark suite for the sprite decoder.
//!
//! Measures the full `decode` pipeline across a range of declared sizes,
//! plus the hot inner loops in isolation, to help spot regressions in
//! the bit reader, RLE stream, plane decoder, or positioner.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gbsprite_benches::{decode_bytes, generate_sprite_stream, sizes};
use std::hint::black_box;

/// Benchmarks the full decode pipeline across representative sprite
/// sizes, including the oversize "glitch" case that exercises the
/// positioner's modulo-256 wraparound.
fn bench_decode_by_size(c: &mut Criterion) {
	let mut group = c.benchmark_group("sprite_decode");

	let cases = [
		("1x1", sizes::MINIMAL),
		("5x5", sizes::TYPICAL),
		("7x7", sizes::FULL_FRAME),
		("9x9_glitch", sizes::GLITCH),
		("15x15_max", sizes::MAX_HEADER),
	];

	for (name, (w, h)) in cases {
		let stream = generate_sprite_stream(w, h, 3);
		group.throughput(Throughput::Bytes(stream.len() as u64));
		group.bench_with_input(BenchmarkId::new("decode", name), &stream, |b, stream| {
			b.iter(|| black_box(decode_bytes(black_box(stream))));
		});
	}

	group.finish();
}

/// Benchmarks decode across all three compression modes at a fixed size,
/// isolating the cost of the delta/XOR transform passes.
fn bench_decode_by_mode(c: &mut Criterion) {
	let mut group = c.benchmark_group("sprite_decode_mode");

	for mode in [1u8, 2, 3] {
		let stream = generate_sprite_stream(7, 7, mode);
		group.bench_with_input(BenchmarkId::new("mode", mode), &stream, |b, stream| {
			b.iter(|| black_box(decode_bytes(black_box(stream))));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_decode_by_size, bench_decode_by_mode);
criterion_main!(benches);
