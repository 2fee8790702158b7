//! QR code encoding modules
//!
//! Everything needed to turn byte segments into a finished symbol:
//! - GF(256) arithmetic and Reed-Solomon polynomials
//! - Capacity, block and alignment tables
//! - Segment packing, padding and block interleaving
//! - Function pattern layout, zigzag data placement and mask scoring

/// Append-only MSB-first bit sequence
pub mod bit_buffer;
/// BCH encoding of format and version info
pub mod bch;
/// Symbol builder (version selection, mask search, final layout)
pub mod builder;
/// Data codeword packing and Reed-Solomon interleaving
pub mod codewords;
/// Finder, alignment, timing, format and version patterns
pub mod function_patterns;
/// GF(256) field arithmetic
pub mod gf256;
/// Mask penalty rules
pub mod penalty;
/// Zigzag data placement
pub mod placement;
/// Polynomials over GF(256)
pub mod polynomial;
/// Byte-mode segments
pub mod segment;
/// QR specification tables (ECC codewords/blocks, alignment positions)
pub mod tables;

pub use builder::QrBuilder;
pub use penalty::PenaltyScore;
pub use segment::{Mode, Segment};
