//! PIX BR Code payload ("Copia e Cola") building
//!
//! TLV fields with two-digit tags and lengths, terminated by a CRC-16 field.

/// CRC-16/CCITT-FALSE checksum
pub mod crc16;
/// Field validation and TLV serialization
pub mod payload;

pub use crc16::{crc16, crc16_hex};
pub use payload::{PixFields, build_payload, format_field, verify_crc};
