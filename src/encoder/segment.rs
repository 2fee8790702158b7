/// Data segments and their mode headers
use crate::encoder::bit_buffer::BitBuffer;
use crate::models::Version;

/// Segment mode. Only 8-bit byte mode is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 8-bit bytes (mode indicator 0100)
    Byte,
}

impl Mode {
    /// 4-bit mode indicator
    pub fn indicator(self) -> u32 {
        match self {
            Mode::Byte => 0b0100,
        }
    }

    /// Width of the character count field for versions 1-9, 10-26 and 27-40
    pub fn count_bits(self, version: Version) -> usize {
        let widths = match self {
            Mode::Byte => [8, 16, 16],
        };
        match version.number() {
            1..=9 => widths[0],
            10..=26 => widths[1],
            _ => widths[2],
        }
    }
}

/// A chunk of input data tagged with its mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Raw bytes, encoded as-is (UTF-8 text stays UTF-8)
    Byte(Vec<u8>),
}

impl Segment {
    /// Byte-mode segment over `data`
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Segment::Byte(data.into())
    }

    /// Encoding mode of this segment
    pub fn mode(&self) -> Mode {
        match self {
            Segment::Byte(_) => Mode::Byte,
        }
    }

    /// Value written into the character count field
    pub fn char_count(&self) -> usize {
        match self {
            Segment::Byte(data) => data.len(),
        }
    }

    /// Header plus payload bits at `version`, or None if the character count
    /// does not fit the count field
    pub fn bit_length(&self, version: Version) -> Option<usize> {
        let count_bits = self.mode().count_bits(version);
        if self.char_count() >= 1usize << count_bits {
            return None;
        }
        let payload = match self {
            Segment::Byte(data) => data.len() * 8,
        };
        Some(4 + count_bits + payload)
    }

    /// Append mode indicator, character count and payload
    pub fn write(&self, buffer: &mut BitBuffer, version: Version) {
        let mode = self.mode();
        buffer.put(mode.indicator(), 4);
        buffer.put(self.char_count() as u32, mode.count_bits(version));
        match self {
            Segment::Byte(data) => {
                for &byte in data {
                    buffer.put(byte as u32, 8);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bits_by_version_range() {
        let v = |n| Version::new(n).unwrap();
        assert_eq!(Mode::Byte.count_bits(v(1)), 8);
        assert_eq!(Mode::Byte.count_bits(v(9)), 8);
        assert_eq!(Mode::Byte.count_bits(v(10)), 16);
        assert_eq!(Mode::Byte.count_bits(v(27)), 16);
        assert_eq!(Mode::Byte.count_bits(v(40)), 16);
    }

    #[test]
    fn test_byte_segment_write() {
        // "HI" = 0x48 0x49
        let segment = Segment::bytes("HI");
        let mut buffer = BitBuffer::new();
        segment.write(&mut buffer, Version::MIN);
        assert_eq!(buffer.len_in_bits(), 28);
        assert_eq!(segment.bit_length(Version::MIN), Some(28));
        assert_eq!(buffer.as_bytes(), &[0x40, 0x24, 0x84, 0x90]);
    }

    #[test]
    fn test_count_field_overflow() {
        let segment = Segment::bytes(vec![0u8; 256]);
        assert_eq!(segment.bit_length(Version::MIN), None);
        assert_eq!(segment.bit_length(Version::new(10).unwrap()), Some(4 + 16 + 2048));
    }
}
