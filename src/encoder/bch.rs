/// BCH encoding for QR code format and version info
use crate::models::{ECLevel, MaskPattern, Version};

/// Generator for BCH(15,5): x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const G15: u32 = 0b101_0011_0111;
/// Generator for BCH(18,6): x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const G18: u32 = 0b1_1111_0010_0101;
/// XOR mask applied to format info so it is never all zeros
const G15_MASK: u32 = 0b101_0100_0001_0010;

/// Position of the highest set bit plus one
fn bch_digit(mut data: u32) -> u32 {
    let mut digit = 0;
    while data != 0 {
        digit += 1;
        data >>= 1;
    }
    digit
}

/// Append the BCH remainder of `data` (shifted left by the generator degree)
fn bch_encode(data: u32, generator: u32) -> u32 {
    let degree = bch_digit(generator) - 1;
    let mut d = data << degree;
    while bch_digit(d) >= bch_digit(generator) {
        d ^= generator << (bch_digit(d) - bch_digit(generator));
    }
    (data << degree) | d
}

/// 15-bit masked format word for a level and mask
pub fn format_info_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((ec_level.format_bits() as u32) << 3) | mask.index() as u32;
    (bch_encode(data, G15) ^ G15_MASK) as u16
}

/// 18-bit version word (only placed for versions 7 and up)
pub fn version_info_bits(version: Version) -> u32 {
    bch_encode(version.number() as u32, G18)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Remainder of a full codeword is zero when it is a valid BCH word
    fn syndrome(codeword: u32, generator: u32) -> u32 {
        let mut d = codeword;
        while bch_digit(d) >= bch_digit(generator) {
            d ^= generator << (bch_digit(d) - bch_digit(generator));
        }
        d
    }

    #[test]
    fn test_format_known_values() {
        assert_eq!(
            format_info_bits(ECLevel::M, MaskPattern::Pattern0),
            0b101_0100_0001_0010
        );
        assert_eq!(
            format_info_bits(ECLevel::L, MaskPattern::Pattern0),
            0b111_0111_1100_0100
        );
    }

    #[test]
    fn test_format_words_are_valid_codewords() {
        for ec in ECLevel::ALL {
            for mask in MaskPattern::ALL {
                let word = format_info_bits(ec, mask) as u32 ^ G15_MASK;
                assert_eq!(syndrome(word, G15), 0);
                assert_eq!(word >> 10, ((ec.format_bits() as u32) << 3) | mask.index() as u32);
            }
        }
    }

    #[test]
    fn test_version_known_value() {
        let v7 = Version::new(7).unwrap();
        assert_eq!(version_info_bits(v7), 0b00_0111_1100_1001_0100);
        for version in Version::all().filter(|v| v.number() >= 7) {
            let word = version_info_bits(version);
            assert_eq!(syndrome(word, G18), 0);
            assert_eq!(word >> 12, version.number() as u32);
        }
    }
}
