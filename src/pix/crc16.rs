/// CRC-16/CCITT-FALSE as used by the BR Code CRC field (tag 63)
const POLY: u16 = 0x1021;
const INIT: u16 = 0xFFFF;

/// CRC over the UTF-16 code units of `text`, one byte per unit.
///
/// Only the low byte of each unit reaches the register, so ASCII payloads
/// give the same result as a plain byte-wise CRC.
pub fn crc16(text: &str) -> u16 {
    text.encode_utf16().fold(INIT, |crc, unit| {
        let mut crc = crc ^ ((unit & 0xFF) << 8);
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
        }
        crc
    })
}

/// Four uppercase hex digits, zero-padded
pub fn crc16_hex(text: &str) -> String {
    format!("{:04X}", crc16(text))
}
