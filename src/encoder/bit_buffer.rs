/// Append-only bit sequence, packed MSB-first into bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    buffer: Vec<u8>,
    length: usize,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `n_bits` bits of `value`, most significant first
    pub fn put(&mut self, value: u32, n_bits: usize) {
        debug_assert!(n_bits <= 32);
        for i in (0..n_bits).rev() {
            self.put_bit((value >> i) & 1 == 1);
        }
    }

    /// Append a single bit
    pub fn put_bit(&mut self, bit: bool) {
        let byte_index = self.length / 8;
        if self.buffer.len() <= byte_index {
            self.buffer.push(0);
        }
        if bit {
            self.buffer[byte_index] |= 0x80 >> (self.length % 8);
        }
        self.length += 1;
    }

    /// Number of bits written so far
    pub fn len_in_bits(&self) -> usize {
        self.length
    }

    /// Bit at `index` (MSB-first order)
    pub fn get(&self, index: usize) -> bool {
        index < self.length && (self.buffer[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Packed bytes; the last byte may be partially filled
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the buffer and return its packed bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}
