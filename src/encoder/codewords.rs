/// Codeword construction: segment packing, padding, Reed-Solomon and interleaving
use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::polynomial::Polynomial;
use crate::encoder::segment::Segment;
use crate::encoder::tables::{RsBlock, rs_blocks};
use crate::error::QrError;
use crate::models::{ECLevel, Version};

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Pack segments into exactly `data_codewords` bytes: segment bits, optional
/// 4-bit terminator, zero bits to a byte boundary, then alternating pad bytes
pub fn pack_data(
    segments: &[Segment],
    version: Version,
    data_codewords: usize,
) -> Result<Vec<u8>, QrError> {
    let mut buffer = BitBuffer::new();
    for segment in segments {
        segment.write(&mut buffer, version);
    }

    let capacity_bits = data_codewords * 8;
    if buffer.len_in_bits() > capacity_bits {
        tracing::error!(
            bits = buffer.len_in_bits(),
            capacity_bits,
            version = version.number(),
            "code length overflow"
        );
        return Err(QrError::CodeLengthOverflow {
            bits: buffer.len_in_bits(),
            capacity_bits,
            version,
        });
    }

    if buffer.len_in_bits() + 4 <= capacity_bits {
        buffer.put(0, 4);
    }
    while buffer.len_in_bits() % 8 != 0 {
        buffer.put_bit(false);
    }

    let mut data = buffer.into_bytes();
    let mut pad = PAD_BYTES.iter().cycle();
    while data.len() < data_codewords {
        data.extend(pad.next());
    }
    Ok(data)
}

/// Error correction codewords for one block, left-padded to `ec_count`
pub fn block_ecc(data: &[u8], ec_count: usize) -> Result<Vec<u8>, QrError> {
    let generator = Polynomial::error_correction_generator(ec_count);
    let remainder = Polynomial::new(data, ec_count).modulo(&generator)?;
    let coefficients = if remainder.is_zero() {
        &[][..]
    } else {
        remainder.coefficients()
    };
    let mut ecc = vec![0u8; ec_count - coefficients.len()];
    ecc.extend_from_slice(coefficients);
    Ok(ecc)
}

/// Interleave blocks column by column: the i-th byte of every block that
/// has one, then the (i+1)-th
fn interleave(blocks: &[Vec<u8>], out: &mut Vec<u8>) {
    let longest = blocks.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..longest {
        out.extend(blocks.iter().filter_map(|block| block.get(i)));
    }
}

/// Final codeword sequence for a symbol: interleaved data, then interleaved ECC
pub fn create_codewords(
    segments: &[Segment],
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<u8>, QrError> {
    let blocks: Vec<RsBlock> = rs_blocks(version, ec_level);
    let data_total: usize = blocks.iter().map(|b| b.data_count).sum();
    let data = pack_data(segments, version, data_total)?;

    let mut data_blocks = Vec::with_capacity(blocks.len());
    let mut ecc_blocks = Vec::with_capacity(blocks.len());
    let mut offset = 0;
    for block in &blocks {
        let chunk = &data[offset..offset + block.data_count];
        offset += block.data_count;
        ecc_blocks.push(block_ecc(chunk, block.ec_count())?);
        data_blocks.push(chunk.to_vec());
    }

    let mut codewords = Vec::with_capacity(data_total + blocks.len() * blocks[0].ec_count());
    interleave(&data_blocks, &mut codewords);
    interleave(&ecc_blocks, &mut codewords);

    tracing::trace!(
        version = version.number(),
        ec_level = ?ec_level,
        blocks = blocks.len(),
        data_codewords = data_total,
        total_codewords = codewords.len(),
        "codewords built"
    );
    Ok(codewords)
}
