/// Data placement into the module matrix following the zigzag pattern
use crate::models::{MaskPattern, ModuleMatrix};

/// Place codewords into every cell still unset after function patterns
pub struct DataPlacer;

impl DataPlacer {
    /// Fill the data region with `codewords` (MSB first), XORed with `mask`.
    ///
    /// Columns are visited in pairs from the right edge, skipping the
    /// vertical timing column, alternating upward and downward. Cells left
    /// over once the codewords run out (remainder bits) are light before
    /// masking.
    pub fn place(matrix: &mut ModuleMatrix, codewords: &[u8], mask: MaskPattern) {
        let size = matrix.size();
        let mut bit_index = 0usize;
        let total_bits = codewords.len() * 8;
        let mut upward = true;
        let mut col = size as isize - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
            }

            let mut visit = |row: usize| {
                for c in 0..2 {
                    let cx = col as usize - c;
                    if matrix.is_set(row, cx) {
                        continue;
                    }
                    let mut dark = false;
                    if bit_index < total_bits {
                        dark = (codewords[bit_index / 8] >> (7 - bit_index % 8)) & 1 == 1;
                    }
                    if mask.is_masked(row, cx) {
                        dark = !dark;
                    }
                    matrix.set(row, cx, dark);
                    bit_index += 1;
                }
            };

            if upward {
                for row in (0..size).rev() {
                    visit(row);
                }
            } else {
                for row in 0..size {
                    visit(row);
                }
            }

            upward = !upward;
            col -= 2;
        }
    }
}
