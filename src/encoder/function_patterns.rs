/// Function pattern layout: finders, separators, alignment, timing,
/// format and version information
use crate::encoder::bch::{format_info_bits, version_info_bits};
use crate::encoder::tables::alignment_pattern_positions;
use crate::models::{ECLevel, MaskPattern, ModuleMatrix, Version};

/// Lay out every function pattern of a symbol into an empty matrix.
///
/// With `trial` set, format and version cells are reserved as light modules
/// instead of carrying their final bits, so mask trials score the same
/// template regardless of the candidate pattern.
pub fn place_function_patterns(
    matrix: &mut ModuleMatrix,
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    trial: bool,
) {
    let size = matrix.size();
    place_finder(matrix, 0, 0);
    place_finder(matrix, size - 7, 0);
    place_finder(matrix, 0, size - 7);
    place_alignment_patterns(matrix, version);
    place_timing_patterns(matrix);
    place_format_info(matrix, ec_level, mask, trial);
    if version.number() >= 7 {
        place_version_info(matrix, version, trial);
    }
}

/// 7x7 finder with its one-module light separator, clipped to the symbol
fn place_finder(matrix: &mut ModuleMatrix, row: usize, col: usize) {
    let size = matrix.size() as isize;
    for r in -1..=7isize {
        let rr = row as isize + r;
        if rr < 0 || rr >= size {
            continue;
        }
        for c in -1..=7isize {
            let cc = col as isize + c;
            if cc < 0 || cc >= size {
                continue;
            }
            let ring = ((0..=6).contains(&r) && (c == 0 || c == 6))
                || ((0..=6).contains(&c) && (r == 0 || r == 6));
            let core = (2..=4).contains(&r) && (2..=4).contains(&c);
            matrix.set(rr as usize, cc as usize, ring || core);
        }
    }
}

/// 5x5 alignment patterns at every pair of centers not already covered
fn place_alignment_patterns(matrix: &mut ModuleMatrix, version: Version) {
    let positions = alignment_pattern_positions(version);
    for &row in positions {
        for &col in positions {
            if matrix.is_set(row, col) {
                continue;
            }
            for r in -2..=2isize {
                for c in -2..=2isize {
                    let dark = r.abs() == 2 || c.abs() == 2 || (r == 0 && c == 0);
                    matrix.set(
                        (row as isize + r) as usize,
                        (col as isize + c) as usize,
                        dark,
                    );
                }
            }
        }
    }
}

/// Alternating row 6 and column 6 between the finders
fn place_timing_patterns(matrix: &mut ModuleMatrix) {
    let size = matrix.size();
    for i in 8..size - 8 {
        if !matrix.is_set(i, 6) {
            matrix.set(i, 6, i % 2 == 0);
        }
        if !matrix.is_set(6, i) {
            matrix.set(6, i, i % 2 == 0);
        }
    }
}

/// Both copies of the 15-bit format word plus the fixed dark module
fn place_format_info(matrix: &mut ModuleMatrix, ec_level: ECLevel, mask: MaskPattern, trial: bool) {
    let size = matrix.size();
    let bits = format_info_bits(ec_level, mask);

    for i in 0..15 {
        let dark = !trial && (bits >> i) & 1 == 1;

        // Column 8: top-left going down, then bottom-left
        let row = match i {
            0..=5 => i,
            6..=7 => i + 1,
            _ => size - 15 + i,
        };
        matrix.set(row, 8, dark);

        // Row 8: top-right going left, then top-left
        let col = match i {
            0..=7 => size - 1 - i,
            8 => 7,
            _ => 14 - i,
        };
        matrix.set(8, col, dark);
    }

    matrix.set(size - 8, 8, !trial);
}

/// Two 6x3 copies of the 18-bit version word (versions 7 and up)
fn place_version_info(matrix: &mut ModuleMatrix, version: Version, trial: bool) {
    let size = matrix.size();
    let bits = version_info_bits(version);
    for i in 0..18 {
        let dark = !trial && (bits >> i) & 1 == 1;
        matrix.set(i / 3, i % 3 + size - 11, dark);
        matrix.set(i % 3 + size - 11, i / 3, dark);
    }
}
