//! Capacity and block table checks against published QR Code figures

use pix_qr::encoder::tables::{data_codewords, rs_blocks, total_codewords};
use pix_qr::{ECLevel, EncodeOptions, Version, encode};

fn v(n: u8) -> Version {
    Version::new(n).unwrap()
}

/// Published data codeword capacity, indexed by [level][version - 1] (L, M, Q, H)
const DATA_CODEWORDS: [[usize; 40]; 4] = [
    [
        19, 34, 55, 80, 108, 136, 156, 194, 232, 274, 324, 370, 428, 461, 523, 589, 647, 721, 795,
        861, 932, 1006, 1094, 1174, 1276, 1370, 1468, 1531, 1631, 1735, 1843, 1955, 2071, 2191,
        2306, 2434, 2566, 2702, 2812, 2956,
    ], // Low
    [
        16, 28, 44, 64, 86, 108, 124, 154, 182, 216, 254, 290, 334, 365, 415, 453, 507, 563, 627,
        669, 714, 782, 860, 914, 1000, 1062, 1128, 1193, 1267, 1373, 1455, 1541, 1631, 1725, 1812,
        1914, 1992, 2102, 2216, 2334,
    ], // Medium
    [
        13, 22, 34, 48, 62, 76, 88, 110, 132, 154, 180, 206, 244, 261, 295, 325, 367, 397, 445,
        485, 512, 568, 614, 664, 718, 754, 808, 871, 911, 985, 1033, 1115, 1171, 1231, 1286, 1354,
        1426, 1502, 1582, 1666,
    ], // Quartile
    [
        9, 16, 26, 36, 46, 60, 66, 86, 100, 122, 140, 158, 180, 197, 223, 253, 283, 313, 341, 385,
        406, 442, 464, 514, 538, 596, 628, 661, 701, 745, 793, 845, 901, 961, 986, 1054, 1096,
        1142, 1222, 1276,
    ], // High
];

#[test]
fn test_published_data_codewords() {
    for (ec, expected) in ECLevel::ALL.into_iter().zip(DATA_CODEWORDS) {
        for (version, capacity) in Version::all().zip(expected) {
            assert_eq!(
                data_codewords(version, ec),
                capacity,
                "version {version} level {ec:?}"
            );
        }
    }
}

#[test]
fn test_spot_capacities() {
    assert_eq!(data_codewords(v(1), ECLevel::H), 9);
    assert_eq!(data_codewords(v(14), ECLevel::Q), 261);
    assert_eq!(data_codewords(v(40), ECLevel::L), 2956);
}

#[test]
fn test_total_codewords() {
    assert_eq!(total_codewords(v(1)), 26);
    assert_eq!(total_codewords(v(2)), 44);
    assert_eq!(total_codewords(v(10)), 346);
    assert_eq!(total_codewords(v(40)), 3706);
}

#[test]
fn test_block_counts() {
    // (version, level, number of blocks, ecc codewords per block)
    let cases = [
        (1, ECLevel::M, 1, 10),
        (5, ECLevel::H, 4, 22),
        (10, ECLevel::Q, 8, 24),
        (40, ECLevel::H, 81, 30),
    ];
    for (version, ec, count, ecc) in cases {
        let blocks = rs_blocks(v(version), ec);
        assert_eq!(blocks.len(), count);
        assert!(blocks.iter().all(|b| b.ec_count() == ecc));
    }
}

#[test]
fn test_capacity_grows_with_version() {
    for ec in ECLevel::ALL {
        let mut previous = 0;
        for version in Version::all() {
            let capacity = data_codewords(version, ec);
            assert!(capacity > previous, "version {version} level {ec:?}");
            previous = capacity;
        }
    }
}

#[test]
fn test_maximum_byte_payloads() {
    let limits = [
        (ECLevel::L, 2953),
        (ECLevel::M, 2331),
        (ECLevel::Q, 1663),
        (ECLevel::H, 1273),
    ];
    for (ec, max) in limits {
        let options = EncodeOptions::with_ec_level(ec);
        let symbol = encode(&vec![b'#'; max], &options).unwrap();
        assert_eq!(symbol.version(), Version::MAX, "{ec:?}");
        assert!(encode(&vec![b'#'; max + 1], &options).is_err(), "{ec:?}");
    }
}
