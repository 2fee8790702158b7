//! Property tests for field arithmetic, polynomial division and payloads

use pix_qr::encoder::gf256::Gf256;
use pix_qr::encoder::polynomial::Polynomial;
use pix_qr::pix::{PixFields, build_payload, verify_crc};
use pix_qr::{ECLevel, EncodeOptions, encode};
use proptest::prelude::*;

fn txid_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,25}"
}

proptest! {
    #[test]
    fn test_gf_inverse_consistency(a in any::<u8>(), b in 1u8..=255) {
        let inv = Gf256::inverse(b).unwrap();
        prop_assert_eq!(Gf256::mul(a, Gf256::mul(b, inv)), a);
    }

    #[test]
    fn test_gf_mul_commutes(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(Gf256::mul(a, b), Gf256::mul(b, a));
    }

    #[test]
    fn test_polynomial_mod_idempotent(
        data in prop::collection::vec(any::<u8>(), 1..64),
        ec_count in 1usize..31,
    ) {
        let generator = Polynomial::error_correction_generator(ec_count);
        let once = Polynomial::new(&data, ec_count).modulo(&generator).unwrap();
        prop_assert!(once.len() <= ec_count);
        prop_assert_eq!(once.modulo(&generator).unwrap(), once);
    }

    #[test]
    fn test_payload_crc_self_consistent(
        key in "[a-z0-9.@+]{1,40}",
        name in "[A-Za-z ]{0,24}[A-Za-z]",
        city in "[A-Z ]{0,14}[A-Z]",
        cents in 0u32..1_000_000,
        txid in txid_strategy(),
    ) {
        let amount = format!("{}.{:02}", cents / 100, cents % 100);
        let fields = PixFields::new(key, name, city)
            .with_amount(amount.clone())
            .with_txid(txid);
        let payload = build_payload(&fields).unwrap();
        prop_assert!(payload.starts_with("000201"));
        let amount_field = format!("54{:02}{}", amount.len(), amount);
        prop_assert!(payload.contains(&amount_field));
        prop_assert!(verify_crc(&payload));
    }

    #[test]
    fn test_symbol_size_matches_version(data in prop::collection::vec(any::<u8>(), 0..200)) {
        let symbol = encode(&data, &EncodeOptions::with_ec_level(ECLevel::M)).unwrap();
        prop_assert_eq!(symbol.size(), symbol.version().size());
        prop_assert_eq!(symbol.rows().count(), symbol.size());
    }
}
