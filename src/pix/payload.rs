/// BR Code ("PIX Copia e Cola") payload serialization
use crate::error::PixError;
use crate::pix::crc16::crc16_hex;

/// GUI identifying the PIX arrangement inside the merchant account template
pub const PIX_GUI: &str = "br.gov.bcb.pix";
/// Transaction id used when the caller does not supply one
pub const DEFAULT_TXID: &str = "***";
/// Tag and length of the trailing CRC field
pub const CRC_FIELD_PREFIX: &str = "6304";

const MAX_NAME_LEN: usize = 25;
const MAX_CITY_LEN: usize = 15;
const MAX_TXID_LEN: usize = 25;
/// Largest value a two-digit length field can describe
const MAX_VALUE_LEN: usize = 99;

/// Merchant-supplied fields of a static PIX charge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixFields {
    /// PIX key (e-mail, phone, CPF/CNPJ or random key)
    pub pix_key: String,
    /// Merchant name, at most 25 characters
    pub merchant_name: String,
    /// Merchant city, at most 15 characters
    pub merchant_city: String,
    /// Free-text description shown to the payer
    pub description: Option<String>,
    /// Decimal amount; omitted means the payer chooses
    pub amount: Option<String>,
    /// Transaction id, `***` or 1-25 ASCII alphanumerics
    pub txid: Option<String>,
}

impl PixFields {
    /// Required fields only
    pub fn new(
        pix_key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
    ) -> Self {
        Self {
            pix_key: pix_key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
            ..Default::default()
        }
    }

    /// Set the description (tag 02 of the account template)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the amount, e.g. `"10.50"`
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the transaction id
    pub fn with_txid(mut self, txid: impl Into<String>) -> Self {
        self.txid = Some(txid.into());
        self
    }
}

/// Length in UTF-16 code units, the unit used for TLV lengths and the CRC
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Tag, zero-padded two-digit length, value
pub fn format_field(tag: &str, value: &str) -> String {
    format!("{tag}{:02}{value}", text_len(value))
}

/// [`format_field`] after checking the value fits the length field
fn tlv(field: &'static str, tag: &str, value: &str) -> Result<String, PixError> {
    let actual = text_len(value);
    if actual > MAX_VALUE_LEN {
        return Err(PixError::FieldTooLong {
            field,
            max: MAX_VALUE_LEN,
            actual,
        });
    }
    Ok(format_field(tag, value))
}

fn require(field: &'static str, value: &str) -> Result<(), PixError> {
    if value.trim().is_empty() {
        return Err(PixError::MissingField(field));
    }
    Ok(())
}

fn check_max_len(field: &'static str, value: &str, max: usize) -> Result<(), PixError> {
    let actual = text_len(value);
    if actual > max {
        return Err(PixError::FieldTooLong { field, max, actual });
    }
    Ok(())
}

fn validate_txid(txid: &str) -> Result<(), PixError> {
    if txid == DEFAULT_TXID {
        return Ok(());
    }
    let valid = (1..=MAX_TXID_LEN).contains(&txid.len())
        && txid.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return Err(PixError::InvalidField {
            field: "txid",
            reason: format!("expected '{DEFAULT_TXID}' or 1-{MAX_TXID_LEN} alphanumeric characters"),
        });
    }
    Ok(())
}

/// Parse and render an amount with two decimals. Blank means no amount.
fn normalize_amount(amount: &str) -> Result<Option<String>, PixError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let invalid = |reason: &str| PixError::InvalidField {
        field: "amount",
        reason: reason.to_string(),
    };
    let value: f64 = trimmed
        .parse()
        .map_err(|_| invalid("expected a decimal number such as 10.50"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid("expected a finite, non-negative amount"));
    }
    Ok(Some(format!("{value:.2}")))
}

/// Serialize the fields as a BR Code payload terminated by its CRC field
pub fn build_payload(fields: &PixFields) -> Result<String, PixError> {
    require("pixKey", &fields.pix_key)?;
    require("merchantName", &fields.merchant_name)?;
    require("merchantCity", &fields.merchant_city)?;
    check_max_len("merchantName", &fields.merchant_name, MAX_NAME_LEN)?;
    check_max_len("merchantCity", &fields.merchant_city, MAX_CITY_LEN)?;

    let txid = fields.txid.as_deref().unwrap_or(DEFAULT_TXID);
    validate_txid(txid)?;
    let amount = match fields.amount.as_deref() {
        Some(amount) => normalize_amount(amount)?,
        None => None,
    };

    let mut account = format_field("00", PIX_GUI);
    account.push_str(&tlv("pixKey", "01", &fields.pix_key)?);
    if let Some(description) = fields.description.as_deref().filter(|d| !d.is_empty()) {
        account.push_str(&tlv("description", "02", description)?);
    }

    let mut payload = String::with_capacity(128);
    payload.push_str(&format_field("00", "01"));
    payload.push_str(&tlv("merchantAccountInformation", "26", &account)?);
    payload.push_str(&format_field("52", "0000"));
    payload.push_str(&format_field("53", "986"));
    if let Some(amount) = &amount {
        payload.push_str(&tlv("amount", "54", amount)?);
    }
    payload.push_str(&format_field("58", "BR"));
    payload.push_str(&format_field("59", &fields.merchant_name));
    payload.push_str(&format_field("60", &fields.merchant_city));
    payload.push_str(&format_field("62", &format_field("05", txid)));

    payload.push_str(CRC_FIELD_PREFIX);
    let crc = crc16_hex(&payload);
    payload.push_str(&crc);
    tracing::debug!(len = payload.len(), crc = %crc, "pix payload built");
    Ok(payload)
}

/// Whether `payload` ends with a CRC field matching the rest of the string
pub fn verify_crc(payload: &str) -> bool {
    let Some(split) = payload.len().checked_sub(4) else {
        return false;
    };
    if !payload.is_char_boundary(split) {
        return false;
    }
    let (body, crc) = payload.split_at(split);
    body.ends_with(CRC_FIELD_PREFIX) && crc16_hex(body) == crc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loja() -> PixFields {
        PixFields::new("test@pix.com", "Loja Teste", "SAO PAULO")
    }

    #[test]
    fn test_format_field() {
        assert_eq!(format_field("00", "01"), "000201");
        assert_eq!(format_field("58", "BR"), "5802BR");
        assert_eq!(format_field("05", ""), "0500");
    }

    #[test]
    fn test_full_payload() {
        let fields = loja().with_amount("10.50").with_txid("ABC123");
        assert_eq!(
            build_payload(&fields).unwrap(),
            "00020126340014br.gov.bcb.pix0112test@pix.com520400005303986540510.505802BR\
             5910Loja Teste6009SAO PAULO62100506ABC1236304C307"
        );
    }

    #[test]
    fn test_default_txid_and_no_amount() {
        let fields = PixFields::new("+5511999999999", "Fulano de Tal", "BRASILIA");
        let payload = build_payload(&fields).unwrap();
        assert_eq!(
            payload,
            "00020126360014br.gov.bcb.pix0114+55119999999995204000053039865802BR\
             5913Fulano de Tal6008BRASILIA62070503***6304E157"
        );
    }

    #[test]
    fn test_description_and_integer_amount() {
        let fields = loja()
            .with_description("Pedido 42")
            .with_amount("5")
            .with_txid("PED42");
        assert_eq!(
            build_payload(&fields).unwrap(),
            "00020126470014br.gov.bcb.pix0112test@pix.com0209Pedido 4252040000530398654045.00\
             5802BR5910Loja Teste6009SAO PAULO62090505PED42630467BE"
        );
    }

    #[test]
    fn test_missing_fields() {
        let err = build_payload(&PixFields::new("", "Loja", "Cidade")).unwrap_err();
        assert_eq!(err, PixError::MissingField("pixKey"));
        let err = build_payload(&PixFields::new("k", " ", "Cidade")).unwrap_err();
        assert_eq!(err, PixError::MissingField("merchantName"));
        let err = build_payload(&PixFields::new("k", "Loja", "")).unwrap_err();
        assert_eq!(err, PixError::MissingField("merchantCity"));
    }

    #[test]
    fn test_length_limits() {
        let name = "A".repeat(26);
        let err = build_payload(&PixFields::new("k", name, "Cidade")).unwrap_err();
        assert_eq!(
            err,
            PixError::FieldTooLong {
                field: "merchantName",
                max: 25,
                actual: 26
            }
        );

        let err = build_payload(&PixFields::new("k", "Loja", "C".repeat(16))).unwrap_err();
        assert!(matches!(
            err,
            PixError::FieldTooLong {
                field: "merchantCity",
                ..
            }
        ));

        assert!(build_payload(&PixFields::new("k", "A".repeat(25), "C".repeat(15))).is_ok());
    }

    #[test]
    fn test_merchant_account_template_limit() {
        // GUI (18) + key TLV (4 + 78) = 100 > 99
        let fields = PixFields::new("k".repeat(78), "Loja", "Cidade");
        let err = build_payload(&fields).unwrap_err();
        assert!(matches!(
            err,
            PixError::FieldTooLong {
                field: "merchantAccountInformation",
                actual: 100,
                ..
            }
        ));
        assert!(build_payload(&PixFields::new("k".repeat(77), "Loja", "Cidade")).is_ok());
    }

    #[test]
    fn test_txid_validation() {
        let err = build_payload(&loja().with_txid("ABC 123")).unwrap_err();
        assert!(matches!(err, PixError::InvalidField { field: "txid", .. }));
        assert!(build_payload(&loja().with_txid("")).is_err());
        assert!(build_payload(&loja().with_txid("A".repeat(26))).is_err());
        assert!(build_payload(&loja().with_txid("A".repeat(25))).is_ok());
        assert!(build_payload(&loja().with_txid("***")).is_ok());
    }

    #[test]
    fn test_amount_validation() {
        for bad in ["abc", "-1", "NaN", "inf", "1,50"] {
            let err = build_payload(&loja().with_amount(bad)).unwrap_err();
            assert!(
                matches!(err, PixError::InvalidField { field: "amount", .. }),
                "{bad}"
            );
        }
        let payload = build_payload(&loja().with_amount("  ")).unwrap();
        assert_eq!(payload, build_payload(&loja()).unwrap());
        assert!(build_payload(&loja().with_amount("7.456")).unwrap().contains("54047.46"));
    }

    #[test]
    fn test_verify_crc() {
        let payload = build_payload(&loja()).unwrap();
        assert!(verify_crc(&payload));
        let mut tampered = payload.clone();
        tampered.replace_range(20..21, "X");
        assert!(!verify_crc(&tampered));
        assert!(!verify_crc("63"));
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        let fields = PixFields::new("k", "Padaria São João", "São Paulo");
        let payload = build_payload(&fields).unwrap();
        assert!(payload.contains("5916Padaria São João"));
        assert!(payload.contains("6009São Paulo"));
        assert!(verify_crc(&payload));
    }
}
