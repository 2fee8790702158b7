//! pix_qr - PIX BR Code payloads and QR Code symbols as SVG
//!
//! A pure Rust QR Code (Model 2, byte mode) encoder with Reed-Solomon error
//! correction and penalty-based mask selection, plus the TLV serializer for
//! Brazilian "PIX Copia e Cola" payloads.
//!
//! ```
//! use pix_qr::{EncodeOptions, PixFields, generate_pix_qr};
//!
//! let fields = PixFields::new("test@pix.com", "Loja Teste", "SAO PAULO").with_amount("10.50");
//! let code = generate_pix_qr(&fields, &EncodeOptions::default()).unwrap();
//! assert!(code.payload.starts_with("000201"));
//! assert!(code.svg.starts_with("<svg"));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults
pub mod config;
/// QR code encoding modules (GF(256), Reed-Solomon, layout, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Version, ECLevel, MaskPattern, QrSymbol, ModuleMatrix)
pub mod models;
/// PIX payload serialization and CRC
pub mod pix;
/// SVG output
pub mod render;

pub use encoder::QrBuilder;
pub use error::{Error, PixError, QrError, Result};
pub use models::{ECLevel, MaskPattern, QrSymbol, Version};
pub use pix::PixFields;
pub use render::SvgOptions;

/// Symbol parameters and rendering options for one encode call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Fixed version, or `None` for the smallest that fits
    pub version: Option<Version>,
    /// Fixed mask, or `None` for the lowest penalty
    pub mask: Option<MaskPattern>,
    /// SVG cell size, margin and colors
    pub svg: SvgOptions,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: config::default_ec_level(),
            version: None,
            mask: None,
            svg: SvgOptions::default(),
        }
    }
}

impl EncodeOptions {
    /// Defaults with a specific error correction level
    pub fn with_ec_level(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            ..Self::default()
        }
    }
}

/// Encode bytes into a QR symbol.
///
/// A pinned version too small for the content fails with
/// [`QrError::Internal`]; [`QrBuilder::build`] reports the underlying
/// [`QrError::CodeLengthOverflow`].
pub fn encode(content: &[u8], options: &EncodeOptions) -> Result<QrSymbol, QrError> {
    let mut builder = QrBuilder::new(options.ec_level);
    if let Some(version) = options.version {
        builder = builder.with_version(version);
    }
    if let Some(mask) = options.mask {
        builder = builder.with_mask(mask);
    }
    builder.add_data(content);
    builder.build().map_err(|err| match err {
        QrError::CodeLengthOverflow { .. } => QrError::Internal(err.to_string()),
        other => other,
    })
}

/// Encode text and render it as an SVG document.
///
/// Fails with [`QrError::DataTooLong`] when the content does not fit a
/// version 40 symbol at the requested level; a lower level holds more data.
pub fn encode_svg(content: &str, options: &EncodeOptions) -> Result<String, QrError> {
    let symbol = encode(content.as_bytes(), options)?;
    Ok(render::render_svg(&symbol, &options.svg))
}

/// [`encode_svg`] wrapped in a `data:image/svg+xml;base64,` URI
pub fn encode_svg_base64(content: &str, options: &EncodeOptions) -> Result<String, QrError> {
    encode_svg(content, options).map(|svg| render::svg_data_uri(&svg))
}

/// Validate the fields and serialize a PIX payload with its CRC
pub fn build_pix_payload(fields: &PixFields) -> Result<String, PixError> {
    pix::build_payload(fields)
}

/// A PIX payload and the SVG of the QR symbol carrying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixQrCode {
    /// "Copia e Cola" payload string
    pub payload: String,
    /// SVG document encoding `payload`
    pub svg: String,
}

/// Build a PIX payload and encode it as a QR symbol in one call
pub fn generate_pix_qr(fields: &PixFields, options: &EncodeOptions) -> Result<PixQrCode> {
    let payload = build_pix_payload(fields)?;
    let svg = encode_svg(&payload, options)?;
    Ok(PixQrCode { payload, svg })
}
