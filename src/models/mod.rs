/// Tri-state module grid used during layout
pub mod matrix;
/// Symbol parameters and the finished symbol
pub mod qr_code;

pub use matrix::{Module, ModuleMatrix};
pub use qr_code::{ECLevel, MaskPattern, QrSymbol, Version};
