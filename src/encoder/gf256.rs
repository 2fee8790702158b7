/// GF(256) arithmetic for Reed-Solomon coding
/// QR codes use the field generated by x^8 + x^4 + x^3 + x^2 + 1 with primitive element alpha = 2
use crate::error::QrError;

const PRIMITIVE_POLY: u16 = 0b1_0001_1101;

/// Build exp/log tables by repeated multiplication by alpha, reducing by the field polynomial
const fn build_tables() -> ([u8; 256], [u8; 256]) {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    // alpha^255 = 1
    exp[255] = exp[0];
    (exp, log)
}

static EXP_TABLE: [u8; 256] = build_tables().0;
static LOG_TABLE: [u8; 256] = build_tables().1;

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// alpha^n for any n (reduced mod 255)
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }

    /// Discrete logarithm base alpha. Undefined for zero.
    pub fn log(a: u8) -> Result<u8, QrError> {
        if a == 0 {
            return Err(QrError::InvalidArgument("glog(0)".to_string()));
        }
        Ok(LOG_TABLE[a as usize])
    }

    /// Field product
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// Field quotient; `b == 0` is an error
    pub fn div(a: u8, b: u8) -> Result<u8, QrError> {
        if b == 0 {
            return Err(QrError::InvalidArgument("division by zero".to_string()));
        }
        if a == 0 {
            return Ok(0);
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        Ok(EXP_TABLE[(log_a + 255 - log_b) % 255])
    }

    /// Multiplicative inverse: alpha^(255 - log b)
    pub fn inverse(b: u8) -> Result<u8, QrError> {
        let log_b = Self::log(b)? as usize;
        Ok(EXP_TABLE[(255 - log_b) % 255])
    }
}
