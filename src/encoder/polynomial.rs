/// Dense polynomials over GF(256), highest-degree coefficient first
use crate::encoder::gf256::Gf256;
use crate::error::QrError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Polynomial with GF(256) coefficients
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Build from coefficients (highest degree first), trimming leading zeros,
    /// then multiply by x^shift.
    ///
    /// An all-zero input yields the zero polynomial `[0]` regardless of `shift`.
    pub fn new(coefficients: &[u8], shift: usize) -> Self {
        let start = coefficients
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(coefficients.len());
        if start == coefficients.len() {
            return Self::zero();
        }
        let mut trimmed = Vec::with_capacity(coefficients.len() - start + shift);
        trimmed.extend_from_slice(&coefficients[start..]);
        trimmed.resize(trimmed.len() + shift, 0);
        Self {
            coefficients: trimmed,
        }
    }

    /// The zero polynomial `[0]`
    pub fn zero() -> Self {
        Self {
            coefficients: vec![0],
        }
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Number of coefficients (degree + 1)
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Never true for a constructed polynomial
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Highest power with a stored coefficient
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Whether this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0] == 0
    }

    /// Product via convolution; addition in GF(256) is XOR
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut product = vec![0u8; self.len() + other.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] ^= Gf256::mul(a, b);
            }
        }
        Polynomial::new(&product, 0)
    }

    /// Remainder of long division by `divisor`
    pub fn modulo(&self, divisor: &Polynomial) -> Result<Polynomial, QrError> {
        if divisor.is_zero() {
            return Err(QrError::InvalidArgument(
                "polynomial division by zero".to_string(),
            ));
        }
        let lead_log = Gf256::log(divisor.coefficients[0])? as usize;
        let mut remainder = self.coefficients.clone();

        while remainder.len() >= divisor.len() && !(remainder.len() == 1 && remainder[0] == 0) {
            let ratio = (Gf256::log(remainder[0])? as usize + 255 - lead_log) % 255;
            let scale = Gf256::exp(ratio);
            for (r, &d) in remainder.iter_mut().zip(&divisor.coefficients) {
                *r ^= Gf256::mul(d, scale);
            }
            let start = remainder
                .iter()
                .position(|&c| c != 0)
                .unwrap_or(remainder.len() - 1);
            remainder.drain(..start);
        }

        Ok(Polynomial {
            coefficients: remainder,
        })
    }

    /// Reed-Solomon generator of degree `ec_count`: prod_{i<ec_count} (x - alpha^i)
    pub fn error_correction_generator(ec_count: usize) -> Polynomial {
        (0..ec_count).fold(Polynomial::new(&[1], 0), |poly, i| {
            poly.multiply(&Polynomial::new(&[1, Gf256::exp(i)], 0))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_shifts() {
        let p = Polynomial::new(&[0, 0, 3, 4], 2);
        assert_eq!(p.coefficients(), &[3, 4, 0, 0]);
        assert_eq!(p.degree(), 3);
        assert!(Polynomial::new(&[0, 0], 5).is_zero());
    }

    #[test]
    fn test_multiply_length() {
        let p = Polynomial::new(&[1, 2, 3], 0);
        let q = Polynomial::new(&[4, 5], 0);
        assert_eq!(p.multiply(&q).len(), 4);
    }

    #[test]
    fn test_generator_polynomials() {
        // Degree 7 generator from the QR standard, as coefficients
        let g7 = Polynomial::error_correction_generator(7);
        assert_eq!(g7.coefficients(), &[1, 127, 122, 154, 164, 11, 68, 117]);

        let g10 = Polynomial::error_correction_generator(10);
        assert_eq!(
            g10.coefficients(),
            &[1, 216, 194, 159, 111, 199, 94, 95, 113, 157, 193]
        );
    }

    #[test]
    fn test_reed_solomon_remainder() {
        // "HELLO WORLD" 1-M data codewords and their 10 ECC codewords
        let data = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
        ];
        let generator = Polynomial::error_correction_generator(10);
        let remainder = Polynomial::new(&data, 10).modulo(&generator).unwrap();
        assert_eq!(
            remainder.coefficients(),
            &[196, 35, 39, 119, 235, 215, 231, 226, 93, 23]
        );
    }

    #[test]
    fn test_modulo_idempotent() {
        let p = Polynomial::new(&[17, 0, 200, 3, 99, 1, 250], 0);
        let d = Polynomial::error_correction_generator(3);
        let once = p.modulo(&d).unwrap();
        assert!(once.len() < d.len());
        assert_eq!(once.modulo(&d).unwrap(), once);
    }

    #[test]
    fn test_modulo_by_zero_fails() {
        let p = Polynomial::new(&[1, 2], 0);
        assert!(p.modulo(&Polynomial::zero()).is_err());
    }
}
