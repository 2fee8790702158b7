use crate::error::QrError;
use std::fmt;
use std::str::FromStr;

/// QR code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol (21x21 modules)
    pub const MIN: Version = Version(1);
    /// Largest symbol (177x177 modules)
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1..=40
    pub fn new(number: u8) -> Result<Self, QrError> {
        if (1..=40).contains(&number) {
            Ok(Version(number))
        } else {
            Err(QrError::InvalidVersion(number))
        }
    }

    /// Get the version number
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub const fn size(self) -> usize {
        4 * self.0 as usize + 17
    }

    /// All versions in increasing order
    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// All levels, lowest redundancy first
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Row index into the block tables (L=0, M=1, Q=2, H=3)
    pub const fn index(self) -> usize {
        match self {
            ECLevel::L => 0,
            ECLevel::M => 1,
            ECLevel::Q => 2,
            ECLevel::H => 3,
        }
    }

    /// Two-bit indicator written into the format information (01=L, 00=M, 11=Q, 10=H)
    pub const fn format_bits(self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(ECLevel::L),
            "M" | "MEDIUM" => Ok(ECLevel::M),
            "Q" | "QUARTILE" => Ok(ECLevel::Q),
            "H" | "HIGH" => Ok(ECLevel::H),
            _ => Err(QrError::UnknownEcLevel(s.to_string())),
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i*j)%3 + (i+j)%2) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All patterns in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its index
    pub fn new(index: u8) -> Result<Self, QrError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(QrError::InvalidMask(index))
    }

    /// Pattern index (0-7)
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Check if module at (i, j) = (row, column) should be flipped
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i * j) % 3) + ((i + j) % 2)) % 2 == 0,
        }
    }
}

/// A finished QR symbol: every module resolved to light or dark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    version: Version,
    error_correction: ECLevel,
    mask_pattern: MaskPattern,
    /// Row-major, true = dark
    modules: Vec<bool>,
}

impl QrSymbol {
    pub(crate) fn new(
        version: Version,
        error_correction: ECLevel,
        mask_pattern: MaskPattern,
        modules: Vec<bool>,
    ) -> Self {
        debug_assert_eq!(modules.len(), version.size() * version.size());
        Self {
            version,
            error_correction,
            mask_pattern,
            modules,
        }
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level
    pub fn error_correction(&self) -> ECLevel {
        self.error_correction
    }

    /// Mask pattern applied to the data modules
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Width and height in modules
    pub fn size(&self) -> usize {
        self.version.size()
    }

    /// Whether the module at (row, col) is dark. Out of bounds is light.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        let size = self.size();
        row < size && col < size && self.modules[row * size + col]
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }

    /// Rows of modules, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.modules.chunks(self.size())
    }

    /// Render as text, one line per row ('#' dark, '.' light)
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.size() * (self.size() + 1));
        for row in self.rows() {
            out.extend(row.iter().map(|&dark| if dark { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::MIN.size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::MAX.size(), 177);
        assert_eq!(Version::all().count(), 40);
    }

    #[test]
    fn test_version_bounds() {
        assert_eq!(Version::new(0), Err(QrError::InvalidVersion(0)));
        assert_eq!(Version::new(41), Err(QrError::InvalidVersion(41)));
    }

    #[test]
    fn test_ec_level() {
        assert_eq!("l".parse::<ECLevel>(), Ok(ECLevel::L));
        assert_eq!(" Q ".parse::<ECLevel>(), Ok(ECLevel::Q));
        assert_eq!("high".parse::<ECLevel>(), Ok(ECLevel::H));
        assert!("X".parse::<ECLevel>().is_err());
        assert_eq!(ECLevel::M.format_bits(), 0);
        assert_eq!(ECLevel::H.format_bits(), 2);
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));
        assert_eq!(MaskPattern::new(7), Ok(MaskPattern::Pattern7));
        assert_eq!(MaskPattern::new(8), Err(QrError::InvalidMask(8)));
    }

    #[test]
    fn test_mask_seven_formula() {
        // ((i*j)%3 + (i+j)%2) % 2 at (1, 2): (2 + 1) % 2 = 1
        assert!(!MaskPattern::Pattern7.is_masked(1, 2));
        // (2, 2): (1 + 0) % 2 = 1
        assert!(!MaskPattern::Pattern7.is_masked(2, 2));
        // (1, 3): (0 + 0) % 2 = 0
        assert!(MaskPattern::Pattern7.is_masked(1, 3));
    }
}
