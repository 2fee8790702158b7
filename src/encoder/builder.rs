/// Symbol builder: version selection, codewords, mask search and final layout
use crate::config;
use crate::encoder::codewords::create_codewords;
use crate::encoder::function_patterns::place_function_patterns;
use crate::encoder::penalty::{PenaltyScore, penalty_score};
use crate::encoder::placement::DataPlacer;
use crate::encoder::segment::Segment;
use crate::encoder::tables::data_codewords;
use crate::error::QrError;
use crate::models::{ECLevel, MaskPattern, ModuleMatrix, QrSymbol, Version};
use rayon::prelude::*;
use tracing::debug;

/// Codewords built for one version, reused until data changes
#[derive(Debug, Clone)]
struct CachedCodewords {
    version: Version,
    codewords: Vec<u8>,
}

/// Builds a QR symbol from byte segments.
///
/// ```
/// use pix_qr::encoder::QrBuilder;
/// use pix_qr::ECLevel;
///
/// let mut builder = QrBuilder::new(ECLevel::M);
/// builder.add_data("HELLO");
/// let symbol = builder.build().unwrap();
/// assert_eq!(symbol.version().number(), 1);
/// assert_eq!(symbol.size(), 21);
/// ```
#[derive(Debug, Clone)]
pub struct QrBuilder {
    ec_level: ECLevel,
    version: Option<Version>,
    mask: Option<MaskPattern>,
    parallel: bool,
    segments: Vec<Segment>,
    cache: Option<CachedCodewords>,
}

impl QrBuilder {
    /// Empty builder with automatic version and mask selection
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            version: None,
            mask: None,
            parallel: config::parallel_masks(),
            segments: Vec::new(),
            cache: None,
        }
    }

    /// Pin the version instead of picking the smallest that fits
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self.cache = None;
        self
    }

    /// Pin the mask pattern instead of searching for the lowest penalty
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Evaluate mask trials on the rayon pool (true) or sequentially
    pub fn with_parallel_masks(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Append a byte-mode chunk
    pub fn add_data(&mut self, data: impl Into<Vec<u8>>) -> &mut Self {
        self.add_segment(Segment::bytes(data))
    }

    /// Append an already built segment
    pub fn add_segment(&mut self, segment: Segment) -> &mut Self {
        self.segments.push(segment);
        self.cache = None;
        self
    }

    /// Requested error correction level
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Segments added so far, in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total content length in bytes
    pub fn data_len(&self) -> usize {
        self.segments.iter().map(Segment::char_count).sum()
    }

    /// Requested version, or the smallest one whose data capacity holds
    /// every segment
    pub fn select_version(&self) -> Result<Version, QrError> {
        if let Some(version) = self.version {
            return Ok(version);
        }
        for version in Version::all() {
            let bits: Option<usize> = self.segments.iter().map(|s| s.bit_length(version)).sum();
            let Some(bits) = bits else {
                continue;
            };
            if bits <= data_codewords(version, self.ec_level) * 8 {
                debug!(
                    version = version.number(),
                    bits,
                    ec_level = ?self.ec_level,
                    "version selected"
                );
                return Ok(version);
            }
        }
        Err(QrError::DataTooLong {
            len: self.data_len(),
            ec_level: self.ec_level,
        })
    }

    fn codewords(&mut self) -> Result<CachedCodewords, QrError> {
        let version = self.select_version()?;
        if let Some(cache) = &self.cache {
            if cache.version == version {
                return Ok(cache.clone());
            }
        }
        let codewords = create_codewords(&self.segments, version, self.ec_level)?;
        let cache = CachedCodewords { version, codewords };
        self.cache = Some(cache.clone());
        Ok(cache)
    }

    /// Penalty of each mask candidate, in pattern order. Trials reserve the
    /// format and version areas as light modules.
    pub fn mask_scores(&mut self) -> Result<Vec<PenaltyScore>, QrError> {
        let CachedCodewords { version, codewords } = self.codewords()?;
        let ec_level = self.ec_level;
        let trial = |mask: &MaskPattern| {
            penalty_score(&layout(version, ec_level, *mask, &codewords, true))
        };
        let scores: Vec<PenaltyScore> = if self.parallel {
            MaskPattern::ALL.par_iter().map(trial).collect()
        } else {
            MaskPattern::ALL.iter().map(trial).collect()
        };
        debug!(
            version = version.number(),
            scores = ?scores.iter().map(PenaltyScore::total).collect::<Vec<_>>(),
            "mask penalties"
        );
        Ok(scores)
    }

    /// Lay out the final symbol
    pub fn build(&mut self) -> Result<QrSymbol, QrError> {
        let mask = match self.mask {
            Some(mask) => mask,
            None => {
                let scores = self.mask_scores()?;
                best_mask(&scores)
            }
        };
        let CachedCodewords { version, codewords } = self.codewords()?;
        debug!(version = version.number(), mask = mask.index(), "mask chosen");

        let matrix = layout(version, self.ec_level, mask, &codewords, false);
        let modules = matrix.into_modules().map_err(|(row, col)| {
            QrError::InvalidArgument(format!("module ({row}, {col}) left unset"))
        })?;
        Ok(QrSymbol::new(version, self.ec_level, mask, modules))
    }
}

/// Lowest total wins; ties go to the lower pattern index
fn best_mask(scores: &[PenaltyScore]) -> MaskPattern {
    MaskPattern::ALL
        .iter()
        .zip(scores)
        .min_by_key(|(mask, score)| (score.total(), mask.index()))
        .map(|(mask, _)| *mask)
        .unwrap_or(MaskPattern::Pattern0)
}

/// Fresh matrix with function patterns and masked data for one candidate
fn layout(
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    codewords: &[u8],
    trial: bool,
) -> ModuleMatrix {
    let mut matrix = ModuleMatrix::new(version.size());
    place_function_patterns(&mut matrix, version, ec_level, mask, trial);
    DataPlacer::place(&mut matrix, codewords, mask);
    matrix
}
