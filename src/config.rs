//! Process-wide defaults read once from the environment
//!
//! | Variable               | Default | Range            |
//! |------------------------|---------|------------------|
//! | `PIXQR_CELL_SIZE`      | 4       | 1..=64           |
//! | `PIXQR_MARGIN`         | 4       | 0..=64           |
//! | `PIXQR_EC_LEVEL`       | Q       | L, M, Q, H       |
//! | `PIXQR_PARALLEL_MASKS` | 1       | 0 = sequential   |
//!
//! Unparseable values fall back to the default.

use crate::models::ECLevel;
use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

fn parse_env_ec_level(name: &str, default: ECLevel) -> ECLevel {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<ECLevel>().ok())
        .unwrap_or(default)
}

static CELL_SIZE: OnceLock<usize> = OnceLock::new();

/// Default pixels per module for SVG output
pub fn default_cell_size() -> usize {
    *CELL_SIZE.get_or_init(|| parse_env_usize("PIXQR_CELL_SIZE", 4).clamp(1, 64))
}

static MARGIN: OnceLock<usize> = OnceLock::new();

/// Default quiet-zone width in pixels for SVG output
pub fn default_margin() -> usize {
    *MARGIN.get_or_init(|| parse_env_usize("PIXQR_MARGIN", 4).min(64))
}

static EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// Default error correction level for PIX symbols
pub fn default_ec_level() -> ECLevel {
    *EC_LEVEL.get_or_init(|| parse_env_ec_level("PIXQR_EC_LEVEL", ECLevel::Q))
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

/// Whether the eight mask trials run on the rayon pool
pub fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("PIXQR_PARALLEL_MASKS", true))
}
