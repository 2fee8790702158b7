/// Mask penalty scoring
use crate::models::ModuleMatrix;

const RUN_WEIGHT: u32 = 3;
const BLOCK_WEIGHT: u32 = 3;
const FINDER_LIKE_WEIGHT: u32 = 40;
const BALANCE_WEIGHT: u32 = 10;

/// dark, light, dark, dark, dark, light, dark
const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];

/// Penalty of a laid-out symbol, broken down by rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PenaltyScore {
    /// Runs of five or more same-colored modules
    pub runs: u32,
    /// 2x2 same-colored blocks
    pub blocks: u32,
    /// Finder-like 1:1:3:1:1 sequences
    pub finder_like: u32,
    /// Deviation of the dark ratio from 50%
    pub balance: u32,
}

impl PenaltyScore {
    /// Sum of the four rules
    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.finder_like + self.balance
    }
}

/// Score a fully populated matrix
pub fn penalty_score(matrix: &ModuleMatrix) -> PenaltyScore {
    let size = matrix.size();
    let rows: Vec<Vec<bool>> = (0..size)
        .map(|r| (0..size).map(|c| matrix.is_dark(r, c)).collect())
        .collect();
    let columns: Vec<Vec<bool>> = (0..size)
        .map(|c| (0..size).map(|r| matrix.is_dark(r, c)).collect())
        .collect();

    let runs = rows
        .iter()
        .chain(columns.iter())
        .map(|line| run_penalty(line))
        .sum();

    let mut blocks = 0;
    for r in 0..size.saturating_sub(1) {
        for c in 0..size.saturating_sub(1) {
            let color = rows[r][c];
            if rows[r][c + 1] == color && rows[r + 1][c] == color && rows[r + 1][c + 1] == color {
                blocks += BLOCK_WEIGHT;
            }
        }
    }

    let finder_like = rows
        .iter()
        .chain(columns.iter())
        .map(|line| {
            line.windows(FINDER_LIKE.len())
                .filter(|w| *w == &FINDER_LIKE[..])
                .count() as u32
                * FINDER_LIKE_WEIGHT
        })
        .sum();

    let total = size * size;
    let dark = matrix.dark_count();
    let deviation = (100 * dark).abs_diff(50 * total) / (5 * total);
    let balance = deviation as u32 * BALANCE_WEIGHT;

    PenaltyScore {
        runs,
        blocks,
        finder_like,
        balance,
    }
}

/// 3 + (length - 5) for every maximal same-color run of length >= 5
fn run_penalty(line: &[bool]) -> u32 {
    let mut penalty = 0;
    let mut run = 1u32;
    for i in 1..=line.len() {
        if i < line.len() && line[i] == line[i - 1] {
            run += 1;
            continue;
        }
        if run >= 5 {
            penalty += RUN_WEIGHT + (run - 5);
        }
        run = 1;
    }
    penalty
}
