//! Guo-Hall neighborhood decision tables
//!
//! The thinning rule depends only on a pixel's eight neighbors, so
//! every possible neighborhood can be classified up front: one boolean
//! per 8-bit neighborhood code per sub-iteration. [`DecisionTables`]
//! holds both tables as a plain value; it is immutable once built, so
//! callers may construct it once and share it read-only across runs.
//! The underlying rule is exposed as [`is_removable`] and doubles as
//! the conformance reference for the tables.

/// Number of distinct 8-neighbor configurations.
const NEIGHBORHOODS: usize = 256;

/// Parity of one thinning pass.
///
/// Each full Guo-Hall iteration applies two passes with mirrored
/// endpoint masks; alternating the mask keeps the erosion centered
/// instead of drifting toward one corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubIteration {
    First = 0,
    Second = 1,
}

/// Unpack a neighborhood code into the neighbor flags p2..p9.
///
/// Neighbors are named clockwise from north: p2 above, p3 upper right,
/// p4 right, p5 lower right, p6 below, p7 lower left, p8 left, p9
/// upper left. Each contributes one bit, p2 in the low bit.
#[inline]
fn decode_neighbors(code: u8) -> [bool; 8] {
    std::array::from_fn(|i| (code >> i) & 1 != 0)
}

/// The Guo-Hall removal rule for one neighborhood.
///
/// A foreground pixel may be removed when all three hold:
///
/// - `C == 1`: exactly one background-to-foreground transition group
///   around the pixel, so removal cannot split the component
/// - `2 <= min(N1, N2) <= 3`: the pixel is neither a stroke endpoint
///   nor interior bulk
/// - the parity-specific endpoint mask is clear
pub fn is_removable(code: u8, sub: SubIteration) -> bool {
    let [p2, p3, p4, p5, p6, p7, p8, p9] = decode_neighbors(code);

    let c = (!p2 & (p3 | p4)) as u32
        + (!p4 & (p5 | p6)) as u32
        + (!p6 & (p7 | p8)) as u32
        + (!p8 & (p9 | p2)) as u32;
    let n1 = (p9 | p2) as u32 + (p3 | p4) as u32 + (p5 | p6) as u32 + (p7 | p8) as u32;
    let n2 = (p2 | p3) as u32 + (p4 | p5) as u32 + (p6 | p7) as u32 + (p8 | p9) as u32;
    let n = n1.min(n2);
    let mask = match sub {
        SubIteration::First => (p6 | p7 | !p9) & p8,
        SubIteration::Second => (p2 | p3 | !p5) & p4,
    };

    c == 1 && (2..=3).contains(&n) && !mask
}

/// Precomputed removal decisions, one table per sub-iteration.
///
/// Building the tables evaluates [`is_removable`] for all 256 codes
/// and both parities; a table-driven thinning run then classifies each
/// foreground pixel with a single lookup.
#[derive(Debug, Clone)]
pub struct DecisionTables {
    tables: [[bool; NEIGHBORHOODS]; 2],
}

impl DecisionTables {
    /// Evaluate the removal rule for every neighborhood code.
    pub fn build() -> Self {
        let mut tables = [[false; NEIGHBORHOODS]; 2];
        for code in 0..=u8::MAX {
            tables[0][code as usize] = is_removable(code, SubIteration::First);
            tables[1][code as usize] = is_removable(code, SubIteration::Second);
        }
        DecisionTables { tables }
    }

    /// Look up the removal decision for a neighborhood code.
    #[inline]
    pub fn should_remove(&self, code: u8, sub: SubIteration) -> bool {
        self.tables[sub as usize][code as usize]
    }
}

impl Default for DecisionTables {
    fn default() -> Self {
        Self::build()
    }
}

// ============================================================================
// Tests
// ============================================================================
