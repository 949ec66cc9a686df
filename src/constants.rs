//! Constants for board geometry, square weights, and search parameters.
//!
//! The board uses a 1D array representation with a one-cell sentinel margin,
//! so stepping off the playable region always lands on an OUTER cell.
//!
//! Square `10 * row + col` holds row `row` and column `col`, both in `1..=8`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows (and columns) in the playable region.
pub const N: usize = 8;

/// Row stride including the left and right margin cells.
pub const W: usize = N + 2;

/// Total board array size including all padding.
pub const BOARDSIZE: usize = W * W;

/// First playable index (a1).
pub const BOARD_IMIN: usize = W + 1;

/// Last playable index (h8).
pub const BOARD_IMAX: usize = N * W + N;

// =============================================================================
// Direction Offsets
// =============================================================================

/// Offsets to neighboring squares in the 1D board array.
/// Order: NW, N, NE, W, E, SW, S, SE
pub const DIRECTIONS: [isize; 8] = [
    -(W as isize) - 1, // NW
    -(W as isize),     // N
    -(W as isize) + 1, // NE
    -1,                // W
    1,                 // E
    (W as isize) - 1,  // SW
    W as isize,        // S
    (W as isize) + 1,  // SE
];

// =============================================================================
// Static Evaluation
// =============================================================================

/// Per-square weights for the positional evaluator.
///
/// Corners are worth the most; the squares that hand the opponent a corner
/// (C- and X-squares) are negative.
#[rustfmt::skip]
pub const SQUARE_WEIGHTS: [i32; BOARDSIZE] = [
    0,   0,   0,  0,  0,  0,  0,   0,   0, 0,
    0, 120, -20, 20,  5,  5, 20, -20, 120, 0,
    0, -20, -40, -5, -5, -5, -5, -40, -20, 0,
    0,  20,  -5, 15,  3,  3, 15,  -5,  20, 0,
    0,   5,  -5,  3,  3,  3,  3,  -5,   5, 0,
    0,   5,  -5,  3,  3,  3,  3,  -5,   5, 0,
    0,  20,  -5, 15,  3,  3, 15,  -5,  20, 0,
    0, -20, -40, -5, -5, -5, -5, -40, -20, 0,
    0, 120, -20, 20,  5,  5, 20, -20, 120, 0,
    0,   0,   0,  0,  0,  0,  0,   0,   0, 0,
];

/// Value of a won game. Exceeds any weighted evaluation of a live board.
pub const MAX_VALUE: i32 = {
    let mut total = 0;
    let mut i = 0;
    while i < BOARDSIZE {
        total += SQUARE_WEIGHTS[i].abs();
        i += 1;
    }
    total
};

/// Value of a lost game.
pub const MIN_VALUE: i32 = -MAX_VALUE;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default lookahead for minimax and alpha-beta.
pub const DEFAULT_DEPTH: u32 = 4;

/// Default number of playouts per Monte Carlo decision (per candidate for the
/// flat discipline, per decision for the tree-guided one).
pub const DEFAULT_PLAYOUTS: usize = 10;

/// Scale of the random tie-breaking jitter added to table lookups.
pub const LOOKUP_JITTER: f64 = 1.0 / 10_000.0;
