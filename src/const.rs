// Scoring
pub const GAP_OPEN: f64 = -0.2;
pub const GAP_EXTEND: f64 = -0.1;
/// Subtracted from every similarity before it contributes to a diagonal step
pub const SCORE_THRESHOLD: f64 = 0.5;

// Extraction
pub const MIN_SCORE: f64 = 1.0;
pub const MIN_LENGTH: usize = 3;
pub const MAX_ALIGNMENTS: usize = 10;

// Chunking
pub const CHUNK_LEN: usize = 10;
pub const CHUNK_STRIDE: usize = 5;

/// Added to the product of norms so zero vectors produce a similarity of 0
pub const COSINE_EPSILON: f64 = 1e-8;
