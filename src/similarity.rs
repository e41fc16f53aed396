//! Builds similarity matrices from embeddings. Producing the embeddings themselves (e.g. with a
//! protein language model) is left to the caller.

use itertools::iproduct;

use crate::r#const::COSINE_EPSILON;
use crate::{Error, Result, SimilarityMatrix};

/// Cosine similarity between every embedding of `first` (rows) and every embedding of `second`
/// (columns): `a . b / (|a| |b| + 1e-8)`, accumulated in `f64`.
///
/// All embeddings must share one width. Zero vectors have a similarity of 0 with everything.
pub fn cosine_similarity<A: AsRef<[f32]>, B: AsRef<[f32]>>(
    first: &[A],
    second: &[B],
) -> Result<SimilarityMatrix> {
    let width = first
        .first()
        .map(|e| e.as_ref().len())
        .or_else(|| second.first().map(|e| e.as_ref().len()))
        .unwrap_or(0);
    check_width(first, width)?;
    check_width(second, width)?;

    let first_norms = first.iter().map(|e| norm(e.as_ref())).collect::<Vec<_>>();
    let second_norms = second.iter().map(|e| norm(e.as_ref())).collect::<Vec<_>>();

    let data = iproduct!(0..first.len(), 0..second.len())
        .map(|(i, j)| {
            dot(first[i].as_ref(), second[j].as_ref())
                / (first_norms[i] * second_norms[j] + COSINE_EPSILON)
        })
        .collect();

    SimilarityMatrix::from_vec(first.len(), second.len(), data)
}

fn check_width<E: AsRef<[f32]>>(embeddings: &[E], width: usize) -> Result<()> {
    match embeddings.iter().find(|e| e.as_ref().len() != width) {
        Some(e) => Err(Error::DimensionMismatch {
            expected: width,
            found: e.as_ref().len(),
        }),
        None => Ok(()),
    }
}

#[inline(always)]
fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum()
}

#[inline(always)]
fn norm(a: &[f32]) -> f64 {
    dot(a, a).sqrt()
}
