#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::Extractor;
use crate::{AlignmentSet, ExtractConfig, SimilarityMatrix};

/// Runs an independent extraction for each similarity matrix, returning the results in request
/// order.
///
/// Each request is one unit of work: a single dynamic program has data dependencies along both
/// axes, so parallelism only happens across requests. Uses the rayon thread pool when the
/// `parallel` feature is enabled, otherwise runs sequentially.
pub fn find_alignments_parallel(
    requests: &[SimilarityMatrix],
    config: &ExtractConfig,
) -> Vec<AlignmentSet> {
    let extractor = Extractor::new(config);

    #[cfg(feature = "parallel")]
    let alignments = requests
        .par_iter()
        .map_init(
            || extractor.clone(),
            |extractor, similarity| extractor.find(similarity),
        )
        .collect();

    #[cfg(not(feature = "parallel"))]
    let alignments = {
        let mut extractor = extractor;
        requests
            .iter()
            .map(|similarity| extractor.find(similarity))
            .collect()
    };

    alignments
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::find_alignments;

    #[test]
    fn test_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(5);
        let requests = (0..24)
            .map(|_| {
                let (rows, cols) = (rng.random_range(0..30), rng.random_range(0..30));
                let data = (0..rows * cols).map(|_| rng.random_range(0.0..1.0)).collect();
                SimilarityMatrix::from_vec(rows, cols, data).unwrap()
            })
            .collect::<Vec<_>>();

        let config = ExtractConfig::default();
        let parallel = find_alignments_parallel(&requests, &config);

        assert_eq!(parallel.len(), requests.len());
        for (similarity, alignments) in requests.iter().zip(&parallel) {
            assert_eq!(&find_alignments(similarity, &config), alignments);
        }
    }

    #[test]
    fn test_no_requests() {
        assert!(find_alignments_parallel(&[], &ExtractConfig::default()).is_empty());
    }
}
