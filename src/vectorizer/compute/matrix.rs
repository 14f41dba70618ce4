use std::time::Instant;

use num::Float;
use rayon::prelude::*;

use crate::utils::math::vector::ZeroSpVec;

/// Dense all-pairs cosine similarity matrix, row-major.
///
/// Invariants:
/// - square and symmetric (`get(i, j) == get(j, i)` bit for bit)
/// - every entry in [0, 1]
/// - diagonal 1.0 for non-zero vectors, 0.0 for zero vectors
/// - the row and column of a zero vector are all 0.0
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Builds the matrix from L2-normalized vectors.
    ///
    /// With `parallel`, rows are computed on the rayon pool and collected
    /// before the matrix is returned. Both paths compute each entry the same
    /// way and give identical matrices.
    pub fn build<N>(vectors: &[ZeroSpVec<N>], parallel: bool) -> Self
    where
        N: Float + Into<f64> + Send + Sync,
    {
        let start = Instant::now();
        let n = vectors.len();
        let data: Vec<f64> = if parallel {
            (0..n)
                .into_par_iter()
                .map(|i| Self::row_values(vectors, i).collect::<Vec<f64>>())
                .collect::<Vec<Vec<f64>>>()
                .concat()
        } else {
            (0..n).flat_map(|i| Self::row_values(vectors, i)).collect()
        };
        debug_assert_eq!(data.len(), n * n);
        tracing::debug!(
            documents = n,
            parallel,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "similarity matrix built"
        );
        Self { n, data }
    }

    fn row_values<N>(vectors: &[ZeroSpVec<N>], i: usize) -> impl Iterator<Item = f64> + '_
    where
        N: Float + Into<f64>,
    {
        let vi = &vectors[i];
        vectors.iter().enumerate().map(move |(j, vj)| {
            if vi.is_zero() || vj.is_zero() {
                0.0
            } else if i == j {
                1.0
            } else {
                // rounding can push identical documents past 1.0
                vi.dot(vj).clamp(0.0, 1.0)
            }
        })
    }

    /// Number of documents (rows)
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry (i, j), `None` when either index is out of range
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.n || j >= self.n {
            return None;
        }
        Some(self.data[i * self.n + j])
    }

    /// Row `i`, `None` when out of range
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.n {
            return None;
        }
        Some(&self.data[i * self.n..(i + 1) * self.n])
    }
}
