use std::cmp::Ordering;

use num::Float;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Float + Into<f64>,
{
    /// Dot product accumulated in f64.
    ///
    /// Walks both index arrays in ascending order, so `a.dot(&b)` and
    /// `b.dot(&a)` add the same products in the same order and are
    /// bit-identical.
    ///
    /// # Arguments
    /// * `other` - vector of the same dimension
    ///
    /// # Returns
    /// * `f64` - sum of products over the shared indices
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let self_inds = self.as_ind_slice();
        let self_vals = self.as_val_slice();
        let other_inds = other.as_ind_slice();
        let other_vals = other.as_val_slice();

        let mut result = 0.0_f64;
        let mut i = 0;
        let mut j = 0;
        while i < self_inds.len() && j < other_inds.len() {
            match self_inds[i].cmp(&other_inds[j]) {
                Ordering::Equal => {
                    let a: f64 = self_vals[i].into();
                    let b: f64 = other_vals[j].into();
                    result += a * b;
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    /// Squared Euclidean norm
    ///
    /// # Returns
    /// * `f64` - sum of squared stored values
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.as_val_slice()
            .iter()
            .map(|&v| {
                let v: f64 = v.into();
                v * v
            })
            .sum()
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Scales the vector to unit Euclidean length.
    /// A zero vector is left untouched.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            self.map_values_in_place(|v| {
                let v: f64 = v.into();
                let scaled = v / norm;
                num::cast::<f64, N>(scaled).unwrap_or_else(N::zero)
            });
        }
    }
}
