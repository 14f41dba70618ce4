pub mod math;

use std::fmt;

use num::Num;

use crate::utils::sort::radix_sort_u32_soa;

/// ZeroSpVec is a sparse vector where zero is the implicit element.
/// Non-zero entries are held as parallel `inds` / `vals` arrays.
///
/// `inds` is always strictly ascending, so two vectors can be merged
/// with a single linear pass.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num + Copy,
{
    inds: Vec<u32>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Builds a vector from `(index, value)` pairs in any order.
    /// Zero values are dropped; indices must be unique and below `len`.
    pub fn from_entries(len: usize, entries: impl IntoIterator<Item = (u32, N)>) -> Self {
        let (mut inds, mut vals): (Vec<u32>, Vec<N>) = entries
            .into_iter()
            .filter(|(_, v)| !v.is_zero())
            .unzip();
        radix_sort_u32_soa(&mut inds, &mut vals);
        debug_assert!(inds.windows(2).all(|w| w[0] < w[1]), "duplicate index");
        debug_assert!(inds.last().map_or(true, |&i| (i as usize) < len), "index out of range");
        Self { inds, vals, len }
    }

    /// Logical dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored (non-zero) entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// True when no entry is stored
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inds.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<N> {
        if index >= self.len {
            return None;
        }
        let Ok(key) = u32::try_from(index) else {
            return Some(N::zero());
        };
        match self.inds.binary_search(&key) {
            Ok(pos) => Some(self.vals[pos]),
            Err(_) => Some(N::zero()),
        }
    }

    #[inline]
    pub fn as_ind_slice(&self) -> &[u32] {
        &self.inds
    }

    #[inline]
    pub fn as_val_slice(&self) -> &[N] {
        &self.vals
    }

    /// Iterates the stored entries as `(index, value)` in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds
            .iter()
            .zip(self.vals.iter())
            .map(|(&i, &v)| (i as usize, v))
    }

    /// Applies `f` to every stored value in place
    #[inline]
    pub fn map_values_in_place(&mut self, mut f: impl FnMut(N) -> N) {
        for v in self.vals.iter_mut() {
            *v = f(*v);
        }
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

impl<N> fmt::Debug for ZeroSpVec<N>
where
    N: Num + Copy + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZeroSpVec")
            .field("len", &self.len)
            .field("nnz", &self.nnz())
            .field("entries", &self.raw_iter().collect::<Vec<_>>())
            .finish()
    }
}
