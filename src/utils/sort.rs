use core::mem;

/// Sorts a sparse vector stored as SoA (inds/vals) by index, ascending.
/// - Reorders vals alongside their index
/// - Stable for equal keys
///
/// LSD radix over the four bytes of a u32 key, each pass O(n + 256).
/// Small inputs take an insertion sort instead of allocating scratch.
#[inline]
pub fn radix_sort_u32_soa<N: Copy>(inds: &mut [u32], vals: &mut [N]) {
    assert_eq!(inds.len(), vals.len());
    let n = inds.len();
    if n <= 1 {
        return;
    }
    if n <= 32 {
        insertion_sort_u32_soa(inds, vals);
        return;
    }

    let mut src_inds = inds.to_vec();
    let mut src_vals = vals.to_vec();
    let mut dst_inds = vec![0u32; n];
    let mut dst_vals = vals.to_vec();

    for shift in [0u32, 8, 16, 24] {
        let mut count = [0usize; 256];
        for &k in &src_inds {
            count[((k >> shift) & 0xFF) as usize] += 1;
        }

        // prefix sum -> start positions
        let mut sum = 0usize;
        for c in count.iter_mut() {
            let tmp = *c;
            *c = sum;
            sum += tmp;
        }

        for (&k, &v) in src_inds.iter().zip(&src_vals) {
            let b = ((k >> shift) & 0xFF) as usize;
            let pos = count[b];
            count[b] = pos + 1;
            dst_inds[pos] = k;
            dst_vals[pos] = v;
        }

        mem::swap(&mut src_inds, &mut dst_inds);
        mem::swap(&mut src_vals, &mut dst_vals);
    }

    inds.copy_from_slice(&src_inds);
    vals.copy_from_slice(&src_vals);
}

#[inline]
fn insertion_sort_u32_soa<N: Copy>(inds: &mut [u32], vals: &mut [N]) {
    let n = inds.len();
    for i in 1..n {
        let mut j = i;
        while j > 0 && inds[j] < inds[j - 1] {
            inds.swap(j, j - 1);
            vals.swap(j, j - 1);
            j -= 1;
        }
    }
}
