/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Dense-vector helpers.

use rayon::prelude::*;

/// Minimum number of elements handed to a Rayon task by the parallel
/// helpers in this crate.
pub const RAYON_MIN_LEN: usize = 1 << 14;

/// Copies `src` into the prefix of `dst`.
///
/// # Panics
///
/// Panics if `src` is longer than `dst`.
pub fn copy_values<T: Copy>(dst: &mut [T], src: &[T]) {
    dst[..src.len()].copy_from_slice(src);
}

/// Copies in parallel `src` into the prefix of `dst`.
///
/// # Panics
///
/// Panics if `src` is longer than `dst`.
pub fn par_copy_values<T: Copy + Send + Sync>(dst: &mut [T], src: &[T]) {
    dst[..src.len()]
        .par_iter_mut()
        .with_min_len(RAYON_MIN_LEN)
        .zip(src.par_iter())
        .for_each(|(d, s)| *d = *s);
}

/// Fills `dst` with `value`.
pub fn fill_value<T: Copy>(dst: &mut [T], value: T) {
    dst.fill(value);
}

/// Fills in parallel `dst` with `value`.
pub fn par_fill_value<T: Copy + Send + Sync>(dst: &mut [T], value: T) {
    dst.par_iter_mut()
        .with_min_len(RAYON_MIN_LEN)
        .for_each(|d| *d = value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_fill() {
        let mut a = vec![0.0; 5];
        copy_values(&mut a, &[1.0, 2.0]);
        assert_eq!(a, vec![1.0, 2.0, 0.0, 0.0, 0.0]);
        par_fill_value(&mut a, 3.0);
        assert_eq!(a, vec![3.0; 5]);
        let src = (0..100_000).map(|x| x as f64).collect::<Vec<_>>();
        let mut b = vec![0.0; 100_001];
        par_copy_values(&mut b, &src);
        assert_eq!(&b[..100_000], &src[..]);
        assert_eq!(b[100_000], 0.0);
        fill_value(&mut b, 1.0);
        assert!(b.iter().all(|&x| x == 1.0));
    }
}
