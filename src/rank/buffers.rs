/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// A pair of rank vectors with exchangeable roles.
///
/// One vector is the _previous_ approximation, which is read during an
/// iteration, and the other is the _current_ one, which is written.
/// [`swap`](RankBuffers::swap) exchanges the roles without copying.
/// Asynchronous iterations use only the previous vector.
#[derive(Debug, Clone)]
pub struct RankBuffers {
    buffers: [Box<[f64]>; 2],
    previous: usize,
}

impl RankBuffers {
    /// Creates two zero-filled vectors of length `len`.
    pub fn new(len: usize) -> Self {
        Self {
            buffers: [
                vec![0.0; len].into_boxed_slice(),
                vec![0.0; len].into_boxed_slice(),
            ],
            previous: 0,
        }
    }

    /// Returns the length of the vectors.
    pub fn len(&self) -> usize {
        self.buffers[0].len()
    }

    /// Returns true if the vectors are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the previous approximation.
    pub fn previous(&self) -> &[f64] {
        &self.buffers[self.previous]
    }

    /// Returns the previous approximation mutably.
    pub fn previous_mut(&mut self) -> &mut [f64] {
        &mut self.buffers[self.previous]
    }

    /// Returns the current approximation.
    pub fn current(&self) -> &[f64] {
        &self.buffers[1 - self.previous]
    }

    /// Returns the previous approximation and, mutably, the current one.
    pub fn split_mut(&mut self) -> (&[f64], &mut [f64]) {
        let [first, second] = &mut self.buffers;
        let (previous, current) = if self.previous == 0 {
            (first, second)
        } else {
            (second, first)
        };
        (&**previous, &mut **current)
    }

    /// Exchanges the roles of the two vectors.
    pub fn swap(&mut self) {
        self.previous = 1 - self.previous;
    }

    /// Consumes the buffers and returns the previous approximation.
    pub fn into_previous(self) -> Vec<f64> {
        let [first, second] = self.buffers;
        let previous = if self.previous == 0 { first } else { second };
        previous.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap() {
        let mut buffers = RankBuffers::new(3);
        assert_eq!(buffers.len(), 3);
        buffers.previous_mut().fill(1.0);
        {
            let (previous, current) = buffers.split_mut();
            assert_eq!(previous, &[1.0; 3]);
            current.fill(2.0);
        }
        buffers.swap();
        assert_eq!(buffers.previous(), &[2.0; 3]);
        assert_eq!(buffers.current(), &[1.0; 3]);
        {
            let (previous, current) = buffers.split_mut();
            assert_eq!(previous, &[2.0; 3]);
            current[0] = 3.0;
        }
        buffers.swap();
        assert_eq!(buffers.into_previous(), vec![3.0, 1.0, 1.0]);
    }
}
