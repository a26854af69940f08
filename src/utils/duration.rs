/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::time::{Duration, Instant};

/// Runs `f` `repeat` times back to back and returns the average duration
/// of a run.
///
/// A `repeat` of zero is treated as one.
pub fn measure_duration(mut f: impl FnMut(), repeat: usize) -> Duration {
    let repeat = repeat.max(1);
    let start = Instant::now();
    for _ in 0..repeat {
        f();
    }
    start.elapsed() / repeat as u32
}

/// Pretty-prints seconds in a human-readable format.
pub fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    match hours {
        0 => {}
        1 => result.push_str("1 hour "),
        _ => result.push_str(&format!("{} hours ", hours)),
    }
    match minutes {
        0 => {}
        1 => result.push_str("1 minute "),
        _ => result.push_str(&format!("{} minutes ", minutes)),
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_duration() {
        let mut count = 0;
        let d = measure_duration(|| count += 1, 3);
        assert_eq!(count, 3);
        assert!(d < Duration::from_secs(1));
        measure_duration(|| count += 1, 0);
        assert_eq!(count, 4);
    }

    #[test]
    fn test_pretty_print_elapsed() {
        assert_eq!(pretty_print_elapsed(1.5), "1.500 seconds (1.5s)");
        assert_eq!(
            pretty_print_elapsed(3725.0),
            "1 hour 2 minutes 5.000 seconds (3725s)"
        );
    }
}
