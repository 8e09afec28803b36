//! Repetition code, the forward error correction of the frame.
//!
//! Trades slots for robustness: with `reps` copies a bit survives as long as
//! more than half of its copies do.

/// Repeats every bit `reps` times in place, `1011` with 2 reps is `11001111`
pub fn repeat(bits: &[bool], reps: usize) -> Vec<bool> {
    bits.iter()
        .flat_map(|&bit| std::iter::repeat(bit).take(reps))
        .collect()
}

/// Collapses every group of `reps` bits into one.
///
/// A group yields `1` only if strictly more than half of its bits are set,
/// so ties (possible with an even `reps`) yield `0`. A short trailing group
/// is voted against the full `reps` as well.
pub fn majority(bits: &[bool], reps: usize) -> Vec<bool> {
    if reps <= 1 {
        return bits.to_vec();
    }

    bits.chunks(reps)
        .map(|group| 2 * group.iter().filter(|&&b| b).count() > reps)
        .collect()
}
