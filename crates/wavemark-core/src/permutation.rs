//! Keyed slot order.
//!
//! Embedder and extractor both walk the slots of an image in the order of a
//! [`Permutation`] derived from the shared seed. The seed is the only secret
//! the scheme has: without it the positions of the frame bits are unknown.

/// Mulberry32, a small 32-bit state pseudo-random generator.
///
/// Deterministic across platforms, the same seed always yields the same
/// sequence.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform in `0..=upper`
    fn index_up_to(&mut self, upper: usize) -> usize {
        (self.next_f64() * (upper + 1) as f64) as usize
    }
}

/// Pseudo-random permutation of the slot indices `0..len`.
///
/// The permutation is deterministic given the same seed, allowing the
/// extractor to reconstruct the same ordering used during embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    /// `indices[position]` is the slot visited at `position`
    indices: Vec<usize>,
}

impl Permutation {
    /// Shuffled order for a seed, identity order without one
    pub fn new(length: usize, seed: Option<u32>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed, length),
            None => Self::identity(length),
        }
    }

    /// Fisher-Yates shuffle of `0..length`, driven by [`Mulberry32`]
    pub fn from_seed(seed: u32, length: usize) -> Self {
        let mut rng = Mulberry32::new(seed);
        let mut indices: Vec<usize> = (0..length).collect();

        for i in (1..length).rev() {
            let j = rng.index_up_to(i);
            indices.swap(i, j);
        }

        Permutation { indices }
    }

    /// Create an identity permutation (no shuffling).
    ///
    /// Useful for testing, but every slot is then at a predictable position.
    pub fn identity(length: usize) -> Self {
        Permutation {
            indices: (0..length).collect(),
        }
    }

    /// The slot visited at `position`
    #[inline]
    pub fn slot(&self, position: usize) -> usize {
        self.indices[position]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Slots in visiting order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}
