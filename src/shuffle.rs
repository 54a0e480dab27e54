use crate::source::{PrngSource, RandomSource};

/// Shuffles sequences of arbitrary elements using the Fisher-Yates
/// algorithm, delegating every random choice to the injected
/// [`RandomSource`].
///
/// Elements are moved purely by position; their contents are never
/// inspected, so duplicates shuffle like any other elements.
///
/// ## Example
///
/// ```
/// use karuta::{ReplaySource, Shuffler};
///
/// let mut shuffler = Shuffler::with_source(ReplaySource::new(vec![0.1, 0.3, 0.7]));
/// assert_eq!(shuffler.shuffled(&[1, 2, 3, 4]), vec![3, 2, 4, 1]);
/// ```
pub struct Shuffler<S = PrngSource> {
    source: S,
}

impl Shuffler<PrngSource> {
    /// Creates a shuffler backed by an entropy-seeded [`PrngSource`].
    pub fn new() -> Self {
        Self::with_source(PrngSource::new())
    }

    /// Creates a shuffler whose draw sequence is fixed by `seed`.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self::with_source(PrngSource::from_seed(seed))
    }
}

impl Default for Shuffler<PrngSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> Shuffler<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Returns a shuffled copy of `items`, leaving the input untouched.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }

    /// Shuffles `items` in place.
    ///
    /// Inputs of length 0 or 1 are left unchanged.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.source.next_int(0, i + 1);
            items.swap(i, j);
        }
    }
}
