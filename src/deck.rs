use crate::shuffle::Shuffler;
use crate::source::{PrngSource, RandomSource};

/// Study-session state for one set of flashcards.
///
/// Holds the cards in their original order next to the order currently
/// shown to the user, plus a cursor and an answer-visibility flag.
/// [`shuffle`](Deck::shuffle) replaces the displayed order with a fresh
/// permutation of the original; [`reset`](Deck::reset) reverts it. The
/// original order is never modified, so resetting is always exact.
pub struct Deck<T, S = PrngSource> {
    original: Vec<T>,
    displayed: Vec<T>,
    shuffler: Shuffler<S>,
    shuffled: bool,
    position: usize,
    answer_shown: bool,
}

impl<T: Clone> Deck<T> {
    /// Creates a deck shuffled by an entropy-seeded [`PrngSource`].
    pub fn new(cards: Vec<T>) -> Self {
        Self::with_source(cards, PrngSource::new())
    }
}

impl<T: Clone, S: RandomSource> Deck<T, S> {
    /// Creates a deck with an injected randomness source.
    pub fn with_source(cards: Vec<T>, source: S) -> Self {
        Self {
            displayed: cards.clone(),
            original: cards,
            shuffler: Shuffler::with_source(source),
            shuffled: false,
            position: 0,
            answer_shown: false,
        }
    }

    /// Shows a fresh permutation of the original order.
    pub fn shuffle(&mut self) {
        self.displayed = self.shuffler.shuffled(&self.original);
        self.shuffled = true;
    }

    /// Reverts to the original order.
    pub fn reset(&mut self) {
        self.displayed = self.original.clone();
        self.shuffled = false;
    }

    /// Replaces the whole card set, e.g. after the data layer re-fetched.
    /// Clears the shuffle state and rewinds the cursor.
    pub fn reload(&mut self, cards: Vec<T>) {
        self.displayed = cards.clone();
        self.original = cards;
        self.shuffled = false;
        self.position = 0;
        self.answer_shown = false;
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// The card under the cursor, or `None` for an empty deck.
    pub fn current(&self) -> Option<&T> {
        self.displayed.get(self.position)
    }

    /// Moves to the next card, wrapping past the end. Hides the answer.
    pub fn advance(&mut self) {
        if self.displayed.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.displayed.len();
        self.answer_shown = false;
    }

    /// Moves to the previous card, wrapping past the start. Hides the answer.
    pub fn back(&mut self) {
        if self.displayed.is_empty() {
            return;
        }
        self.position = (self.position + self.displayed.len() - 1) % self.displayed.len();
        self.answer_shown = false;
    }

    pub fn toggle_answer(&mut self) {
        self.answer_shown = !self.answer_shown;
    }

    pub fn answer_shown(&self) -> bool {
        self.answer_shown
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The cards in their currently displayed order.
    pub fn cards(&self) -> &[T] {
        &self.displayed
    }

    pub fn len(&self) -> usize {
        self.displayed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }
}
