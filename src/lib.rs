//! Randomization toolbox for flashcard study decks.
//!
//! Everything is built around one small capability interface,
//! [`RandomSource`]: the Fisher-Yates [`Shuffler`] delegates each random
//! choice to it and never touches a concrete generator. Production code
//! uses the xoshiro-backed [`PrngSource`]; tests inject a [`ReplaySource`]
//! with canned float values, which makes every permutation fully
//! predictable.
//!
//! [`Deck`] is the consuming side: it keeps a card set in its original
//! order next to the order currently shown, with shuffle/reset and
//! wrap-around navigation.
//!
//! ## Example
//!
//! ```
//! use karuta::Deck;
//!
//! let mut deck = Deck::new(vec!["uno", "dos", "tres"]);
//! assert_eq!(deck.current(), Some(&"uno"));
//!
//! deck.advance();
//! assert_eq!(deck.current(), Some(&"dos"));
//!
//! deck.shuffle();
//! assert!(deck.is_shuffled());
//!
//! deck.reset();
//! assert!(!deck.is_shuffled());
//! ```

mod card;
mod deck;
mod prng;
mod shuffle;
mod source;

pub use card::Card;
pub use deck::Deck;
pub use prng::make_prng;
pub use shuffle::Shuffler;
pub use source::{PrngSource, RandomSource, ReplaySource};
