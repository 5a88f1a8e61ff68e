//! Amount-in-words rendering for printed documents.
//!
//! ```
//! use akmdocs_words::number_to_words;
//!
//! assert_eq!(
//!     number_to_words(105.5),
//!     "One Hundred and Five Dirhams and Fifty Fils only."
//! );
//! assert_eq!(number_to_words(0.0), "");
//! ```

pub mod amount;
pub mod currency;
pub mod words;

pub use amount::MonetaryAmount;
pub use currency::Currency;
pub use words::{amount_in_words, integer_words, number_to_words, number_to_words_in, words_for_input};
