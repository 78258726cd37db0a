//! Random English words for fixtures, placeholder text and sample data.
//!
//! ```
//! use random_words::Config;
//!
//! let phrase = random_words::generate(&Config::exactly(5).join(" ").seed("seed1")).unwrap();
//! assert_eq!(phrase.as_str().unwrap().split(' ').count(), 5);
//! ```

use tracing::debug;
use tracing::instrument;

pub mod config;
pub mod error;
pub mod present;
pub mod rng;
pub mod select;
pub mod word_list;

pub use config::Case;
pub use config::Config;
pub use config::Join;
pub use config::LengthBounds;
pub use config::Seed;
pub use config::WordFormatter;
pub use error::Error;
pub use present::Words;
pub use rng::WordRng;
pub use word_list::WordList;

/// Generate words from the bundled English list.
///
/// # Errors
///
/// See [`generate_from`].
pub fn generate(config: &Config) -> Result<Words, Error> {
    generate_from(&WordList::ENGLISH, config)
}

/// Generate words from `list`.
///
/// The count is resolved and the candidate pool checked before any word is
/// drawn, so a failing call never yields partial output.
///
/// # Errors
///
/// Returns an error for an invalid count range or group size, or when the
/// length bounds leave no candidates and at least one word is needed.
#[instrument(skip_all)]
pub fn generate_from(list: &WordList<'_>, config: &Config) -> Result<Words, Error> {
    let mut rng = WordRng::new(config.seed.as_ref());
    let n = select::resolve_count(config, &mut rng)?;
    let pool = list.filter(&config.length);
    debug!(n, candidates = pool.len(), seeded = config.seed.is_some());
    if n > 0 && pool.is_empty() {
        return Err(Error::EmptyCandidateSet {
            min_length: config.length.min,
            max_length: config.length.max,
        });
    }
    let words = select::sample(&pool, &mut rng, n);
    Ok(present::present(&words, config))
}

/// How many words of the bundled English list fall within `bounds`.
#[must_use]
pub fn count(bounds: &LengthBounds) -> usize {
    WordList::ENGLISH.count(bounds)
}
