use crate::config::Config;
use crate::error::Error;
use crate::rng::WordRng;

/// Work out how many words one call produces.
///
/// A `min..=max` range costs one draw from `rng` unless it is a single value.
///
/// # Errors
///
/// Fails when the range is inverted or only half specified, or when
/// `words_per_string` is zero.
pub fn resolve_count(config: &Config, rng: &mut WordRng) -> Result<usize, Error> {
    if config.words_per_string == Some(0) {
        return Err(Error::InvalidGroupSize);
    }
    if let Some(exactly) = config.exactly {
        return Ok(exactly);
    }
    match (config.min, config.max) {
        (Some(min), Some(max)) if min > max => Err(Error::InvalidRange { min, max }),
        (Some(min), Some(max)) if min == max => Ok(min),
        (Some(min), Some(max)) => Ok(min + rng.index((max - min).saturating_add(1))),
        (None, None) => Ok(1),
        _ => Err(Error::IncompleteRange),
    }
}

/// Draw `n` words from `pool` with replacement.
pub(crate) fn sample<'a>(pool: &[&'a str], rng: &mut WordRng, n: usize) -> Vec<&'a str> {
    if n == 0 {
        return Vec::new();
    }
    (0..n).map(|_| pool[rng.index(pool.len())]).collect()
}
