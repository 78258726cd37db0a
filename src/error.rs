use thiserror::Error;

/// Everything that can go wrong while generating words.
///
/// All of these are detected before the first word is sampled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no candidate words with length between {} and {}", fmt_bound(.min_length.as_ref()), fmt_bound(.max_length.as_ref()))]
    EmptyCandidateSet {
        min_length: Option<usize>,
        max_length: Option<usize>,
    },
    #[error("invalid count range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: usize, max: usize },
    #[error("count range needs both min and max")]
    IncompleteRange,
    #[error("words per string must be at least 1")]
    InvalidGroupSize,
}

fn fmt_bound(bound: Option<&usize>) -> String {
    bound.map_or_else(|| "any".to_string(), |b| b.to_string())
}
