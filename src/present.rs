use std::fmt;

use serde::Serialize;

use crate::config::Config;
use crate::config::Join;

/// The result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Words {
    /// A single word, when one was asked for and nothing else.
    Single(String),
    /// One string per unit.
    Many(Vec<String>),
    /// Every unit concatenated with the join separator.
    Joined(String),
}

impl Words {
    /// The string form, if this is not a sequence.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Words::Single(s) | Words::Joined(s) => Some(s),
            Words::Many(_) => None,
        }
    }

    /// The units, with a bare or joined string as a single unit.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Words::Single(s) | Words::Joined(s) => vec![s],
            Words::Many(units) => units,
        }
    }

    /// Number of units; a string counts as one.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Words::Single(_) | Words::Joined(_) => 1,
            Words::Many(units) => units.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Words::Single(s) | Words::Joined(s) => s.is_empty(),
            Words::Many(units) => units.is_empty(),
        }
    }
}

impl fmt::Display for Words {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Words::Single(s) | Words::Joined(s) => f.write_str(s),
            Words::Many(units) => {
                for unit in units {
                    writeln!(f, "{unit}")?;
                }
                Ok(())
            }
        }
    }
}

/// Format, group and join sampled words.
#[must_use]
pub fn present(words: &[&str], config: &Config) -> Words {
    let formatted: Vec<String> = match &config.formatter {
        Some(formatter) => words.iter().map(|w| formatter.format(w)).collect(),
        None => words.iter().map(ToString::to_string).collect(),
    };

    let requested = config.words_per_string.filter(|&n| n > 1);
    let group = requested.filter(|&n| formatted.len() > n);
    let units = match group {
        Some(size) => formatted
            .chunks(size)
            .map(|chunk| chunk.join(config.unit_separator()))
            .collect(),
        None => formatted,
    };

    match &config.join {
        Join::JoinWith(sep) => Words::Joined(units.join(sep.as_str())),
        Join::NoJoin if requested.is_none() && units.len() == 1 => {
            Words::Single(units.into_iter().next().unwrap_or_default())
        }
        Join::NoJoin => Words::Many(units),
    }
}
