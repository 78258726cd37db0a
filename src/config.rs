use std::fmt;
use std::sync::Arc;

/// How the final units are combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Join {
    /// Return the units as a sequence.
    #[default]
    NoJoin,
    /// Concatenate every unit into one string with this separator.
    JoinWith(String),
}

impl<S: Into<String>> From<Option<S>> for Join {
    fn from(join: Option<S>) -> Self {
        join.map_or(Self::NoJoin, |s| Self::JoinWith(s.into()))
    }
}

/// Opaque seed. Any string works; integers are seeded through their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed(String);

impl Seed {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&str> for Seed {
    fn from(seed: &str) -> Self {
        Self(seed.to_string())
    }
}

impl From<String> for Seed {
    fn from(seed: String) -> Self {
        Self(seed)
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Self(seed.to_string())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inclusive word length filter. `None` leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthBounds {
    #[must_use]
    pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let len = word.chars().count();
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }
}

/// Transform applied to every selected word before grouping.
pub trait WordFormatter: Send + Sync {
    fn format(&self, word: &str) -> String;
}

impl<F> WordFormatter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format(&self, word: &str) -> String {
        self(word)
    }
}

/// Built-in letter case formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
    Capitalize,
}

impl WordFormatter for Case {
    fn format(&self, word: &str) -> String {
        match self {
            Case::Upper => word.to_uppercase(),
            Case::Lower => word.to_lowercase(),
            Case::Capitalize => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Options for one generation call.
///
/// `exactly` wins over `min`/`max`; with neither, a single bare word is
/// produced.
#[derive(Clone, Default)]
pub struct Config {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub exactly: Option<usize>,
    pub join: Join,
    pub words_per_string: Option<usize>,
    pub separator: Option<String>,
    pub formatter: Option<Arc<dyn WordFormatter>>,
    pub length: LengthBounds,
    pub seed: Option<Seed>,
}

impl Config {
    /// Shorthand for a fixed number of words.
    #[must_use]
    pub fn exactly(n: usize) -> Self {
        Self::default().with_exactly(n)
    }

    #[must_use]
    pub fn with_exactly(mut self, n: usize) -> Self {
        self.exactly = Some(n);
        self
    }

    #[must_use]
    pub fn range(mut self, min: usize, max: usize) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn join(mut self, separator: impl Into<String>) -> Self {
        self.join = Join::JoinWith(separator.into());
        self
    }

    #[must_use]
    pub fn words_per_string(mut self, n: usize) -> Self {
        self.words_per_string = Some(n);
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: impl WordFormatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn min_length(mut self, n: usize) -> Self {
        self.length.min = Some(n);
        self
    }

    #[must_use]
    pub fn max_length(mut self, n: usize) -> Self {
        self.length.max = Some(n);
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Separator within a unit, a single space unless overridden.
    #[must_use]
    pub fn unit_separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(" ")
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("exactly", &self.exactly)
            .field("join", &self.join)
            .field("words_per_string", &self.words_per_string)
            .field("separator", &self.separator)
            .field("formatter", &self.formatter.as_ref().map(|_| ".."))
            .field("length", &self.length)
            .field("seed", &self.seed)
            .finish()
    }
}
