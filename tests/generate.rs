use std::collections::HashSet;

use random_words::generate;
use random_words::Case;
use random_words::Config;
use random_words::Error;
use random_words::LengthBounds;
use random_words::Words;

fn many(words: Words) -> Vec<String> {
    match words {
        Words::Many(units) => units,
        other => panic!("expected a sequence, got {other:?}"),
    }
}

#[test]
fn one_word_without_options() {
    let word = generate(&Config::default()).unwrap();
    let Words::Single(word) = word else {
        panic!("expected a bare word, got {word:?}");
    };
    assert!(!word.is_empty());
    assert!(!word.contains(' '));
}

#[test]
fn exactly_five() {
    assert_eq!(many(generate(&Config::exactly(5)).unwrap()).len(), 5);
}

#[test]
fn range_bounds_the_count() {
    let words = generate(&Config::default().range(5, 10)).unwrap();
    assert!((5..=10).contains(&many(words).len()));
}

#[test]
fn range_varies_the_count() {
    let lengths: HashSet<usize> = (0..100)
        .map(|_| generate(&Config::default().range(5, 10)).unwrap().len())
        .collect();
    assert!(lengths.len() > 1, "result varies in length");
}

#[test]
fn join_with_space() {
    let phrase = generate(&Config::exactly(5).join(" ")).unwrap();
    let phrase = phrase.as_str().unwrap();
    assert_eq!(phrase.matches(' ').count(), 4);
    assert!(!phrase.starts_with(' ') && !phrase.ends_with(' '));
}

#[test]
fn join_with_empty_string() {
    let phrase = generate(&Config::exactly(5).join("")).unwrap();
    let Words::Joined(phrase) = phrase else {
        panic!("expected a joined string");
    };
    assert!(!phrase.is_empty());
    assert!(!phrase.contains(' '));
}

#[test]
fn min_length_holds_for_every_word() {
    let words = many(generate(&Config::exactly(10_000).min_length(5)).unwrap());
    assert!(words.iter().all(|w| w.chars().count() >= 5));
}

#[test]
fn max_length_holds_for_every_word() {
    let words = many(generate(&Config::exactly(10_000).max_length(4)).unwrap());
    assert!(words.iter().all(|w| w.chars().count() <= 4));
}

#[test]
fn length_window_holds_for_every_word() {
    let config = Config::exactly(10_000).min_length(3).max_length(5);
    let words = many(generate(&config).unwrap());
    assert!(words.iter().all(|w| (3..=5).contains(&w.chars().count())));
}

#[test]
fn exact_length_holds_for_every_word() {
    let config = Config::exactly(10_000).min_length(5).max_length(5);
    let words = many(generate(&config).unwrap());
    assert!(words.iter().all(|w| w.chars().count() == 5));
}

#[test]
fn impossible_length_fails() {
    let config = Config::exactly(3).min_length(1_000);
    assert!(matches!(
        generate(&config),
        Err(Error::EmptyCandidateSet { .. })
    ));
}

#[test]
fn words_per_string_groups() {
    let units = many(generate(&Config::exactly(10).words_per_string(5)).unwrap());
    assert_eq!(units.len(), 2);
    for unit in units {
        assert_eq!(unit.split(' ').count(), 5);
    }
}

#[test]
fn words_per_string_with_separator() {
    let config = Config::exactly(10).words_per_string(5).separator("-");
    let units = many(generate(&config).unwrap());
    assert_eq!(units.len(), 2);
    for unit in units {
        assert_eq!(unit.split('-').count(), 5);
    }
}

#[test]
fn formatter_styles_words() {
    let words = many(generate(&Config::exactly(10).formatter(Case::Upper)).unwrap());
    assert!(words.iter().all(|w| *w == w.to_uppercase()));
}

#[test]
fn closure_formatter() {
    let config = Config::exactly(10).formatter(|w: &str| format!("{w}!"));
    let words = many(generate(&config).unwrap());
    assert!(words.iter().all(|w| w.ends_with('!')));
}

#[test]
fn same_seed_same_words() {
    let config = Config::exactly(20).join(" ").seed("seed1");
    assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
}

#[test]
fn same_seed_same_count() {
    let config = Config::default().range(1, 10).seed("seed1");
    assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
}

#[test]
fn no_seed_different_words() {
    let config = Config::exactly(20).join(" ");
    assert_ne!(generate(&config).unwrap(), generate(&config).unwrap());
}

#[test]
fn different_seeds_differ_at_every_position() {
    for n in [5, 20] {
        let a = many(generate(&Config::exactly(n).seed("seed1")).unwrap());
        let b = many(generate(&Config::exactly(n).seed("seed2")).unwrap());
        assert_eq!(a.len(), n);
        for (i, (x, y)) in a.iter().zip(&b).enumerate() {
            assert_ne!(x, y, "same word at position {i} of {n}");
        }
    }
}

#[test]
fn different_seeds_different_counts() {
    let counts: HashSet<usize> = (0..20)
        .map(|i| {
            let config = Config::default().range(1, 10).seed(format!("seed{i}"));
            generate(&config).unwrap().len()
        })
        .collect();
    assert!(counts.len() > 1);
}

#[test]
fn count_agrees_with_generation() {
    let bounds = LengthBounds::new(Some(5), Some(5));
    assert!(random_words::count(&bounds) > 0);
    assert!(random_words::count(&bounds) < random_words::count(&LengthBounds::default()));
}
