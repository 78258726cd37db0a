use std::io::Write;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use random_words::Case;
use random_words::Config;
use random_words::LengthBounds;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    program: Program,
}

#[derive(Debug, Subcommand)]
enum Program {
    /// Print random words
    Generate(Generate),
    /// Print how many words satisfy the length filter
    Count(Lengths),
}

#[derive(Debug, Args)]
struct Generate {
    /// Produce exactly this many words
    #[arg(short, long, env = "RANDOM_WORDS_EXACTLY", conflicts_with_all = ["min", "max"])]
    exactly: Option<usize>,
    /// Lower bound of a random word count
    #[arg(long, env = "RANDOM_WORDS_MIN", requires = "max")]
    min: Option<usize>,
    /// Upper bound of a random word count
    #[arg(long, env = "RANDOM_WORDS_MAX", requires = "min")]
    max: Option<usize>,
    /// Join every unit into one line with this separator
    #[arg(short, long, env = "RANDOM_WORDS_JOIN")]
    join: Option<String>,
    /// Group this many words into each unit
    #[arg(short, long, env = "RANDOM_WORDS_PER_STRING")]
    words_per_string: Option<usize>,
    /// Separator between words within a unit
    #[arg(long, env = "RANDOM_WORDS_SEPARATOR")]
    separator: Option<String>,
    /// Seed for reproducible output
    #[arg(long, env = "RANDOM_WORDS_SEED")]
    seed: Option<String>,
    /// Letter case applied to every word
    #[arg(long, value_enum, env = "RANDOM_WORDS_CASE")]
    case: Option<CaseArg>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    lengths: Lengths,
}

#[derive(Debug, Args)]
struct Lengths {
    /// Shortest word allowed
    #[arg(long, env = "RANDOM_WORDS_MIN_LENGTH")]
    min_length: Option<usize>,
    /// Longest word allowed
    #[arg(long, env = "RANDOM_WORDS_MAX_LENGTH")]
    max_length: Option<usize>,
}

impl From<&Lengths> for LengthBounds {
    fn from(lengths: &Lengths) -> Self {
        LengthBounds::new(lengths.min_length, lengths.max_length)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CaseArg {
    Upper,
    Lower,
    Capitalize,
}

impl From<CaseArg> for Case {
    fn from(case: CaseArg) -> Self {
        match case {
            CaseArg::Upper => Case::Upper,
            CaseArg::Lower => Case::Lower,
            CaseArg::Capitalize => Case::Capitalize,
        }
    }
}

impl From<&Generate> for Config {
    fn from(args: &Generate) -> Self {
        let mut config = Config {
            exactly: args.exactly,
            min: args.min,
            max: args.max,
            join: args.join.clone().into(),
            words_per_string: args.words_per_string,
            separator: args.separator.clone(),
            length: LengthBounds::from(&args.lengths),
            seed: args.seed.clone().map(Into::into),
            ..Config::default()
        };
        if let Some(case) = args.case {
            config = config.formatter(Case::from(case));
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    debug!(?cli);

    let mut stdout = std::io::stdout().lock();
    match cli.program {
        Program::Generate(args) => {
            let words = random_words::generate(&Config::from(&args))?;
            if args.json {
                serde_json::to_writer(&mut stdout, &words)?;
                writeln!(stdout)?;
            } else if words.as_str().is_some() {
                writeln!(stdout, "{words}")?;
            } else {
                write!(stdout, "{words}")?;
            }
        }
        Program::Count(lengths) => {
            writeln!(stdout, "{}", random_words::count(&LengthBounds::from(&lengths)))?;
        }
    }

    Ok(())
}
