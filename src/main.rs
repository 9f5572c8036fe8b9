use cantor_search::combinators::negate;
use cantor_search::samples::{self, SampleFn, SAMPLE_NAMES};
use cantor_search::search::TrialSchedule;
use cantor_search::validation::{find_continuity_violation, find_disagreement, SamplingConfig};
use cantor_search::{exists, BitView, Search, SearchConfig};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "cantor")]
#[command(about = "cantor - exhaustive search over infinite bit sequences")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv every trial)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Trials per enumeration round
    #[arg(long, value_enum, default_value = "doubled", global = true)]
    schedule: CliSchedule,

    /// Give up after this many enumeration rounds per search
    #[arg(long, global = true)]
    max_rounds: Option<u64>,

    /// Try random sequences for a quick counter-example first
    #[arg(long, global = true)]
    validate: bool,

    /// Random seed for --validate
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print search statistics
    #[arg(long, global = true)]
    stats: bool,
}

/// CLI trial schedule selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliSchedule {
    /// Two laps of the counter per round
    Doubled,
    /// One lap of the counter per round
    Single,
}

impl From<CliSchedule> for TrialSchedule {
    fn from(cli: CliSchedule) -> Self {
        match cli {
            CliSchedule::Doubled => TrialSchedule::Doubled,
            CliSchedule::Single => TrialSchedule::Single,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compare and measure the sample functions f and g
    Demo,
    /// Is there a sequence on which the function is true?
    Exists {
        /// Sample function name
        #[arg(long)]
        function: String,
        /// Search for a sequence on which the function is false instead
        #[arg(long)]
        negated: bool,
    },
    /// Is the function true on every sequence?
    ForAll {
        /// Sample function name
        #[arg(long)]
        function: String,
    },
    /// Do two functions agree on every sequence?
    Equal {
        /// Left-hand sample function
        #[arg(long)]
        lhs: String,
        /// Right-hand sample function
        #[arg(long)]
        rhs: String,
    },
    /// Least prefix length that determines the function's result
    Modulus {
        /// Sample function name
        #[arg(long)]
        function: String,
        /// Largest prefix length to try
        #[arg(long)]
        max_modulus: Option<u64>,
    },
    /// List the sample functions
    List,
    /// Start a search from inside a predicate (aborts)
    #[command(hide = true)]
    Nested,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn search_config(args: &Args) -> SearchConfig {
    SearchConfig::default()
        .with_schedule(args.schedule.into())
        .with_max_rounds_option(args.max_rounds)
        .with_verbose(args.verbose >= 3)
}

fn sampling_config(args: &Args) -> SamplingConfig {
    SamplingConfig::default().with_seed_option(args.seed)
}

fn lookup(name: &str) -> Result<SampleFn, Box<dyn std::error::Error>> {
    Ok(samples::by_name(name)?)
}

fn bit_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// --- Commands ---

fn run_demo(args: &Args) -> CliResult {
    let started = Instant::now();
    let mut search = Search::new(search_config(args));
    let f = samples::func_f;
    let g = samples::func_g;

    println!("Equal(F, F) = {}", bit_str(search.try_equal(f, f)?));
    println!("Equal(G, G) = {}", bit_str(search.try_equal(g, g)?));
    println!("Equal(F, G) = {}", bit_str(search.try_equal(f, g)?));
    println!("Equal(G, F) = {}", bit_str(search.try_equal(g, f)?));
    println!("Modulus(F) = {}", search.try_modulus(f)?);
    println!("Modulus(G) = {}", search.try_modulus(g)?);
    println!("Time taken in demo: {:.3?}", started.elapsed());

    if args.stats {
        print_search_statistics(&search);
    }
    Ok(())
}

fn run_exists(args: &Args, name: &str, negated: bool) -> CliResult {
    let f = lookup(name)?;
    let mut search = Search::new(search_config(args));

    let outcome = if negated {
        search.try_find(negate(f))?
    } else {
        search.try_find(f)?
    };

    let label = if negated {
        format!("Exists(not {})", name)
    } else {
        format!("Exists({})", name)
    };
    println!("{} = {}", label, bit_str(outcome.satisfied));
    if let Some(witness) = &outcome.witness {
        println!("Witness: {}", witness);
    }

    if args.stats {
        print_search_statistics(&search);
    }
    Ok(())
}

fn run_for_all(args: &Args, name: &str) -> CliResult {
    let f = lookup(name)?;
    let mut search = Search::new(search_config(args));

    println!("ForAll({}) = {}", name, bit_str(search.try_for_all(f)?));

    if args.stats {
        print_search_statistics(&search);
    }
    Ok(())
}

fn run_equal(args: &Args, lhs: &str, rhs: &str) -> CliResult {
    let f_a = lookup(lhs)?;
    let f_b = lookup(rhs)?;

    if args.validate {
        let config = sampling_config(args);
        match find_disagreement(f_a, f_b, &config) {
            Some(witness) => println!("Sampled counter-example: {}", witness),
            None => println!(
                "No counter-example in {} sampled sequences",
                config.samples
            ),
        }
    }

    let mut search = Search::new(search_config(args));
    println!(
        "Equal({}, {}) = {}",
        lhs,
        rhs,
        bit_str(search.try_equal(f_a, f_b)?)
    );

    if args.stats {
        print_search_statistics(&search);
    }
    Ok(())
}

fn run_modulus(args: &Args, name: &str, max_modulus: Option<u64>) -> CliResult {
    let f = lookup(name)?;
    let mut search = Search::new(search_config(args).with_max_modulus_option(max_modulus));

    let modulus = search.try_modulus(f)?;
    println!("Modulus({}) = {}", name, modulus);

    if args.validate && modulus > 0 {
        let config = sampling_config(args);
        match find_continuity_violation(f, modulus - 1, &config) {
            Some((a, b)) => {
                println!("Sampled pair agreeing on 0..{} with different results:", modulus - 1);
                println!("  {}", a);
                println!("  {}", b);
            }
            None => println!(
                "No sampled pair separates prefix length {}",
                modulus - 1
            ),
        }
    }

    if args.stats {
        print_search_statistics(&search);
    }
    Ok(())
}

fn run_nested() -> CliResult {
    let outer = exists(|seq: &dyn BitView| {
        let inner = exists(|_| Some(true));
        Some(inner && seq.get(0)?)
    });
    println!("Nested search returned {}", bit_str(outer));
    Ok(())
}

/// Print search statistics
fn print_search_statistics(search: &Search) {
    println!("\nSearch Statistics:");
    for line in search.statistics().format_summary().lines() {
        println!("  {}", line);
    }
}

// --- Main Function ---
fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match &args.command {
        Commands::Demo => run_demo(&args),
        Commands::Exists { function, negated } => run_exists(&args, function, *negated),
        Commands::ForAll { function } => run_for_all(&args, function),
        Commands::Equal { lhs, rhs } => run_equal(&args, lhs, rhs),
        Commands::Modulus {
            function,
            max_modulus,
        } => run_modulus(&args, function, *max_modulus),
        Commands::List => {
            for name in SAMPLE_NAMES {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Nested => run_nested(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
