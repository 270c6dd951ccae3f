//! qubit - Quantified superposition sets
//! Command-line interface for evaluating superposition expressions

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use qubit_format::{FormatConfig, parse_strict_with_config, render};
use qubit_samples::{factors, gcd, is_prime, max, min, primes_up_to};
use qubit_superposition::{Quantifier, Relation, SuperpositionSet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qubit")]
#[command(author = "Silvano Neto <dev@silvanoneto.com>")]
#[command(version = "2026.1.16")]
#[command(about = "qubit - Quantified superposition sets", long_about = None)]
struct Cli {
    /// Literal style used for parsing and printing sets
    #[arg(short, long, value_enum, default_value_t = Style::Default, env = "QUBIT_FORMAT", global = true)]
    format: Style,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List primes found by superposition remainders
    Primes {
        /// Largest candidate to test
        #[arg(short, long, default_value_t = 100, env = "QUBIT_PRIME_LIMIT")]
        limit: i64,
    },

    /// Show the proper factors of a number
    Factors {
        #[arg(value_name = "N")]
        n: u64,
    },

    /// Greatest common divisor through intersected divisors
    Gcd {
        #[arg(value_name = "A")]
        a: u64,
        #[arg(value_name = "B")]
        b: u64,
    },

    /// Smallest elements of a set literal, e.g. "{ 4 1 7 }"
    Min {
        #[arg(value_name = "SET")]
        set: String,
    },

    /// Largest elements of a set literal
    Max {
        #[arg(value_name = "SET")]
        set: String,
    },

    /// Collapse a set against a scalar or another set
    Collapse {
        /// Left operand literal
        #[arg(value_name = "SET")]
        set: String,

        /// Relation: < <= > >= == != (or lt, le, gt, ge, eq, ne)
        #[arg(short, long)]
        relation: Relation,

        /// Compare against a single value
        #[arg(short, long, conflicts_with = "against", required_unless_present = "against")]
        scalar: Option<f64>,

        /// Compare against another set literal
        #[arg(short, long, value_name = "SET")]
        against: Option<String>,

        /// Quantifier of the left operand
        #[arg(short, long, value_enum, default_value_t = QuantifierArg::Any)]
        quantifier: QuantifierArg,

        /// Quantifier of the right operand
        #[arg(long, value_enum, default_value_t = QuantifierArg::All)]
        against_quantifier: QuantifierArg,
    },

    /// Walk through the classic superposition samples
    Demo,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Style {
    /// `{ 1 2 3 }`
    Default,
    /// `{1,2,3}`
    Compact,
    /// `any { 1 2 3 }`
    Annotated,
}

impl Style {
    fn config(self) -> FormatConfig {
        match self {
            Style::Default => FormatConfig::default(),
            Style::Compact => FormatConfig::compact(),
            Style::Annotated => FormatConfig::annotated(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QuantifierArg {
    Any,
    All,
}

impl From<QuantifierArg> for Quantifier {
    fn from(arg: QuantifierArg) -> Self {
        match arg {
            QuantifierArg::Any => Quantifier::Disjunctive,
            QuantifierArg::All => Quantifier::Conjunctive,
        }
    }
}

fn main() {
    let _ = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qubit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.format.config();

    let outcome = match cli.command {
        Commands::Primes { limit } => primes_command(limit, &config),
        Commands::Factors { n } => factors_command(n, &config),
        Commands::Gcd { a, b } => gcd_command(a, b),
        Commands::Min { set } => extreme_command(&set, Extreme::Min, &config),
        Commands::Max { set } => extreme_command(&set, Extreme::Max, &config),
        Commands::Collapse {
            set,
            relation,
            scalar,
            against,
            quantifier,
            against_quantifier,
        } => collapse_command(
            &set,
            relation,
            scalar,
            against.as_deref(),
            quantifier.into(),
            against_quantifier.into(),
            &config,
        ),
        Commands::Demo => demo_command(&config),
    };

    if let Err(e) = outcome {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

// ============================================================================
// Commands
// ============================================================================

fn primes_command(limit: i64, config: &FormatConfig) -> Result<()> {
    tracing::info!(limit, "searching primes");
    let primes = primes_up_to(limit)?;

    println!(
        "{} {} prime(s) up to {}",
        "Found".green().bold(),
        primes.len().to_string().cyan(),
        limit
    );
    println!("{}", render(&primes, config));
    Ok(())
}

fn factors_command(n: u64, config: &FormatConfig) -> Result<()> {
    let found = factors(n)?;

    if found.is_empty() {
        println!("{} has no proper factors", n.to_string().cyan());
    } else {
        println!(
            "The {} factors of {} are {}",
            found.len(),
            n.to_string().cyan(),
            render(&found, config).bold()
        );
    }
    Ok(())
}

fn gcd_command(a: u64, b: u64) -> Result<()> {
    let g = gcd(a, b)?;
    println!("gcd({}, {}) = {}", a, b, g.to_string().green().bold());
    Ok(())
}

enum Extreme {
    Min,
    Max,
}

fn extreme_command(text: &str, which: Extreme, config: &FormatConfig) -> Result<()> {
    let set = parse_set(text, config)?;
    let (label, result) = match which {
        Extreme::Min => ("Lowest", min(&set)?),
        Extreme::Max => ("Highest", max(&set)?),
    };

    println!("{} {}", label.green().bold(), render(&result, config));
    Ok(())
}

fn collapse_command(
    text: &str,
    relation: Relation,
    scalar: Option<f64>,
    against: Option<&str>,
    quantifier: Quantifier,
    against_quantifier: Quantifier,
    config: &FormatConfig,
) -> Result<()> {
    let lhs = with_quantifier(parse_set(text, config)?, quantifier);

    let result = match (scalar, against) {
        (Some(k), _) => lhs.compare(relation, k)?,
        (None, Some(other)) => {
            let rhs = with_quantifier(parse_set(other, config)?, against_quantifier);
            lhs.compare(relation, &rhs)?
        }
        (None, None) => bail!("either --scalar or --against is required"),
    };

    let verdict = if result.bool_result() {
        "true".green().bold()
    } else {
        "false".red().bold()
    };
    println!("{} {}", "Verdict".bold(), verdict);
    println!(
        "{} {}",
        "Eigenstates".bold(),
        render(&result.eigenstates(), config)
    );
    Ok(())
}

fn demo_command(config: &FormatConfig) -> Result<()> {
    println!("{}", "Primes below 100".bold());
    for i in 1..100 {
        if is_prime(i)? {
            println!("  {} is prime!", i.to_string().cyan());
        }
    }
    println!();

    let ans = factors(255)?;
    println!(
        "The {} factors of 255 are {}",
        ans.len(),
        render(&ans, config).bold()
    );
    println!("You can also reference them by index, i.e. ans[0] = {}", ans.item(0)?);
    println!();

    // Membership: any(ans) == i
    let any_factor = ans.quantify_any();
    for i in 2..=10 {
        if any_factor.equals(i as f64)?.bool_result() {
            println!("  {} {} is a factor", "✓".green(), i);
        } else {
            println!("  {} {} is not a factor", "✗".red(), i);
        }
    }
    println!();

    let candidates = SuperpositionSet::<f64>::range(2.0, 10.0, 1.0)?;
    let common = SuperpositionSet::intersect_of(&candidates, &ans);
    println!("The factors up to 10 are {}", render(&common, config));

    let values = SuperpositionSet::<f64>::range(10.0, 25.0, 5.0)?;
    let lowest = values.quantify_any().le(&values.quantify_all())?;
    println!("The lowest of {} is {}", render(&values, config), render(&lowest.eigenstates(), config));

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_set(text: &str, config: &FormatConfig) -> Result<SuperpositionSet<f64>> {
    parse_strict_with_config(text, config).with_context(|| format!("invalid set literal '{}'", text))
}

fn with_quantifier(set: SuperpositionSet<f64>, quantifier: Quantifier) -> SuperpositionSet<f64> {
    match quantifier {
        Quantifier::Conjunctive => set.quantify_all(),
        Quantifier::Disjunctive => set.quantify_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_collapse_args() {
        let cli = Cli::try_parse_from([
            "qubit", "collapse", "{ 1 2 3 }", "--relation", "<=", "--scalar", "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Collapse { relation, scalar, against, .. } => {
                assert_eq!(relation, Relation::Le);
                assert_eq!(scalar, Some(2.0));
                assert!(against.is_none());
            }
            _ => panic!("expected collapse"),
        }
    }

    #[test]
    fn test_collapse_requires_an_operand() {
        let parsed = Cli::try_parse_from(["qubit", "collapse", "{ 1 }", "--relation", "lt"]);
        assert!(parsed.is_err());

        let parsed = Cli::try_parse_from([
            "qubit", "collapse", "{ 1 }", "-r", "lt", "--scalar", "1", "--against", "{ 2 }",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_parse_set_reports_bad_literal() {
        let config = FormatConfig::default();
        assert_eq!(parse_set("{ 1 2.5 }", &config).unwrap().elements(), &[1.0, 2.5]);
        assert!(parse_set("1 2", &config).is_err());
        assert!(parse_set("{1,2}", &config).is_err());
        assert_eq!(parse_set("{1,2}", &FormatConfig::compact()).unwrap().len(), 2);
    }

    #[test]
    fn test_quantifier_mapping() {
        let set = parse_set("{ 1 }", &FormatConfig::default()).unwrap();
        assert_eq!(
            with_quantifier(set.clone(), QuantifierArg::Any.into()).quantifier(),
            Some(Quantifier::Disjunctive)
        );
        assert_eq!(
            with_quantifier(set, QuantifierArg::All.into()).quantifier(),
            Some(Quantifier::Conjunctive)
        );
    }
}
