use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use sentinel_rs::sentinel::rule::engine::{parse_reading, Readings, RuleEngine};
use sentinel_rs::sentinel::rule::expr::{Evaluator, ExprError, TraceSink};
use sentinel_rs::sentinel::rule::loader::RuleLoader;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single condition expression
    Eval {
        /// The expression to evaluate
        #[arg(short, long)]
        expression: String,

        /// Show every operator application on stderr
        #[arg(long)]
        trace: bool,
    },
    /// Check a rule file against sensor readings
    Check {
        /// Path to the rule file
        #[arg(short, long)]
        file: String,

        /// Sensor readings as name=value pairs
        #[arg(short, long)]
        reading: Vec<String>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Trace sink printing operator applications to stderr
struct StderrTrace;

impl TraceSink for StderrTrace {
    fn binary_op(&mut self, lhs: f32, op: char, rhs: f32, result: f32) {
        eprintln!("{}{}{} => {}", lhs, op, rhs, result);
    }

    fn error(&mut self, err: &ExprError) {
        eprintln!("Error: {}", err);
    }
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval { expression, trace } => {
            let mut evaluator = Evaluator::new();
            if trace {
                evaluator = evaluator.with_trace(Box::new(StderrTrace));
            }
            let value = evaluator
                .evaluate(&expression)
                .with_context(|| format!("could not evaluate '{}'", expression))?;
            println!("{}", value);
        }
        Commands::Check {
            file,
            reading,
            json,
        } => {
            let mut readings = Readings::new();
            for spec in &reading {
                let (name, value) = parse_reading(spec)?;
                readings.insert(name, value);
            }

            let loader = RuleLoader::new();
            let set = loader
                .load_rule_set(&file)
                .with_context(|| format!("could not load rule file '{}'", file))?;

            let mut engine = RuleEngine::new();
            let report = engine.check(&set, &readings);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Rule set: {}", report.ruleset);
                for outcome in &report.outcomes {
                    let status = if outcome.fired {
                        "FIRED"
                    } else if outcome.error.is_some() {
                        "ERROR"
                    } else {
                        "ok"
                    };
                    match (&outcome.value, &outcome.error) {
                        (Some(value), _) => {
                            println!("  [{:5}] {} => {}", status, outcome.rule, value)
                        }
                        (None, Some(err)) => {
                            println!("  [{:5}] {} => {}", status, outcome.rule, err)
                        }
                        (None, None) => println!("  [{:5}] {}", status, outcome.rule),
                    }
                }
            }
        }
    }

    Ok(())
}
