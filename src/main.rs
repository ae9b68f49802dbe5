use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use swapcalc::{Interpretation, Totals, evaluate, logging, sum_file};

/// swapcalc sums worksheets of `+` and `*` expressions under two precedence
/// rules: swapped operators with uniform precedence, then addition before
/// multiplication.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Worksheet with one expression per line.
    #[arg(conflicts_with = "expression")]
    input: Option<PathBuf>,

    /// Evaluates a single expression instead of a worksheet.
    #[arg(short, long)]
    expression: Option<String>,

    /// Log filter for diagnostics on stderr. `RUST_LOG` takes precedence.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let totals = if let Some(expression) = &args.expression {
        Totals { swapped:        evaluate(expression, Interpretation::Swapped)?,
                 addition_first: evaluate(expression, Interpretation::AdditionFirst)?, }
    } else if let Some(input) = &args.input {
        sum_file(input)?
    } else {
        bail!("Either an input file or --expression is required.");
    };

    println!("{totals}");
    Ok(())
}
