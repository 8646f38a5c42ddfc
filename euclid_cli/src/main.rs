//! Command-line front end: prints the extended Euclidean derivation table
//! or a CRT solve, consuming only the structured values the library
//! returns.

use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use euclid::report::{render_crt, ColumnFilter, StepTable};
use euclid::{solve_crt, Congruence, ExtendedGcd};

#[derive(Parser)]
#[command(name = "euclid", about = "Extended Euclidean algorithm and CRT solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute gcd(a, b) and the Bézout coefficients with the full
    /// derivation table
    Xgcd {
        /// First non-negative operand
        a: i64,
        /// Second non-negative operand
        b: i64,
        /// Restrict the table to one coefficient's columns
        #[arg(long, value_enum, default_value = "full")]
        show: Show,
    },
    /// Solve a system of congruences given as RESIDUE:MODULUS pairs
    Crt {
        /// Congruences, e.g. 13:17 15:27 7:10
        #[arg(required = true)]
        congruences: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Show {
    /// All columns
    Full,
    /// Only the x coefficient columns
    X,
    /// Only the y coefficient columns
    Y,
}

impl From<Show> for ColumnFilter {
    fn from(show: Show) -> Self {
        match show {
            Show::Full => ColumnFilter::Full,
            Show::X => ColumnFilter::XOnly,
            Show::Y => ColumnFilter::YOnly,
        }
    }
}

fn parse_congruence(literal: &str) -> Result<Congruence, Box<dyn Error>> {
    let (residue, modulus) = literal
        .split_once(':')
        .ok_or_else(|| format!("expected RESIDUE:MODULUS, got `{literal}`"))?;
    Ok(Congruence::new(
        residue.trim().parse()?,
        modulus.trim().parse()?,
    )?)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Xgcd { a, b, show } => {
            let engine = ExtendedGcd::new(a, b)?;
            print!("{}", StepTable::with_filter(engine, show.into()).render());
        }
        Command::Crt { congruences } => {
            let congruences = congruences
                .iter()
                .map(|literal| parse_congruence(literal))
                .collect::<Result<Vec<_>, _>>()?;
            print!("{}", render_crt(&solve_crt(&congruences)?));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_congruence() {
        let congruence = parse_congruence("13:17").unwrap();
        assert_eq!(congruence.residue(), 13);
        assert_eq!(congruence.modulus(), 17);

        assert!(parse_congruence("13").is_err());
        assert!(parse_congruence("13:x").is_err());
        assert!(parse_congruence("13:0").is_err());
    }
}
