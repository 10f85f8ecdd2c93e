mod binomial;
mod error;
mod factorial;
mod gaussian;
mod report;

use anyhow::Context;
use clap::{arg, command, value_parser, Command};
use report::{Report, DEFAULT_PAIRS, DEFAULT_VECTS};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let matches = command!()
        .arg(arg!(-v --verbose "Log computation steps to stderr").global(true))
        .subcommand(
            Command::new("pair")
                .about("Exact and approximate coefficient of a single pair")
                .arg(arg!(n: <N> "Population size").value_parser(value_parser!(usize)))
                .arg(arg!(m: <M> "Subset size").value_parser(value_parser!(usize))),
        )
        .subcommand(
            Command::new("factorial")
                .about("Factorial of N")
                .arg(arg!(n: <N> "Value").value_parser(value_parser!(usize))),
        )
        .subcommand(
            Command::new("inverses")
                .about("Number of inverse matrices for a data + parity layout")
                .arg(
                    arg!(--vects [VECTS] "Number of vectors (data+parity)")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    arg!(--data [DATA] "Number of data vectors; omit for half of VECTS")
                        .value_parser(value_parser!(usize)),
                ),
        )
        .get_matches();

    let level = match matches.is_present("verbose") {
        true => Level::DEBUG,
        false => Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let report = Report::new(|msg: String| println!("{}", msg));

    if let Some(matches) = matches.subcommand_matches("pair") {
        let n = *matches.get_one::<usize>("n").context("missing N")?;
        let m = *matches.get_one::<usize>("m").context("missing M")?;
        report.coefficients([(n, m)])?;
    } else if let Some(matches) = matches.subcommand_matches("factorial") {
        let n = *matches.get_one::<usize>("n").context("missing N")?;
        report.factorial(n)?;
    } else if let Some(matches) = matches.subcommand_matches("inverses") {
        let vects = matches
            .get_one::<usize>("vects")
            .copied()
            .unwrap_or(DEFAULT_VECTS);
        let data = matches.get_one::<usize>("data").copied().unwrap_or(0);
        report.inverse_matrices(vects, data)?;
    } else {
        report.coefficients(DEFAULT_PAIRS)?;
    }

    Ok(())
}
