//! Demo runner: mine a transactions file and print the report.
//!
//! Usage:
//!   cargo run --bin apriori -- <transactions-file> --min-support 0.4 --min-confidence 0.5 [--out <path>]
//!
//! The input file holds one transaction per line, items separated by
//! whitespace. The report goes to stdout unless `--out` is given.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use apriori_rs::io::{read_transactions, write_report};
use apriori_rs::{FrequentItemsetMiner, MinerParams, RuleGenerator, Verbosity};

struct Args {
    input: PathBuf,
    min_support: f64,
    min_confidence: f64,
    out: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut input = None;
    let mut min_support = None;
    let mut min_confidence = None;
    let mut out = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--min-support" => {
                let value = args.next().ok_or("--min-support needs a value")?;
                min_support = Some(value.parse().map_err(|_| "invalid --min-support value")?);
            }
            "--min-confidence" => {
                let value = args.next().ok_or("--min-confidence needs a value")?;
                min_confidence =
                    Some(value.parse().map_err(|_| "invalid --min-confidence value")?);
            }
            "--out" => {
                let value = args.next().ok_or("--out needs a path")?;
                out = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                return Err("usage: apriori <transactions-file> --min-support <s> --min-confidence <c> [--out <path>]".to_string());
            }
            other if input.is_none() => input = Some(PathBuf::from(other)),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    Ok(Args {
        input: input.ok_or("missing transactions file argument")?,
        min_support: min_support.ok_or("missing --min-support")?,
        min_confidence: min_confidence.ok_or("missing --min-confidence")?,
        out,
    })
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(&args.input)?;
    let transactions = read_transactions(BufReader::new(file))?;

    let miner = FrequentItemsetMiner::new(MinerParams {
        verbosity: Verbosity::Info,
    });

    let start = Instant::now();
    let data = miner.mine(&transactions, args.min_support)?;
    eprintln!("mined frequent itemsets in {} ms", start.elapsed().as_millis());

    let Some(data) = data else {
        eprintln!("no transactions in {}; nothing to mine", args.input.display());
        return Ok(());
    };

    let generator = RuleGenerator::new(Verbosity::Info);

    let start = Instant::now();
    let rules = generator.mine_rules(&data, args.min_confidence)?;
    eprintln!("mined association rules in {} ms", start.elapsed().as_millis());

    match args.out {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_report(&mut writer, &data, &rules)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_report(&mut writer, &data, &rules)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
