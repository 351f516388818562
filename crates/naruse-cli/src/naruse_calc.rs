//! Naruse-Newton coefficient calculator CLI
//!
//! Usage: naruse_calc [options] [elements...]
//!
//! Without elements, |I| and the elements of I are read interactively from
//! standard input. Elements may be given in any order.
//!
//! Options:
//!   --compact        Print coefficients on a single line
//!   --no-ratios      Skip the C_i/C_(i+1) ratios
//!   --no-order       Skip the order chain
//!   --no-unimodal    Skip the unimodality check
//!   --sequential     Do not parallelize across coefficients
//!   --max-work <N>   Refuse inputs whose work estimate exceeds N
//!   --help, -h       Show help
//!
//! Example: naruse_calc 2 5 7

use naruse_coeff::infra::input::{InputError, TokenReader, parse_elements, read_index_set};
use naruse_coeff::infra::report::{ReportOptions, write_report};
use naruse_coeff::{
    ComputeError, IndexSet, compute_coefficients, compute_coefficients_bounded,
    compute_coefficients_parallel, large_work_estimate,
};
use num_bigint::BigUint;
use std::env;
use std::io::{self, Write};
use std::time::Instant;

struct Args {
    elements: Vec<String>,
    report: ReportOptions,
    sequential: bool,
    max_work: Option<BigUint>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [elements...]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [elements...]    Elements of I (positive, distinct; read from stdin if omitted)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --compact        Print coefficients on a single line");
    eprintln!("  --no-ratios      Skip the C_i/C_(i+1) ratios");
    eprintln!("  --no-order       Skip the order chain");
    eprintln!("  --no-unimodal    Skip the unimodality check");
    eprintln!("  --sequential     Do not parallelize across coefficients");
    eprintln!("  --max-work <N>   Refuse inputs whose work estimate exceeds N");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Work estimate: (product of I / max of I)^2");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut elements = Vec::new();
    let mut report = ReportOptions::default();
    let mut sequential = false;
    let mut max_work = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--compact" => report.compact = true,
            "--no-ratios" => report.ratios = false,
            "--no-order" => report.order = false,
            "--no-unimodal" => report.unimodality = false,
            "--sequential" => sequential = true,
            "--max-work" => {
                i += 1;
                let value = args.get(i).ok_or("--max-work requires a value")?;
                max_work = Some(
                    value
                        .parse::<BigUint>()
                        .map_err(|_| format!("Invalid --max-work value: {}", value))?,
                );
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            // negative numbers are elements, rejected later with a clear message
            arg if !arg.starts_with('-') || arg.parse::<i64>().is_ok() => {
                elements.push(arg.to_string());
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(Args {
        elements,
        report,
        sequential,
        max_work,
    })
}

fn acquire_index_set(elements: &[String]) -> Result<IndexSet, InputError> {
    if !elements.is_empty() {
        return parse_elements(&elements.join(" "));
    }

    let stdin = io::stdin();
    let mut tokens = TokenReader::new(stdin.lock());
    read_index_set(&mut tokens, &mut io::stdout())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let set = match acquire_index_set(&args.elements) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(estimate) = large_work_estimate(&set) {
        log::warn!(
            "I = {}: work estimate {} is large, this may take a long time",
            set,
            estimate
        );
    }

    let start = Instant::now();
    let parallel = !args.sequential;

    let coefficients = match &args.max_work {
        Some(limit) => match compute_coefficients_bounded(&set, limit, parallel) {
            Ok(c) => c,
            Err(ComputeError::WorkLimitExceeded { estimate, limit }) => {
                eprintln!(
                    "Error: work estimate {} for I = {} exceeds --max-work {}",
                    estimate, set, limit
                );
                std::process::exit(1);
            }
        },
        None if parallel => compute_coefficients_parallel(&set),
        None => compute_coefficients(&set),
    };

    log::info!(
        "computed {} coefficients for I = {} in {:.3} seconds",
        coefficients.len(),
        set,
        start.elapsed().as_secs_f64()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = write_report(&mut out, &coefficients, &args.report).and_then(|_| out.flush());
    if let Err(e) = result {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
