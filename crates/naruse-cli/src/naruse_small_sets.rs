//! Batch calculator over every small index set
//!
//! Usage: naruse_small_sets [--max-element <N>] [--sequential] [--full]
//!
//! Computes the coefficients of every non-empty subset of {1, ..., N}
//! (default N = 7) and prints them in bitmask order.
//!
//! Example: naruse_small_sets --max-element 5

use naruse_coeff::app::batch::{BatchOptions, SetCoefficients, compute_small_sets_with_options};
use naruse_coeff::constants::{BATCH_MAX_ELEMENT_LIMIT, SMALL_SET_MAX_ELEMENT};
use naruse_coeff::infra::report::{ReportOptions, write_report, write_set_header};
use std::env;
use std::io::{self, Write};
use std::time::Instant;

struct Args {
    max_element: u32,
    sequential: bool,
    full: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --max-element <N>  Largest element of the subsets (1-{}, default {})",
        BATCH_MAX_ELEMENT_LIMIT, SMALL_SET_MAX_ELEMENT
    );
    eprintln!("  --sequential       Compute one subset at a time");
    eprintln!("  --full             Print ratios, order and unimodality for each subset");
    eprintln!("  --help, -h         Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut max_element = SMALL_SET_MAX_ELEMENT;
    let mut sequential = false;
    let mut full = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max-element" => {
                i += 1;
                let value = args.get(i).ok_or("--max-element requires a value")?;
                max_element = value
                    .parse()
                    .map_err(|_| format!("Invalid max element: {}", value))?;
            }
            "--sequential" => sequential = true,
            "--full" => full = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(Args {
        max_element,
        sequential,
        full,
    })
}

fn write_results<W: Write>(
    out: &mut W,
    max_element: u32,
    results: &[SetCoefficients],
    report: &ReportOptions,
) -> io::Result<()> {
    writeln!(out, "Naruse-Newton Coefficients for |I|<={}: ", max_element)?;
    for entry in results {
        write_set_header(out, &entry.set)?;
        write_report(out, &entry.coefficients, report)?;
    }
    out.flush()
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

    let start = Instant::now();

    let progress_callback = |current: usize, total: usize| {
        let progress = if total > 0 {
            (current as f64 / total as f64) * 100.0
        } else {
            100.0
        };
        eprint!(
            "\r[Batch] Progress: {:.2}% ({}/{})",
            progress, current, total
        );
        io::stderr().flush().ok();
    };

    let options = BatchOptions::default()
        .with_parallel(!args.sequential)
        .with_progress(progress_callback);

    let results = match compute_small_sets_with_options(args.max_element, options) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!();

    log::info!(
        "computed {} index sets in {:.2} seconds",
        results.len(),
        start.elapsed().as_secs_f64()
    );

    let report = if args.full {
        ReportOptions::default()
    } else {
        ReportOptions::compact_only()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_results(&mut out, args.max_element, &results, &report) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
