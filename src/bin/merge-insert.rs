//! Sorts integers with merge-insertion and reports what it took.

use std::io::{self, Read};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};

use merge_insertion::{NoopObserver, Observer, Recorder};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sorts integers with the Ford-Johnson merge-insertion sort", long_about = None)]
struct Args {
    /// Integers to sort. Read whitespace separated from stdin if none are given.
    values: Vec<String>,

    /// Print the number of comparisons and the worst case bound for this length.
    #[arg(long)]
    count: bool,

    /// Verify the result against the standard library sort.
    #[arg(long)]
    check: bool,

    /// Log every step of the sort at debug level.
    #[arg(long)]
    trace: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_values(tokens: &[String]) -> Result<Vec<i64>> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid integer: {token:?}"))
        })
        .collect()
}

fn read_stdin() -> Result<Vec<String>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    Ok(input.split_whitespace().map(str::to_owned).collect())
}

/// Returns the comparison count.
fn sort_counted<O: Observer<i64>>(v: &mut [i64], observer: &mut O) -> u64 {
    let mut comp_count = 0u64;
    merge_insertion::sort_observed_by(
        v,
        |a, b| {
            comp_count += 1;
            a.cmp(b)
        },
        observer,
    );

    comp_count
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose || args.trace {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    let tokens = if args.values.is_empty() {
        debug!("No values given, reading stdin");
        read_stdin()?
    } else {
        args.values
    };
    let mut values = parse_values(&tokens)?;
    let original = values.clone();

    println!("Before: {values:?}");

    let mut recorder = args.trace.then(Recorder::new);

    let start = Instant::now();
    let comp_count = match recorder.as_mut() {
        Some(recorder) => sort_counted(&mut values, recorder),
        None => sort_counted(&mut values, &mut NoopObserver),
    };
    let elapsed = start.elapsed();

    if let Some(recorder) = recorder {
        for step in recorder.steps() {
            debug!("{step:?}");
        }
    }

    println!("After:  {values:?}");
    println!("Took: {elapsed:?}");
    info!("Sorted {} values", values.len());

    if args.count {
        println!(
            "Comparisons: {comp_count} (bound for {} elements: {})",
            values.len(),
            merge_insertion::max_comparisons(values.len())
        );
    }

    if args.check {
        let mut expected = original;
        expected.sort();
        if expected != values {
            bail!("result differs from the standard library sort, expected: {expected:?}");
        }
        info!("Check passed");
    }

    Ok(())
}
