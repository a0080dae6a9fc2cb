//! `blc <input>` – remove duplicate URLs, or keep one URL per domain.

use anyhow::Result;
use blc_core::engine::{self, CleanRun, KeyMode, Operation, RunOptions};
use std::path::Path;

use super::rule;

pub fn run_clean(
    op: Operation,
    input: &Path,
    output: Option<&Path>,
    opts: &RunOptions,
) -> Result<()> {
    let mode = op.key_mode();
    println!("Reading URLs from: {}", input.display());
    println!("Mode: {}", op.describe());

    let run = engine::run_clean(input, output, mode, opts)?;
    print_clean_summary(&run, opts.sample_limit);
    Ok(())
}

fn print_clean_summary(run: &CleanRun, sample_limit: usize) {
    let r = &run.report;
    println!();
    println!("{}", rule());
    println!("CLEANING DONE");
    println!("{}", rule());

    let unit = match r.mode {
        KeyMode::Url => "URL",
        KeyMode::Domain => "domain",
    };
    println!("Original URLs:             {}", r.original());
    println!("Unique {:<19}{}", format!("{unit}s:"), r.unique);
    println!("Duplicate {:<16}{}", format!("{unit}s removed:"), r.duplicates);
    println!("Invalid URLs removed:      {}", r.invalid);
    println!("Cleaned file saved to:     {}", run.output.display());
    println!("Distinct domains:          {}", r.distinct_domains);
    println!("{}", rule());

    match r.mode {
        KeyMode::Domain => {
            println!();
            println!("Selected domain and URL:");
            for (i, s) in r.samples.iter().enumerate() {
                println!(
                    "{:2}. {} => {}",
                    i + 1,
                    s.domain.as_deref().unwrap_or("-"),
                    s.url
                );
            }
            if r.unique > sample_limit {
                println!("    ... and {} more domains", r.unique - sample_limit);
            }
        }
        KeyMode::Url => {
            println!();
            println!("Domains with multiple URLs:");
            if r.multi_url_domains.is_empty() {
                println!("  None - every domain has a single URL");
            }
            for (domain, count) in &r.multi_url_domains {
                println!("  {domain}: {count} URLs");
            }
        }
    }
}
