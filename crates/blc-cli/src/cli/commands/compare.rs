//! `blc <new> --compare <old>` – append entries of the new list missing from the old one.

use anyhow::Result;
use blc_core::engine::{self, CompareRun, CompareTarget, KeyMode, Operation, RunOptions};
use std::path::Path;

use super::rule;

pub fn run_compare(
    op: Operation,
    new_file: &Path,
    old_file: &Path,
    output: Option<&Path>,
    target: CompareTarget,
    opts: &RunOptions,
) -> Result<()> {
    println!("Comparing files:");
    println!("New file: {}", new_file.display());
    println!("Old file: {}", old_file.display());
    println!("Mode: {}", op.describe());

    let run = engine::run_compare(new_file, old_file, output, target, op.key_mode(), opts)?;
    print_compare_summary(&run, opts.sample_limit);
    Ok(())
}

fn print_compare_summary(run: &CompareRun, sample_limit: usize) {
    let r = &run.report;
    let unit = match r.mode {
        KeyMode::Url => "URL",
        KeyMode::Domain => "domain",
    };

    println!();
    println!("Loaded {} line(s) from old file ({} unique {unit}s)", r.retained, r.baseline_keys);
    if r.passed_through > 0 {
        println!("Kept {} unparseable old line(s) as-is", r.passed_through);
    }

    println!();
    println!("{}", rule());
    println!("COMPARISON DONE");
    println!("{}", rule());
    println!("URLs processed from new file: {}", r.processed);
    println!("New {unit}s found:             {}", r.appended);
    println!("Already present:              {}", r.duplicates);
    println!("Invalid URLs:                 {}", r.invalid);
    match run.target {
        CompareTarget::Merge => println!("Appended to:                  {}", run.output.display()),
        CompareTarget::NewOnly => println!("Saved to:                     {}", run.output.display()),
    }

    if r.appended == 0 {
        println!();
        println!("No new {unit}s found!");
        return;
    }

    if !r.samples.is_empty() {
        println!();
        if r.appended > r.samples.len() {
            println!("First {} new {unit}s:", r.samples.len());
        } else {
            println!("{} new {unit}(s):", r.samples.len());
        }
    }
    for (i, s) in r.samples.iter().enumerate() {
        match (r.mode, s.domain.as_deref()) {
            (KeyMode::Domain, Some(domain)) => println!("{:2}. {} => {}", i + 1, domain, s.url),
            _ => println!("{:2}. {}", i + 1, s.url),
        }
    }
    if r.appended > sample_limit {
        println!("    ... and {} more", r.appended - sample_limit);
    }
}
