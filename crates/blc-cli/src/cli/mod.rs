//! CLI for blc, the backlink list cleaner.

mod commands;

use anyhow::Result;
use blc_core::config;
use blc_core::engine::{CompareTarget, KeyMode, Operation, RunOptions};
use blc_core::url_model::PathPolicy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use commands::{run_clean, run_compare};

/// Deduplicate a backlink list, or add the entries of a new list that an old one lacks.
#[derive(Debug, Parser)]
#[command(name = "blc")]
#[command(about = "blc: clean duplicate backlinks or diff two backlink lists", long_about = None)]
pub struct Cli {
    /// File with one URL per line (the new file when using --compare).
    pub input_file: PathBuf,

    /// Output file. Clean mode defaults to <input>_bersih[_domain].txt;
    /// compare mode defaults to overwriting the old file.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Clean granularity: exact URL, or one URL per domain.
    #[arg(long, value_enum, default_value_t = ModeArg::Domain)]
    pub mode: ModeArg,

    /// Compare INPUT_FILE (new) against this old file and append what is new.
    #[arg(long, value_name = "OLD_FILE")]
    pub compare: Option<PathBuf>,

    /// Compare granularity when using --compare.
    #[arg(long, value_enum, default_value_t = ModeArg::Domain)]
    pub compare_mode: ModeArg,

    /// With --compare, write only the new entries instead of appending them
    /// to the old file (default output: <new>_url_baru.txt / <new>_domain_baru.txt).
    #[arg(long, requires = "compare")]
    pub new_only: bool,

    /// Trailing-slash policy for normalized URLs (overrides the config file).
    #[arg(long, value_enum, value_name = "POLICY")]
    pub path_policy: Option<PolicyArg>,

    /// Read configuration from this TOML file instead of ~/.config/blc/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Exact canonical URL.
    Url,
    /// One URL per domain (leading `www.` ignored).
    Domain,
}

impl From<ModeArg> for KeyMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Url => KeyMode::Url,
            ModeArg::Domain => KeyMode::Domain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Strip trailing slashes (`http://x.com/a/` -> `http://x.com/a`).
    Strip,
    /// Always end the path with a slash (`http://x.com/a` -> `http://x.com/a/`).
    TrailingSlash,
}

impl From<PolicyArg> for PathPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Strip => PathPolicy::StripTrailingSlash,
            PolicyArg::TrailingSlash => PathPolicy::TrailingSlash,
        }
    }
}

impl Cli {
    /// The operation this invocation performs, fixed once at startup.
    pub fn operation(&self) -> Operation {
        match self.compare {
            Some(_) => Operation::compare(self.compare_mode.into()),
            None => Operation::clean(self.mode.into()),
        }
    }

    pub fn compare_target(&self) -> CompareTarget {
        if self.new_only {
            CompareTarget::NewOnly
        } else {
            CompareTarget::Merge
        }
    }

    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load(self.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mut opts = RunOptions::from(&cfg);
        if let Some(policy) = self.path_policy {
            opts.path_policy = policy.into();
        }

        let op = self.operation();
        tracing::debug!(?op, policy = %opts.path_policy, "selected operation");

        match &self.compare {
            Some(old) => run_compare(
                op,
                &self.input_file,
                old,
                self.output.as_deref(),
                self.compare_target(),
                &opts,
            ),
            None => run_clean(op, &self.input_file, self.output.as_deref(), &opts),
        }
    }
}

#[cfg(test)]
mod tests;
