//! One full invocation: read inputs, run the pure algorithm, write once.
//!
//! All reads finish before the single write, so a missing or unreadable
//! input never leaves a partial output behind.

use std::path::{Path, PathBuf};

use super::files::{default_clean_output, default_new_only_output, read_input, write_output};
use super::{clean_lines, compare_lines, CleanReport, CompareReport, KeyMode, RunError, RunOptions};

/// What a compare run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareTarget {
    /// Baseline (canonicalized) followed by the new entries. Without an
    /// explicit output the baseline file is overwritten in place.
    #[default]
    Merge,
    /// Only the new entries. Without an explicit output they go to a name
    /// derived from the new file; the baseline is never touched.
    NewOnly,
}

/// Outcome of [`run_clean`].
#[derive(Debug, Clone)]
pub struct CleanRun {
    pub output: PathBuf,
    pub report: CleanReport,
}

/// Outcome of [`run_compare`].
#[derive(Debug, Clone)]
pub struct CompareRun {
    pub output: PathBuf,
    pub target: CompareTarget,
    pub report: CompareReport,
}

/// Cleans `input` and writes the result to `output` (or the derived default).
pub fn run_clean(
    input: &Path,
    output: Option<&Path>,
    mode: KeyMode,
    opts: &RunOptions,
) -> Result<CleanRun, RunError> {
    let text = read_input(input)?;
    let outcome = clean_lines(text.lines(), mode, opts);

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_clean_output(input, mode));
    write_output(&output, &outcome.render())?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        %mode,
        unique = outcome.report.unique,
        duplicates = outcome.report.duplicates,
        invalid = outcome.report.invalid,
        "clean finished"
    );

    Ok(CleanRun {
        output,
        report: outcome.report,
    })
}

/// Compares `new_file` against the baseline `old_file` and writes the result.
pub fn run_compare(
    new_file: &Path,
    old_file: &Path,
    output: Option<&Path>,
    target: CompareTarget,
    mode: KeyMode,
    opts: &RunOptions,
) -> Result<CompareRun, RunError> {
    let old_text = read_input(old_file)?;
    let new_text = read_input(new_file)?;
    let outcome = compare_lines(old_text.lines(), new_text.lines(), mode, opts);

    let (output, contents) = match target {
        CompareTarget::Merge => (
            output.map_or_else(|| old_file.to_path_buf(), Path::to_path_buf),
            outcome.render_merged(),
        ),
        CompareTarget::NewOnly => (
            output.map_or_else(
                || default_new_only_output(new_file, mode),
                Path::to_path_buf,
            ),
            outcome.render_new_only(),
        ),
    };
    write_output(&output, &contents)?;

    tracing::info!(
        new = %new_file.display(),
        old = %old_file.display(),
        output = %output.display(),
        %mode,
        ?target,
        appended = outcome.report.appended,
        duplicates = outcome.report.duplicates,
        invalid = outcome.report.invalid,
        "compare finished"
    );

    Ok(CompareRun {
        output,
        target,
        report: outcome.report,
    })
}
