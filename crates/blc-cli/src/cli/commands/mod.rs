//! CLI command handlers. Each operation family is in its own file.

mod clean;
mod compare;

pub use clean::run_clean;
pub use compare::run_compare;

/// Width of the separator rule printed around summaries.
const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "═".repeat(RULE_WIDTH)
}
