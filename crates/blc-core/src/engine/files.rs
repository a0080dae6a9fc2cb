//! Whole-file reads and writes, and default output names.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyMode, RunError};

/// Suffix for a cleaned file (exact-URL mode), replacing a `.txt` extension.
pub const CLEAN_URL_SUFFIX: &str = "_bersih.txt";
/// Suffix for a cleaned file (one URL per domain).
pub const CLEAN_DOMAIN_SUFFIX: &str = "_bersih_domain.txt";
/// Suffix for a new-only compare output (exact-URL mode).
pub const NEW_URL_SUFFIX: &str = "_url_baru.txt";
/// Suffix for a new-only compare output (domain mode).
pub const NEW_DOMAIN_SUFFIX: &str = "_domain_baru.txt";

/// Reads a whole UTF-8 file.
///
/// A missing file is [`RunError::MissingFile`]; anything else, including
/// invalid UTF-8, is [`RunError::Read`].
pub fn read_input(path: &Path) -> Result<String, RunError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => RunError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => RunError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_output(path: &Path, contents: &str) -> Result<(), RunError> {
    fs::write(path, contents).map_err(|source| RunError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Default destination of a clean run: next to the input, `.txt` replaced
/// by `_bersih.txt` (url) or `_bersih_domain.txt` (domain).
///
/// `links.txt` → `links_bersih_domain.txt`; `links` → `links_bersih_domain.txt`.
pub fn default_clean_output(input: &Path, mode: KeyMode) -> PathBuf {
    let suffix = match mode {
        KeyMode::Url => CLEAN_URL_SUFFIX,
        KeyMode::Domain => CLEAN_DOMAIN_SUFFIX,
    };
    with_suffix(input, suffix)
}

/// Default destination of a new-only compare run, derived from the new file.
pub fn default_new_only_output(new_file: &Path, mode: KeyMode) -> PathBuf {
    let suffix = match mode {
        KeyMode::Url => NEW_URL_SUFFIX,
        KeyMode::Domain => NEW_DOMAIN_SUFFIX,
    };
    with_suffix(new_file, suffix)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let base = match path.extension() {
        Some(ext) if ext == "txt" => path.with_extension(""),
        _ => path.to_path_buf(),
    };
    let mut name: OsString = base.into_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
