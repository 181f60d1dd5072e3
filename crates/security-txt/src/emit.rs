//! Writes the formatted document to the conventional public paths.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::SecurityTxtConfig;
use crate::format::generate;

/// File name written at both locations.
pub const SECURITY_TXT_FILE_NAME: &str = "security.txt";

/// Directory under the public root holding the canonical copy.
pub const WELL_KNOWN_DIR: &str = ".well-known";

/// Paths written by a successful [`emit_files`] call, in write order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitOutcome {
    pub written: Vec<PathBuf>,
}

/// Errors surfaced while writing the document.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Formats `config` and writes `security.txt` under `public_dir`.
///
/// Creates `public_dir` and `public_dir/.well-known` as needed (a no-op when
/// they already exist) and overwrites any existing files. The `.well-known`
/// copy is written first; the web-root copy is skipped when
/// `config.disable_root` is set. Failures propagate immediately, so an error
/// on the second write leaves the first file in place.
pub fn emit_files(
    config: &SecurityTxtConfig,
    public_dir: &Path,
) -> Result<EmitOutcome, EmitError> {
    let content = generate(config);
    let well_known_dir = public_dir.join(WELL_KNOWN_DIR);

    create_dir(public_dir)?;
    create_dir(&well_known_dir)?;

    let mut outcome = EmitOutcome::default();

    let well_known_path = well_known_dir.join(SECURITY_TXT_FILE_NAME);
    write_file(&well_known_path, &content)?;
    outcome.written.push(well_known_path);

    if !config.disable_root {
        let root_path = public_dir.join(SECURITY_TXT_FILE_NAME);
        write_file(&root_path, &content)?;
        outcome.written.push(root_path);
    }

    Ok(outcome)
}

fn create_dir(path: &Path) -> Result<(), EmitError> {
    fs::create_dir_all(path).map_err(|source| EmitError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), EmitError> {
    fs::write(path, contents).map_err(|source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    })
}
