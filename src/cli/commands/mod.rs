pub mod analyze;
pub mod config;
pub mod interactive;
pub mod pairs;

use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::fs;

/// Reads the whole input file named by the user.
pub(crate) fn read_input(file: &str) -> AppResult<String> {
    let path = expand_tilde(file);
    tracing::debug!(path = %path.display(), "reading input");
    Ok(fs::read_to_string(path)?)
}
