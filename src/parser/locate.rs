use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Find the single export in `dir` whose file name starts with `prefix`
/// (the `Ticket_List*` glob). More than one candidate is an error rather
/// than an arbitrary pick.
pub fn locate_ticket_file(dir: &Path, prefix: &str) -> Result<PathBuf, AppError> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        // Follows symlinks; a dangling link is skipped.
        if !entry.path().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(prefix));
        if matches {
            candidates.push(entry.path());
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(AppError::TicketFileNotFound {
            prefix: prefix.to_string(),
            dir: dir.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(AppError::AmbiguousTicketFile {
            prefix: prefix.to_string(),
            candidates: candidates
                .iter()
                .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
                .collect(),
        }),
    }
}
