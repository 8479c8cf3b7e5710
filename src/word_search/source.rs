use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use glob::glob;
use simple_log::{error, info};

use super::dictionary::{LoadStats, RankedDictionary};
use super::error::WordSearchError;

const GLOB_CHARS: [char; 3] = ['*', '?', '['];

pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Word files named by `pattern`: a single path, or a glob such as `dicts/*.txt`.
pub fn resolve_word_files(pattern: &str) -> Result<Vec<PathBuf>, WordSearchError> {
    let expanded = expand_home(pattern.trim());
    let target = expanded.display().to_string();
    if expanded.is_file() || !target.contains(GLOB_CHARS) {
        return Ok(vec![expanded]);
    }

    let mut files = Vec::new();
    for entry in glob(&target)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => {
                error!("{:?}", e);
            }
        }
    }

    if files.is_empty() {
        return Err(WordSearchError::NoMatch(target));
    }
    files.sort();
    Ok(files)
}

pub fn load_file(dict: &mut RankedDictionary, path: &Path) -> Result<LoadStats, WordSearchError> {
    let file = File::open(path).map_err(|source| WordSearchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loading words from {}", path.display());
    dict.load_words(BufReader::new(file).lines())
        .map_err(|e| e.with_path(path.to_path_buf()))
}

/// Loads every file matching `pattern`, stopping at the first failure.
pub fn load_pattern(
    dict: &mut RankedDictionary,
    pattern: &str,
) -> Result<LoadStats, WordSearchError> {
    let mut total = LoadStats::default();
    for path in resolve_word_files(pattern)? {
        let stats = load_file(dict, &path)?;
        total.inserted += stats.inserted;
        total.skipped += stats.skipped;
    }
    Ok(total)
}
