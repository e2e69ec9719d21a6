use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Bytes read from the head of a `.ts` file to tell catalogs from TypeScript.
const SNIFF_LEN: u64 = 1024;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for catalogs.
pub struct ScanResult {
    /// Catalog paths, sorted.
    pub files: Vec<String>,
    /// Entries that could not be read.
    pub skipped_count: usize,
    /// `.ts` files that turned out not to be translation catalogs.
    pub non_catalog_count: usize,
}

pub fn scan_files(base_dir: &Path, includes: &[String], ignore_patterns: &[String]) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;
    let mut non_catalog_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => tracing::warn!("invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let roots: Vec<PathBuf> = if includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = base_dir.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten()),
                    Err(e) => tracing::warn!("invalid include pattern '{}': {}", inc, e),
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    tracing::warn!("include path does not exist: {}", path.display());
                }
            }
        }
        paths
    };

    for root in roots {
        for entry in WalkDir::new(&root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!("cannot access path: {}", e);
                    continue;
                }
            };
            let path = entry.path();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            let relative = path.strip_prefix(base_dir).unwrap_or(path);
            if glob_patterns
                .iter()
                .any(|p| p.matches_path(relative) || p.matches_path(path))
            {
                continue;
            }

            if !entry.file_type().is_file() || !has_ts_extension(path) {
                continue;
            }

            if is_translation_catalog(path) {
                files.push(path.to_string_lossy().into_owned());
            } else {
                tracing::debug!("skipping non-catalog file {}", path.display());
                non_catalog_count += 1;
            }
        }
    }

    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
        non_catalog_count,
    }
}

fn has_ts_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("ts")
}

/// Sniff the head of a `.ts` file for a `<TS>` root or `<!DOCTYPE TS>`.
///
/// TypeScript sources share the extension, so the name alone is not enough.
pub fn is_translation_catalog(path: &Path) -> bool {
    let mut head = Vec::new();
    let read = File::open(path).and_then(|file| file.take(SNIFF_LEN).read_to_end(&mut head));
    if read.is_err() {
        return false;
    }
    looks_like_catalog(&String::from_utf8_lossy(&head))
}

fn looks_like_catalog(head: &str) -> bool {
    head.contains("<!DOCTYPE TS>") || head.contains("<TS>") || head.contains("<TS ")
}
