use std::{
    cell::OnceCell,
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    config::{Config, load_config},
    core::{
        data::{Catalog, LoadedCatalog},
        file_scanner::scan_files,
        parsers::parse_ts,
        plural::PluralRule,
    },
    issues::ParseErrorIssue,
};

/// Catalogs loaded from disk together with the files that failed to load.
struct CatalogData {
    catalogs: Vec<LoadedCatalog>,
    parse_errors: Vec<ParseErrorIssue>,
}

/// Shared state for commands that work on every catalog of a project.
///
/// Configuration and file discovery happen eagerly in [`CheckContext::new`];
/// catalogs are read and parsed on first access to [`CheckContext::catalogs`],
/// so a command that fails early never pays for parsing.
pub struct CheckContext {
    /// Loaded configuration (config file > defaults).
    pub config: Config,

    /// Project root directory.
    pub root_dir: PathBuf,

    /// Catalog files found under the include roots, sorted.
    pub files: Vec<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    catalogs: OnceCell<CatalogData>,
}

impl CheckContext {
    /// Load configuration from `root_dir` upwards and scan for catalogs.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is invalid.
    pub fn new(root_dir: &Path, verbose: bool) -> Result<Self> {
        let config_result = load_config(root_dir)?;
        Ok(Self::with_config(
            config_result.config,
            root_dir.to_path_buf(),
            verbose,
        ))
    }

    /// Scan `root_dir` with an already loaded configuration.
    pub fn with_config(config: Config, root_dir: PathBuf, verbose: bool) -> Self {
        let scan = scan_files(&root_dir, &config.includes, &config.ignores);
        tracing::debug!(
            "found {} catalog(s) under {} ({} unreadable, {} non-catalog .ts)",
            scan.files.len(),
            root_dir.display(),
            scan.skipped_count,
            scan.non_catalog_count
        );

        Self {
            config,
            root_dir,
            files: scan.files,
            verbose,
            catalogs: OnceCell::new(),
        }
    }

    /// Parsed catalogs, sorted by file path.
    pub fn catalogs(&self) -> &[LoadedCatalog] {
        &self.catalog_data().catalogs
    }

    /// Files that could not be read or parsed.
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.catalog_data().parse_errors
    }

    /// Language of a catalog, falling back to `defaultLanguage` from config.
    pub fn language_of<'a>(&'a self, catalog: &'a Catalog) -> Option<&'a str> {
        catalog
            .language
            .as_deref()
            .or(self.config.default_language.as_deref())
    }

    /// Plural rule of a catalog, `None` when its language is unknown.
    pub fn plural_rule_of(&self, catalog: &Catalog) -> Option<PluralRule> {
        self.language_of(catalog).and_then(PluralRule::for_language)
    }

    fn catalog_data(&self) -> &CatalogData {
        self.catalogs.get_or_init(|| load_catalogs(&self.files))
    }
}

fn load_catalogs(files: &[String]) -> CatalogData {
    let started = Instant::now();

    let results: Vec<Result<LoadedCatalog, ParseErrorIssue>> =
        files.par_iter().map(|path| load_catalog(path)).collect();

    let mut catalogs = Vec::new();
    let mut parse_errors = Vec::new();
    for result in results {
        match result {
            Ok(loaded) => catalogs.push(loaded),
            Err(issue) => parse_errors.push(issue),
        }
    }
    catalogs.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    parse_errors.sort_by(|a, b| a.file_path.cmp(&b.file_path));

    tracing::debug!(
        "parsed {} catalog(s), {} failed, in {:?}",
        catalogs.len(),
        parse_errors.len(),
        started.elapsed()
    );

    CatalogData {
        catalogs,
        parse_errors,
    }
}

fn load_catalog(path: &str) -> Result<LoadedCatalog, ParseErrorIssue> {
    let content = fs::read_to_string(path).map_err(|err| ParseErrorIssue {
        file_path: path.to_string(),
        position: None,
        error: format!("failed to read file: {}", err),
    })?;

    match parse_ts(&content) {
        Ok(catalog) => Ok(LoadedCatalog {
            file_path: path.to_string(),
            catalog,
        }),
        Err(err) => {
            tracing::debug!("failed to parse {}: {}", path, err);
            Err(ParseErrorIssue {
                file_path: path.to_string(),
                position: err.position(),
                error: err.to_string(),
            })
        }
    }
}
