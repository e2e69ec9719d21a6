use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Lookup(LookupSummary),
    Stats(StatsSummary),
    Dump(DumpSummary),
    Fmt(FmtSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct LookupSummary {
    /// Translation, or the source text when there is none.
    pub text: String,
}

/// Progress of one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub file_path: String,
    pub language: Option<String>,
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Vanished and obsolete messages.
    pub obsolete: usize,
}

impl CatalogStats {
    /// Finished share of the active messages, in percent.
    pub fn completion(&self) -> f64 {
        let active = self.finished + self.unfinished;
        if active == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / active as f64
        }
    }
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStats>,
}

#[derive(Debug)]
pub struct DumpSummary {
    pub json: String,
}

#[derive(Debug)]
pub struct FmtSummary {
    /// Catalogs whose text differs from the writer output.
    pub changed_files: Vec<String>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub error: Option<String>,
}

/// Result of running tsling commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0.
    pub exit_on_errors: bool,
    /// All issues found, sorted.
    /// Empty for commands that do not validate.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog files the command looked at.
    pub catalogs_checked: usize,
}
