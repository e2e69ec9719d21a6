//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Every printer has a `*_to`
//! variant writing to any `Write` so output can be tested without a terminal.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CatalogStats, CommandResult, CommandSummary, FmtSummary, InitSummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, Severity};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(catalogs: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} - no issues found",
            plural(catalogs, "catalog", "catalogs")
        )
        .green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col) = loc.parts();

    // Print severity and message (cargo-style)
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} ({}, {})",
            FAILURE_MARK.red(),
            plural(total_problems, "problem", "problems"),
            plural(total_errors, "error", "errors").red(),
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.location().parts().1)
        .filter(|line| *line > 0)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Command Output
// ============================================================

pub fn print(result: &CommandResult) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    print_to(result, &mut stdout, &mut stderr);
}

pub fn print_to<W: Write, E: Write>(result: &CommandResult, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Check => {
            report_to(&result.issues, out);
            if result.issues.is_empty() {
                print_success_to(result.catalogs_checked, out);
            }
        }
        CommandSummary::Lookup(summary) => {
            let _ = writeln!(out, "{}", summary.text);
        }
        CommandSummary::Dump(summary) => {
            let _ = writeln!(out, "{}", summary.json);
        }
        CommandSummary::Stats(summary) => {
            report_to(&result.issues, out);
            print_stats_to(summary, out);
        }
        CommandSummary::Fmt(summary) => {
            report_to(&result.issues, out);
            print_fmt_to(summary, result.catalogs_checked, out);
        }
        CommandSummary::Init(summary) => {
            print_init_to(summary, out, err);
        }
    }
}

const STATS_HEADERS: [&str; 7] = [
    "File",
    "Language",
    "Messages",
    "Finished",
    "Unfinished",
    "Obsolete",
    "Done",
];

pub fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.catalogs.is_empty() {
        let _ = writeln!(writer, "No catalogs found");
        return;
    }

    let rows: Vec<[String; 7]> = summary.catalogs.iter().map(stats_row).collect();

    let mut widths = STATS_HEADERS.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header: [String; 7] = STATS_HEADERS.map(String::from);
    let _ = writeln!(writer, "{}", format_row(&header, &widths).bold());
    for row in &rows {
        let _ = writeln!(writer, "{}", format_row(row, &widths));
    }

    let total: usize = summary.catalogs.iter().map(|s| s.total).sum();
    let _ = writeln!(
        writer,
        "\n{} in {}",
        plural(total, "message", "messages"),
        plural(summary.catalogs.len(), "catalog", "catalogs")
    );
}

fn stats_row(stats: &CatalogStats) -> [String; 7] {
    [
        stats.file_path.clone(),
        stats.language.clone().unwrap_or_else(|| "-".to_string()),
        stats.total.to_string(),
        stats.finished.to_string(),
        stats.unfinished.to_string(),
        stats.obsolete.to_string(),
        format!("{:.1}%", stats.completion()),
    ]
}

/// Text columns are left aligned, number columns right aligned.
fn format_row(cells: &[String; 7], widths: &[usize; 7]) -> String {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        let padding = " ".repeat(width.saturating_sub(cell.width()));
        if index < 2 {
            line.push_str(cell);
            if index + 1 < cells.len() {
                line.push_str(&padding);
            }
        } else {
            line.push_str(&padding);
            line.push_str(cell);
        }
    }
    line
}

pub fn print_fmt_to<W: Write>(summary: &FmtSummary, catalogs: usize, writer: &mut W) {
    if summary.changed_files.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} already formatted",
                plural(catalogs, "catalog", "catalogs")
            )
            .green()
        );
        return;
    }

    let count = plural(summary.changed_files.len(), "file", "files");
    if summary.is_apply {
        let _ = writeln!(writer, "{} {}:", "Reformatted".green().bold(), count);
    } else {
        let _ = writeln!(writer, "{} {}:", "Would reformat".yellow().bold(), count);
    }
    for file in &summary.changed_files {
        let _ = writeln!(writer, "  {}", file);
    }
    if !summary.is_apply {
        let _ = writeln!(writer, "Run with {} to rewrite them.", "--apply".cyan());
    }
}

pub fn print_init_to<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(err, "Error: {}", error);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::commands::helper::finish;
    use crate::core::{MessageContext, MessageLocation};
    use crate::issues::{
        DuplicateIssue, ObsoleteIssue, ParseErrorIssue, UnfinishedIssue,
    };
    use crate::core::TranslationStatus;

    fn strip_ansi(s: &str) -> String {
        // Simple ANSI escape code stripper for testing
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // Skip until 'm'
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn render<F: FnOnce(&mut Vec<u8>)>(f: F) -> String {
        let mut output = Vec::new();
        f(&mut output);
        strip_ansi(&String::from_utf8(output).unwrap())
    }

    fn message(line: usize, context: &str, source: &str) -> MessageContext {
        MessageContext::new(
            MessageLocation::with_line("./nls/qt_ka.ts", line),
            context,
            source,
            None,
        )
    }

    #[test]
    fn test_report_empty() {
        let mut output = Vec::new();
        report_to(&[], &mut output);
        assert!(output.is_empty());
    }

    #[test]
    fn test_report_unfinished_issue() {
        let issue = Issue::Unfinished(UnfinishedIssue {
            context: message(12, "MAC_APPLICATION_MENU", "Hide Others"),
        });

        let output = render(|w| report_to(&[issue], w));
        assert_eq!(
            output,
            "warning: \"Hide Others\"  unfinished\n  \
             --> ./nls/qt_ka.ts:12:1\n   \
             = note: in MAC_APPLICATION_MENU\n\n\
             ✘ 1 problem (0 errors, 1 warning)\n"
        );
    }

    #[test]
    fn test_report_hint_and_summary() {
        let duplicate = Issue::Duplicate(DuplicateIssue {
            context: message(40, "QCupsJobWidget", "Top Secret"),
            overridden_at: 52,
        });
        let obsolete = Issue::Obsolete(ObsoleteIssue {
            context: message(8, "QDockWidget", "Float"),
            status: TranslationStatus::Vanished,
        });

        let output = render(|w| report_to(&[duplicate, obsolete], w));
        assert!(output.contains("error: \"Top Secret\"  duplicate"));
        assert!(output.contains("= hint: lookups use the last definition"));
        assert!(output.contains("= note: in QDockWidget, marked vanished"));
        assert!(output.ends_with("✘ 2 problems (1 error, 1 warning)\n"));
        // Sorted by line
        assert!(output.find("Float").unwrap() < output.find("Top Secret").unwrap());
    }

    #[test]
    fn test_report_parse_error_without_position() {
        let issue = Issue::ParseError(ParseErrorIssue {
            file_path: "./nls/empty.ts".to_string(),
            position: None,
            error: "document has no <TS> root element".to_string(),
        });

        let output = render(|w| report_to(&[issue], w));
        assert!(output.contains("error: \"document has no <TS> root element\"  parse-error"));
        assert!(output.contains("  --> ./nls/empty.ts\n"));
    }

    #[test]
    fn test_print_success() {
        let output = render(|w| print_success_to(2, w));
        assert_eq!(output, "✓ Checked 2 catalogs - no issues found\n");
        let output = render(|w| print_success_to(1, w));
        assert_eq!(output, "✓ Checked 1 catalog - no issues found\n");
    }

    #[test]
    fn test_print_stats() {
        let summary = StatsSummary {
            catalogs: vec![CatalogStats {
                file_path: "./nls/qt_ka.ts".to_string(),
                language: Some("ka_GE".to_string()),
                total: 4,
                finished: 3,
                unfinished: 1,
                obsolete: 0,
            }],
        };

        let output = render(|w| print_stats_to(&summary, w));
        assert_eq!(
            output,
            "File            Language  Messages  Finished  Unfinished  Obsolete   Done\n\
             ./nls/qt_ka.ts  ka_GE            4         3           1         0  75.0%\n\
             \n\
             4 messages in 1 catalog\n"
        );
    }

    #[test]
    fn test_print_stats_empty() {
        let summary = StatsSummary {
            catalogs: Vec::new(),
        };
        let output = render(|w| print_stats_to(&summary, w));
        assert_eq!(output, "No catalogs found\n");
    }

    #[test]
    fn test_print_fmt() {
        let summary = FmtSummary {
            changed_files: vec!["./nls/qt_ka.ts".to_string()],
            is_apply: false,
        };
        let output = render(|w| print_fmt_to(&summary, 2, w));
        assert_eq!(
            output,
            "Would reformat 1 file:\n  ./nls/qt_ka.ts\nRun with --apply to rewrite them.\n"
        );

        let summary = FmtSummary {
            changed_files: Vec::new(),
            is_apply: false,
        };
        let output = render(|w| print_fmt_to(&summary, 2, w));
        assert_eq!(output, "✓ 2 catalogs already formatted\n");
    }

    #[test]
    fn test_print_init_error_goes_to_stderr() {
        let result = finish(
            CommandSummary::Init(InitSummary {
                error: Some(".tslingrc.json already exists".to_string()),
            }),
            Vec::new(),
            0,
            true,
        );
        let mut out = Vec::new();
        let mut err = Vec::new();
        print_to(&result, &mut out, &mut err);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: .tslingrc.json already exists\n"
        );
    }
}
