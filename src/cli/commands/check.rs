use std::collections::HashSet;

use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        duplicate::{check_duplicate_context_issues, check_duplicate_issues},
        empty_translation::check_empty_translation_issues,
        numerus_count::check_numerus_count_issues,
        obsolete::check_obsolete_issues,
        placeholder::check_placeholder_issues,
        unfinished::check_unfinished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unfinished,
    EmptyTranslation,
    NumerusCount,
    Duplicate,
    DuplicateContext,
    Placeholder,
    Obsolete,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::EmptyTranslation,
            CheckRule::NumerusCount,
            CheckRule::Duplicate,
            CheckRule::DuplicateContext,
            CheckRule::Placeholder,
            CheckRule::Obsolete,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common.root_dir(), cmd.common.verbose)?;

    let mut rules = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules
    };
    let mut seen = HashSet::new();
    rules.retain(|rule| seen.insert(*rule));

    let mut all_issues: Vec<Issue> = run_rules(&ctx, &rules);

    let parse_errors = ctx.parse_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    Ok(finish(CommandSummary::Check, all_issues, ctx.files.len(), true))
}

fn run_rules(ctx: &CheckContext, rules: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::EmptyTranslation => {
                let issues = check_empty_translation_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptyTranslation));
            }
            CheckRule::NumerusCount => {
                let issues = check_numerus_count_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::NumerusCount));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Duplicate));
            }
            CheckRule::DuplicateContext => {
                let issues = check_duplicate_context_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateContext));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholder_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Placeholder));
            }
            CheckRule::Obsolete => {
                let issues = check_obsolete_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Obsolete));
            }
        }
    }

    all_issues
}
