//! Lookup command - translate one message the way a running application would.
//!
//! Prints the finished translation, or the source text when the message is
//! missing, unfinished, obsolete or empty. A fallback is not an error.

use anyhow::{Ok, Result};

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::core::{Translator, parsers::parse_ts_file};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let catalog = parse_ts_file(&cmd.file)?;
    let translator = Translator::new(&catalog);
    let comment = cmd.comment.as_deref();

    let text = match cmd.count {
        Some(n) => translator.translate_n(&cmd.context, &cmd.source, comment, n),
        None => translator
            .translate(&cmd.context, &cmd.source, comment)
            .into_owned(),
    };

    let form = cmd.count.map_or(0, |n| translator.form_index(n));
    if translator
        .translation_of(&cmd.context, &cmd.source, comment, form)
        .is_none()
    {
        tracing::debug!(
            "no finished translation for {}::\"{}\", using source text",
            cmd.context,
            cmd.source
        );
    }

    Ok(finish(
        CommandSummary::Lookup(LookupSummary { text }),
        Vec::new(),
        1,
        false,
    ))
}
