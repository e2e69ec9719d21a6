//! Helpers shared by the rule implementations.

use crate::core::{Context, LoadedCatalog, Message, MessageContext, MessageLocation};

/// Report position of a message.
pub fn message_context(file_path: &str, context: &Context, message: &Message) -> MessageContext {
    MessageContext::new(
        MessageLocation::with_line(file_path, message.line),
        context.name.clone(),
        message.source.clone(),
        message.comment.clone(),
    )
}

/// All `(context, message)` pairs of a catalog, minus ignored contexts.
pub fn checked_messages<'a>(
    loaded: &'a LoadedCatalog,
    ignore_contexts: &'a [String],
) -> impl Iterator<Item = (&'a Context, &'a Message)> + 'a {
    loaded
        .catalog
        .messages()
        .filter(move |(context, _)| !ignore_contexts.iter().any(|name| name == &context.name))
}
