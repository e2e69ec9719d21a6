//! Qt Linguist `.ts` writer.
//!
//! Produces the same layout lupdate writes, so a catalog that was read and
//! written back without changes stays byte-identical for lupdate output.

use std::fmt::Write as _;

use crate::core::data::{
    Catalog, Context, LENGTH_VARIANT_SEPARATOR, Message, Translation, TranslationValue,
    length_variants,
};

/// Serialize a catalog to TS XML.
pub fn write_ts(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS version=\"");
    out.push_str(&escape(&catalog.version));
    out.push('"');
    if let Some(language) = &catalog.language {
        push_attribute(&mut out, "language", language);
    }
    if let Some(source_language) = &catalog.source_language {
        push_attribute(&mut out, "sourcelanguage", source_language);
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        write_context(&mut out, context);
    }

    out.push_str("</TS>\n");
    out
}

fn write_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    push_element(out, 4, "name", &context.name);
    if let Some(comment) = &context.comment {
        push_element(out, 4, "comment", comment);
    }
    for message in &context.messages {
        write_message(out, message);
    }
    out.push_str("</context>\n");
}

fn write_message(out: &mut String, message: &Message) {
    out.push_str("    <message");
    if let Some(id) = &message.id {
        push_attribute(out, "id", id);
    }
    if message.numerus {
        push_attribute(out, "numerus", "yes");
    }
    out.push_str(">\n");

    for location in &message.locations {
        out.push_str("        <location");
        if let Some(filename) = &location.filename {
            push_attribute(out, "filename", filename);
        }
        if let Some(line) = &location.line {
            push_attribute(out, "line", line);
        }
        out.push_str("/>\n");
    }

    push_element(out, 8, "source", &message.source);
    if let Some(old_source) = &message.old_source {
        push_element(out, 8, "oldsource", old_source);
    }
    if let Some(comment) = &message.comment {
        push_element(out, 8, "comment", comment);
    }
    if let Some(old_comment) = &message.old_comment {
        push_element(out, 8, "oldcomment", old_comment);
    }
    if let Some(extra_comment) = &message.extra_comment {
        push_element(out, 8, "extracomment", extra_comment);
    }
    if let Some(translator_comment) = &message.translator_comment {
        push_element(out, 8, "translatorcomment", translator_comment);
    }

    write_translation(out, &message.translation);
    for extra in &message.extras {
        push_element(out, 8, &extra.name, &extra.text);
    }
    out.push_str("    </message>\n");
}

fn write_translation(out: &mut String, translation: &Translation) {
    out.push_str("        <translation");
    if let Some(kind) = translation.status.as_attribute() {
        push_attribute(out, "type", kind);
    }

    match &translation.value {
        TranslationValue::Single(text) if has_variants(text) => {
            push_attribute(out, "variants", "yes");
            out.push_str(">\n");
            push_variants(out, 12, text);
            out.push_str("        ");
        }
        TranslationValue::Single(text) => {
            out.push('>');
            out.push_str(&escape(text));
        }
        TranslationValue::Numerus(forms) => {
            out.push_str(">\n");
            for form in forms {
                if has_variants(form) {
                    out.push_str("            <numerusform variants=\"yes\">\n");
                    push_variants(out, 16, form);
                    out.push_str("            </numerusform>\n");
                } else {
                    push_element(out, 12, "numerusform", form);
                }
            }
            out.push_str("        ");
        }
    }

    out.push_str("</translation>\n");
}

fn has_variants(text: &str) -> bool {
    text.contains(LENGTH_VARIANT_SEPARATOR)
}

fn push_variants(out: &mut String, indent: usize, text: &str) {
    for variant in length_variants(text) {
        push_element(out, indent, "lengthvariant", variant);
    }
}

fn push_element(out: &mut String, indent: usize, tag: &str, text: &str) {
    let _ = writeln!(
        out,
        "{:indent$}<{tag}>{}</{tag}>",
        "",
        escape(text),
        indent = indent,
        tag = tag
    );
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", name, escape(value));
}

/// Escape text the way lupdate does.
///
/// Control characters other than tab, newline and carriage return cannot
/// appear in XML 1.0 and are written as `<byte value="x.."/>` elements.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "<byte value=\"x{:x}\"/>", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
