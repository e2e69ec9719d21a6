//! Qt Linguist `.ts` reader.
//!
//! Walks the XML event stream of a translation document and builds a
//! [`Catalog`]. Errors carry the 1-based line and column of the offending
//! element so they can be reported like any other issue.

use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use thiserror::Error;

use crate::{
    core::data::{
        Catalog, Context, DEFAULT_TS_VERSION, LENGTH_VARIANT_SEPARATOR, Message, MessageExtra,
        SourceLocation, Translation, TranslationStatus, TranslationValue,
    },
    utils::{build_line_index, offset_to_position},
};

/// Why a translation document was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TsParseError {
    #[error("malformed XML at {line}:{col}: {message}")]
    Xml {
        line: usize,
        col: usize,
        message: String,
    },
    #[error("expected <TS> root element, found <{found}>")]
    UnexpectedRoot {
        found: String,
        line: usize,
        col: usize,
    },
    #[error("document has no <TS> root element")]
    MissingRoot,
    #[error("<{parent}> at {line}:{col} has no <{element}> element")]
    MissingElement {
        element: &'static str,
        parent: &'static str,
        line: usize,
        col: usize,
    },
    #[error("invalid value \"{value}\" for attribute '{attribute}' at {line}:{col}")]
    InvalidAttribute {
        attribute: String,
        value: String,
        line: usize,
        col: usize,
    },
    #[error("unexpected end of document inside <{element}>")]
    UnexpectedEof {
        element: String,
        line: usize,
        col: usize,
    },
}

impl TsParseError {
    /// 1-based `(line, column)` of the error, when known.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Xml { line, col, .. }
            | Self::UnexpectedRoot { line, col, .. }
            | Self::MissingElement { line, col, .. }
            | Self::InvalidAttribute { line, col, .. }
            | Self::UnexpectedEof { line, col, .. } => Some((*line, *col)),
            Self::MissingRoot => None,
        }
    }
}

/// Parse a translation document from a string.
pub fn parse_ts(content: &str) -> Result<Catalog, TsParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    TsParser::new(content).parse()
}

/// Read and parse a translation document from disk.
pub fn parse_ts_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read TS file: {}", path.display()))?;
    parse_ts(&content).with_context(|| format!("Failed to parse TS file: {}", path.display()))
}

struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
    content: &'a str,
    line_index: Vec<usize>,
    /// Byte offset where the most recent event started.
    last_pos: usize,
}

/// Optional text children of `<message>`, in the order lupdate writes them.
#[derive(Default)]
struct MessageFields {
    source: Option<String>,
    old_source: Option<String>,
    comment: Option<String>,
    old_comment: Option<String>,
    extra_comment: Option<String>,
    translator_comment: Option<String>,
}

impl MessageFields {
    fn slot(&mut self, name: &[u8]) -> Option<&mut Option<String>> {
        match name {
            b"source" => Some(&mut self.source),
            b"oldsource" => Some(&mut self.old_source),
            b"comment" => Some(&mut self.comment),
            b"oldcomment" => Some(&mut self.old_comment),
            b"extracomment" => Some(&mut self.extra_comment),
            b"translatorcomment" => Some(&mut self.translator_comment),
            _ => None,
        }
    }
}

impl<'a> TsParser<'a> {
    fn new(content: &'a str) -> Self {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            content,
            line_index: build_line_index(content),
            last_pos: 0,
        }
    }

    fn position(&self, offset: usize) -> (usize, usize) {
        offset_to_position(self.content, &self.line_index, offset)
    }

    fn xml_error(&self, offset: usize, message: impl Into<String>) -> TsParseError {
        let (line, col) = self.position(offset);
        TsParseError::Xml {
            line,
            col,
            message: message.into(),
        }
    }

    fn eof_error(&self, element: &str, start: usize) -> TsParseError {
        let (line, col) = self.position(start);
        TsParseError::UnexpectedEof {
            element: element.to_string(),
            line,
            col,
        }
    }

    fn next(&mut self) -> Result<Event<'a>, TsParseError> {
        self.last_pos = self.reader.buffer_position() as usize;
        self.reader.read_event().map_err(|err| {
            let offset = self.reader.error_position() as usize;
            self.xml_error(offset, err.to_string())
        })
    }

    fn parse(mut self) -> Result<Catalog, TsParseError> {
        let catalog = loop {
            match self.next()? {
                Event::Start(e) => {
                    self.expect_root(&e)?;
                    let catalog = self.catalog_header(&e)?;
                    break self.parse_body(catalog)?;
                }
                Event::Empty(e) => {
                    self.expect_root(&e)?;
                    break self.catalog_header(&e)?;
                }
                Event::Text(t) => {
                    if !t.iter().all(u8::is_ascii_whitespace) {
                        return Err(self.xml_error(self.last_pos, "text outside of root element"));
                    }
                }
                Event::Eof => return Err(TsParseError::MissingRoot),
                _ => {}
            }
        };

        // Only whitespace, comments and processing instructions may follow.
        loop {
            match self.next()? {
                Event::Start(_) | Event::Empty(_) => {
                    return Err(self.xml_error(self.last_pos, "multiple root elements"));
                }
                Event::Text(t) if !t.iter().all(u8::is_ascii_whitespace) => {
                    return Err(self.xml_error(self.last_pos, "text outside of root element"));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(catalog)
    }

    fn expect_root(&self, e: &BytesStart<'_>) -> Result<(), TsParseError> {
        if e.name().as_ref() == b"TS" {
            return Ok(());
        }
        let (line, col) = self.position(self.last_pos);
        Err(TsParseError::UnexpectedRoot {
            found: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            line,
            col,
        })
    }

    fn attributes(&self, e: &BytesStart<'_>) -> Result<Vec<(String, String)>, TsParseError> {
        let mut result = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(self.last_pos, err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| self.xml_error(self.last_pos, err.to_string()))?
                .into_owned();
            result.push((key, value));
        }
        Ok(result)
    }

    fn catalog_header(&self, e: &BytesStart<'_>) -> Result<Catalog, TsParseError> {
        let mut catalog = Catalog::default();
        let mut version = None;
        for (key, value) in self.attributes(e)? {
            match key.as_str() {
                "version" => version = Some(value),
                "language" => catalog.language = Some(value),
                "sourcelanguage" => catalog.source_language = Some(value),
                _ => tracing::debug!("ignoring <TS> attribute '{}'", key),
            }
        }
        catalog.version = version.unwrap_or_else(|| DEFAULT_TS_VERSION.to_string());
        Ok(catalog)
    }

    fn parse_body(&mut self, mut catalog: Catalog) -> Result<Catalog, TsParseError> {
        let start = self.last_pos;
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    let context = self.parse_context(self.last_pos)?;
                    catalog.contexts.push(context);
                }
                Event::Empty(e) if e.name().as_ref() == b"context" => {
                    let (line, col) = self.position(self.last_pos);
                    return Err(TsParseError::MissingElement {
                        element: "name",
                        parent: "context",
                        line,
                        col,
                    });
                }
                Event::Start(e) => {
                    tracing::debug!(
                        "skipping <{}> inside <TS>",
                        String::from_utf8_lossy(e.name().as_ref())
                    );
                    self.skip_element(start)?;
                }
                Event::End(_) => return Ok(catalog),
                Event::Eof => return Err(self.eof_error("TS", start)),
                _ => {}
            }
        }
    }

    fn parse_context(&mut self, start: usize) -> Result<Context, TsParseError> {
        let (line, col) = self.position(start);
        let mut name = None;
        let mut context = Context::new("");
        context.line = line;

        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => name = Some(self.read_text("name")?),
                    b"comment" => context.comment = Some(self.read_text("comment")?),
                    b"message" => {
                        let message = self.parse_message(&e)?;
                        context.messages.push(message);
                    }
                    other => {
                        tracing::debug!(
                            "skipping <{}> inside <context>",
                            String::from_utf8_lossy(other)
                        );
                        self.skip_element(self.last_pos)?;
                    }
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"name" => name = Some(String::new()),
                    b"comment" => context.comment = Some(String::new()),
                    b"message" => {
                        let (line, col) = self.position(self.last_pos);
                        return Err(TsParseError::MissingElement {
                            element: "source",
                            parent: "message",
                            line,
                            col,
                        });
                    }
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => return Err(self.eof_error("context", start)),
                _ => {}
            }
        }

        context.name = name.ok_or(TsParseError::MissingElement {
            element: "name",
            parent: "context",
            line,
            col,
        })?;
        Ok(context)
    }

    fn parse_message(&mut self, e: &BytesStart<'_>) -> Result<Message, TsParseError> {
        let start = self.last_pos;
        let (line, col) = self.position(start);

        let mut numerus = false;
        let mut id = None;
        for (key, value) in self.attributes(e)? {
            match key.as_str() {
                "numerus" => numerus = value == "yes",
                "id" => id = Some(value),
                _ => tracing::debug!("ignoring <message> attribute '{}'", key),
            }
        }

        let mut fields = MessageFields::default();
        let mut translation = None;
        let mut locations = Vec::new();
        let mut extras = Vec::new();

        loop {
            match self.next()? {
                Event::Start(e) => {
                    let name = e.name();
                    if name.as_ref() == b"translation" {
                        translation = Some(self.parse_translation(&e, numerus, false)?);
                    } else if name.as_ref() == b"location" {
                        locations.push(self.source_location(&e)?);
                        self.skip_element(self.last_pos)?;
                    } else if fields.slot(name.as_ref()).is_some() {
                        let tag = String::from_utf8_lossy(name.as_ref()).into_owned();
                        let text = self.read_text(&tag)?;
                        if let Some(slot) = fields.slot(name.as_ref()) {
                            *slot = Some(text);
                        }
                    } else {
                        let tag = String::from_utf8_lossy(name.as_ref()).into_owned();
                        tracing::debug!("keeping <{}> inside <message> as extra", tag);
                        let text = self.read_text(&tag)?;
                        extras.push(MessageExtra::new(tag, text));
                    }
                }
                Event::Empty(e) => {
                    let name = e.name();
                    if name.as_ref() == b"translation" {
                        translation = Some(self.parse_translation(&e, numerus, true)?);
                    } else if name.as_ref() == b"location" {
                        locations.push(self.source_location(&e)?);
                    } else if let Some(slot) = fields.slot(name.as_ref()) {
                        *slot = Some(String::new());
                    } else {
                        let tag = String::from_utf8_lossy(name.as_ref()).into_owned();
                        extras.push(MessageExtra::new(tag, String::new()));
                    }
                }
                Event::End(_) => break,
                Event::Eof => return Err(self.eof_error("message", start)),
                _ => {}
            }
        }

        let missing = |element| TsParseError::MissingElement {
            element,
            parent: "message",
            line,
            col,
        };
        let source = fields.source.ok_or_else(|| missing("source"))?;
        let translation = translation.ok_or_else(|| missing("translation"))?;

        Ok(Message {
            id,
            source,
            old_source: fields.old_source,
            comment: fields.comment,
            old_comment: fields.old_comment,
            extra_comment: fields.extra_comment,
            translator_comment: fields.translator_comment,
            locations,
            numerus,
            translation,
            extras,
            line,
        })
    }

    fn parse_translation(
        &mut self,
        e: &BytesStart<'_>,
        numerus: bool,
        is_empty: bool,
    ) -> Result<Translation, TsParseError> {
        let start = self.last_pos;
        let mut status = TranslationStatus::Finished;
        for (key, value) in self.attributes(e)? {
            if key == "type" {
                status = TranslationStatus::from_attribute(&value).ok_or_else(|| {
                    let (line, col) = self.position(start);
                    TsParseError::InvalidAttribute {
                        attribute: key.clone(),
                        value: value.clone(),
                        line,
                        col,
                    }
                })?;
            }
        }

        let value = match (numerus, is_empty) {
            (true, true) => TranslationValue::Numerus(Vec::new()),
            (false, true) => TranslationValue::Single(String::new()),
            (true, false) => TranslationValue::Numerus(self.read_numerus_forms(start)?),
            (false, false) => TranslationValue::Single(self.read_text("translation")?),
        };

        Ok(Translation { status, value })
    }

    fn read_numerus_forms(&mut self, start: usize) -> Result<Vec<String>, TsParseError> {
        let mut forms = Vec::new();
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"numerusform" => {
                    forms.push(self.read_text("numerusform")?);
                }
                Event::Empty(e) if e.name().as_ref() == b"numerusform" => {
                    forms.push(String::new());
                }
                Event::Start(_) => self.skip_element(self.last_pos)?,
                Event::End(_) => return Ok(forms),
                Event::Eof => return Err(self.eof_error("translation", start)),
                // Indentation between <numerusform> elements.
                _ => {}
            }
        }
    }

    fn source_location(&self, e: &BytesStart<'_>) -> Result<SourceLocation, TsParseError> {
        let mut location = SourceLocation {
            filename: None,
            line: None,
        };
        for (key, value) in self.attributes(e)? {
            match key.as_str() {
                "filename" => location.filename = Some(value),
                "line" => location.line = Some(value),
                _ => {}
            }
        }
        Ok(location)
    }

    /// Read the text content of the element that was just opened.
    ///
    /// Entities are decoded and `<byte value=".."/>` escapes are turned back
    /// into the characters they stand for. Text is not trimmed.
    /// `<lengthvariant>` children are joined with [`LENGTH_VARIANT_SEPARATOR`].
    fn read_text(&mut self, tag: &str) -> Result<String, TsParseError> {
        let start = self.last_pos;
        let mut text = String::new();
        let mut variants: Vec<String> = Vec::new();
        loop {
            match self.next()? {
                Event::Text(t) => {
                    let decoded = t
                        .unescape()
                        .map_err(|err| self.xml_error(self.last_pos, err.to_string()))?;
                    text.push_str(&decoded);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::Empty(e) if e.name().as_ref() == b"byte" => {
                    text.push(self.byte_value(&e)?);
                }
                Event::Start(e) if e.name().as_ref() == b"lengthvariant" => {
                    variants.push(self.read_text("lengthvariant")?);
                }
                Event::Empty(e) if e.name().as_ref() == b"lengthvariant" => {
                    variants.push(String::new());
                }
                Event::Start(_) => self.skip_element(self.last_pos)?,
                Event::End(_) if variants.is_empty() => return Ok(text),
                // Text around the variants is indentation.
                Event::End(_) => {
                    return Ok(variants.join(&LENGTH_VARIANT_SEPARATOR.to_string()));
                }
                Event::Eof => return Err(self.eof_error(tag, start)),
                _ => {}
            }
        }
    }

    /// Decode `<byte value="x1b"/>` (hex) or `<byte value="27"/>` (decimal).
    fn byte_value(&self, e: &BytesStart<'_>) -> Result<char, TsParseError> {
        let value = self
            .attributes(e)?
            .into_iter()
            .find(|(key, _)| key == "value")
            .map(|(_, value)| value)
            .unwrap_or_default();

        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse::<u32>().ok(),
        };

        code.and_then(char::from_u32).ok_or_else(|| {
            let (line, col) = self.position(self.last_pos);
            TsParseError::InvalidAttribute {
                attribute: "value".to_string(),
                value,
                line,
                col,
            }
        })
    }

    /// Skip the element that was just opened, including all of its children.
    fn skip_element(&mut self, start: usize) -> Result<(), TsParseError> {
        let mut depth = 0usize;
        loop {
            match self.next()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                Event::Eof => return Err(self.eof_error("element", start)),
                _ => {}
            }
        }
    }
}
