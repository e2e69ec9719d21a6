//! Catalog engine: data model, reader, writer, plural rules and lookup.
//!
//! ## Module Structure
//!
//! - `data`: Catalog model and report positions
//! - `parsers`: `.ts` reader
//! - `writer`: `.ts` writer
//! - `plural`: Numerus form rules per language
//! - `translator`: Lookup with source-text fallback
//! - `file_scanner`: Catalog discovery
//! - `context`: `CheckContext`, shared state for project-wide commands

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod parsers;
pub mod plural;
pub mod translator;
pub mod writer;

pub use context::CheckContext;
pub use data::{
    Catalog, Context, LENGTH_VARIANT_SEPARATOR, LoadedCatalog, Message, MessageContext,
    MessageExtra, MessageKey, MessageLocation, SourceLocation, Translation, TranslationStatus,
    TranslationValue, length_variants, primary_variant,
};
pub use plural::PluralRule;
pub use translator::Translator;
