//! Core data types for translation catalogs.
//!
//! ## Module Structure
//!
//! - `catalog`: The catalog model (Catalog, Context, Message, Translation, MessageKey)
//! - `message`: Report positions (MessageLocation, MessageContext)

pub mod catalog;
pub mod message;

pub use catalog::{
    Catalog, Context, DEFAULT_TS_VERSION, LENGTH_VARIANT_SEPARATOR, LoadedCatalog, Message,
    MessageExtra, MessageKey, SourceLocation, Translation, TranslationStatus, TranslationValue,
    length_variants, primary_variant,
};
pub use message::{MessageContext, MessageLocation};
