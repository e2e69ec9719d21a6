//! File parsers for translation catalogs.
//!
//! - `ts`: Qt Linguist `.ts` (XML) reader

pub mod ts;

pub use ts::{TsParseError, parse_ts, parse_ts_file};
