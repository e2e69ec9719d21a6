//! Rule implementations for tsling.
//!
//! Each rule is a pure function over parsed catalogs that takes only the
//! inputs it needs and returns its own issue type. A thin
//! `check_*_issues(&CheckContext)` wrapper feeds it from the project context.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared helpers (message positions, ignored contexts)
//! - `unfinished`: Messages still marked unfinished
//! - `empty_translation`: Finished messages without text
//! - `numerus_count`: Plural form counts per language
//! - `duplicate`: Duplicate message keys and context names
//! - `placeholder`: `%1` / `%n` markers lost or added in translation
//! - `obsolete`: Vanished and obsolete messages

pub mod duplicate;
pub mod empty_translation;
pub mod helpers;
pub mod numerus_count;
pub mod obsolete;
pub mod placeholder;
pub mod unfinished;
