//! Record-level parsing of the magic database.
//!
//! # Module Organization
//!
//! - [`signature`]: checks the 12-byte file signature
//! - [`section`]: parses `[priority:filetype]` header lines
//! - [`content`]: parses rule lines, including payloads that span lines
//!
//! # File Structure
//!
//! ```text
//! ┌──────────────────────┐
//! │ MIME-Magic\0\n       │ ← signature::check()
//! ├──────────────────────┤
//! │ [50:image/png]\n     │ ← section::parse()
//! │ >0=<len><value>...\n │ ← content::parse()
//! │ 1>8=<len><value>...\n│
//! ├──────────────────────┤
//! │ [priority:type]\n    │
//! │ ...                  │
//! └──────────────────────┘
//! ```

pub(crate) mod content;
pub mod section;
pub mod signature;
