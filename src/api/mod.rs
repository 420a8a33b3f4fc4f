//! Async HTTP clients for the upstream services.
//!
//! - [`off`] — Open Food Facts product lookups; returns `Ok(None)` when the
//!   barcode is unknown and `Err` on network or decode failures.
//! - [`vision`] — Gemini `generateContent` calls backing the image object
//!   counter.

pub mod off;
pub mod vision;
