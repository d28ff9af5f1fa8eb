//! # meta-tests
//!
//! Integration testing support for jxlmeta.
//!
//! This crate provides:
//! - Builders for EXIF, XMP and JUMBF payloads and JPEG XL containers
//! - Wrappers around reference ICC readers (lcms2, moxcms)
//! - Seeded random and truncated inputs for robustness tests
//!
//! ## Reference Implementations
//!
//! - **lcms2**: Industry standard, full ICC support
//! - **moxcms**: Pure Rust ICC parser and transform engine

pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use fixtures::{ExifBuilder, boxed, brob, brotli_compress, container};

/// Route `log` output to the test harness; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
