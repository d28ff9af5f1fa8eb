//! ICC profile subset
//!
//! Enough of ICC.1:2022 to write simple RGB and grayscale display
//! profiles and to pull the description out of arbitrary profiles.
//!
//! # Structure
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Tag data (may be shared between tags)

pub mod header;
pub mod reader;
pub mod tags;
pub mod writer;

mod error;
mod types;

pub use error::IccError;
pub use header::{ColorSpace, IccHeader, ProfileClass, ProfileVersion};
pub use reader::{TagEntry, read_description, read_tag_table, try_get_description, try_read_header};
pub use types::{S15Fixed16, TagSignature, TypeSignature, XyzNumber};
pub use writer::try_to_icc;
