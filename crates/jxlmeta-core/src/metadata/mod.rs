//! Auxiliary metadata boxes
//!
//! A JPEG XL container may carry EXIF, XMP and JUMBF boxes, each either
//! plain or wrapped in a Brotli-compressed `brob` box. Scanning yields
//! [`BoxEvent`]s in file order; [`MetadataBoxStore`] keeps the ones a
//! [`CapturePolicy`] admits.
//!
//! ```ignore
//! let store = MetadataBoxStore::capture_container(&CapturePolicy::exif_only(), &file);
//! if let Some(exif) = store.box_at(MetadataBoxType::Exif, 0).and_then(|b| b.parse_exif()) {
//!     println!("{:?}", exif.try_get_orientation());
//! }
//! ```

pub mod box_type;
pub mod container;
pub mod payload;
pub mod policy;
pub mod store;

pub use box_type::MetadataBoxType;
pub use container::{BoxEvent, ContainerScanner, JXL_SIGNATURE, scan};
pub use payload::{contains_text, jumbf_label};
pub use policy::CapturePolicy;
pub use store::{MetadataBox, MetadataBoxStore};
