//! Captured metadata boxes
//!
//! Boxes are kept per type in discovery order; `ordinal` is the index
//! within that type. A box is either captured whole or not at all.

use log::debug;

use super::box_type::MetadataBoxType;
use super::container::{BoxEvent, ContainerScanner};
use super::policy::CapturePolicy;

/// One captured metadata box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBox {
    pub box_type: MetadataBoxType,
    /// Bytes as stored; Brotli-compressed when `is_compressed`
    pub data: Vec<u8>,
    /// Came from a `brob` box
    pub is_compressed: bool,
    /// Position among boxes of the same type
    pub ordinal: usize,
}

/// Metadata boxes captured from one container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataBoxStore {
    exif: Vec<MetadataBox>,
    xml: Vec<MetadataBox>,
    jumbf: Vec<MetadataBox>,
}

impl MetadataBoxStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the events of a scan under `policy`
    pub fn from_events<'a>(
        policy: &CapturePolicy,
        events: impl IntoIterator<Item = BoxEvent<'a>>,
    ) -> Self {
        let mut store = Self::new();
        for event in events {
            store.capture(policy, event);
        }
        store
    }

    /// Scan a container and capture its metadata boxes
    pub fn capture_container(policy: &CapturePolicy, container: &[u8]) -> Self {
        Self::from_events(policy, ContainerScanner::new(container))
    }

    fn list_mut(&mut self, box_type: MetadataBoxType) -> &mut Vec<MetadataBox> {
        match box_type {
            MetadataBoxType::Exif => &mut self.exif,
            MetadataBoxType::Xml => &mut self.xml,
            MetadataBoxType::Jumbf => &mut self.jumbf,
        }
    }

    /// Offer one box to the store; returns whether it was kept
    pub fn capture(&mut self, policy: &CapturePolicy, event: BoxEvent<'_>) -> bool {
        let box_type = event.box_type;
        if !policy.captures(box_type) {
            debug!("skipping {} box: capture disabled", box_type);
            return false;
        }

        let limit = policy.size_limit(box_type);
        if event.data.len() > limit {
            debug!(
                "dropping {} box: {} bytes exceeds limit {}",
                box_type,
                event.data.len(),
                limit
            );
            return false;
        }

        let list = self.list_mut(box_type);
        let ordinal = list.len();
        list.push(MetadataBox {
            box_type,
            data: event.data.to_vec(),
            is_compressed: event.is_compressed,
            ordinal,
        });
        true
    }

    pub fn boxes(&self, box_type: MetadataBoxType) -> &[MetadataBox] {
        match box_type {
            MetadataBoxType::Exif => &self.exif,
            MetadataBoxType::Xml => &self.xml,
            MetadataBoxType::Jumbf => &self.jumbf,
        }
    }

    pub fn count_of(&self, box_type: MetadataBoxType) -> usize {
        self.boxes(box_type).len()
    }

    /// Box `index` of `box_type`, None when out of range
    pub fn box_at(&self, box_type: MetadataBoxType, index: usize) -> Option<&MetadataBox> {
        self.boxes(box_type).get(index)
    }

    pub fn is_empty(&self) -> bool {
        MetadataBoxType::ALL.iter().all(|&t| self.count_of(t) == 0)
    }
}
