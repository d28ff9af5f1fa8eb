//! Releasable profile handle
//!
//! A decoder hands out its embedded profile through a [`ProfileHandle`].
//! Releasing the handle drops the profile and any cached ICC bytes; every
//! later access fails with [`Error::Disposed`].

use log::trace;

use crate::error::{Error, Result};
use crate::profile::ColorProfile;

#[derive(Debug)]
struct HandleState {
    profile: ColorProfile,
    /// Generated once on first request
    icc_cache: Option<Vec<u8>>,
}

/// Owned access to a decoder-reported color profile
#[derive(Debug)]
pub struct ProfileHandle {
    state: Option<HandleState>,
}

impl ProfileHandle {
    pub fn new(profile: ColorProfile) -> Self {
        Self {
            state: Some(HandleState {
                profile,
                icc_cache: None,
            }),
        }
    }

    fn state(&self) -> Result<&HandleState> {
        self.state.as_ref().ok_or(Error::Disposed)
    }

    pub fn is_released(&self) -> bool {
        self.state.is_none()
    }

    /// Drop the wrapped profile. Calling this more than once is harmless.
    pub fn release(&mut self) {
        if self.state.take().is_some() {
            trace!("profile handle released");
        }
    }

    pub fn profile(&self) -> Result<&ColorProfile> {
        self.state().map(|s| &s.profile)
    }

    /// ICC bytes for the profile, generated on first call and cached
    ///
    /// `Ok(None)` when the profile has no ICC equivalent.
    pub fn try_as_icc(&mut self) -> Result<Option<&[u8]>> {
        let state = self.state.as_mut().ok_or(Error::Disposed)?;
        if state.icc_cache.is_none() {
            state.icc_cache = state.profile.try_as_icc().map(|icc| icc.into_owned());
        }
        Ok(state.icc_cache.as_deref())
    }

    pub fn description(&self) -> Result<Option<String>> {
        self.state().map(|s| s.profile.description())
    }

    /// A fresh handle over a copy of the profile
    pub fn try_clone(&self) -> Result<Self> {
        self.state().map(|s| Self::new(s.profile.clone()))
    }
}

impl From<ColorProfile> for ProfileHandle {
    fn from(profile: ColorProfile) -> Self {
        Self::new(profile)
    }
}
