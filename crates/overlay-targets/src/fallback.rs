#![cfg(not(windows))]

//! Platforms without a native window server binding enumerate nothing.
//! Embedding hosts on these platforms supply window stacking themselves.

use crate::bounds::PhysicalBounds;

#[derive(Clone, Copy, Debug)]
pub struct DisplayImpl(u64);

impl DisplayImpl {
    pub fn list() -> Vec<Self> {
        tracing::trace!("display enumeration unavailable on this platform");
        vec![]
    }

    pub fn primary() -> Option<Self> {
        None
    }

    pub fn raw_id(&self) -> u64 {
        self.0
    }

    pub fn name(&self) -> Option<String> {
        None
    }

    pub fn refresh_rate(&self) -> f64 {
        0.0
    }

    pub fn physical_bounds(&self) -> Option<PhysicalBounds> {
        None
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WindowImpl(u64);

impl WindowImpl {
    pub fn list() -> Vec<Self> {
        tracing::trace!("window enumeration unavailable on this platform");
        vec![]
    }

    pub fn from_id(_id: u64) -> Option<Self> {
        None
    }

    pub fn id(&self) -> u64 {
        self.0
    }

    pub fn windows_above(&self) -> Vec<Self> {
        vec![]
    }

    pub fn owner_pid(&self) -> Option<u32> {
        None
    }

    pub fn owner_name(&self) -> Option<String> {
        None
    }

    pub fn name(&self) -> Option<String> {
        None
    }

    pub fn physical_bounds(&self) -> Option<PhysicalBounds> {
        None
    }

    pub fn level(&self) -> i32 {
        crate::LEVEL_NORMAL
    }

    pub fn alpha(&self) -> f64 {
        1.0
    }

    pub fn is_onscreen(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{Display, Window, WindowId};

    #[test]
    fn enumerates_nothing() {
        assert!(Display::list().is_empty());
        assert!(Display::primary().is_none());
        assert!(Window::list().is_empty());
        assert!(Window::from_id(&WindowId::new(1)).is_none());
    }
}
